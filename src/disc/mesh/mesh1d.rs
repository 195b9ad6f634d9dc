use nalgebra::Vector3;
use ndarray::Array1;

use crate::disc::boundary::{BoundaryPatch1d, BoundaryPosition, BoundaryType};
use crate::disc::geometric::{FaceGeometry, Geometric1D};

#[derive(Clone, Debug)]
pub struct Node1d {
    pub x: f64,
    // normal velocity along +x
    pub velocity: f64,
}
#[derive(Clone, Debug)]
pub struct Element1d {
    pub inodes: [usize; 2],
    pub volume: f64,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceNeighbour {
    Cell(usize),
    Boundary(usize),
}
#[derive(Clone, Debug)]
pub struct Face1d {
    pub inode: usize,
    pub owner: usize,
    pub neighbour: FaceNeighbour,
    // outward from the owner
    pub ref_normal: Vector3<f64>,
}

/// Finite-volume mesh of a straight duct with constant cross-section `area`.
/// One face per node; interior faces point from cell `i - 1` to cell `i`,
/// boundary faces point out of the domain.
#[derive(Clone, Debug)]
pub struct Mesh1d {
    pub nodes: Vec<Node1d>,
    pub elements: Vec<Element1d>,
    pub faces: Vec<Face1d>,
    pub boundary_patches: Vec<BoundaryPatch1d>,
    pub area: f64,
    pub elem_num: usize,
    pub node_num: usize,
}
impl Geometric1D for Mesh1d {}
impl Mesh1d {
    pub fn new(
        elem_num: usize,
        left_coord: f64,
        right_coord: f64,
        area: f64,
        left_boundary: BoundaryType,
        right_boundary: BoundaryType,
    ) -> Self {
        let node_num = elem_num + 1;
        let dx = (right_coord - left_coord) / elem_num as f64;
        let nodes: Vec<Node1d> = (0..node_num)
            .map(|i| Node1d {
                x: left_coord + i as f64 * dx,
                velocity: 0.0,
            })
            .collect();
        let elements: Vec<Element1d> = (0..elem_num)
            .map(|i| Element1d {
                inodes: [i, i + 1],
                volume: dx * area,
            })
            .collect();
        let boundary_patches = vec![
            BoundaryPatch1d {
                iface: 0,
                position: BoundaryPosition::Left,
                boundary_type: left_boundary,
            },
            BoundaryPatch1d {
                iface: node_num - 1,
                position: BoundaryPosition::Right,
                boundary_type: right_boundary,
            },
        ];
        let mut faces = Vec::with_capacity(node_num);
        faces.push(Face1d {
            inode: 0,
            owner: 0,
            neighbour: FaceNeighbour::Boundary(0),
            ref_normal: Self::compute_ref_normal(BoundaryPosition::Left),
        });
        for inode in 1..node_num - 1 {
            faces.push(Face1d {
                inode,
                owner: inode - 1,
                neighbour: FaceNeighbour::Cell(inode),
                ref_normal: Self::compute_ref_normal(BoundaryPosition::Right),
            });
        }
        faces.push(Face1d {
            inode: node_num - 1,
            owner: elem_num - 1,
            neighbour: FaceNeighbour::Boundary(1),
            ref_normal: Self::compute_ref_normal(BoundaryPosition::Right),
        });
        Self {
            nodes,
            elements,
            faces,
            boundary_patches,
            area,
            elem_num,
            node_num,
        }
    }
    pub fn face_geometry(&self, face: &Face1d) -> FaceGeometry {
        let node = &self.nodes[face.inode];
        FaceGeometry::moving(face.ref_normal * self.area, &(Vector3::x() * node.velocity))
    }
    pub fn cell_centres(&self) -> Array1<f64> {
        self.elements
            .iter()
            .map(|elem| 0.5 * (self.nodes[elem.inodes[0]].x + self.nodes[elem.inodes[1]].x))
            .collect()
    }
    pub fn cell_volumes(&self) -> Array1<f64> {
        self.elements.iter().map(|elem| elem.volume).collect()
    }
    pub fn cell_length(&self, ielem: usize) -> f64 {
        let [i0, i1] = self.elements[ielem].inodes;
        Self::compute_interval_length(&[self.nodes[i0].x, self.nodes[i1].x])
    }
    pub fn set_uniform_velocity(&mut self, velocity: f64) {
        for node in self.nodes.iter_mut() {
            node.velocity = velocity;
        }
    }
    /// Advance node positions over `dt` and recompute cell volumes. For
    /// piecewise-linear node motion the volume change equals the swept face
    /// volumes, so free-stream states stay uniform.
    pub fn move_nodes(&mut self, dt: f64) {
        for node in self.nodes.iter_mut() {
            node.x += dt * node.velocity;
        }
        for ielem in 0..self.elem_num {
            self.elements[ielem].volume = self.cell_length(ielem) * self.area;
        }
    }
}
