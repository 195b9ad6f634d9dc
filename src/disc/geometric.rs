use nalgebra::Vector3;

use crate::disc::boundary::BoundaryPosition;

/// Geometry of one face as seen by the flux evaluator: area vector `sf`
/// (normal times area), its magnitude `mag_sf`, and the face-normal mesh speed
/// (velocity of the face along `sf / mag_sf`, zero on a static mesh).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGeometry {
    pub sf: Vector3<f64>,
    pub mag_sf: f64,
    pub mesh_speed: f64,
}
impl FaceGeometry {
    pub fn new(sf: Vector3<f64>) -> Self {
        Self {
            sf,
            mag_sf: sf.norm(),
            mesh_speed: 0.0,
        }
    }
    pub fn moving(sf: Vector3<f64>, face_velocity: &Vector3<f64>) -> Self {
        let mag_sf = sf.norm();
        Self {
            sf,
            mag_sf,
            mesh_speed: face_velocity.dot(&sf) / mag_sf,
        }
    }
    pub fn unit_normal(&self) -> Vector3<f64> {
        self.sf / self.mag_sf
    }
    /// Same face seen from the neighbour cell.
    pub fn reversed(&self) -> Self {
        Self {
            sf: -self.sf,
            mag_sf: self.mag_sf,
            mesh_speed: -self.mesh_speed,
        }
    }
    pub fn is_consistent(&self) -> bool {
        self.mag_sf > 0.0 && (self.sf.norm() - self.mag_sf).abs() <= 1e-10 * self.mag_sf.max(1.0)
    }
}

pub trait Geometric1D {
    /// Outward normal of an element at its left or right end.
    fn compute_ref_normal(side: BoundaryPosition) -> Vector3<f64> {
        match side {
            BoundaryPosition::Left => -Vector3::x(),
            BoundaryPosition::Right => Vector3::x(),
        }
    }
    fn compute_interval_length(x: &[f64]) -> f64 {
        x[1] - x[0]
    }
}
