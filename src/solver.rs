use std::path::PathBuf;

use crate::disc::{
    euler1d::{Disc1dEuler, RiemannProblem},
    mesh::mesh1d::Mesh1d,
    riemann_solver::FluxStatistics,
    scalar_registry::ScalarRegistry,
    state::ConservedFields,
};
use crate::error::Result;

pub struct FlowParameters {
    pub hcr: f64,
}
pub struct SolverParameters {
    pub cfl: f64,
    pub final_time: f64,
    pub final_step: usize,
    // blending between Roe-averaged and arithmetic-mean sound speed
    pub k_roe: f64,
    pub rho_min: f64,
    pub p_min: f64,
    pub output_interval: usize,
    pub output_dir: Option<PathBuf>,
}
pub struct MeshParameters {
    pub cell_num: usize,
    pub left_coord: f64,
    pub right_coord: f64,
    pub area: f64,
    pub mesh_velocity: f64,
}

pub struct Solver<'a> {
    pub fields: ConservedFields,
    pub disc: Disc1dEuler<'a>,
    pub solver_params: &'a SolverParameters,
}
impl<'a> Solver<'a> {
    pub fn new(
        mesh: Mesh1d,
        flow_params: &FlowParameters,
        registry: &'a ScalarRegistry,
        solver_params: &'a SolverParameters,
    ) -> Self {
        let fields = ConservedFields::zeros(mesh.elem_num, registry.len());
        let disc = Disc1dEuler::new(mesh, flow_params, registry, solver_params);
        Self {
            fields,
            disc,
            solver_params,
        }
    }
    pub fn solve(&mut self, problem: &RiemannProblem) -> Result<FluxStatistics> {
        self.disc.initialize_solution(&mut self.fields, problem)?;
        self.disc.solve(&mut self.fields)
    }
}
