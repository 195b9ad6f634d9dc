pub mod boundary;
pub mod bounding;
pub mod eos;
pub mod euler1d;
pub mod flux_assembly;
pub mod geometric;
pub mod mesh;
pub mod riemann_solver;
pub mod scalar_registry;
pub mod state;
