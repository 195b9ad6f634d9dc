use std::path::PathBuf;

use nalgebra::Vector3;
use ndarray::Array1;

use crate::{
    disc::{
        boundary::BoundaryType,
        euler1d::RiemannProblem,
        mesh::mesh1d::Mesh1d,
        scalar_registry::ScalarRegistry,
        state::PrimitiveState,
    },
    error::{FluxError, Result},
    io::param_parser::{BoundaryParser, SolverParamParser, StateParser},
    solver::{FlowParameters, MeshParameters, SolverParameters},
};

/// Everything a run needs, built and validated from one parameter file.
pub struct RunSetup {
    pub flow_params: FlowParameters,
    pub solver_params: SolverParameters,
    pub mesh_params: MeshParameters,
    pub registry: ScalarRegistry,
    pub problem: RiemannProblem,
    pub left_boundary: BoundaryType,
    pub right_boundary: BoundaryType,
}

pub fn initialize_params_by_file(file_path: &str) -> Result<RunSetup> {
    let parser = SolverParamParser::parse(file_path)?;
    initialize_params(parser)
}

pub fn initialize_params(parser: SolverParamParser) -> Result<RunSetup> {
    check_parameters(&parser)?;
    let registry = ScalarRegistry::new(parser.scalars.iter().cloned())?;
    let problem = RiemannProblem {
        interface: parser.interface,
        left: to_primitive(&parser.left_state, &registry)?,
        right: to_primitive(&parser.right_state, &registry)?,
    };
    let left_boundary = to_boundary(&parser.left_boundary, &registry)?;
    let right_boundary = to_boundary(&parser.right_boundary, &registry)?;
    let flow_params = FlowParameters { hcr: parser.hcr };
    let solver_params = SolverParameters {
        cfl: parser.cfl,
        final_time: parser.final_time,
        final_step: parser.final_step,
        k_roe: parser.k_roe,
        rho_min: parser.rho_min,
        p_min: parser.p_min,
        output_interval: parser.output_interval,
        output_dir: parser.output_dir.map(PathBuf::from),
    };
    let mesh_params = MeshParameters {
        cell_num: parser.cell_num,
        left_coord: parser.left_coord,
        right_coord: parser.right_coord,
        area: parser.area,
        mesh_velocity: parser.mesh_velocity,
    };
    Ok(RunSetup {
        flow_params,
        solver_params,
        mesh_params,
        registry,
        problem,
        left_boundary,
        right_boundary,
    })
}

pub fn initialize_mesh1d(
    mesh_params: &MeshParameters,
    left_boundary: BoundaryType,
    right_boundary: BoundaryType,
) -> Mesh1d {
    let mut mesh = Mesh1d::new(
        mesh_params.cell_num,
        mesh_params.left_coord,
        mesh_params.right_coord,
        mesh_params.area,
        left_boundary,
        right_boundary,
    );
    mesh.set_uniform_velocity(mesh_params.mesh_velocity);
    mesh
}

fn check_parameters(parser: &SolverParamParser) -> Result<()> {
    let invalid = |msg: String| Err(FluxError::InvalidParameter(msg));
    if !(0.0..=1.0).contains(&parser.k_roe) {
        return invalid(format!("k_roe must lie in [0, 1], got {}", parser.k_roe));
    }
    if !(parser.cfl > 0.0) {
        return invalid(format!("cfl must be positive, got {}", parser.cfl));
    }
    if !(parser.hcr > 1.0) {
        return invalid(format!("hcr must exceed 1, got {}", parser.hcr));
    }
    if parser.cell_num < 2 {
        return invalid(format!("cell_num must be at least 2, got {}", parser.cell_num));
    }
    if !(parser.right_coord > parser.left_coord) {
        return invalid(format!(
            "empty domain [{}, {}]",
            parser.left_coord, parser.right_coord
        ));
    }
    if !(parser.area > 0.0) {
        return invalid(format!("area must be positive, got {}", parser.area));
    }
    if !(parser.rho_min > 0.0 && parser.p_min > 0.0) {
        return invalid("rho_min and p_min must be positive".to_string());
    }
    Ok(())
}

fn to_primitive(state: &StateParser, registry: &ScalarRegistry) -> Result<PrimitiveState> {
    if !(state.rho > 0.0 && state.p > 0.0) {
        return Err(FluxError::InvalidParameter(format!(
            "state needs positive density and pressure, got rho = {}, p = {}",
            state.rho, state.p
        )));
    }
    registry.check_len(state.mass_fractions.len())?;
    Ok(PrimitiveState {
        rho: state.rho,
        u: Vector3::new(state.u, 0.0, 0.0),
        p: state.p,
        mass_fractions: Array1::from(state.mass_fractions.clone()),
    })
}

fn to_boundary(boundary: &BoundaryParser, registry: &ScalarRegistry) -> Result<BoundaryType> {
    Ok(match boundary {
        BoundaryParser::Wall => BoundaryType::Wall,
        BoundaryParser::ZeroGradient => BoundaryType::ZeroGradient,
        BoundaryParser::FixedValue(state) => BoundaryType::FixedValue(to_primitive(state, registry)?),
    })
}
