use std::env;
use std::process;

use reacting_ale_flux::{
    error::Result,
    initialization::{initialize_mesh1d, initialize_params_by_file},
    io::logger::init_logging,
    solver::Solver,
};

fn main() {
    let mut args = env::args().skip(1);
    let param_file = args
        .next()
        .unwrap_or_else(|| "inputs/solverparam.json".to_string());
    let log_level = args.next();
    init_logging(log_level.as_deref());
    if let Err(err) = run(&param_file) {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn run(param_file: &str) -> Result<()> {
    log::info!("reading parameters from {}", param_file);
    let setup = initialize_params_by_file(param_file)?;
    let mesh = initialize_mesh1d(
        &setup.mesh_params,
        setup.left_boundary.clone(),
        setup.right_boundary.clone(),
    );
    let mut solver = Solver::new(
        mesh,
        &setup.flow_params,
        &setup.registry,
        &setup.solver_params,
    );
    let stats = solver.solve(&setup.problem)?;
    log::info!(
        "flux regions: left upwind {}, left star {}, right star {}, right upwind {}",
        stats.left_upwind,
        stats.left_star,
        stats.right_star,
        stats.right_upwind
    );
    log::info!(
        "contact speed: {} fallbacks, {} clamped",
        stats.degenerate_contact,
        stats.clamped_contact
    );
    Ok(())
}
