use std::fs;

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use super::{
    bounding::bound_fields,
    eos::IdealGas,
    flux_assembly::{accumulate_residuals, compute_face_fluxes},
    mesh::mesh1d::Mesh1d,
    riemann_solver::{FluxDiagnostics, FluxStatistics},
    scalar_registry::ScalarRegistry,
    state::{ConservedFields, PrimitiveState},
};
use crate::{
    error::{FluxError, Result},
    io::write_to_csv::write_to_csv,
    solver::{FlowParameters, SolverParameters},
};

/// Two uniform states separated at `interface`.
#[derive(Clone, Debug)]
pub struct RiemannProblem {
    pub interface: f64,
    pub left: PrimitiveState,
    pub right: PrimitiveState,
}

/// First-order explicit finite-volume discretisation of the reacting Euler
/// equations on a 1D ALE mesh.
pub struct Disc1dEuler<'a> {
    pub current_time: f64,
    pub current_step: usize,
    pub mesh: Mesh1d,
    eos: IdealGas,
    registry: &'a ScalarRegistry,
    solver_param: &'a SolverParameters,
    diagnostics: FluxDiagnostics,
}
impl<'a> Disc1dEuler<'a> {
    pub fn new(
        mesh: Mesh1d,
        flow_param: &FlowParameters,
        registry: &'a ScalarRegistry,
        solver_param: &'a SolverParameters,
    ) -> Disc1dEuler<'a> {
        Disc1dEuler {
            current_time: 0.0,
            current_step: 0,
            mesh,
            eos: IdealGas::new(flow_param.hcr),
            registry,
            solver_param,
            diagnostics: FluxDiagnostics::new(),
        }
    }
    pub fn eos(&self) -> &IdealGas {
        &self.eos
    }
    pub fn statistics(&self) -> FluxStatistics {
        self.diagnostics.snapshot()
    }
    pub fn initialize_solution(
        &self,
        fields: &mut ConservedFields,
        problem: &RiemannProblem,
    ) -> Result<()> {
        self.registry.check_len(fields.scalar_num())?;
        self.registry.check_len(problem.left.mass_fractions.len())?;
        self.registry.check_len(problem.right.mass_fractions.len())?;
        let left = problem.left.to_conserved(&self.eos);
        let right = problem.right.to_conserved(&self.eos);
        for (ielem, x) in self.mesh.cell_centres().iter().enumerate() {
            if *x < problem.interface {
                fields.set_cell_state(ielem, &left);
            } else {
                fields.set_cell_state(ielem, &right);
            }
        }
        Ok(())
    }
    /// Largest stable step for the fastest signal `|u - w| + a` relative to
    /// the moving cell.
    pub fn compute_time_step(&self, fields: &ConservedFields) -> Result<f64> {
        let time_steps: Array1<f64> = (0..self.mesh.elem_num)
            .map(|ielem| {
                let [i0, i1] = self.mesh.elements[ielem].inodes;
                let w = 0.5 * (self.mesh.nodes[i0].velocity + self.mesh.nodes[i1].velocity);
                let rho = fields.rho[ielem];
                let rho_u = fields.momentum(ielem);
                let p = self.eos.pressure(rho, &rho_u, fields.rho_e[ielem]);
                let speed = (rho_u.x / rho - w).abs() + self.eos.sound_speed(p, rho);
                self.solver_param.cfl * self.mesh.cell_length(ielem) / speed
            })
            .collect();
        let dt = time_steps.min().copied().map_err(|err| {
            FluxError::InvalidParameter(format!("time step at step {}: {}", self.current_step, err))
        })?;
        if !(dt > 0.0) {
            return Err(FluxError::InvalidParameter(format!(
                "non-positive time step {} at step {}",
                dt, self.current_step
            )));
        }
        Ok(dt)
    }
    pub fn compute_residuals(
        &self,
        fields: &ConservedFields,
        residuals: &mut ConservedFields,
    ) -> Result<()> {
        let fluxes = compute_face_fluxes(
            &self.mesh,
            fields,
            &self.eos,
            self.solver_param.k_roe,
            &self.diagnostics,
        )?;
        accumulate_residuals(&self.mesh, &fluxes, residuals);
        Ok(())
    }
    /// Forward-Euler update of the cell integrals `V * U`. Fluxes are taken on
    /// the old mesh, then nodes move and the new volumes close the balance.
    pub fn step(
        &mut self,
        fields: &mut ConservedFields,
        residuals: &mut ConservedFields,
        dt: f64,
    ) -> Result<()> {
        self.compute_residuals(fields, residuals)?;
        let old_volumes = self.mesh.cell_volumes();
        self.mesh.move_nodes(dt);
        let new_volumes = self.mesh.cell_volumes();
        for ielem in 0..self.mesh.elem_num {
            let v_old = old_volumes[ielem];
            let v_new = new_volumes[ielem];
            let update = |u: &mut f64, r: f64| *u = (*u * v_old - dt * r) / v_new;
            update(&mut fields.rho[ielem], residuals.rho[ielem]);
            update(&mut fields.rho_e[ielem], residuals.rho_e[ielem]);
            update(&mut fields.rho_eu[ielem], residuals.rho_eu[ielem]);
            for (u, r) in fields
                .rho_u
                .row_mut(ielem)
                .iter_mut()
                .zip(residuals.rho_u.row(ielem))
            {
                update(u, *r);
            }
            for (u, r) in fields
                .rho_scalar
                .row_mut(ielem)
                .iter_mut()
                .zip(residuals.rho_scalar.row(ielem))
            {
                update(u, *r);
            }
        }
        Ok(())
    }
    pub fn solve(&mut self, fields: &mut ConservedFields) -> Result<FluxStatistics> {
        let mut residuals = ConservedFields::zeros(fields.cell_num(), fields.scalar_num());
        if let Some(output_dir) = &self.solver_param.output_dir {
            fs::create_dir_all(output_dir)?;
        }
        self.write_output(fields)?;
        log::info!(
            "starting run: {} cells, {} scalars, final time {}",
            self.mesh.elem_num,
            self.registry.len(),
            self.solver_param.final_time
        );
        while self.current_step < self.solver_param.final_step
            && self.current_time < self.solver_param.final_time
        {
            let mut dt = self.compute_time_step(fields)?;
            if self.current_time + dt > self.solver_param.final_time {
                dt = self.solver_param.final_time - self.current_time;
            }
            self.step(fields, &mut residuals, dt)?;
            let report = bound_fields(
                fields,
                &self.eos,
                self.solver_param.rho_min,
                self.solver_param.p_min,
            );
            if !report.is_clean() {
                log::warn!(
                    "step {}: bounded density in {} cells, pressure in {} cells",
                    self.current_step,
                    report.rho_bounded,
                    report.p_bounded
                );
            }
            self.current_time += dt;
            self.current_step += 1;
            log::debug!(
                "step {}, time {:.6e}, dt {:.6e}",
                self.current_step,
                self.current_time,
                dt
            );
            let interval = self.solver_param.output_interval;
            if interval > 0 && self.current_step % interval == 0 {
                self.write_output(fields)?;
            }
        }
        self.write_output(fields)?;
        let stats = self.diagnostics.snapshot();
        if stats.degenerate_contact > 0 {
            log::warn!(
                "contact speed fell back to the mean normal velocity on {} faces",
                stats.degenerate_contact
            );
        }
        log::info!(
            "finished at step {}, time {:.6e}: {} flux evaluations, {:.1}% in star regions",
            self.current_step,
            self.current_time,
            stats.evaluations,
            100.0 * stats.star_ratio()
        );
        Ok(stats)
    }
    fn write_output(&self, fields: &ConservedFields) -> Result<()> {
        if let Some(output_dir) = &self.solver_param.output_dir {
            let filename = output_dir.join(format!("solutions_{}.csv", self.current_step));
            write_to_csv(fields, &self.mesh, &self.eos, self.registry, &filename)?;
        }
        Ok(())
    }
}
