use nalgebra::Vector3;
use ndarray::s;

use crate::disc::eos::IdealGas;
use crate::disc::state::ConservedFields;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundingReport {
    pub rho_bounded: usize,
    pub p_bounded: usize,
}
impl BoundingReport {
    pub fn is_clean(&self) -> bool {
        self.rho_bounded == 0 && self.p_bounded == 0
    }
}

/// Raise density to `rho_min` and pressure to `p_min` in place.
///
/// A low density is scaled up with velocity scaled down by the same factor,
/// so momentum is unchanged; specific internal energies and mass fractions are
/// kept. Cells with non-positive density carry no usable specific values and
/// are reset to a quiescent state at `rho_min`, `p_min`.
pub fn bound_fields(
    fields: &mut ConservedFields,
    eos: &IdealGas,
    rho_min: f64,
    p_min: f64,
) -> BoundingReport {
    let mut report = BoundingReport::default();
    for icell in 0..fields.cell_num() {
        let rho = fields.rho[icell];
        if !(rho > 0.0) {
            fields.rho[icell] = rho_min;
            fields.set_momentum(icell, Vector3::zeros());
            fields.rho_e[icell] = p_min / (eos.hcr - 1.0);
            fields.rho_eu[icell] = fields.rho_e[icell];
            fields.rho_scalar.slice_mut(s![icell, ..]).fill(0.0);
            report.rho_bounded += 1;
            continue;
        }
        let rho_u = fields.momentum(icell);
        if rho < rho_min {
            let kinetic = 0.5 * rho_u.norm_squared() / rho;
            let e = (fields.rho_e[icell] - kinetic) / rho;
            let eu = (fields.rho_eu[icell] - kinetic) / rho;
            let kinetic_new = 0.5 * rho_u.norm_squared() / rho_min;
            fields.rho[icell] = rho_min;
            fields.rho_e[icell] = rho_min * e + kinetic_new;
            fields.rho_eu[icell] = rho_min * eu + kinetic_new;
            let factor = rho_min / rho;
            fields
                .rho_scalar
                .slice_mut(s![icell, ..])
                .mapv_inplace(|v| v * factor);
            report.rho_bounded += 1;
        }
        let rho = fields.rho[icell];
        let p = eos.pressure(rho, &rho_u, fields.rho_e[icell]);
        if p < p_min {
            let kinetic = 0.5 * rho_u.norm_squared() / rho;
            fields.rho_e[icell] = rho * eos.internal_energy(p_min, rho) + kinetic;
            let pu = eos.pressure(rho, &rho_u, fields.rho_eu[icell]);
            if pu < p_min {
                fields.rho_eu[icell] = fields.rho_e[icell];
            }
            report.p_bounded += 1;
        }
    }
    if !report.is_clean() {
        log::debug!(
            "bounded density in {} cells, pressure in {} cells",
            report.rho_bounded,
            report.p_bounded
        );
    }
    report
}
