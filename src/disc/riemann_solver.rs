//! Approximate Riemann solvers for the compressible reacting-flow equations.
//!
//! The HLLC-ALE solver resolves three waves (left, contact, right) and
//! evaluates the numerical flux through a face that may itself be moving.
//! Mass, momentum and total energy follow the classical HLLC relations; the
//! auxiliary energy and every transported scalar are carried passively through
//! the same wave fan.
//!
//! References:
//! - Toro, "Riemann Solvers and Numerical Methods for Fluid Dynamics", ch. 10
//! - Luo, Baum, Löhner, "On the computation of multi-material flows using ALE
//!   formulation", J. Comput. Phys. 194 (2004) 304-328

use nalgebra::Vector3;
use ndarray::Array1;

pub mod diagnostics;
pub mod hllc_ale;
pub mod wave_speed;

pub use diagnostics::{FluxDiagnostics, FluxStatistics};
pub use hllc_ale::{Region, hllc_ale_flux, hllc_ale_flux_with_diagnostics};
pub use wave_speed::{ContactKind, WaveSpeedEstimate, estimate_wave_speeds};

/// Numerical flux per unit face area. Momentum and energy are lab-frame
/// quantities; all components are fluxes through the (possibly moving) face.
#[derive(Clone, Debug, PartialEq)]
pub struct FluxResult {
    pub rho_flux: f64,
    pub rho_u_flux: Vector3<f64>,
    pub rho_e_flux: f64,
    pub rho_eu_flux: f64,
    /// Pressure work `p * u_n` of the state selected at the face.
    pub rhop_flux: f64,
    pub rho_scalar_flux: Array1<f64>,
}
impl FluxResult {
    pub fn zeros(scalar_num: usize) -> Self {
        Self {
            rho_flux: 0.0,
            rho_u_flux: Vector3::zeros(),
            rho_e_flux: 0.0,
            rho_eu_flux: 0.0,
            rhop_flux: 0.0,
            rho_scalar_flux: Array1::zeros(scalar_num),
        }
    }
    pub fn is_finite(&self) -> bool {
        self.rho_flux.is_finite()
            && self.rho_u_flux.iter().all(|v| v.is_finite())
            && self.rho_e_flux.is_finite()
            && self.rho_eu_flux.is_finite()
            && self.rhop_flux.is_finite()
            && self.rho_scalar_flux.iter().all(|v| v.is_finite())
    }
}
