use nalgebra::Vector3;
use ndarray::ArrayView1;

use crate::disc::state::FaceState;

/// Calorically perfect gas with heat capacity ratio `hcr`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealGas {
    pub hcr: f64,
}
impl IdealGas {
    pub fn new(hcr: f64) -> Self {
        Self { hcr }
    }
    pub fn pressure(&self, rho: f64, rho_u: &Vector3<f64>, rho_e: f64) -> f64 {
        (self.hcr - 1.0) * (rho_e - 0.5 * rho_u.norm_squared() / rho)
    }
    pub fn sound_speed(&self, p: f64, rho: f64) -> f64 {
        (self.hcr * p / rho).sqrt()
    }
    pub fn internal_energy(&self, p: f64, rho: f64) -> f64 {
        p / ((self.hcr - 1.0) * rho)
    }
    pub fn total_energy(&self, rho: f64, u: &Vector3<f64>, p: f64) -> f64 {
        p / (self.hcr - 1.0) + 0.5 * rho * u.norm_squared()
    }
    pub fn face_state<'a>(
        &self,
        rho: f64,
        rho_u: Vector3<f64>,
        rho_e: f64,
        rho_eu: f64,
        rho_scalar: ArrayView1<'a, f64>,
    ) -> FaceState<'a> {
        let p = self.pressure(rho, &rho_u, rho_e);
        let a = self.sound_speed(p, rho);
        FaceState {
            p,
            rho_u,
            rho,
            a,
            rho_e,
            rho_eu,
            rho_scalar,
        }
    }
}
