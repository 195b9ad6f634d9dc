use nalgebra::Vector3;

use crate::disc::eos::IdealGas;
use crate::disc::geometric::FaceGeometry;
use crate::disc::state::{ConservedState, PrimitiveState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPosition {
    Left,
    Right,
}

/// Ghost-state model of a boundary patch. Every variant produces a state that
/// is fed to the same interior flux evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundaryType {
    /// Slip wall moving with the face: normal velocity mirrored about the
    /// wall speed.
    Wall,
    /// Transmissive outlet: ghost state copies the interior.
    ZeroGradient,
    /// Prescribed inflow/outflow state.
    FixedValue(PrimitiveState),
}
impl BoundaryType {
    pub fn supply_face_state(
        &self,
        interior: &ConservedState,
        geometry: &FaceGeometry,
        eos: &IdealGas,
    ) -> ConservedState {
        match self {
            BoundaryType::Wall => {
                let normal = geometry.unit_normal();
                let rho = interior.rho;
                let relative_n = interior.rho_u.dot(&normal) / rho - geometry.mesh_speed;
                let rho_u: Vector3<f64> = interior.rho_u - normal * (2.0 * rho * relative_n);
                // same internal energy, new kinetic energy
                let kinetic_change =
                    0.5 * (rho_u.norm_squared() - interior.rho_u.norm_squared()) / rho;
                ConservedState {
                    rho_u,
                    rho_e: interior.rho_e + kinetic_change,
                    rho_eu: interior.rho_eu + kinetic_change,
                    ..interior.clone()
                }
            }
            BoundaryType::ZeroGradient => interior.clone(),
            BoundaryType::FixedValue(state) => state.to_conserved(eos),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BoundaryPatch1d {
    pub iface: usize,
    pub position: BoundaryPosition,
    pub boundary_type: BoundaryType,
}
