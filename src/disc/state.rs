use std::fmt;

use nalgebra::Vector3;
use ndarray::{Array1, Array2, ArrayView1, s};

use crate::disc::eos::IdealGas;
use crate::error::{FluxError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}
impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Primitive/conservative state on one side of a face, as handed over by the
/// reconstruction stage. Scalars are borrowed so that building a state per face
/// does not allocate.
#[derive(Clone, Debug)]
pub struct FaceState<'a> {
    pub p: f64,
    pub rho_u: Vector3<f64>,
    pub rho: f64,
    pub a: f64,
    pub rho_e: f64,
    pub rho_eu: f64,
    pub rho_scalar: ArrayView1<'a, f64>,
}
impl<'a> FaceState<'a> {
    pub fn velocity(&self) -> Vector3<f64> {
        self.rho_u / self.rho
    }
    pub fn scalar_num(&self) -> usize {
        self.rho_scalar.len()
    }
    /// Release-mode guard for the reconstruction/bounding stage.
    pub fn check(&self, side: Side) -> Result<()> {
        if !(self.rho > 0.0) {
            return Err(FluxError::NonPositiveDensity {
                side,
                value: self.rho,
            });
        }
        if !(self.a > 0.0) {
            return Err(FluxError::NonPositiveSoundSpeed {
                side,
                value: self.a,
            });
        }
        Ok(())
    }
}
pub fn check_face_pair(left: &FaceState, right: &FaceState) -> Result<()> {
    left.check(Side::Left)?;
    right.check(Side::Right)?;
    if left.scalar_num() != right.scalar_num() {
        return Err(FluxError::ScalarCountMismatch {
            expected: left.scalar_num(),
            found: right.scalar_num(),
        });
    }
    Ok(())
}

/// Primitive description of a uniform state (initial data, fixed-value
/// boundaries). Scalars are given as mass fractions in registry order.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveState {
    pub rho: f64,
    pub u: Vector3<f64>,
    pub p: f64,
    pub mass_fractions: Array1<f64>,
}
impl PrimitiveState {
    pub fn to_conserved(&self, eos: &IdealGas) -> ConservedState {
        let rho_e = eos.total_energy(self.rho, &self.u, self.p);
        ConservedState {
            rho: self.rho,
            rho_u: self.u * self.rho,
            rho_e,
            rho_eu: rho_e,
            rho_scalar: self.mass_fractions.mapv(|y| y * self.rho),
        }
    }
}

/// Owned conservative state of a single cell, used for ghost states on
/// boundary faces.
#[derive(Clone, Debug, PartialEq)]
pub struct ConservedState {
    pub rho: f64,
    pub rho_u: Vector3<f64>,
    pub rho_e: f64,
    pub rho_eu: f64,
    pub rho_scalar: Array1<f64>,
}
impl ConservedState {
    pub fn face_state(&self, eos: &IdealGas) -> FaceState<'_> {
        eos.face_state(
            self.rho,
            self.rho_u,
            self.rho_e,
            self.rho_eu,
            self.rho_scalar.view(),
        )
    }
}

/// Cell-centred conservative fields. `rho_u` is stored as (cell, component),
/// `rho_scalar` as (cell, scalar) in registry order.
#[derive(Clone, Debug)]
pub struct ConservedFields {
    pub rho: Array1<f64>,
    pub rho_u: Array2<f64>,
    pub rho_e: Array1<f64>,
    pub rho_eu: Array1<f64>,
    pub rho_scalar: Array2<f64>,
}
impl ConservedFields {
    pub fn zeros(cell_num: usize, scalar_num: usize) -> Self {
        Self {
            rho: Array1::zeros(cell_num),
            rho_u: Array2::zeros((cell_num, 3)),
            rho_e: Array1::zeros(cell_num),
            rho_eu: Array1::zeros(cell_num),
            rho_scalar: Array2::zeros((cell_num, scalar_num)),
        }
    }
    pub fn cell_num(&self) -> usize {
        self.rho.len()
    }
    pub fn scalar_num(&self) -> usize {
        self.rho_scalar.ncols()
    }
    pub fn momentum(&self, icell: usize) -> Vector3<f64> {
        Vector3::new(
            self.rho_u[(icell, 0)],
            self.rho_u[(icell, 1)],
            self.rho_u[(icell, 2)],
        )
    }
    pub fn set_momentum(&mut self, icell: usize, rho_u: Vector3<f64>) {
        for i in 0..3 {
            self.rho_u[(icell, i)] = rho_u[i];
        }
    }
    pub fn velocity(&self, icell: usize) -> Vector3<f64> {
        self.momentum(icell) / self.rho[icell]
    }
    pub fn face_state(&self, icell: usize, eos: &IdealGas) -> FaceState<'_> {
        eos.face_state(
            self.rho[icell],
            self.momentum(icell),
            self.rho_e[icell],
            self.rho_eu[icell],
            self.rho_scalar.slice(s![icell, ..]),
        )
    }
    pub fn cell_state(&self, icell: usize) -> ConservedState {
        ConservedState {
            rho: self.rho[icell],
            rho_u: self.momentum(icell),
            rho_e: self.rho_e[icell],
            rho_eu: self.rho_eu[icell],
            rho_scalar: self.rho_scalar.slice(s![icell, ..]).to_owned(),
        }
    }
    pub fn set_cell_state(&mut self, icell: usize, state: &ConservedState) {
        self.rho[icell] = state.rho;
        self.set_momentum(icell, state.rho_u);
        self.rho_e[icell] = state.rho_e;
        self.rho_eu[icell] = state.rho_eu;
        self.rho_scalar
            .slice_mut(s![icell, ..])
            .assign(&state.rho_scalar);
    }
}
