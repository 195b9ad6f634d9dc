use std::ops::{Add, Mul, Sub};

use nalgebra::Vector3;
use ndarray::Array1;

use super::FluxResult;
use super::diagnostics::FluxDiagnostics;
use super::wave_speed::{WaveSpeedEstimate, estimate_wave_speeds};
use crate::disc::geometric::FaceGeometry;
use crate::disc::state::{FaceState, Side};

/// Part of the Riemann fan that sits on the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    LeftUpwind,
    LeftStar,
    RightStar,
    RightUpwind,
}
impl Region {
    /// Ties on an outer wave go to the upwind state, ties on the contact to
    /// the left star state.
    pub fn select(waves: &WaveSpeedEstimate) -> Self {
        if 0.0 <= waves.s_l {
            Region::LeftUpwind
        } else if waves.s_r <= 0.0 {
            Region::RightUpwind
        } else if 0.0 <= waves.s_star {
            Region::LeftStar
        } else {
            Region::RightStar
        }
    }
    pub fn side(&self) -> Side {
        match self {
            Region::LeftUpwind | Region::LeftStar => Side::Left,
            Region::RightStar | Region::RightUpwind => Side::Right,
        }
    }
}

// State expressed in the frame moving with the face.
struct FrameState {
    rho: f64,
    p: f64,
    q: f64,
    rho_u: Vector3<f64>,
    rho_e: f64,
}
impl FrameState {
    fn new(state: &FaceState, normal: &Vector3<f64>, mesh_speed: f64) -> Self {
        let rho_u = state.rho_u - normal * (state.rho * mesh_speed);
        let rho_e = state.rho_e - mesh_speed * normal.dot(&state.rho_u)
            + 0.5 * mesh_speed * mesh_speed * state.rho;
        Self {
            rho: state.rho,
            p: state.p,
            q: rho_u.dot(normal) / state.rho,
            rho_u,
            rho_e,
        }
    }
}

struct StarWave {
    s_k: f64,
    s_star: f64,
    // rho*_K / rho_K
    ratio: f64,
}

// Flux template shared by every conserved quantity:
// upwind regions return the physical flux F_K, star regions F_K + S_K (U*_K - U_K).
struct RegionFlux<'s> {
    side: Side,
    upwind: &'s FrameState,
    star: Option<StarWave>,
}
impl<'s> RegionFlux<'s> {
    fn new(region: Region, left: &'s FrameState, right: &'s FrameState, waves: &WaveSpeedEstimate) -> Self {
        let star = |state: &FrameState, s_k: f64| StarWave {
            s_k,
            s_star: waves.s_star,
            ratio: (s_k - state.q) / (s_k - waves.s_star),
        };
        match region {
            Region::LeftUpwind => Self {
                side: Side::Left,
                upwind: left,
                star: None,
            },
            Region::LeftStar => Self {
                side: Side::Left,
                upwind: left,
                star: Some(star(left, waves.s_l)),
            },
            Region::RightStar => Self {
                side: Side::Right,
                upwind: right,
                star: Some(star(right, waves.s_r)),
            },
            Region::RightUpwind => Self {
                side: Side::Right,
                upwind: right,
                star: None,
            },
        }
    }
    fn blend<T>(&self, f_k: T, u_k: T, u_star: impl FnOnce(&StarWave) -> T) -> T
    where
        T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
    {
        match &self.star {
            None => f_k,
            Some(star) => f_k + (u_star(star) - u_k) * star.s_k,
        }
    }
    /// Quantity carried with the mass flux: its specific value is continuous
    /// across the contact, only the carrier density jumps.
    fn passive(&self, left: f64, right: f64) -> f64 {
        let phi = match self.side {
            Side::Left => left,
            Side::Right => right,
        };
        self.blend(phi * self.upwind.q, phi, |star| phi * star.ratio)
    }
    fn momentum(&self, normal: &Vector3<f64>) -> Vector3<f64> {
        let k = self.upwind;
        self.blend(k.rho_u * k.q + normal * k.p, k.rho_u, |star| {
            (k.rho_u + normal * (k.rho * (star.s_star - k.q))) * star.ratio
        })
    }
    fn energy(&self) -> f64 {
        let k = self.upwind;
        self.blend((k.rho_e + k.p) * k.q, k.rho_e, |star| {
            star.ratio * (k.rho_e + k.rho * (star.s_star - k.q) * star.s_star)
                + k.p * (star.s_star - k.q) / (star.s_k - star.s_star)
        })
    }
    /// Pressure and face-relative normal velocity of the state on the face.
    fn pressure_and_speed(&self) -> (f64, f64) {
        let k = self.upwind;
        match &self.star {
            None => (k.p, k.q),
            Some(star) => (
                k.p + k.rho * (k.q - star.s_k) * (k.q - star.s_star),
                star.s_star,
            ),
        }
    }
}

/// HLLC flux through a face moving with normal speed `geometry.mesh_speed`.
///
/// Wave speeds and star states are built in the frame of the face; momentum
/// and energy fluxes are transformed back to the lab frame, so the result is
/// `F(U)·n - w U` consistently across the whole fan. Fluxes are per unit area.
pub fn hllc_ale_flux(
    left: &FaceState,
    right: &FaceState,
    geometry: &FaceGeometry,
    k_roe: f64,
) -> FluxResult {
    hllc_ale_flux_with_diagnostics(left, right, geometry, k_roe, None)
}

pub fn hllc_ale_flux_with_diagnostics(
    left: &FaceState,
    right: &FaceState,
    geometry: &FaceGeometry,
    k_roe: f64,
    diagnostics: Option<&FluxDiagnostics>,
) -> FluxResult {
    debug_assert!(left.rho > 0.0 && right.rho > 0.0, "non-positive density at face");
    debug_assert!(left.a > 0.0 && right.a > 0.0, "non-positive sound speed at face");
    debug_assert_eq!(
        left.scalar_num(),
        right.scalar_num(),
        "scalar count differs across face"
    );
    debug_assert!(geometry.is_consistent(), "|Sf| differs from magSf");

    let normal = geometry.unit_normal();
    let w = geometry.mesh_speed;
    let frame_l = FrameState::new(left, &normal, w);
    let frame_r = FrameState::new(right, &normal, w);

    let waves = estimate_wave_speeds(left, right, frame_l.q, frame_r.q, k_roe);
    let region = Region::select(&waves);
    if let Some(diagnostics) = diagnostics {
        diagnostics.record(&waves, region);
    }
    let flux = RegionFlux::new(region, &frame_l, &frame_r, &waves);

    let rho_flux = flux.passive(left.rho, right.rho);
    let frame_rho_u_flux = flux.momentum(&normal);
    let frame_rho_e_flux = flux.energy();
    let (p_face, q_face) = flux.pressure_and_speed();

    // back to the lab frame
    let rho_u_flux = frame_rho_u_flux + normal * (w * rho_flux);
    let rho_e_flux =
        frame_rho_e_flux + w * normal.dot(&frame_rho_u_flux) + 0.5 * w * w * rho_flux;

    let rho_scalar_flux = left
        .rho_scalar
        .iter()
        .zip(right.rho_scalar.iter())
        .map(|(&l, &r)| flux.passive(l, r))
        .collect::<Array1<f64>>();

    FluxResult {
        rho_flux,
        rho_u_flux,
        rho_e_flux,
        rho_eu_flux: flux.passive(left.rho_eu, right.rho_eu),
        rhop_flux: p_face * (q_face + w),
        rho_scalar_flux,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::eos::IdealGas;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::{Array1, array};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const HCR: f64 = 1.4;
    const TOL: f64 = 1e-12;

    fn primitive_state(rho: f64, u: Vector3<f64>, p: f64, scalars: &Array1<f64>) -> FaceState<'_> {
        let eos = IdealGas::new(HCR);
        let rho_e = eos.total_energy(rho, &u, p);
        FaceState {
            p,
            rho_u: u * rho,
            rho,
            a: eos.sound_speed(p, rho),
            rho_e,
            rho_eu: 0.9 * rho_e,
            rho_scalar: scalars.view(),
        }
    }

    fn physical_ale_flux(state: &FaceState, geometry: &FaceGeometry) -> FluxResult {
        let n = geometry.unit_normal();
        let u_n = state.velocity().dot(&n);
        let q = u_n - geometry.mesh_speed;
        FluxResult {
            rho_flux: state.rho * q,
            rho_u_flux: state.rho_u * q + n * state.p,
            rho_e_flux: state.rho_e * q + state.p * u_n,
            rho_eu_flux: state.rho_eu * q,
            rhop_flux: state.p * u_n,
            rho_scalar_flux: state.rho_scalar.mapv(|v| v * q),
        }
    }

    fn assert_flux_eq(a: &FluxResult, b: &FluxResult, tol: f64) {
        assert_abs_diff_eq!(a.rho_flux, b.rho_flux, epsilon = tol);
        assert_abs_diff_eq!(a.rho_u_flux, b.rho_u_flux, epsilon = tol);
        assert_abs_diff_eq!(a.rho_e_flux, b.rho_e_flux, epsilon = tol);
        assert_abs_diff_eq!(a.rho_eu_flux, b.rho_eu_flux, epsilon = tol);
        assert_abs_diff_eq!(a.rhop_flux, b.rhop_flux, epsilon = tol);
        assert_eq!(a.rho_scalar_flux.len(), b.rho_scalar_flux.len());
        for (x, y) in a.rho_scalar_flux.iter().zip(b.rho_scalar_flux.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = tol);
        }
    }

    fn negated(flux: &FluxResult) -> FluxResult {
        FluxResult {
            rho_flux: -flux.rho_flux,
            rho_u_flux: -flux.rho_u_flux,
            rho_e_flux: -flux.rho_e_flux,
            rho_eu_flux: -flux.rho_eu_flux,
            rhop_flux: -flux.rhop_flux,
            rho_scalar_flux: flux.rho_scalar_flux.mapv(|v| -v),
        }
    }

    fn random_state<'a>(rng: &mut StdRng, scalars: &'a Array1<f64>) -> FaceState<'a> {
        let rho = rng.gen_range(1.0e-3..10.0);
        let u = Vector3::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        );
        let p = rng.gen_range(1.0e-3..10.0);
        primitive_state(rho, u, p, scalars)
    }

    fn random_scalars(rng: &mut StdRng) -> Array1<f64> {
        Array1::from_iter((0..3).map(|_| rng.gen_range(0.0..2.0)))
    }

    fn random_geometry(rng: &mut StdRng) -> FaceGeometry {
        let sf = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.1..1.0),
        );
        let face_velocity = Vector3::new(
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
        );
        FaceGeometry::moving(sf, &face_velocity)
    }

    #[test]
    fn test_uniform_state_gives_physical_flux() {
        let scalars = array![0.3, 0.05];
        let state = primitive_state(1.3, Vector3::new(0.4, -0.2, 0.1), 0.9, &scalars);
        let geometry = FaceGeometry::new(Vector3::new(0.6, 0.8, 0.0));
        for k_roe in [0.0, 0.5, 1.0] {
            let flux = hllc_ale_flux(&state, &state, &geometry, k_roe);
            assert_flux_eq(&flux, &physical_ale_flux(&state, &geometry), TOL);
        }
    }

    #[test]
    fn test_uniform_state_on_moving_face_gives_ale_flux() {
        let scalars = array![0.7];
        let state = primitive_state(0.8, Vector3::new(1.5, 0.3, 0.0), 2.0, &scalars);
        let geometry = FaceGeometry::moving(Vector3::new(2.0, 0.0, 0.0), &Vector3::new(0.6, 1.0, 0.0));
        let flux = hllc_ale_flux(&state, &state, &geometry, 1.0);
        assert_flux_eq(&flux, &physical_ale_flux(&state, &geometry), TOL);
        // mass crosses the face at the relative speed u - w
        assert_relative_eq!(flux.rho_flux, 0.8 * (1.5 - 0.6), epsilon = TOL);
    }

    #[test]
    fn test_face_moving_with_flow_carries_no_mass() {
        let scalars = array![0.2];
        let state = primitive_state(1.0, Vector3::new(2.0, 0.0, 0.0), 1.0, &scalars);
        let geometry = FaceGeometry::moving(Vector3::x(), &Vector3::new(2.0, 0.0, 0.0));
        let flux = hllc_ale_flux(&state, &state, &geometry, 1.0);
        assert_abs_diff_eq!(flux.rho_flux, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(flux.rho_scalar_flux[0], 0.0, epsilon = TOL);
        assert_relative_eq!(flux.rho_u_flux, Vector3::new(1.0, 0.0, 0.0), epsilon = TOL);
        // only the pressure work of the moving piston remains
        assert_relative_eq!(flux.rho_e_flux, 2.0, epsilon = TOL);
    }

    #[test]
    fn test_sod_shock_tube_interface() {
        let scalars_l = array![1.0];
        let scalars_r = array![0.0];
        let mut left = primitive_state(1.0, Vector3::zeros(), 1.0, &scalars_l);
        let mut right = primitive_state(0.125, Vector3::zeros(), 0.1, &scalars_r);
        left.a = 1.183;
        right.a = 1.058;
        let geometry = FaceGeometry::new(Vector3::x());

        let waves = estimate_wave_speeds(&left, &right, 0.0, 0.0, 1.0);
        assert!(waves.s_l < 0.0 && 0.0 < waves.s_r);
        assert!(waves.s_l <= waves.s_star && waves.s_star <= waves.s_r);
        assert_eq!(Region::select(&waves), Region::LeftStar);

        let flux = hllc_ale_flux(&left, &right, &geometry, 1.0);
        assert!(flux.rho_flux > 0.0, "mass flux should point right: {}", flux.rho_flux);
        assert!(flux.rho_u_flux.x > 0.0);
        assert_abs_diff_eq!(flux.rho_u_flux.y, 0.0, epsilon = TOL);

        let p_star = flux.rhop_flux / waves.s_star;
        assert!(0.1 < p_star && p_star < 1.0, "p* = {p_star}");
        // star-region identities: F_rhoU = F_rho S* + p*, F_rhoE = S* (E* + p*)
        assert_relative_eq!(flux.rho_u_flux.x, flux.rho_flux * waves.s_star + p_star, epsilon = 1e-12);
        assert!(flux.rho_e_flux > flux.rhop_flux);
        // the left scalar is advected into the low-pressure side
        assert_relative_eq!(flux.rho_scalar_flux[0], flux.rho_flux, epsilon = 1e-12);
    }

    #[test]
    fn test_stationary_contact_is_preserved() {
        let scalars_l = array![0.5];
        let scalars_r = array![0.05];
        let left = primitive_state(1.0, Vector3::zeros(), 1.0, &scalars_l);
        let right = primitive_state(0.125, Vector3::zeros(), 1.0, &scalars_r);
        let geometry = FaceGeometry::new(Vector3::x());

        let waves = estimate_wave_speeds(&left, &right, 0.0, 0.0, 1.0);
        assert_eq!(waves.s_star, 0.0);

        let flux = hllc_ale_flux(&left, &right, &geometry, 1.0);
        assert_abs_diff_eq!(flux.rho_flux, 0.0, epsilon = TOL);
        assert_relative_eq!(flux.rho_u_flux, Vector3::new(1.0, 0.0, 0.0), epsilon = TOL);
        assert_abs_diff_eq!(flux.rho_e_flux, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(flux.rho_eu_flux, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(flux.rho_scalar_flux[0], 0.0, epsilon = TOL);
    }

    #[test]
    fn test_supersonic_flow_is_fully_upwinded() {
        let scalars_l = array![0.4];
        let scalars_r = array![0.1];
        let geometry = FaceGeometry::new(Vector3::x());

        let left = primitive_state(1.0, Vector3::new(4.0, 0.5, 0.0), 1.0, &scalars_l);
        let right = primitive_state(0.5, Vector3::new(3.5, 0.0, 0.0), 0.8, &scalars_r);
        let flux = hllc_ale_flux(&left, &right, &geometry, 1.0);
        assert_flux_eq(&flux, &physical_ale_flux(&left, &geometry), TOL);

        let left = primitive_state(1.0, Vector3::new(-4.0, 0.5, 0.0), 1.0, &scalars_l);
        let right = primitive_state(0.5, Vector3::new(-3.5, 0.0, 0.0), 0.8, &scalars_r);
        let flux = hllc_ale_flux(&left, &right, &geometry, 1.0);
        assert_flux_eq(&flux, &physical_ale_flux(&right, &geometry), TOL);
    }

    #[test]
    fn test_outer_wave_ties_select_upwind_state() {
        let scalars = array![0.2];
        let mut left = primitive_state(1.0, Vector3::new(1.0, 0.0, 0.0), 1.0, &scalars);
        left.a = 1.0;
        let right = left.clone();
        let waves = estimate_wave_speeds(&left, &right, 1.0, 1.0, 1.0);
        assert_eq!(waves.s_l, 0.0);
        assert_eq!(Region::select(&waves), Region::LeftUpwind);

        let waves = estimate_wave_speeds(&left, &right, -1.0, -1.0, 1.0);
        assert_eq!(waves.s_r, 0.0);
        assert_eq!(Region::select(&waves), Region::RightUpwind);

        let contact_tie = WaveSpeedEstimate {
            s_star: 0.0,
            ..waves_with(-1.0, 1.0)
        };
        assert_eq!(Region::select(&contact_tie), Region::LeftStar);
        assert_eq!(Region::select(&waves_with(-1.0, -0.5)), Region::RightStar);
    }

    fn waves_with(s_l: f64, s_star: f64) -> WaveSpeedEstimate {
        WaveSpeedEstimate {
            s_l,
            s_r: 1.0,
            s_star,
            contact: crate::disc::riemann_solver::ContactKind::JumpCondition,
        }
    }

    #[test]
    fn test_flux_is_continuous_across_contact() {
        let scalars_l = array![0.9, 0.2];
        let scalars_r = array![0.1, 0.05];
        let geometry = FaceGeometry::new(Vector3::x());
        let eps = 1.0e-7;
        let flux_at = |u: f64| {
            let left = primitive_state(1.0, Vector3::new(u, 0.3, 0.0), 1.0, &scalars_l);
            let right = primitive_state(0.25, Vector3::new(u, -0.3, 0.0), 1.0, &scalars_r);
            let waves = estimate_wave_speeds(&left, &right, u, u, 1.0);
            (Region::select(&waves), hllc_ale_flux(&left, &right, &geometry, 1.0))
        };
        let (region_plus, plus) = flux_at(eps);
        let (region_minus, minus) = flux_at(-eps);
        assert_eq!(region_plus, Region::LeftStar);
        assert_eq!(region_minus, Region::RightStar);
        assert_flux_eq(&plus, &minus, 10.0 * eps);
    }

    #[test]
    fn test_scalar_fluxes_scale_with_specific_concentration() {
        let geometry = FaceGeometry::new(Vector3::new(0.0, 0.0, 1.5));
        let (rho_l, rho_r) = (1.2, 0.4);
        let (y_l, y_r) = (0.3, 0.7);
        // second scalar: same concentrations scaled by 2.5
        let scalars_l = array![rho_l * y_l, 2.5 * rho_l * y_l];
        let scalars_r = array![rho_r * y_r, 2.5 * rho_r * y_r];
        for (u_l, u_r, p_r) in [(0.3, -0.1, 0.6), (-0.4, -0.2, 1.4), (2.5, 2.0, 1.0)] {
            let left = primitive_state(rho_l, Vector3::new(0.0, 0.0, u_l), 1.0, &scalars_l);
            let right = primitive_state(rho_r, Vector3::new(0.0, 0.0, u_r), p_r, &scalars_r);
            let flux = hllc_ale_flux(&left, &right, &geometry, 0.7);
            assert_relative_eq!(flux.rho_scalar_flux[1], 2.5 * flux.rho_scalar_flux[0], epsilon = 1e-12);
            let y_upwind = if flux.rho_flux >= 0.0 { y_l } else { y_r };
            assert_relative_eq!(flux.rho_scalar_flux[0], y_upwind * flux.rho_flux, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_contact_denominator_stays_finite() {
        let scalars = array![1.0e-200];
        let state = FaceState {
            p: 1.0e-5,
            rho_u: Vector3::zeros(),
            rho: 1.0e-200,
            a: 1.0e-200,
            rho_e: 2.5e-5,
            rho_eu: 2.5e-5,
            rho_scalar: scalars.view(),
        };
        let waves = estimate_wave_speeds(&state, &state, 0.0, 0.0, 1.0);
        assert_eq!(waves.contact, crate::disc::riemann_solver::ContactKind::Fallback);
        assert_eq!(waves.s_star, 0.0);

        let diagnostics = FluxDiagnostics::new();
        let flux = hllc_ale_flux_with_diagnostics(
            &state,
            &state,
            &FaceGeometry::new(Vector3::x()),
            1.0,
            Some(&diagnostics),
        );
        assert!(flux.is_finite(), "{flux:?}");
        assert_abs_diff_eq!(flux.rho_flux, 0.0, epsilon = TOL);
        assert_relative_eq!(flux.rho_u_flux.x, 1.0e-5, epsilon = TOL);
        assert_eq!(diagnostics.snapshot().degenerate_contact, 1);
    }

    #[test]
    fn test_random_states_respect_wave_ordering() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let scalars_l = random_scalars(&mut rng);
            let scalars_r = random_scalars(&mut rng);
            let left = random_state(&mut rng, &scalars_l);
            let right = random_state(&mut rng, &scalars_r);
            let geometry = random_geometry(&mut rng);
            let k_roe = rng.gen_range(0.0..=1.0);

            let n = geometry.unit_normal();
            let u_l = left.velocity().dot(&n) - geometry.mesh_speed;
            let u_r = right.velocity().dot(&n) - geometry.mesh_speed;
            let waves = estimate_wave_speeds(&left, &right, u_l, u_r, k_roe);
            assert!(waves.s_l <= waves.s_star, "{waves:?}");
            assert!(waves.s_star <= waves.s_r, "{waves:?}");

            let flux = hllc_ale_flux(&left, &right, &geometry, k_roe);
            assert!(flux.is_finite(), "{flux:?}");
        }
    }

    #[test]
    fn test_random_states_flux_is_antisymmetric_under_normal_reversal() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let scalars_l = random_scalars(&mut rng);
            let scalars_r = random_scalars(&mut rng);
            let left = random_state(&mut rng, &scalars_l);
            let right = random_state(&mut rng, &scalars_r);
            let geometry = random_geometry(&mut rng);
            let k_roe = rng.gen_range(0.0..=1.0);

            let forward = hllc_ale_flux(&left, &right, &geometry, k_roe);
            let backward = hllc_ale_flux(&right, &left, &geometry.reversed(), k_roe);
            let scale = 1.0 + forward.rho_e_flux.abs() + forward.rho_u_flux.norm();
            assert_flux_eq(&forward, &negated(&backward), 1e-9 * scale);
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "non-positive density at face")]
    fn test_debug_rejects_non_positive_density() {
        let scalars = array![0.1];
        let left = FaceState {
            rho: -1.0,
            ..primitive_state(1.0, Vector3::zeros(), 1.0, &scalars)
        };
        let right = primitive_state(1.0, Vector3::zeros(), 1.0, &scalars);
        hllc_ale_flux(&left, &right, &FaceGeometry::new(Vector3::x()), 1.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "non-positive sound speed at face")]
    fn test_debug_rejects_non_positive_sound_speed() {
        let scalars = array![0.1];
        let left = primitive_state(1.0, Vector3::zeros(), 1.0, &scalars);
        let right = FaceState {
            a: 0.0,
            ..primitive_state(0.5, Vector3::zeros(), 0.4, &scalars)
        };
        hllc_ale_flux(&left, &right, &FaceGeometry::new(Vector3::x()), 1.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "scalar count differs across face")]
    fn test_debug_rejects_scalar_count_mismatch() {
        let scalars_l = array![0.1];
        let scalars_r = array![0.1, 0.2];
        let left = primitive_state(1.0, Vector3::zeros(), 1.0, &scalars_l);
        let right = primitive_state(1.0, Vector3::zeros(), 1.0, &scalars_r);
        hllc_ale_flux(&left, &right, &FaceGeometry::new(Vector3::x()), 1.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "|Sf| differs from magSf")]
    fn test_debug_rejects_inconsistent_geometry() {
        let scalars = array![0.1];
        let state = primitive_state(1.0, Vector3::zeros(), 1.0, &scalars);
        let geometry = FaceGeometry {
            sf: Vector3::x(),
            mag_sf: 2.0,
            mesh_speed: 0.0,
        };
        hllc_ale_flux(&state, &state, &geometry, 1.0);
    }
}
