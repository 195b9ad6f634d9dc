use crate::disc::state::FaceState;

/// Denominators below this magnitude are treated as zero.
pub const VSMALL: f64 = 1.0e-300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    /// Contact speed from the HLLC jump conditions.
    JumpCondition,
    /// Jump-condition denominator vanished, arithmetic mean of the normal velocities used.
    Fallback,
    /// Jump-condition value fell outside `[s_l, s_r]` and was confined to it.
    Clamped,
}

/// Signal speeds in the frame of the face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSpeedEstimate {
    pub s_l: f64,
    pub s_r: f64,
    pub s_star: f64,
    pub contact: ContactKind,
}

/// Sound speed blended between the density-weighted Roe average (`k_roe = 1`)
/// and the arithmetic mean (`k_roe = 0`).
pub fn roe_sound_speed(rho_l: f64, rho_r: f64, a_l: f64, a_r: f64, k_roe: f64) -> f64 {
    let sqrt_rho_l = rho_l.sqrt();
    let sqrt_rho_r = rho_r.sqrt();
    let a_weighted = (sqrt_rho_l * a_l + sqrt_rho_r * a_r) / (sqrt_rho_l + sqrt_rho_r);
    let a_mean = 0.5 * (a_l + a_r);
    k_roe * a_weighted + (1.0 - k_roe) * a_mean
}

/// HLLC contact speed from the mass and momentum jump conditions.
#[allow(clippy::too_many_arguments)]
pub fn contact_speed(
    p_l: f64,
    p_r: f64,
    rho_l: f64,
    rho_r: f64,
    u_l: f64,
    u_r: f64,
    s_l: f64,
    s_r: f64,
) -> (f64, ContactKind) {
    let m_l = rho_l * (s_l - u_l);
    let m_r = rho_r * (s_r - u_r);
    let denominator = m_l - m_r;
    let (s_star, contact) = if denominator.abs() < VSMALL {
        (0.5 * (u_l + u_r), ContactKind::Fallback)
    } else {
        (
            (p_r - p_l + m_l * u_l - m_r * u_r) / denominator,
            ContactKind::JumpCondition,
        )
    };
    if s_star < s_l || s_star > s_r {
        (s_star.max(s_l).min(s_r), ContactKind::Clamped)
    } else {
        (s_star, contact)
    }
}

/// Davis/Einfeldt-type outer speeds around the Roe-averaged sound speed, and
/// the contact speed between them. `u_l`, `u_r` are the normal velocities
/// already expressed in the frame of the face.
pub fn estimate_wave_speeds(
    left: &FaceState,
    right: &FaceState,
    u_l: f64,
    u_r: f64,
    k_roe: f64,
) -> WaveSpeedEstimate {
    let a_roe = roe_sound_speed(left.rho, right.rho, left.a, right.a, k_roe);
    let s_l = u_l.min(u_r) - a_roe;
    let s_r = u_l.max(u_r) + a_roe;
    let (s_star, contact) = contact_speed(left.p, right.p, left.rho, right.rho, u_l, u_r, s_l, s_r);
    WaveSpeedEstimate {
        s_l,
        s_r,
        s_star,
        contact,
    }
}
