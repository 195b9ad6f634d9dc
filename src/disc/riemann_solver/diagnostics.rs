use std::sync::atomic::{AtomicU64, Ordering};

use super::hllc_ale::Region;
use super::wave_speed::{ContactKind, WaveSpeedEstimate};

/// Snapshot of the flux counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FluxStatistics {
    pub evaluations: u64,
    pub degenerate_contact: u64,
    pub clamped_contact: u64,
    pub left_upwind: u64,
    pub left_star: u64,
    pub right_star: u64,
    pub right_upwind: u64,
}
impl FluxStatistics {
    pub fn star_ratio(&self) -> f64 {
        if self.evaluations > 0 {
            (self.left_star + self.right_star) as f64 / self.evaluations as f64
        } else {
            0.0
        }
    }
}

/// Lock-free counters shared by reference between face workers.
#[derive(Debug, Default)]
pub struct FluxDiagnostics {
    evaluations: AtomicU64,
    degenerate_contact: AtomicU64,
    clamped_contact: AtomicU64,
    left_upwind: AtomicU64,
    left_star: AtomicU64,
    right_star: AtomicU64,
    right_upwind: AtomicU64,
}
impl FluxDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn record(&self, waves: &WaveSpeedEstimate, region: Region) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        match waves.contact {
            ContactKind::JumpCondition => {}
            ContactKind::Fallback => {
                self.degenerate_contact.fetch_add(1, Ordering::Relaxed);
            }
            ContactKind::Clamped => {
                self.clamped_contact.fetch_add(1, Ordering::Relaxed);
            }
        }
        let counter = match region {
            Region::LeftUpwind => &self.left_upwind,
            Region::LeftStar => &self.left_star,
            Region::RightStar => &self.right_star,
            Region::RightUpwind => &self.right_upwind,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
    pub fn snapshot(&self) -> FluxStatistics {
        FluxStatistics {
            evaluations: self.evaluations.load(Ordering::Relaxed),
            degenerate_contact: self.degenerate_contact.load(Ordering::Relaxed),
            clamped_contact: self.clamped_contact.load(Ordering::Relaxed),
            left_upwind: self.left_upwind.load(Ordering::Relaxed),
            left_star: self.left_star.load(Ordering::Relaxed),
            right_star: self.right_star.load(Ordering::Relaxed),
            right_upwind: self.right_upwind.load(Ordering::Relaxed),
        }
    }
    pub fn reset(&self) {
        self.evaluations.store(0, Ordering::Relaxed);
        self.degenerate_contact.store(0, Ordering::Relaxed);
        self.clamped_contact.store(0, Ordering::Relaxed);
        self.left_upwind.store(0, Ordering::Relaxed);
        self.left_star.store(0, Ordering::Relaxed);
        self.right_star.store(0, Ordering::Relaxed);
        self.right_upwind.store(0, Ordering::Relaxed);
    }
}
