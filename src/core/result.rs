//! What a successful or limited `Driver::run` returns.

use std::fmt;

use crate::core::linalg::{Matrix, Vector};
use crate::core::stats::Stats;
use crate::core::status::Status;

/// The best point found, its stats, and the reason the run stopped.
pub struct DriverResult {
    x_star: Vector,
    f_star: f64,
    g_star: Option<Vector>,
    h_star: Option<Matrix>,
    stats: Stats,
    status: Status,
}

impl DriverResult {
    pub(crate) fn new(
        x_star: Vector,
        f_star: f64,
        g_star: Option<Vector>,
        h_star: Option<Matrix>,
        stats: Stats,
        status: Status,
    ) -> Self {
        DriverResult {
            x_star,
            f_star,
            g_star,
            h_star,
            stats,
            status,
        }
    }

    pub fn x_star(&self) -> &Vector {
        &self.x_star
    }

    pub fn f_star(&self) -> f64 {
        self.f_star
    }

    pub fn g_star(&self) -> Option<&Vector> {
        self.g_star.as_ref()
    }

    pub fn h_star(&self) -> Option<&Matrix> {
        self.h_star.as_ref()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

impl fmt::Display for DriverResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DriverResult(f* = {}, major_iters = {}, status = {})",
            self.f_star,
            self.stats.major_iters(),
            self.status
        )
    }
}
