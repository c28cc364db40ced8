//! Rounding and console presentation of campaign results.

use crate::campaign::CampaignSummary;

/// How the final wait-time averages are rounded for display.
///
/// Both published variants of the tool are display modes of the same
/// simulation, not distinct behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round to the nearest whole minute.
    #[default]
    Nearest,
    /// Round to the nearest multiple of ten minutes.
    NearestTen,
}

impl Rounding {
    /// Round a wait-time average for display.
    pub fn apply(self, value: f64) -> i64 {
        match self {
            Rounding::Nearest => value.round() as i64,
            Rounding::NearestTen => (value / 10.0).round() as i64 * 10,
        }
    }
}

/// The three stdout lines: rounded campaign averages for the combined,
/// privilege-only and regular-only per-day wait-time means.
pub fn render_waits(summary: &CampaignSummary, rounding: Rounding) -> [i64; 3] {
    [
        rounding.apply(summary.avg_wait_all),
        rounding.apply(summary.avg_wait_privilege),
        rounding.apply(summary.avg_wait_regular),
    ]
}

/// Print the campaign result, one rounded average per line.
pub fn print_summary(summary: &CampaignSummary, rounding: Rounding) {
    for value in render_waits(summary, rounding) {
        println!("{value}");
    }
}
