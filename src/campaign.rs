//! The multi-day campaign driver.

use tracing::{debug, warn};

use crate::day::{simulate_day, DayResult};
use crate::daylog::DayLog;
use crate::error::ParameterError;
use crate::random::RandomSource;

/// Parameters for a simulation campaign.
#[derive(Debug, Clone, Copy)]
pub struct CampaignConfig {
    /// Number of statistically independent days to simulate.
    pub days: u32,
    /// Mean inter-arrival time, in minutes.
    pub arrival_mean: f64,
    /// Mean service time, in minutes.
    pub service_mean: f64,
}

impl CampaignConfig {
    /// Reject non-positive parameters before anything is simulated.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.days == 0 {
            return Err(ParameterError::NonPositiveDays(0));
        }
        if !(self.arrival_mean > 0.0) {
            return Err(ParameterError::NonPositiveArrivalMean(self.arrival_mean));
        }
        if !(self.service_mean > 0.0) {
            return Err(ParameterError::NonPositiveServiceMean(self.service_mean));
        }
        Ok(())
    }
}

/// Campaign-wide aggregates.
///
/// The wait averages are means of per-day means: each day is one equally
/// weighted sample, regardless of how many customers it saw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CampaignSummary {
    /// Privilege ticket revenue summed over all days.
    pub total_profit: u64,
    /// Mean over days of each day's combined average wait.
    pub avg_wait_all: f64,
    /// Mean over days of each day's privilege-queue average wait.
    pub avg_wait_privilege: f64,
    /// Mean over days of each day's regular-queue average wait.
    pub avg_wait_regular: f64,
}

/// Running sums over a campaign, consumed once at the end.
#[derive(Debug, Default)]
struct Accumulator {
    total_profit: u64,
    sum_wait_all: f64,
    sum_wait_privilege: f64,
    sum_wait_regular: f64,
}

impl Accumulator {
    fn add(&mut self, result: &DayResult) {
        self.total_profit += result.privilege_ticket_profit;
        self.sum_wait_all += result.avg_wait_all;
        self.sum_wait_privilege += result.avg_wait_privilege;
        self.sum_wait_regular += result.avg_wait_regular;
    }

    fn finish(self, days: u32) -> CampaignSummary {
        let days = days as f64;
        CampaignSummary {
            total_profit: self.total_profit,
            avg_wait_all: self.sum_wait_all / days,
            avg_wait_privilege: self.sum_wait_privilege / days,
            avg_wait_regular: self.sum_wait_regular / days,
        }
    }
}

/// Run `config.days` independent day simulations and aggregate them.
///
/// All days draw from the single `source`, in order, so the whole campaign
/// is one reproducible pseudorandom stream; days are never reseeded. Each
/// day's result is offered to `log`; a failing log is reported once and
/// skipped for the rest of the run.
pub fn run_campaign(
    config: &CampaignConfig,
    source: &mut RandomSource,
    log: &mut dyn DayLog,
) -> Result<CampaignSummary, ParameterError> {
    config.validate()?;

    let mut acc = Accumulator::default();
    let mut log_healthy = true;

    for day in 1..=config.days {
        let result = simulate_day(config.arrival_mean, config.service_mean, source);

        debug!(
            day,
            profit = result.privilege_ticket_profit,
            served = result.total_served(),
            avg_wait_all = result.avg_wait_all,
            "day complete"
        );

        if log_healthy {
            if let Err(err) = log.record(day, &result) {
                warn!(%err, day, "day log write failed, logging disabled for this run");
                log_healthy = false;
            }
        }

        acc.add(&result);
    }

    Ok(acc.finish(config.days))
}
