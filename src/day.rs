//! Simulation of a single business day.

use crate::queues::{QueueTag, TaggedQueues};
use crate::random::RandomSource;

/// Opening time in minutes since midnight (10:00).
pub const OPEN_TIME: f64 = 10.0 * 60.0;

/// Closing time in minutes since midnight (16:00). Nobody is admitted after
/// close, but customers already queued are still served.
pub const CLOSE_TIME: f64 = 16.0 * 60.0;

/// Revenue from a single privilege ticket sale.
pub const PRIVILEGE_TICKET_PRICE: u64 = 30;

/// Aggregate statistics for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayResult {
    /// Revenue from privilege ticket sales.
    pub privilege_ticket_profit: u64,
    /// Mean wait in minutes across every served customer, 0.0 if none.
    pub avg_wait_all: f64,
    /// Mean wait across privilege-queue customers, 0.0 if none.
    pub avg_wait_privilege: f64,
    /// Mean wait across regular-queue customers, 0.0 if none.
    pub avg_wait_regular: f64,
    /// Customers served from the privilege queue.
    pub privilege_served: usize,
    /// Customers served from the regular queue.
    pub regular_served: usize,
}

impl DayResult {
    /// Total customers served over the day.
    pub fn total_served(&self) -> usize {
        self.privilege_served + self.regular_served
    }
}

/// Generate one day's arrival timestamps.
///
/// Starting at open time, repeatedly draws an exponential inter-arrival gap
/// with the given mean and advances a cursor. The first draw to land at or
/// past close time ends the day; that arrival is discarded.
pub fn generate_arrivals(arrival_mean: f64, source: &mut RandomSource) -> Vec<f64> {
    let mut arrivals = Vec::new();
    let mut cursor = OPEN_TIME;

    loop {
        cursor += source.exponential(arrival_mean);
        if cursor >= CLOSE_TIME {
            break;
        }
        arrivals.push(cursor);
    }

    arrivals
}

/// Simulate one day: generate arrivals, route them through the two queues,
/// serve everyone, and aggregate wait-time statistics.
///
/// `arrival_mean` and `service_mean` are the means (in minutes) of the
/// exponential inter-arrival and service-time distributions.
pub fn simulate_day(
    arrival_mean: f64,
    service_mean: f64,
    source: &mut RandomSource,
) -> DayResult {
    let arrivals = generate_arrivals(arrival_mean, source);

    let mut queues = TaggedQueues::new();
    let mut waits = WaitTimes::default();
    let mut profit = 0u64;
    let mut current_time = OPEN_TIME;

    for &arrival in &arrivals {
        // Catch up on service that completed before this customer walked in.
        while current_time <= arrival && !queues.is_empty() {
            serve_next(&mut queues, &mut current_time, service_mean, source, &mut waits);
        }

        match assign_arrival(&queues, source) {
            QueueTag::Privilege => {
                profit += PRIVILEGE_TICKET_PRICE;
                queues.push(QueueTag::Privilege, arrival);
            }
            QueueTag::Regular => queues.push(QueueTag::Regular, arrival),
        }
    }

    // Serve whoever is still queued, past close time if necessary.
    while !queues.is_empty() {
        serve_next(&mut queues, &mut current_time, service_mean, source, &mut waits);
    }

    waits.into_result(profit)
}

/// Decide which queue a new arrival joins.
///
/// The privilege ticket is only offered to customers who would otherwise
/// wait: if both queues are empty the arrival joins the regular queue
/// without a coin flip (and without a profit increment).
fn assign_arrival(queues: &TaggedQueues, source: &mut RandomSource) -> QueueTag {
    if !queues.is_empty() && source.coin_flip() {
        QueueTag::Privilege
    } else {
        QueueTag::Regular
    }
}

/// Serve the next queued customer: record their wait, then advance the
/// service-completion cursor by a freshly drawn service duration.
fn serve_next(
    queues: &mut TaggedQueues,
    current_time: &mut f64,
    service_mean: f64,
    source: &mut RandomSource,
    waits: &mut WaitTimes,
) {
    if let Some((tag, entered_at)) = queues.pop_next() {
        let wait = (*current_time - entered_at).max(0.0);
        waits.record(tag, wait);
        *current_time += source.exponential(service_mean);
    }
}

/// Recorded waits for one day, split by queue.
#[derive(Debug, Default)]
struct WaitTimes {
    privilege: Vec<f64>,
    regular: Vec<f64>,
}

impl WaitTimes {
    fn record(&mut self, tag: QueueTag, wait: f64) {
        match tag {
            QueueTag::Privilege => self.privilege.push(wait),
            QueueTag::Regular => self.regular.push(wait),
        }
    }

    fn into_result(self, profit: u64) -> DayResult {
        let privilege_served = self.privilege.len();
        let regular_served = self.regular.len();
        let total_served = privilege_served + regular_served;

        let avg_wait_all = if total_served == 0 {
            0.0
        } else {
            (self.privilege.iter().sum::<f64>() + self.regular.iter().sum::<f64>())
                / total_served as f64
        };

        DayResult {
            privilege_ticket_profit: profit,
            avg_wait_all,
            avg_wait_privilege: mean(&self.privilege),
            avg_wait_regular: mean(&self.regular),
            privilege_served,
            regular_served,
        }
    }
}

/// Arithmetic mean, defaulting to 0.0 for an empty list.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
