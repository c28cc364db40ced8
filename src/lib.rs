//! Monte Carlo simulation of a single-server ticket office where waiting
//! customers can buy a privilege ticket to join a strict-priority queue.

mod campaign;
mod day;
mod daylog;
mod error;
mod queues;
mod random;
mod report;

pub use campaign::{run_campaign, CampaignConfig, CampaignSummary};
pub use day::{
    generate_arrivals, simulate_day, DayResult, CLOSE_TIME, OPEN_TIME, PRIVILEGE_TICKET_PRICE,
};
pub use daylog::{CsvDayLog, DayLog, NoopDayLog};
pub use error::ParameterError;
pub use queues::{QueueTag, TaggedQueues};
pub use random::RandomSource;
pub use report::{print_summary, render_waits, Rounding};
