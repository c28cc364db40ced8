//! Per-day log output, an optional collaborator of the campaign driver.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::day::DayResult;

/// A sink for one log row per simulated day.
///
/// Logging is a side effect, not core logic: a failing sink must never
/// abort a simulation. The campaign driver reports the failure and stops
/// logging for the rest of the run.
pub trait DayLog {
    /// Record one day's result. `day` counts from 1.
    fn record(&mut self, day: u32, result: &DayResult) -> io::Result<()>;
}

/// Discards every row.
#[derive(Debug, Default)]
pub struct NoopDayLog;

impl DayLog for NoopDayLog {
    fn record(&mut self, _day: u32, _result: &DayResult) -> io::Result<()> {
        Ok(())
    }
}

/// Comma-separated day log: a header row, then one row per day with the
/// wait-time columns formatted to two decimal places.
pub struct CsvDayLog<W: Write> {
    out: W,
}

impl CsvDayLog<BufWriter<File>> {
    /// Create (truncating) a log file at `path` and write the header row.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> CsvDayLog<W> {
    /// Wrap a writer and emit the header row.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "Day, Profit, AvgWaitAll, AvgWaitPrivilege, AvgWaitRegular")?;
        Ok(Self { out })
    }

    /// Consume the log, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DayLog for CsvDayLog<W> {
    fn record(&mut self, day: u32, result: &DayResult) -> io::Result<()> {
        writeln!(
            self.out,
            "{}, {}, {:.2}, {:.2}, {:.2}",
            day,
            result.privilege_ticket_profit,
            result.avg_wait_all,
            result.avg_wait_privilege,
            result.avg_wait_regular
        )
    }
}
