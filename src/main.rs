//! Interactive entry point: read campaign parameters from stdin, run the
//! simulation, print the rounded wait-time averages.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tracing::warn;

use skip_the_line::{
    print_summary, run_campaign, CampaignConfig, CsvDayLog, DayLog, NoopDayLog, ParameterError,
    RandomSource, Rounding,
};

const DEFAULT_LOG_FILE: &str = "simulation_log.txt";

const USAGE: &str = "usage: skip-the-line [--seed <u64>] [--log <path> | --no-log] [--round-tens]";

#[derive(Debug)]
struct Args {
    /// Seed for reproducible runs; OS entropy when absent.
    seed: Option<u64>,
    /// Day log destination; `None` disables logging.
    log_path: Option<PathBuf>,
    rounding: Rounding,
}

impl Args {
    fn parse(mut argv: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut args = Args {
            seed: None,
            log_path: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            rounding: Rounding::Nearest,
        };

        while let Some(arg) = argv.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = argv
                        .next()
                        .ok_or_else(|| "--seed requires a value".to_string())?;
                    let seed = value
                        .parse()
                        .map_err(|_| format!("invalid seed: {value}"))?;
                    args.seed = Some(seed);
                }
                "--log" => {
                    let value = argv
                        .next()
                        .ok_or_else(|| "--log requires a path".to_string())?;
                    args.log_path = Some(PathBuf::from(value));
                }
                "--no-log" => args.log_path = None,
                "--round-tens" => args.rounding = Rounding::NearestTen,
                other => return Err(format!("unknown argument: {other}")),
            }
        }

        Ok(args)
    }
}

/// Why a line of user input was rejected.
#[derive(Debug, Error)]
enum InputError {
    #[error("expected three values: n a s")]
    WrongValueCount,

    #[error("could not parse {0:?} as a number")]
    NotANumber(String),

    #[error("number of days {0} is out of range")]
    TooManyDays(i64),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Parse one input line holding `n a s`.
fn parse_parameters(line: &str) -> Result<CampaignConfig, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[n, a, s] = tokens.as_slice() else {
        return Err(InputError::WrongValueCount);
    };

    let n: i64 = n
        .parse()
        .map_err(|_| InputError::NotANumber(n.to_string()))?;
    if n <= 0 {
        return Err(ParameterError::NonPositiveDays(n).into());
    }
    let days = u32::try_from(n).map_err(|_| InputError::TooManyDays(n))?;

    let arrival_mean: f64 = a
        .parse()
        .map_err(|_| InputError::NotANumber(a.to_string()))?;
    let service_mean: f64 = s
        .parse()
        .map_err(|_| InputError::NotANumber(s.to_string()))?;

    let config = CampaignConfig {
        days,
        arrival_mean,
        service_mean,
    };
    config.validate()?;
    Ok(config)
}

/// Prompt until a valid parameter line is supplied. `None` on end of input.
fn read_parameters() -> io::Result<Option<CampaignConfig>> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("Enter n (days), a (mean inter-arrival minutes), s (mean service minutes): ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_parameters(&line) {
            Ok(config) => return Ok(Some(config)),
            Err(err) => {
                println!("Invalid input: {err}. Please enter positive values for n, a and s.");
            }
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let config = match read_parameters() {
        Ok(Some(config)) => config,
        Ok(None) => {
            eprintln!("no input supplied");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut log: Box<dyn DayLog> = match &args.log_path {
        Some(path) => match CsvDayLog::create(path) {
            Ok(log) => Box::new(log),
            Err(err) => {
                warn!(%err, path = %path.display(), "could not create day log, continuing without one");
                Box::new(NoopDayLog)
            }
        },
        None => Box::new(NoopDayLog),
    };

    let mut source = RandomSource::new(args.seed);

    match run_campaign(&config, &mut source, log.as_mut()) {
        Ok(summary) => {
            print_summary(&summary, args.rounding);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
