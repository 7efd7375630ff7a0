mod checks;

use checks::CheckError;
use console::{CharSink, ConsoleLogger};
use log::{LevelFilter, error, info};
use std::io::Write;
use std::process::ExitCode;
use std::{env, io};

const DEFAULT_MAX_LEN: usize = 256;

struct Stdout;

impl CharSink for Stdout {
    fn put_byte(&self, byte: u8) {
        self.put_bytes(&[byte]);
    }

    fn put_bytes(&self, bytes: &[u8]) {
        // Nowhere to report a broken pipe.
        let _ = io::stdout().lock().write_all(bytes);
    }
}

static LOGGER: ConsoleLogger<Stdout> = ConsoleLogger::new(Stdout, LevelFilter::Trace);

type Check = fn(usize) -> Result<usize, CheckError>;

const CHECKS: [(&str, Check); 8] = [
    ("fill", checks::fill),
    ("copy", checks::copy),
    ("copy_overlapping", checks::copy_overlapping),
    ("compare", checks::compare),
    ("search", checks::search),
    ("sequences", checks::sequences),
    ("sequence_copies", checks::sequence_copies),
    ("sequence_compare", checks::sequence_compare),
];

fn main() -> ExitCode {
    // args: [max_len] [level]
    let mut args = env::args().skip(1);
    let max_len = match args.next().map(|s| s.parse::<usize>()) {
        None => DEFAULT_MAX_LEN,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("usage: memcheck [max_len] [error|warn|info|debug|trace]: {e}");
            return ExitCode::from(2);
        }
    };
    let level = match args.next().map(|s| s.parse::<LevelFilter>()) {
        None => LevelFilter::Info,
        Some(Ok(level)) => level,
        Some(Err(e)) => {
            eprintln!("usage: memcheck [max_len] [error|warn|info|debug|trace]: {e}");
            return ExitCode::from(2);
        }
    };

    if LOGGER.init().is_err() {
        eprintln!("memcheck: logger already installed");
        return ExitCode::FAILURE;
    }
    log::set_max_level(level);

    info!("sweeping lengths 0..={max_len} over {} offsets", checks::OFFSETS);
    let mut failed = 0;
    for (name, check) in CHECKS {
        match check(max_len) {
            Ok(cases) => info!("{name}: {cases} cases ok"),
            Err(e) => {
                error!("{name}: {e}");
                failed += 1;
            }
        }
    }

    if failed == 0 {
        info!("all checks passed");
        ExitCode::SUCCESS
    } else {
        error!("{failed} of {} checks failed", CHECKS.len());
        ExitCode::FAILURE
    }
}
