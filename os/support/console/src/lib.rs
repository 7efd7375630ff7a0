//! # Firmware console output
//!
//! Allocation-free text output over a single-byte [`CharSink`], plus a
//! [`log`] backend so the rest of the firmware can use `error!`, `warn!`,
//! `info!` and friends.
//!
//! ## Output format
//!
//! [`ConsoleLogger`] prints one line per record:
//!
//! ```text
//! [E/target] message
//! [W/target] message
//! ```
//!
//! With colors enabled (runtime via [`ConsoleLogger::with_color`], or by
//! default with the `color` feature) the line is wrapped in an ANSI color:
//! red for errors, yellow for warnings, green for info, blue for debug.
//!
//! ## Features
//!
//! - `enabled` (default): output is compiled in. Without it, every write is a
//!   no-op and [`console_print!`] costs nothing.
//! - `color`: loggers start with colors on.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console::{CharSink, ConsoleLogger};
//! use log::{LevelFilter, info};
//!
//! struct Uart;
//!
//! impl CharSink for Uart {
//!     fn put_byte(&self, byte: u8) {
//!         // write to the transmit register
//!         # let _ = byte;
//!     }
//! }
//!
//! static LOGGER: ConsoleLogger<Uart> = ConsoleLogger::new(Uart, LevelFilter::Info);
//!
//! LOGGER.init().expect("logger initialization");
//! info!("clock configured");
//! console::console_println!(&Uart, "raw line {}", 42);
//! ```
//!
//! The memory primitives in `fastmem` never log; this crate is for the code
//! around them.

#![cfg_attr(not(any(test, doctest)), no_std)]

mod logger;
mod sink;

pub use logger::{ConsoleLogger, level_style};
pub use sink::{CharSink, SinkWriter};

#[doc(hidden)]
pub use sink::write_to;

/// Formats directly into a [`CharSink`], bypassing the logger.
#[macro_export]
macro_rules! console_print {
    ($sink:expr, $($arg:tt)*) => {{
        // No allocation: `format_args!` builds a lightweight `Arguments`.
        $crate::write_to($sink, core::format_args!($($arg)*));
    }};
}

/// [`console_print!`] followed by a newline.
#[macro_export]
macro_rules! console_println {
    ($sink:expr, $($arg:tt)*) => {{
        $crate::write_to($sink, core::format_args!($($arg)*));
        $crate::write_to($sink, core::format_args!("\n"));
    }};
}
