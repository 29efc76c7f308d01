//! Leveled, colored console printing.
//!
//! `print_error!` goes to stderr in bold red, `print_warn!` and `print_info!`
//! go to stdout in yellow and blue. Calls above the active threshold are
//! dropped before their arguments are evaluated.
//!
//! Without a printer the threshold is [`STATIC_MAX_LEVEL`], picked at build
//! time with the `max-level-error` / `max-level-warn` features:
//!
//! ```
//! use print_debug::{print_error, print_info, print_warn};
//!
//! print_error!("Error with value: {}\n", 42);
//! print_warn!("Warning with string: {}\n", "important");
//! print_info!("Info with float: {:.2}\n", 2.5);
//! ```
//!
//! A [`Printer`] adds a runtime threshold on top of that:
//!
//! ```
//! use print_debug::{print_info, Config, LogLevel, Printer};
//!
//! fn expensive() -> String {
//!     panic!("suppressed calls don't evaluate their arguments")
//! }
//!
//! let printer = Printer::new(Config { level: LogLevel::Error, color: false });
//! print_info!(printer: printer, "never formatted: {}", expensive());
//! ```

pub mod log;

pub use crate::log::{Config, LogLevel, ParseLevelError, Printer, STATIC_MAX_LEVEL, Stream};
