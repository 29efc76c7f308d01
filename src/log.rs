use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
}

/// Most verbose level compiled into this build. Calls above it fold away.
#[cfg(feature = "max-level-error")]
pub const STATIC_MAX_LEVEL: LogLevel = LogLevel::Error;
#[cfg(all(feature = "max-level-warn", not(feature = "max-level-error")))]
pub const STATIC_MAX_LEVEL: LogLevel = LogLevel::Warn;
#[cfg(not(any(feature = "max-level-error", feature = "max-level-warn")))]
pub const STATIC_MAX_LEVEL: LogLevel = LogLevel::Info;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl LogLevel {
    /// Map a numeric verbosity (0=errors, 1=errors+warnings, 2=info) to a level.
    /// Anything above 2 is treated as the most verbose level.
    pub const fn from_verbosity(verbosity: u64) -> LogLevel {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            _ => LogLevel::Info,
        }
    }

    pub const fn stream(self) -> Stream {
        match self {
            LogLevel::Error => Stream::Stderr,
            LogLevel::Warn | LogLevel::Info => Stream::Stdout,
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[1;31m",
            LogLevel::Warn => "\x1b[33m",
            LogLevel::Info => "\x1b[34m",
        }
    }

    /// Whether this level survives the compile-time ceiling.
    #[inline]
    pub const fn is_static_enabled(self) -> bool {
        self as u8 <= STATIC_MAX_LEVEL as u8
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown log level '{}' (expected error, warn or info)", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub level: LogLevel,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            level: STATIC_MAX_LEVEL,
            color: true,
        }
    }
}

/// Runtime threshold plus output style, built once at startup.
///
/// The compile-time ceiling still applies: a printer configured for INFO in a
/// `max-level-warn` build never prints INFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    level: LogLevel,
    color: bool,
}

impl Printer {
    /// Printer used by the macro forms that take no explicit printer.
    ///
    /// Always colored: being a constant it cannot look at `NO_COLOR` or any
    /// other runtime setting. Build a [`Printer`] from a [`Config`] and use the
    /// `printer:` macro forms when color has to be switched off.
    pub const STATIC: Printer = Printer::new(Config {
        level: STATIC_MAX_LEVEL,
        color: true,
    });

    pub const fn new(config: Config) -> Self {
        Self {
            level: config.level,
            color: config.color,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.is_static_enabled() && level <= self.level
    }

    /// Write one message to the stream owned by `level`. Write errors are dropped.
    pub fn emit(&self, level: LogLevel, args: fmt::Arguments) {
        if !self.enabled(level) {
            return;
        }

        let _ = match level.stream() {
            Stream::Stderr => self.write_to(&mut io::stderr().lock(), level, args),
            Stream::Stdout => self.write_to(&mut io::stdout().lock(), level, args),
        };
    }

    /// Render `args` for `level` and hand it to `writer` in a single write.
    /// Does not consult the threshold.
    pub fn write_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        level: LogLevel,
        args: fmt::Arguments,
    ) -> io::Result<()> {
        writer.write_all(self.render(level, args).as_bytes())
    }

    fn render(&self, level: LogLevel, args: fmt::Arguments) -> String {
        let text = fmt::format(args);
        if !self.color || text.is_empty() {
            return text;
        }

        // keep the trailing newline outside the escape so color doesn't bleed
        match text.strip_suffix('\n') {
            Some(body) => format!("{}{}{}\n", level.color(), body, RESET),
            None => format!("{}{}{}", level.color(), text, RESET),
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Printer::new(Config::default())
    }
}

/// Print at `$required_level` when it is within `$current_level` and the
/// compile-time ceiling. With `printer: p` the printer's own threshold and
/// color setting are used instead. Arguments are not evaluated when suppressed.
#[macro_export]
macro_rules! log_print {
    (printer: $printer:expr, $required_level:expr, $($arg:tt)+) => {{
        let printer: &$crate::Printer = &$printer;
        let required: $crate::LogLevel = $required_level;
        if printer.enabled(required) {
            printer.emit(required, format_args!($($arg)+));
        }
    }};
    ($current_level:expr, $required_level:expr, $($arg:tt)+) => {{
        let required: $crate::LogLevel = $required_level;
        if required.is_static_enabled() && required <= $current_level {
            $crate::Printer::STATIC.emit(required, format_args!($($arg)+));
        }
    }};
}

/// Bold red, stderr.
#[macro_export]
macro_rules! print_error {
    (printer: $printer:expr, $($arg:tt)+) => {
        $crate::log_print!(printer: $printer, $crate::LogLevel::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_print!($crate::STATIC_MAX_LEVEL, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Yellow, stdout.
#[macro_export]
macro_rules! print_warn {
    (printer: $printer:expr, $($arg:tt)+) => {
        $crate::log_print!(printer: $printer, $crate::LogLevel::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_print!($crate::STATIC_MAX_LEVEL, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Blue, stdout.
#[macro_export]
macro_rules! print_info {
    (printer: $printer:expr, $($arg:tt)+) => {
        $crate::log_print!(printer: $printer, $crate::LogLevel::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_print!($crate::STATIC_MAX_LEVEL, $crate::LogLevel::Info, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(level: LogLevel) -> Printer {
        Printer::new(Config { level, color: false })
    }

    fn written(printer: &Printer, level: LogLevel, args: fmt::Arguments) -> String {
        let mut out: Vec<u8> = Vec::new();
        printer.write_to(&mut out, level, args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
    }

    #[test]
    fn test_level_streams() {
        assert_eq!(LogLevel::Error.stream(), Stream::Stderr);
        assert_eq!(LogLevel::Warn.stream(), Stream::Stdout);
        assert_eq!(LogLevel::Info.stream(), Stream::Stdout);
    }

    #[test]
    fn test_from_verbosity() {
        assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
        assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warn);
        assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
        assert_eq!(LogLevel::from_verbosity(9), LogLevel::Info);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert!("trace".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_format_substitution() {
        let printer = plain(LogLevel::Info);
        assert_eq!(
            written(&printer, LogLevel::Error, format_args!("Error with value: {}\n", 42)),
            "Error with value: 42\n"
        );
        assert_eq!(
            written(&printer, LogLevel::Info, format_args!("Info with float: {:.2}\n", 3.14159)),
            "Info with float: 3.14\n"
        );
        assert_eq!(
            written(&printer, LogLevel::Warn, format_args!("Warning with string: {}\n", "important")),
            "Warning with string: important\n"
        );
        assert_eq!(
            written(
                &printer,
                LogLevel::Info,
                format_args!("Status report: {}, Count: {}, Progress: {:.1}%\n", "active", 5, 85.5f32)
            ),
            "Status report: active, Count: 5, Progress: 85.5%\n"
        );
    }

    #[test]
    fn test_colors_wrap_message() {
        let printer = Printer::new(Config { level: LogLevel::Info, color: true });

        // reset goes before the newline
        assert_eq!(
            written(&printer, LogLevel::Error, format_args!("This is an error message\n")),
            "\x1b[1;31mThis is an error message\x1b[0m\n"
        );
        assert_eq!(
            written(&printer, LogLevel::Warn, format_args!("no newline")),
            "\x1b[33mno newline\x1b[0m"
        );
        assert_eq!(
            written(&printer, LogLevel::Info, format_args!("x\n")),
            "\x1b[34mx\x1b[0m\n"
        );
    }

    #[test]
    fn test_empty_message_writes_nothing() {
        let printer = Printer::new(Config { level: LogLevel::Info, color: true });
        assert_eq!(written(&printer, LogLevel::Info, format_args!("")), "");
        assert_eq!(written(&printer, LogLevel::Error, format_args!("{}", "")), "");
    }

    #[test]
    fn test_static_printer_is_colored() {
        assert_eq!(Printer::STATIC.level(), STATIC_MAX_LEVEL);
        assert_eq!(
            written(&Printer::STATIC, LogLevel::Error, format_args!("x\n")),
            "\x1b[1;31mx\x1b[0m\n"
        );
    }

    #[test]
    fn test_printer_threshold() {
        let errors_only = plain(LogLevel::Error);
        assert!(errors_only.enabled(LogLevel::Error));
        assert!(!errors_only.enabled(LogLevel::Warn));
        assert!(!errors_only.enabled(LogLevel::Info));

        // capped by the build-time ceiling
        let warnings = plain(LogLevel::Warn);
        assert_eq!(warnings.enabled(LogLevel::Warn), LogLevel::Warn.is_static_enabled());
        assert!(!warnings.enabled(LogLevel::Info));
    }

    #[test]
    fn test_suppressed_args_not_evaluated() {
        let printer = plain(LogLevel::Error);
        let mut calls = 0;
        let mut bump = || {
            calls += 1;
            calls
        };

        crate::print_warn!(printer: printer, "{}", bump());
        crate::print_info!(printer: &printer, "{}", bump());
        crate::log_print!(LogLevel::Error, LogLevel::Info, "{}", bump());

        assert_eq!(calls, 0);
    }

    #[cfg(not(any(feature = "max-level-error", feature = "max-level-warn")))]
    #[test]
    fn test_static_ceiling_default_is_info() {
        assert_eq!(STATIC_MAX_LEVEL, LogLevel::Info);
        assert!(LogLevel::Info.is_static_enabled());
        assert_eq!(Printer::default().level(), LogLevel::Info);
    }

    #[cfg(all(feature = "max-level-warn", not(feature = "max-level-error")))]
    #[test]
    fn test_static_ceiling_warn() {
        assert_eq!(STATIC_MAX_LEVEL, LogLevel::Warn);
        let printer = plain(LogLevel::Info);
        assert!(printer.enabled(LogLevel::Error));
        assert!(printer.enabled(LogLevel::Warn));
        assert!(!printer.enabled(LogLevel::Info));
    }

    #[cfg(feature = "max-level-error")]
    #[test]
    fn test_static_ceiling_blocks_printer() {
        let printer = plain(LogLevel::Info);
        assert!(!printer.enabled(LogLevel::Warn));
        assert!(!printer.enabled(LogLevel::Info));
        assert!(printer.enabled(LogLevel::Error));
    }
}
