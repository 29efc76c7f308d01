use std::env;
use std::io::{self, Write};
use anyhow::{Context, Result};
use clap::{Parser};

use print_debug::{print_error, print_info, print_warn};
use print_debug::{Config, LogLevel, ParseLevelError, Printer};

const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(long_about = None)]
struct Cli {
    /// Verbosity (0=errors, 1=errors+warnings, 2=info), or a level name
    #[arg(short, long, value_name="VERBOSITY", default_value="info",
          value_parser=parse_level)]
    log_level: LogLevel,

    /// Print without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Use the build-time threshold only (always colored)
    #[arg(long = "static", conflicts_with_all = ["log_level", "no_color"])]
    static_level: bool,
}

fn parse_level(s: &str) -> Result<LogLevel, ParseLevelError> {
    match s.parse::<u64>() {
        Ok(verbosity) if verbosity <= 2 => Ok(LogLevel::from_verbosity(verbosity)),
        _ => s.parse(),
    }
}

fn color_enabled(cli: &Cli) -> bool {
    if cli.no_color {
        return false;
    }
    !matches!(env::var_os("NO_COLOR"), Some(v) if !v.is_empty())
}

#[allow(clippy::approx_constant)]
fn run(printer: &Printer) {
    print_info!(printer: printer, "print_debug_demo -- version {} (level {})\n",
                PROGRAM_VERSION, printer.level());

    print_error!(printer: printer, "This is an error message\n");
    print_error!(printer: printer, "Error with value: {}\n", 42);

    print_warn!(printer: printer, "This is a warning message\n");
    print_warn!(printer: printer, "Warning with string: {}\n", "important");

    print_info!(printer: printer, "This is an info message\n");
    print_info!(printer: printer, "Info with float: {:.2}\n", 3.14159);

    let count = 5;
    let status = "active";
    let percentage = 85.5f32;

    print_info!(printer: printer, "Status report: {}, Count: {}, Progress: {:.1}%\n",
                status, count, percentage);
    print_warn!(printer: printer, "Warning threshold reached at {}%\n", 75);
    print_error!(printer: printer, "Critical error in {} at line {}\n", file!(), line!());
}

fn run_static() {
    print_error!("This is an error message\n");
    print_error!("Error with value: {}\n", 42);

    print_warn!("This is a warning message\n");
    print_warn!("Warning with string: {}\n", "important");

    print_info!("This is an info message\n");
    print_info!("Status report: {}, Count: {}, Progress: {:.1}%\n", "active", 5, 85.5f32);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.static_level {
        run_static();
    } else {
        let printer = Printer::new(Config {
            level: cli.log_level,
            color: color_enabled(&cli),
        });
        run(&printer);
    }

    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}
