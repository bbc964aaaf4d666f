use std::io;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use emptyset_core::{Probe, ServiceState, Thresholds, run_checks};
use emptyset_probe::{NftSetProbe, RouteTableProbe};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "emptyset",
    version,
    about = "Monitoring probes ensuring routing tables and firewall sets stay empty"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ensure a set of Bird tables are empty.
    Routes(RouteArgs),
    /// Ensure some nftables sets are empty.
    Sets(SetArgs),
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Number of routes in each table at which the check enters warning state.
    #[arg(short, long, value_name = "COUNT")]
    warning_threshold: Option<u64>,
    /// Number of routes in each table at which the check enters critical state.
    #[arg(short, long, value_name = "COUNT")]
    critical_threshold: Option<u64>,
    /// Bird tables that get inspected.
    #[arg(value_name = "TABLE")]
    tables: Vec<String>,
}

#[derive(Args, Debug)]
struct SetArgs {
    /// Number of elements in each set at which the check enters warning state.
    #[arg(short, long, value_name = "COUNT")]
    warning_threshold: Option<u64>,
    /// Number of elements in each set at which the check enters critical state.
    #[arg(short, long, value_name = "COUNT")]
    critical_threshold: Option<u64>,
    /// Names of nftables sets that get inspected. Each name should be a full
    /// specification that nftables understands, e.g. "[family] table_name set_name".
    #[arg(value_name = "SET")]
    sets: Vec<String>,
}

fn main() -> ExitCode {
    init_debug_tracing();

    let cli = Cli::parse();
    let code = match cli.command {
        Command::Routes(args) => {
            let thresholds = Thresholds {
                warning: args.warning_threshold,
                critical: args.critical_threshold,
            };
            run(&RouteTableProbe::default(), &args.tables, &thresholds)
        }
        Command::Sets(args) => {
            let thresholds = Thresholds {
                warning: args.warning_threshold,
                critical: args.critical_threshold,
            };
            run(&NftSetProbe::default(), &args.sets, &thresholds)
        }
    };
    ExitCode::from(code)
}

/// Drive one probe over every target and report the outcome.
///
/// Prints one line per breaching target, or a single `error:` line when the
/// run dies, and returns the plugin exit code.
fn run<P: Probe>(probe: &P, targets: &[String], thresholds: &Thresholds) -> u8 {
    if targets.is_empty() {
        println!("error: no targets were specified");
        return ServiceState::Unknown.exit_code();
    }

    tracing::debug!(
        event = "run_started",
        source = probe.source(),
        warning = ?thresholds.warning,
        critical = ?thresholds.critical,
        targets = targets.len(),
    );

    match run_checks(probe, targets, thresholds) {
        Ok(report) => {
            for message in report.messages() {
                println!("{message}");
            }
            ServiceState::from(report.state()).exit_code()
        }
        Err(err) => {
            println!("error: {err}");
            ServiceState::Unknown.exit_code()
        }
    }
}

/// The DEBUG environment variable turns on verbose tracing to stdout.
fn init_debug_tracing() {
    if std::env::var_os("DEBUG").is_none() {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_writer(io::stdout)
        .with_target(false)
        .init();
}
