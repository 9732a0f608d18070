//! Nomen demo CLI
//!
//! Declares account roles and permissions at startup and exposes the
//! enumeration registry from the command line.

mod accounts;
mod commands;

use std::process::ExitCode;
use std::sync::Once;

use commands::{CommandError, Family};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=nomen=debug` or `RUST_LOG=nomen_demo=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn print_usage() {
    eprintln!("Usage: nomen-demo <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list                          List every registered value");
    eprintln!("  decode <family> <token>       Print the ordinal of a JSON token");
    eprintln!("  encode <family> <ordinal>     Print the JSON token of an ordinal");
    eprintln!("  grants <role-token>           Print the permissions of a role");
    eprintln!();
    eprintln!("Families: role, permission");
}

fn run(args: &[String]) -> Result<Vec<String>, CommandError> {
    match args {
        [command] if command == "list" => Ok(commands::list()),
        [command, family, token] if command == "decode" => {
            let family: Family = family.parse()?;
            commands::decode(family, token).map(|line| vec![line])
        }
        [command, family, ordinal] if command == "encode" => {
            let family: Family = family.parse()?;
            commands::encode(family, ordinal).map(|line| vec![line])
        }
        [command, token] if command == "grants" => commands::grants(token),
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    accounts::declare();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
