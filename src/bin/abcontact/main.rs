use std::process::ExitCode;

use env_logger::{Builder, Env};

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod util;

use cli::{Cli, Command};

fn main() -> ExitCode {
    init_logging();

    let cli = cli::parse();
    let ctx = display::Context::detect(is_quiet(&cli));

    if ctx.interactive {
        display::print_banner();
    }

    if let Err(e) = commands::dispatch(cli.command, ctx) {
        display::print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn is_quiet(cli: &Cli) -> bool {
    match &cli.command {
        Command::Find(args) => args.io.quiet,
        Command::Chains(args) => args.quiet,
    }
}
