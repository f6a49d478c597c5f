use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wsl_notify_send::cli::Cli;
use wsl_notify_send::dispatch::Dispatcher;
use wsl_notify_send::exit;
use wsl_notify_send::notify::DesktopClient;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (config, args) = cli.into_parts();

    init_logging(config.quiet);

    let mut client = DesktopClient::new();
    let result = Dispatcher::new(&mut client).run(&config, &args, &mut io::stdout());

    let code = exit::report(result, config.quiet, &mut io::stderr());
    ExitCode::from(code as u8)
}

fn init_logging(quiet: bool) {
    let default = if quiet { "off" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}
