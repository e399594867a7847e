//! pluginify - WordPress plugin skeleton generator

use anyhow::Result;
use clap::{ArgAction, Parser};
use pluginify_core::{Environment, Invocation, WordPress, WordPressTemplates};
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter
const LOG_ENV: &str = "PLUGINIFY_LOG";

#[derive(Parser, Debug)]
#[command(name = "pluginify")]
#[command(about = "Generate a WordPress plugin skeleton")]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Prints the help block
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Name of the plugin to create
    #[arg(value_name = "plugin_name")]
    pub names: Vec<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_logging();

    let args = Args::parse();
    let invocation = Invocation::from_args(args.help, args.names);

    let outcome = pluginify_core::run(
        &WordPress,
        &WordPressTemplates::new(),
        Environment::from_process,
        invocation,
        CLI_VERSION,
    );

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    std::process::exit(outcome.exit_code);
}
