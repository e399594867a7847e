//! Command line front-end: help text, error reporting and dispatch

mod progress;

use crate::error::{ScaffoldError, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
use crate::identity::{ConfigReader, EnvironmentProbe, FsConfigReader, SystemUser};
use crate::platform::PlatformConfig;
use crate::scaffold::Scaffolder;
use crate::settings::{Settings, CONFIG_ENV};
use crate::templates::{PluginName, TemplateRenderer};
use crate::writer::ProjectWriter;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print help and exit successfully
    Help,
    /// Generate a plugin with this name
    Generate(String),
    /// More than one positional argument
    TooManyArguments(Vec<String>),
}

impl Invocation {
    /// Classify parsed arguments
    ///
    /// The help flag wins over positionals, so `-h name` prints help and
    /// creates nothing.
    pub fn from_args(help: bool, mut positionals: Vec<String>) -> Self {
        if help {
            return Self::Help;
        }
        match positionals.len() {
            0 => Self::Help,
            1 => Self::Generate(positionals.remove(0)),
            _ => Self::TooManyArguments(positionals),
        }
    }
}

/// Process context a run depends on
#[derive(Debug, Clone)]
pub struct Environment {
    /// Invocation directory; the plugin is created below it
    pub cwd: PathBuf,
    /// Home directory holding dot files
    pub home: Option<PathBuf>,
    /// Explicit settings file
    pub config: Option<PathBuf>,
}

impl Environment {
    /// Read the context of the running process
    pub fn from_process() -> Result<Self> {
        Ok(Self {
            cwd: std::env::current_dir().context("Failed to read current directory")?,
            home: FsConfigReader::from_env().home_dir(),
            config: std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        })
    }
}

/// Result of a run, mapped to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub exit_code: i32,
}

impl Outcome {
    pub fn success() -> Self {
        Self {
            exit_code: EXIT_SUCCESS,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self { exit_code }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == EXIT_SUCCESS
    }
}

/// The help block
pub fn help_text<P: PlatformConfig>(platform: &P, version: &str) -> String {
    format!(
        "`pluginify` v{}, is a tool to generate a {} plugin skeleton.\n\
         \tSyntax: `pluginify` -h <plugin_name>\n\
         \t-h, --help \t\t Prints this help.\n\
         \t <plugin_name> \t\t Creates a plugin using <plugin_name>.\n",
        version,
        platform.display_name()
    )
}

/// Print the numbered error message followed by the help block
pub fn report_error<P: PlatformConfig>(platform: &P, err: &ScaffoldError, version: &str) {
    eprintln!("{}", err.to_string().red());
    print!("{}", help_text(platform, version));
}

/// Run the front-end for one invocation
///
/// `env` is only called when a plugin is generated, so help and usage
/// errors work even when the process context cannot be read.
pub fn run<P, T, E>(
    platform: &P,
    renderer: &T,
    env: E,
    invocation: Invocation,
    version: &str,
) -> Outcome
where
    P: PlatformConfig,
    T: TemplateRenderer,
    E: FnOnce() -> Result<Environment>,
{
    match invocation {
        Invocation::Help => {
            print!("{}", help_text(platform, version));
            Outcome::success()
        }
        Invocation::TooManyArguments(args) => {
            let err = ScaffoldError::TooManyArguments { args };
            report_error(platform, &err, version);
            Outcome::failure(err.exit_code())
        }
        Invocation::Generate(name) => {
            let generated = env().and_then(|env| {
                generate(platform, renderer, &env, PluginName::new(name), version)
            });
            match generated {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("{} {:#}", "Error:".red().bold(), e);
                    Outcome::failure(EXIT_FAILURE)
                }
            }
        }
    }
}

fn generate<P: PlatformConfig, T: TemplateRenderer>(
    platform: &P,
    renderer: &T,
    env: &Environment,
    plugin: PluginName,
    version: &str,
) -> Result<Outcome> {
    if plugin.as_str().is_empty() {
        eprintln!("{}", "Error: the plugin name must not be empty.".red());
        print!("{}", help_text(platform, version));
        return Ok(Outcome::failure(EXIT_USAGE));
    }

    let settings = Settings::load(env.config.as_deref(), env.home.as_deref())?;

    let reader = match &env.home {
        Some(home) => FsConfigReader::new(home),
        None => FsConfigReader::from_env(),
    };
    let identity = EnvironmentProbe::new(platform, reader, SystemUser)
        .probe_with(&env.cwd, &settings);

    shown("intro", progress::intro(&format!("pluginify v{}", version)));
    shown("identity", progress::identity(&identity));

    let scaffolder = Scaffolder::new(
        platform,
        renderer,
        ProjectWriter::new(&env.cwd),
        settings.plugin_version(),
        settings.copyright_year(),
    );

    match scaffolder.run(&plugin, &identity) {
        Ok(summary) => {
            shown("summary", progress::created(&summary));
            let steps = platform.next_steps(&summary.plugin_dir);
            shown("next steps", progress::next_steps(&steps));
            Ok(Outcome::success())
        }
        Err(err) => {
            shown("failure", progress::failed(&err, &env.cwd.join(plugin.as_str())));
            report_error(platform, &err, version);
            Ok(Outcome::failure(err.exit_code()))
        }
    }
}

/// Progress output never decides the outcome of a run
fn shown(section: &str, result: Result<()>) {
    if let Err(e) = result {
        tracing::warn!(section, "failed to print progress: {:#}", e);
    }
}
