//! Pluginify Core - Shared library for the plugin skeleton generator
//!
//! This library provides everything behind the `pluginify` binary: given a
//! plugin name it creates a directory tree, an entry file with a manifest
//! header, a readme and a notification template, filled with author details
//! inferred from the local environment.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Identity probing, template rendering, project writing
//! - **Layer 2: Workflow Orchestration** - `PlatformConfig` trait and the `Scaffolder` pipeline
//! - **Layer 3: CLI Interface** - Help text, numbered errors, progress output
//!
//! # Feature Flags
//!
//! - `tui` (default): Frames progress output with cliclack intro/outro lines
//!
//! # Example Usage
//!
//! ```ignore
//! use pluginify_core::{EnvironmentProbe, ProjectWriter, PluginName, Scaffolder, WordPress, WordPressTemplates};
//!
//! let cwd = std::env::current_dir()?;
//! let identity = EnvironmentProbe::system(&WordPress).probe(&cwd);
//! let renderer = WordPressTemplates::new();
//! let summary = Scaffolder::new(&WordPress, &renderer, ProjectWriter::new(&cwd), "0.1", 2024)
//!     .run(&PluginName::new("my-plugin"), &identity)?;
//! ```

pub mod cli;
pub mod error;
pub mod identity;
pub mod platform;
pub mod scaffold;
pub mod settings;
pub mod templates;
pub mod writer;

// Re-export main types for convenience
pub use cli::{run, Environment, Invocation, Outcome};
pub use error::ScaffoldError;
pub use identity::{EnvironmentProbe, Identity};
pub use platform::{PlatformConfig, WordPress};
pub use scaffold::{ScaffoldSummary, Scaffolder};
pub use settings::Settings;
pub use templates::{GeneratedFile, PluginName, TemplateRenderer, WordPressTemplates};
pub use writer::{ProjectWriter, StageReport};
