//! Template rendering for generated plugin files
//!
//! This module provides:
//! - `PluginName` and its upper/title variants
//! - `PlaceholderTemplate`, fixed text with `{{key}}` slots
//! - The `TemplateRenderer` trait callers depend on
//! - `WordPressTemplates`, the built-in renderer
//!
//! Substitution is verbatim. Values containing characters meaningful to PHP
//! or the readme format pass through unescaped; an escaping renderer can be
//! swapped in behind `TemplateRenderer` without touching callers.

pub mod naming;
pub mod wordpress;

use crate::identity::Identity;

pub use naming::PluginName;
pub use wordpress::WordPressTemplates;

/// A file to write, relative to the plugin root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub relative_path: String,
    pub contents: String,
}

impl GeneratedFile {
    pub fn new(relative_path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            contents: contents.into(),
        }
    }
}

/// Inputs shared by every template
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub plugin: &'a PluginName,
    pub identity: &'a Identity,
    pub plugin_version: &'a str,
    pub copyright_year: i32,
}

/// Produces the contents of every generated file
pub trait TemplateRenderer {
    /// Source files (entry file, notification template)
    fn render_files(&self, ctx: &RenderContext<'_>) -> Vec<GeneratedFile>;

    /// The readme / documentation file
    fn render_readme(&self, ctx: &RenderContext<'_>) -> GeneratedFile;
}

/// Fixed template text with `{{key}}` placeholders
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderTemplate {
    text: &'static str,
}

impl PlaceholderTemplate {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }

    /// Substitute every known placeholder; unknown `{{...}}` tokens are left as-is
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after[..end];
            match values.iter().find(|(k, _)| *k == key) {
                Some((_, value)) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }
}
