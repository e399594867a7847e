//! Plugin name and its textual variants

use std::fmt;

/// Characters that separate words when title-casing
///
/// Only whitespace counts, so `my-plugin` title-cases to `My-plugin`.
const WORD_DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x0C', '\x0B'];

/// The plugin name exactly as given on the command line
///
/// The name is trusted as both a path segment and embedded text; no
/// sanitization is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginName(String);

impl PluginName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The verbatim name (directory name, slug, text domain)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All-uppercase form used in the manifest header and version constant
    pub fn upper(&self) -> String {
        self.0.to_uppercase()
    }

    /// Title-cased form used in prose and the class name
    pub fn title(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut at_word_start = true;

        for c in self.0.chars() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = WORD_DELIMITERS.contains(&c);
        }

        out
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
