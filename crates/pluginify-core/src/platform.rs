//! Target platform configuration
//!
//! This trait defines everything the scaffolder needs to know about the
//! platform a plugin is generated for: where its identity hints live, how a
//! nested codebase is recognised, and how generated files are named.

use std::path::Path;

/// Configuration trait for plugin platforms
///
/// Each platform implements this trait to define:
/// - Platform identity (name, display name)
/// - Identity hints (svn keyword, codebase marker, version file)
/// - Layout of the generated plugin (extension, directories, URI)
/// - Post-generation instructions
pub trait PlatformConfig {
    /// Internal platform name (used in logs)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Keyword a subversion auth file must mention to be used for the username
    fn svn_keyword(&self) -> &'static str;

    /// Directory name marking the inside of an installed codebase
    fn marker_dir(&self) -> &'static str;

    /// Version definition file, relative to the codebase root
    fn version_file(&self) -> &'static str;

    /// Variable assigned the version string inside `version_file`
    fn version_variable(&self) -> &'static str;

    /// Extension of generated source files (without the dot)
    fn entry_extension(&self) -> &'static str;

    /// Public URI embedded in the manifest header
    fn plugin_uri(&self, slug: &str) -> String;

    /// Directories created inside the plugin root before any file is written
    fn directories(&self) -> &'static [&'static str];

    /// Generate the "next steps" instructions after the plugin is created
    fn next_steps(&self, plugin_dir: &Path) -> Vec<String>;
}

/// WordPress plugin platform
#[derive(Debug, Clone, Copy, Default)]
pub struct WordPress;

impl PlatformConfig for WordPress {
    fn name(&self) -> &'static str {
        "wordpress"
    }

    fn display_name(&self) -> &'static str {
        "WordPress"
    }

    fn svn_keyword(&self) -> &'static str {
        "wordpress"
    }

    fn marker_dir(&self) -> &'static str {
        "wp-content"
    }

    fn version_file(&self) -> &'static str {
        "wp-includes/version.php"
    }

    fn version_variable(&self) -> &'static str {
        "wp_version"
    }

    fn entry_extension(&self) -> &'static str {
        "php"
    }

    fn plugin_uri(&self, slug: &str) -> String {
        format!("http://wordpress.org/extend/plugins/{}/", slug)
    }

    fn directories(&self) -> &'static [&'static str] {
        &["templates", "languages"]
    }

    fn next_steps(&self, plugin_dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();

        if plugin_dir
            .components()
            .any(|c| c.as_os_str() == self.marker_dir())
        {
            steps.push(format!(
                "Activate the plugin from the {} admin screen",
                self.display_name()
            ));
        } else {
            steps.push(format!(
                "Move {} into wp-content/plugins of your {} install",
                plugin_dir.display(),
                self.display_name()
            ));
        }

        steps.push("Fill in the descriptions in readme.txt".to_string());

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_uri_uses_slug_verbatim() {
        assert_eq!(
            WordPress.plugin_uri("my-plugin"),
            "http://wordpress.org/extend/plugins/my-plugin/"
        );
    }

    #[test]
    fn test_next_steps_inside_install() {
        let steps = WordPress.next_steps(Path::new("/srv/site/wp-content/plugins/demo"));
        assert!(steps[0].starts_with("Activate"));
    }

    #[test]
    fn test_next_steps_outside_install() {
        let steps = WordPress.next_steps(Path::new("/home/me/demo"));
        assert!(steps[0].contains("wp-content/plugins"));
    }
}
