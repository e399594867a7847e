//! The scaffold pipeline: directories, readme, then source files
//!
//! A failing stage stops the pipeline. Entries created before the failure
//! are left in place.

use crate::error::ScaffoldError;
use crate::identity::Identity;
use crate::platform::PlatformConfig;
use crate::templates::{PluginName, RenderContext, TemplateRenderer};
use crate::writer::{self, ProjectWriter};
use std::path::PathBuf;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSummary {
    /// Plugin root directory
    pub plugin_dir: PathBuf,
    /// Every directory and file inside the plugin root, relative to the writer root
    pub entries: Vec<PathBuf>,
}

/// Generates a plugin tree for one platform with one renderer
pub struct Scaffolder<'a, P: PlatformConfig, T: TemplateRenderer> {
    platform: &'a P,
    renderer: &'a T,
    writer: ProjectWriter,
    plugin_version: String,
    copyright_year: i32,
}

impl<'a, P: PlatformConfig, T: TemplateRenderer> Scaffolder<'a, P, T> {
    pub fn new(
        platform: &'a P,
        renderer: &'a T,
        writer: ProjectWriter,
        plugin_version: impl Into<String>,
        copyright_year: i32,
    ) -> Self {
        Self {
            platform,
            renderer,
            writer,
            plugin_version: plugin_version.into(),
            copyright_year,
        }
    }

    /// Run every stage for `plugin`
    pub fn run(
        &self,
        plugin: &PluginName,
        identity: &Identity,
    ) -> Result<ScaffoldSummary, ScaffoldError> {
        let ctx = RenderContext {
            plugin,
            identity,
            plugin_version: &self.plugin_version,
            copyright_year: self.copyright_year,
        };

        tracing::info!(plugin = %plugin, platform = self.platform.name(), "creating directories");
        let dirs = self
            .writer
            .make_directories(plugin, self.platform.directories());
        if !dirs.is_success() {
            return Err(ScaffoldError::Directories {
                plugin: plugin.to_string(),
            });
        }

        tracing::info!(plugin = %plugin, "writing readme");
        let readme = self.renderer.render_readme(&ctx);
        if !self
            .writer
            .write_files(plugin, std::slice::from_ref(&readme))
            .is_success()
        {
            return Err(ScaffoldError::Readme {
                plugin: plugin.to_string(),
            });
        }

        tracing::info!(plugin = %plugin, "writing source files");
        let files = self.renderer.render_files(&ctx);
        if !self.writer.write_files(plugin, &files).is_success() {
            return Err(ScaffoldError::PluginFiles {
                plugin: plugin.to_string(),
                extension: self.platform.entry_extension().to_string(),
            });
        }

        let plugin_dir = self.writer.plugin_dir(plugin);
        Ok(ScaffoldSummary {
            entries: writer::list_tree(self.writer.root(), &plugin_dir),
            plugin_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::WordPress;
    use crate::templates::{GeneratedFile, WordPressTemplates};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn identity() -> Identity {
        Identity {
            uid: "alice".to_string(),
            email: "alice@example.com".to_string(),
            platform_version: None,
        }
    }

    fn run_in(root: &Path, name: &str) -> Result<ScaffoldSummary, ScaffoldError> {
        let renderer = WordPressTemplates::new();
        let scaffolder =
            Scaffolder::new(&WordPress, &renderer, ProjectWriter::new(root), "0.1", 2011);
        scaffolder.run(&PluginName::new(name), &identity())
    }

    #[test]
    fn test_produces_expected_tree() {
        let root = TempDir::new().unwrap();
        let summary = run_in(root.path(), "my-plugin").unwrap();

        assert_eq!(summary.plugin_dir, root.path().join("my-plugin"));
        assert_eq!(
            summary.entries,
            vec![
                PathBuf::from("my-plugin/languages"),
                PathBuf::from("my-plugin/my-plugin.php"),
                PathBuf::from("my-plugin/readme.txt"),
                PathBuf::from("my-plugin/templates"),
                PathBuf::from("my-plugin/templates/notification.php"),
            ]
        );
    }

    #[test]
    fn test_readme_contains_identity_and_name() {
        let root = TempDir::new().unwrap();
        run_in(root.path(), "demo").unwrap();

        let readme = fs::read_to_string(root.path().join("demo/readme.txt")).unwrap();
        assert!(readme.contains("demo"));
        assert!(readme.contains("alice"));
        assert!(readme.contains("alice@example.com"));
        assert!(readme.contains("Requires at least: WordPress \n"));
    }

    #[test]
    fn test_directory_failure_short_circuits() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("demo"), "in the way").unwrap();

        let err = run_in(root.path(), "demo").unwrap_err();

        assert_eq!(err.code(), 1);
        assert!(root.path().join("demo").is_file());
        assert_eq!(fs::read_to_string(root.path().join("demo")).unwrap(), "in the way");
    }

    #[test]
    fn test_rerun_on_existing_plugin_fails_without_overwriting() {
        let root = TempDir::new().unwrap();
        run_in(root.path(), "demo").unwrap();
        let readme = root.path().join("demo/readme.txt");
        fs::write(&readme, "edited").unwrap();

        let err = run_in(root.path(), "demo").unwrap_err();

        assert_eq!(err.code(), 1);
        assert_eq!(fs::read_to_string(&readme).unwrap(), "edited");
    }

    #[test]
    fn test_partial_directories_are_not_rolled_back() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("demo/languages")).unwrap();

        let err = run_in(root.path(), "demo").unwrap_err();

        assert_eq!(err.code(), 1);
        assert!(root.path().join("demo/templates").is_dir());
        assert!(!root.path().join("demo/readme.txt").exists());
    }

    struct BadPaths;

    impl TemplateRenderer for BadPaths {
        fn render_files(&self, _ctx: &RenderContext<'_>) -> Vec<GeneratedFile> {
            vec![
                GeneratedFile::new("missing/dir/file.php", "x"),
                GeneratedFile::new("ok.php", "y"),
            ]
        }

        fn render_readme(&self, _ctx: &RenderContext<'_>) -> GeneratedFile {
            GeneratedFile::new("readme.txt", "readme")
        }
    }

    struct BadReadme;

    impl TemplateRenderer for BadReadme {
        fn render_files(&self, _ctx: &RenderContext<'_>) -> Vec<GeneratedFile> {
            vec![GeneratedFile::new("never.php", "x")]
        }

        fn render_readme(&self, _ctx: &RenderContext<'_>) -> GeneratedFile {
            GeneratedFile::new("nowhere/readme.txt", "readme")
        }
    }

    #[test]
    fn test_file_failure_reports_code_3_after_attempting_all() {
        let root = TempDir::new().unwrap();
        let scaffolder =
            Scaffolder::new(&WordPress, &BadPaths, ProjectWriter::new(root.path()), "0.1", 2011);
        let err = scaffolder
            .run(&PluginName::new("demo"), &identity())
            .unwrap_err();

        assert_eq!(err.code(), 3);
        assert!(root.path().join("demo/readme.txt").is_file());
        assert!(root.path().join("demo/ok.php").is_file());
    }

    #[test]
    fn test_readme_failure_skips_source_files() {
        let root = TempDir::new().unwrap();
        let scaffolder =
            Scaffolder::new(&WordPress, &BadReadme, ProjectWriter::new(root.path()), "0.1", 2011);
        let err = scaffolder
            .run(&PluginName::new("demo"), &identity())
            .unwrap_err();

        assert_eq!(err.code(), 2);
        assert!(!root.path().join("demo/never.php").exists());
    }
}
