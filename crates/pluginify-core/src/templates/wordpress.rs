//! Built-in WordPress plugin templates

use super::{GeneratedFile, PlaceholderTemplate, RenderContext, TemplateRenderer};
use crate::platform::{PlatformConfig, WordPress};

const ENTRY: PlaceholderTemplate =
    PlaceholderTemplate::new(include_str!("../../templates/wordpress/plugin.php.tmpl"));

const NOTIFICATION: PlaceholderTemplate =
    PlaceholderTemplate::new(include_str!("../../templates/wordpress/notification.php.tmpl"));

const README: PlaceholderTemplate =
    PlaceholderTemplate::new(include_str!("../../templates/wordpress/readme.txt.tmpl"));

/// Name of the generated readme
pub const README_FILE: &str = "readme.txt";

/// Renders the WordPress entry file, notification template and readme
#[derive(Debug, Clone, Copy, Default)]
pub struct WordPressTemplates {
    platform: WordPress,
}

impl WordPressTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self, ctx: &RenderContext<'_>) -> Vec<(&'static str, String)> {
        let slug = ctx.plugin.as_str();
        vec![
            ("slug", slug.to_string()),
            ("upper", ctx.plugin.upper()),
            ("title", ctx.plugin.title()),
            ("uri", self.platform.plugin_uri(slug)),
            ("uid", ctx.identity.uid.clone()),
            ("email", ctx.identity.email.clone()),
            (
                "platform_version",
                ctx.identity.platform_version.clone().unwrap_or_default(),
            ),
            ("plugin_version", ctx.plugin_version.to_string()),
            ("year", ctx.copyright_year.to_string()),
            ("extension", self.platform.entry_extension().to_string()),
        ]
    }

    fn render(&self, template: &PlaceholderTemplate, ctx: &RenderContext<'_>) -> String {
        let values = self.values(ctx);
        let pairs: Vec<(&str, &str)> = values.iter().map(|(k, v)| (*k, v.as_str())).collect();
        template.render(&pairs)
    }
}

impl TemplateRenderer for WordPressTemplates {
    fn render_files(&self, ctx: &RenderContext<'_>) -> Vec<GeneratedFile> {
        let ext = self.platform.entry_extension();
        vec![
            GeneratedFile::new(
                format!("{}.{}", ctx.plugin.as_str(), ext),
                self.render(&ENTRY, ctx),
            ),
            GeneratedFile::new(
                format!("templates/notification.{}", ext),
                self.render(&NOTIFICATION, ctx),
            ),
        ]
    }

    fn render_readme(&self, ctx: &RenderContext<'_>) -> GeneratedFile {
        GeneratedFile::new(README_FILE, self.render(&README, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;
    use crate::templates::PluginName;

    fn identity(version: Option<&str>) -> Identity {
        Identity {
            uid: "alice".to_string(),
            email: "alice@example.com".to_string(),
            platform_version: version.map(str::to_string),
        }
    }

    fn ctx<'a>(plugin: &'a PluginName, identity: &'a Identity) -> RenderContext<'a> {
        RenderContext {
            plugin,
            identity,
            plugin_version: "0.1",
            copyright_year: 2011,
        }
    }

    #[test]
    fn test_render_files_paths() {
        let plugin = PluginName::new("my-plugin");
        let id = identity(None);
        let files = WordPressTemplates::new().render_files(&ctx(&plugin, &id));

        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["my-plugin.php", "templates/notification.php"]);
    }

    #[test]
    fn test_entry_file_manifest_header() {
        let plugin = PluginName::new("my-plugin");
        let id = identity(None);
        let files = WordPressTemplates::new().render_files(&ctx(&plugin, &id));
        let entry = &files[0].contents;

        assert!(entry.starts_with("<?php\n/*\nPlugin Name: MY-PLUGIN\n"));
        assert!(entry.contains("Plugin URI: http://wordpress.org/extend/plugins/my-plugin/\n"));
        assert!(entry.contains("Description: My-plugin Description\n"));
        assert!(entry.contains("Version: 0.1\n"));
        assert!(entry.contains("Author: alice\n"));
        assert!(entry.contains("Copyright 2011  alice <alice@example.com>"));
        assert!(entry.contains("define( 'MY-PLUGIN', '0.1' );"));
        assert!(entry.contains("class My-plugin {"));
        assert!(entry.contains("get_transient( 'my-plugin_loaded' )"));
        assert!(entry.contains("load_plugin_textdomain( 'my-plugin',"));
        assert!(entry.contains("'/templates/' . $name . '.php';"));
        assert!(entry.ends_with("My-plugin::init();\n?>"));
        assert!(!entry.contains("{{"));
    }

    #[test]
    fn test_notification_template() {
        let plugin = PluginName::new("hello world");
        let id = identity(None);
        let files = WordPressTemplates::new().render_files(&ctx(&plugin, &id));

        assert_eq!(
            files[1].contents,
            "<div id=\"message\" class=\"updated fade\">\n    \
             <p><?php _e( \"Hello World loaded: $status\", 'hello world' ) ?></p>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_readme_sections_and_identity() {
        let plugin = PluginName::new("my-plugin");
        let id = identity(Some("6.4.2"));
        let readme = WordPressTemplates::new().render_readme(&ctx(&plugin, &id));

        assert_eq!(readme.relative_path, README_FILE);
        let text = &readme.contents;
        assert!(text.starts_with("=== Fancy My-plugin Name ===\n"));
        assert!(text.contains("Contributors: alice\n"));
        assert!(text.contains("Tags: my-plugin tags\n"));
        assert!(text.contains("Requires at least: WordPress 6.4.2\n"));
        assert!(text.contains("Tested up to: WordPress 6.4.2\n"));
        assert!(text.contains("Stable tag: 0.1\n"));
        assert!(text.contains("business=alice@example.com\n"));
        assert!(text.contains("mailto:alice@example.com"));
        for section in [
            "== Description ==",
            "== Installation ==",
            "== Frequently Asked Questions ==",
            "== Changelog ==",
            "= 0.1 =",
            "== Screenshots ==",
        ] {
            assert!(text.contains(section), "missing {}", section);
        }
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_readme_without_platform_version_has_empty_fields() {
        let plugin = PluginName::new("demo");
        let id = identity(None);
        let text = WordPressTemplates::new()
            .render_readme(&ctx(&plugin, &id))
            .contents;

        assert!(text.contains("Requires at least: WordPress \n"));
        assert!(text.contains("Tested up to: WordPress \n"));
        assert!(!text.to_lowercase().contains("unset"));
        assert!(!text.contains("None"));
    }

    #[test]
    fn test_identity_values_pass_through_unescaped() {
        let plugin = PluginName::new("demo");
        let id = Identity {
            uid: "o'brien".to_string(),
            email: "a<b>@c".to_string(),
            platform_version: None,
        };
        let files = WordPressTemplates::new().render_files(&ctx(&plugin, &id));
        assert!(files[0].contents.contains("Author: o'brien\n"));
        assert!(files[0].contents.contains("<a<b>@c>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let plugin = PluginName::new("demo");
        let id = identity(Some("5.0"));
        let renderer = WordPressTemplates::new();
        assert_eq!(
            renderer.render_files(&ctx(&plugin, &id)),
            renderer.render_files(&ctx(&plugin, &id))
        );
        assert_eq!(
            renderer.render_readme(&ctx(&plugin, &id)),
            renderer.render_readme(&ctx(&plugin, &id))
        );
    }
}
