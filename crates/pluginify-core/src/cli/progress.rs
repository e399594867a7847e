//! Progress output for a generation run
//!
//! With the `tui` feature the run is framed with cliclack intro/outro lines,
//! otherwise plain colored lines are printed.

use crate::error::ScaffoldError;
use crate::identity::Identity;
use crate::scaffold::ScaffoldSummary;
use anyhow::Result;
use std::path::Path;

#[cfg(feature = "tui")]
pub fn intro(title: &str) -> Result<()> {
    cliclack::intro(title)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
pub fn intro(title: &str) -> Result<()> {
    use colored::Colorize;
    println!("{}", title.cyan().bold());
    Ok(())
}

#[cfg(feature = "tui")]
pub fn identity(identity: &Identity) -> Result<()> {
    cliclack::log::info(identity_line(identity))?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
pub fn identity(identity: &Identity) -> Result<()> {
    use colored::Colorize;
    println!("  {} {}", "->".blue(), identity_line(identity));
    Ok(())
}

#[cfg(feature = "tui")]
pub fn created(summary: &ScaffoldSummary) -> Result<()> {
    cliclack::log::success(created_line(summary))?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
pub fn created(summary: &ScaffoldSummary) -> Result<()> {
    use colored::Colorize;
    println!("  {} {}", "done".green(), created_line(summary));
    Ok(())
}

#[cfg(feature = "tui")]
pub fn failed(err: &ScaffoldError, plugin_dir: &Path) -> Result<()> {
    cliclack::log::error(failed_line(err, plugin_dir))?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
pub fn failed(err: &ScaffoldError, plugin_dir: &Path) -> Result<()> {
    use colored::Colorize;
    println!("  {} {}", "failed".red(), failed_line(err, plugin_dir));
    Ok(())
}

#[cfg(feature = "tui")]
pub fn next_steps(steps: &[String]) -> Result<()> {
    print_steps(steps);
    cliclack::outro("Happy hacking!")?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
pub fn next_steps(steps: &[String]) -> Result<()> {
    print_steps(steps);
    Ok(())
}

fn print_steps(steps: &[String]) {
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();
}

fn identity_line(identity: &Identity) -> String {
    format!(
        "Author {} <{}>, platform version {}",
        identity.uid,
        identity.email,
        identity.platform_version.as_deref().unwrap_or("unknown")
    )
}

fn created_line(summary: &ScaffoldSummary) -> String {
    let listing: Vec<String> = summary
        .entries
        .iter()
        .map(|p| format!("  {}", p.display()))
        .collect();
    format!(
        "Created {} entries in {}\n{}",
        summary.entries.len(),
        summary.plugin_dir.display(),
        listing.join("\n")
    )
}

fn failed_line(err: &ScaffoldError, plugin_dir: &Path) -> String {
    format!(
        "Stage {} failed; partial files may remain in {}",
        err.code(),
        plugin_dir.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_identity_line_without_version() {
        let line = identity_line(&Identity {
            uid: "a".to_string(),
            email: "a@b".to_string(),
            platform_version: None,
        });
        assert_eq!(line, "Author a <a@b>, platform version unknown");
    }

    #[test]
    fn test_created_line_lists_entries() {
        let line = created_line(&ScaffoldSummary {
            plugin_dir: PathBuf::from("/tmp/demo"),
            entries: vec![PathBuf::from("demo/readme.txt")],
        });
        assert!(line.starts_with("Created 1 entries in /tmp/demo\n"));
        assert!(line.ends_with("  demo/readme.txt"));
    }

    #[test]
    fn test_failed_line_names_partial_tree() {
        let err = ScaffoldError::from_code(2, "demo");
        let line = failed_line(&err, Path::new("/tmp/demo"));
        assert_eq!(line, "Stage 2 failed; partial files may remain in /tmp/demo");
    }
}
