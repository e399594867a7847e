//! Text parsers for the files the probe reads

use regex::Regex;

/// Extract the username stored in a subversion auth file
///
/// Auth files are key/value blocks where each key is followed by a length
/// line and then the value, so the username sits two lines below the
/// `username` key.
pub fn svn_username(contents: &str) -> Option<String> {
    let lines: Vec<&str> = contents.lines().collect();
    let k = lines.iter().position(|l| l.trim() == "username")?;
    lines
        .get(k + 2)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Extract the first `email = ...` value from a git config file
pub fn gitconfig_email(contents: &str) -> Option<String> {
    contents
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("email"))
        .map(|(_, value)| value.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Extract `$<variable> = '<version>'` from a version definition file
pub fn assigned_version(contents: &str, variable: &str) -> Option<String> {
    let pattern = format!(
        r#"\${}\s*=\s*['"]([^'"]+)['"]"#,
        regex::escape(variable)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}
