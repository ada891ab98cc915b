// Captures git commit, branch, and build time as compile-time env vars
// so `hub --version` can report exactly what was built. Falls back to
// version.toml when git is unavailable (Docker and CI builds).

use std::fs;
use std::process::Command;

fn main() {
    let fallback = read_version_toml("../version.toml");

    let commit_hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| fallback.0.clone());
    let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or_else(|| fallback.1.clone());
    let build_date = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();

    println!("cargo:rustc-env=GIT_COMMIT_HASH={}", commit_hash);
    println!("cargo:rustc-env=GIT_BRANCH={}", branch);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/refs/heads/");
    println!("cargo:rerun-if-changed=../version.toml");
}

/// Run git and return trimmed stdout, or None if git is missing or fails.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Read (commit, branch) fallbacks from version.toml, defaulting to "unknown".
fn read_version_toml(path: &str) -> (String, String) {
    let mut commit = "unknown".to_string();
    let mut branch = "unknown".to_string();

    let Ok(content) = fs::read_to_string(path) else {
        return (commit, branch);
    };

    for line in content.lines() {
        let line = line.trim();
        if let Some(value) = line
            .strip_prefix("git_commit_hash")
            .and_then(extract_toml_value)
        {
            commit = value;
        } else if let Some(value) = line.strip_prefix("git_branch").and_then(extract_toml_value) {
            branch = value;
        }
    }

    (commit, branch)
}

/// Extract the value from a TOML line like: key = "value"
fn extract_toml_value(rest: &str) -> Option<String> {
    let value = rest.split_once('=')?.1.trim().trim_matches('"');
    if value.is_empty() || value == "unknown" {
        None
    } else {
        Some(value.to_string())
    }
}
