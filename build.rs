use std::env;
use std::process::Command;

/// Stamps the values printed by `upkeep_core_cli version`.
fn main() {
    for watched in ["build.rs", ".git/HEAD", ".git/refs"] {
        println!("cargo:rerun-if-changed={watched}");
    }

    let commit = git(&["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".into());
    let tree = match git(&["status", "--porcelain"]) {
        Some(changes) if changes.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };
    let built = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    stamp("HASH", &commit);
    stamp("STATUS", tree);
    stamp("TIMESTAMP", &built);
    stamp("TARGET", &cargo_var("TARGET"));
    stamp("PROFILE", &cargo_var("PROFILE"));
}

fn stamp(key: &str, value: &str) {
    println!("cargo:rustc-env=UPKEEP_CORE_BUILD_{key}={value}");
}

fn cargo_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| "unknown".into())
}

/// Trimmed stdout of a successful git command; `None` outside a checkout.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
