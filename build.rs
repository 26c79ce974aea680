use std::process::Command;

fn main() {
    // Prefer the git tag for --version; fall back to the crate version
    // outside a git checkout (e.g. crates.io builds).
    let version = Command::new("git")
        .args(["describe", "--tags", "--always"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .map(|tag| tag.strip_prefix('v').map(str::to_string).unwrap_or(tag))
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=GIT_VERSION={version}");
}
