//! Build script for handmouse
//!
//! Stamps build identification into the binary's startup banner.

use std::process::Command;

fn stamp(var: &str, cmd: &str, args: &[&str]) {
    let value = Command::new(cmd)
        .args(args)
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env={}={}", var, value);
}

fn main() {
    stamp("BUILD_DATE", "date", &["+%Y-%m-%d"]);
    stamp("GIT_HASH", "git", &["rev-parse", "--short", "HEAD"]);

    // Re-run if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
