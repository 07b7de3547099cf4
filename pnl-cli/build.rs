//! Embeds `git describe` output as `PNL_BUILD_SHA` for `pnl --version`.

use std::path::Path;
use std::process::Command;

fn git_describe(workspace: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_owned())
}

fn main() {
    let manifest = std::env::var_os("CARGO_MANIFEST_DIR").unwrap_or_else(|| ".".into());
    let workspace = Path::new(&manifest).join("..");

    let rev = git_describe(&workspace).unwrap_or_else(|| "unknown".to_owned());
    println!("cargo:rustc-env=PNL_BUILD_SHA={rev}");
    println!("cargo:rerun-if-changed={}", workspace.join(".git/HEAD").display());
}
