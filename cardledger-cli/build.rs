//! Stamps the binary with the git revision it was built from.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const REVISION_VAR: &str = "CARDLEDGER_GIT_REVISION";

fn describe_head(workspace: &Path) -> Option<String> {
    let out = Command::new("git")
        .current_dir(workspace)
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let revision = String::from_utf8(out.stdout).ok()?;
    let revision = revision.trim();
    (!revision.is_empty()).then(|| revision.to_owned())
}

fn main() {
    // release tarballs carry no .git; packagers pass the revision in
    let revision = env::var(REVISION_VAR).ok().or_else(|| {
        let workspace = env::var_os("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .and_then(|dir| dir.parent().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(".."));
        describe_head(&workspace)
    });

    println!(
        "cargo:rustc-env={REVISION_VAR}={}",
        revision.as_deref().unwrap_or("unknown")
    );
}
