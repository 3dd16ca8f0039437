use std::env;
use std::process::Command;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let profile = env::var("PROFILE").unwrap();

    let full_version = if profile == "debug" {
        // Dev build - tag with the commit the bundle was built from
        let git_hash = git_short_hash().unwrap_or_else(|| "unknown".to_string());

        if worktree_dirty() {
            format!("{}-dev+{}.dirty", version, git_hash)
        } else {
            format!("{}-dev+{}", version, git_hash)
        }
    } else {
        version
    };

    println!("cargo:rustc-env=AG_N8N_SKILLS_VERSION={}", full_version);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}

fn worktree_dirty() -> bool {
    // Either staged or unstaged changes count, bundle edits included
    ["diff --quiet", "diff --cached --quiet"].iter().any(|args| {
        Command::new("git")
            .args(args.split_whitespace())
            .status()
            .map(|status| !status.success())
            .unwrap_or(false)
    })
}
