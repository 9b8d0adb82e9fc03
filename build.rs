//! Build script: stamps dev builds with the git commit.
//!
//! `VERGEN_GIT_SHA` feeds the `--version` string. Builds with the
//! `release` feature skip it so the version stays clean.

#[cfg(not(feature = "release"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let git = GitclBuilder::default().sha(true).build()?;
    let emitted = Emitter::default().add_instructions(&git)?.emit();

    // Outside a git checkout (e.g. a crates.io tarball)
    if let Err(e) = emitted {
        println!("cargo:warning=git info unavailable: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
    Ok(())
}

#[cfg(feature = "release")]
fn main() {}
