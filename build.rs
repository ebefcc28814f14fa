use vergen::Emitter;
use vergen_git2::Git2Builder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // `--version` only shows `git describe`; tarball builds have no repository.
    match Git2Builder::default().describe(true, true, None).build() {
        Ok(git2) => {
            Emitter::default().add_instructions(&git2)?.emit()?;
        }
        Err(_) => println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown"),
    }
    Ok(())
}
