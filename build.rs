use std::path::Path;
use std::process::Command;

fn main() {
    let hash = git_output(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=AICANVAS_GIT_HASH={hash}");

    // Rebuild when HEAD moves so the embedded hash stays current.
    if let Some(git_dir) = git_output(&["rev-parse", "--git-dir"]) {
        let git_dir = Path::new(&git_dir);
        for entry in ["HEAD", "refs", "packed-refs"] {
            let path = git_dir.join(entry);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
