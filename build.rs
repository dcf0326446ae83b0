use std::process::Command;

fn main() {
    let revision = command_output("git", &["rev-parse", "--short", "HEAD"]);
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_owned());
    let rust_version = command_output(&rustc, &["--version"]);

    println!("cargo:rustc-env=PIDS_EXPORTER_REVISION={revision}");
    println!("cargo:rustc-env=PIDS_EXPORTER_RUST_VERSION={rust_version}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}
