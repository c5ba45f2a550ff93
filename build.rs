use std::env;
use std::process::Command;

fn main() {
    // The info endpoint reports the toolchain the binary was built with.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_owned());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|value| value.trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned());

    println!("cargo:rustc-env=BUILD_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-changed=build.rs");
}
