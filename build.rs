use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Native builds still run the logic tests; only warn when the browser target is missing.
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    else {
        return;
    };
    let installed = String::from_utf8_lossy(&output.stdout);
    let has_target = installed
        .lines()
        .any(|line| line.trim() == "wasm32-unknown-unknown");
    if !has_target {
        println!(
            "cargo:warning=wasm32-unknown-unknown target not installed; run `rustup target add wasm32-unknown-unknown` to build the viewer"
        );
    }
}
