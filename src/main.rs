//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` locally so the gradient can be viewed in a browser.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const DEFAULT_PORT: &str = "8000";

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    let port = env::args().nth(1).unwrap_or_else(|| DEFAULT_PORT.to_string());

    // Build wasm bundle
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .env("GRADIENT_SKIP_WASM_PACK", "1")
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    println!("Launching local server at http://127.0.0.1:{port} …");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    // Keep process alive while the server runs.
    loop {
        match server.try_wait() {
            Ok(Some(status)) => {
                eprintln!("http server exited: {status}");
                std::process::exit(1);
            }
            Ok(None) => thread::sleep(Duration::from_secs(1)),
            Err(e) => {
                eprintln!("failed to poll http server: {e}");
                std::process::exit(1);
            }
        }
    }
}
