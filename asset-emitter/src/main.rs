use std::error::Error;
use std::process::ExitCode;

use asset_emitter::{emit_all, standard_assets};
use tracing_subscriber::EnvFilter;

const OUTPUT_DIR: &str = "images";

fn report(written: &[String]) {
    if written.is_empty() {
        return;
    }
    println!("Created the following tennis club images:");
    for name in written {
        println!("  - {OUTPUT_DIR}/{name}");
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let assets = standard_assets();
    match emit_all(&assets, OUTPUT_DIR) {
        Ok(written) => {
            report(&written);
            ExitCode::SUCCESS
        }
        Err(aborted) => {
            report(&aborted.written);
            eprintln!("error: {}", aborted.source);
            if let Some(cause) = aborted.source.source() {
                eprintln!("  caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}
