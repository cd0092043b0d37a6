//! Stand-in for a lowered program: drives the runtime through its C entry points.
//!
//! `hello [seconds]` optionally sleeps first, then prints `Hi\n0 \n`.

use std::env;
use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use runtime::{
    _mlir_ciface_print_chr as print_chr,
    _mlir_ciface_print_i32 as print_i32,
    _mlir_ciface_println as println,
    _mlir_ciface_sleep as sleep,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout belongs to the program's output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let seconds = match env::args().nth(1).map(|arg| arg.parse::<i32>()) {
        None => None,
        Some(Ok(seconds)) => Some(seconds),
        Some(Err(e)) => {
            eprintln!("usage: hello [seconds]: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(symbols = ?common::symbols::ALL, "driving runtime entry points");

    if let Some(seconds) = seconds {
        tracing::info!(seconds, "delaying before output");
        sleep(seconds);
    }

    print_chr(i32::from(b'H'));
    print_chr(i32::from(b'i'));
    println();
    print_i32(0);
    println();

    ExitCode::SUCCESS
}
