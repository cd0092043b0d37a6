//! Runtime support for MLIR-lowered programs
//!
//! Four C-ABI entry points, exported under the `_mlir_ciface_` names the
//! lowering emits calls to. None of them reports failure: a write error is
//! dropped after a debug event.

use std::io::Write;

use common::Console;

pub mod delay;

pub use delay::{delay, duration_for};

/// Runs one output operation and flushes. The host's main may not be Rust,
/// so std's exit-time flush can't be relied on.
fn emit<W: Write>(
    console: &mut Console<W>,
    op: &'static str,
    f: impl FnOnce(&mut Console<W>) -> common::Result<()>,
) {
    if let Err(e) = f(console).and_then(|()| console.flush()) {
        tracing::debug!(op, error = %e, "output dropped");
    }
}

fn print_i32_on<W: Write>(console: &mut Console<W>, value: i32) {
    emit(console, "print_i32", |c| c.print_i32(value));
}

fn println_on<W: Write>(console: &mut Console<W>) {
    emit(console, "println", Console::println);
}

fn print_chr_on<W: Write>(console: &mut Console<W>, code: i32) {
    emit(console, "print_chr", |c| c.print_chr(code));
}

#[unsafe(no_mangle)]
pub extern "C" fn _mlir_ciface_sleep(seconds: i32) {
    delay(seconds);
}

#[unsafe(no_mangle)]
pub extern "C" fn _mlir_ciface_print_i32(value: i32) {
    print_i32_on(&mut Console::stdout(), value);
}

#[unsafe(no_mangle)]
pub extern "C" fn _mlir_ciface_println() {
    println_on(&mut Console::stdout());
}

#[unsafe(no_mangle)]
pub extern "C" fn _mlir_ciface_print_chr(c: i32) {
    print_chr_on(&mut Console::stdout(), c);
}
