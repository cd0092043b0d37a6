//! Link names of the runtime entry points
//!
//! MLIR functions marked `llvm.emit_c_interface` call their externals through
//! a `_mlir_ciface_` wrapper name, so that is what the shim exports.

pub const SLEEP: &str = "_mlir_ciface_sleep";
pub const PRINT_I32: &str = "_mlir_ciface_print_i32";
pub const PRINTLN: &str = "_mlir_ciface_println";
pub const PRINT_CHR: &str = "_mlir_ciface_print_chr";

pub const ALL: [&str; 4] = [SLEEP, PRINT_I32, PRINTLN, PRINT_CHR];
