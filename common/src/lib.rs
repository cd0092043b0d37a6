//! Common library for the MLIR runtime shim

use thiserror::Error;

pub mod print;
pub mod symbols;

pub use print::Console;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write to output sink: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
