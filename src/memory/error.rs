// Mon Aug 3 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Out of bounds: address {0:#x} not mapped")]
    OutOfBounds(u64),
    #[error("Binary parse error: {0}")]
    BinaryParseError(String),
}
