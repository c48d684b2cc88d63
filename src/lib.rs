// Mon Aug 3 2026 - Alex

pub mod abi;
pub mod analyzers;
pub mod encoding;
pub mod info;
pub mod memory;
pub mod provider;
pub mod utils;

pub use analyzers::Analyzer;
pub use info::AnalysisInfo;
pub use memory::{BufferImage, ImageFile, MachImage, MemoryError};
pub use provider::AnalysisProvider;
