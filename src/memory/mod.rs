// Mon Aug 3 2026 - Alex

pub mod buffer;
pub mod error;
pub mod macho;
pub mod traits;

pub use buffer::BufferImage;
pub use error::MemoryError;
pub use macho::MachImage;
pub use traits::ImageFile;
