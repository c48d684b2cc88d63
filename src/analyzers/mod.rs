// Tue Aug 4 2026 - Alex

pub mod categories;
pub mod cfstrings;
pub mod classes;
pub mod methods;
pub mod selectors;

pub use categories::CategoryAnalyzer;
pub use cfstrings::CFStringAnalyzer;
pub use classes::ClassAnalyzer;
pub use selectors::SelectorAnalyzer;

use crate::abi;
use crate::info::AnalysisInfo;
use crate::memory::{ImageFile, MemoryError};

/// One structural scan over the image.
///
/// Each analyzer walks a single metadata section and writes what it finds
/// into the shared [`AnalysisInfo`]. Analyzers run strictly in sequence and
/// never observe one another's output within a pass.
pub trait Analyzer {
    fn name(&self) -> &'static str;

    fn run(&self, file: &mut dyn ImageFile, info: &mut AnalysisInfo) -> Result<(), MemoryError>;

    /// Automatically resolve a pointer against the image base.
    fn arp(&self, file: &dyn ImageFile, pointer: u64) -> u64 {
        abi::decode_pointer(pointer, file.image_base())
    }
}
