// Wed Aug 5 2026 - Alex

use crate::analyzers::{
    Analyzer, CFStringAnalyzer, CategoryAnalyzer, ClassAnalyzer, SelectorAnalyzer,
};
use crate::info::AnalysisInfo;
use crate::memory::{ImageFile, MemoryError};

/// Runs the analyzer suite over one image and collects the result.
///
/// Every invocation is a full re-scan: selectors first, then classes, then
/// CFStrings, with categories as an optional fourth pass. Analyzer errors are
/// not caught here; the first failure aborts the pass and whatever was
/// already written to the result stays as-is.
pub struct AnalysisProvider {
    include_categories: bool,
}

impl AnalysisProvider {
    pub fn new() -> Self {
        Self {
            include_categories: false,
        }
    }

    pub fn with_categories(mut self, include_categories: bool) -> Self {
        self.include_categories = include_categories;
        self
    }

    pub fn analyze(&self, file: &mut dyn ImageFile) -> Result<AnalysisInfo, MemoryError> {
        let mut info = AnalysisInfo::new();

        let mut analyzers: Vec<Box<dyn Analyzer>> = vec![
            Box::new(SelectorAnalyzer),
            Box::new(ClassAnalyzer),
            Box::new(CFStringAnalyzer),
        ];
        if self.include_categories {
            analyzers.push(Box::new(CategoryAnalyzer));
        }

        for analyzer in &analyzers {
            log::debug!("running {} analyzer", analyzer.name());
            analyzer.run(file, &mut info)?;
        }

        Ok(info)
    }

    /// Run the default analyzer suite on an image and get the resulting
    /// analysis info.
    pub fn info_for_file(file: &mut dyn ImageFile) -> Result<AnalysisInfo, MemoryError> {
        Self::new().analyze(file)
    }
}

impl Default for AnalysisProvider {
    fn default() -> Self {
        Self::new()
    }
}
