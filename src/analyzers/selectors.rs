// Tue Aug 4 2026 - Alex

use crate::analyzers::Analyzer;
use crate::info::{AnalysisInfo, SelectorRefInfo};
use crate::memory::{ImageFile, MemoryError};

/// Scans `__objc_selrefs` and records every selector-reference slot.
///
/// Each record is indexed under both its raw slot value and the slot's own
/// address, so later lookups can resolve a selector from an in-register
/// value or from a storage location.
pub struct SelectorAnalyzer;

impl Analyzer for SelectorAnalyzer {
    fn name(&self) -> &'static str {
        "selectors"
    }

    fn run(&self, file: &mut dyn ImageFile, info: &mut AnalysisInfo) -> Result<(), MemoryError> {
        let section_start = file.section_start("__objc_selrefs");
        let section_end = file.section_end("__objc_selrefs");
        if section_start == 0 || section_end == 0 {
            return Ok(());
        }

        let mut address = section_start;
        while address < section_end {
            let raw_selector = file.read_long_at(address)?;
            let name_address = self.arp(file, raw_selector);
            let name = file.read_string_at(name_address, 0)?;

            info.add_selector_ref(SelectorRefInfo {
                address,
                raw_selector,
                name_address,
                name,
            });

            address += 0x8;
        }

        log::debug!("recorded {} selector refs", info.selector_refs().len());
        Ok(())
    }
}
