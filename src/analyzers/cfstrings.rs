// Tue Aug 4 2026 - Alex

use crate::analyzers::Analyzer;
use crate::info::{AnalysisInfo, CFStringInfo};
use crate::memory::{ImageFile, MemoryError};

/// Scans `__cfstring` and records every constant-string instance.
///
/// CFString objects are 0x20 bytes: the character-data pointer sits at +0x10
/// and the character count at +0x18. The count is a length, not a pointer,
/// and is read verbatim.
pub struct CFStringAnalyzer;

impl Analyzer for CFStringAnalyzer {
    fn name(&self) -> &'static str {
        "cfstrings"
    }

    fn run(&self, file: &mut dyn ImageFile, info: &mut AnalysisInfo) -> Result<(), MemoryError> {
        let section_start = file.section_start("__cfstring");
        let section_end = file.section_end("__cfstring");
        if section_start == 0 || section_end == 0 {
            return Ok(());
        }

        let mut address = section_start;
        while address < section_end {
            let raw_data = file.read_long_at(address + 0x10)?;
            let data_address = self.arp(file, raw_data);
            let size = file.read_long_at(address + 0x18)?;

            info.cf_strings.push(CFStringInfo {
                address,
                data_address,
                size,
            });

            address += 0x20;
        }

        log::debug!("recorded {} CFStrings", info.cf_strings.len());
        Ok(())
    }
}
