// Tue Aug 4 2026 - Alex

use crate::abi;
use crate::analyzers::methods::analyze_method_list;
use crate::analyzers::Analyzer;
use crate::info::{AnalysisInfo, ClassInfo, MethodListInfo};
use crate::memory::{ImageFile, MemoryError};

/// Scans `__objc_classlist` and records every class and its method list.
///
/// Each slot points at a class object; the class object holds the read-only
/// class-data pointer at +0x20, which in turn holds the name pointer at
/// +0x18 and the method-list pointer at +0x20. The class-data pointer can
/// carry Swift flag bits in its low two bits, which must never be treated as
/// address bits.
pub struct ClassAnalyzer;

impl Analyzer for ClassAnalyzer {
    fn name(&self) -> &'static str {
        "classes"
    }

    fn run(&self, file: &mut dyn ImageFile, info: &mut AnalysisInfo) -> Result<(), MemoryError> {
        let section_start = file.section_start("__objc_classlist");
        let section_end = file.section_end("__objc_classlist");
        if section_start == 0 || section_end == 0 {
            return Ok(());
        }

        let mut list_pointer = section_start;
        while list_pointer < section_end {
            let raw_class = file.read_long_at(list_pointer)?;
            let address = self.arp(file, raw_class);

            let raw_data = file.read_long_at(address + 0x20)?;
            let data_address = self.arp(file, raw_data) & !abi::FAST_POINTER_DATA_MASK;

            let raw_name = file.read_long_at(data_address + 0x18)?;
            let name_address = self.arp(file, raw_name);
            let name = file.read_string_at(name_address, 0)?;

            let raw_method_list = file.read_long_at(data_address + 0x20)?;
            let method_list_address = self.arp(file, raw_method_list);

            let method_list = if method_list_address != 0 {
                analyze_method_list(file, info, method_list_address)?
            } else {
                MethodListInfo::default()
            };

            info.classes.push(ClassInfo {
                list_pointer,
                address,
                data_address,
                name_address,
                name,
                method_list_address,
                method_list,
            });

            list_pointer += 8;
        }

        log::debug!("recorded {} classes", info.classes.len());
        Ok(())
    }
}
