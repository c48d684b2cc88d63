// Tue Aug 4 2026 - Alex

use crate::analyzers::methods::analyze_method_list;
use crate::analyzers::Analyzer;
use crate::info::{AnalysisInfo, CategoryInfo, MethodListInfo};
use crate::memory::{ImageFile, MemoryError};

/// Scans `__objc_catlist` and records every category.
///
/// A category object holds its name pointer at +0x0, its instance-method
/// list at +0x10, and its class-method list at +0x18. A category may define
/// either kind of list, both, or neither.
pub struct CategoryAnalyzer;

impl Analyzer for CategoryAnalyzer {
    fn name(&self) -> &'static str {
        "categories"
    }

    fn run(&self, file: &mut dyn ImageFile, info: &mut AnalysisInfo) -> Result<(), MemoryError> {
        let section_start = file.section_start("__objc_catlist");
        let section_end = file.section_end("__objc_catlist");
        if section_start == 0 || section_end == 0 {
            return Ok(());
        }

        let mut list_pointer = section_start;
        while list_pointer < section_end {
            let raw_category = file.read_long_at(list_pointer)?;
            let address = self.arp(file, raw_category);

            let raw_name = file.read_long_at(address)?;
            let name_address = self.arp(file, raw_name);
            let name = file.read_string_at(name_address, 0)?;

            let raw_instance_list = file.read_long_at(address + 0x10)?;
            let instance_method_list_address = self.arp(file, raw_instance_list);

            let raw_class_list = file.read_long_at(address + 0x18)?;
            let class_method_list_address = self.arp(file, raw_class_list);

            let instance_methods = if instance_method_list_address != 0 {
                analyze_method_list(file, info, instance_method_list_address)?
            } else {
                MethodListInfo::default()
            };

            let class_methods = if class_method_list_address != 0 {
                analyze_method_list(file, info, class_method_list_address)?
            } else {
                MethodListInfo::default()
            };

            info.categories.push(CategoryInfo {
                list_pointer,
                address,
                name_address,
                name,
                instance_method_list_address,
                instance_methods,
                class_method_list_address,
                class_methods,
            });

            list_pointer += 8;
        }

        log::debug!("recorded {} categories", info.categories.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::BufferImage;

    const BASE: u64 = 0x1_0000_0000;

    #[test]
    fn test_category_with_instance_methods_only() {
        let mut image = BufferImage::new(BASE, 0x400);
        let mut info = AnalysisInfo::new();

        let section = BASE + 0x10;
        let category = BASE + 0x40;
        let list = BASE + 0x100;
        let name = BASE + 0x200;

        image.define_section("__objc_catlist", section, section + 8);
        image.write_long(section, category).unwrap();
        image.write_long(category, name).unwrap();
        image.write_long(category + 0x10, list).unwrap();
        image.write_long(category + 0x18, 0).unwrap();
        image.write_cstring(name, "Additions").unwrap();

        image.write_int(list, 0x0000_0018).unwrap();
        image.write_int(list + 4, 1).unwrap();
        image.write_long(list + 8, BASE + 0x220).unwrap();
        image.write_long(list + 16, BASE + 0x240).unwrap();
        image.write_long(list + 24, BASE + 0x300).unwrap();
        image.write_cstring(BASE + 0x220, "md5String").unwrap();
        image.write_cstring(BASE + 0x240, "@16@0:8").unwrap();

        CategoryAnalyzer.run(&mut image, &mut info).unwrap();

        assert_eq!(info.categories.len(), 1);
        let category = &info.categories[0];
        assert_eq!(category.name, "Additions");
        assert_eq!(category.instance_method_list_address, BASE + 0x100);
        assert_eq!(category.instance_methods.methods.len(), 1);
        assert_eq!(category.instance_methods.methods[0].selector, "md5String");
        assert_eq!(category.class_method_list_address, 0);
        assert!(category.class_methods.methods.is_empty());
    }

    #[test]
    fn test_category_with_both_method_lists() {
        let mut image = BufferImage::new(BASE, 0x400);
        let mut info = AnalysisInfo::new();

        let section = BASE + 0x10;
        let category = BASE + 0x40;
        let instance_list = BASE + 0x100;
        let class_list = BASE + 0x140;
        let name = BASE + 0x200;

        image.define_section("__objc_catlist", section, section + 8);
        image.write_long(section, category).unwrap();
        image.write_long(category, name).unwrap();
        image.write_long(category + 0x10, instance_list).unwrap();
        image.write_long(category + 0x18, class_list).unwrap();
        image.write_cstring(name, "Convenience").unwrap();

        for (list, name_addr, imp) in [
            (instance_list, BASE + 0x220, BASE + 0x300),
            (class_list, BASE + 0x230, BASE + 0x310),
        ] {
            image.write_int(list, 0x0000_0018).unwrap();
            image.write_int(list + 4, 1).unwrap();
            image.write_long(list + 8, name_addr).unwrap();
            image.write_long(list + 16, BASE + 0x240).unwrap();
            image.write_long(list + 24, imp).unwrap();
        }
        image.write_cstring(BASE + 0x220, "value").unwrap();
        image.write_cstring(BASE + 0x230, "shared").unwrap();
        image.write_cstring(BASE + 0x240, "@16@0:8").unwrap();

        CategoryAnalyzer.run(&mut image, &mut info).unwrap();

        let category = &info.categories[0];
        assert_eq!(category.instance_methods.methods[0].selector, "value");
        assert_eq!(category.class_methods.methods[0].selector, "shared");
        assert_eq!(info.method_impls[&(BASE + 0x220)], BASE + 0x300);
        assert_eq!(info.method_impls[&(BASE + 0x230)], BASE + 0x310);
    }

    #[test]
    fn test_missing_section_is_silent() {
        let mut image = BufferImage::new(BASE, 0x40);
        let mut info = AnalysisInfo::new();

        CategoryAnalyzer.run(&mut image, &mut info).unwrap();
        assert!(info.categories.is_empty());
    }
}
