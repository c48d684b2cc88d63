// Tue Aug 4 2026 - Alex

use crate::abi;
use crate::info::{AnalysisInfo, MethodInfo, MethodListInfo};
use crate::memory::{ImageFile, MemoryError};

/// Walk the method list at `address` and record every entry.
///
/// Method lists come in two generations: the classic layout of three 8-byte
/// pointers per entry, and the compact layout of three signed 32-bit offsets
/// measured from each field's own address. The flags word additionally says
/// whether the name field reaches the selector string directly or goes
/// through a selector-reference slot. Each resolved method also registers its
/// name-address to impl-address pair in the shared dispatch table.
pub fn analyze_method_list(
    file: &mut dyn ImageFile,
    info: &mut AnalysisInfo,
    address: u64,
) -> Result<MethodListInfo, MemoryError> {
    let mut list = MethodListInfo {
        address,
        flags: file.read_int_at(address)?,
        methods: Vec::new(),
    };

    let method_count = file.read_int_at(address + 0x4)?;
    let method_size: u64 = if list.has_relative_offsets() { 12 } else { 24 };

    for i in 0..method_count as u64 {
        let entry = address + 8 + i * method_size;
        file.seek(entry);

        let (name_address, type_address, impl_address) = if list.has_relative_offsets() {
            let name_offset = file.read_int()? as i32;
            let type_offset = file.read_int()? as i32;
            let impl_offset = file.read_int()? as i32;

            (
                entry.wrapping_add(name_offset as i64 as u64),
                (entry + 4).wrapping_add(type_offset as i64 as u64),
                (entry + 8).wrapping_add(impl_offset as i64 as u64),
            )
        } else {
            let base = file.image_base();
            let name = abi::decode_pointer(file.read_long()?, base);
            let types = abi::decode_pointer(file.read_long()?, base);
            let imp = abi::decode_pointer(file.read_long()?, base);

            (name, types, imp)
        };

        let selector = if !list.has_relative_offsets() || list.has_direct_selectors() {
            file.read_string_at(name_address, 0)?
        } else {
            // Indirect: the name field designates a selector-reference slot
            // whose decoded contents reach the string.
            let raw = file.read_long_at(name_address)?;
            let selector_name_pointer = abi::decode_pointer(raw, file.image_base());
            file.read_string_at(selector_name_pointer, 0)?
        };

        let encoded_type = file.read_string_at(type_address, 0)?;

        info.method_impls.insert(name_address, impl_address);

        list.methods.push(MethodInfo {
            address: entry,
            selector,
            encoded_type,
            name_address,
            type_address,
            impl_address,
        });
    }

    Ok(list)
}
