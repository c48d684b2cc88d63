// Tue Aug 4 2026 - Alex

use crate::encoding;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A constant CFString instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CFStringInfo {
    pub address: u64,
    pub data_address: u64,
    pub size: u64,
}

/// A selector-reference slot and the selector it resolves to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorRefInfo {
    pub address: u64,
    pub raw_selector: u64,
    pub name_address: u64,
    pub name: String,
}

/// A single method-table entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodInfo {
    pub address: u64,
    pub selector: String,
    pub encoded_type: String,
    pub name_address: u64,
    pub type_address: u64,
    pub impl_address: u64,
}

impl MethodInfo {
    /// The selector split at `:` into per-argument labels.
    pub fn selector_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.selector.split(':').map(str::to_string).collect();
        if tokens.last().map_or(false, |t| t.is_empty()) {
            tokens.pop();
        }
        tokens
    }

    /// The encoded type string decoded into C-style type tokens.
    pub fn decoded_type_tokens(&self) -> Vec<String> {
        encoding::parse_encoded_type(&self.encoded_type)
    }
}

bitflags! {
    /// High bits of a method list's flags word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MethodListFlags: u32 {
        const RELATIVE_OFFSETS = 0x8000_0000;
        const DIRECT_SELECTORS = 0x4000_0000;
    }
}

/// Mask isolating the flag bits of the packed flags-and-entsize word.
const METHOD_LIST_FLAGS_MASK: u32 = 0xFFFF_0000;

/// A class's or category's method table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodListInfo {
    pub address: u64,
    pub flags: u32,
    pub methods: Vec<MethodInfo>,
}

impl MethodListInfo {
    fn flag_bits(&self) -> MethodListFlags {
        MethodListFlags::from_bits_truncate(self.flags & METHOD_LIST_FLAGS_MASK)
    }

    /// Whether entries are 12-byte records of signed offsets rather than
    /// 24-byte records of pointers.
    pub fn has_relative_offsets(&self) -> bool {
        self.flag_bits().contains(MethodListFlags::RELATIVE_OFFSETS)
    }

    /// Whether the name field points straight at the selector string instead
    /// of at a selector-reference slot.
    pub fn has_direct_selectors(&self) -> bool {
        self.flag_bits().contains(MethodListFlags::DIRECT_SELECTORS)
    }
}

/// An Objective-C class and its read-only data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassInfo {
    pub list_pointer: u64,
    pub address: u64,
    pub data_address: u64,
    pub name_address: u64,
    pub name: String,
    pub method_list_address: u64,
    pub method_list: MethodListInfo,
}

/// An Objective-C category. Either method list may be absent (address 0).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub list_pointer: u64,
    pub address: u64,
    pub name_address: u64,
    pub name: String,
    pub instance_method_list_address: u64,
    pub instance_methods: MethodListInfo,
    pub class_method_list_address: u64,
    pub class_methods: MethodListInfo,
}

/// Aggregate analysis output.
///
/// One instance is shared by every analyzer in a pass and is write-once:
/// analysis populates it, everything afterwards only reads. Selector
/// references are stored once and indexed under two keys (the raw slot value
/// and the slot address) so lookups work from either an in-register value or
/// a storage location.
#[derive(Debug, Default)]
pub struct AnalysisInfo {
    pub classes: Vec<ClassInfo>,
    pub categories: Vec<CategoryInfo>,
    pub cf_strings: Vec<CFStringInfo>,

    selector_refs: Vec<SelectorRefInfo>,
    selector_refs_by_key: HashMap<u64, usize>,

    /// Method name address mapped to implementation address, across every
    /// method list seen. This is the dispatch table external call-rewriting
    /// consumes.
    pub method_impls: BTreeMap<u64, u64>,
}

impl AnalysisInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selector reference, indexing it by raw value and by slot
    /// address.
    pub fn add_selector_ref(&mut self, info: SelectorRefInfo) {
        let index = self.selector_refs.len();
        self.selector_refs_by_key.insert(info.raw_selector, index);
        self.selector_refs_by_key.insert(info.address, index);
        self.selector_refs.push(info);
    }

    /// Look up a selector reference by raw slot value or slot address.
    pub fn selector_ref(&self, key: u64) -> Option<&SelectorRefInfo> {
        self.selector_refs_by_key
            .get(&key)
            .map(|&index| &self.selector_refs[index])
    }

    pub fn selector_refs(&self) -> &[SelectorRefInfo] {
        &self.selector_refs
    }

    pub fn total_method_count(&self) -> usize {
        let class_methods: usize = self
            .classes
            .iter()
            .map(|c| c.method_list.methods.len())
            .sum();
        let category_methods: usize = self
            .categories
            .iter()
            .map(|c| c.instance_methods.methods.len() + c.class_methods.methods.len())
            .sum();

        class_methods + category_methods
    }

    /// Render the analysis as stable pretty-printed JSON for inspection and
    /// snapshot tests.
    pub fn dump(&self) -> String {
        let json = serde_json::json!({
            "classes": self.classes,
            "categories": self.categories,
            "cf_strings": self.cf_strings,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}
