// Tue Aug 4 2026 - Alex

use crate::memory::{ImageFile, MemoryError};
use goblin::mach::Mach;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone)]
struct SegmentMap {
    vmaddr: u64,
    vmsize: u64,
    fileoff: u64,
}

/// An image backed by a Mach-O file on disk.
///
/// Segments translate virtual addresses to file offsets; sections are
/// registered by name so analyzers can locate the Objective-C metadata
/// sections without knowing anything about Mach-O.
pub struct MachImage {
    data: Vec<u8>,
    base: u64,
    cursor: u64,
    segments: Vec<SegmentMap>,
    sections: HashMap<String, (u64, u64)>,
}

impl MachImage {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let mut file = File::open(path.as_ref())?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        Self::parse(data)
    }

    pub fn parse(data: Vec<u8>) -> Result<Self, MemoryError> {
        let mach = Mach::parse(&data)
            .map_err(|e| MemoryError::BinaryParseError(format!("failed to parse Mach-O: {}", e)))?;

        let macho = match mach {
            Mach::Binary(m) => m,
            Mach::Fat(_) => {
                return Err(MemoryError::BinaryParseError(
                    "fat binaries not supported".to_string(),
                ))
            }
        };

        let mut base = 0u64;
        let mut segments = Vec::new();
        let mut sections = HashMap::new();

        for segment in &macho.segments {
            let segname = segment.name().unwrap_or("");
            if segname == "__TEXT" {
                base = segment.vmaddr;
            }

            if segname != "__PAGEZERO" {
                segments.push(SegmentMap {
                    vmaddr: segment.vmaddr,
                    vmsize: segment.vmsize,
                    fileoff: segment.fileoff,
                });
            }

            for (section, _) in segment.sections().map_err(|e| {
                MemoryError::BinaryParseError(format!("failed to parse sections: {}", e))
            })? {
                let sectname = section.name().unwrap_or("").to_string();
                sections.insert(sectname, (section.addr, section.addr + section.size));
            }
        }

        log::debug!(
            "loaded Mach-O image: base {:#x}, {} segments, {} sections",
            base,
            segments.len(),
            sections.len()
        );

        Ok(Self {
            cursor: base,
            data,
            base,
            segments,
            sections,
        })
    }

    fn translate(&self, address: u64, len: usize) -> Result<usize, MemoryError> {
        let segment = self
            .segments
            .iter()
            .find(|seg| address >= seg.vmaddr && address < seg.vmaddr + seg.vmsize)
            .ok_or(MemoryError::OutOfBounds(address))?;

        let offset = segment.fileoff + (address - segment.vmaddr);
        let end = offset
            .checked_add(len as u64)
            .ok_or(MemoryError::OutOfBounds(address))?;
        if end > self.data.len() as u64 {
            return Err(MemoryError::OutOfBounds(address));
        }

        Ok(offset as usize)
    }
}

impl ImageFile for MachImage {
    fn seek(&mut self, address: u64) {
        self.cursor = address;
    }

    fn read_byte(&mut self) -> Result<u8, MemoryError> {
        let offset = self.translate(self.cursor, 1)?;
        self.cursor += 1;
        Ok(self.data[offset])
    }

    fn read_int(&mut self) -> Result<u32, MemoryError> {
        let offset = self.translate(self.cursor, 4)?;
        self.cursor += 4;
        Ok(u32::from_le_bytes(
            self.data[offset..offset + 4].try_into().unwrap(),
        ))
    }

    fn read_long(&mut self) -> Result<u64, MemoryError> {
        let offset = self.translate(self.cursor, 8)?;
        self.cursor += 8;
        Ok(u64::from_le_bytes(
            self.data[offset..offset + 8].try_into().unwrap(),
        ))
    }

    fn image_base(&self) -> u64 {
        self.base
    }

    fn section_start(&self, name: &str) -> u64 {
        self.sections.get(name).map_or(0, |&(start, _)| start)
    }

    fn section_end(&self, name: &str) -> u64 {
        self.sections.get(name).map_or(0, |&(_, end)| end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> MachImage {
        MachImage {
            data: (0u8..0x80).collect(),
            base: 0x1_0000_0000,
            cursor: 0x1_0000_0000,
            segments: vec![
                SegmentMap {
                    vmaddr: 0x1_0000_0000,
                    vmsize: 0x40,
                    fileoff: 0,
                },
                SegmentMap {
                    vmaddr: 0x1_0000_4000,
                    vmsize: 0x40,
                    fileoff: 0x40,
                },
            ],
            sections: HashMap::from([(
                "__objc_selrefs".to_string(),
                (0x1_0000_4000u64, 0x1_0000_4010u64),
            )]),
        }
    }

    #[test]
    fn test_translate_through_segments() {
        let mut image = sample_image();
        assert_eq!(image.read_byte_at(0x1_0000_0000).unwrap(), 0x00);
        assert_eq!(image.read_byte_at(0x1_0000_0010).unwrap(), 0x10);
        assert_eq!(image.read_byte_at(0x1_0000_4004).unwrap(), 0x44);
    }

    #[test]
    fn test_unmapped_address_fails() {
        let mut image = sample_image();
        assert!(matches!(
            image.read_byte_at(0x1_0000_2000),
            Err(MemoryError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_section_lookup() {
        let image = sample_image();
        assert_eq!(image.section_start("__objc_selrefs"), 0x1_0000_4000);
        assert_eq!(image.section_end("__objc_selrefs"), 0x1_0000_4010);
        assert_eq!(image.section_start("__cfstring"), 0);
    }
}
