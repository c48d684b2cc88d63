// Mon Aug 3 2026 - Alex

use crate::memory::MemoryError;

/// A seekable view of a loaded binary image.
///
/// All analyzers read the image exclusively through this trait, so bytes can
/// come from a file on disk, a synthetic buffer, or a host's database without
/// the analysis code caring. Addresses are 64-bit virtual addresses inside
/// one image.
pub trait ImageFile {
    /// Move the read cursor to the given address.
    fn seek(&mut self, address: u64);

    /// Read a byte at the cursor, advancing it.
    fn read_byte(&mut self) -> Result<u8, MemoryError>;

    /// Read a 32-bit integer at the cursor, advancing it.
    fn read_int(&mut self) -> Result<u32, MemoryError>;

    /// Read a 64-bit integer at the cursor, advancing it.
    fn read_long(&mut self) -> Result<u64, MemoryError>;

    /// Base address the image is loaded at.
    fn image_base(&self) -> u64;

    /// Start address of the named section, 0 if the section is absent.
    fn section_start(&self, name: &str) -> u64;

    /// End address of the named section, 0 if the section is absent.
    fn section_end(&self, name: &str) -> u64;

    fn read_byte_at(&mut self, address: u64) -> Result<u8, MemoryError> {
        self.seek(address);
        self.read_byte()
    }

    fn read_int_at(&mut self, address: u64) -> Result<u32, MemoryError> {
        self.seek(address);
        self.read_int()
    }

    fn read_long_at(&mut self, address: u64) -> Result<u64, MemoryError> {
        self.seek(address);
        self.read_long()
    }

    /// Read a string at the cursor. A `max_length` of 0 reads up to the NUL
    /// terminator; otherwise at most `max_length` bytes are consumed.
    fn read_string(&mut self, max_length: usize) -> Result<String, MemoryError> {
        let mut bytes = Vec::new();

        while max_length == 0 || bytes.len() < max_length {
            let byte = self.read_byte()?;
            if byte == 0 {
                break;
            }
            bytes.push(byte);
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn read_string_at(&mut self, address: u64, max_length: usize) -> Result<String, MemoryError> {
        self.seek(address);
        self.read_string(max_length)
    }
}
