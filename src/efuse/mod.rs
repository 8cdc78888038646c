//! EFUSE field descriptors (ESP32-P4)
//!
//! An efuse field is a list of [`EfuseDesc`] bit ranges. This module does not
//! drive the efuse controller: readers implement [`EfuseRead`] over a block
//! image that was read once, and the field tables in [`table`] are decoded
//! against it.

pub mod rtc_calib;
pub mod table;


/// EFUSE error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An argument is out of range, or the destination cannot hold the field.
    InvalidArgument,
}

/// EFUSE block.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EfuseBlock {
    Blk0 = 0,
    Blk1 = 1,
    Blk2 = 2,
    Blk3 = 3,
    Blk4 = 4,
    Blk5 = 5,
    Blk6 = 6,
    Blk7 = 7,
    Blk8 = 8,
    Blk9 = 9,
    Blk10 = 10,
}

impl EfuseBlock {
    pub const COUNT: usize = 11;

    /// Number of 32-bit words the block holds.
    pub const fn words(self) -> usize {
        match self {
            EfuseBlock::Blk0 | EfuseBlock::Blk1 => 6,
            _ => 8,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One bit range inside an efuse block.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EfuseDesc {
    pub block: EfuseBlock,
    pub bit_start: u16,
    pub bit_count: u16,
}

impl EfuseDesc {
    pub const fn new(block: EfuseBlock, bit_start: u16, bit_count: u16) -> Self {
        Self {
            block,
            bit_start,
            bit_count,
        }
    }
}

/// Total width of a field in bits.
pub fn field_size(field: &[EfuseDesc]) -> usize {
    field.iter().map(|desc| desc.bit_count as usize).sum()
}

/// Read access to efuse block contents.
///
/// Implementors provide [`read_word`](EfuseRead::read_word); the field
/// decoders are built on it.
pub trait EfuseRead {
    /// Read one 32-bit word of `block`. Words past the end of the block read as zero.
    fn read_word(&self, block: EfuseBlock, word: usize) -> u32;

    fn read_bit(&self, block: EfuseBlock, bit: usize) -> bool {
        (self.read_word(block, bit / 32) >> (bit % 32)) & 1 != 0
    }

    /// Read a single descriptor, least significant bit aligned.
    ///
    /// Panics if the descriptor is wider than 32 bits.
    fn read_desc(&self, desc: &EfuseDesc) -> u32 {
        assert!(desc.bit_count <= 32);
        let mut value = 0u32;
        for i in 0..desc.bit_count as usize {
            if self.read_bit(desc.block, desc.bit_start as usize + i) {
                value |= 1 << i;
            }
        }
        value
    }

    /// Read the first `bit_count` bits of `field` into `dst`, least significant
    /// bit first. Descriptors are concatenated in declaration order.
    fn read_field_blob(
        &self,
        field: &[EfuseDesc],
        dst: &mut [u8],
        bit_count: usize,
    ) -> Result<(), Error> {
        if bit_count == 0 || dst.len() * 8 < bit_count {
            return Err(Error::InvalidArgument);
        }
        dst[..bit_count.div_ceil(8)].fill(0);

        let mut out = 0usize;
        for desc in field {
            for i in 0..desc.bit_count as usize {
                if out == bit_count {
                    return Ok(());
                }
                if self.read_bit(desc.block, desc.bit_start as usize + i) {
                    dst[out / 8] |= 1 << (out % 8);
                }
                out += 1;
            }
        }
        Ok(())
    }

    /// Read a field of at most 32 bits.
    fn read_field_u32(&self, field: &[EfuseDesc]) -> Result<u32, Error> {
        let bits = field_size(field);
        if bits == 0 || bits > 32 {
            return Err(Error::InvalidArgument);
        }
        let mut bytes = [0u8; 4];
        self.read_field_blob(field, &mut bytes, bits)?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn read_field_bit(&self, field: &[EfuseDesc]) -> Result<bool, Error> {
        if field_size(field) != 1 {
            return Err(Error::InvalidArgument);
        }
        Ok(self.read_field_u32(field)? != 0)
    }
}

/// In-memory image of all efuse blocks.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EfuseBlocks {
    words: [[u32; 8]; EfuseBlock::COUNT],
}

impl Default for EfuseBlocks {
    fn default() -> Self {
        Self::new()
    }
}

impl EfuseBlocks {
    /// An image with every bit unprogrammed.
    pub const fn new() -> Self {
        Self {
            words: [[0; 8]; EfuseBlock::COUNT],
        }
    }

    /// Replace the contents of `block`. Extra words beyond the block size are ignored.
    pub fn set_block(&mut self, block: EfuseBlock, words: &[u32]) {
        let dst = &mut self.words[block.index()];
        let n = words.len().min(block.words());
        dst[..n].copy_from_slice(&words[..n]);
        dst[n..].fill(0);
    }

    pub fn block(&self, block: EfuseBlock) -> &[u32] {
        &self.words[block.index()][..block.words()]
    }
}

impl EfuseRead for EfuseBlocks {
    fn read_word(&self, block: EfuseBlock, word: usize) -> u32 {
        self.block(block).get(word).copied().unwrap_or(0)
    }
}

/// Read the factory MAC address, most significant byte first.
pub fn read_mac_factory(efuse: &impl EfuseRead) -> [u8; 6] {
    let mut mac = [0u8; 6];
    for (byte, desc) in mac.iter_mut().zip(table::MAC_FACTORY) {
        *byte = efuse.read_desc(desc) as u8;
    }
    mac
}
