use core::cmp::min;

use embedded_storage::nor_flash::{check_erase, check_read, check_write, ErrorType, NorFlash, ReadNorFlash};

use super::{Error, SpiFlashHost, MAX_READ_BYTES, MAX_WRITE_BYTES};

pub const PAGE_SIZE: usize = 256;
pub const SECTOR_SIZE: u32 = 4096;
pub const BLOCK_SIZE: u32 = 0x1_0000;

/// NOR flash on top of a [`SpiFlashHost`].
///
/// Transfers are split at [`MAX_READ_BYTES`] / [`MAX_WRITE_BYTES`] and never
/// cross a program page.
pub struct SpiFlash<H: SpiFlashHost> {
    host: H,
    capacity: usize,
}

impl<H: SpiFlashHost> SpiFlash<H> {
    pub fn new(host: H, capacity: usize) -> Self {
        Self { host, capacity }
    }

    pub fn host(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn free(self) -> H {
        self.host
    }

    fn wait_idle(&mut self) {
        self.host.poll_cmd_done();
        while !self.host.host_idle() {}
    }

    pub fn read_bytes(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Error> {
        if bytes.is_empty() {
            return Ok(());
        }
        check_read(self, offset, bytes.len()).map_err(Error::from)?;

        let direct = self.host.supports_direct_read(bytes);
        let mut bounce = [0u8; MAX_READ_BYTES];
        let mut done = 0usize;
        while done < bytes.len() {
            let step = min(bytes.len() - done, MAX_READ_BYTES);
            let addr = offset + done as u32;
            trace!("spi flash read {:#x} len {}", addr, step);

            if direct {
                self.host.read(&mut bytes[done..done + step], addr);
            } else {
                self.host.read(&mut bounce[..step], addr);
                bytes[done..done + step].copy_from_slice(&bounce[..step]);
            }
            self.wait_idle();
            done += step;
        }
        Ok(())
    }

    pub fn write_bytes(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Error> {
        if bytes.is_empty() {
            return Ok(());
        }
        check_write(self, offset, bytes.len()).map_err(Error::from)?;

        let direct = self.host.supports_direct_write(bytes);
        let mut bounce = [0u8; MAX_WRITE_BYTES];
        let mut done = 0usize;
        while done < bytes.len() {
            let addr = offset as usize + done;
            let page_remaining = PAGE_SIZE - (addr % PAGE_SIZE);
            let step = min(bytes.len() - done, min(page_remaining, MAX_WRITE_BYTES));
            trace!("spi flash program {:#x} len {}", addr, step);

            self.host.set_write_protect(false);
            if direct {
                self.host.program_page(&bytes[done..done + step], addr as u32);
            } else {
                bounce[..step].copy_from_slice(&bytes[done..done + step]);
                self.host.program_page(&bounce[..step], addr as u32);
            }
            self.wait_idle();
            done += step;
        }
        Ok(())
    }

    /// Erase `[from, to)`. Uses a chip erase for the whole flash and 64 KiB
    /// block erases where the range allows.
    pub fn erase_range(&mut self, from: u32, to: u32) -> Result<(), Error> {
        if from == to {
            return Ok(());
        }
        check_erase(self, from, to).map_err(Error::from)?;

        if from == 0 && to as usize == self.capacity {
            trace!("spi flash erase chip");
            self.host.set_write_protect(false);
            self.host.erase_chip();
            self.wait_idle();
            return Ok(());
        }

        let mut addr = from;
        while addr < to {
            self.host.set_write_protect(false);
            if addr % BLOCK_SIZE == 0 && to - addr >= BLOCK_SIZE {
                trace!("spi flash erase block {:#x}", addr);
                self.host.erase_block(addr);
                addr += BLOCK_SIZE;
            } else {
                trace!("spi flash erase sector {:#x}", addr);
                self.host.erase_sector(addr);
                addr += SECTOR_SIZE;
            }
            self.wait_idle();
        }
        Ok(())
    }
}

impl<H: SpiFlashHost> ErrorType for SpiFlash<H> {
    type Error = Error;
}

impl<H: SpiFlashHost> ReadNorFlash for SpiFlash<H> {
    const READ_SIZE: usize = 1;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        self.read_bytes(offset, bytes)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<H: SpiFlashHost> NorFlash for SpiFlash<H> {
    const WRITE_SIZE: usize = 1;
    const ERASE_SIZE: usize = SECTOR_SIZE as usize;

    fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        self.erase_range(from, to)
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_bytes(offset, bytes)
    }
}
