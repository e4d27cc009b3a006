//! Unaligned little-endian reads and writes on byte pointers.
//!
//! Pixel buffers are plain `[u8]` with no alignment guarantee, and the packed formats are
//! defined as little-endian.

/// Little-endian unaligned reads from a byte pointer.
pub(crate) trait ReadLittleEndian {
    /// Reads a little-endian [`u16`] at the given byte offset from this pointer.
    ///
    /// # Safety
    ///
    /// - The pointer must be valid for reads of 2 bytes at the specified offset
    unsafe fn read_u16_le_at(self, offset: usize) -> u16;

    /// Reads a little-endian [`u32`] at the given byte offset from this pointer.
    ///
    /// # Safety
    ///
    /// - The pointer must be valid for reads of 4 bytes at the specified offset
    unsafe fn read_u32_le_at(self, offset: usize) -> u32;
}

/// Little-endian unaligned writes to a byte pointer.
pub(crate) trait WriteLittleEndian {
    /// Writes `value` as a little-endian [`u16`] at the given byte offset.
    ///
    /// # Safety
    ///
    /// - The pointer must be valid for writes of 2 bytes at the specified offset
    unsafe fn write_u16_le_at(self, offset: usize, value: u16);
}

impl ReadLittleEndian for *const u8 {
    #[inline(always)]
    unsafe fn read_u16_le_at(self, offset: usize) -> u16 {
        u16::from_le((self.add(offset) as *const u16).read_unaligned())
    }

    #[inline(always)]
    unsafe fn read_u32_le_at(self, offset: usize) -> u32 {
        u32::from_le((self.add(offset) as *const u32).read_unaligned())
    }
}

impl WriteLittleEndian for *mut u8 {
    #[inline(always)]
    unsafe fn write_u16_le_at(self, offset: usize, value: u16) {
        (self.add(offset) as *mut u16).write_unaligned(value.to_le());
    }
}
