//! Cursor-based packet parsing

use crate::error::CodecError;
use crate::traits::Unpack;

/// Parses a packet by reading values in the order they were packed
///
/// An `Unpacker` borrows an immutable byte region and walks a cursor over it.
/// The `get_*` methods extract primitives, converting multi-byte integers
/// from big-endian to host order; [`Unpacker::unpack`] extracts any type
/// implementing [`Unpack`].
///
/// Every read is bounds-checked before the cursor moves: a read past the end
/// of the region fails with [`CodecError::BufferUnderrun`] and leaves both
/// the cursor and the caller's state untouched.
///
/// The region may be any contiguous byte container:
///
/// ```
/// use wirepack_core::Unpacker;
///
/// let wire = vec![0x12u8, 0x34, 0x01];
/// let mut unpacker = Unpacker::new(&wire);
/// assert_eq!(unpacker.get_u16().unwrap(), 0x1234);
/// assert!(unpacker.get_bool().unwrap());
/// assert_eq!(unpacker.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Unpacker<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Unpacker<'a> {
    /// Create an unpacker over a borrowed byte region
    ///
    /// Accepts anything exposing a contiguous byte view (slices, fixed-size
    /// arrays, `Vec<u8>`, `bytes::Bytes`, ...). The region is borrowed, not
    /// copied, and must outlive the unpacker.
    pub fn new<B: AsRef<[u8]> + ?Sized>(region: &'a B) -> Self {
        Self {
            data: region.as_ref(),
            pos: 0,
        }
    }

    /// Total length of the wrapped region in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the wrapped region is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes left to read
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Current cursor offset from the start of the region
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind the cursor to the start of the region
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Restore the cursor to a mark previously returned by
    /// [`Unpacker::position`]
    ///
    /// Lets composite [`Unpack`] implementations make their decode
    /// transactional: record the position first, rewind if any field fails.
    pub fn rewind_to(&mut self, mark: usize) {
        self.pos = mark.min(self.data.len());
    }

    /// Read `n` bytes as a slice of the underlying region
    ///
    /// The returned slice borrows the region itself, not the unpacker, so it
    /// stays valid while further values are extracted.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::BufferUnderrun {
                requested: n,
                remaining,
            });
        }

        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..self.pos])
    }

    /// Read one raw byte
    pub fn get_u8(&mut self) -> Result<u8, CodecError> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    /// Read one signed byte
    pub fn get_i8(&mut self) -> Result<i8, CodecError> {
        Ok(self.get_u8()? as i8)
    }

    /// Read one byte as a boolean: any nonzero value is `true`
    pub fn get_bool(&mut self) -> Result<bool, CodecError> {
        Ok(self.get_u8()? != 0)
    }

    /// Read an unsigned 16-bit integer from big-endian order
    pub fn get_u16(&mut self) -> Result<u16, CodecError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Read a signed 16-bit integer from big-endian order
    pub fn get_i16(&mut self) -> Result<i16, CodecError> {
        let bytes = self.take(2)?;
        Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Read an unsigned 32-bit integer from big-endian order
    pub fn get_u32(&mut self) -> Result<u32, CodecError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a signed 32-bit integer from big-endian order
    pub fn get_i32(&mut self) -> Result<i32, CodecError> {
        let bytes = self.take(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read any unpackable value
    ///
    /// Works for every type implementing [`Unpack`], including fixed-size
    /// arrays of unpackable elements and user-defined composites.
    pub fn unpack<T: Unpack>(&mut self) -> Result<T, CodecError> {
        T::unpack(self)
    }
}
