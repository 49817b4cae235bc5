//! Packet construction

use crate::error::CodecError;
use crate::traits::Pack;
use alloc::vec::Vec;
use bytes::{BufMut, Bytes, BytesMut};

/// Builds a packet by appending values in network byte order
///
/// A `Packer` owns a growable byte buffer. Values are appended with the
/// `put_*` methods (or generically via [`Packer::pack`]) in the order they
/// should appear on the wire; multi-byte integers are converted to big-endian
/// as they are written.
///
/// Two modes are supported:
///
/// - [`Packer::new`] builds variable-size packets; the caller is responsible
///   for checking the final length if it matters.
/// - [`Packer::with_target_size`] builds fixed-size packets; the finalize
///   accessors ([`Packer::bytes`], [`Packer::into_bytes`]) fail with
///   [`CodecError::SizeMismatch`] unless exactly that many bytes were packed.
///
/// The `put_*` methods return `&mut Self` so a packet can be written as one
/// chained expression:
///
/// ```
/// use wirepack_core::Packer;
///
/// let mut packer = Packer::with_target_size(6);
/// packer.put_u32(0x1122_3344).put_u16(0x5566);
/// assert_eq!(packer.bytes().unwrap(), &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Packer {
    buf: BytesMut,
    target_size: Option<usize>,
}

impl Packer {
    /// Create a packer for a variable-size packet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a packer for a packet of exactly `size` bytes
    ///
    /// Capacity for `size` bytes is reserved up front. The size is not
    /// enforced while packing, only when a finalize accessor is called.
    pub fn with_target_size(size: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(size),
            target_size: Some(size),
        }
    }

    /// Reserve capacity for at least `additional` more bytes
    ///
    /// This is a no-op if the packer was created with a target size, since
    /// the needed capacity was already reserved at construction.
    pub fn reserve(&mut self, additional: usize) {
        if self.target_size.is_none() {
            self.buf.reserve(additional);
        }
    }

    /// Number of bytes packed so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether no bytes have been packed yet
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Currently allocated capacity in bytes (advisory only)
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The configured target size, or `None` for a variable-size packet
    pub fn target_size(&self) -> Option<usize> {
        self.target_size
    }

    /// Discard all packed bytes
    ///
    /// The target size and the allocated capacity are retained, so a
    /// fixed-size packer can be reused for the next packet.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Append a single raw byte
    pub fn put_u8(&mut self, val: u8) -> &mut Self {
        self.buf.put_u8(val);
        self
    }

    /// Append a single signed byte
    pub fn put_i8(&mut self, val: i8) -> &mut Self {
        self.buf.put_i8(val);
        self
    }

    /// Append a boolean as one byte: `true` → `0x01`, `false` → `0x00`
    pub fn put_bool(&mut self, val: bool) -> &mut Self {
        self.buf.put_u8(val as u8);
        self
    }

    /// Append an unsigned 16-bit integer in big-endian order
    pub fn put_u16(&mut self, val: u16) -> &mut Self {
        self.buf.put_u16(val);
        self
    }

    /// Append a signed 16-bit integer in big-endian order
    pub fn put_i16(&mut self, val: i16) -> &mut Self {
        self.buf.put_i16(val);
        self
    }

    /// Append an unsigned 32-bit integer in big-endian order
    pub fn put_u32(&mut self, val: u32) -> &mut Self {
        self.buf.put_u32(val);
        self
    }

    /// Append a signed 32-bit integer in big-endian order
    pub fn put_i32(&mut self, val: i32) -> &mut Self {
        self.buf.put_i32(val);
        self
    }

    /// Append a byte slice verbatim
    ///
    /// This is the bulk path for byte data; it is equivalent to packing each
    /// byte individually but copies the whole slice at once.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.put_slice(bytes);
        self
    }

    /// Append any packable value
    ///
    /// Works for every type implementing [`Pack`], including fixed-size
    /// arrays of packable elements and user-defined composites.
    pub fn pack<T: Pack>(&mut self, value: &T) -> &mut Self {
        value.pack(self);
        self
    }

    /// View the packed bytes
    ///
    /// Fails with [`CodecError::SizeMismatch`] if a target size was
    /// configured and the packed length differs from it. The check does not
    /// mutate the packer, so the call may be repeated after adding or
    /// clearing data.
    pub fn bytes(&self) -> Result<&[u8], CodecError> {
        self.check_target()?;
        Ok(&self.buf)
    }

    /// Finalize into an immutable [`Bytes`] buffer
    ///
    /// Applies the same target-size validation as [`Packer::bytes`].
    pub fn into_bytes(self) -> Result<Bytes, CodecError> {
        self.check_target()?;
        Ok(self.buf.freeze())
    }

    fn check_target(&self) -> Result<(), CodecError> {
        match self.target_size {
            Some(target) if self.buf.len() != target => Err(CodecError::SizeMismatch {
                target,
                actual: self.buf.len(),
            }),
            _ => Ok(()),
        }
    }
}

// Content comparison against reference byte sequences, used mostly by
// verification code. Deliberately ignores the target-size state.

impl PartialEq<[u8]> for Packer {
    fn eq(&self, other: &[u8]) -> bool {
        self.buf[..] == *other
    }
}

impl PartialEq<&[u8]> for Packer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.buf[..] == **other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Packer {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.buf[..] == other[..]
    }
}

impl PartialEq<Vec<u8>> for Packer {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.buf[..] == other[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_packer_is_empty() {
        let packer = Packer::new();

        assert_eq!(packer.len(), 0);
        assert!(packer.is_empty());
        assert_eq!(packer.target_size(), None);
        assert_eq!(packer, []);
    }

    #[test]
    fn test_target_size_reserves_capacity() {
        let packer = Packer::with_target_size(10);

        assert_eq!(packer.len(), 0);
        assert!(packer.capacity() >= 10);
        assert_eq!(packer.target_size(), Some(10));
    }

    #[test]
    fn test_chained_puts() {
        let mut packer = Packer::new();
        packer.put_u8(b'a').put_i8(2).put_u8(0).put_u8(0x33);

        assert_eq!(packer.len(), 4);
        assert_eq!(packer, [b'a', 2, 0, 0x33]);
    }

    #[test]
    fn test_clear_retains_target_and_capacity() {
        let mut packer = Packer::with_target_size(4);
        packer.put_u32(7);
        let capacity = packer.capacity();

        packer.clear();

        assert!(packer.is_empty());
        assert_eq!(packer.target_size(), Some(4));
        assert_eq!(packer.capacity(), capacity);
    }

    #[test]
    fn test_reserve_is_noop_with_target_size() {
        let mut packer = Packer::with_target_size(8);
        let capacity = packer.capacity();

        packer.reserve(1024);

        assert_eq!(packer.capacity(), capacity);
    }

    #[test]
    fn test_reserve_grows_variable_packer() {
        let mut packer = Packer::new();
        packer.reserve(64);

        assert!(packer.capacity() >= 64);
    }

    #[test]
    fn test_bytes_checks_target_size() {
        let mut packer = Packer::with_target_size(6);
        packer.put_i32(2);

        assert_eq!(
            packer.bytes(),
            Err(CodecError::SizeMismatch {
                target: 6,
                actual: 4
            })
        );

        packer.put_u16(3);
        assert!(packer.bytes().is_ok());

        packer.put_u8(b'a');
        assert_eq!(packer.len(), 7);
        assert!(packer.len() > packer.target_size().unwrap());
        assert_eq!(
            packer.bytes(),
            Err(CodecError::SizeMismatch {
                target: 6,
                actual: 7
            })
        );
    }

    #[test]
    fn test_into_bytes_freezes() {
        let mut packer = Packer::new();
        packer.put_u16(0x0102).put_bytes(b"ok");

        let frozen = packer.into_bytes().unwrap();
        assert_eq!(frozen.as_ref(), &[0x01, 0x02, b'o', b'k']);
    }

    #[test]
    fn test_zero_target_requires_empty_packet() {
        let mut packer = Packer::with_target_size(0);
        assert!(packer.bytes().is_ok());

        packer.put_u8(1);
        assert!(packer.bytes().is_err());
    }
}
