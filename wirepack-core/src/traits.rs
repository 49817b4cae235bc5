//! Open `Pack`/`Unpack` extension traits
//!
//! These traits are the codec's extension point: implementing them for a type
//! makes it usable with [`Packer::pack`] and [`Unpacker::unpack`], including
//! inside fixed-size arrays and other composites, without any change to the
//! core. No registry and no marker supertrait is involved; any crate can
//! implement them for its own types.

use crate::error::CodecError;
use crate::packer::Packer;
use crate::unpacker::Unpacker;
use alloc::vec::Vec;

/// A value that can be appended to a [`Packer`]
pub trait Pack {
    /// Append this value's wire representation to the packer
    fn pack(&self, packer: &mut Packer);
}

/// A value that can be extracted from an [`Unpacker`]
///
/// Implementations must either fully consume their wire representation or
/// fail without advancing the cursor. The primitive impls get this from the
/// unpacker's bounds checks; composite impls can record
/// [`Unpacker::position`] and call [`Unpacker::rewind_to`] on failure, as the
/// array impl does.
pub trait Unpack: Sized {
    /// Extract a value of this type from the unpacker
    fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError>;
}

impl Pack for u8 {
    fn pack(&self, packer: &mut Packer) {
        packer.put_u8(*self);
    }
}

impl Pack for i8 {
    fn pack(&self, packer: &mut Packer) {
        packer.put_i8(*self);
    }
}

impl Pack for bool {
    fn pack(&self, packer: &mut Packer) {
        packer.put_bool(*self);
    }
}

impl Pack for u16 {
    fn pack(&self, packer: &mut Packer) {
        packer.put_u16(*self);
    }
}

impl Pack for i16 {
    fn pack(&self, packer: &mut Packer) {
        packer.put_i16(*self);
    }
}

impl Pack for u32 {
    fn pack(&self, packer: &mut Packer) {
        packer.put_u32(*self);
    }
}

impl Pack for i32 {
    fn pack(&self, packer: &mut Packer) {
        packer.put_i32(*self);
    }
}

// No Pack/Unpack for 64-bit integers: there is no established network byte
// order convention for 8-byte values, so wide integers must be split into
// explicit 32-bit halves by the caller.

impl Unpack for u8 {
    fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        unpacker.get_u8()
    }
}

impl Unpack for i8 {
    fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        unpacker.get_i8()
    }
}

impl Unpack for bool {
    fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        unpacker.get_bool()
    }
}

impl Unpack for u16 {
    fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        unpacker.get_u16()
    }
}

impl Unpack for i16 {
    fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        unpacker.get_i16()
    }
}

impl Unpack for u32 {
    fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        unpacker.get_u32()
    }
}

impl Unpack for i32 {
    fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        unpacker.get_i32()
    }
}

impl<T: Pack, const N: usize> Pack for [T; N] {
    fn pack(&self, packer: &mut Packer) {
        for item in self {
            item.pack(packer);
        }
    }
}

impl<T: Unpack, const N: usize> Unpack for [T; N] {
    /// Extract `N` elements in order
    ///
    /// Transactional: if any element fails, the cursor is rewound to where
    /// it stood before the first element and the error is returned.
    fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        let mark = unpacker.position();
        let mut items = Vec::with_capacity(N);

        for _ in 0..N {
            match T::unpack(unpacker) {
                Ok(item) => items.push(item),
                Err(err) => {
                    unpacker.rewind_to(mark);
                    return Err(err);
                }
            }
        }

        match items.try_into() {
            Ok(array) => Ok(array),
            // items holds exactly N elements at this point
            Err(_) => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_array_pack() {
        let mut packer = Packer::new();
        packer.pack(&[1u8, 2, 3]);

        assert_eq!(packer.len(), 3);
        assert_eq!(packer, [1, 2, 3]);
    }

    #[test]
    fn test_multibyte_array_pack() {
        let mut packer = Packer::new();
        packer.pack(&[1i16, -2]);

        assert_eq!(packer.len(), 4);
        assert_eq!(packer, [0x00, 0x01, 0xFF, 0xFE]);
    }

    #[test]
    fn test_array_unpack() {
        let data = [1u8, 2, 3, 4];
        let mut unpacker = Unpacker::new(&data);

        let values: [u16; 2] = unpacker.unpack().unwrap();
        assert_eq!(values, [0x0102, 0x0304]);
        assert_eq!(unpacker.remaining(), 0);
    }

    #[test]
    fn test_array_unpack_rewinds_on_failure() {
        // 3 bytes: enough for one u16, not two
        let data = [1u8, 2, 3];
        let mut unpacker = Unpacker::new(&data);

        let result: Result<[u16; 2], _> = unpacker.unpack();
        assert_eq!(
            result,
            Err(CodecError::BufferUnderrun {
                requested: 2,
                remaining: 1
            })
        );
        // The partial element read was undone as well
        assert_eq!(unpacker.remaining(), 3);
    }

    #[test]
    fn test_nested_array_pack() {
        let mut packer = Packer::new();
        packer.pack(&[[1u16, 2], [3, 4]]);

        assert_eq!(packer, [0, 1, 0, 2, 0, 3, 0, 4]);
    }

    #[derive(Debug, PartialEq)]
    struct Reading {
        tag: u8,
        value: u16,
    }

    impl Pack for Reading {
        fn pack(&self, packer: &mut Packer) {
            packer.put_u8(self.tag).put_u16(self.value);
        }
    }

    impl Unpack for Reading {
        fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
            Ok(Self {
                tag: unpacker.get_u8()?,
                value: unpacker.get_u16()?,
            })
        }
    }

    #[test]
    fn test_user_type_round_trip() {
        let reading = Reading { tag: 7, value: 0x1234 };

        let mut packer = Packer::new();
        packer.pack(&reading);
        assert_eq!(packer, [7, 0x12, 0x34]);

        let wire = packer.into_bytes().unwrap();
        let mut unpacker = Unpacker::new(&wire);
        assert_eq!(unpacker.unpack::<Reading>().unwrap(), reading);
    }

    #[test]
    fn test_user_type_array_round_trip() {
        // Arrays of user types go through the same generic impls
        let readings = [
            Reading { tag: 1, value: 10 },
            Reading { tag: 2, value: 20 },
        ];

        let mut packer = Packer::new();
        packer.pack(&readings);
        assert_eq!(packer.len(), 6);

        let wire = packer.into_bytes().unwrap();
        let mut unpacker = Unpacker::new(&wire);
        let decoded: [Reading; 2] = unpacker.unpack().unwrap();
        assert_eq!(decoded, readings);
    }
}
