//! Fuzzing placeholder for the wirepack-core unpacker
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_unpack

use wirepack_core::Unpacker;

pub fn fuzz_unpack(data: &[u8]) {
    // Walk the region with every primitive reader in turn - should never
    // panic, only ever return BufferUnderrun near the end
    let mut unpacker = Unpacker::new(data);

    loop {
        let before = unpacker.position();
        let _ = unpacker.get_u32();
        let _ = unpacker.get_i16();
        let _ = unpacker.get_bool();
        let _ = unpacker.unpack::<[u16; 2]>();
        let _ = unpacker.get_u8();
        if unpacker.position() == before {
            break;
        }
    }
}

pub fn fuzz_interleaved(data: &[u8]) {
    // Interleave resets and failed oversized reads with normal reads
    let mut unpacker = Unpacker::new(data);

    let _ = unpacker.take(data.len() + 1);
    let _ = unpacker.get_u16();
    unpacker.reset();
    let _ = unpacker.unpack::<[u8; 8]>();
    let _ = unpacker.take(unpacker.remaining());
}
