//! Basic pack/unpack example: a fixed-size telemetry packet

use wirepack_core::{CodecError, Pack, Packer, Unpack, Unpacker};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Reading {
    channel: u8,
    millivolts: i16,
}

impl Pack for Reading {
    fn pack(&self, packer: &mut Packer) {
        packer.put_u8(self.channel).put_i16(self.millivolts);
    }
}

impl Unpack for Reading {
    fn unpack(unpacker: &mut Unpacker<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            channel: unpacker.get_u8()?,
            millivolts: unpacker.get_i16()?,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Wirepack Packet Round-Trip Example\n");

    let readings = [
        Reading { channel: 1, millivolts: 3300 },
        Reading { channel: 2, millivolts: -120 },
        Reading { channel: 3, millivolts: 5000 },
    ];

    // Header byte + sequence number + 3 readings of 3 bytes each
    let mut packer = Packer::with_target_size(1 + 4 + 9);
    packer
        .put_u8(readings.len() as u8)
        .put_u32(42)
        .pack(&readings);

    let wire = packer.into_bytes()?;
    println!("Packed {} bytes: {:02x?}", wire.len(), wire.as_ref());

    // The receiving side issues the same calls in the same order
    let mut unpacker = Unpacker::new(&wire);
    let count = unpacker.get_u8()?;
    let sequence = unpacker.get_u32()?;
    let decoded: [Reading; 3] = unpacker.unpack()?;

    println!("Unpacked packet #{} with {} readings:", sequence, count);
    for reading in &decoded {
        println!("  channel {}: {} mV", reading.channel, reading.millivolts);
    }

    assert_eq!(decoded, readings);
    assert_eq!(unpacker.remaining(), 0);
    println!("\nRound trip OK");

    Ok(())
}
