use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;
use wirepack_core::Packer;

use crate::commands::{read_input, write_output};
use crate::layout::{self, packet_size};

pub fn execute(
    layout_spec: &str,
    input: &str,
    output: &str,
    hex_out: bool,
    target_size: Option<usize>,
) -> Result<()> {
    info!("Packing values from {} to {}", input, output);

    let fields = layout::parse_layout(layout_spec)?;

    // Read input JSON
    let content = String::from_utf8(read_input(input)?)
        .with_context(|| "Input is not valid UTF-8")?;
    let values: Vec<Value> =
        serde_json::from_str(&content).with_context(|| "Failed to parse JSON input")?;

    info!("Found {} values to pack", values.len());

    let mut packer = match target_size {
        Some(size) => Packer::with_target_size(size),
        None => {
            let mut packer = Packer::new();
            packer.reserve(packet_size(&fields));
            packer
        }
    };

    layout::pack_values(&fields, &values, &mut packer)?;

    let bytes = packer
        .bytes()
        .with_context(|| "Packet failed target-size validation")?;

    info!(
        "Successfully packed {} values ({} bytes total)",
        values.len(),
        bytes.len()
    );

    if hex_out {
        let mut line = hex::encode(bytes);
        line.push('\n');
        write_output(output, line.as_bytes())
    } else {
        write_output(output, bytes)
    }
}
