use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::commands::{read_input, write_output};
use crate::layout;

/// One decoded field with its layout type, for `--annotate` output
#[derive(Serialize)]
struct FieldValue {
    field: String,
    value: Value,
}

pub fn execute(
    layout_spec: &str,
    input: &str,
    output: Option<&str>,
    hex_in: bool,
    annotate: bool,
) -> Result<()> {
    info!("Unpacking packet from {}", input);

    let fields = layout::parse_layout(layout_spec)?;

    let raw = read_input(input)?;
    let data = if hex_in {
        let text = String::from_utf8(raw).with_context(|| "Hex input is not valid UTF-8")?;
        hex::decode(text.trim()).with_context(|| "Failed to decode hex input")?
    } else {
        raw
    };

    let expected = layout::packet_size(&fields);
    if data.len() > expected {
        warn!(
            "Input is {} bytes but layout describes {}; trailing bytes ignored",
            data.len(),
            expected
        );
    }

    let values = layout::unpack_values(&fields, &data)?;

    info!("Unpacked {} fields", values.len());

    let json = if annotate {
        let annotated: Vec<FieldValue> = fields
            .iter()
            .zip(&values)
            .map(|(field, value)| FieldValue {
                field: field.name(),
                value: value.clone(),
            })
            .collect();
        serde_json::to_string_pretty(&annotated)?
    } else {
        serde_json::to_string_pretty(&values)?
    };

    match output {
        Some(path) => {
            let mut text = json;
            text.push('\n');
            write_output(path, text.as_bytes())
        }
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}
