//! Layout strings: a CLI-level description of a packet's field sequence
//!
//! The core codec is schema-free; both ends of a connection agree on the
//! pack/unpack call sequence in code. On the command line that sequence is
//! spelled as a comma-separated layout string instead, e.g.
//! `u16,u32,bool,bytes:4`.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use wirepack_core::{Packer, Unpacker};

/// A single field in a packet layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Unsigned byte
    U8,
    /// Signed byte
    I8,
    /// Unsigned 16-bit integer, big-endian
    U16,
    /// Signed 16-bit integer, big-endian
    I16,
    /// Unsigned 32-bit integer, big-endian
    U32,
    /// Signed 32-bit integer, big-endian
    I32,
    /// One-byte boolean
    Bool,
    /// Raw byte run of fixed length
    Bytes(usize),
}

impl Field {
    /// Wire width of this field in bytes
    pub fn width(&self) -> usize {
        match self {
            Field::U8 | Field::I8 | Field::Bool => 1,
            Field::U16 | Field::I16 => 2,
            Field::U32 | Field::I32 => 4,
            Field::Bytes(n) => *n,
        }
    }

    /// The layout-string name of this field
    pub fn name(&self) -> String {
        match self {
            Field::U8 => "u8".into(),
            Field::I8 => "i8".into(),
            Field::U16 => "u16".into(),
            Field::I16 => "i16".into(),
            Field::U32 => "u32".into(),
            Field::I32 => "i32".into(),
            Field::Bool => "bool".into(),
            Field::Bytes(n) => format!("bytes:{}", n),
        }
    }
}

/// Parse a comma-separated layout string into fields
pub fn parse_layout(spec: &str) -> Result<Vec<Field>> {
    let mut fields = Vec::new();

    for token in spec.split(',') {
        let token = token.trim();
        let field = match token {
            "u8" => Field::U8,
            "i8" => Field::I8,
            "u16" => Field::U16,
            "i16" => Field::I16,
            "u32" => Field::U32,
            "i32" => Field::I32,
            "bool" => Field::Bool,
            _ => match token.strip_prefix("bytes:") {
                Some(len) => {
                    let len: usize = len
                        .parse()
                        .with_context(|| format!("Invalid bytes length in field '{}'", token))?;
                    Field::Bytes(len)
                }
                None => bail!(
                    "Unknown layout field '{}' (expected u8, i8, u16, i16, u32, i32, bool or bytes:N)",
                    token
                ),
            },
        };
        fields.push(field);
    }

    if fields.is_empty() {
        bail!("Layout must contain at least one field");
    }

    Ok(fields)
}

/// Total wire size of a layout in bytes
pub fn packet_size(fields: &[Field]) -> usize {
    fields.iter().map(Field::width).sum()
}

fn as_integer(value: &Value, field: &Field, index: usize) -> Result<i64> {
    value
        .as_i64()
        .with_context(|| format!("Value {} is not an integer (field {})", index, field.name()))
}

fn checked<T>(result: std::result::Result<T, std::num::TryFromIntError>, field: &Field, index: usize) -> Result<T> {
    result.map_err(|_| {
        anyhow::anyhow!(
            "Value {} is out of range for field {}",
            index,
            field.name()
        )
    })
}

/// Pack a JSON value array into a packer according to a layout
///
/// Integer fields take JSON numbers (range-checked), `bool` takes a JSON
/// boolean, `bytes:N` takes a hex string of exactly N bytes.
pub fn pack_values(fields: &[Field], values: &[Value], packer: &mut Packer) -> Result<()> {
    if fields.len() != values.len() {
        bail!(
            "Layout has {} fields but input has {} values",
            fields.len(),
            values.len()
        );
    }

    for (index, (field, value)) in fields.iter().zip(values).enumerate() {
        match field {
            Field::U8 => {
                let v = as_integer(value, field, index)?;
                packer.put_u8(checked(u8::try_from(v), field, index)?);
            }
            Field::I8 => {
                let v = as_integer(value, field, index)?;
                packer.put_i8(checked(i8::try_from(v), field, index)?);
            }
            Field::U16 => {
                let v = as_integer(value, field, index)?;
                packer.put_u16(checked(u16::try_from(v), field, index)?);
            }
            Field::I16 => {
                let v = as_integer(value, field, index)?;
                packer.put_i16(checked(i16::try_from(v), field, index)?);
            }
            Field::U32 => {
                let v = as_integer(value, field, index)?;
                packer.put_u32(checked(u32::try_from(v), field, index)?);
            }
            Field::I32 => {
                let v = as_integer(value, field, index)?;
                packer.put_i32(checked(i32::try_from(v), field, index)?);
            }
            Field::Bool => {
                let v = value
                    .as_bool()
                    .with_context(|| format!("Value {} is not a boolean", index))?;
                packer.put_bool(v);
            }
            Field::Bytes(len) => {
                let text = value
                    .as_str()
                    .with_context(|| format!("Value {} is not a hex string", index))?;
                let bytes = hex::decode(text)
                    .with_context(|| format!("Value {} is not valid hex", index))?;
                if bytes.len() != *len {
                    bail!(
                        "Value {} has {} bytes, field {} expects {}",
                        index,
                        bytes.len(),
                        field.name(),
                        len
                    );
                }
                packer.put_bytes(&bytes);
            }
        }
    }

    Ok(())
}

/// Unpack a byte region into JSON values according to a layout
pub fn unpack_values(fields: &[Field], data: &[u8]) -> Result<Vec<Value>> {
    let mut unpacker = Unpacker::new(data);
    let mut values = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let context = || format!("Failed to read field {} ({})", index, field.name());
        let value = match field {
            Field::U8 => Value::from(unpacker.get_u8().with_context(context)?),
            Field::I8 => Value::from(unpacker.get_i8().with_context(context)?),
            Field::U16 => Value::from(unpacker.get_u16().with_context(context)?),
            Field::I16 => Value::from(unpacker.get_i16().with_context(context)?),
            Field::U32 => Value::from(unpacker.get_u32().with_context(context)?),
            Field::I32 => Value::from(unpacker.get_i32().with_context(context)?),
            Field::Bool => Value::from(unpacker.get_bool().with_context(context)?),
            Field::Bytes(len) => {
                Value::from(hex::encode(unpacker.take(*len).with_context(context)?))
            }
        };
        values.push(value);
    }

    Ok(values)
}
