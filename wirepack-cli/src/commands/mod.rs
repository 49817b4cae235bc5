pub mod pack;
pub mod unpack;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};

/// Read a whole input file, or stdin when the path is `-`
pub(crate) fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}

/// Write a whole output file, or stdout when the path is `-`
pub(crate) fn write_output(output: &str, data: &[u8]) -> Result<()> {
    if output == "-" {
        io::stdout().write_all(data)?;
        Ok(())
    } else {
        fs::write(output, data).with_context(|| format!("Failed to write output file: {}", output))
    }
}
