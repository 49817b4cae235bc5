//! Error types for Wirepack codec operations

/// Errors that can occur while building or parsing a packet
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Finalized packet length differs from the configured target size
    #[cfg_attr(
        feature = "std",
        error("Packet size mismatch: target {target} bytes, built {actual}")
    )]
    SizeMismatch {
        /// The target size the packer was constructed with.
        target: usize,
        /// The number of bytes actually accumulated.
        actual: usize,
    },

    /// A read would run past the end of the packet region
    #[cfg_attr(
        feature = "std",
        error("Buffer underrun: needed {requested} bytes, {remaining} remaining")
    )]
    BufferUnderrun {
        /// The number of bytes the read required.
        requested: usize,
        /// The number of bytes left before the end of the region.
        remaining: usize,
    },
}
