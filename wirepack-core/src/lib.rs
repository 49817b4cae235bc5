//! # Wirepack Core
//!
//! A type-directed codec for building and parsing fixed-layout network packets
//! in network byte order, without pointer casts or hand-rolled shifting.
//!
//! ## Modules
//!
//! - `error`: Codec error kinds
//! - `packer`: Packet construction into an owned, growable buffer
//! - `unpacker`: Cursor-based parsing over a borrowed byte region
//! - `traits`: Open `Pack`/`Unpack` extension traits
//!
//! The library carries no schema: both sides agree out of band on the ordered
//! sequence of pack/unpack calls, and the byte layout follows from that
//! sequence alone.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod packer;
pub mod traits;
pub mod unpacker;

// Re-export commonly used types
pub use error::CodecError;
pub use packer::Packer;
pub use traits::{Pack, Unpack};
pub use unpacker::Unpacker;

/// Result type alias for Wirepack operations
pub type Result<T> = core::result::Result<T, CodecError>;
