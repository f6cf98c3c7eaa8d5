//! Deterministic scalar hashing for probabilistic sketches.
//!
//! Cardinality estimators, Bloom-style filters, and their relatives need
//! one guarantee from their hash layer: the same logical value must map to
//! the same 64-bit coordinate on any machine, including one that merges
//! the sketch years later. This crate is that layer. It provides a closed
//! scalar type, one canonical big-endian byte encoding, and a pluggable
//! 64-bit backend seam, and nothing else.
//!
//! The encoding widens every integer to eight bytes, so `42i8` and `42i64`
//! land on the same coordinate; floats hash their IEEE-754 bit pattern and
//! text hashes its raw UTF-8 bytes. Digests are only comparable between
//! hashers sharing the same backend and seed.

#![warn(missing_docs)]

pub mod backend;
pub mod encoding;
pub mod error;
pub mod hasher;
pub mod value;

pub use backend::{HashBackend, SipHash24, XxHash64};
pub use encoding::{encode, EncodedBytes};
pub use error::{HashError, Result};
pub use hasher::{hash_value, SketchHasher};
pub use value::ScalarValue;
