#![forbid(unsafe_code)]
//! Canonical scalar-to-bytes encoding shared by every hash backend.
//!
//! Each numeric variant widens to one big-endian 8-byte form, so the same
//! logical value encodes identically at every declared width; text
//! contributes its raw UTF-8 bytes with no framing. Byte order is fixed
//! big-endian to keep digests reproducible across platforms.

use crate::value::ScalarValue;

/// Canonical byte form of a [`ScalarValue`], borrowed where possible.
///
/// Produced per call, handed to the backend, then dropped. Numeric
/// encodings live on the stack; text encodings borrow the value's bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodedBytes<'a> {
    /// The widened 8-byte big-endian form shared by every numeric variant.
    Fixed8([u8; 8]),
    /// Raw UTF-8 bytes of a text value, no length prefix, no terminator.
    Text(&'a [u8]),
}

impl EncodedBytes<'_> {
    /// Number of bytes the backend will consume.
    pub fn len(&self) -> usize {
        self.as_ref().len()
    }

    /// True only for empty text; numeric encodings are always 8 bytes.
    pub fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }
}

impl AsRef<[u8]> for EncodedBytes<'_> {
    fn as_ref(&self) -> &[u8] {
        match self {
            EncodedBytes::Fixed8(bytes) => bytes,
            EncodedBytes::Text(bytes) => bytes,
        }
    }
}

/// Encodes a scalar into its canonical byte sequence.
///
/// Total and deterministic: equal values yield byte-identical output
/// wherever and whenever they are encoded. Integers narrower than 64 bits
/// sign-extend before encoding, so `Int8(42)` and `Int64(42)` are
/// indistinguishable to a backend. Floats encode their IEEE-754 bit
/// pattern verbatim, which keeps distinct NaN payloads distinct.
pub fn encode<'a>(value: &ScalarValue<'a>) -> EncodedBytes<'a> {
    match *value {
        ScalarValue::Float64(v) => EncodedBytes::Fixed8(v.to_bits().to_be_bytes()),
        ScalarValue::Int64(v) => EncodedBytes::Fixed8(v.to_be_bytes()),
        ScalarValue::Int32(v) => EncodedBytes::Fixed8(i64::from(v).to_be_bytes()),
        ScalarValue::Int16(v) => EncodedBytes::Fixed8(i64::from(v).to_be_bytes()),
        ScalarValue::Int8(v) => EncodedBytes::Fixed8(i64::from(v).to_be_bytes()),
        ScalarValue::Text(v) => EncodedBytes::Text(v.as_bytes()),
    }
}
