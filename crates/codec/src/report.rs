//! Structured failure reports for diagnostic sinks.

use serde::Serialize;

use dirtext_octets::hex_window;

use crate::error::{CodecError, InvalidEncodingKind};
use crate::EncodingScheme;

/// Octets shown on each side of the failure offset in `context`.
const CONTEXT_RADIUS: usize = 4;

/// A serializable record of one failed codec operation.
///
/// The codec itself never logs; callers hand reports to whatever sink they
/// run and decide there whether to abort the import, skip the value, or
/// retry with [`crate::decode_lossy`]. Built via [`CodecError::report`].
///
/// # Example
///
/// ```
/// use dirtext_codec::{decode, EncodingScheme};
///
/// let octets = [0x74, 0x65, 0xe2, 0x73, 0x74];
/// let error = decode(&octets, EncodingScheme::Ascii).unwrap_err();
/// let report = error.report(&octets);
/// assert_eq!(report.position, 2);
/// assert_eq!(report.context, "74 65 [e2] 73 74");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    /// The scheme the failed operation was asked to use.
    pub scheme: EncodingScheme,
    /// Byte offset for decode failures, character index for encode failures.
    pub position: usize,
    /// The offending octet (decode failures only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte: Option<u8>,
    /// Classification of the malformation (decode failures only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<InvalidEncodingKind>,
    /// The unrepresentable character (encode failures only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<char>,
    /// Hex window around the failure offset, offending octet bracketed.
    /// Empty when the input octets are not available.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub context: String,
    /// Human-readable summary; same text as the error's `Display`.
    pub message: String,
}

impl FailureReport {
    /// Builds a report from an error and the octets the operation saw.
    ///
    /// For encode failures there are no input octets; pass an empty slice
    /// and the context window stays empty.
    pub fn new(error: &CodecError, octets: &[u8]) -> Self {
        let message = error.to_string();
        match *error {
            CodecError::InvalidEncoding {
                scheme,
                position,
                byte,
                kind,
            } => Self {
                scheme,
                position,
                byte: Some(byte),
                kind: Some(kind),
                character: None,
                context: hex_window(octets, position, CONTEXT_RADIUS),
                message,
            },
            CodecError::UnrepresentableCharacter {
                scheme,
                position,
                character,
            } => Self {
                scheme,
                position,
                byte: None,
                kind: None,
                character: Some(character),
                context: String::new(),
                message,
            },
        }
    }
}
