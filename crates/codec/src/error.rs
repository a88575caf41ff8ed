//! Codec error types.

use serde::Serialize;
use thiserror::Error;

use crate::report::FailureReport;
use crate::EncodingScheme;

/// Classification of a malformed octet sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidEncodingKind {
    /// An octet ≥ 0x80 in ASCII input.
    NonAsciiByte,
    /// A continuation-form octet (`10xxxxxx`) with no lead octet before it.
    UnexpectedContinuation,
    /// A multi-octet sequence cut off by the end of the input.
    TruncatedSequence,
    /// An octet inside a multi-octet sequence that is not continuation-form.
    BadContinuation,
    /// A code point encoded with more octets than it needs.
    OverlongEncoding,
    /// A code point in the UTF-16 surrogate range 0xd800-0xdfff.
    SurrogateCodePoint,
    /// A code point above 0x10ffff.
    CodePointTooLarge,
    /// An octet that begins no sequence under the Unicode-restricted
    /// profile (0xf8-0xff; the classic 5- and 6-octet lead forms).
    InvalidLeadByte,
}

impl std::fmt::Display for InvalidEncodingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::NonAsciiByte => "octet outside the ASCII range",
            Self::UnexpectedContinuation => "continuation octet with no lead octet",
            Self::TruncatedSequence => "truncated multi-octet sequence",
            Self::BadContinuation => "malformed continuation octet",
            Self::OverlongEncoding => "overlong encoding",
            Self::SurrogateCodePoint => "surrogate code point",
            Self::CodePointTooLarge => "code point above U+10FFFF",
            Self::InvalidLeadByte => "invalid lead octet",
        };
        f.write_str(text)
    }
}

/// Error type for decode and encode operations.
///
/// Failures are never masked or recovered internally: the caller decides
/// whether to abort, skip the value, or retry with [`crate::decode_lossy`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The octet sequence is not well-formed under the requested scheme.
    #[error("invalid {scheme} at byte {position}: {kind} (octet 0x{byte:02x})")]
    InvalidEncoding {
        scheme: EncodingScheme,
        position: usize,
        byte: u8,
        kind: InvalidEncodingKind,
    },
    /// The requested scheme cannot represent a character of the input text.
    #[error(
        "cannot represent `{character}` (U+{code_point:04X}) at character {position} in {scheme}",
        code_point = code_point_of(.character)
    )]
    UnrepresentableCharacter {
        scheme: EncodingScheme,
        position: usize,
        character: char,
    },
}

fn code_point_of(character: &char) -> u32 {
    *character as u32
}

impl CodecError {
    /// Byte offset (decode failures) or character index (encode failures)
    /// of the offending unit.
    pub fn position(&self) -> usize {
        match self {
            Self::InvalidEncoding { position, .. } => *position,
            Self::UnrepresentableCharacter { position, .. } => *position,
        }
    }

    /// The scheme the failed operation was asked to use.
    pub fn scheme(&self) -> EncodingScheme {
        match self {
            Self::InvalidEncoding { scheme, .. } => *scheme,
            Self::UnrepresentableCharacter { scheme, .. } => *scheme,
        }
    }

    /// Builds a structured [`FailureReport`] for a diagnostic sink.
    ///
    /// `octets` should be the input that was handed to [`crate::decode`];
    /// it is only used to render the hex context window, so encode
    /// failures may pass an empty slice.
    pub fn report(&self, octets: &[u8]) -> FailureReport {
        FailureReport::new(self, octets)
    }
}
