//! ASCII/UTF-8 codec for binary-valued directory attributes.
//!
//! A directory server hands back octet strings; an identity mapping wants
//! text. The conversion is only sound when the encoding is known, so this
//! crate makes the scheme an explicit argument, fails with byte positions
//! when octets are malformed, and never substitutes replacement characters
//! unless asked to by name. Silently coercing a bad value to an empty or
//! truncated string is the one behavior this crate refuses to have.
//!
//! Every operation is a pure function over its inputs, with no state and
//! no I/O, so callers decoding many attribute values may fan out freely.
//!
//! # Overview
//!
//! - [`decode`] / [`encode`] - convert between octets and text under a scheme
//! - [`decode_lossy`] - explicit opt-in replacement of malformed sequences
//! - [`detect_scheme`] - best-effort diagnostic guess at a scheme
//! - [`CodecError`] - position-carrying decode/encode failures
//! - [`FailureReport`] - serializable failure record for diagnostic sinks
//!
//! # Example
//!
//! ```
//! use dirtext_codec::{decode, detect_scheme, Detection, EncodingScheme};
//!
//! // A displayName pasted with curly quotes: three octets each in UTF-8.
//! let mut octets = vec![0xe2, 0x80, 0x9c];
//! octets.extend_from_slice(b"test@example.com");
//! octets.extend_from_slice(&[0xe2, 0x80, 0x9d]);
//!
//! assert_eq!(detect_scheme(&octets), Detection::Detected(EncodingScheme::Utf8));
//!
//! let text = decode(&octets, EncodingScheme::Utf8).unwrap();
//! assert_eq!(text, "\u{201c}test@example.com\u{201d}");
//!
//! // The same octets are not ASCII, and the failure says exactly why.
//! let error = decode(&octets, EncodingScheme::Ascii).unwrap_err();
//! assert_eq!(error.position(), 0);
//! ```

mod decode;
mod detect;
mod encode;
mod error;
mod report;
mod scheme;

pub use decode::{decode, decode_lossy, REPLACEMENT};
pub use detect::{detect_scheme, Detection};
pub use encode::encode;
pub use error::{CodecError, InvalidEncodingKind};
pub use report::FailureReport;
pub use scheme::EncodingScheme;
