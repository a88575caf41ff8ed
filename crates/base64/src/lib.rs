//! Base64 transfer decoding for directory attribute values.
//!
//! Directory interchange formats base64-encode any attribute value that
//! contains non-printable octets, so binary-valued attributes usually reach
//! a mapping pipeline in transfer form rather than as raw octets. This
//! crate recovers the octets from that transfer form, strictly: decoding
//! rejects out-of-alphabet characters, misplaced padding, and impossible
//! lengths instead of guessing.
//!
//! Only the standard alphabet with `=` padding is supported; that is the
//! form directory exports produce.
//!
//! # Example
//!
//! ```
//! use dirtext_base64::{from_base64, to_base64};
//!
//! let octets = from_base64("4oCcdGVzdOKAnQ==").unwrap();
//! assert_eq!(to_base64(&octets), "4oCcdGVzdOKAnQ==");
//! ```

mod constants;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET, PAD};
pub use from_base64::from_base64;
pub use to_base64::to_base64;

use thiserror::Error;

/// Error type for base64 decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    #[error("character `{character}` at position {position} is not in the base64 alphabet")]
    InvalidCharacter { position: usize, character: char },
    #[error("misplaced padding at position {position}")]
    InvalidPadding { position: usize },
    #[error("input length {length} is not a multiple of four")]
    InvalidLength { length: usize },
}
