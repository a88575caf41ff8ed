//! Best-effort scheme detection.

use crate::{decode, EncodingScheme};

/// Outcome of [`detect_scheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// The octets decode under the reported scheme.
    Detected(EncodingScheme),
    /// The octets decode under no supported scheme. A normal outcome, not
    /// a fault: it means the value was produced under something this crate
    /// does not speak, and the caller must find out what.
    Ambiguous,
}

impl Detection {
    /// The detected scheme, if any.
    pub fn scheme(self) -> Option<EncodingScheme> {
        match self {
            Self::Detected(scheme) => Some(scheme),
            Self::Ambiguous => None,
        }
    }
}

/// Guesses which scheme an octet sequence was produced under.
///
/// A diagnostic aid only; encodings must be known, not inferred from the
/// data. ASCII is tried first and wins whenever it fits: everything valid
/// under ASCII is valid under UTF-8 with identical text, and the narrower
/// scheme makes the stronger statement. Octets valid under neither scheme
/// report [`Detection::Ambiguous`]; no third scheme is ever guessed.
///
/// # Example
///
/// ```
/// use dirtext_codec::{detect_scheme, Detection, EncodingScheme};
///
/// assert_eq!(
///     detect_scheme(b"ssh-ed25519 AAAA"),
///     Detection::Detected(EncodingScheme::Ascii)
/// );
/// assert_eq!(
///     detect_scheme(&[0xe2, 0x80, 0x9c]),
///     Detection::Detected(EncodingScheme::Utf8)
/// );
/// assert_eq!(detect_scheme(&[0xff]), Detection::Ambiguous);
/// ```
pub fn detect_scheme(octets: &[u8]) -> Detection {
    if decode(octets, EncodingScheme::Ascii).is_ok() {
        return Detection::Detected(EncodingScheme::Ascii);
    }
    if decode(octets, EncodingScheme::Utf8).is_ok() {
        return Detection::Detected(EncodingScheme::Utf8);
    }
    Detection::Ambiguous
}
