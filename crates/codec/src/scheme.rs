//! Encoding scheme enumeration.

use serde::{Deserialize, Serialize};

/// Text encoding schemes understood by this crate.
///
/// ASCII is a strict subset of UTF-8: any octet sequence that decodes under
/// [`EncodingScheme::Ascii`] decodes to the same text under
/// [`EncodingScheme::Utf8`]. The converse does not hold, which is why the
/// scheme is always an explicit argument and never assumed from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingScheme {
    /// Single-octet encoding; octets 0x00-0x7f map one-to-one to code points.
    Ascii,
    /// Variable-width encoding; one to four octets per code point.
    Utf8,
}

impl std::fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::Utf8 => write!(f, "utf-8"),
        }
    }
}

impl std::str::FromStr for EncodingScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            _ => Err(format!(
                "unknown encoding scheme: {s}. Available: ascii, utf-8"
            )),
        }
    }
}
