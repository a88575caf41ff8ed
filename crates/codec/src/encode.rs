//! Text encoding.

use crate::error::CodecError;
use crate::EncodingScheme;

/// Encodes text as an octet sequence under `scheme`.
///
/// ASCII represents only code points ≤ 0x7f; the first character outside
/// that range fails with [`CodecError::UnrepresentableCharacter`] carrying
/// the character index. UTF-8 represents all of Unicode, so the UTF-8 arm
/// never fails: Rust strings already hold minimal-form UTF-8 octets, and
/// those octets are returned as-is.
///
/// # Example
///
/// ```
/// use dirtext_codec::{encode, EncodingScheme};
///
/// assert_eq!(encode("ok", EncodingScheme::Ascii).unwrap(), b"ok");
/// assert_eq!(encode("€", EncodingScheme::Utf8).unwrap(), vec![0xe2, 0x82, 0xac]);
/// assert!(encode("€", EncodingScheme::Ascii).is_err());
/// ```
pub fn encode(text: &str, scheme: EncodingScheme) -> Result<Vec<u8>, CodecError> {
    match scheme {
        EncodingScheme::Ascii => {
            for (position, character) in text.chars().enumerate() {
                if character as u32 > 0x7f {
                    return Err(CodecError::UnrepresentableCharacter {
                        scheme: EncodingScheme::Ascii,
                        position,
                        character,
                    });
                }
            }
            Ok(text.bytes().collect())
        }
        EncodingScheme::Utf8 => Ok(text.as_bytes().to_vec()),
    }
}
