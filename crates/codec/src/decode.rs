//! Octet-sequence decoding.

use dirtext_octets::OctetCursor;

use crate::error::{CodecError, InvalidEncodingKind};
use crate::EncodingScheme;

/// Replacement marker emitted by [`decode_lossy`].
pub const REPLACEMENT: char = '\u{fffd}';

/// Lowest code point each sequence length may carry; anything below it fit
/// in fewer octets and is overlong.
const MIN_FOR_LEN: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

/// Decodes an octet sequence to text under `scheme`.
///
/// Success or failure is total: either every octet participates in a
/// well-formed sequence and the whole text is returned, or the first
/// malformation is reported with its byte offset and the offending octet.
/// Nothing is ever dropped or replaced; replacement exists only behind the
/// separately named [`decode_lossy`].
///
/// # Example
///
/// ```
/// use dirtext_codec::{decode, EncodingScheme};
///
/// assert_eq!(decode(&[0xe2, 0x82, 0xac], EncodingScheme::Utf8).unwrap(), "€");
/// assert!(decode(&[0xe2], EncodingScheme::Utf8).is_err());
/// assert!(decode(&[0xe2], EncodingScheme::Ascii).is_err());
/// ```
pub fn decode(octets: &[u8], scheme: EncodingScheme) -> Result<String, CodecError> {
    match scheme {
        EncodingScheme::Ascii => decode_ascii(octets),
        EncodingScheme::Utf8 => decode_utf8(octets),
    }
}

/// Decodes with explicit replacement of malformed sequences.
///
/// Silent substitution is exactly the failure mode [`decode`] exists to
/// prevent, so replacement is opt-in by name and never a flag. Each maximal
/// invalid run (the reported octet plus any continuation-form octets after
/// it) becomes one [`REPLACEMENT`].
///
/// # Example
///
/// ```
/// use dirtext_codec::{decode_lossy, EncodingScheme};
///
/// assert_eq!(decode_lossy(&[0x41, 0xe2], EncodingScheme::Utf8), "A\u{fffd}");
/// assert_eq!(decode_lossy(&[0x41, 0xe2], EncodingScheme::Ascii), "A\u{fffd}");
/// ```
pub fn decode_lossy(octets: &[u8], scheme: EncodingScheme) -> String {
    match scheme {
        EncodingScheme::Ascii => octets
            .iter()
            .map(|&octet| if octet <= 0x7f { octet as char } else { REPLACEMENT })
            .collect(),
        EncodingScheme::Utf8 => {
            let mut cursor = OctetCursor::new(octets);
            let mut out = String::with_capacity(octets.len());
            loop {
                match next_scalar(&mut cursor) {
                    Ok(Some(ch)) => out.push(ch),
                    Ok(None) => break,
                    Err(error) => {
                        out.push(REPLACEMENT);
                        resync(&mut cursor, &error);
                    }
                }
            }
            out
        }
    }
}

fn decode_ascii(octets: &[u8]) -> Result<String, CodecError> {
    for (position, &byte) in octets.iter().enumerate() {
        if byte > 0x7f {
            return Err(CodecError::InvalidEncoding {
                scheme: EncodingScheme::Ascii,
                position,
                byte,
                kind: InvalidEncodingKind::NonAsciiByte,
            });
        }
    }
    // Octets ≤ 0x7f are their own code points.
    Ok(octets.iter().map(|&octet| octet as char).collect())
}

fn decode_utf8(octets: &[u8]) -> Result<String, CodecError> {
    let mut cursor = OctetCursor::new(octets);
    let mut out = String::with_capacity(octets.len());
    while let Some(ch) = next_scalar(&mut cursor)? {
        out.push(ch);
    }
    Ok(out)
}

fn invalid(position: usize, byte: u8, kind: InvalidEncodingKind) -> CodecError {
    CodecError::InvalidEncoding {
        scheme: EncodingScheme::Utf8,
        position,
        byte,
        kind,
    }
}

/// Consumes one scalar value from the cursor, or `None` at end of input.
///
/// Truncation and overlong/range failures report the position of the lead
/// octet; a malformed continuation octet reports its own position.
fn next_scalar(cursor: &mut OctetCursor<'_>) -> Result<Option<char>, CodecError> {
    let position = cursor.pos();
    let lead = match cursor.next_octet() {
        Some(octet) => octet,
        None => return Ok(None),
    };

    let (len, mut acc) = match lead {
        0x00..=0x7f => return Ok(Some(lead as char)),
        0x80..=0xbf => {
            return Err(invalid(
                position,
                lead,
                InvalidEncodingKind::UnexpectedContinuation,
            ))
        }
        0xc0..=0xdf => (2, (lead & 0x1f) as u32),
        0xe0..=0xef => (3, (lead & 0x0f) as u32),
        0xf0..=0xf7 => (4, (lead & 0x07) as u32),
        // 0xf8-0xff led the classic 5- and 6-octet forms; no code point the
        // Unicode-restricted profile admits needs them.
        0xf8..=0xff => {
            return Err(invalid(position, lead, InvalidEncodingKind::InvalidLeadByte))
        }
    };

    for _ in 1..len {
        let at = cursor.pos();
        match cursor.next_octet() {
            None => {
                return Err(invalid(
                    position,
                    lead,
                    InvalidEncodingKind::TruncatedSequence,
                ))
            }
            Some(octet) if octet & 0xc0 == 0x80 => {
                acc = (acc << 6) | (octet & 0x3f) as u32;
            }
            Some(octet) => {
                return Err(invalid(at, octet, InvalidEncodingKind::BadContinuation))
            }
        }
    }

    if acc < MIN_FOR_LEN[len] {
        return Err(invalid(position, lead, InvalidEncodingKind::OverlongEncoding));
    }
    if (0xd800..=0xdfff).contains(&acc) {
        return Err(invalid(
            position,
            lead,
            InvalidEncodingKind::SurrogateCodePoint,
        ));
    }
    if acc > 0x10_ffff {
        return Err(invalid(
            position,
            lead,
            InvalidEncodingKind::CodePointTooLarge,
        ));
    }
    // Surrogates and out-of-range values are gone, so the conversion holds.
    char::from_u32(acc)
        .map(Some)
        .ok_or_else(|| invalid(position, lead, InvalidEncodingKind::CodePointTooLarge))
}

/// Repositions the cursor past the invalid run the error reported, so the
/// lossy path emits one replacement per run instead of one per octet.
fn resync(cursor: &mut OctetCursor<'_>, error: &CodecError) {
    let CodecError::InvalidEncoding { position, kind, .. } = error else {
        return;
    };
    match kind {
        // The offending octet is not continuation-form; it may well begin
        // the next character, so decoding resumes on it.
        InvalidEncodingKind::BadContinuation => cursor.seek(*position),
        InvalidEncodingKind::UnexpectedContinuation | InvalidEncodingKind::InvalidLeadByte => {
            cursor.seek(position + 1);
            while cursor.peek().is_some_and(|octet| octet & 0xc0 == 0x80) {
                cursor.skip(1);
            }
        }
        // Overlong, surrogate, and out-of-range sequences were consumed in
        // full; truncation consumed the rest of the input.
        _ => {}
    }
}
