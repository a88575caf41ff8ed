//! Property coverage: round-trip laws, the ASCII-subset law, and agreement
//! with the standard library's UTF-8 validator over arbitrary octets.

use dirtext_codec::{decode, detect_scheme, encode, Detection, EncodingScheme};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ascii_text_round_trips(text in "[\\x00-\\x7f]{0,64}") {
        let octets = encode(&text, EncodingScheme::Ascii).unwrap();
        prop_assert_eq!(octets.as_slice(), text.as_bytes());
        prop_assert_eq!(decode(&octets, EncodingScheme::Ascii).unwrap(), text);
    }

    #[test]
    fn unicode_text_round_trips(text in any::<String>()) {
        let octets = encode(&text, EncodingScheme::Utf8).unwrap();
        prop_assert_eq!(decode(&octets, EncodingScheme::Utf8).unwrap(), text);
    }

    #[test]
    fn reencoding_decoded_octets_is_identity(octets in proptest::collection::vec(any::<u8>(), 0..128)) {
        if let Ok(text) = decode(&octets, EncodingScheme::Utf8) {
            prop_assert_eq!(encode(&text, EncodingScheme::Utf8).unwrap(), octets);
        }
    }

    #[test]
    fn ascii_subset_law(octets in proptest::collection::vec(0u8..=0x7f, 0..128)) {
        let ascii = decode(&octets, EncodingScheme::Ascii).unwrap();
        let utf8 = decode(&octets, EncodingScheme::Utf8).unwrap();
        prop_assert_eq!(&ascii, &utf8);
        prop_assert_eq!(detect_scheme(&octets), Detection::Detected(EncodingScheme::Ascii));
    }

    #[test]
    fn agrees_with_std_utf8_validator(octets in proptest::collection::vec(any::<u8>(), 0..128)) {
        match (decode(&octets, EncodingScheme::Utf8), std::str::from_utf8(&octets)) {
            (Ok(ours), Ok(theirs)) => prop_assert_eq!(ours, theirs),
            (Err(error), Err(theirs)) => {
                // The reported offset lands inside the sequence std stopped
                // at: std points at the lead octet, this crate may point at
                // the continuation octet that broke the sequence.
                let position = error.position();
                prop_assert!(position >= theirs.valid_up_to());
                prop_assert!(position - theirs.valid_up_to() < 4);
            }
            (ours, theirs) => prop_assert!(
                false,
                "validators disagree on {:02x?}: ours={:?} std={:?}",
                octets, ours, theirs
            ),
        }
    }

    #[test]
    fn ascii_decode_agrees_with_utf8_decode_on_any_input(octets in proptest::collection::vec(any::<u8>(), 0..128)) {
        // Anything ASCII-decodable is UTF-8-decodable with the same text;
        // anything with a high octet must fail ASCII decode.
        match decode(&octets, EncodingScheme::Ascii) {
            Ok(text) => prop_assert_eq!(decode(&octets, EncodingScheme::Utf8).unwrap(), text),
            Err(_) => prop_assert!(octets.iter().any(|&octet| octet > 0x7f)),
        }
    }
}
