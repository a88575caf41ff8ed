//! Octet-level utilities for dirtext.
//!
//! The codec layer works on raw octet sequences pulled out of binary-valued
//! directory attributes. This crate holds the low-level pieces it builds on:
//! a position-tracked cursor for consuming octets one at a time, and hex
//! formatting for failure diagnostics.
//!
//! # Overview
//!
//! - [`OctetCursor`] - Reads octets from a slice with position tracking
//! - [`hex`] - Formats octets as a space-separated hex string
//! - [`hex_window`] - Formats a hex window around a byte offset
//!
//! # Example
//!
//! ```
//! use dirtext_octets::{hex_window, OctetCursor};
//!
//! let mut cursor = OctetCursor::new(&[0x74, 0xe2, 0x73]);
//! assert_eq!(cursor.next_octet(), Some(0x74));
//! assert_eq!(cursor.pos(), 1);
//!
//! assert_eq!(hex_window(&[0x74, 0xe2, 0x73], 1, 1), "74 [e2] 73");
//! ```

mod cursor;
mod hex;

pub use cursor::OctetCursor;
pub use hex::{hex, hex_window};
