/*
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

//! # textconv
//!
//! _textconv_ is a small library of reversible text transforms used to convert
//! text between common interchange representations: Base64, XML/HTML entity
//! escaping and RFC 2047 MIME "encoded-word" header decoding. It is meant to
//! be embedded in an editor or tooling shell that hands it raw text and
//! applies the returned replacement text; command registration, selection
//! handling and user notifications belong to that shell, not to this crate.
//!
//! The library abides by Postel's law where it matters most: the encoded-word
//! decoder makes a best effort on partial or malformed input. Each
//! `=?charset?encoding?payload?=` token is decoded independently and a token
//! that cannot be decoded (unknown character set, malformed Base64, invalid
//! bytes for the target charset) is left untouched in the output while a
//! descriptive message is pushed to the caller's warnings sink. A truncated
//! Base64 payload still yields its valid prefix. The whole-string Base64
//! codec, by contrast, is strict and fails as a unit.
//!
//! All transforms are pure, synchronous functions over in-memory strings.
//! Character sets beyond UTF-8 are resolved through
//! [encoding_rs](https://crates.io/crates/encoding_rs), enabled by the
//! default `full_encoding` feature.
//!
//! ```rust,ignore
//! let mut warnings = Vec::new();
//! let text = textconv::mime_header_decode(
//!     "=?UTF-8?B?SGVsbG8=?= =?UTF-8?Q?w=C3=B6rld?=",
//!     Some(&mut warnings),
//! );
//! assert_eq!(text, "Hello wörld");
//! assert!(warnings.is_empty());
//! ```

pub mod decoders;
mod error;

pub use error::Error;

use crate::decoders::{base64, encoded_word, entity};

/// Encodes the UTF-8 bytes of `text` as a standard, padded Base64 string.
pub fn base64_encode(text: &str) -> String {
    base64::encode_base64(text)
}

/// Decodes a whole Base64 string into UTF-8 text.
///
/// Unlike the tolerant Base64 path used inside encoded-words, this codec is
/// strict: malformed Base64 or decoded bytes that are not valid UTF-8 fail
/// the operation as a whole.
pub fn base64_decode(text: &str) -> Result<String, Error> {
    base64::decode_base64(text)
}

/// Escapes the five reserved XML characters as named entities.
///
/// Total and unconditional. Applying it twice double-escapes, which is the
/// expected behavior for an escaping function, not a defect of the input.
pub fn xml_entity_encode(text: &str) -> String {
    entity::encode_entities(text)
}

/// Resolves decimal, hexadecimal and known named entities to characters.
///
/// Unknown entity names and out-of-range code points are passed through
/// unchanged, silently.
pub fn xml_entity_decode(text: &str) -> String {
    entity::decode_entities(text)
}

/// Decodes every RFC 2047 encoded-word found in `text`.
///
/// Tokens are decoded independently; a token that fails to decode is kept as
/// literal text and one message per failure is appended to `warnings` when a
/// sink is supplied. Absence of the sink never changes the returned text.
pub fn mime_header_decode(text: &str, warnings: Option<&mut Vec<String>>) -> String {
    encoded_word::decode_encoded_words(text, warnings)
}

/// A transform selected by name by the host shell.
///
/// The calling convention is uniform so a host can wire every transform
/// through one call path; only [`Transform::MimeHeaderDecode`] actually
/// writes to the warnings sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Base64Encode,
    Base64Decode,
    XmlEntityEncode,
    XmlEntityDecode,
    MimeHeaderDecode,
}

impl Transform {
    /// Looks up a transform by its registered operation name.
    pub fn from_name(name: &str) -> Option<Transform> {
        hashify::tiny_map! {
            name.as_bytes(),
            "base64Encode" => Transform::Base64Encode,
            "base64Decode" => Transform::Base64Decode,
            "xmlEntityEncode" => Transform::XmlEntityEncode,
            "xmlEntityDecode" => Transform::XmlEntityDecode,
            "mimeHeaderDecode" => Transform::MimeHeaderDecode,
        }
    }

    /// Applies the transform to `text`, returning the replacement text.
    pub fn apply(&self, text: &str, warnings: Option<&mut Vec<String>>) -> Result<String, Error> {
        match self {
            Transform::Base64Encode => Ok(base64_encode(text)),
            Transform::Base64Decode => base64_decode(text),
            Transform::XmlEntityEncode => Ok(xml_entity_encode(text)),
            Transform::XmlEntityDecode => Ok(xml_entity_decode(text)),
            Transform::MimeHeaderDecode => Ok(mime_header_decode(text, warnings)),
        }
    }
}
