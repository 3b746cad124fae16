/*
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

/// A byte-sequence to text decoder for one named character set.
///
/// Resolved through the host's text-encoding tables; UTF-8 is handled by a
/// fast path in the encoded-word decoder and never reaches the registry.
pub struct Charset {
    #[cfg(feature = "full_encoding")]
    encoding: &'static encoding_rs::Encoding,
}

/// Resolves a charset name, case-insensitively, to a decoder.
///
/// Unknown names yield `None`; callers must treat that as a recoverable,
/// per-item condition rather than a fatal error.
#[cfg(feature = "full_encoding")]
pub fn charset_decoder(name: &str) -> Option<Charset> {
    encoding_rs::Encoding::for_label_no_replacement(name.trim().as_bytes())
        .map(|encoding| Charset { encoding })
}

#[cfg(not(feature = "full_encoding"))]
pub fn charset_decoder(_name: &str) -> Option<Charset> {
    None
}

impl Charset {
    /// Decodes `bytes`, or returns `None` when the sequence is invalid for
    /// this character set.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        #[cfg(feature = "full_encoding")]
        {
            self.encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned())
        }
        #[cfg(not(feature = "full_encoding"))]
        {
            let _ = bytes;
            None
        }
    }
}
