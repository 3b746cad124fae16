/*
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Error;

/// Decodes the Base64 payload of an RFC 2047 "B" encoded-word.
///
/// Tolerant of truncated input: a payload whose length is not a multiple of
/// four decodes the longest structurally valid prefix. A trailing group of
/// two or three symbols flushes one or two bytes, a trailing lone symbol is
/// dropped. Padding terminates the data and ASCII whitespace is skipped.
/// Returns `None` when a byte outside the Base64 alphabet is found.
pub fn decode_base64_word(bytes: &[u8]) -> Option<Vec<u8>> {
    let mut chunk: u32 = 0;
    let mut pending: u8 = 0;
    let mut buf = Vec::with_capacity(bytes.len() / 4 * 3 + 2);

    for &ch in bytes {
        match ch {
            b'=' => break,
            b' ' | b'\t' | b'\r' | b'\n' => (),
            _ => {
                chunk = (chunk << 6) | base64_value(ch)? as u32;
                pending += 1;

                if pending == 4 {
                    buf.extend_from_slice(&[
                        (chunk >> 16) as u8,
                        (chunk >> 8) as u8,
                        chunk as u8,
                    ]);
                    chunk = 0;
                    pending = 0;
                }
            }
        }
    }

    match pending {
        2 => buf.push((chunk >> 4) as u8),
        3 => {
            buf.push((chunk >> 10) as u8);
            buf.push((chunk >> 2) as u8);
        }
        _ => (),
    }

    Some(buf)
}

fn base64_value(ch: u8) -> Option<u8> {
    match ch {
        b'A'..=b'Z' => Some(ch - b'A'),
        b'a'..=b'z' => Some(ch - b'a' + 26),
        b'0'..=b'9' => Some(ch - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Encodes the UTF-8 bytes of `text` as standard, padded Base64.
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Strict whole-string Base64 decode into UTF-8 text.
pub fn decode_base64(text: &str) -> Result<String, Error> {
    Ok(String::from_utf8(STANDARD.decode(text)?)?)
}

#[cfg(test)]
mod tests {

    #[test]
    fn decode_base64_word() {
        let inputs = [
            ("VGVzdA==", "Test"),
            ("WWU=", "Ye"),
            ("QQ==", "A"),
            ("cm8=", "ro"),
            ("SGVsbG8gd29ybGQ=", "Hello world"),
            ("w6HDqcOtw7PDug==", "áéíóú"),
            // Whitespace inside the payload is skipped.
            ("w6 HD qcOt", "áéí"),
            // Truncated payloads decode their valid prefix.
            (
                "SWhyZSBBdWZ0cmFnc2Jlc3TDpHRpZ3VuZzsgSWhyZSBCZXN0ZW",
                "Ihre Auftragsbestätigung; Ihre Beste",
            ),
            ("SGVsbG8gd29ybG", "Hello worl"),
            ("SGVsbG8gd29ybGQ", "Hello world"),
            ("====", ""),
            ("", ""),
        ];

        for (encoded, expected) in inputs {
            assert_eq!(
                super::decode_base64_word(encoded.as_bytes()).as_deref(),
                Some(expected.as_bytes()),
                "Failed for {encoded:?}"
            );
        }

        for invalid in ["cmáé", "w6!HD", "SGVs*bG8"] {
            assert_eq!(
                super::decode_base64_word(invalid.as_bytes()),
                None,
                "Failed for {invalid:?}"
            );
        }
    }

    #[test]
    fn base64_codec() {
        let inputs = [
            ("Hello world", "SGVsbG8gd29ybGQ="),
            ("áéíóú", "w6HDqcOtw7PDug=="),
            ("", ""),
            ("A", "QQ=="),
        ];

        for (text, encoded) in inputs {
            assert_eq!(super::encode_base64(text), encoded, "Failed for {text:?}");
            assert_eq!(
                super::decode_base64(encoded).unwrap(),
                text,
                "Failed for {encoded:?}"
            );
        }

        for invalid in ["not base64!", "QQ=", "////", "w6HDqcO"] {
            assert!(
                super::decode_base64(invalid).is_err(),
                "Failed for {invalid:?}"
            );
        }
    }
}
