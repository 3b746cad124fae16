/*
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use crate::decoders::base64::decode_base64_word;
use crate::decoders::charsets::charset_decoder;
use crate::decoders::quoted_printable::decode_q_word;

/// An RFC 2047 `=?charset?encoding?payload?=` token matched inside a header.
struct EncodedWord<'x> {
    raw: &'x str,
    charset: &'x str,
    encoding: u8,
    payload: &'x str,
    end: usize,
}

/// Decodes all encoded-words in `text`, leaving everything else untouched.
///
/// Tokens are matched left to right, non-overlapping, and decoded
/// independently; literal text between tokens is preserved verbatim. A token
/// that fails to decode stays in the output as-is and one message per
/// failure is appended to `warnings` when a sink is supplied. This function
/// never fails; with no decodable token the input is returned unchanged.
pub fn decode_encoded_words(text: &str, mut warnings: Option<&mut Vec<String>>) -> String {
    let bytes = text.as_bytes();
    let mut result = String::with_capacity(text.len());
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'=' && bytes.get(pos + 1) == Some(&b'?') {
            if let Some(word) = EncodedWord::parse(text, pos) {
                result.push_str(&text[literal_start..pos]);

                match word.decode() {
                    Ok(decoded) => result.push_str(&decoded),
                    Err(reason) => {
                        result.push_str(word.raw);
                        if let Some(warnings) = warnings.as_deref_mut() {
                            warnings.push(format!("Failed decoding MIME header part: {reason}"));
                        }
                    }
                }

                literal_start = word.end;
                pos = word.end;
                continue;
            }
        }
        pos += 1;
    }

    result.push_str(&text[literal_start..]);
    result
}

impl<'x> EncodedWord<'x> {
    /// Matches a token at `start`, which points at `=?`. The charset and
    /// payload are non-empty and may contain any byte except `?`.
    fn parse(text: &'x str, start: usize) -> Option<EncodedWord<'x>> {
        let bytes = text.as_bytes();

        let charset_start = start + 2;
        let mut pos = charset_start;
        while *bytes.get(pos)? != b'?' {
            pos += 1;
        }
        if pos == charset_start {
            return None;
        }
        let charset_end = pos;

        let encoding = *bytes.get(pos + 1)?;
        if !matches!(encoding, b'b' | b'B' | b'q' | b'Q') || bytes.get(pos + 2) != Some(&b'?') {
            return None;
        }

        let payload_start = pos + 3;
        pos = payload_start;
        while *bytes.get(pos)? != b'?' {
            pos += 1;
        }
        if pos == payload_start || bytes.get(pos + 1) != Some(&b'=') {
            return None;
        }

        Some(EncodedWord {
            raw: &text[start..pos + 2],
            charset: &text[charset_start..charset_end],
            encoding,
            payload: &text[payload_start..pos],
            end: pos + 2,
        })
    }

    fn decode(&self) -> Result<String, String> {
        let bytes = match self.encoding {
            b'b' | b'B' => decode_base64_word(self.payload.as_bytes())
                .ok_or_else(|| format!("malformed base64 in {:?}", self.raw))?,
            _ => decode_q_word(self.payload.as_bytes()),
        };

        // Lowercasing is for comparison only; the registry receives the
        // name as written.
        if matches!(self.charset.to_ascii_lowercase().as_str(), "utf-8" | "utf8") {
            return String::from_utf8(bytes)
                .map_err(|_| format!("invalid utf-8 data in {:?}", self.raw));
        }

        match charset_decoder(self.charset) {
            Some(decoder) => decoder.decode(&bytes).ok_or_else(|| {
                format!(
                    "invalid {} byte sequence in {:?}",
                    self.charset, self.raw
                )
            }),
            None => Err(format!("unsupported character set {:?}", self.charset)),
        }
    }
}
