/*
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

/// Decodes the payload of an RFC 2047 "Q" encoded-word into raw bytes.
///
/// `_` stands for a space and `=XY` for the byte `0xXY`; every other byte is
/// literal. A `=` that is not followed by two hex digits stays literal, so
/// the function is total and the caller only fails later if the resulting
/// bytes are invalid for the target character set.
pub fn decode_q_word(bytes: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(bytes.len());
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'_' => {
                buf.push(b' ');
                pos += 1;
            }
            b'=' => {
                let hex = bytes
                    .get(pos + 1)
                    .and_then(|ch| hex_value(*ch))
                    .zip(bytes.get(pos + 2).and_then(|ch| hex_value(*ch)));

                if let Some((hi, lo)) = hex {
                    buf.push((hi << 4) | lo);
                    pos += 3;
                } else {
                    buf.push(b'=');
                    pos += 1;
                }
            }
            ch => {
                buf.push(ch);
                pos += 1;
            }
        }
    }

    buf
}

pub(crate) fn hex_value(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {

    #[test]
    fn decode_q_word() {
        let inputs: [(&str, &[u8]); 11] = [
            ("this=20is=20some=20text", b"this is some text"),
            ("this is some text", b"this is some text"),
            ("Keith_Moore", b"Keith Moore"),
            ("Ol=C3=A1_Mundo", "Olá Mundo".as_bytes()),
            ("Keld_J=F8rn_Simonsen", b"Keld J\xf8rn Simonsen"),
            // Malformed escapes stay literal.
            ("=2=123", b"=2\x123"),
            ("= 20", b"= 20"),
            ("=XY", b"=XY"),
            ("=", b"="),
            ("100=% proof", b"100=% proof"),
            ("", b""),
        ];

        for (encoded, expected) in inputs {
            assert_eq!(
                super::decode_q_word(encoded.as_bytes()),
                expected,
                "Failed for {encoded:?}"
            );
        }
    }
}
