/*
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

/// Escapes `&`, `<`, `>`, `"` and `'` as named entities in a single pass.
///
/// The output of a substitution is never re-scanned, so ampersands produced
/// by the escaping itself are not escaped again.
pub fn encode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(ch),
        }
    }

    result
}

/// Resolves numeric and named entities to characters.
///
/// Three whole-string passes run in fixed order: decimal `&#NN;`, then
/// hexadecimal `&#xHH;`, then named `&name;`. The trailing semicolon is
/// optional in all three. Unknown names and code points that are not valid
/// characters are left as literal text; each entity occurrence is decoded at
/// most once.
pub fn decode_entities(text: &str) -> String {
    let text = decode_numeric(text, false);
    let text = decode_numeric(&text, true);
    decode_named(&text)
}

fn decode_numeric(text: &str, hex: bool) -> String {
    let bytes = text.as_bytes();
    let mut result = String::with_capacity(text.len());
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'&' && bytes.get(pos + 1) == Some(&b'#') {
            let mut cursor = pos + 2;
            if hex {
                if bytes.get(cursor) == Some(&b'x') {
                    cursor += 1;
                } else {
                    pos += 1;
                    continue;
                }
            }

            let digits_start = cursor;
            while cursor < bytes.len()
                && if hex {
                    bytes[cursor].is_ascii_hexdigit()
                } else {
                    bytes[cursor].is_ascii_digit()
                }
            {
                cursor += 1;
            }

            if cursor > digits_start {
                let mut end = cursor;
                if bytes.get(end) == Some(&b';') {
                    end += 1;
                }

                result.push_str(&text[literal_start..pos]);
                let radix = if hex { 16 } else { 10 };
                match u32::from_str_radix(&text[digits_start..cursor], radix)
                    .ok()
                    .and_then(char::from_u32)
                {
                    Some(ch) => result.push(ch),
                    // Out of range or a surrogate: keep the literal text.
                    None => result.push_str(&text[pos..end]),
                }
                literal_start = end;
                pos = end;
                continue;
            }
        }
        pos += 1;
    }

    result.push_str(&text[literal_start..]);
    result
}

fn decode_named(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut result = String::with_capacity(text.len());
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'&' && bytes.get(pos + 1).is_some_and(u8::is_ascii_alphabetic) {
            let name_start = pos + 1;
            let mut cursor = name_start + 1;
            while cursor < bytes.len() && bytes[cursor].is_ascii_alphanumeric() {
                cursor += 1;
            }

            // Entity names are at least two characters long.
            if cursor - name_start >= 2 {
                let mut end = cursor;
                if bytes.get(end) == Some(&b';') {
                    end += 1;
                }

                if let Some(ch) = entity_to_char(&text[name_start..cursor]) {
                    result.push_str(&text[literal_start..pos]);
                    result.push(ch);
                    literal_start = end;
                }
                // Unknown names stay literal; either way the scan resumes
                // after the matched span.
                pos = end;
                continue;
            }
        }
        pos += 1;
    }

    result.push_str(&text[literal_start..]);
    result
}

/// Fixed named-entity table: the five XML entities, common typographic
/// symbols and the Latin-1 accented letters. Case-sensitive.
fn entity_to_char(name: &str) -> Option<char> {
    hashify::map! {
        name.as_bytes(),
        char,
        "quot" => '"',
        "apos" => '\'',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "cent" => '¢',
        "pound" => '£',
        "yen" => '¥',
        "euro" => '€',
        "sect" => '§',
        "para" => '¶',
        "bull" => '•',
        "hellip" => '…',
        "ldquo" => '“',
        "rdquo" => '”',
        "lsquo" => '‘',
        "apos2" => '’',
        "ndash" => '–',
        "mdash" => '—',
        "iexcl" => '¡',
        "iquest" => '¿',
        "deg" => '°',
        "plusmn" => '±',
        "micro" => 'µ',
        "divide" => '÷',
        "times" => '×',
        "laquo" => '«',
        "raquo" => '»',
        "Agrave" => 'À',
        "Aacute" => 'Á',
        "Acirc" => 'Â',
        "Atilde" => 'Ã',
        "Auml" => 'Ä',
        "Aring" => 'Å',
        "AElig" => 'Æ',
        "Ccedil" => 'Ç',
        "Egrave" => 'È',
        "Eacute" => 'É',
        "Ecirc" => 'Ê',
        "Euml" => 'Ë',
        "Igrave" => 'Ì',
        "Iacute" => 'Í',
        "Icirc" => 'Î',
        "Iuml" => 'Ï',
        "ETH" => 'Ð',
        "Ntilde" => 'Ñ',
        "Ograve" => 'Ò',
        "Oacute" => 'Ó',
        "Ocirc" => 'Ô',
        "Otilde" => 'Õ',
        "Ouml" => 'Ö',
        "Oslash" => 'Ø',
        "Ugrave" => 'Ù',
        "Uacute" => 'Ú',
        "Ucirc" => 'Û',
        "Uuml" => 'Ü',
        "Yacute" => 'Ý',
        "THORN" => 'Þ',
        "agrave" => 'à',
        "aacute" => 'á',
        "acirc" => 'â',
        "atilde" => 'ã',
        "auml" => 'ä',
        "aring" => 'å',
        "aelig" => 'æ',
        "ccedil" => 'ç',
        "egrave" => 'è',
        "eacute" => 'é',
        "ecirc" => 'ê',
        "euml" => 'ë',
        "igrave" => 'ì',
        "iacute" => 'í',
        "icirc" => 'î',
        "iuml" => 'ï',
        "eth" => 'ð',
        "ntilde" => 'ñ',
        "ograve" => 'ò',
        "oacute" => 'ó',
        "ocirc" => 'ô',
        "otilde" => 'õ',
        "ouml" => 'ö',
        "oslash" => 'ø',
        "ugrave" => 'ù',
        "uacute" => 'ú',
        "ucirc" => 'û',
        "uuml" => 'ü',
        "yacute" => 'ý',
        "thorn" => 'þ',
        "yuml" => 'ÿ',
    }
    .copied()
}

#[cfg(test)]
mod tests {
    use super::{decode_entities, encode_entities};

    #[test]
    fn encode() {
        let inputs = [
            (
                "<tag attr=\"val\">&text</tag>",
                "&lt;tag attr=&quot;val&quot;&gt;&amp;text&lt;/tag&gt;",
            ),
            ("it's", "it&apos;s"),
            ("no reserved chars", "no reserved chars"),
            ("", ""),
        ];

        for (text, expected) in inputs {
            assert_eq!(encode_entities(text), expected, "Failed for {text:?}");
        }

        // Escaping is intentionally not idempotent: a second application
        // double-escapes the ampersands produced by the first.
        assert_eq!(encode_entities(&encode_entities("<")), "&amp;lt;");
        assert_eq!(encode_entities("&amp;"), "&amp;amp;");
    }

    #[test]
    fn decode_numeric() {
        let inputs = [
            ("&#65;", "A"),
            ("&#65", "A"),
            ("&#x41;", "A"),
            ("&#x41", "A"),
            ("&#xE9;", "é"),
            ("&#233;", "é"),
            ("x&#8212;y", "x—y"),
            ("&#65;&#66;&#67;", "ABC"),
            // Out-of-range code points and surrogates stay literal.
            ("&#1114112;", "&#1114112;"),
            ("&#x110000;", "&#x110000;"),
            ("&#xD800;", "&#xD800;"),
            ("&#99999999999999999999;", "&#99999999999999999999;"),
            ("&#;", "&#;"),
            ("&#x;", "&#x;"),
        ];

        for (text, expected) in inputs {
            assert_eq!(decode_entities(text), expected, "Failed for {text:?}");
        }
    }

    #[test]
    fn decode_named() {
        let inputs = [
            ("&eacute;", "é"),
            ("&eacute", "é"),
            ("&Eacute;", "É"),
            ("&amp;", "&"),
            ("&lt;b&gt;", "<b>"),
            ("caf&eacute; cr&egrave;me", "café crème"),
            ("&euro;100 &plusmn; 5", "€100 ± 5"),
            // Unknown names pass through unchanged, silently.
            ("&nosuch;", "&nosuch;"),
            ("&EACUTE;", "&EACUTE;"),
            ("&amplitude;", "&amplitude;"),
            // A lone & or a one-letter name is not an entity.
            ("a & b", "a & b"),
            ("&x;", "&x;"),
        ];

        for (text, expected) in inputs {
            assert_eq!(decode_entities(text), expected, "Failed for {text:?}");
        }
    }

    #[test]
    fn decode_single_pass() {
        // "&amp;lt;" must yield "&lt;", not "<": each occurrence is decoded
        // exactly once and the output is not re-scanned.
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&amp;#65;"), "&#65;");
    }

    #[test]
    fn round_trip() {
        for text in [
            "<tag attr=\"val\">&text</tag>",
            "plain",
            "&amp; already encoded",
            "&#65; numeric",
            "mixed é ü ñ <>&\"'",
        ] {
            assert_eq!(
                decode_entities(&encode_entities(text)),
                text,
                "Failed for {text:?}"
            );
        }
    }
}
