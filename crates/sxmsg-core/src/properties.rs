//! Reader for the key/value properties resource
//!
//! Supports the classic line-oriented format: `\n`, `\r\n` or `\r` line
//! ends, `#`/`!` comments, `=`, `:` or whitespace separators, backslash line
//! continuations and the usual escapes including `\uXXXX` (surrogate pairs
//! are combined, unpaired surrogates become U+FFFD).

use std::collections::HashMap;
use std::str::Chars;

use crate::errors::PropertiesError;

/// Parse properties text into a key/value map. Later duplicates win.
///
/// # Errors
///
/// Returns [`PropertiesError`] when a `\u` escape is truncated or not hex.
pub fn parse_properties(input: &str) -> Result<HashMap<String, String>, PropertiesError> {
    let mut entries = HashMap::new();
    let mut lines = physical_lines(input).enumerate();

    while let Some((idx, raw)) = lines.next() {
        let line = raw.trim_start_matches(is_blank);
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let mut logical = line.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let line_no = idx + 1;
        let (key, value) = split_entry(&logical);
        entries.insert(unescape(key, line_no)?, unescape(value, line_no)?);
    }

    Ok(entries)
}

/// Split on `\r\n`, `\n` or a lone `\r`.
fn physical_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(|c: char| c == '\r' || c == '\n') else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = i;
            break;
        }
    }

    let rest = line[key_end..].trim_start_matches(is_blank);
    let rest = rest
        .strip_prefix(|c: char| c == '=' || c == ':')
        .unwrap_or(rest)
        .trim_start_matches(is_blank);
    (&line[..key_end], rest)
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut high_surrogate: Option<u32> = None;

    while let Some(c) = chars.next() {
        let decoded = match c {
            '\\' => match chars.next() {
                Some('u') => {
                    let unit = read_code_unit(&mut chars, line)?;
                    match (high_surrogate.take(), unit) {
                        (None, 0xD800..=0xDBFF) => high_surrogate = Some(unit),
                        (Some(high), 0xDC00..=0xDFFF) => out.push(combine_surrogates(high, unit)),
                        (Some(_), 0xD800..=0xDBFF) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            high_surrogate = Some(unit);
                        }
                        (pending, _) => {
                            if pending.is_some() {
                                out.push(char::REPLACEMENT_CHARACTER);
                            }
                            out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
                        }
                    }
                    continue;
                }
                Some('t') => '\t',
                Some('n') => '\n',
                Some('r') => '\r',
                Some('f') => '\x0c',
                Some(other) => other,
                None => break,
            },
            other => other,
        };
        if high_surrogate.take().is_some() {
            out.push(char::REPLACEMENT_CHARACTER);
        }
        out.push(decoded);
    }

    // Unpaired surrogates become U+FFFD
    if high_surrogate.is_some() {
        out.push(char::REPLACEMENT_CHARACTER);
    }
    Ok(out)
}

fn read_code_unit(chars: &mut Chars<'_>, line: usize) -> Result<u32, PropertiesError> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.chars().count() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
        return Err(PropertiesError::MalformedUnicodeEscape { line });
    }
    u32::from_str_radix(&hex, 16).map_err(|_| PropertiesError::MalformedUnicodeEscape { line })
}

fn combine_surrogates(high: u32, low: u32) -> char {
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(map: &HashMap<String, String>, key: &str) -> Option<String> {
        map.get(key).cloned()
    }

    #[test]
    fn test_separators() {
        let props = parse_properties("a=1\nb:2\nc 3\nd = 4\ne  :  5\n").unwrap();
        assert_eq!(get(&props, "a").as_deref(), Some("1"));
        assert_eq!(get(&props, "b").as_deref(), Some("2"));
        assert_eq!(get(&props, "c").as_deref(), Some("3"));
        assert_eq!(get(&props, "d").as_deref(), Some("4"));
        assert_eq!(get(&props, "e").as_deref(), Some("5"));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let props = parse_properties("# comment\n! other\n\n   \nroot.package=foo\n").unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(get(&props, "root.package").as_deref(), Some("foo"));
    }

    #[test]
    fn test_value_keeps_trailing_whitespace_and_inner_separators() {
        let props = parse_properties("key = a=b:c  \n").unwrap();
        assert_eq!(get(&props, "key").as_deref(), Some("a=b:c  "));
    }

    #[test]
    fn test_line_continuation() {
        let props = parse_properties("root.package = com.\\\n    example\nnext=1\n").unwrap();
        assert_eq!(get(&props, "root.package").as_deref(), Some("com.example"));
        assert_eq!(get(&props, "next").as_deref(), Some("1"));
    }

    #[test]
    fn test_escaped_backslash_is_not_continuation() {
        let props = parse_properties("path=c:\\\\dir\\\\\nother=x\n").unwrap();
        assert_eq!(get(&props, "path").as_deref(), Some("c:\\dir\\"));
        assert_eq!(get(&props, "other").as_deref(), Some("x"));
    }

    #[test]
    fn test_escaped_separator_in_key() {
        let props = parse_properties("a\\=b=c\nx\\ y=z\n").unwrap();
        assert_eq!(get(&props, "a=b").as_deref(), Some("c"));
        assert_eq!(get(&props, "x y").as_deref(), Some("z"));
    }

    #[test]
    fn test_unicode_escapes() {
        let props = parse_properties("k=caf\\u00e9 \\uD83D\\uDE00\n").unwrap();
        assert_eq!(get(&props, "k").as_deref(), Some("café 😀"));
    }

    #[test]
    fn test_malformed_unicode_escape() {
        let err = parse_properties("ok=1\nk=\\u12\n").unwrap_err();
        assert_eq!(err, PropertiesError::MalformedUnicodeEscape { line: 2 });
        assert!(parse_properties("k=\\uzzzz\n").is_err());
    }

    #[test]
    fn test_lone_surrogate_replaced() {
        let props = parse_properties("k=\\uD800x\nlow=\\uDC00\ntail=a\\uD83D\n").unwrap();
        assert_eq!(get(&props, "k").as_deref(), Some("\u{FFFD}x"));
        assert_eq!(get(&props, "low").as_deref(), Some("\u{FFFD}"));
        assert_eq!(get(&props, "tail").as_deref(), Some("a\u{FFFD}"));
    }

    #[test]
    fn test_lone_surrogate_keeps_other_entries() {
        let props = parse_properties("root.package=foo\nother=\\uD800\n").unwrap();
        assert_eq!(get(&props, "root.package").as_deref(), Some("foo"));
        assert_eq!(get(&props, "other").as_deref(), Some("\u{FFFD}"));
    }

    #[test]
    fn test_key_without_value() {
        let props = parse_properties("flag\n").unwrap();
        assert_eq!(get(&props, "flag").as_deref(), Some(""));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let props = parse_properties("k=1\nk=2\n").unwrap();
        assert_eq!(get(&props, "k").as_deref(), Some("2"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let props = parse_properties("a=1\r\nb=2\r\n").unwrap();
        assert_eq!(get(&props, "a").as_deref(), Some("1"));
        assert_eq!(get(&props, "b").as_deref(), Some("2"));
    }

    #[test]
    fn test_cr_only_line_endings() {
        let props = parse_properties("other=x\rroot.package=foo\r").unwrap();
        assert_eq!(get(&props, "other").as_deref(), Some("x"));
        assert_eq!(get(&props, "root.package").as_deref(), Some("foo"));
    }

    #[test]
    fn test_mixed_line_endings_and_continuation() {
        let props = parse_properties("a=1\r\n\rb=com.\\\r  example\nc=3").unwrap();
        assert_eq!(get(&props, "a").as_deref(), Some("1"));
        assert_eq!(get(&props, "b").as_deref(), Some("com.example"));
        assert_eq!(get(&props, "c").as_deref(), Some("3"));
    }
}
