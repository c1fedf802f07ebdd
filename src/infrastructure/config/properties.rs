//! `key=value` 형식(properties 문법) 파서.
//!
//! 줄 단위 오류를 따로 보고하지 않는다. 이스케이프가 깨진 줄이 하나라도
//! 있으면 파일 전체가 실패한다.

use std::str::Chars;

use anyhow::{Context, Result, bail};

use super::store::PropertyMap;

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

pub(crate) fn parse_properties(input: &str) -> Result<PropertyMap> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut out = PropertyMap::new();
    let mut lines = split_lines(input).enumerate();

    while let Some((number, line)) = lines.next() {
        let line = line.trim_start_matches(WHITESPACE);
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        // 홀수 개의 역슬래시로 끝나면 다음 줄로 이어진다.
        let mut logical = String::new();
        let mut current = line;
        while ends_with_continuation(current) {
            logical.push_str(&current[..current.len() - 1]);
            match lines.next() {
                Some((_, next)) => current = next.trim_start_matches(WHITESPACE),
                None => {
                    current = "";
                    break;
                }
            }
        }
        logical.push_str(current);

        let (raw_key, raw_value) = split_key_value(&logical);
        let key = unescape(raw_key).with_context(|| format!("invalid key on line {}", number + 1))?;
        let value =
            unescape(raw_value).with_context(|| format!("invalid value on line {}", number + 1))?;
        out.insert(key, value);
    }

    Ok(out)
}

/// `\r\n`, `\r`, `\n`을 모두 줄 끝으로 본다.
fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(idx) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..idx];
        let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + skip..];
        Some(line)
    })
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (idx, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\x0c' => {
                key_end = idx;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(WHITESPACE);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(WHITESPACE);
    }
    (key, rest)
}

fn unescape(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => out.push(read_unicode_escape(&mut chars)?),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_unicode_escape(chars: &mut Chars<'_>) -> Result<char> {
    let high = read_hex4(chars)?;
    if !(0xD800..0xDC00).contains(&high) {
        return Ok(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    // UTF-16 서로게이트 쌍은 `\uD83C\uDFAC`처럼 두 개가 연달아 온다.
    // 짝이 없으면 대체 문자로 바꾸고 뒤따르는 입력은 그대로 둔다.
    let mut lookahead = chars.clone();
    if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
        let low = read_hex4(&mut lookahead)?;
        if (0xDC00..0xE000).contains(&low) {
            *chars = lookahead;
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            return Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
    }
    Ok(char::REPLACEMENT_CHARACTER)
}

fn read_hex4(chars: &mut Chars<'_>) -> Result<u32> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.chars().count() != 4 {
        bail!("truncated \\u escape: \\u{hex}");
    }
    u32::from_str_radix(&hex, 16).with_context(|| format!("malformed \\u escape: \\u{hex}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_separators_comments_and_blank_lines() {
        let parsed = parse_properties(
            "# header\n\
             ! bang comment\n\
             \n\
             net.filebot.provider.order=TheMovieDB::TV,TVmaze\n\
             url.data.source : https://mirror.example/data\n\
             apikey.omdb   XYZ\n\
             empty.value=\n",
        )
        .unwrap();

        assert_eq!(parsed["net.filebot.provider.order"], "TheMovieDB::TV,TVmaze");
        assert_eq!(parsed["url.data.source"], "https://mirror.example/data");
        assert_eq!(parsed["apikey.omdb"], "XYZ");
        assert_eq!(parsed["empty.value"], "");
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn joins_continuation_lines() {
        let parsed = parse_properties(
            "net.filebot.provider.disabled=TheTVDB,\\\n    AniDB\nescaped.backslash=C:\\\\\n",
        )
        .unwrap();

        assert_eq!(parsed["net.filebot.provider.disabled"], "TheTVDB,AniDB");
        assert_eq!(parsed["escaped.backslash"], "C:\\");
    }

    #[test]
    fn decodes_escapes_in_keys_and_values() {
        let parsed = parse_properties(
            "key\\ with\\=sep=tab\\there\nunicode=caf\\u00e9 \\uD83C\\uDFAC\n",
        )
        .unwrap();

        assert_eq!(parsed["key with=sep"], "tab\there");
        assert_eq!(parsed["unicode"], "café 🎬");
    }

    #[test]
    fn later_duplicate_keys_win() {
        let parsed = parse_properties("a=1\na=2\n").unwrap();
        assert_eq!(parsed["a"], "2");
    }

    #[test]
    fn malformed_unicode_escape_fails_whole_file() {
        let err = parse_properties("good=1\nbad=\\u12G4\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));

        assert!(parse_properties("bad=\\u12").is_err());
    }

    #[test]
    fn accepts_cr_and_crlf_line_endings() {
        let parsed = parse_properties(
            "url.data.source=/srv/mirror\rnet.filebot.provider.order=AniDB\r",
        )
        .unwrap();
        assert_eq!(parsed["url.data.source"], "/srv/mirror");
        assert_eq!(parsed["net.filebot.provider.order"], "AniDB");

        let parsed =
            parse_properties("# header\r\ndisabled=TheTVDB,\\\r\n  AniDB\r\napikey.omdb=ABC")
                .unwrap();
        assert_eq!(parsed["disabled"], "TheTVDB,AniDB");
        assert_eq!(parsed["apikey.omdb"], "ABC");
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn unpaired_surrogates_become_replacement_characters() {
        let parsed = parse_properties(
            "apikey.omdb=ABC\ntitle=\\uD83C\nmixed=\\uD83C\\u0041\nlow=\\uDC00x\n",
        )
        .unwrap();

        assert_eq!(parsed["apikey.omdb"], "ABC");
        assert_eq!(parsed["title"], "\u{FFFD}");
        assert_eq!(parsed["mixed"], "\u{FFFD}A");
        assert_eq!(parsed["low"], "\u{FFFD}x");
    }

    #[test]
    fn strips_byte_order_mark() {
        let parsed = parse_properties("\u{feff}apikey.omdb=ABC\n").unwrap();
        assert_eq!(parsed["apikey.omdb"], "ABC");
    }
}
