//! Byte-level helpers shared by the stylesheet scanners.

/// Index just past the comment starting at `index`, or `None` when no comment starts there.
///
/// An unterminated comment runs to the end of the input.
pub(crate) fn comment_end(bytes: &[u8], index: usize) -> Option<usize> {
    if !bytes[index..].starts_with(b"/*") {
        return None;
    }

    let body = index + 2;
    let end = bytes[body..]
        .windows(2)
        .position(|pair| pair == b"*/")
        .map_or(bytes.len(), |offset| body + offset + 2);
    Some(end)
}

/// Quote character opening a string at `index`.
///
/// A quote glued to a preceding letter or digit, as in an unquoted `url(it's.png)`, does not
/// start a string.
pub(crate) fn string_quote(bytes: &[u8], index: usize) -> Option<u8> {
    match bytes[index] {
        quote @ (b'"' | b'\'') if index == 0 || !bytes[index - 1].is_ascii_alphanumeric() => {
            Some(quote)
        }
        _ => None,
    }
}

/// Index just past the string opened at `start`.
///
/// Strings end at the matching quote, or before a newline when left unterminated.
pub(crate) fn string_end(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut index = start + 1;
    while index < bytes.len() {
        match bytes[index] {
            b'\\' => index += 2,
            b'\n' => return index,
            byte if byte == quote => return index + 1,
            _ => index += 1,
        }
    }
    bytes.len()
}

/// Byte ranges of every comment in `text`, skipping comment markers inside strings.
pub(crate) fn comment_ranges(text: &str) -> Vec<std::ops::Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        if let Some(end) = comment_end(bytes, index) {
            ranges.push(index..end);
            index = end;
        } else if let Some(quote) = string_quote(bytes, index) {
            index = string_end(bytes, index, quote);
        } else {
            index += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_comment_ends() {
        assert_eq!(comment_end(b"/* a */b", 0), Some(7));
        assert_eq!(comment_end(b"/* open", 0), Some(7));
        assert_eq!(comment_end(b"a/**/", 0), None);
    }

    #[test]
    fn strings_end_at_quote_or_newline() {
        assert_eq!(string_end(br#""a\"b" c"#, 0, b'"'), 6);
        assert_eq!(string_end(b"'abc\nd", 0, b'\''), 4);
        assert_eq!(string_end(b"'abc", 0, b'\''), 4);
    }

    #[test]
    fn quotes_after_letters_do_not_open_strings() {
        assert_eq!(string_quote(b"it's", 2), None);
        assert_eq!(string_quote(b"('a')", 1), Some(b'\''));
        assert_eq!(string_quote(b"\"a\"", 0), Some(b'"'));
    }

    #[test]
    fn collects_comments_outside_strings() {
        let text = "a /* one */ content: \"/* not */\" /* two";
        let ranges = comment_ranges(text);
        assert_eq!(ranges.len(), 2);
        assert_eq!(&text[ranges[0].clone()], "/* one */");
        assert_eq!(&text[ranges[1].clone()], "/* two");
    }
}
