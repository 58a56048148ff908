//! Locates `property: value` declarations in stylesheet source text.
//!
//! Only declarations inside `{}` blocks are reported. At-rule preludes such as
//! `@import url(base.css);`, selectors and comments are never part of a reported span, so
//! splicing new values into the reported ranges leaves every other byte of the source untouched.

use std::ops::Range;

use crate::syntax::{comment_end, string_end, string_quote};

/// Byte ranges of one declaration within the scanned stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSpan {
    /// Property name, without surrounding whitespace.
    pub property: Range<usize>,
    /// Value after the colon, trimmed of surrounding whitespace. Includes `!important`.
    pub value: Range<usize>,
}

impl DeclarationSpan {
    /// Borrow the property name from the scanned input.
    pub fn property<'t>(&self, css: &'t str) -> &'t str {
        &css[self.property.clone()]
    }

    /// Borrow the value from the scanned input.
    pub fn value<'t>(&self, css: &'t str) -> &'t str {
        &css[self.value.clone()]
    }
}

/// Find every declaration in `css`, in source order.
///
/// Nested blocks (`@media`, `@supports`, nested rules) are descended into. Semicolons inside
/// parentheses, brackets or strings do not end a declaration, so data URIs such as
/// `url(data:image/png;base64,...)` stay whole.
pub fn find_declarations(css: &str) -> Vec<DeclarationSpan> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut cursor = 0;

    loop {
        let item = scan_item(css, cursor);
        if depth > 0 && item.terminator != Some(b'{') {
            spans.extend(declaration_span(css, cursor, &item));
        }

        match item.terminator {
            Some(b'{') => depth += 1,
            Some(b'}') => depth = depth.saturating_sub(1),
            Some(_) => {}
            None => break,
        }
        cursor = item.end + 1;
    }

    spans
}

/// One statement, block header or declaration, up to its terminator.
struct Item {
    end: usize,
    terminator: Option<u8>,
    colon: Option<usize>,
}

fn scan_item(css: &str, start: usize) -> Item {
    let bytes = css.as_bytes();
    let mut index = start;
    let mut nesting = 0usize;
    let mut colon = None;

    while index < bytes.len() {
        if let Some(end) = comment_end(bytes, index) {
            index = end;
            continue;
        }
        if let Some(quote) = string_quote(bytes, index) {
            index = string_end(bytes, index, quote);
            continue;
        }

        match bytes[index] {
            b'\\' => index += 1,
            b'(' | b'[' => nesting += 1,
            b')' | b']' => nesting = nesting.saturating_sub(1),
            b':' if nesting == 0 && colon.is_none() => colon = Some(index),
            terminator @ (b'{' | b'}' | b';') if nesting == 0 => {
                return Item {
                    end: index,
                    terminator: Some(terminator),
                    colon,
                };
            }
            _ => {}
        }
        index += 1;
    }

    Item {
        end: bytes.len(),
        terminator: None,
        colon,
    }
}

fn declaration_span(css: &str, start: usize, item: &Item) -> Option<DeclarationSpan> {
    let colon = item.colon?;
    let property_start = skip_trivia(css.as_bytes(), start);
    if property_start >= colon {
        return None;
    }

    let property = css[property_start..colon].trim_end();
    if !property.bytes().all(is_name_byte) {
        return None;
    }

    let raw_value = &css[colon + 1..item.end];
    let value_start = item.end - raw_value.trim_start().len();
    let value_end = (colon + 1 + raw_value.trim_end().len()).max(value_start);

    Some(DeclarationSpan {
        property: property_start..property_start + property.len(),
        value: value_start..value_end,
    })
}

fn skip_trivia(bytes: &[u8], mut index: usize) -> usize {
    while index < bytes.len() {
        if let Some(end) = comment_end(bytes, index) {
            index = end;
        } else if bytes[index].is_ascii_whitespace() {
            index += 1;
        } else {
            break;
        }
    }
    index
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}
