//! Scanner locating CSS function calls such as `url(...)` inside declaration values.
//!
//! The scanner balances nested parentheses, so arguments like `url(img(1).png)` or
//! `cross-fade(20% url(a.png), url(b.png))` are split correctly. Quotes only delimit a string when
//! the argument itself starts with one, and calls inside `/* */` comments are ignored. A call whose
//! closing parenthesis is missing is skipped; scanning resumes right after its opening `(`.

use std::ops::Range;

use regex::Regex;

use crate::syntax::comment_ranges;

/// Location of one function call within the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// Byte range of the whole call, from the function name through the closing `)`.
    pub span: Range<usize>,
    /// Byte range of the text between the parentheses.
    pub argument: Range<usize>,
}

impl FunctionCall {
    /// Borrow the argument text from the scanned input.
    pub fn argument<'t>(&self, text: &'t str) -> &'t str {
        &text[self.argument.clone()]
    }
}

/// Finds every call of a single named function, left to right and non-overlapping.
#[derive(Debug, Clone)]
pub struct FunctionCallScanner {
    pattern: Regex,
}

impl FunctionCallScanner {
    /// Create a scanner for calls of `name`. The name must start at a word boundary, so a scanner
    /// for `url` does not match `myurl(`.
    pub fn new(name: &str) -> Self {
        let pattern = Regex::new(&format!(r"\b{}\(", regex::escape(name)))
            .expect("escaped function name should form a valid regex");
        Self { pattern }
    }

    /// Collect all complete calls in `text`.
    pub fn find_all(&self, text: &str) -> Vec<FunctionCall> {
        let comments = comment_ranges(text);
        let mut calls = Vec::new();
        let mut cursor = 0;

        while let Some(found) = self.pattern.find_at(text, cursor) {
            if let Some(comment) = enclosing(&comments, found.start()) {
                cursor = comment.end;
                continue;
            }

            let argument_start = found.end();
            match find_closing_paren(text, argument_start) {
                Some(close) => {
                    calls.push(FunctionCall {
                        span: found.start()..close + 1,
                        argument: argument_start..close,
                    });
                    cursor = close + 1;
                }
                None => cursor = argument_start,
            }
        }

        calls
    }

    /// Replace every call with the text produced by `replace`, keeping everything between calls.
    ///
    /// The callback receives the raw argument text. The first error aborts the replacement.
    pub fn try_replace_all<E>(
        &self,
        text: &str,
        mut replace: impl FnMut(&str) -> Result<String, E>,
    ) -> Result<String, E> {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for call in self.find_all(text) {
            output.push_str(&text[last..call.span.start]);
            output.push_str(&replace(call.argument(text))?);
            last = call.span.end;
        }

        output.push_str(&text[last..]);
        Ok(output)
    }
}

fn enclosing(ranges: &[Range<usize>], index: usize) -> Option<&Range<usize>> {
    ranges.iter().find(|range| range.contains(&index))
}

/// Index of the `)` closing a call whose argument starts at `start`.
fn find_closing_paren(text: &str, start: usize) -> Option<usize> {
    let argument = &text[start..];
    let quoted = argument.trim_start().starts_with(['"', '\'']);
    let mut depth = 1usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (offset, c) in argument.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') if quoted => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            (None, _) => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arguments(text: &str) -> Vec<String> {
        FunctionCallScanner::new("url")
            .find_all(text)
            .iter()
            .map(|call| call.argument(text).to_string())
            .collect()
    }

    #[test]
    fn finds_single_call() {
        let text = "background: url(a.png) no-repeat";
        let calls = FunctionCallScanner::new("url").find_all(text);
        assert_eq!(calls.len(), 1);
        assert_eq!(&text[calls[0].span.clone()], "url(a.png)");
        assert_eq!(calls[0].argument(text), "a.png");
    }

    #[test]
    fn finds_comma_separated_calls() {
        let found = arguments("url(a.png), url('b.png')");
        assert_eq!(found, ["a.png", "'b.png'"]);
    }

    #[test]
    fn balances_nested_parentheses() {
        let found = arguments("url(img(1).png) url(b.png)");
        assert_eq!(found, ["img(1).png", "b.png"]);
    }

    #[test]
    fn ignores_parentheses_inside_quotes() {
        let found = arguments(r#"url("a).png") url('(b.png')"#);
        assert_eq!(found, [r#""a).png""#, "'(b.png'"]);
    }

    #[test]
    fn apostrophe_in_unquoted_argument_is_plain_text() {
        let found = arguments("url(it's.png), url(b.png)");
        assert_eq!(found, ["it's.png", "b.png"]);
    }

    #[test]
    fn finds_calls_nested_in_other_functions() {
        let found = arguments("cross-fade(20% url(first.png), url(second.png))");
        assert_eq!(found, ["first.png", "second.png"]);
    }

    #[test]
    fn requires_word_boundary_before_name() {
        assert!(arguments("myurl(a.png)").is_empty());
        assert!(arguments("url (a.png)").is_empty());
    }

    #[test]
    fn skips_trailing_unterminated_call() {
        assert_eq!(arguments("url(a.png) url(b.png"), ["a.png"]);
    }

    #[test]
    fn resumes_after_unterminated_quoted_call() {
        let found = arguments(r#"url("a.png url(b.png)"#);
        assert_eq!(found, ["b.png"]);
    }

    #[test]
    fn skips_calls_inside_comments() {
        let found = arguments("url(a.png) /* url(b.png) */ url(c.png)");
        assert_eq!(found, ["a.png", "c.png"]);
    }

    #[test]
    fn honours_escaped_characters() {
        assert_eq!(arguments(r"url(a\).png)"), [r"a\).png"]);
    }

    #[test]
    fn replaces_only_matched_spans() {
        let scanner = FunctionCallScanner::new("url");
        let result: Result<String, ()> = scanner.try_replace_all(
            "src: url(a.woff) format('woff'), url(b.ttf);",
            |argument| Ok(format!("url(x/{argument})")),
        );
        assert_eq!(
            result.unwrap(),
            "src: url(x/a.woff) format('woff'), url(x/b.ttf);"
        );
    }

    #[test]
    fn propagates_callback_errors() {
        let scanner = FunctionCallScanner::new("url");
        let result: Result<String, &str> = scanner.try_replace_all("url(a)", |_| Err("boom"));
        assert_eq!(result, Err("boom"));
    }
}
