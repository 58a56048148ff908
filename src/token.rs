//! Decomposition of a single `url()` argument into quote style, value and surrounding whitespace.

use std::fmt;

/// Quote character wrapping a `url()` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// `url("...")`
    Double,
    /// `url('...')`
    Single,
    /// `url(...)`
    None,
}

impl Quote {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '"' => Some(Self::Double),
            '\'' => Some(Self::Single),
            _ => None,
        }
    }

    /// Literal text written on both sides of the value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Double => "\"",
            Self::Single => "'",
            Self::None => "",
        }
    }
}

/// One `url()` argument split into the parts needed to rebuild it byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlToken {
    /// Whitespace between `url(` and the value or opening quote.
    pub prefix: String,
    /// Quote style of the original reference.
    pub quote: Quote,
    /// Reference payload without the surrounding quotes.
    pub value: String,
    /// Whitespace between the value or closing quote and `)`.
    pub suffix: String,
}

impl UrlToken {
    /// Parse the raw text captured between `url(` and its matching `)`.
    ///
    /// Both quote characters are recognised, but only as a matching pair: `"a.png'` is treated as
    /// an unquoted value. Any input parses, including the empty string.
    pub fn parse(raw: &str) -> Self {
        let trimmed_start = raw.trim_start();
        let prefix_len = raw.len() - trimmed_start.len();
        let trimmed = trimmed_start.trim_end();
        let suffix_start = prefix_len + trimmed.len();

        let prefix = raw[..prefix_len].to_string();
        let suffix = raw[suffix_start..].to_string();

        let mut chars = trimmed.chars();
        let quote = match (chars.next(), chars.next_back()) {
            (Some(first), Some(last)) if first == last => Quote::from_char(first),
            _ => None,
        };

        match quote {
            Some(quote) => Self {
                prefix,
                quote,
                value: trimmed[1..trimmed.len() - 1].to_string(),
                suffix,
            },
            None => Self {
                prefix,
                quote: Quote::None,
                value: trimmed.to_string(),
                suffix,
            },
        }
    }

    /// Copy of this token pointing at a different value, keeping quotes and whitespace.
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            prefix: self.prefix.clone(),
            quote: self.quote,
            value: value.into(),
            suffix: self.suffix.clone(),
        }
    }

    /// Render the token as a complete `url(...)` function call.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UrlToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = self.quote.as_str();
        write!(f, "url({}{quote}", self.prefix)?;
        write!(f, "{}{quote}{})", self.value, self.suffix)
    }
}
