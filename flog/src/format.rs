//! # Formatter
//!
//! Composes a single [`LogLine`] from a message, prefix, category label and
//! suffix.

use crate::category::LogCategory;
use crate::style::{Hue, StyleProvider, Token};
use std::fmt;

/// One fully composed, color-decorated, newline-terminated line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    text: String,
    category: LogCategory,
}

impl LogLine {
    /// `{reset}[{fg}{prefix}{reset}] - {message} {suffix} {reset}{bg} {bold}{label} {reset}\n`
    pub(crate) fn compose(
        style: &dyn StyleProvider,
        message: impl fmt::Display,
        prefix: &str,
        category: LogCategory,
        hue: Hue,
        label: &str,
        suffix: &str,
    ) -> Self {
        let reset = style.lookup(Token::Reset);
        let text = format!(
            "{reset}[{fg}{prefix}{reset}] - {message} {suffix} {reset}{bg} {bold}{label} {reset}\n",
            fg = style.lookup(Token::Text(hue)),
            bg = style.lookup(Token::Background(hue)),
            bold = style.lookup(Token::Bold),
        );
        Self { text, category }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> LogCategory {
        self.category
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for LogLine {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PlainStyle;

    #[test]
    fn test_plain_template() {
        let line = LogLine::compose(
            &PlainStyle,
            "hello",
            "+",
            LogCategory::Success,
            Hue::Green,
            "success",
            "->",
        );
        assert_eq!(line.as_str(), "[+] - hello ->  success \n");
        assert_eq!(line.category(), LogCategory::Success);
    }
}
