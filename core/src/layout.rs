//! Fixed-width line layout for INSERT column and value lists.

/// Indent of every laid-out line.
pub const LIST_INDENT: &str = "           ";

/// Lays out tokens left to right, a fixed number per line.
///
/// A delimiter follows every token except the last. Padding follows a delimiter only
/// when the next token stays on the same line. Tokens are never reordered, truncated
/// or de-duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLayout {
    pub per_line: usize,
    pub delimiter: &'static str,
    pub padding: usize,
    pub indent: &'static str,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            per_line: 5,
            delimiter: ",",
            padding: 4,
            indent: LIST_INDENT,
        }
    }
}

impl LineLayout {
    /// Render `tokens`. Lines are joined by `\n`, with no trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use automapper_core::layout::LineLayout;
    ///
    /// let layout = LineLayout { per_line: 2, indent: "", ..LineLayout::default() };
    /// assert_eq!(layout.render(&["A", "B", "C"]), "A,    B,\nC");
    /// ```
    pub fn render<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let per_line = self.per_line.max(1);
        let padding = " ".repeat(self.padding);
        let mut out = String::new();

        for (i, token) in tokens.iter().enumerate() {
            if i % per_line == 0 {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(self.indent);
            }

            out.push_str(token.as_ref());

            if i + 1 < tokens.len() {
                out.push_str(self.delimiter);
                if (i + 1) % per_line != 0 {
                    out.push_str(&padding);
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> LineLayout {
        LineLayout {
            indent: "",
            ..LineLayout::default()
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(LineLayout::default().render::<&str>(&[]), "");
    }

    #[test]
    fn single_token_has_no_delimiter() {
        assert_eq!(LineLayout::default().render(&["A"]), format!("{LIST_INDENT}A"));
    }

    #[test]
    fn exactly_one_full_line() {
        assert_eq!(
            bare().render(&["A", "B", "C", "D", "E"]),
            "A,    B,    C,    D,    E"
        );
    }

    #[test]
    fn wraps_after_five_without_trailing_padding() {
        let out = LineLayout::default().render(&["A", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(
            out,
            format!("{LIST_INDENT}A,    B,    C,    D,    E,\n{LIST_INDENT}F,    G")
        );
    }

    #[test]
    fn duplicates_and_order_are_kept() {
        assert_eq!(bare().render(&["B", "A", "B"]), "B,    A,    B");
    }

    #[test]
    fn custom_delimiter_and_padding() {
        let layout = LineLayout {
            per_line: 3,
            delimiter: " |",
            padding: 1,
            indent: "> ",
        };
        assert_eq!(
            layout.render(&["a", "b", "c", "d"]),
            "> a | b | c |\n> d"
        );
    }

    #[test]
    fn zero_per_line_is_one_per_line() {
        let layout = LineLayout {
            per_line: 0,
            ..bare()
        };
        assert_eq!(layout.render(&["a", "b"]), "a,\nb");
    }
}
