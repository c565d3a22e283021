//! Quote tracking shared by the splitter and the tokenizer

use std::ops::Range;

/// Byte ranges of quoted segments (quotes included)
///
/// A backslash inside quotes escapes the next character. An unterminated
/// quote extends to the end of the input.
pub(super) fn quoted_ranges(path: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut open: Option<(char, usize)> = None;
    let mut escaped = false;

    for (i, c) in path.char_indices() {
        match open {
            None => {
                if c == '\'' || c == '"' {
                    open = Some((c, i));
                }
            }
            Some((quote, start)) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == quote {
                    ranges.push(start..i + c.len_utf8());
                    open = None;
                }
            }
        }
    }
    if let Some((_, start)) = open {
        ranges.push(start..path.len());
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_ranges() {
        assert_eq!(quoted_ranges("$['a.b'].c"), vec![2..7]);
        assert_eq!(quoted_ranges(r#"$["x"]['y']"#), vec![2..5, 7..10]);
        assert_eq!(quoted_ranges(r"$['it\'s']"), vec![2..9]);
        assert_eq!(quoted_ranges("$['open"), vec![2..7]);
        assert!(quoted_ranges("$.a[0]").is_empty());
    }
}
