use crate::style::{style_sequences, Sgr};

/// Styled horizontal line of `width` copies of `glyph`
pub fn rule(style: &str, glyph: char, width: usize) -> String {
    let style = style_sequences(style);
    let mut line = String::with_capacity(style.len() + width * glyph.len_utf8() + 4);
    line.push_str(&style);
    line.extend(std::iter::repeat(glyph).take(width));
    line.push_str(Sgr::RESET);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::measure;

    #[test]
    fn test_rule() {
        assert_eq!(rule(Sgr::DIM, '─', 3), "\x1b[2m───\x1b[0m");
        assert_eq!(measure(&rule(Sgr::CYAN, '═', 70)), 70);
    }

    #[test]
    fn test_rule_ignores_text_in_style() {
        assert_eq!(measure(&rule("--", '─', 5)), 5);
    }
}
