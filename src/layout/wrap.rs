use crate::error::Result;
use crate::measure::{checked_width, TextMeasurer};
use crate::style::TextStyle;
use crate::units::Pt;

const ELLIPSIS: char = '…';

/// Greedy word wrapping against a [TextMeasurer].
///
/// Words (runs of non-whitespace) are added to the current line for as long as
/// the measured line still fits the width; the word that would overflow starts
/// the next line. Whitespace is normalised to single spaces between words.
///
/// A word that is wider than a whole line on its own is split at the character
/// where the width is first exceeded and continued on the following lines, so
/// no text is ever dropped. If even a single character is wider than the line,
/// it is placed alone on its own line.
///
/// An optional prefix (such as a bullet glyph) starts the first line and
/// counts towards its width.
pub struct LineWrapper<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
    style: &'a TextStyle,
    width: Pt,
    prefix: &'a str,
}

impl<'a, M: TextMeasurer + ?Sized> LineWrapper<'a, M> {
    pub fn new(measurer: &'a M, style: &'a TextStyle, width: Pt) -> Self {
        LineWrapper {
            measurer,
            style,
            width,
            prefix: "",
        }
    }

    pub fn with_prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    fn fits(&self, line: &str) -> Result<bool> {
        Ok(checked_width(self.measurer, line, self.style)? <= self.width)
    }

    /// Wrap `text` into lines. Text with no words produces no lines.
    pub fn wrap(&self, text: &str) -> Result<Vec<String>> {
        let mut lines: Vec<String> = Vec::new();
        if text.split_whitespace().next().is_none() {
            return Ok(lines);
        }

        let mut current = String::from(self.prefix);
        // whether `current` holds any text beyond the prefix
        let mut has_words = false;

        for word in text.split_whitespace() {
            let candidate = if has_words {
                format!("{current} {word}")
            } else {
                format!("{current}{word}")
            };
            if self.fits(&candidate)? {
                current = candidate;
                has_words = true;
                continue;
            }

            if has_words {
                lines.push(std::mem::take(&mut current));
                if self.fits(word)? {
                    current.push_str(word);
                    continue;
                }
            }

            self.split_word(word, &mut current, &mut lines)?;
            has_words = true;
        }

        if !current.is_empty() {
            lines.push(current);
        }
        Ok(lines)
    }

    /// Hard-split a word that does not fit on the line it starts, appending to
    /// `current` (empty, or holding only the prefix) character by character
    fn split_word(&self, word: &str, current: &mut String, lines: &mut Vec<String>) -> Result<()> {
        for ch in word.chars() {
            // the first character of a line is always kept, prefix or not
            let starts_line = current.is_empty() || (lines.is_empty() && current.as_str() == self.prefix);
            current.push(ch);
            if !starts_line && !self.fits(current)? {
                current.pop();
                lines.push(std::mem::take(current));
                current.push(ch);
            }
        }
        Ok(())
    }
}

/// Shorten `text` so it fits in `width`, replacing the cut-off tail with an
/// ellipsis. Text that already fits is returned unchanged.
pub fn truncate_to_width<M: TextMeasurer + ?Sized>(
    text: &str,
    width: Pt,
    measurer: &M,
    style: &TextStyle,
) -> Result<String> {
    if checked_width(measurer, text, style)? <= width {
        return Ok(text.to_string());
    }

    let chars: Vec<char> = text.chars().collect();
    for keep in (0..chars.len()).rev() {
        let mut candidate: String = chars[..keep].iter().collect::<String>().trim_end().to_string();
        candidate.push(ELLIPSIS);
        if checked_width(measurer, &candidate, style)? <= width {
            log::warn!("truncated {text:?} to {candidate:?} to fit {width}");
            return Ok(candidate);
        }
    }

    log::warn!("no room for any of {text:?} in {width}");
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MonospaceMeasurer;
    use crate::style::{StyleId, Stylesheet};

    /// one point per character, so widths read as character counts
    fn per_char() -> impl Fn(&str, &TextStyle) -> Pt {
        |text: &str, _: &TextStyle| Pt(text.chars().count() as f32)
    }

    fn wrap(text: &str, width: f32) -> Vec<String> {
        let sheet = Stylesheet::default();
        let measurer = per_char();
        LineWrapper::new(&measurer, sheet.get(StyleId::Paragraph), Pt(width))
            .wrap(text)
            .expect("wraps")
    }

    #[test]
    fn breaks_between_words() {
        assert_eq!(wrap("the quick brown fox jumps", 10.0), vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn a_line_may_fill_the_width_exactly() {
        assert_eq!(wrap("abcde fghij", 11.0), vec!["abcde fghij"]);
        assert_eq!(wrap("abcde fghij", 10.0), vec!["abcde", "fghij"]);
    }

    #[test]
    fn normalises_whitespace() {
        assert_eq!(wrap("  spread \t out\n words ", 40.0), vec!["spread out words"]);
    }

    #[test]
    fn splits_words_wider_than_the_line() {
        assert_eq!(wrap("ab abcdefghijkl cd", 5.0), vec!["ab", "abcde", "fghij", "kl cd"]);
    }

    #[test]
    fn places_characters_wider_than_the_line() {
        assert_eq!(wrap("abc", 0.5), vec!["a", "b", "c"]);
    }

    #[test]
    fn no_words_no_lines() {
        assert!(wrap("", 10.0).is_empty());
        assert!(wrap("   ", 10.0).is_empty());
    }

    #[test]
    fn prefix_counts_towards_the_first_line_only() {
        let sheet = Stylesheet::default();
        let measurer = per_char();
        let lines = LineWrapper::new(&measurer, sheet.get(StyleId::Bullet), Pt(10.0))
            .with_prefix("• ")
            .wrap("aaaa bbbb cccc")
            .expect("wraps");
        assert_eq!(lines, vec!["• aaaa", "bbbb cccc"]);
    }

    #[test]
    fn prefixed_oversized_word_is_split_after_the_prefix() {
        let sheet = Stylesheet::default();
        let measurer = per_char();
        let lines = LineWrapper::new(&measurer, sheet.get(StyleId::Bullet), Pt(5.0))
            .with_prefix("• ")
            .wrap("abcdefgh")
            .expect("wraps");
        assert_eq!(lines, vec!["• abc", "defgh"]);
    }

    #[test]
    fn bullet_glyph_is_never_left_alone_on_a_line() {
        let sheet = Stylesheet::default();
        let measurer = per_char();
        let lines = LineWrapper::new(&measurer, sheet.get(StyleId::Bullet), Pt(2.0))
            .with_prefix("• ")
            .wrap("ab")
            .expect("wraps");
        assert_eq!(lines, vec!["• a", "b"]);
    }

    #[test]
    fn measures_in_the_given_style() {
        let sheet = Stylesheet::default();
        let measurer = MonospaceMeasurer::new(0.5);
        // 11pt body: 5.5pt per character; 16pt heading: 8pt per character
        let body = LineWrapper::new(&measurer, sheet.get(StyleId::Paragraph), Pt(60.0))
            .wrap("aaaa bbbb cccc")
            .expect("wraps");
        let heading = LineWrapper::new(&measurer, sheet.get(StyleId::Heading1), Pt(60.0))
            .wrap("aaaa bbbb cccc")
            .expect("wraps");
        assert_eq!(body, vec!["aaaa bbbb", "cccc"]);
        assert_eq!(heading, vec!["aaaa", "bbbb", "cccc"]);
    }

    #[test]
    fn measurement_errors_propagate() {
        let sheet = Stylesheet::default();
        let broken = |_: &str, _: &TextStyle| Pt(f32::INFINITY);
        let result = LineWrapper::new(&broken, sheet.get(StyleId::Paragraph), Pt(100.0)).wrap("text");
        assert!(result.is_err());
    }

    #[test]
    fn truncates_with_an_ellipsis() {
        let sheet = Stylesheet::default();
        let measurer = per_char();
        let style = sheet.get(StyleId::Footer);
        assert_eq!(truncate_to_width("short", Pt(10.0), &measurer, style).expect("ok"), "short");
        assert_eq!(
            truncate_to_width("Acme Corp - Policy", Pt(10.0), &measurer, style).expect("ok"),
            "Acme Corp…"
        );
        assert_eq!(truncate_to_width("abc", Pt(0.0), &measurer, style).expect("ok"), "");
    }
}
