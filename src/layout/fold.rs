//! Truncating rich text to a line count with a continuation affordance.

use crate::layout::measure::TextLayout;
use crate::text::RichText;

/// Fold `text` to at most `max_lines` lines of `max_width`, ending with
/// `continuation` when anything was cut.
///
/// Text that already fits, or `max_lines == 0`, is returned unchanged.
/// Otherwise the longest prefix is searched for, working backwards line by
/// line from the end of the text one cursor unit at a time, such that the
/// prefix (minus a trailing line break) followed by `continuation` lays out
/// in at most `max_lines` lines with a last line no wider than `max_width`.
/// Dropped lines are searched too: under word wrap a word pushed onto a
/// dropped line may fit back once it is cut. Prefixes are cut on the rich
/// text, so an emoji is kept or dropped whole.
///
/// When no prefix fits (e.g. the continuation alone is too wide) the shortest
/// candidate tried is returned.
pub fn fold_to_lines(
    text: &RichText,
    max_lines: usize,
    max_width: f32,
    continuation: &RichText,
    layout: &impl TextLayout,
) -> RichText {
    if max_lines == 0 {
        return text.clone();
    }
    let lines = layout.lines(text, max_width);
    if lines.len() <= max_lines {
        return text.clone();
    }
    tracing::debug!(
        lines = lines.len(),
        max_lines,
        max_width,
        "folding rich text"
    );

    let mut last = None;
    for line in lines.iter().rev() {
        for end in (line.range.start + 1..=line.range.end).rev() {
            let Ok(mut prefix) = text.substring(0..end) else {
                continue;
            };
            prefix.trim_trailing_line_break();
            prefix.append(continuation);

            let folded = layout.lines(&prefix, max_width);
            let fits = folded.len() <= max_lines
                && folded.last().is_none_or(|line| line.width <= max_width);
            if fits {
                return prefix;
            }
            last = Some(prefix);
        }
    }

    tracing::warn!(max_lines, max_width, "no fold candidate fits, using the shortest");
    last.unwrap_or_else(|| text.clone())
}
