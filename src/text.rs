//! Text wrapping and wrapped-text drawing

use crate::font::{Font, FontMetrics};
use crate::style::VerticalAlignment;
use lopdf::{Object, content::Operation};
use tracing::trace;

/// Break text into lines that fit within the specified width.
///
/// Splits on whitespace and accumulates tokens greedily. A token wider than
/// `max_width` on its own is broken into maximal chunks, each emitted as its
/// own line; a single character wider than `max_width` is kept alone so the
/// split always terminates.
pub fn wrap_to_lines(
    text: &str,
    max_width: f32,
    font_size: f32,
    metrics: &dyn FontMetrics,
) -> Vec<String> {
    let text = text.replace('\r', "");
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let width = |s: &str| metrics.text_width(s, font_size);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for token in text.split_whitespace() {
        if width(token) > max_width {
            if !current.is_empty() {
                lines.push(current.trim_end().to_string());
                current.clear();
            }
            lines.extend(break_long_token(token, max_width, font_size, metrics));
            continue;
        }

        let candidate = if current.is_empty() {
            token.to_string()
        } else {
            format!("{current} {token}")
        };

        if width(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(current.trim_end().to_string());
            current = token.to_string();
        }
    }

    if !current.trim().is_empty() {
        lines.push(current.trim_end().to_string());
    }

    trace!("wrapped text into {} lines", lines.len());
    lines
}

/// Break an over-wide token into maximal chunks each fitting `max_width`.
fn break_long_token(
    token: &str,
    max_width: f32,
    font_size: f32,
    metrics: &dyn FontMetrics,
) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();

    for ch in token.chars() {
        let mut test = chunk.clone();
        test.push(ch);
        // An empty chunk always accepts the character, even one wider
        // than max_width on its own
        if metrics.text_width(&test, font_size) <= max_width || chunk.is_empty() {
            chunk = test;
        } else {
            chunks.push(chunk);
            chunk = ch.to_string();
        }
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }

    chunks
}

/// Number of whole lines of the given leading that fit in `height`.
pub fn max_lines_for(height: f32, leading: f32) -> usize {
    if height > 0.0 && leading > 0.0 {
        (height / leading).floor() as usize
    } else {
        usize::MAX
    }
}

/// Generate operations drawing wrapped text inside a bounded area.
///
/// The area spans from `(x, y)` upward by `max_height`; lines that do not fit
/// are dropped without any overflow marker. `leading <= 0` falls back to
/// `font_size + 2`.
#[allow(clippy::too_many_arguments)]
pub fn wrapped_text_operations(
    text: &str,
    x: f32,
    y: f32,
    max_width: f32,
    max_height: f32,
    font: Font,
    font_size: f32,
    leading: f32,
    valign: VerticalAlignment,
    metrics: &dyn FontMetrics,
) -> Vec<Operation> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let leading = if leading <= 0.0 {
        font_size + 2.0
    } else {
        leading
    };

    let mut lines = wrap_to_lines(text, max_width, font_size, metrics);
    lines.truncate(max_lines_for(max_height, leading));
    if lines.is_empty() {
        return Vec::new();
    }

    let block_h = lines.len() as f32 * leading;
    let start_y = match valign {
        VerticalAlignment::Bottom => y + 2.0 + (block_h - leading),
        VerticalAlignment::Middle => y + (max_height / 2.0) + (block_h / 2.0) - leading,
        VerticalAlignment::Top => y + max_height - leading,
    };

    text_block_operations(&lines, x, start_y, font, font_size, leading)
}

/// Generate operations drawing pre-wrapped lines top-down from a first
/// baseline at `(x, start_y)`.
pub fn text_block_operations(
    lines: &[String],
    x: f32,
    start_y: f32,
    font: Font,
    font_size: f32,
    leading: f32,
) -> Vec<Operation> {
    if lines.is_empty() {
        return Vec::new();
    }

    let mut ops = Vec::with_capacity(lines.len() + 3);
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![
            Object::Name(font.resource_name().as_bytes().to_vec()),
            font_size.into(),
        ],
    ));
    ops.push(Operation::new("Td", vec![x.into(), start_y.into()]));

    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            ops.push(Operation::new("Td", vec![0.into(), (-leading).into()]));
        }
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.clone())],
        ));
    }

    ops.push(Operation::new("ET", vec![]));
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::HeuristicMetrics;

    // HeuristicMetrics at font size 10.0 measures every char at 5.0pt.
    const SIZE: f32 = 10.0;

    fn wrap(text: &str, max_width: f32) -> Vec<String> {
        wrap_to_lines(text, max_width, SIZE, &HeuristicMetrics)
    }

    #[test]
    fn test_empty_text() {
        assert!(wrap("", 100.0).is_empty());
        assert!(wrap("   \t  ", 100.0).is_empty());
    }

    #[test]
    fn test_wrap_basic() {
        let lines = wrap("This is a long piece of text that should wrap", 100.0);
        assert!(lines.len() > 1);
        let m = HeuristicMetrics;
        for line in &lines {
            assert!(m.text_width(line, SIZE) <= 100.0, "line too wide: {line}");
        }
    }

    #[test]
    fn test_single_word_fits_on_one_line() {
        assert_eq!(wrap("hello world", 200.0), vec!["hello world"]);
    }

    #[test]
    fn test_long_token_split_into_max_chunks() {
        // 50 chars at 5pt each; 100pt line fits 20 chars
        let token: String = std::iter::repeat('x').take(50).collect();
        let lines = wrap(&token, 100.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), 20);
        assert_eq!(lines[1].chars().count(), 20);
        assert_eq!(lines[2].chars().count(), 10);
        assert_eq!(lines.join(""), token);
    }

    #[test]
    fn test_long_token_flushes_pending_line() {
        let token: String = std::iter::repeat('y').take(25).collect();
        let lines = wrap(&format!("ab {token}"), 100.0);
        assert_eq!(lines[0], "ab");
        assert_eq!(lines[1].chars().count(), 20);
        assert_eq!(lines[2].chars().count(), 5);
    }

    #[test]
    fn test_single_char_wider_than_max_kept_alone() {
        // Max width below one char width: must not loop forever
        let lines = wrap("ab", 3.0);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_multibyte_token_split_no_panic() {
        let token: String = std::iter::repeat('\u{e9}').take(30).collect();
        let lines = wrap(&token, 100.0);
        assert_eq!(lines.join(""), token);
    }

    #[test]
    fn test_rewrap_preserves_token_sequence() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let first = wrap(text, 90.0);
        let rejoined = first.join(" ");
        let second = wrap(&rejoined, 90.0);
        let toks = |ls: &[String]| -> Vec<String> {
            ls.iter()
                .flat_map(|l| l.split_whitespace().map(str::to_string))
                .collect()
        };
        assert_eq!(toks(&first), toks(&second));
    }

    fn count_tj(ops: &[Operation]) -> usize {
        ops.iter().filter(|op| op.operator == "Tj").count()
    }

    #[test]
    fn test_draw_truncates_to_line_budget() {
        // 6 lines of one word each, area fits 2 lines of leading 12
        let text = "aaaaaaaaaa bbbbbbbbbb cccccccccc dddddddddd eeeeeeeeee ffffffffff";
        let ops = wrapped_text_operations(
            text,
            0.0,
            0.0,
            50.0,
            25.0,
            Font::Helvetica,
            SIZE,
            12.0,
            VerticalAlignment::Top,
            &HeuristicMetrics,
        );
        assert_eq!(count_tj(&ops), 2);
    }

    #[test]
    fn test_draw_empty_produces_no_ops() {
        let ops = wrapped_text_operations(
            "  ",
            0.0,
            0.0,
            50.0,
            25.0,
            Font::Helvetica,
            SIZE,
            12.0,
            VerticalAlignment::Top,
            &HeuristicMetrics,
        );
        assert!(ops.is_empty());
    }

    #[test]
    fn test_draw_leading_defaults_to_font_size_plus_two() {
        // With leading 0 the top-anchored baseline sits at y + h - (size + 2)
        let ops = wrapped_text_operations(
            "hi",
            10.0,
            20.0,
            100.0,
            60.0,
            Font::Helvetica,
            SIZE,
            0.0,
            VerticalAlignment::Top,
            &HeuristicMetrics,
        );
        let td = ops.iter().find(|op| op.operator == "Td").unwrap();
        assert_eq!(td.operands[1], Object::Real(20.0 + 60.0 - 12.0));
    }

    #[test]
    fn test_draw_middle_centers_block() {
        let ops = wrapped_text_operations(
            "hi",
            0.0,
            0.0,
            100.0,
            60.0,
            Font::Helvetica,
            SIZE,
            12.0,
            VerticalAlignment::Middle,
            &HeuristicMetrics,
        );
        // one line: start = h/2 + leading/2 - leading = 30 + 6 - 12
        let td = ops.iter().find(|op| op.operator == "Td").unwrap();
        assert_eq!(td.operands[1], Object::Real(24.0));
    }

    #[test]
    fn test_draw_bottom_anchors_last_line() {
        let ops = wrapped_text_operations(
            "aaaaaaaaaa bbbbbbbbbb",
            0.0,
            5.0,
            50.0,
            100.0,
            Font::Helvetica,
            SIZE,
            12.0,
            VerticalAlignment::Bottom,
            &HeuristicMetrics,
        );
        // two lines: first baseline at y + 2 + (24 - 12)
        let td = ops.iter().find(|op| op.operator == "Td").unwrap();
        assert_eq!(td.operands[1], Object::Real(5.0 + 2.0 + 12.0));
    }
}
