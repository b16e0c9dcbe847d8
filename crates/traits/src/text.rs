//! Text composition: turning styled text into a measured, drawable block.

use crate::ContentHandle;
use pagebuilder_style::{
    FontStretch, FontStyle, FontWeight, HorizontalAlignment, TextWrapping, VerticalAlignment,
};
use pagebuilder_types::{Color, Size};
use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;

/// The resolved paragraph and font attributes of one text item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub font_family: String,
    /// Points.
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub font_stretch: FontStretch,
    /// Points. `None` lets the composer choose.
    pub line_height: Option<f32>,
    pub foreground: Color,
    pub alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub wrapping: TextWrapping,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 12.0,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            font_stretch: FontStretch::Normal,
            line_height: None,
            foreground: Color::black(),
            alignment: HorizontalAlignment::Leading,
            vertical_alignment: VerticalAlignment::Top,
            wrapping: TextWrapping::Wrap,
        }
    }
}

impl TextStyle {
    pub fn effective_line_height(&self) -> f32 {
        self.line_height.unwrap_or(self.font_size * 1.2)
    }
}

/// The result of composing a text block.
#[derive(Clone)]
pub struct ComposedText {
    /// The extent the text actually occupies, in points.
    pub size: Size,
    /// Composer-specific layout, passed back to the draw surface.
    pub handle: ContentHandle,
}

impl Debug for ComposedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedText")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Measures and lays out styled text.
pub trait TextComposer: Send + Sync + Debug {
    /// Compose `text` with `style`. When `max_width` is set and the style
    /// wraps, lines are broken to fit it.
    fn compose(&self, text: &str, style: &TextStyle, max_width: Option<f32>) -> ComposedText;
}

/// Lines produced by [`HeuristicTextComposer`]. Its handles downcast to this type.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedLines {
    pub lines: Vec<String>,
    pub line_height: f32,
}

/// A font-less composer that assumes every glyph is half an em wide.
///
/// Good enough for previews and tests; real output needs a shaping composer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicTextComposer {
    /// Glyph advance as a fraction of the font size.
    pub advance_factor: f32,
}

impl Default for HeuristicTextComposer {
    fn default() -> Self {
        Self {
            advance_factor: 0.5,
        }
    }
}

impl HeuristicTextComposer {
    fn advance(&self, style: &TextStyle) -> f32 {
        let weight = if style.font_weight.is_bold() { 1.1 } else { 1.0 };
        style.font_size * self.advance_factor * style.font_stretch.width_factor() * weight
    }

    fn width_of(&self, s: &str, advance: f32) -> f32 {
        s.chars().count() as f32 * advance
    }

    fn wrap_paragraph(
        &self,
        paragraph: &str,
        max_width: f32,
        advance: f32,
        break_words: bool,
        lines: &mut Vec<String>,
    ) {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate_width = if current.is_empty() {
                self.width_of(word, advance)
            } else {
                self.width_of(&current, advance) + advance + self.width_of(word, advance)
            };
            if candidate_width <= max_width || current.is_empty() && !break_words {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if break_words && self.width_of(word, advance) > max_width {
                let per_line = ((max_width / advance).floor() as usize).max(1);
                let chars: Vec<char> = word.chars().collect();
                let mut chunks = chars.chunks(per_line).peekable();
                while let Some(chunk) = chunks.next() {
                    let piece: String = chunk.iter().collect();
                    if chunks.peek().is_some() {
                        lines.push(piece);
                    } else {
                        current = piece;
                    }
                }
            } else {
                current.push_str(word);
            }
        }
        lines.push(current);
    }
}

impl TextComposer for HeuristicTextComposer {
    fn compose(&self, text: &str, style: &TextStyle, max_width: Option<f32>) -> ComposedText {
        let advance = self.advance(style);
        let line_height = style.effective_line_height();
        let mut lines = Vec::new();
        if !text.is_empty() {
            for paragraph in text.split('\n') {
                match max_width {
                    Some(width) if style.wrapping.wraps() && advance > 0.0 => self.wrap_paragraph(
                        paragraph,
                        width,
                        advance,
                        style.wrapping == TextWrapping::Wrap,
                        &mut lines,
                    ),
                    _ => lines.push(paragraph.to_string()),
                }
            }
        }
        let width = lines
            .iter()
            .map(|l| self.width_of(l, advance))
            .fold(0.0_f32, f32::max);
        let size = Size::new(width, lines.len() as f32 * line_height);
        ComposedText {
            size,
            handle: Arc::new(ComposedLines { lines, line_height }),
        }
    }
}

/// A composer that reports the same size for every non-empty text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSizeTextComposer {
    pub size: Size,
}

impl TextComposer for FixedSizeTextComposer {
    fn compose(&self, text: &str, style: &TextStyle, _max_width: Option<f32>) -> ComposedText {
        let (size, lines) = if text.is_empty() {
            (Size::zero(), Vec::new())
        } else {
            (self.size, vec![text.to_string()])
        };
        ComposedText {
            size,
            handle: Arc::new(ComposedLines {
                lines,
                line_height: style.effective_line_height(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(composed: &ComposedText) -> Vec<String> {
        composed
            .handle
            .downcast_ref::<ComposedLines>()
            .unwrap()
            .lines
            .clone()
    }

    #[test]
    fn test_single_line_measure() {
        let composer = HeuristicTextComposer::default();
        let style = TextStyle {
            font_size: 10.0,
            ..TextStyle::default()
        };
        let composed = composer.compose("abcd", &style, None);
        assert_eq!(composed.size, Size::new(20.0, 12.0));
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        let composer = HeuristicTextComposer::default();
        let style = TextStyle {
            font_size: 10.0,
            ..TextStyle::default()
        };
        // 5pt per glyph: "alpha beta" is 50pt wide.
        let composed = composer.compose("alpha beta gamma", &style, Some(50.0));
        assert_eq!(lines_of(&composed), vec!["alpha beta", "gamma"]);
        assert_eq!(composed.size.height, 24.0);
    }

    #[test]
    fn test_no_wrap_keeps_lines() {
        let composer = HeuristicTextComposer::default();
        let style = TextStyle {
            font_size: 10.0,
            wrapping: TextWrapping::NoWrap,
            ..TextStyle::default()
        };
        let composed = composer.compose("alpha beta\ngamma", &style, Some(10.0));
        assert_eq!(lines_of(&composed), vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_long_word_breaks_or_overflows() {
        let composer = HeuristicTextComposer::default();
        let mut style = TextStyle {
            font_size: 10.0,
            ..TextStyle::default()
        };
        let composed = composer.compose("abcdefgh", &style, Some(20.0));
        assert_eq!(lines_of(&composed), vec!["abcd", "efgh"]);

        style.wrapping = TextWrapping::WrapWithOverflow;
        let composed = composer.compose("abcdefgh", &style, Some(20.0));
        assert_eq!(lines_of(&composed), vec!["abcdefgh"]);
    }

    #[test]
    fn test_empty_text_has_no_extent() {
        let composer = HeuristicTextComposer::default();
        let composed = composer.compose("", &TextStyle::default(), Some(100.0));
        assert!(composed.size.is_empty());
    }
}
