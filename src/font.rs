//! Font selection and metrics for text measurement

use crate::constants::DEFAULT_CHAR_WIDTH_RATIO;

/// The two built-in Type1 fonts every sheet carries as page resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    /// PDF BaseFont name
    pub fn base_name(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name the content stream selects the font by
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F1-Bold",
        }
    }
}

/// Trait for measuring text dimensions.
///
/// Implement this trait to provide accurate font-aware measurement for the
/// text wrapping and cell layout routines.
pub trait FontMetrics {
    /// Width of a single character in points at the given font size
    fn char_width(&self, ch: char, font_size: f32) -> f32;

    /// Total width of a string in points at the given font size
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Character-count width estimation.
///
/// Approximates every glyph at a fixed fraction of the font size. Good enough
/// for the built-in Helvetica cells; swap in [`TtfFontMetrics`] for real
/// glyph advances.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMetrics;

impl FontMetrics for HeuristicMetrics {
    fn char_width(&self, _ch: char, font_size: f32) -> f32 {
        font_size * DEFAULT_CHAR_WIDTH_RATIO
    }

    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * DEFAULT_CHAR_WIDTH_RATIO
    }
}

/// TrueType font metrics using ttf-parser for accurate glyph measurement.
///
/// This struct owns the font data and parses it on demand for measurements.
#[cfg(feature = "ttf-parser")]
pub struct TtfFontMetrics {
    font_data: Vec<u8>,
    units_per_em: f32,
}

#[cfg(feature = "ttf-parser")]
impl TtfFontMetrics {
    /// Create new font metrics from raw TTF/TTC font data.
    ///
    /// Validates the font by parsing it and extracting units_per_em.
    pub fn new(font_data: Vec<u8>) -> crate::Result<Self> {
        let face = ttf_parser::Face::parse(&font_data, 0)
            .map_err(|e| crate::error::PackError::Font(format!("failed to parse font: {e}")))?;
        let units_per_em = face.units_per_em() as f32;
        Ok(Self {
            font_data,
            units_per_em,
        })
    }
}

#[cfg(feature = "ttf-parser")]
impl FontMetrics for TtfFontMetrics {
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        let face = ttf_parser::Face::parse(&self.font_data, 0).unwrap();
        face.glyph_index(ch)
            .and_then(|gid| face.glyph_hor_advance(gid))
            .map(|advance| advance as f32 / self.units_per_em * font_size)
            .unwrap_or(font_size * DEFAULT_CHAR_WIDTH_RATIO)
    }

    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let face = ttf_parser::Face::parse(&self.font_data, 0).unwrap();
        text.chars()
            .map(|ch| {
                face.glyph_index(ch)
                    .and_then(|gid| face.glyph_hor_advance(gid))
                    .map(|advance| advance as f32 / self.units_per_em * font_size)
                    .unwrap_or(font_size * DEFAULT_CHAR_WIDTH_RATIO)
            })
            .sum()
    }
}

#[cfg(feature = "ttf-parser")]
impl std::fmt::Debug for TtfFontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFontMetrics")
            .field("units_per_em", &self.units_per_em)
            .field("font_data_len", &self.font_data.len())
            .finish()
    }
}
