//! Constants for sheet geometry and common values
//!
//! All linear dimensions are in PDF points (1/72 inch).

/// Standard A4 page width in points (portrait)
pub const A4_WIDTH: f32 = 595.0;

/// Standard A4 page height in points (portrait)
pub const A4_HEIGHT: f32 = 842.0;

/// Standard A3 page width in points (portrait)
pub const A3_WIDTH: f32 = 842.0;

/// Standard A3 page height in points (portrait)
pub const A3_HEIGHT: f32 = 1191.0;

/// Default page margin in points
pub const DEFAULT_PAGE_MARGIN: f32 = 18.0;

/// Default title block strip width in points
pub const DEFAULT_TITLE_BLOCK_WIDTH: f32 = 210.0;

/// Default reserved header height in points (0 = no header band)
pub const DEFAULT_HEADER_HEIGHT: f32 = 0.0;

/// Inner padding subtracted from the viewport before fitting the sheet image
pub const VIEWPORT_INNER_PAD: f32 = 6.0;

/// Padding inside title block cells
pub const CELL_PAD: f32 = 6.0;

/// Height of the sign-off band (DRAWN/CHECKED/APPROVED/SHEET)
pub const SIGN_BAND_HEIGHT: f32 = 95.0;

/// Height of the info band (DWG NO/REV/DATE)
pub const INFO_BAND_HEIGHT: f32 = 90.0;

/// Height of the drawing title band
pub const TITLE_BAND_HEIGHT: f32 = 150.0;

/// Minimum height of the top band (issuer/project/client + logo)
pub const TOP_BAND_MIN_HEIGHT: f32 = 150.0;

/// Top band height as a fraction of the strip height
pub const TOP_BAND_RATIO: f32 = 0.22;

/// Minimum height of the flexible comments band
pub const COMMENTS_BAND_MIN_HEIGHT: f32 = 140.0;

/// Fraction of the strip width taken by the logo column
pub const LOGO_COLUMN_RATIO: f32 = 0.42;

/// Fraction of the strip width at which split-column bands divide
pub const SPLIT_COLUMN_RATIO: f32 = 0.62;

/// Line width for cell borders and the viewport frame
pub const THIN_LINE_WIDTH: f32 = 0.8;

/// Line width for band separator lines
pub const BAND_LINE_WIDTH: f32 = 0.9;

/// Line width for the title block outer frame
pub const FRAME_LINE_WIDTH: f32 = 1.0;

/// Label font size in plain cells
pub const CELL_LABEL_FONT_SIZE: f32 = 8.8;

/// Label font size in wrapped cells
pub const WRAPPED_CELL_LABEL_FONT_SIZE: f32 = 9.0;

/// Value font size in plain cells
pub const CELL_VALUE_FONT_SIZE: f32 = 9.2;

/// Value font size in the comments cell
pub const COMMENTS_FONT_SIZE: f32 = 9.0;

/// Value font size in the drawing title cell
pub const TITLE_FONT_SIZE: f32 = 12.0;

/// Minimum leading between value lines in cells
pub const MIN_CELL_LEADING: f32 = 11.0;

/// Default character width ratio for text estimation
/// (average character width as a fraction of font size)
pub const DEFAULT_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Default resolution for rasterizing source PDF pages
pub const DEFAULT_RENDER_DPI: f32 = 220.0;
