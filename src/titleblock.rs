//! ISO-style title block layout and rendering
//!
//! The title block is a fixed-width vertical strip anchored to the right
//! margin, partitioned bottom-to-top into five bands: sign-off, comments,
//! info, drawing title and the issuer/logo top band. The comments band
//! absorbs all leftover height.

use crate::Result;
use crate::constants::*;
use crate::drawing::{line_ops, rect_stroke_ops, stroke_style_ops};
use crate::fit::{FitMode, Rect, place_image};
use crate::font::{Font, FontMetrics};
use crate::model::{ComposedTitleBlock, ExportSettings};
use crate::style::{Color, VerticalAlignment};
use crate::text::wrapped_text_operations;
use lopdf::{Document, Object, ObjectId, content::Operation};
use tracing::{debug, trace};

/// Vertical partition of the strip, bottom-to-top.
///
/// `y0..y5` are the band boundary ordinates: sign-off spans `y0..y1`,
/// comments `y1..y2`, info `y2..y3`, drawing title `y3..y4` and the top band
/// `y4..y5`. When the four fixed bands exceed the strip height the comments
/// band keeps its floor and the strip overflows the page; this is accepted
/// and not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleBlockBands {
    pub y0: f32,
    pub y1: f32,
    pub y2: f32,
    pub y3: f32,
    pub y4: f32,
    pub y5: f32,
    pub comments_h: f32,
    pub top_h: f32,
}

impl TitleBlockBands {
    /// Partition a strip starting at `strip_y` with height `strip_h`
    pub fn partition(strip_y: f32, strip_h: f32) -> Self {
        let top_h = TOP_BAND_MIN_HEIGHT.max(strip_h * TOP_BAND_RATIO);
        let fixed = SIGN_BAND_HEIGHT + INFO_BAND_HEIGHT + TITLE_BAND_HEIGHT + top_h;
        let comments_h = COMMENTS_BAND_MIN_HEIGHT.max(strip_h - fixed);

        let y0 = strip_y;
        let y1 = y0 + SIGN_BAND_HEIGHT;
        let y2 = y1 + comments_h;
        let y3 = y2 + INFO_BAND_HEIGHT;
        let y4 = y3 + TITLE_BAND_HEIGHT;
        let y5 = strip_y + strip_h;

        Self {
            y0,
            y1,
            y2,
            y3,
            y4,
            y5,
            comments_h,
            top_h,
        }
    }
}

/// Generate the full title block for one sheet.
///
/// Needs the document because the logo (if any) is embedded as an image
/// XObject in the page's resources; all drawing is returned as operations for
/// the caller's single content stream.
#[allow(clippy::too_many_arguments)]
pub fn title_block_operations(
    doc: &mut Document,
    page_id: ObjectId,
    tb: &ComposedTitleBlock,
    settings: &ExportSettings,
    page_w: f32,
    page_h: f32,
    sheet_no: usize,
    sheet_total: usize,
    metrics: &dyn FontMetrics,
) -> Result<Vec<Operation>> {
    let margin = settings.page_margin_pt;
    let tb_w = settings.title_block_width_pt;
    let tb_x = page_w - margin - tb_w;
    let tb_y = margin;
    let tb_h = page_h - 2.0 * margin;

    let bands = TitleBlockBands::partition(tb_y, tb_h);
    trace!("title block bands: {:?}", bands);

    let mut ops = Vec::new();

    // Outer frame
    ops.extend(stroke_style_ops(Color::black(), FRAME_LINE_WIDTH));
    ops.extend(rect_stroke_ops(Rect::new(tb_x, tb_y, tb_w, tb_h)));

    // Band separators
    ops.extend(stroke_style_ops(Color::black(), BAND_LINE_WIDTH));
    for yy in [bands.y1, bands.y2, bands.y3, bands.y4] {
        ops.extend(line_ops(tb_x, yy, tb_x + tb_w, yy));
    }

    let pad = CELL_PAD;

    // Top band: issuer/project/client stacked left, logo box right
    let logo_col_w = tb_w * LOGO_COLUMN_RATIO;
    let text_col_w = tb_w - logo_col_w;
    let logo_x = tb_x + text_col_w;

    ops.extend(stroke_style_ops(Color::black(), THIN_LINE_WIDTH));
    ops.extend(line_ops(logo_x, bands.y4, logo_x, bands.y5));

    let cell_h = bands.top_h / 3.0;
    ops.extend(labeled_cell_ops(
        Rect::new(tb_x, bands.y5 - cell_h, text_col_w, cell_h),
        "ISSUER",
        &tb.issuer_company,
        metrics,
    ));
    ops.extend(labeled_cell_ops(
        Rect::new(tb_x, bands.y5 - 2.0 * cell_h, text_col_w, cell_h),
        "PROJECT",
        &tb.project,
        metrics,
    ));
    ops.extend(labeled_cell_ops(
        Rect::new(tb_x, bands.y5 - 3.0 * cell_h, text_col_w, cell_h),
        "CLIENT",
        &tb.client,
        metrics,
    ));

    let logo_box = Rect::new(logo_x, bands.y4, logo_col_w, bands.top_h);
    ops.extend(rect_stroke_ops(logo_box));
    ops.extend(logo_ops(doc, page_id, &tb.logo_path, logo_box, pad)?);

    // Drawing title (per-sheet)
    ops.extend(wrapped_cell_ops(
        Rect::new(tb_x, bands.y3, tb_w, TITLE_BAND_HEIGHT),
        "DRAWING TITLE",
        &tb.drawing_title,
        Font::HelveticaBold,
        TITLE_FONT_SIZE,
        VerticalAlignment::Middle,
        metrics,
    ));

    // Info band: DWG NO + REV split column, DATE full width below
    let info_row_h = INFO_BAND_HEIGHT / 2.0;
    let col_split = tb_x + tb_w * SPLIT_COLUMN_RATIO;

    ops.extend(stroke_style_ops(Color::black(), THIN_LINE_WIDTH));
    ops.extend(line_ops(
        tb_x,
        bands.y2 + info_row_h,
        tb_x + tb_w,
        bands.y2 + info_row_h,
    ));
    ops.extend(line_ops(
        col_split,
        bands.y2 + info_row_h,
        col_split,
        bands.y3,
    ));

    ops.extend(labeled_cell_ops(
        Rect::new(tb_x, bands.y2 + info_row_h, col_split - tb_x, info_row_h),
        "DWG NO",
        &tb.drawing_number,
        metrics,
    ));
    ops.extend(labeled_cell_ops(
        Rect::new(
            col_split,
            bands.y2 + info_row_h,
            tb_x + tb_w - col_split,
            info_row_h,
        ),
        "REV",
        &tb.revision,
        metrics,
    ));
    ops.extend(labeled_cell_ops(
        Rect::new(tb_x, bands.y2, tb_w, info_row_h),
        "DATE",
        &tb.date,
        metrics,
    ));

    // Comments band (per-sheet, flexible height)
    ops.extend(wrapped_cell_ops(
        Rect::new(tb_x, bands.y1, tb_w, bands.comments_h),
        "COMMENTS / NOTES",
        &tb.comments,
        Font::Helvetica,
        COMMENTS_FONT_SIZE,
        VerticalAlignment::Top,
        metrics,
    ));

    // Sign-off band: 2x2 cells, sheet numbering bottom-right
    let sign_row_h = SIGN_BAND_HEIGHT / 2.0;
    let col_split2 = tb_x + tb_w * SPLIT_COLUMN_RATIO;

    ops.extend(stroke_style_ops(Color::black(), THIN_LINE_WIDTH));
    ops.extend(line_ops(
        tb_x,
        bands.y0 + sign_row_h,
        tb_x + tb_w,
        bands.y0 + sign_row_h,
    ));
    ops.extend(line_ops(col_split2, bands.y0, col_split2, bands.y1));

    ops.extend(labeled_cell_ops(
        Rect::new(tb_x, bands.y0 + sign_row_h, col_split2 - tb_x, sign_row_h),
        "DRAWN",
        &tb.drawn_by,
        metrics,
    ));
    ops.extend(labeled_cell_ops(
        Rect::new(tb_x, bands.y0, col_split2 - tb_x, sign_row_h),
        "CHECKED",
        &tb.checked_by,
        metrics,
    ));
    ops.extend(labeled_cell_ops(
        Rect::new(
            col_split2,
            bands.y0 + sign_row_h,
            tb_x + tb_w - col_split2,
            sign_row_h,
        ),
        "APPROVED",
        &tb.approved_by,
        metrics,
    ));
    ops.extend(labeled_cell_ops(
        Rect::new(col_split2, bands.y0, tb_x + tb_w - col_split2, sign_row_h),
        "SHEET",
        &format!("{sheet_no} of {sheet_total}"),
        metrics,
    ));

    Ok(ops)
}

/// A bordered cell with a bold label near the top and a centered value block.
///
/// Value lines beyond the cell's line budget are dropped silently.
fn labeled_cell_ops(
    rect: Rect,
    label: &str,
    value: &str,
    metrics: &dyn FontMetrics,
) -> Vec<Operation> {
    let mut ops = Vec::new();

    ops.extend(stroke_style_ops(Color::black(), THIN_LINE_WIDTH));
    ops.extend(rect_stroke_ops(rect));

    let label_y = rect.y + rect.h - (CELL_PAD + 9.0);
    ops.extend(label_ops(
        label,
        rect.x + CELL_PAD,
        label_y,
        CELL_LABEL_FONT_SIZE,
    ));

    let value_area_top = label_y - 6.0;
    let value_area_bottom = rect.y + CELL_PAD;
    let value_area_h = (value_area_top - value_area_bottom).max(1.0);

    let leading = MIN_CELL_LEADING.max(CELL_VALUE_FONT_SIZE.floor() + 2.0);
    ops.extend(wrapped_text_operations(
        value,
        rect.x + CELL_PAD,
        value_area_bottom,
        rect.w - 2.0 * CELL_PAD,
        value_area_h,
        Font::Helvetica,
        CELL_VALUE_FONT_SIZE,
        leading,
        VerticalAlignment::Middle,
        metrics,
    ));

    ops
}

/// A bordered cell whose value wraps over many lines with a chosen vertical
/// alignment (used by the drawing title and comments bands).
fn wrapped_cell_ops(
    rect: Rect,
    label: &str,
    value: &str,
    value_font: Font,
    value_size: f32,
    valign: VerticalAlignment,
    metrics: &dyn FontMetrics,
) -> Vec<Operation> {
    let mut ops = Vec::new();

    ops.extend(stroke_style_ops(Color::black(), THIN_LINE_WIDTH));
    ops.extend(rect_stroke_ops(rect));

    let label_y = rect.y + rect.h - (CELL_PAD + 10.0);
    ops.extend(label_ops(
        label,
        rect.x + CELL_PAD,
        label_y,
        WRAPPED_CELL_LABEL_FONT_SIZE,
    ));

    let value_area_top = label_y - 6.0;
    let value_area_bottom = rect.y + CELL_PAD;
    let value_area_h = (value_area_top - value_area_bottom).max(1.0);

    let leading = MIN_CELL_LEADING.max(value_size + 2.0);
    ops.extend(wrapped_text_operations(
        value,
        rect.x + CELL_PAD,
        value_area_bottom,
        rect.w - 2.0 * CELL_PAD,
        value_area_h,
        value_font,
        value_size,
        leading,
        valign,
        metrics,
    ));

    ops
}

/// Single bold label line
fn label_ops(label: &str, x: f32, y: f32, size: f32) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(Font::HelveticaBold.resource_name().as_bytes().to_vec()),
                size.into(),
            ],
        ),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new(
            "Tj",
            vec![Object::string_literal(label.trim().to_string())],
        ),
        Operation::new("ET", vec![]),
    ]
}

/// Fit the logo into its box, embedding it as an XObject on the page.
///
/// Every failure mode short of a document error (empty path, missing file,
/// undecodable image, degenerate dimensions) leaves the box empty.
fn logo_ops(
    doc: &mut Document,
    page_id: ObjectId,
    logo_path: &str,
    rect: Rect,
    pad: f32,
) -> Result<Vec<Operation>> {
    if logo_path.is_empty() {
        return Ok(Vec::new());
    }

    let (lw, lh) = match image::image_dimensions(logo_path) {
        Ok(dims) => dims,
        Err(err) => {
            debug!("skipping unreadable logo {logo_path}: {err}");
            return Ok(Vec::new());
        }
    };

    let Some(placed) = place_image((lw as f32, lh as f32), rect, FitMode::Fit, pad) else {
        return Ok(Vec::new());
    };

    let bytes = match std::fs::read(logo_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("skipping unreadable logo {logo_path}: {err}");
            return Ok(Vec::new());
        }
    };
    let stream = match lopdf::xobject::image_from(bytes) {
        Ok(stream) => stream,
        Err(err) => {
            debug!("skipping undecodable logo {logo_path}: {err}");
            return Ok(Vec::new());
        }
    };

    let xobject_id = doc.add_object(stream);
    doc.add_xobject(page_id, "Lg0", xobject_id)?;

    Ok(crate::drawing::image_ops("Lg0", placed))
}
