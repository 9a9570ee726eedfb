//! Per-sheet rendering: viewport frame, fitted source image, title block

use crate::Result;
use crate::constants::{THIN_LINE_WIDTH, VIEWPORT_INNER_PAD};
use crate::drawing::{add_operations_to_page, image_ops, rect_stroke_ops, stroke_style_ops};
use crate::fit::{Rect, place_image};
use crate::font::FontMetrics;
use crate::model::{ComposedTitleBlock, ExportSettings};
use crate::style::Color;
use crate::titleblock::title_block_operations;
use image::DynamicImage;
use lopdf::{Document, ObjectId};
use std::path::PathBuf;
use tracing::{debug, trace};

/// The drawable content of one sheet.
///
/// Image sheets reference their file on disk; PDF sheets carry the raster
/// produced for this sheet only, dropped as soon as the page is finalized.
#[derive(Debug)]
pub enum SheetSource {
    Path(PathBuf),
    Raster(DynamicImage),
}

impl SheetSource {
    /// Natural pixel dimensions of the source
    pub fn natural_size(&self) -> Result<(f32, f32)> {
        match self {
            SheetSource::Path(path) => {
                let (w, h) = image::image_dimensions(path)?;
                Ok((w as f32, h as f32))
            }
            SheetSource::Raster(img) => Ok((img.width() as f32, img.height() as f32)),
        }
    }

    /// Encoded bytes suitable for embedding as an image XObject
    fn encoded_bytes(&self) -> Result<Vec<u8>> {
        match self {
            SheetSource::Path(path) => Ok(std::fs::read(path)?),
            SheetSource::Raster(img) => {
                let mut buf = Vec::new();
                img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)?;
                Ok(buf)
            }
        }
    }
}

/// The bordered area the source content is fitted into: full page minus
/// margins, minus the title block strip on the right, minus any reserved
/// header height at the top.
pub fn viewport_rect(settings: &ExportSettings, page_w: f32, page_h: f32) -> Rect {
    let margin = settings.page_margin_pt;
    Rect::new(
        margin,
        margin,
        page_w - margin * 2.0 - settings.title_block_width_pt,
        page_h - margin * 2.0 - settings.header_height_pt,
    )
}

/// Render one sheet onto `page_id`: viewport frame, fitted image, title
/// block. Appends a single content stream to the page.
#[allow(clippy::too_many_arguments)]
pub fn render_sheet(
    doc: &mut Document,
    page_id: ObjectId,
    source: &SheetSource,
    tb: &ComposedTitleBlock,
    settings: &ExportSettings,
    page_w: f32,
    page_h: f32,
    sheet_no: usize,
    sheet_total: usize,
    metrics: &dyn FontMetrics,
) -> Result<()> {
    debug!("rendering sheet {sheet_no} of {sheet_total}");

    let viewport = viewport_rect(settings, page_w, page_h);

    let mut ops = Vec::new();
    ops.extend(stroke_style_ops(Color::black(), THIN_LINE_WIDTH));
    ops.extend(rect_stroke_ops(viewport));

    let natural = source.natural_size()?;
    match place_image(natural, viewport, settings.fit_mode, VIEWPORT_INNER_PAD) {
        Some(placed) => {
            trace!("placing {natural:?} source at {placed:?}");
            let stream = lopdf::xobject::image_from(source.encoded_bytes()?)?;
            let xobject_id = doc.add_object(stream);
            doc.add_xobject(page_id, "Im0", xobject_id)?;
            ops.extend(image_ops("Im0", placed));
        }
        None => {
            debug!("skipping degenerate source image {natural:?}");
        }
    }

    ops.extend(title_block_operations(
        doc,
        page_id,
        tb,
        settings,
        page_w,
        page_h,
        sheet_no,
        sheet_total,
        metrics,
    )?);

    add_operations_to_page(doc, page_id, ops)
}
