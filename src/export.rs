//! The export entry point: sheet plan in, finished PDF pack out

use crate::Result;
use crate::error::PackError;
use crate::font::{Font, HeuristicMetrics};
use crate::model::{ExportSettings, SheetKind, SheetPlanItem, TitleBlock, compose_title_block};
use crate::raster::PageRasterizer;
use crate::sheet::{SheetSource, render_sheet};
use crate::template::get_template;
use lopdf::{Document, Object, ObjectId, dictionary};
use std::path::Path;
use tracing::{debug, instrument};

/// Export a prepared sheet plan to a single PDF.
///
/// One page is emitted per plan entry, in plan order, sized to the selected
/// template. The document is assembled in memory and saved once after the
/// last sheet, so a failed export leaves no partial output file. `render_dpi`
/// applies to PDF sheets only; values `<= 0` fall back to the default of 220.
#[instrument(skip_all, fields(sheets = sheet_plan.len()))]
pub fn export_sheet_plan_to_pdf(
    sheet_plan: &[SheetPlanItem],
    output_path: impl AsRef<Path>,
    global_tb: &TitleBlock,
    settings: &ExportSettings,
    rasterizer: &dyn PageRasterizer,
    render_dpi: f32,
) -> Result<()> {
    let output_path = output_path.as_ref();

    if sheet_plan.is_empty() {
        return Err(PackError::EmptyPlan);
    }
    for item in sheet_plan {
        item.validate()?;
    }

    let tpl = get_template(&settings.template_name);
    let (page_w, page_h) = (tpl.page_width, tpl.page_height);
    debug!("exporting on {} ({page_w}x{page_h})", tpl.name);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Font::Helvetica.base_name(),
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Font::HelveticaBold.base_name(),
        "Encoding" => "WinAnsiEncoding",
    });

    let metrics = HeuristicMetrics;
    let total = sheet_plan.len();
    let mut kids: Vec<Object> = Vec::with_capacity(total);

    for (idx, item) in sheet_plan.iter().enumerate() {
        let sheet_no = idx + 1;

        // The raster for a PDF sheet lives only for this iteration
        let source = sheet_item_to_source(item, rasterizer, render_dpi)?;
        let composed = compose_title_block(global_tb, item);

        let page_id = new_sheet_page(&mut doc, pages_id, page_w, page_h, font_id, font_bold_id);
        kids.push(page_id.into());

        render_sheet(
            &mut doc, page_id, &source, &composed, settings, page_w, page_h, sheet_no, total,
            &metrics,
        )?;
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => total as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let title = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(title),
    });
    doc.trailer.set("Info", info_id);

    doc.save(output_path)?;
    debug!("saved {total} sheet(s)");
    Ok(())
}

/// Resolve a plan item to its drawable source
fn sheet_item_to_source(
    item: &SheetPlanItem,
    rasterizer: &dyn PageRasterizer,
    render_dpi: f32,
) -> Result<SheetSource> {
    match item.kind {
        SheetKind::Image => Ok(SheetSource::Path(item.source_path.clone())),
        SheetKind::Pdf => {
            let page_index = item.pdf_page_index.ok_or_else(|| {
                PackError::InvalidPlan(format!(
                    "PDF sheet plan item missing pdf_page_index: {}",
                    item.source_label
                ))
            })?;
            let raster = rasterizer.rasterize_page(&item.source_path, page_index, render_dpi)?;
            Ok(SheetSource::Raster(raster))
        }
    }
}

/// Add one sheet page under `pages_id` with the shared font resources
fn new_sheet_page(
    doc: &mut Document,
    pages_id: ObjectId,
    page_w: f32,
    page_h: f32,
    font_id: ObjectId,
    font_bold_id: ObjectId,
) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), page_w.into(), page_h.into()],
        "Resources" => dictionary! {
            "Font" => dictionary! {
                Font::Helvetica.resource_name() => font_id,
                Font::HelveticaBold.resource_name() => font_bold_id,
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::NoopRasterizer;

    #[test]
    fn test_empty_plan_is_rejected_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pack.pdf");
        let err = export_sheet_plan_to_pdf(
            &[],
            &out,
            &TitleBlock::default(),
            &ExportSettings::default(),
            &NoopRasterizer,
            220.0,
        )
        .unwrap_err();
        assert!(matches!(err, PackError::EmptyPlan));
        assert!(!out.exists());
    }

    #[test]
    fn test_invalid_item_is_rejected_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pack.pdf");
        let mut item = SheetPlanItem::pdf_page("d.pdf", "d.pdf - Page 1", 0);
        item.pdf_page_index = None;
        let err = export_sheet_plan_to_pdf(
            &[item],
            &out,
            &TitleBlock::default(),
            &ExportSettings::default(),
            &NoopRasterizer,
            220.0,
        )
        .unwrap_err();
        assert!(matches!(err, PackError::InvalidPlan(_)));
        assert!(!out.exists());
    }
}
