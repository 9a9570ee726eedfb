//! Sheet plan building from a raw file list
//!
//! One sheet per image file, one sheet per source PDF page. Labels are
//! stable across rebuilds so per-sheet overrides survive reordering and
//! re-adding files.

use crate::model::{SheetOverride, SheetPlanItem};
use crate::raster::PageRasterizer;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

/// File extensions treated as raster image sources
pub const IMAGE_EXTS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// Build a sheet plan from an ordered file list.
///
/// PDF page counts come from the rasterizer; a PDF that cannot be opened
/// contributes zero sheets rather than failing the rebuild. Files with
/// unrecognized extensions are skipped. Overrides are applied by
/// `source_label`.
pub fn build_sheet_plan(
    files: &[PathBuf],
    overrides: &BTreeMap<String, SheetOverride>,
    rasterizer: &dyn PageRasterizer,
) -> Vec<SheetPlanItem> {
    let mut plan = Vec::new();

    for path in files {
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if ext == "pdf" {
            let count = match rasterizer.page_count(path) {
                Ok(count) => count,
                Err(err) => {
                    debug!("could not count pages of {}: {err}", path.display());
                    0
                }
            };
            for i in 0..count {
                let label = format!("{base} - Page {}", i + 1);
                let mut item = SheetPlanItem::pdf_page(path.clone(), label, i);
                apply_override(&mut item, overrides);
                plan.push(item);
            }
        } else if IMAGE_EXTS.contains(&ext.as_str()) {
            let mut item = SheetPlanItem::image(path.clone(), base);
            apply_override(&mut item, overrides);
            plan.push(item);
        } else {
            debug!("skipping unsupported file {}", path.display());
        }
    }

    debug!("built sheet plan with {} sheet(s)", plan.len());
    plan
}

fn apply_override(item: &mut SheetPlanItem, overrides: &BTreeMap<String, SheetOverride>) {
    if let Some(prev) = overrides.get(&item.source_label) {
        item.drawing_title = prev.drawing_title.clone();
        item.comments = prev.comments.clone();
    }
}
