//! An engineering drawing pack composer for PDFs built on lopdf
//!
//! Each source — a raster image or one page of a source PDF — becomes one
//! output sheet: a bordered viewport with the source fitted inside it and an
//! ISO-style title block strip along the right edge carrying the pack's
//! metadata (issuer, project, client, logo, drawing title, number, revision,
//! date, comments, sign-off and sheet numbering).
//!
//! ```no_run
//! use drawpack::{
//!     ExportSettings, NoopRasterizer, SheetPlanItem, TitleBlock, export_sheet_plan_to_pdf,
//! };
//!
//! # fn main() -> drawpack::Result<()> {
//! let plan = vec![
//!     SheetPlanItem::image("site/plan.png", "plan.png"),
//!     SheetPlanItem::image("site/elevation.png", "elevation.png"),
//! ];
//! let title_block = TitleBlock {
//!     issuer_company: "Acme Engineering".into(),
//!     project: "Footbridge".into(),
//!     ..Default::default()
//! };
//! export_sheet_plan_to_pdf(
//!     &plan,
//!     "pack.pdf",
//!     &title_block,
//!     &ExportSettings::default(),
//!     &NoopRasterizer,
//!     220.0,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod drawing;
pub mod error;
pub mod export;
pub mod fit;
pub mod font;
pub mod job;
pub mod model;
pub mod plan;
pub mod raster;
pub mod sheet;
pub mod style;
pub mod template;
pub mod text;
pub mod titleblock;

pub use constants::DEFAULT_RENDER_DPI;
pub use error::{PackError, Result};
pub use export::export_sheet_plan_to_pdf;
pub use fit::{FitMode, Rect, place_image};
pub use font::{Font, FontMetrics, HeuristicMetrics};
#[cfg(feature = "ttf-parser")]
pub use font::TtfFontMetrics;
pub use job::{JOB_FILE_VERSION, JobFile, load_job, save_job};
pub use model::{
    ComposedTitleBlock, ExportSettings, SheetKind, SheetOverride, SheetPlanItem, TitleBlock,
    compose_title_block,
};
pub use plan::build_sheet_plan;
pub use raster::{NoopRasterizer, PageRasterizer, normalize_dpi};
#[cfg(feature = "pdfium")]
pub use raster::PdfiumRasterizer;
pub use style::VerticalAlignment;
pub use template::{SheetTemplate, get_template, template_names};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_items_compose_into_render_records() {
        let global = TitleBlock {
            project: "Footbridge".into(),
            ..Default::default()
        };
        let item = SheetPlanItem::image("a.png", "plan.png");
        let composed = compose_title_block(&global, &item);
        assert_eq!(composed.project, "Footbridge");
        assert_eq!(composed.drawing_title, "plan");
    }
}
