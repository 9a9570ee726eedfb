//! Re-sheet an existing PDF: every page of the input becomes one titled
//! sheet. Requires the `pdfium` feature and a system pdfium library.
//!
//! Usage: pdf_pack <input.pdf> [output.pdf]

use drawpack::{
    DEFAULT_RENDER_DPI, ExportSettings, PdfiumRasterizer, SheetOverride, TitleBlock,
    build_sheet_plan, export_sheet_plan_to_pdf,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().ok_or("usage: pdf_pack <input.pdf> [output.pdf]")?);
    let output = args.next().unwrap_or_else(|| "pdf_pack.pdf".to_string());

    let rasterizer = PdfiumRasterizer::new()?;

    let overrides: BTreeMap<String, SheetOverride> = BTreeMap::new();
    let plan = build_sheet_plan(&[input], &overrides, &rasterizer);

    let title_block = TitleBlock {
        issuer_company: "Acme Engineering Ltd".to_string(),
        project: "Re-sheeted pack".to_string(),
        ..Default::default()
    };

    export_sheet_plan_to_pdf(
        &plan,
        &output,
        &title_block,
        &ExportSettings::default(),
        &rasterizer,
        DEFAULT_RENDER_DPI,
    )?;

    println!("PDF saved as '{output}'");
    Ok(())
}
