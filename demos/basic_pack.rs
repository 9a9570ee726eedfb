//! Basic drawing pack example: two generated images onto A3 landscape sheets

use drawpack::{
    ExportSettings, NoopRasterizer, SheetPlanItem, TitleBlock, export_sheet_plan_to_pdf,
};
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let dir = std::env::temp_dir();

    // Generate two placeholder drawings
    let plan_png = dir.join("demo_plan.png");
    RgbImage::from_fn(640, 480, |x, y| {
        if x % 64 < 2 || y % 64 < 2 {
            Rgb([40, 40, 40])
        } else {
            Rgb([235, 235, 235])
        }
    })
    .save(&plan_png)?;

    let elevation_png = dir.join("demo_elevation.png");
    RgbImage::from_fn(480, 640, |x, y| {
        Rgb([(x / 3) as u8, (y / 3) as u8, 180])
    })
    .save(&elevation_png)?;

    let mut plan_sheet = SheetPlanItem::image(&plan_png, "demo_plan.png");
    plan_sheet.comments = "Grid at 1m centres. Do not scale from this drawing.".to_string();

    let mut elevation_sheet = SheetPlanItem::image(&elevation_png, "demo_elevation.png");
    elevation_sheet.drawing_title = "South Elevation".to_string();

    let title_block = TitleBlock {
        issuer_company: "Acme Engineering Ltd".to_string(),
        project: "Riverside Footbridge".to_string(),
        client: "Borough Council".to_string(),
        drawing_number: "AE-1042".to_string(),
        revision: "B".to_string(),
        date: "2025-06-14".to_string(),
        drawn_by: "OR".to_string(),
        checked_by: "KL".to_string(),
        approved_by: "MB".to_string(),
        ..Default::default()
    };

    export_sheet_plan_to_pdf(
        &[plan_sheet, elevation_sheet],
        "basic_pack.pdf",
        &title_block,
        &ExportSettings::default(),
        &NoopRasterizer,
        220.0,
    )?;

    println!("PDF saved as 'basic_pack.pdf'");
    Ok(())
}
