//! Full export round-trips: compose packs, save them, re-read with lopdf

use drawpack::{
    ExportSettings, NoopRasterizer, PackError, PageRasterizer, Result, SheetPlanItem, TitleBlock,
    export_sheet_plan_to_pdf,
};
use image::{DynamicImage, Rgb, RgbImage};
use lopdf::{Document, Object};
use std::path::{Path, PathBuf};

fn write_test_png(dir: &Path, name: &str, w: u32, h: u32) -> PathBuf {
    let img = RgbImage::from_fn(w, h, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

fn page_ids(doc: &Document) -> Vec<lopdf::ObjectId> {
    doc.get_pages().values().copied().collect()
}

fn media_box(doc: &Document, page_id: lopdf::ObjectId) -> (f32, f32) {
    let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let mb = page.get(b"MediaBox").unwrap().as_array().unwrap();
    let num = |obj: &Object| match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r,
        _ => panic!("MediaBox entry is not a number"),
    };
    (num(&mb[2]), num(&mb[3]))
}

#[test]
fn exports_one_page_per_image_sheet_at_template_size() {
    let dir = tempfile::tempdir().unwrap();
    let png = write_test_png(dir.path(), "plan.png", 320, 200);

    let plan = vec![
        SheetPlanItem::image(&png, "plan.png"),
        SheetPlanItem::image(&png, "elevation.png"),
        SheetPlanItem::image(&png, "section.png"),
    ];
    let out = dir.path().join("pack.pdf");

    export_sheet_plan_to_pdf(
        &plan,
        &out,
        &TitleBlock::default(),
        &ExportSettings::default(),
        &NoopRasterizer,
        220.0,
    )
    .unwrap();

    let doc = Document::load(&out).unwrap();
    let pages = page_ids(&doc);
    assert_eq!(pages.len(), 3);

    // default template is A3 landscape
    for &page_id in &pages {
        let (w, h) = media_box(&doc, page_id);
        assert_eq!((w, h), (1191.0, 842.0));
    }
}

#[test]
fn sheet_numbering_counts_across_the_pack() {
    let dir = tempfile::tempdir().unwrap();
    let png = write_test_png(dir.path(), "a.png", 100, 80);

    let plan: Vec<_> = (0..3)
        .map(|i| SheetPlanItem::image(&png, format!("sheet{i}.png")))
        .collect();
    let out = dir.path().join("numbered.pdf");

    export_sheet_plan_to_pdf(
        &plan,
        &out,
        &TitleBlock::default(),
        &ExportSettings::default(),
        &NoopRasterizer,
        220.0,
    )
    .unwrap();

    let doc = Document::load(&out).unwrap();
    let pages = page_ids(&doc);
    let second = String::from_utf8_lossy(&doc.get_page_content(pages[1]).unwrap()).into_owned();
    assert!(second.contains("(2 of 3)"), "missing sheet cell text");
    assert!(!second.contains("(1 of 3)"));
}

#[test]
fn document_title_is_the_output_basename() {
    let dir = tempfile::tempdir().unwrap();
    let png = write_test_png(dir.path(), "a.png", 100, 80);
    let out = dir.path().join("bridge-pack.pdf");

    export_sheet_plan_to_pdf(
        &[SheetPlanItem::image(&png, "a.png")],
        &out,
        &TitleBlock::default(),
        &ExportSettings::default(),
        &NoopRasterizer,
        220.0,
    )
    .unwrap();

    let doc = Document::load(&out).unwrap();
    let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = doc.get_object(info_id).unwrap().as_dict().unwrap();
    let title = match info.get(b"Title").unwrap() {
        Object::String(bytes, _) => bytes.as_slice(),
        other => panic!("Title is not a string: {other:?}"),
    };
    assert_eq!(title, b"bridge-pack.pdf");
}

#[test]
fn per_sheet_titles_and_template_selection_apply() {
    let dir = tempfile::tempdir().unwrap();
    let png = write_test_png(dir.path(), "a.png", 100, 80);
    let out = dir.path().join("titled.pdf");

    let mut item = SheetPlanItem::image(&png, "a.png");
    item.drawing_title = "Deck Framing".to_string();
    let settings = ExportSettings {
        template_name: "A4_Portrait".to_string(),
        ..Default::default()
    };

    export_sheet_plan_to_pdf(
        &[item],
        &out,
        &TitleBlock::default(),
        &settings,
        &NoopRasterizer,
        220.0,
    )
    .unwrap();

    let doc = Document::load(&out).unwrap();
    let pages = page_ids(&doc);
    assert_eq!(media_box(&doc, pages[0]), (595.0, 842.0));

    let content = String::from_utf8_lossy(&doc.get_page_content(pages[0]).unwrap()).into_owned();
    assert!(content.contains("(Deck Framing)"));
}

#[test]
fn empty_plan_aborts_without_an_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.pdf");

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

/// Rasterizer stub: a fixed-size blank page for any in-range index
struct BlankPages {
    count: usize,
}

impl PageRasterizer for BlankPages {
    fn page_count(&self, _pdf_path: &Path) -> Result<usize> {
        Ok(self.count)
    }

    fn rasterize_page(
        &self,
        pdf_path: &Path,
        page_index: usize,
        _dpi: f32,
    ) -> Result<DynamicImage> {
        if page_index >= self.count {
            return Err(PackError::PageOutOfRange {
                path: pdf_path.display().to_string(),
                index: page_index,
                count: self.count,
            });
        }
        Ok(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            200,
            150,
            Rgb([255, 255, 255]),
        )))
    }
}

#[test]
fn pdf_sheets_render_through_the_injected_rasterizer() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("from-pdf.pdf");

    let plan = vec![
        SheetPlanItem::pdf_page("spec.pdf", "spec.pdf - Page 1", 0),
        SheetPlanItem::pdf_page("spec.pdf", "spec.pdf - Page 2", 1),
    ];

    export_sheet_plan_to_pdf(
        &plan,
        &out,
        &TitleBlock::default(),
        &ExportSettings::default(),
        &BlankPages { count: 2 },
        220.0,
    )
    .unwrap();

    let doc = Document::load(&out).unwrap();
    assert_eq!(page_ids(&doc).len(), 2);
}

#[test]
fn out_of_range_page_index_aborts_the_whole_export() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("aborted.pdf");

    let plan = vec![
        SheetPlanItem::pdf_page("spec.pdf", "spec.pdf - Page 1", 0),
        SheetPlanItem::pdf_page("spec.pdf", "spec.pdf - Page 9", 8),
    ];

    let err = export_sheet_plan_to_pdf(
        &plan,
        &out,
        &TitleBlock::default(),
        &ExportSettings::default(),
        &BlankPages { count: 2 },
        220.0,
    )
    .unwrap_err();

    assert!(matches!(err, PackError::PageOutOfRange { index: 8, .. }));
    assert!(!out.exists(), "partial output must not be retained");
}
