//! PDF page rasterization boundary
//!
//! Turning a source PDF page into a raster needs a real document renderer,
//! so the core only depends on the [`PageRasterizer`] trait and callers
//! inject an implementation. The pdfium-render backed implementation is
//! available behind the `pdfium` cargo feature.

use crate::Result;
use crate::constants::DEFAULT_RENDER_DPI;
use crate::error::PackError;
use image::DynamicImage;
use std::path::Path;

/// Injected capability for inspecting and rasterizing source PDFs
pub trait PageRasterizer {
    /// Number of pages in the document
    fn page_count(&self, pdf_path: &Path) -> Result<usize>;

    /// Render one page into a raster at the given resolution.
    ///
    /// `dpi <= 0` is normalized to the default of 220. A `page_index` outside
    /// `0..page_count` fails with [`PackError::PageOutOfRange`].
    fn rasterize_page(&self, pdf_path: &Path, page_index: usize, dpi: f32)
    -> Result<DynamicImage>;
}

/// Normalize a requested render resolution
pub fn normalize_dpi(dpi: f32) -> f32 {
    if dpi <= 0.0 { DEFAULT_RENDER_DPI } else { dpi }
}

/// A rasterizer for plans without PDF sheets; any PDF sheet fails the export
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRasterizer;

impl PageRasterizer for NoopRasterizer {
    fn page_count(&self, pdf_path: &Path) -> Result<usize> {
        Err(PackError::Raster(format!(
            "no rasterizer available for {}",
            pdf_path.display()
        )))
    }

    fn rasterize_page(
        &self,
        pdf_path: &Path,
        _page_index: usize,
        _dpi: f32,
    ) -> Result<DynamicImage> {
        Err(PackError::Raster(format!(
            "no rasterizer available for {}",
            pdf_path.display()
        )))
    }
}

/// Pdfium-backed rasterizer bound to the system pdfium library
#[cfg(feature = "pdfium")]
pub struct PdfiumRasterizer {
    pdfium: pdfium_render::prelude::Pdfium,
}

#[cfg(feature = "pdfium")]
impl PdfiumRasterizer {
    /// Bind to the system pdfium library
    pub fn new() -> Result<Self> {
        use pdfium_render::prelude::Pdfium;

        let binding = Pdfium::bind_to_system_library()
            .map_err(|e| PackError::Raster(format!("failed to bind pdfium: {e}")))?;
        Ok(Self {
            pdfium: Pdfium::new(binding),
        })
    }
}

#[cfg(feature = "pdfium")]
impl PageRasterizer for PdfiumRasterizer {
    fn page_count(&self, pdf_path: &Path) -> Result<usize> {
        let document = self
            .pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| PackError::Raster(format!("failed to open {}: {e}", pdf_path.display())))?;
        Ok(document.pages().len() as usize)
    }

    fn rasterize_page(
        &self,
        pdf_path: &Path,
        page_index: usize,
        dpi: f32,
    ) -> Result<DynamicImage> {
        use pdfium_render::prelude::PdfRenderConfig;

        let dpi = normalize_dpi(dpi);

        let document = self
            .pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| PackError::Raster(format!("failed to open {}: {e}", pdf_path.display())))?;

        let count = document.pages().len() as usize;
        if page_index >= count {
            return Err(PackError::PageOutOfRange {
                path: pdf_path.display().to_string(),
                index: page_index,
                count,
            });
        }

        let page = document
            .pages()
            .get(page_index as u16)
            .map_err(|e| PackError::Raster(format!("failed to load page {page_index}: {e}")))?;

        let target_width = (page.width().value * dpi / 72.0).round() as i32;
        let config = PdfRenderConfig::new().set_target_width(target_width);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| PackError::Raster(format!("failed to render page {page_index}: {e}")))?;

        Ok(DynamicImage::ImageRgb8(bitmap.as_image().into_rgb8()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpi_normalization() {
        assert_eq!(normalize_dpi(0.0), DEFAULT_RENDER_DPI);
        assert_eq!(normalize_dpi(-72.0), DEFAULT_RENDER_DPI);
        assert_eq!(normalize_dpi(150.0), 150.0);
    }

    #[test]
    fn test_noop_rasterizer_refuses_pdfs() {
        let raster = NoopRasterizer;
        assert!(raster.page_count(Path::new("a.pdf")).is_err());
        assert!(raster.rasterize_page(Path::new("a.pdf"), 0, 220.0).is_err());
    }
}
