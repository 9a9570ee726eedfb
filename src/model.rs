//! Data model: title block fields, export settings and the sheet plan

use crate::constants::{DEFAULT_HEADER_HEIGHT, DEFAULT_PAGE_MARGIN, DEFAULT_TITLE_BLOCK_WIDTH};
use crate::error::PackError;
use crate::fit::FitMode;
use crate::template::DEFAULT_TEMPLATE;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Title block fields constant across the whole pack.
///
/// All fields default to empty; empty cells still render their border and
/// label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleBlock {
    pub issuer_company: String,
    /// Optional path to a PNG/JPG logo; empty or unreadable paths render an
    /// empty logo box
    pub logo_path: String,
    pub project: String,
    pub client: String,
    pub drawing_number: String,
    pub revision: String,
    pub date: String,
    pub drawn_by: String,
    pub checked_by: String,
    pub approved_by: String,
}

/// Immutable settings for one export run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub template_name: String,
    pub fit_mode: FitMode,
    pub page_margin_pt: f32,
    pub title_block_width_pt: f32,
    pub header_height_pt: f32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            template_name: DEFAULT_TEMPLATE.to_string(),
            fit_mode: FitMode::Fit,
            page_margin_pt: DEFAULT_PAGE_MARGIN,
            title_block_width_pt: DEFAULT_TITLE_BLOCK_WIDTH,
            header_height_pt: DEFAULT_HEADER_HEIGHT,
        }
    }
}

/// What kind of source a sheet is produced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetKind {
    /// A raster image file
    Image,
    /// One page of a source PDF, selected by `pdf_page_index`
    Pdf,
}

/// One output sheet of the pack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetPlanItem {
    pub kind: SheetKind,
    pub source_path: PathBuf,
    /// Display key, stable across plan rebuilds (eg "file.pdf - Page 3")
    pub source_label: String,
    /// 0-based page index, set iff `kind == Pdf`
    pub pdf_page_index: Option<usize>,
    pub drawing_title: String,
    pub comments: String,
}

impl SheetPlanItem {
    /// Sheet backed by an image file
    pub fn image(source_path: impl Into<PathBuf>, source_label: impl Into<String>) -> Self {
        Self {
            kind: SheetKind::Image,
            source_path: source_path.into(),
            source_label: source_label.into(),
            pdf_page_index: None,
            drawing_title: String::new(),
            comments: String::new(),
        }
    }

    /// Sheet backed by one page of a source PDF
    pub fn pdf_page(
        source_path: impl Into<PathBuf>,
        source_label: impl Into<String>,
        page_index: usize,
    ) -> Self {
        Self {
            kind: SheetKind::Pdf,
            source_path: source_path.into(),
            source_label: source_label.into(),
            pdf_page_index: Some(page_index),
            drawing_title: String::new(),
            comments: String::new(),
        }
    }

    /// Check the kind/page-index invariant
    pub fn validate(&self) -> Result<()> {
        match (self.kind, self.pdf_page_index) {
            (SheetKind::Pdf, None) => Err(PackError::InvalidPlan(format!(
                "PDF sheet plan item missing pdf_page_index: {}",
                self.source_label
            ))),
            (SheetKind::Image, Some(_)) => Err(PackError::InvalidPlan(format!(
                "image sheet plan item carries a pdf_page_index: {}",
                self.source_label
            ))),
            _ => Ok(()),
        }
    }
}

/// Per-sheet override fields, keyed by `source_label` when carried across
/// plan rebuilds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetOverride {
    pub drawing_title: String,
    pub comments: String,
}

/// The per-sheet record the renderer consumes: global fields merged with the
/// sheet's title and comments. Created and discarded per sheet; the global
/// [`TitleBlock`] is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedTitleBlock {
    pub issuer_company: String,
    pub logo_path: String,
    pub project: String,
    pub client: String,
    pub drawing_number: String,
    pub revision: String,
    pub date: String,
    pub drawn_by: String,
    pub checked_by: String,
    pub approved_by: String,
    pub drawing_title: String,
    pub comments: String,
}

/// Merge the global title block with one sheet's overrides.
///
/// A blank per-sheet title defaults to the basename of `source_label` with
/// its file extension stripped; a dot-suffix only counts as an extension when
/// it is plausibly one (non-empty, alphanumeric, after a non-empty stem).
pub fn compose_title_block(global: &TitleBlock, item: &SheetPlanItem) -> ComposedTitleBlock {
    let title = item.drawing_title.trim();
    let drawing_title = if title.is_empty() {
        default_title_from_label(&item.source_label)
    } else {
        title.to_string()
    };

    ComposedTitleBlock {
        issuer_company: global.issuer_company.clone(),
        logo_path: global.logo_path.clone(),
        project: global.project.clone(),
        client: global.client.clone(),
        drawing_number: global.drawing_number.clone(),
        revision: global.revision.clone(),
        date: global.date.clone(),
        drawn_by: global.drawn_by.clone(),
        checked_by: global.checked_by.clone(),
        approved_by: global.approved_by.clone(),
        drawing_title,
        comments: item.comments.trim().to_string(),
    }
}

/// Default drawing title derived from a source label
pub fn default_title_from_label(label: &str) -> String {
    let base = Path::new(label)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(label);

    match base.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty() && !ext.is_empty() && ext.chars().all(|c| c.is_alphanumeric()) =>
        {
            stem.to_string()
        }
        _ => base.to_string(),
    }
}
