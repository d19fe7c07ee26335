use crate::{
    config::LayoutConfig,
    error::Result,
    info::DocumentInfo,
    layout::{annotate_footers, paginate, parse_blocks, Cover},
    measure::TextMeasurer,
    page::Page,
};
use serde::{Deserialize, Serialize};

/// The output of layout: every page with its positioned lines, ready for a
/// renderer to draw without making any further layout decisions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub pages: Vec<Page>,
    /// Number of pages, fixed once pagination completes
    pub total_pages: usize,
    #[serde(default)]
    footers_applied: bool,
}

impl LayoutResult {
    pub(crate) fn new(pages: Vec<Page>) -> LayoutResult {
        let total_pages = pages.len();
        LayoutResult {
            pages,
            total_pages,
            footers_applied: false,
        }
    }

    /// Whether the footer pass has already run on this result
    pub fn has_footers(&self) -> bool {
        self.footers_applied
    }

    pub(crate) fn mark_footers_applied(&mut self) {
        self.footers_applied = true;
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Lay out a whole document: parse `source` into blocks, place the cover
/// header if the configuration has one, paginate, then stamp every page with
/// its footer.
///
/// Each call owns all of its state, so separate documents can be laid out on
/// separate threads as long as the measurer can be shared.
pub fn layout_document<M: TextMeasurer + ?Sized>(
    source: &str,
    info: &DocumentInfo,
    config: &LayoutConfig,
    measurer: &M,
) -> Result<LayoutResult> {
    config.validate()?;

    let blocks = parse_blocks(source);
    let cover = config
        .cover
        .as_ref()
        .map(|cover| Cover::new(info, cover, config, measurer))
        .transpose()?;

    let result = paginate(&blocks, config, measurer, cover.as_ref())?;
    log::debug!("laid out {} blocks onto {} pages", blocks.len(), result.total_pages);

    annotate_footers(result, info, config, measurer)
}
