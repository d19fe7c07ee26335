use super::wrap::truncate_to_width;
use crate::config::LayoutConfig;
use crate::document::LayoutResult;
use crate::error::Result;
use crate::info::DocumentInfo;
use crate::measure::TextMeasurer;
use crate::page::{PlacedLine, WrappedLine};
use crate::style::StyleId;

/// Append a `"<subject> - <type> | Page <n> of <total>"` footer to every page.
///
/// Runs after pagination, once the page count is final. Footers sit at a fixed
/// distance from the bottom page edge, below the bottom margin, and are never
/// wrapped: text wider than the content width is cut short with an ellipsis.
/// No existing line is moved. Annotating a result twice leaves it unchanged.
pub fn annotate_footers<M: TextMeasurer + ?Sized>(
    mut result: LayoutResult,
    info: &DocumentInfo,
    config: &LayoutConfig,
    measurer: &M,
) -> Result<LayoutResult> {
    config.validate()?;
    if result.has_footers() {
        log::warn!("footers already applied to {} pages, skipping", result.total_pages);
        return Ok(result);
    }

    let style = config.styles.get(StyleId::Footer);
    let width = config.page.content_width();
    let x = config.page.margins.left;
    let y = config.page.height - config.footer.offset_from_bottom;
    let total = result.total_pages;

    for page in result.pages.iter_mut() {
        let text = truncate_to_width(&info.footer_text(page.index, total), width, measurer, style)?;
        page.add_line(PlacedLine {
            x,
            y,
            line: WrappedLine {
                text,
                style: StyleId::Footer,
                block_index: None,
            },
        });
    }

    log::debug!("added footers to {total} pages");
    result.mark_footers_applied();
    Ok(result)
}
