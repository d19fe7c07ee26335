use super::block::{Block, BlockKind};
use super::cover::Cover;
use super::wrap::LineWrapper;
use crate::config::LayoutConfig;
use crate::document::LayoutResult;
use crate::error::Result;
use crate::measure::TextMeasurer;
use crate::page::{Page, PlacedLine, WrappedLine};
use crate::style::{StyleId, TextStyle};
use crate::units::Pt;

/// The lines of one block after wrapping, with the style they will be drawn in
struct WrappedBlock<'c> {
    kind: BlockKind,
    style: Option<&'c TextStyle>,
    lines: Vec<String>,
}

/// Lays blocks out onto pages, top to bottom, one line at a time.
///
/// The paginator owns the vertical cursor and every page it creates. A line is
/// only placed where its whole height fits above the bottom margin, otherwise a
/// new page is started first. Headings are kept with what follows them: a
/// heading moves to the next page unless the first line of the content after
/// it fits on the current one too.
///
/// Footers are not this type's concern; see [super::annotate_footers].
pub struct Paginator<'a, M: TextMeasurer + ?Sized> {
    config: &'a LayoutConfig,
    measurer: &'a M,
    pages: Vec<Page>,
    current: Page,
    cursor: Pt,
}

impl<'a, M: TextMeasurer + ?Sized> Paginator<'a, M> {
    pub fn new(config: &'a LayoutConfig, measurer: &'a M) -> Self {
        Paginator {
            config,
            measurer,
            pages: Vec::new(),
            current: Page::new(0),
            cursor: config.page.margins.top,
        }
    }

    /// Place the cover header on the first page and move the cursor to where
    /// the body starts
    pub fn place_cover(&mut self, cover: &Cover) {
        let x = self.config.page.margins.left;
        self.current.add_fill(cover.band.clone());
        for line in cover.lines.iter() {
            self.current.add_line(PlacedLine {
                x,
                y: line.y,
                line: WrappedLine {
                    text: line.text.clone(),
                    style: line.style,
                    block_index: None,
                },
            });
        }
        self.cursor = cover.body_start;
    }

    /// Lay out every block in order and return the finished pages
    pub fn layout(mut self, blocks: &[Block]) -> Result<LayoutResult> {
        let wrapped = blocks
            .iter()
            .map(|block| self.wrap_block(block))
            .collect::<Result<Vec<_>>>()?;

        for index in 0..wrapped.len() {
            self.layout_block(&wrapped, index);
        }

        Ok(self.finish())
    }

    fn bottom_limit(&self) -> Pt {
        self.config.page.bottom_limit()
    }

    fn wrap_block(&self, block: &Block) -> Result<WrappedBlock<'a>> {
        let config: &'a LayoutConfig = self.config;
        let style = StyleId::for_block(block.kind).map(|id| config.styles.get(id));
        let lines = match (block.kind, style) {
            (BlockKind::Bullet, Some(style)) => LineWrapper::new(self.measurer, style, config.bullet_width())
                .with_prefix(&config.bullet_glyph)
                .wrap(&block.text)?,
            (_, Some(style)) => LineWrapper::new(self.measurer, style, config.page.content_width())
                .wrap(&block.text)?,
            (_, None) => Vec::new(),
        };
        Ok(WrappedBlock {
            kind: block.kind,
            style,
            lines,
        })
    }

    fn layout_block(&mut self, blocks: &[WrappedBlock<'a>], index: usize) {
        let block = &blocks[index];
        let Some(style) = block.style else {
            // blank lines only move the cursor; the next line does its own page check
            self.cursor += self.config.spacing.blank_line;
            return;
        };
        if block.lines.is_empty() {
            return;
        }

        if block.kind.is_heading() && !self.heading_fits(blocks, index) {
            log::trace!("moving heading block {index} to a new page to keep it with its content");
            self.start_new_page();
        }

        let x = match block.kind {
            BlockKind::Bullet => self.config.page.margins.left + self.config.spacing.bullet_indent,
            _ => self.config.page.margins.left,
        };
        for text in block.lines.iter() {
            self.emit(
                x,
                style.line_height,
                WrappedLine {
                    text: text.clone(),
                    style: style.id,
                    block_index: Some(index),
                },
            );
        }

        if block.kind == BlockKind::Paragraph {
            self.cursor += self.config.spacing.paragraph_gap;
        }
    }

    /// Whether the heading at `index` can stay on the current page. It must
    /// leave at least the configured reserve below itself, and the cursor is
    /// walked through any following headings and blank lines to check that the
    /// first line of real content still fits on this page.
    fn heading_fits(&self, blocks: &[WrappedBlock<'a>], index: usize) -> bool {
        let bottom = self.bottom_limit();
        let reserve = self.config.spacing.heading_reserve;
        let mut y = self.cursor;

        for block in &blocks[index..] {
            match (block.kind, block.style) {
                (_, None) => y += self.config.spacing.blank_line,
                (_, Some(_)) if block.lines.is_empty() => {}
                (kind, Some(style)) if kind.is_heading() => {
                    let height = style.line_height * block.lines.len() as f32;
                    if y + height + reserve > bottom {
                        return false;
                    }
                    for _ in block.lines.iter() {
                        if y + style.line_height > bottom {
                            return false;
                        }
                        y += style.line_height;
                    }
                }
                (_, Some(style)) => return y + style.line_height <= bottom,
            }
        }

        // nothing but headings and blank lines remain
        true
    }

    /// Place one line at the cursor, breaking to a new page first if the line
    /// would cross the bottom margin
    fn emit(&mut self, x: Pt, line_height: Pt, line: WrappedLine) {
        if self.cursor + line_height > self.bottom_limit() {
            self.start_new_page();
        }
        log::trace!("page {} y={} {:?}", self.current.index, self.cursor, line.text);
        self.current.add_line(PlacedLine {
            x,
            y: self.cursor,
            line,
        });
        self.cursor += line_height;
    }

    /// Move the cursor to the top of a fresh page. A page that nothing has been
    /// placed on yet is reused rather than left empty in the output.
    fn start_new_page(&mut self) {
        self.cursor = self.config.page.margins.top;
        if self.current.is_blank() {
            return;
        }

        let next = Page::new(self.current.index + 1);
        let finished = std::mem::replace(&mut self.current, next);
        log::debug!("page {} full with {} lines", finished.index, finished.lines.len());
        self.pages.push(finished);
    }

    fn finish(mut self) -> LayoutResult {
        self.pages.push(self.current);
        LayoutResult::new(self.pages)
    }
}

/// Lay `blocks` out onto pages, with an optional cover header on the first page
pub fn paginate<M: TextMeasurer + ?Sized>(
    blocks: &[Block],
    config: &LayoutConfig,
    measurer: &M,
    cover: Option<&Cover>,
) -> Result<LayoutResult> {
    config.validate()?;
    let mut paginator = Paginator::new(config, measurer);
    if let Some(cover) = cover {
        paginator.place_cover(cover);
    }
    paginator.layout(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::parse_blocks;

    /// A tiny page in abstract units: 100 wide, 100 tall, margins of 10, and
    /// every character one unit wide
    fn small_config() -> LayoutConfig {
        let mut config = LayoutConfig::default();
        config.page.width = Pt(100.0);
        config.page.height = Pt(100.0);
        config.page.margins = crate::layout::Margins::all(Pt(10.0));
        config.styles.heading1.line_height = Pt(15.0);
        config.styles.heading2.line_height = Pt(12.0);
        config.styles.paragraph.line_height = Pt(6.0);
        config.styles.bullet.line_height = Pt(6.0);
        config.styles.footer.line_height = Pt(4.0);
        config.spacing.blank_line = Pt(5.0);
        config.spacing.paragraph_gap = Pt(3.0);
        config.spacing.heading_reserve = Pt(6.0);
        config.spacing.bullet_indent = Pt(10.0);
        config.footer.offset_from_bottom = Pt(8.0);
        config
    }

    fn per_char(text: &str, _: &TextStyle) -> Pt {
        Pt(text.chars().count() as f32)
    }

    fn run(text: &str, config: &LayoutConfig) -> LayoutResult {
        paginate(&parse_blocks(text), config, &per_char, None).expect("lays out")
    }

    #[test]
    fn empty_document_has_one_empty_page() {
        let result = run("", &small_config());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.pages[0].index, 0);
        assert!(result.pages[0].lines.is_empty());
    }

    #[test]
    fn lines_advance_by_their_style_height() {
        let result = run("# Title\nfirst para\nsecond para", &small_config());
        let ys: Vec<Pt> = result.pages[0].lines.iter().map(|l| l.y).collect();
        // heading at the top margin, paragraph after the 15 unit heading,
        // second paragraph after a 6 unit line and a 3 unit paragraph gap
        assert_eq!(ys, vec![Pt(10.0), Pt(25.0), Pt(34.0)]);
    }

    #[test]
    fn blank_lines_only_move_the_cursor() {
        let result = run("one\n\n\n\ntwo", &small_config());
        let page = &result.pages[0];
        assert_eq!(page.lines.len(), 2);
        // 6 line + 3 gap + three 5 unit blanks
        assert_eq!(page.lines[1].y - page.lines[0].y, Pt(6.0 + 3.0 + 15.0));
    }

    #[test]
    fn blank_lines_never_break_pages_by_themselves() {
        let text = format!("one{}", "\n".repeat(40));
        let result = run(&text, &small_config());
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn content_after_overflowing_blanks_starts_a_new_page() {
        let text = format!("one{}two", "\n".repeat(20));
        let result = run(&text, &small_config());
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.pages[1].lines[0].text(), "two");
        assert_eq!(result.pages[1].lines[0].y, Pt(10.0));
    }

    #[test]
    fn breaks_before_a_line_would_cross_the_bottom_margin() {
        // 80 units of printable height hold 13 six-unit lines
        let text = (0..14).map(|i| format!("- item {i}")).collect::<Vec<_>>().join("\n");
        let result = run(&text, &small_config());
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.pages[0].lines.len(), 13);
        assert_eq!(result.pages[1].lines.len(), 1);
        assert_eq!(result.pages[1].index, 1);
        for line in result.pages.iter().flat_map(|p| p.lines.iter()) {
            assert!(line.y + Pt(6.0) <= Pt(90.0));
        }
    }

    #[test]
    fn bullets_are_indented_and_prefixed() {
        let mut config = small_config();
        // leaves 20 units for bullet text
        config.spacing.bullet_indent = Pt(60.0);
        let result = run("- alpha beta gamma delta epsilon", &config);
        let lines = &result.pages[0].lines;
        assert_eq!(lines[0].text(), "• alpha beta gamma");
        assert_eq!(lines[1].text(), "delta epsilon");
        assert!(lines.iter().all(|l| l.x == Pt(70.0)));
        // bullets get no paragraph gap
        let result = run("- a\n- b", &small_config());
        assert_eq!(result.pages[0].lines[1].y, Pt(16.0));
    }

    #[test]
    fn heading_without_room_for_content_moves_to_the_next_page() {
        // ten lines put the cursor at 70; the heading would end at 85 and the
        // paragraph line after it would cross the bottom limit of 90
        let mut text = (0..10).map(|i| format!("- {i}")).collect::<Vec<_>>().join("\n");
        text.push_str("\n# Heading\nbody");
        let result = run(&text, &small_config());
        assert_eq!(result.total_pages, 2);
        let second = &result.pages[1];
        assert_eq!(second.lines[0].text(), "Heading");
        assert_eq!(second.lines[0].y, Pt(10.0));
        assert_eq!(second.lines[1].text(), "body");
        assert_eq!(second.lines[1].y, Pt(25.0));
    }

    #[test]
    fn stacked_headings_move_together() {
        // cursor at 58: "# A" ends at 73, "## B" at 85, the body line would end at 91
        let mut text = (0..8).map(|i| format!("- {i}")).collect::<Vec<_>>().join("\n");
        text.push_str("\n# A\n## B\nbody");
        let result = run(&text, &small_config());
        assert_eq!(result.total_pages, 2);
        let texts: Vec<&str> = result.pages[1].lines.iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["A", "B", "body"]);
    }

    #[test]
    fn blank_lines_after_a_heading_count_towards_keeping_it() {
        // cursor at 64: "# H" ends at 79 and "body" would fit at 85, but the
        // two blank lines push it to 89 and past the bottom limit of 90
        let mut text = (0..9).map(|i| format!("- {i}")).collect::<Vec<_>>().join("\n");
        text.push_str("\n# H\n\n\nbody");
        let result = run(&text, &small_config());
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.pages[0].lines.len(), 9);
        let placed: Vec<(Pt, &str)> = result.pages[1].lines.iter().map(|l| (l.y, l.text())).collect();
        assert_eq!(placed, vec![(Pt(10.0), "H"), (Pt(35.0), "body")]);
    }

    #[test]
    fn trailing_heading_stays_when_it_fits() {
        let mut text = (0..10).map(|i| format!("- {i}")).collect::<Vec<_>>().join("\n");
        text.push_str("\n## Closing");
        let result = run(&text, &small_config());
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn heading_on_a_fresh_page_does_not_leave_an_empty_page() {
        let mut config = small_config();
        config.spacing.heading_reserve = Pt(500.0);
        let result = run("# Unreachable reserve\nbody", &config);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.pages[0].lines[0].y, Pt(10.0));
    }

    #[test]
    fn invalid_geometry_fails_fast() {
        let mut config = small_config();
        config.page.margins.right = Pt(90.0);
        let result = paginate(&parse_blocks("text"), &config, &per_char, None);
        assert!(matches!(result, Err(crate::LayoutError::InvalidGeometry(_))));
    }

    #[test]
    fn measurement_failures_abort_layout() {
        let broken = |_: &str, _: &TextStyle| Pt(-3.0);
        let result = paginate(&parse_blocks("text"), &small_config(), &broken, None);
        assert!(matches!(result, Err(crate::LayoutError::Measurement { .. })));
    }
}
