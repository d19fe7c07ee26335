use super::wrap::truncate_to_width;
use crate::config::{CoverConfig, LayoutConfig};
use crate::error::Result;
use crate::info::DocumentInfo;
use crate::measure::TextMeasurer;
use crate::page::Fill;
use crate::rect::Rect;
use crate::style::StyleId;
use crate::units::Pt;

/// A line of the cover header: its text, style, and where its top sits
#[derive(Debug, Clone, PartialEq)]
pub struct CoverLine {
    pub y: Pt,
    pub text: String,
    pub style: StyleId,
}

/// The header drawn across the top of the first page: a coloured band holding
/// the title and subtitle, followed by a few lines of document metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Cover {
    pub band: Fill,
    pub lines: Vec<CoverLine>,
    /// Where document content starts on the first page
    pub body_start: Pt,
}

impl Cover {
    /// Build the cover for `info`. Each line is truncated to the content width;
    /// lines with nothing to show are left out.
    pub fn new<M: TextMeasurer + ?Sized>(
        info: &DocumentInfo,
        cover: &CoverConfig,
        config: &LayoutConfig,
        measurer: &M,
    ) -> Result<Cover> {
        let width = config.page.content_width();
        let styles = &config.styles;

        let mut candidates: Vec<(Pt, String, StyleId)> = vec![
            (cover.title_y, info.display_title().to_string(), StyleId::CoverTitle),
            (cover.subtitle_y, info.subtitle(), StyleId::CoverSubtitle),
        ];

        let mut meta = vec![format!("Generated: {}", info.generated_date().format("%Y-%m-%d"))];
        if let Some(document_type) = info.document_type.as_deref().filter(|t| !t.trim().is_empty()) {
            meta.push(format!("Document Type: {}", document_type.trim()));
        }
        meta.push(format!("Version: {}", info.version));

        let mut y = cover.meta_y;
        for text in meta {
            candidates.push((y, text, StyleId::CoverMeta));
            y += styles.cover_meta.line_height;
        }

        let mut lines = Vec::with_capacity(candidates.len());
        for (y, text, style) in candidates {
            if text.is_empty() {
                continue;
            }
            let text = truncate_to_width(&text, width, measurer, styles.get(style))?;
            lines.push(CoverLine { y, text, style });
        }

        Ok(Cover {
            band: Fill {
                rect: Rect {
                    x1: Pt(0.0),
                    y1: Pt(0.0),
                    x2: config.page.width,
                    y2: cover.band_height,
                },
                colour: cover.band_colour,
            },
            lines,
            body_start: cover.body_start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MonospaceMeasurer;
    use chrono::NaiveDate;

    #[test]
    fn lists_title_subtitle_and_metadata_in_order() {
        let config = LayoutConfig::policy_document();
        let cover_config = config.cover.clone().expect("policy documents have a cover");
        let info = DocumentInfo::new()
            .title("Access Control Policy")
            .subject("Acme Corp")
            .category("Fintech")
            .document_type("Access Control Policy")
            .generated(NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date"))
            .clone();

        let cover = Cover::new(&info, &cover_config, &config, &MonospaceMeasurer::default()).expect("cover");
        let texts: Vec<&str> = cover.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Access Control Policy",
                "Acme Corp | Fintech",
                "Generated: 2026-01-02",
                "Document Type: Access Control Policy",
                "Version: 1.0",
            ]
        );
        assert!(cover.lines.windows(2).all(|w| w[0].y < w[1].y));
        assert!(cover.lines.iter().all(|l| l.y < cover.body_start));
        assert_eq!(cover.band.rect.width(), config.page.width);
    }

    #[test]
    fn skips_lines_without_metadata() {
        let config = LayoutConfig::policy_document();
        let cover_config = config.cover.clone().expect("policy documents have a cover");
        let cover = Cover::new(&DocumentInfo::new(), &cover_config, &config, &MonospaceMeasurer::default())
            .expect("cover");
        let styles: Vec<StyleId> = cover.lines.iter().map(|l| l.style).collect();
        assert_eq!(styles, vec![StyleId::CoverMeta, StyleId::CoverMeta]);
    }
}
