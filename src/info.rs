use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Metadata about the generated document, used for the cover header, the page
/// footers, and the export file name. None of it affects content layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// The title of the document, shown in the cover header
    pub title: Option<String>,
    /// Who the document is about, usually the company name
    pub subject: Option<String>,
    /// A grouping for the subject, usually the company's industry
    pub category: Option<String>,
    /// The kind of document, e.g. "Information Security Policy"
    pub document_type: Option<String>,
    pub version: String,
    /// Date the document was generated. Defaults to today when unset.
    pub generated: Option<NaiveDate>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        DocumentInfo {
            title: None,
            subject: None,
            category: None,
            document_type: None,
            version: "1.0".to_string(),
            generated: None,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl DocumentInfo {
    /// Create a new info block, with all metadata unset
    pub fn new() -> DocumentInfo {
        DocumentInfo::default()
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the subject of the info block, modifying `self`
    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the category of the info block, modifying `self`
    pub fn category<S: ToString>(&mut self, category: S) -> &mut Self {
        self.category = Some(category.to_string());
        self
    }

    /// Set the document type of the info block, modifying `self`
    pub fn document_type<S: ToString>(&mut self, document_type: S) -> &mut Self {
        self.document_type = Some(document_type.to_string());
        self
    }

    /// Set the version of the info block, modifying `self`
    pub fn version<S: ToString>(&mut self, version: S) -> &mut Self {
        self.version = version.to_string();
        self
    }

    /// Set the generation date of the info block, modifying `self`
    pub fn generated(&mut self, date: NaiveDate) -> &mut Self {
        self.generated = Some(date);
        self
    }

    pub fn generated_date(&self) -> NaiveDate {
        self.generated.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Title for the cover header, falling back to the document type
    pub fn display_title(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.document_type))
            .unwrap_or_default()
    }

    /// `"<subject> | <category>"`, leaving out whichever part is missing
    pub fn subtitle(&self) -> String {
        join_present(&[non_empty(&self.subject), non_empty(&self.category)], " | ")
    }

    /// `"<subject> - <type> | Page <n> of <total>"` for the zero-based
    /// `page_index`. Missing metadata is left out along with its separator.
    pub fn footer_text(&self, page_index: usize, total_pages: usize) -> String {
        let label = join_present(&[non_empty(&self.subject), non_empty(&self.document_type)], " - ");
        let counter = format!("Page {} of {}", page_index + 1, total_pages);
        if label.is_empty() {
            counter
        } else {
            format!("{label} | {counter}")
        }
    }

    /// `"<subject>_<type>_<year>.pdf"`, with whitespace runs in the document
    /// type replaced by underscores
    pub fn export_file_name(&self) -> String {
        let subject = non_empty(&self.subject).unwrap_or("document");
        let document_type = non_empty(&self.document_type)
            .map(|t| t.split_whitespace().collect::<Vec<_>>().join("_"))
            .unwrap_or_else(|| "policy".to_string());
        format!("{subject}_{document_type}_{}.pdf", self.generated_date().year())
    }
}

fn join_present(parts: &[Option<&str>], separator: &str) -> String {
    parts.iter().flatten().copied().collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> DocumentInfo {
        DocumentInfo::new()
            .title("Data Retention Policy")
            .subject("Acme Corp")
            .category("Healthcare")
            .document_type("Data Retention Policy")
            .generated(NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date"))
            .clone()
    }

    #[test]
    fn footer_counts_from_one() {
        assert_eq!(acme().footer_text(0, 3), "Acme Corp - Data Retention Policy | Page 1 of 3");
        assert_eq!(acme().footer_text(2, 3), "Acme Corp - Data Retention Policy | Page 3 of 3");
    }

    #[test]
    fn footer_drops_missing_metadata() {
        let mut info = DocumentInfo::new();
        assert_eq!(info.footer_text(0, 1), "Page 1 of 1");
        info.subject("Acme Corp");
        assert_eq!(info.footer_text(0, 1), "Acme Corp | Page 1 of 1");
        info.subject("  ");
        info.document_type("Access Policy");
        assert_eq!(info.footer_text(1, 2), "Access Policy | Page 2 of 2");
    }

    #[test]
    fn export_file_name_uses_underscores_and_year() {
        let mut info = acme();
        info.document_type("Acceptable   Use\tPolicy");
        assert_eq!(info.export_file_name(), "Acme Corp_Acceptable_Use_Policy_2026.pdf");
    }

    #[test]
    fn subtitle_and_title_fallbacks() {
        assert_eq!(acme().subtitle(), "Acme Corp | Healthcare");
        let mut info = DocumentInfo::new();
        info.document_type("Incident Response Plan");
        assert_eq!(info.display_title(), "Incident Response Plan");
        assert_eq!(info.subtitle(), "");
        assert_eq!(info.version, "1.0");
    }
}
