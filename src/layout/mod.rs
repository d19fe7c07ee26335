//! The layout engine: turns lightly marked-up text into positioned lines on
//! fixed-size pages.
//!
//! Layout runs in stages, each usable on its own:
//!
//! - [`parse_blocks`](crate::layout::parse_blocks) splits the input into headings, bullets, paragraphs and blank lines
//! - [`LineWrapper`](crate::layout::LineWrapper) breaks a block's text into lines that fit the content width
//! - [`paginate`](crate::layout::paginate) places those lines top to bottom, starting new pages as needed
//! - [`annotate_footers`](crate::layout::annotate_footers) adds a "Page n of total" footer once the page count is known
//!
//! [`layout_document`](crate::layout_document) runs all of them in order.
//!
//! # Example
//!
//! ```
//! use policy_layout::{layout_document, DocumentInfo, LayoutConfig, MonospaceMeasurer};
//!
//! let text = "# Purpose and Scope\nThis policy applies to all staff.\n- Keep passwords private";
//! let info = DocumentInfo::new()
//!     .subject("Acme Corp")
//!     .document_type("Security Policy")
//!     .clone();
//!
//! let result = layout_document(text, &info, &LayoutConfig::default(), &MonospaceMeasurer::default())
//!     .expect("valid layout");
//! assert_eq!(result.total_pages, 1);
//! let footer = result.pages[0].footer().expect("every page has a footer");
//! assert_eq!(footer.text(), "Acme Corp - Security Policy | Page 1 of 1");
//! ```

mod block;
mod cover;
mod footer;
mod margins;
mod paginate;
mod wrap;

pub use block::*;
pub use cover::*;
pub use footer::*;
pub use margins::*;
pub use paginate::*;
pub use wrap::*;
