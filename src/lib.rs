mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// The block parser, line wrapper, pagination engine, and footer pass
pub mod layout;

mod measure;
pub use measure::*;

mod page;
pub use page::*;

/// Common paper sizes
pub mod pagesize;

mod rect;
pub use rect::*;

mod style;
pub use style::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
