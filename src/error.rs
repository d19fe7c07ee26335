use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The page cannot hold any content: the content width is not positive, the
    /// printable height is smaller than a single line, or a length is not finite
    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// The text measurer returned a width that cannot drive wrapping decisions
    #[error("text measurer returned invalid width {width} for {text:?}")]
    Measurement { text: String, width: f32 },

    #[error(transparent)]
    /// An I/O error occurred while loading a font or configuration file
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// The layout configuration was not valid JSON for [crate::LayoutConfig]
    Config(#[from] serde_json::Error),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, LayoutError>;
