use serde::{Deserialize, Serialize};

/// The semantic kind of one input line
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Heading1,
    Heading2,
    Bullet,
    Paragraph,
    Blank,
}

impl BlockKind {
    pub fn is_heading(self) -> bool {
        matches!(self, BlockKind::Heading1 | BlockKind::Heading2)
    }
}

/// One semantic unit of input text, with its markers stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    pub fn new<S: Into<String>>(kind: BlockKind, text: S) -> Block {
        Block {
            kind,
            text: text.into(),
        }
    }

    pub fn blank() -> Block {
        Block::new(BlockKind::Blank, String::new())
    }

    /// Classify a single line of input. Markers are recognised after any
    /// leading indentation; text that matches no marker is a paragraph.
    pub fn parse_line(line: &str) -> Block {
        let line = line.trim_start();
        if line.is_empty() {
            return Block::blank();
        }

        const MARKERS: [(&str, BlockKind); 4] = [
            ("# ", BlockKind::Heading1),
            ("## ", BlockKind::Heading2),
            ("- ", BlockKind::Bullet),
            ("* ", BlockKind::Bullet),
        ];
        for (marker, kind) in MARKERS {
            if let Some(rest) = line.strip_prefix(marker) {
                return Block::new(kind, rest.trim());
            }
        }

        Block::new(BlockKind::Paragraph, line.trim_end())
    }
}

/// Split raw text into blocks, one per line, in document order. Any string is
/// valid input: the worst case is a document made only of paragraphs.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let blocks: Vec<Block> = text.lines().map(Block::parse_line).collect();
    log::debug!("parsed {} blocks from {} bytes of text", blocks.len(), text.len());
    blocks
}
