//! Document model - an ordered sequence of text blocks
//!
//! The document is the rich-text host's content as the engine sees it: each
//! block holds plain text in a rope and carries a stable identity. The engine
//! reads block text and replaces ranges; it never mutates styling.

use ropey::Rope;
use std::fmt;

/// Stable identity for a block, unchanged across edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

/// A single block of plain text
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    /// The text buffer
    pub buffer: Rope,
}

impl Block {
    /// Block length in chars
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Block content as an owned string
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }
}

/// Cursor position: a block and a char offset within it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub block: BlockId,
    pub offset: usize,
}

impl Cursor {
    pub fn new(block: BlockId, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// Errors from document range operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The block id does not exist in this document
    UnknownBlock(BlockId),
    /// start > end, or end exceeds the block length
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::UnknownBlock(id) => write!(f, "unknown block {:?}", id),
            DocumentError::RangeOutOfBounds { start, end, len } => {
                write!(f, "range {}..{} out of bounds for block of {} chars", start, end, len)
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// Document state - ordered blocks plus the id counter for new blocks
#[derive(Debug, Clone)]
pub struct Document {
    pub blocks: Vec<Block>,
    next_block_id: u64,
}

impl Document {
    /// Create a document with a single empty block
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document from text, one block per line
    pub fn with_text(text: &str) -> Self {
        let mut doc = Self {
            blocks: Vec::new(),
            next_block_id: 0,
        };
        for line in text.split('\n') {
            let id = doc.alloc_block_id();
            doc.blocks.push(Block {
                id,
                buffer: Rope::from(line),
            });
        }
        doc
    }

    fn alloc_block_id(&mut self) -> BlockId {
        let id = BlockId(self.next_block_id);
        self.next_block_id += 1;
        id
    }

    /// Look up a block by id
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    fn block_index(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Id of the first block
    pub fn first_block(&self) -> BlockId {
        self.blocks[0].id
    }

    /// Text of the cursor's block up to (not including) the cursor offset.
    /// Returns None if the cursor does not address this document.
    pub fn text_before_cursor(&self, cursor: Cursor) -> Option<String> {
        let block = self.block(cursor.block)?;
        if cursor.offset > block.len_chars() {
            return None;
        }
        Some(block.buffer.slice(..cursor.offset).to_string())
    }

    /// Replace `[start, end)` in a block with `replacement`, atomically.
    ///
    /// Text on either side of the range is untouched. Returns the cursor
    /// positioned immediately after the inserted text.
    pub fn replace_range(
        &mut self,
        block_id: BlockId,
        start: usize,
        end: usize,
        replacement: &str,
    ) -> Result<Cursor, DocumentError> {
        let block = self
            .block_mut(block_id)
            .ok_or(DocumentError::UnknownBlock(block_id))?;
        let len = block.len_chars();
        if start > end || end > len {
            return Err(DocumentError::RangeOutOfBounds { start, end, len });
        }

        block.buffer.remove(start..end);
        block.buffer.insert(start, replacement);

        Ok(Cursor::new(block_id, start + replacement.chars().count()))
    }

    /// Insert a character at the cursor, returning the new cursor
    pub fn insert_char(&mut self, cursor: Cursor, ch: char) -> Cursor {
        if let Some(block) = self.block_mut(cursor.block) {
            let offset = cursor.offset.min(block.len_chars());
            block.buffer.insert_char(offset, ch);
            return Cursor::new(cursor.block, offset + 1);
        }
        cursor
    }

    /// Split the cursor's block at the cursor, creating a new block with the
    /// trailing text. The cursor moves to the start of the new block.
    pub fn insert_newline(&mut self, cursor: Cursor) -> Cursor {
        let Some(index) = self.block_index(cursor.block) else {
            return cursor;
        };

        let new_id = self.alloc_block_id();
        let block = &mut self.blocks[index];
        let offset = cursor.offset.min(block.buffer.len_chars());
        let trailing = block.buffer.slice(offset..).to_string();
        let tail_len = block.buffer.len_chars();
        block.buffer.remove(offset..tail_len);

        self.blocks.insert(
            index + 1,
            Block {
                id: new_id,
                buffer: Rope::from(trailing.as_str()),
            },
        );
        Cursor::new(new_id, 0)
    }

    /// Delete the character before the cursor. At the start of a block the
    /// block is merged into its predecessor.
    pub fn delete_backward(&mut self, cursor: Cursor) -> Cursor {
        if cursor.offset > 0 {
            if let Some(block) = self.block_mut(cursor.block) {
                let offset = cursor.offset.min(block.len_chars());
                if offset > 0 {
                    block.buffer.remove(offset - 1..offset);
                    return Cursor::new(cursor.block, offset - 1);
                }
            }
            return cursor;
        }

        // At block start: merge into the previous block
        let Some(index) = self.block_index(cursor.block) else {
            return cursor;
        };
        if index == 0 {
            return cursor;
        }

        let removed = self.blocks.remove(index);
        let prev = &mut self.blocks[index - 1];
        let join_offset = prev.buffer.len_chars();
        prev.buffer.insert(join_offset, &removed.text());
        Cursor::new(prev.id, join_offset)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
