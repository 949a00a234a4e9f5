//! Text splitting for reveal animations.

/// One independently animatable piece of a text block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayHandle {
    /// Order within the block.
    pub index: usize,
    /// Text covered by the handle.
    pub text: String,
}

/// Splits a block of text into display handles.
pub trait TextSplitter {
    /// Handles for `text` in reading order.
    fn split(&self, text: &str) -> Vec<DisplayHandle>;
}

/// Splitter that keeps the whole block as a single handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct WholeBlockSplitter;

impl TextSplitter for WholeBlockSplitter {
    fn split(&self, text: &str) -> Vec<DisplayHandle> {
        if text.is_empty() {
            return Vec::new();
        }
        vec![DisplayHandle {
            index: 0,
            text: text.to_owned(),
        }]
    }
}

#[cfg(test)]
#[path = "../tests/unit/text.rs"]
mod tests;
