use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Immutable single-line text value indexed by grapheme cluster.
///
/// Every index exposed by this type is a cluster index in `0..=len()`,
/// never a byte offset. Edits produce a new buffer instead of mutating
/// in place, so callers can hold on to the previous value cheaply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    text: String,
    /// Byte offset of every cluster start, followed by `text.len()`.
    boundaries: Vec<usize>,
}

impl TextBuffer {
    /// Build a buffer from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut boundaries: Vec<usize> = text.grapheme_indices(true).map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { text, boundaries }
    }

    /// The empty buffer.
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of grapheme clusters.
    pub fn len(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clamp a cluster index into `0..=len()`.
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.len())
    }

    /// Byte offset of the boundary at cluster `index` (clamped).
    pub fn byte_offset(&self, index: usize) -> usize {
        match self.boundaries.get(index) {
            Some(offset) => *offset,
            None => self.text.len(),
        }
    }

    /// Slice covering clusters `range` (clamped to the buffer).
    pub fn slice(&self, range: Range<usize>) -> &str {
        let start = self.byte_offset(self.clamp(range.start));
        let end = self.byte_offset(self.clamp(range.end)).max(start);
        &self.text[start..end]
    }

    /// Text before cluster `index`.
    pub fn prefix(&self, index: usize) -> &str {
        self.slice(0..index)
    }

    /// Iterate over the clusters in logical order.
    pub fn clusters(&self) -> impl Iterator<Item = &str> + '_ {
        self.boundaries
            .windows(2)
            .map(move |w| &self.text[w[0]..w[1]])
    }

    /// A buffer with `s` inserted before cluster `index`.
    ///
    /// The inserted text may merge with its neighbours into fewer clusters
    /// (e.g. a combining mark); callers should re-derive indices from the
    /// returned buffer rather than adding cluster counts.
    pub fn with_inserted(&self, index: usize, s: &str) -> Self {
        let at = self.byte_offset(self.clamp(index));
        let mut text = String::with_capacity(self.text.len() + s.len());
        text.push_str(&self.text[..at]);
        text.push_str(s);
        text.push_str(&self.text[at..]);
        Self::new(text)
    }

    /// A buffer with clusters `range` removed.
    pub fn with_removed(&self, range: Range<usize>) -> Self {
        let start = self.byte_offset(self.clamp(range.start));
        let end = self.byte_offset(self.clamp(range.end)).max(start);
        let mut text = String::with_capacity(self.text.len() - (end - start));
        text.push_str(&self.text[..start]);
        text.push_str(&self.text[end..]);
        Self::new(text)
    }

    /// Cluster index of the first boundary at or after byte offset `offset`.
    ///
    /// An offset inside a cluster resolves to that cluster's end.
    pub fn index_of_byte(&self, offset: usize) -> usize {
        match self.boundaries.binary_search(&offset) {
            Ok(i) | Err(i) => i.min(self.len()),
        }
    }

    /// Same-length buffer made of `mask` repeated once per cluster.
    pub fn masked(&self, mask: char) -> Self {
        Self::new(core::iter::repeat(mask).take(self.len()).collect::<String>())
    }
}

impl From<&str> for TextBuffer {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TextBuffer {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}
