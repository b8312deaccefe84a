use core::ops::Range;

/// Selection state of a single-line editor.
///
/// A drag starts by anchoring at one boundary; a range only exists once
/// the moving end reaches a different boundary. The anchor stays fixed
/// for the whole drag, so the range stretches and shrinks like a rubber
/// band around it and may point in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No anchor and no range.
    #[default]
    Idle,
    /// An anchor without a range (a plain caret that can still be extended).
    Anchored { anchor: usize },
    /// A non-empty range between a fixed anchor and a moving active end.
    Ranging { anchor: usize, active: usize },
}

impl SelectionState {
    /// Start a drag at `index`, discarding any previous state.
    pub fn begin_drag(&mut self, index: usize) {
        *self = Self::Anchored { anchor: index };
    }

    /// Move the active end of a drag to `index`.
    ///
    /// Returns `true` when the state changed.
    pub fn extend_drag(&mut self, index: usize) -> bool {
        let next = match *self {
            Self::Idle => Self::Anchored { anchor: index },
            Self::Anchored { anchor } if anchor == index => return false,
            Self::Anchored { anchor } => Self::Ranging {
                anchor,
                active: index,
            },
            Self::Ranging { active, .. } if active == index => return false,
            Self::Ranging { anchor, .. } if anchor == index => Self::Anchored { anchor },
            Self::Ranging { anchor, .. } => Self::Ranging {
                anchor,
                active: index,
            },
        };
        *self = next;
        true
    }

    /// Drop any range and leave a plain caret at `index`.
    pub fn collapse_to_caret(&mut self, index: usize) {
        *self = Self::Anchored { anchor: index };
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    /// Anchor boundary, if any.
    pub fn anchor(&self) -> Option<usize> {
        match *self {
            Self::Idle => None,
            Self::Anchored { anchor } | Self::Ranging { anchor, .. } => Some(anchor),
        }
    }

    /// True when a non-empty range is selected.
    pub fn is_ranging(&self) -> bool {
        matches!(self, Self::Ranging { .. })
    }

    /// The selected boundaries in logical order, `None` without a range.
    pub fn normalized_range(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Ranging { anchor, active } => Some((anchor.min(active), anchor.max(active))),
            _ => None,
        }
    }

    /// [`normalized_range`](Self::normalized_range) as a `Range`.
    pub fn range(&self) -> Option<Range<usize>> {
        self.normalized_range().map(|(start, end)| start..end)
    }

    /// Clamp every stored boundary to `len` after the text shrinks,
    /// dropping ranges that become empty.
    pub fn clamp_to(&mut self, len: usize) {
        *self = match *self {
            Self::Idle => Self::Idle,
            Self::Anchored { anchor } => Self::Anchored {
                anchor: anchor.min(len),
            },
            Self::Ranging { anchor, active } => {
                let (anchor, active) = (anchor.min(len), active.min(len));
                if anchor == active {
                    Self::Anchored { anchor }
                } else {
                    Self::Ranging { anchor, active }
                }
            }
        };
    }
}
