use fnv::FnvHashSet;

/// Vertical extent of a panel relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub top: f32,
    pub bottom: f32,
}

#[inline]
pub fn in_view(rect: PanelRect, viewport_height: f32) -> bool {
    rect.top < viewport_height && rect.bottom > 0.0
}

/// Remembers which panels have faded in. A panel reveals once and stays
/// revealed, even when re-rendered (e.g. the filtered project grid).
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: FnvHashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Returns true only on the call that first reveals `id`.
    pub fn observe(&mut self, id: &str, rect: PanelRect, viewport_height: f32) -> bool {
        if self.revealed.contains(id) || !in_view(rect, viewport_height) {
            return false;
        }
        self.revealed.insert(id.to_string())
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
