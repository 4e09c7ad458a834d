use super::constants::{STAGE_SPACE_MAX, STAGE_SPACE_SCALE};

/// Normalized page scroll position.
///
/// Fed by scroll/resize events; read by the frame loop. Last write wins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    progress: f32,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute progress from the current scroll offset and the scrollable
    /// height (document height minus viewport height).
    pub fn update(&mut self, offset: f32, scrollable_height: f32) {
        self.progress = scroll_progress(offset, scrollable_height);
    }

    /// Fraction of the page scrolled, in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress rescaled to stage space, in [0, 10].
    pub fn stage_value(&self) -> f32 {
        stage_value(self.progress)
    }
}

#[inline]
pub fn scroll_progress(offset: f32, scrollable_height: f32) -> f32 {
    if scrollable_height <= 0.0 || !scrollable_height.is_finite() || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable_height).clamp(0.0, 1.0)
}

#[inline]
pub fn stage_value(progress: f32) -> f32 {
    (progress * STAGE_SPACE_SCALE).clamp(0.0, STAGE_SPACE_MAX)
}

/// HUD readout; the stage value is shown as a percentage of the page.
pub fn sync_level_label(stage_value: f32) -> String {
    format!("Sync Level: {:.1}%", stage_value * 10.0)
}
