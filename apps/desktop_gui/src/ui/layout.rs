//! Window-width fold detection and pane sizing.

pub const PROFILE_PANE_WIDTH: f32 = 320.0;
pub const CONTENT_MARGIN: i8 = 20;

/// Turns the window width into a fold signal.
///
/// Starts in the folded position, matching the controller's initial state, and
/// reports only changes.
#[derive(Debug, Clone)]
pub struct FoldTracker {
    threshold: f32,
    folded: bool,
}

impl FoldTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            folded: true,
        }
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub fn observe(&mut self, width: f32) -> Option<bool> {
        let folded = width < self.threshold;
        if folded == self.folded {
            return None;
        }
        self.folded = folded;
        Some(folded)
    }
}
