//! Per-frame queue from widget callbacks to the layout controller.

use layout_core::LayoutController;

use crate::controller::events::UiEvent;

/// Events collected while painting a frame, applied in order once painting is done.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<UiEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: UiEvent) {
        self.pending.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Applies queued events and returns how many were handled.
    pub fn dispatch(&mut self, controller: &mut LayoutController) -> usize {
        let mut handled = 0;
        for event in self.pending.drain(..) {
            let state = controller.handle(event.into());
            tracing::debug!(
                event = event.name(),
                folded = state.folded,
                visible = ?state.visible,
                "applied ui event"
            );
            handled += 1;
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use layout_core::{LayoutController, Pane};
    use shared::{Profile, Section};

    use super::EventQueue;
    use crate::controller::events::UiEvent;

    #[test]
    fn dispatches_in_push_order_and_drains() {
        let mut controller = LayoutController::new(Arc::new(Profile::builtin_default()));
        let mut queue = EventQueue::default();
        queue.push(UiEvent::NavButton(Section::Education));
        queue.push(UiEvent::BackButton);
        queue.push(UiEvent::NavButton(Section::Experience));

        assert_eq!(queue.dispatch(&mut controller), 3);
        assert!(queue.is_empty());
        assert_eq!(controller.state().visible, Pane::SlotB);
        assert_eq!(controller.state().active_section, Section::Experience);
        assert_eq!(controller.slot_b_text().as_deref(), Some("A\nB\n\n"));

        assert_eq!(queue.dispatch(&mut controller), 0);
    }

    #[test]
    fn fold_events_reach_the_controller() {
        let mut controller = LayoutController::new(Arc::new(Profile::builtin_default()));
        let mut queue = EventQueue::default();
        queue.push(UiEvent::FoldObserved { folded: false });
        queue.dispatch(&mut controller);
        assert!(!controller.state().folded);
        assert!(!controller.state().nav_buttons_visible);
    }
}
