//! Events raised by widgets and the window, before they reach the layout controller.

use layout_core::LayoutEvent;
use shared::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// One of the "Summary" / "Experience" / "Education" buttons.
    NavButton(Section),
    BackButton,
    FoldObserved { folded: bool },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::NavButton(_) => "nav_button",
            UiEvent::BackButton => "back_button",
            UiEvent::FoldObserved { .. } => "fold_observed",
        }
    }
}

impl From<UiEvent> for LayoutEvent {
    fn from(value: UiEvent) -> Self {
        match value {
            UiEvent::NavButton(section) => LayoutEvent::SelectSection(section),
            UiEvent::BackButton => LayoutEvent::GoBack,
            UiEvent::FoldObserved { folded } => LayoutEvent::FoldChanged { folded },
        }
    }
}
