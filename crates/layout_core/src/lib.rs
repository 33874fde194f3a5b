//! Two-pane ("leaflet") layout controller for the CV viewer.
//!
//! Slot A is the profile/navigation pane and is always present. Slot B is the
//! content pane; it holds either one section with a back affordance (folded)
//! or all three sections side by side (unfolded). The controller never decides
//! foldedness itself: the toolkit reports it through [`LayoutEvent::FoldChanged`].

use std::sync::Arc;

use shared::{Profile, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    SlotA,
    SlotB,
}

/// Generation number of a Slot B instance. A new id is issued on every rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPane {
    pub section: Section,
    pub text: String,
    pub back_affordance: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotBContent {
    Single(SectionPane),
    /// Summary, experience and education, in that order.
    Composite([SectionPane; 3]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotB {
    pub id: SlotId,
    pub content: SlotBContent,
}

impl SlotB {
    pub fn has_back_affordance(&self) -> bool {
        match &self.content {
            SlotBContent::Single(pane) => pane.back_affordance,
            SlotBContent::Composite(panes) => panes.iter().any(|pane| pane.back_affordance),
        }
    }

    /// Display text of the slot; composite panes are joined in section order.
    pub fn text(&self) -> String {
        match &self.content {
            SlotBContent::Single(pane) => pane.text.clone(),
            SlotBContent::Composite(panes) => panes.iter().map(|pane| pane.text.as_str()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub folded: bool,
    pub active_section: Section,
    /// Pane shown while folded. Ignored when unfolded, where both panes show.
    pub visible: Pane,
    pub nav_buttons_visible: bool,
    pub slot_b: Option<SlotB>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    SelectSection(Section),
    GoBack,
    FoldChanged { folded: bool },
}

pub struct LayoutController {
    profile: Arc<Profile>,
    state: DisplayState,
    next_slot_id: u64,
    slots_built: u64,
    slots_discarded: u64,
}

impl LayoutController {
    /// Starts folded on Slot A with the summary prepared in Slot B.
    pub fn new(profile: Arc<Profile>) -> Self {
        let mut controller = Self {
            profile,
            state: DisplayState {
                folded: true,
                active_section: Section::Summary,
                visible: Pane::SlotA,
                nav_buttons_visible: true,
                slot_b: None,
            },
            next_slot_id: 0,
            slots_built: 0,
            slots_discarded: 0,
        };
        let summary = controller.section_pane(Section::Summary, true);
        controller.install_slot_b(SlotBContent::Single(summary));
        controller
    }

    pub fn profile(&self) -> &Arc<Profile> {
        &self.profile
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn handle(&mut self, event: LayoutEvent) -> &DisplayState {
        match event {
            LayoutEvent::SelectSection(section) => self.select_section(section),
            LayoutEvent::GoBack => self.go_back(),
            LayoutEvent::FoldChanged { folded } => self.on_fold_changed(folded),
        }
        &self.state
    }

    pub fn select_section(&mut self, section: Section) {
        self.state.active_section = section;
        if !self.state.folded {
            // Navigation buttons are hidden while unfolded; the combined view stays.
            tracing::debug!(%section, "section recorded while unfolded");
            return;
        }

        let pane = self.section_pane(section, true);
        self.install_slot_b(SlotBContent::Single(pane));
        self.state.visible = Pane::SlotB;
        tracing::debug!(%section, "showing section");
    }

    pub fn go_back(&mut self) {
        if !self.state.folded || self.state.visible == Pane::SlotA {
            return;
        }
        self.state.visible = Pane::SlotA;
        tracing::debug!("back to profile pane");
    }

    pub fn on_fold_changed(&mut self, folded: bool) {
        if folded == self.state.folded {
            return;
        }

        if folded {
            if let Some(previous) = self.state.slot_b.take() {
                self.discard_slot_b(previous);
            }
            self.state.folded = true;
            self.state.nav_buttons_visible = true;
            self.state.visible = Pane::SlotA;
            tracing::debug!(active_section = %self.state.active_section, "folded");
        } else {
            let panes = Section::ALL.map(|section| self.section_pane(section, false));
            self.install_slot_b(SlotBContent::Composite(panes));
            self.state.folded = false;
            self.state.nav_buttons_visible = false;
            self.state.visible = Pane::SlotB;
            tracing::debug!("unfolded");
        }
    }

    pub fn is_slot_a_visible(&self) -> bool {
        !self.state.folded || self.state.visible == Pane::SlotA
    }

    pub fn is_slot_b_visible(&self) -> bool {
        self.state.slot_b.is_some() && (!self.state.folded || self.state.visible == Pane::SlotB)
    }

    pub fn slot_b_text(&self) -> Option<String> {
        self.state.slot_b.as_ref().map(SlotB::text)
    }

    /// Slot B instances built and not yet discarded. Never more than one.
    pub fn live_slot_b_instances(&self) -> u64 {
        self.slots_built - self.slots_discarded
    }

    fn section_pane(&self, section: Section, back_affordance: bool) -> SectionPane {
        SectionPane {
            section,
            text: self.profile.section_text(section),
            back_affordance,
        }
    }

    fn install_slot_b(&mut self, content: SlotBContent) {
        let id = SlotId(self.next_slot_id);
        self.next_slot_id += 1;
        self.slots_built += 1;
        if let Some(previous) = self.state.slot_b.replace(SlotB { id, content }) {
            self.discard_slot_b(previous);
        }
        debug_assert_eq!(self.live_slot_b_instances(), 1);
    }

    fn discard_slot_b(&mut self, slot: SlotB) {
        self.slots_discarded += 1;
        tracing::trace!(slot = slot.id.0, "discarding content pane");
        drop(slot);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
