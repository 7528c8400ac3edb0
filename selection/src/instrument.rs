//! Instrument selection state machine
//!
//! Selection plus two orthogonal pieces of state: an element filter over
//! the catalog, and a proposal mode for instruments not yet listed. The
//! mode is a tagged variant carrying its draft, so "submitting a proposal
//! clears the selection" is a transition, not a side effect to remember.

use catalog::{instrument_by_id, instruments_by_element, Element, Instrument};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::proposal::ProposalDraft;

/// Browsing the catalog, or drafting a proposal for a missing instrument
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mode {
    Browsing,
    Proposing(ProposalDraft),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstrumentSelector {
    selected: Option<String>,
    filter: Element,
    mode: Mode,
    /// Element suggested by the caller (e.g. the chosen guild's element);
    /// seeds both the initial filter and new proposal drafts
    recommended: Option<Element>,
}

impl InstrumentSelector {
    pub fn new() -> Self {
        Self {
            selected: None,
            filter: Element::All,
            mode: Mode::Browsing,
            recommended: None,
        }
    }

    /// Selector seeded with a recommended element
    pub fn with_recommended(element: Element) -> Self {
        Self {
            selected: None,
            filter: element,
            mode: Mode::Browsing,
            recommended: Some(element),
        }
    }

    /// Select an instrument, replacing any prior selection and cancelling
    /// an in-progress proposal. Returns the catalog record; unknown ids
    /// resolve to `None`.
    pub fn select(&mut self, id: &str) -> Option<&'static Instrument> {
        self.selected = Some(id.to_string());
        self.mode = Mode::Browsing;
        instrument_by_id(id)
    }

    /// Change the element filter. Never touches the selection.
    pub fn set_filter(&mut self, element: Element) {
        self.filter = element;
    }

    pub fn filter(&self) -> Element {
        self.filter
    }

    /// Instruments visible under the current filter, catalog order
    pub fn filtered(&self) -> Vec<&'static Instrument> {
        instruments_by_element(self.filter)
    }

    /// Enter proposal mode with a fresh draft. Keeps the selection until
    /// the proposal is actually submitted.
    pub fn begin_proposal(&mut self) -> &mut ProposalDraft {
        if !matches!(self.mode, Mode::Proposing(_)) {
            let element = self.recommended.unwrap_or(Element::Ether);
            self.mode = Mode::Proposing(ProposalDraft::new(element));
        }
        match &mut self.mode {
            Mode::Proposing(draft) => draft,
            Mode::Browsing => unreachable!("just entered proposal mode"),
        }
    }

    /// Leave proposal mode, discarding the draft
    pub fn cancel_proposal(&mut self) {
        self.mode = Mode::Browsing;
    }

    /// The in-progress draft, when proposing
    pub fn draft_mut(&mut self) -> Option<&mut ProposalDraft> {
        match &mut self.mode {
            Mode::Proposing(draft) => Some(draft),
            Mode::Browsing => None,
        }
    }

    pub fn is_proposing(&self) -> bool {
        matches!(self.mode, Mode::Proposing(_))
    }

    /// Submit the current proposal as a terminal event.
    ///
    /// Only permitted while proposing with a complete draft (name, element,
    /// description). Clears the selection and returns the machine to
    /// browsing; the emitted draft is the caller's to forward.
    pub fn submit_proposal(&mut self) -> Result<ProposalDraft> {
        let draft = match &self.mode {
            Mode::Proposing(draft) => draft.clone(),
            Mode::Browsing => return Err(crate::SelectionError::NotProposing),
        };
        draft.validate()?;

        self.selected = None;
        self.mode = Mode::Browsing;
        Ok(draft)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Catalog record for the current selection, if any resolves
    pub fn selected_instrument(&self) -> Option<&'static Instrument> {
        self.selected.as_deref().and_then(instrument_by_id)
    }
}

impl Default for InstrumentSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_cancels_proposing() {
        let mut selector = InstrumentSelector::new();
        selector.begin_proposal();
        assert!(selector.is_proposing());

        let voice = selector.select("voice").unwrap();
        assert!(voice.is_voice);
        assert!(!selector.is_proposing());
        assert_eq!(selector.selected_id(), Some("voice"));
    }

    #[test]
    fn test_filter_does_not_reset_selection() {
        let mut selector = InstrumentSelector::new();
        selector.select("erhu");

        selector.set_filter(Element::Fire);
        assert_eq!(selector.selected_id(), Some("erhu"));
        // The filtered view no longer shows the selection, but it holds
        let ids: Vec<&str> = selector.filtered().iter().map(|i| i.id).collect();
        assert!(!ids.contains(&"erhu"));
    }

    #[test]
    fn test_recommended_element_seeds_filter_and_draft() {
        let mut selector = InstrumentSelector::with_recommended(Element::Water);
        assert_eq!(selector.filter(), Element::Water);

        let draft = selector.begin_proposal();
        assert_eq!(draft.element, Element::Water);
    }

    #[test]
    fn test_begin_proposal_is_idempotent() {
        let mut selector = InstrumentSelector::new();
        selector.begin_proposal().name = "Theremin".to_string();
        // Re-entering proposal mode keeps the draft in progress
        assert_eq!(selector.begin_proposal().name, "Theremin");
    }
}
