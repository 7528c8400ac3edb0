//! Instrument proposal drafts

use catalog::Element;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectionError};

/// A community proposal for an instrument not yet in the catalog.
///
/// Transient: filled in while the selector is in proposal mode and emitted
/// as a terminal event on submit. Never retained here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProposalDraft {
    pub name: String,
    pub element: Element,
    pub cultural_origin: String,
    pub description: String,
}

impl ProposalDraft {
    /// Fresh draft keyed to an element (the recommended element, or Ether)
    pub fn new(element: Element) -> Self {
        Self {
            name: String::new(),
            element,
            cultural_origin: String::new(),
            description: String::new(),
        }
    }

    /// A draft is submittable once name, element, and description are set.
    /// Cultural origin stays optional.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SelectionError::IncompleteProposal { field: "name" });
        }
        if self.element == Element::All {
            return Err(SelectionError::IncompleteProposal { field: "element" });
        }
        if self.description.trim().is_empty() {
            return Err(SelectionError::IncompleteProposal {
                field: "description",
            });
        }
        Ok(())
    }
}

impl Default for ProposalDraft {
    fn default() -> Self {
        Self::new(Element::Ether)
    }
}
