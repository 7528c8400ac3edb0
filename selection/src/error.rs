//! Selection error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Proposal incomplete: missing {field}")]
    IncompleteProposal { field: &'static str },

    #[error("Not in proposal mode")]
    NotProposing,
}

pub type Result<T> = std::result::Result<T, SelectionError>;
