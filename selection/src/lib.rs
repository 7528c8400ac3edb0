//! Selection Module
//!
//! State machines behind the guild and instrument pickers:
//! - `GuildSelector`: at most one guild selected at a time
//! - `InstrumentSelector`: selection plus an element filter and a
//!   proposal mode for instruments not yet in the catalog
//!
//! Machines are synchronous and owned exclusively by their caller; nothing
//! here is persisted or shared.

pub mod error;
pub mod guild;
pub mod instrument;
pub mod proposal;

pub use error::{Result, SelectionError};
pub use guild::GuildSelector;
pub use instrument::{InstrumentSelector, Mode};
pub use proposal::ProposalDraft;
