//! Guild selection state machine

use catalog::{guild_by_id, Guild};
use serde::{Deserialize, Serialize};

/// Picker over the guild catalog. Holds at most one selected id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GuildSelector {
    selected: Option<String>,
}

impl GuildSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the selector with a previously chosen id
    pub fn with_selected(id: impl Into<String>) -> Self {
        Self {
            selected: Some(id.into()),
        }
    }

    /// Select a guild, replacing any prior selection. Returns the catalog
    /// record; unknown ids still select but resolve to `None` and callers
    /// render the fallback.
    pub fn select(&mut self, id: &str) -> Option<&'static Guild> {
        self.selected = Some(id.to_string());
        guild_by_id(id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Catalog record for the current selection, if any resolves
    pub fn selected_guild(&self) -> Option<&'static Guild> {
        self.selected.as_deref().and_then(guild_by_id)
    }
}
