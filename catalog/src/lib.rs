//! TEK8 Catalog Module
//!
//! Fixed, read-only lookup tables for the commons:
//! - The eight TEK8 guilds (one per element, keyed by dice glyph)
//! - The sacred instruments (Voice plus 28 defined instruments)
//!
//! Both tables are process-wide constants loaded at compile time. Lookups
//! never mutate; absence is a normal outcome and callers fall back to
//! defaults (e.g. the accent color) rather than failing.

pub mod element;
pub mod guilds;
pub mod instruments;

pub use element::Element;
pub use guilds::{guild_by_element, guild_by_id, Guild, GUILDS};
pub use instruments::{
    instrument_by_id, instruments_by_element, instruments_by_petal, Instrument, INSTRUMENTS,
};

/// Accent color used when an element has no guild color to borrow
pub const DEFAULT_ACCENT_COLOR: &str = "#9333ea";

/// Color associated with an element, with the accent fallback.
///
/// Consults the guild table; `All` and any future element fall back to the
/// default accent.
pub fn element_color(element: Element) -> &'static str {
    guild_by_element(element)
        .map(|g| g.color)
        .unwrap_or(DEFAULT_ACCENT_COLOR)
}
