//! TEK8 elements

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight TEK8 elements, plus the `All` sentinel.
///
/// `All` is only ever carried by instruments that apply to every element
/// (Voice) and by element filters; no guild is keyed to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Element {
    All,
    Ether,
    Air,
    Fire,
    Water,
    Earth,
    Chaos,
    Order,
    Coin,
}

impl Element {
    /// Filter-tab order: `All` first, then the elements in catalog order
    pub const FILTERS: [Element; 9] = [
        Element::All,
        Element::Ether,
        Element::Air,
        Element::Fire,
        Element::Water,
        Element::Earth,
        Element::Chaos,
        Element::Order,
        Element::Coin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::All => "All",
            Element::Ether => "Ether",
            Element::Air => "Air",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Chaos => "Chaos",
            Element::Order => "Order",
            Element::Coin => "Coin",
        }
    }

    /// Parse an element name; unknown names are absence, not an error
    pub fn parse(name: &str) -> Option<Element> {
        Element::FILTERS.iter().copied().find(|e| e.as_str() == name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for element in Element::FILTERS {
            assert_eq!(Element::parse(element.as_str()), Some(element));
        }
        assert_eq!(Element::parse("Lightning"), None);
    }

    #[test]
    fn test_filter_order_starts_with_all() {
        assert_eq!(Element::FILTERS[0], Element::All);
        assert_eq!(Element::FILTERS.len(), 9);
    }
}
