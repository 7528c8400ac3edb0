//! The eight TEK8 guilds
//!
//! One guild per element, keyed by its dice glyph. Each record carries the
//! ritual question posed to new members and the essence and hatching labels
//! shown alongside it.

use serde::Serialize;

use crate::element::Element;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Guild {
    pub id: &'static str,
    pub element: Element,
    pub name: &'static str,
    /// Hex accent color for this guild's element
    pub color: &'static str,
    /// Dice glyph (D2..D100)
    pub dice: &'static str,
    pub description: &'static str,
    /// Ritual question posed when a member receives their egg
    pub egg_question: &'static str,
    pub essence: &'static str,
    pub hatching_method: &'static str,
}

pub const GUILDS: [Guild; 8] = [
    Guild {
        id: "D2",
        element: Element::Coin,
        name: "Weavers & Distributors",
        color: "#eab308",
        dice: "D2",
        description: "Weavers of value who balance every exchange across the commons.",
        egg_question: "What value serves whose benefit?",
        essence: "Coin",
        hatching_method: "Fair exchange",
    },
    Guild {
        id: "D4",
        element: Element::Fire,
        name: "Smiths & Tinkerers",
        color: "#ef4444",
        dice: "D4",
        description: "Makers who transform raw material through heat and will.",
        egg_question: "What substance hides within the heart of every flame?",
        essence: "Flare",
        hatching_method: "Forge warmth",
    },
    Guild {
        id: "D6",
        element: Element::Earth,
        name: "Grounders & Growers",
        color: "#22c55e",
        dice: "D6",
        description: "Keepers of soil and season who steady everything they tend.",
        egg_question: "Where does the ground remember what the sky forgets?",
        essence: "Root",
        hatching_method: "Burial in living soil",
    },
    Guild {
        id: "D8",
        element: Element::Air,
        name: "Translators & Teachers",
        color: "#06b6d4",
        dice: "D8",
        description: "Carriers of meaning between tongues, traditions, and generations.",
        egg_question: "Why does the wind carry secrets but never answers?",
        essence: "Whisper",
        hatching_method: "Spoken lessons",
    },
    Guild {
        id: "D10",
        element: Element::Chaos,
        name: "Tricksters & Remixers",
        color: "#f97316",
        dice: "D10",
        description: "Agents of productive disorder who find new patterns in the broken.",
        egg_question: "How does order emerge from perfect disorder?",
        essence: "Twist",
        hatching_method: "Surprise",
    },
    Guild {
        id: "D12",
        element: Element::Ether,
        name: "Sonic Assemblers",
        color: "#a855f7",
        dice: "D12",
        description: "Listeners who assemble resonance into structures of spirit.",
        egg_question: "Who am I, beyond the echo of my own voice?",
        essence: "Echo",
        hatching_method: "Sustained resonance",
    },
    Guild {
        id: "D20",
        element: Element::Water,
        name: "Storykeepers & Healers",
        color: "#3b82f6",
        dice: "D20",
        description: "Healers whose stories carry memory downstream to those who need it.",
        egg_question: "When does memory become prophecy?",
        essence: "Tide",
        hatching_method: "Immersion",
    },
    Guild {
        id: "D100",
        element: Element::Order,
        name: "Archivists & Codemakers",
        color: "#e5e7eb",
        dice: "D100",
        description: "Recorders of what was agreed, and makers of the codes that keep it.",
        egg_question: "Which path serves the greatest good?",
        essence: "Order",
        hatching_method: "Patient cataloguing",
    },
];

/// Look up a guild by its dice id. Unknown ids are absence, not an error.
pub fn guild_by_id(id: &str) -> Option<&'static Guild> {
    GUILDS.iter().find(|g| g.id == id)
}

/// Look up the guild keyed to an element (guild elements are unique)
pub fn guild_by_element(element: Element) -> Option<&'static Guild> {
    GUILDS.iter().find(|g| g.element == element)
}
