//! The sacred instruments
//!
//! Voice plus 28 defined instruments. Voice carries the `All` element and
//! the `Universal` petal, so it matches every filter. The community can
//! propose additions; proposals live in the selection machinery, never
//! mutate this table.

use serde::Serialize;

use crate::element::Element;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Instrument {
    pub id: &'static str,
    pub name: &'static str,
    pub element: Element,
    /// Petal (dice glyph of the guild, or `Universal` for Voice)
    pub petal: &'static str,
    pub cultural_origin: Option<&'static str>,
    pub description: Option<&'static str>,
    pub is_voice: bool,
}

const fn instrument(
    id: &'static str,
    name: &'static str,
    element: Element,
    petal: &'static str,
    cultural_origin: &'static str,
    description: &'static str,
) -> Instrument {
    Instrument {
        id,
        name,
        element,
        petal,
        cultural_origin: Some(cultural_origin),
        description: Some(description),
        is_voice: false,
    }
}

pub const INSTRUMENTS: [Instrument; 29] = [
    // Voice first, always available
    Instrument {
        id: "voice",
        name: "Voice",
        element: Element::All,
        petal: "Universal",
        cultural_origin: Some("Global"),
        description: Some("The original instrument - your voice carries all elements"),
        is_voice: true,
    },
    // D12 Ether - Sonic Assemblers
    instrument(
        "didgeridoo",
        "Didgeridoo",
        Element::Ether,
        "D12",
        "Aboriginal Australian",
        "Ancient wind instrument creating continuous drone resonance",
    ),
    instrument(
        "harp",
        "Harp",
        Element::Ether,
        "D12",
        "Celtic/Global",
        "Stringed instrument of celestial harmonics",
    ),
    instrument(
        "contrabass",
        "Contrabass",
        Element::Ether,
        "D12",
        "European Classical",
        "Deep resonant strings that ground ethereal vibrations",
    ),
    // D8 Air - Translators & Teachers
    instrument(
        "flute",
        "Flute",
        Element::Air,
        "D8",
        "Global",
        "Breath becomes melody through this wind instrument",
    ),
    instrument(
        "clarinet",
        "Clarinet",
        Element::Air,
        "D8",
        "European",
        "Single-reed woodwind of expressive range",
    ),
    instrument(
        "french-horn",
        "French Horn",
        Element::Air,
        "D8",
        "European",
        "Brass instrument of noble, soaring tones",
    ),
    instrument(
        "bansuri",
        "Bansuri",
        Element::Air,
        "D8",
        "Indian",
        "Bamboo flute sacred to Krishna and meditative traditions",
    ),
    // D4 Fire - Smiths & Tinkerers
    instrument(
        "trumpet",
        "Trumpet",
        Element::Fire,
        "D4",
        "Global",
        "Brass herald of proclamation and transformation",
    ),
    instrument(
        "trombone",
        "Trombone",
        Element::Fire,
        "D4",
        "European/Jazz",
        "Slide brass of powerful, mutable expression",
    ),
    instrument(
        "mridangam",
        "Mridangam",
        Element::Fire,
        "D4",
        "South Indian",
        "Double-headed drum of Carnatic rhythm",
    ),
    // D20 Water - Storykeepers & Healers
    instrument(
        "saxophone",
        "Saxophone",
        Element::Water,
        "D20",
        "Belgian/Jazz",
        "Single-reed brass of emotive fluidity",
    ),
    instrument(
        "harmonium",
        "Harmonium",
        Element::Water,
        "D20",
        "Indian/Devotional",
        "Bellows organ of continuous devotional flow",
    ),
    instrument(
        "erhu",
        "Erhu",
        Element::Water,
        "D20",
        "Chinese",
        "Two-stringed fiddle of expressive sorrow and joy",
    ),
    // D6 Earth - Grounders & Growers
    instrument(
        "bass",
        "Bass (Electric)",
        Element::Earth,
        "D6",
        "American",
        "Foundation of groove and rhythmic stability",
    ),
    instrument(
        "xylophone",
        "Xylophone",
        Element::Earth,
        "D6",
        "African/Global",
        "Wooden bars of crystalline earth tones",
    ),
    instrument(
        "organ",
        "Organ",
        Element::Earth,
        "D6",
        "European/Sacred",
        "Pipe instrument of cathedral grandeur",
    ),
    instrument(
        "udu-drum",
        "Udu Drum",
        Element::Earth,
        "D6",
        "Nigerian Igbo",
        "Clay pot drum with resonant bass frequencies",
    ),
    // D10 Chaos - Tricksters & Remixers
    instrument(
        "guitar-electric",
        "Guitar (Electric)",
        Element::Chaos,
        "D10",
        "American",
        "Amplified strings of rebellious transformation",
    ),
    instrument(
        "tuba",
        "Tuba",
        Element::Chaos,
        "D10",
        "European/Brass Band",
        "Lowest brass of rumbling chaos",
    ),
    instrument(
        "turntables",
        "Turntables",
        Element::Chaos,
        "D10",
        "Hip-Hop/DJ Culture",
        "Vinyl manipulation as sonic remixing",
    ),
    // D100 Order - Archivists & Codemakers
    instrument(
        "kalimba",
        "Kalimba / Mbira",
        Element::Order,
        "D100",
        "Congolese / African",
        "Thumb piano with metal tines producing clear, music-box-like meditative tones",
    ),
    instrument(
        "piano",
        "Piano",
        Element::Order,
        "D100",
        "European",
        "Keyboard of precise harmonic architecture",
    ),
    instrument(
        "guitar-nylon",
        "Guitar (Nylon/Classical)",
        Element::Order,
        "D100",
        "Spanish/Classical",
        "Fingerstyle guitar of structured beauty",
    ),
    instrument(
        "guzheng",
        "Guzheng",
        Element::Order,
        "D100",
        "Chinese",
        "Plucked zither of ancient ordered harmony",
    ),
    // D2 Coin - Weavers & Distributors
    instrument(
        "violin",
        "Violin",
        Element::Coin,
        "D2",
        "European/Global",
        "Bowed strings of precious, weaving melodies",
    ),
    instrument(
        "cello",
        "Cello",
        Element::Coin,
        "D2",
        "European",
        "Mid-range strings balancing light and depth",
    ),
    instrument(
        "bassoon",
        "Bassoon",
        Element::Coin,
        "D2",
        "European",
        "Double-reed woodwind of dignified value",
    ),
    instrument(
        "sax-a-boom",
        "Sax-A-Boom",
        Element::Coin,
        "D2",
        "Toy/Pop Culture",
        "Playful electronic novelty spreading joy",
    ),
];

/// Look up an instrument by id. Unknown ids are absence, not an error.
pub fn instrument_by_id(id: &str) -> Option<&'static Instrument> {
    INSTRUMENTS.iter().find(|i| i.id == id)
}

/// Instruments matching an element, in catalog order.
///
/// Records carrying the `All` sentinel apply to every element and are
/// always included; filtering by `All` returns the whole catalog.
pub fn instruments_by_element(element: Element) -> Vec<&'static Instrument> {
    if element == Element::All {
        return INSTRUMENTS.iter().collect();
    }
    INSTRUMENTS
        .iter()
        .filter(|i| i.element == element || i.element == Element::All)
        .collect()
}

/// Instruments matching a petal (or the `Universal` petal), catalog order
pub fn instruments_by_petal(petal: &str) -> Vec<&'static Instrument> {
    INSTRUMENTS
        .iter()
        .filter(|i| i.petal == petal || i.petal == "Universal")
        .collect()
}
