use catalog::Element;
use selection::*;

#[test]
fn test_at_most_one_selection_after_any_sequence() {
    let mut selector = InstrumentSelector::new();

    for id in ["voice", "flute", "nonexistent", "piano", "erhu"] {
        selector.select(id);
        // Exactly one id marked selected after every transition
        assert!(selector.selected_id().is_some());
    }
    assert_eq!(selector.selected_id(), Some("erhu"));
}

#[test]
fn test_submit_proposal_clears_selection() {
    let mut selector = InstrumentSelector::new();
    selector.select("piano");

    let draft = selector.begin_proposal();
    draft.name = "Hang Drum".to_string();
    draft.element = Element::Ether;
    draft.cultural_origin = "Swiss".to_string();
    draft.description = "Convex steel drum played with the hands".to_string();

    let submitted = selector.submit_proposal().unwrap();
    assert_eq!(submitted.name, "Hang Drum");

    // Terminal event: selection cleared, machine back to browsing
    assert!(selector.selected_id().is_none());
    assert!(!selector.is_proposing());
}

#[test]
fn test_incomplete_proposal_is_rejected_and_keeps_state() {
    let mut selector = InstrumentSelector::new();
    selector.select("piano");
    selector.begin_proposal().name = "Hang Drum".to_string();

    let err = selector.submit_proposal().unwrap_err();
    assert_eq!(
        err,
        SelectionError::IncompleteProposal {
            field: "description"
        }
    );
    // Rejected submit leaves the draft and the selection alone
    assert!(selector.is_proposing());
    assert_eq!(selector.selected_id(), Some("piano"));
}

#[test]
fn test_submit_outside_proposal_mode() {
    let mut selector = InstrumentSelector::new();
    assert_eq!(
        selector.submit_proposal().unwrap_err(),
        SelectionError::NotProposing
    );
}

#[test]
fn test_guild_then_instrument_flow() {
    // A member picks their guild, then an instrument filtered to it
    let mut guilds = GuildSelector::new();
    let guild = guilds.select("D20").unwrap();
    assert_eq!(guild.element, Element::Water);

    let mut instruments = InstrumentSelector::with_recommended(guild.element);
    let ids: Vec<&str> = instruments.filtered().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["voice", "saxophone", "harmonium", "erhu"]);

    instruments.select("saxophone");
    assert_eq!(
        instruments.selected_instrument().unwrap().name,
        "Saxophone"
    );
}

#[test]
fn test_selector_state_serializes() {
    let mut selector = InstrumentSelector::new();
    selector.select("guzheng");
    selector.set_filter(Element::Order);

    let json = serde_json::to_string(&selector).unwrap();
    let back: InstrumentSelector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, selector);
}
