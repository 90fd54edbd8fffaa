//! End-to-end match setup tests.
//!
//! These drive the full flow a lobby uses: build a configuration from
//! card names, then complete it with `configure_match`, and check the
//! resulting supply against the published setup rules.

use kingdom_setup::cards::standard_registry;
use kingdom_setup::core::SetupRng;
use kingdom_setup::setup::{
    configure_match, random_kingdom, ColonyChoice, MatchBuilder, MatchConfiguration, PileTag,
};
use kingdom_setup::Expansion;

fn setup(names: &[&str], players: usize, seed: u64) -> MatchConfiguration {
    let registry = standard_registry();
    let mut config = MatchBuilder::new(players)
        .kingdom_cards(names)
        .build(&registry)
        .unwrap();
    let mut rng = SetupRng::new(seed);
    configure_match(&mut config, &registry, &mut rng);
    config
}

/// Test a plain Base-set match: basic supply only, no auxiliary piles.
#[test]
fn test_plain_base_match() {
    let config = setup(
        &[
            "Cellar", "Moat", "Village", "Workshop", "Militia", "Smithy", "Remodel", "Market",
            "Mine", "Witch",
        ],
        2,
        42,
    );

    assert_eq!(config.kingdom.len(), 10);
    assert_eq!(config.basic.len(), 7);
    assert!(config.non_supply.is_empty());
    assert!(config.kingdom_pile_tagged(PileTag::Bane).is_none());

    assert_eq!(config.basic_pile("Copper").unwrap().len(), 46);
    assert_eq!(config.basic_pile("Province").unwrap().len(), 8);
    assert_eq!(config.basic_pile("Curse").unwrap().len(), 10);
}

/// Test a match that exercises every auxiliary-pile rule at once.
#[test]
fn test_everything_match() {
    let config = setup(
        &[
            "Young Witch",
            "Ferryman",
            "Joust",
            "Marauder",
            "Hermit",
            "Urchin",
            "Bandit Camp",
            "Familiar",
            "Village",
            "Smithy",
        ],
        3,
        7,
    );

    // Young Witch: an eleventh pile tagged bane, costing $2-3
    let registry = standard_registry();
    let bane = config.kingdom_pile_tagged(PileTag::Bane).unwrap();
    let bane_card = registry.by_name(&bane.name).unwrap();
    assert!((2..=3).contains(&bane_card.cost.coins));

    // Ferryman: another extra pile, costing $3-4, distinct from the bane
    let target = config.kingdom_pile_tagged(PileTag::FerrymanTarget).unwrap();
    let target_card = registry.by_name(&target.name).unwrap();
    assert!((3..=4).contains(&target_card.cost.coins));
    assert_ne!(bane.name, target.name);

    // Marauder: Ruins sized for three players
    assert_eq!(config.kingdom_pile("Ruins").unwrap().len(), 20);

    // Hermit/Urchin/Bandit Camp: non-supply piles
    assert_eq!(config.non_supply_pile("Madman").unwrap().len(), 10);
    assert_eq!(config.non_supply_pile("Mercenary").unwrap().len(), 10);
    assert_eq!(config.non_supply_pile("Spoils").unwrap().len(), 15);

    // Joust: the six Reward piles of two
    for name in [
        "Coronet",
        "Courser",
        "Demesne",
        "Housecarl",
        "Huge Turnip",
        "Renown",
    ] {
        assert_eq!(config.non_supply_pile(name).unwrap().len(), 2, "{name}");
    }

    // Familiar: the Potion joins the basic supply
    assert_eq!(config.basic_pile("Potion").unwrap().len(), 16);

    // 10 chosen + bane + ferryman target + Ruins
    assert_eq!(config.kingdom.len(), 13);
}

/// Test that the same seed reproduces the identical configuration.
#[test]
fn test_setup_is_deterministic() {
    let names = [
        "Young Witch",
        "Marauder",
        "City",
        "Goons",
        "Village",
        "Hamlet",
        "Sage",
        "Smithy",
        "Market",
        "Witch",
    ];

    let a = setup(&names, 4, 1234);
    let b = setup(&names, 4, 1234);
    assert_eq!(a, b);

    // A different seed may legitimately coincide on the colony roll,
    // but the bane pick and Ruins order make collisions vanishingly
    // unlikely.
    let c = setup(&names, 4, 5678);
    assert_ne!(a, c);
}

/// Test that completing an already-complete configuration is a no-op.
#[test]
fn test_configure_match_is_idempotent() {
    let registry = standard_registry();
    let mut config = MatchBuilder::new(3)
        .kingdom_cards(&[
            "Young Witch",
            "Joust",
            "Cultist",
            "Hermit",
            "Pillage",
            "Familiar",
            "Village",
            "Smithy",
            "Market",
            "Witch",
        ])
        .colony(ColonyChoice::Always)
        .expansion(Expansion::Prosperity)
        .build(&registry)
        .unwrap();

    let mut rng = SetupRng::new(99);
    configure_match(&mut config, &registry, &mut rng);
    let after_first = config.clone();

    // A fresh RNG would make different picks; the guards must win.
    let mut rng = SetupRng::new(1000);
    configure_match(&mut config, &registry, &mut rng);
    assert_eq!(config, after_first);
}

/// Test pile sizing at the high player counts.
#[test]
fn test_six_player_sizing() {
    let config = setup(
        &["Marauder", "Gardens", "Village", "Smithy", "Witch"],
        6,
        3,
    );

    assert_eq!(config.basic_pile("Copper").unwrap().len(), 18);
    assert_eq!(config.basic_pile("Province").unwrap().len(), 18);
    assert_eq!(config.basic_pile("Curse").unwrap().len(), 50);
    assert_eq!(config.kingdom_pile("Ruins").unwrap().len(), 50);
    assert_eq!(config.kingdom_pile("Gardens").unwrap().len(), 12);
    assert_eq!(config.kingdom_pile("Village").unwrap().len(), 10);
}

/// Test a randomly drawn kingdom fed back through the full setup.
#[test]
fn test_random_kingdom_round_trip() {
    let registry = standard_registry();
    let rng = SetupRng::new(31337);
    let expansions = [Expansion::Base, Expansion::DarkAges];

    let ids = random_kingdom(&registry, &expansions, &[], 10, &rng);
    assert_eq!(ids.len(), 10);

    let names: Vec<String> = ids
        .iter()
        .map(|id| registry.get_unchecked(*id).name.clone())
        .collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let mut config = MatchBuilder::new(2)
        .kingdom_cards(&name_refs)
        .build(&registry)
        .unwrap();
    let mut match_rng = SetupRng::new(31337);
    configure_match(&mut config, &registry, &mut match_rng);

    assert!(config.kingdom.len() >= 10);
    assert_eq!(config.basic.len(), 7);
}

/// Test that the completed configuration serializes for the lobby echo.
#[test]
fn test_completed_configuration_serializes() {
    let config = setup(
        &["Young Witch", "Marauder", "Village", "Smithy", "Witch"],
        2,
        8,
    );

    let json = serde_json::to_string(&config).unwrap();
    let back: MatchConfiguration = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}
