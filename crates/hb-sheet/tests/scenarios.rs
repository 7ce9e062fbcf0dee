//! End-to-end scenarios across dice, leveling, and the character sheet.

use hb_mechanics::{
    DiceSpec, LevelChange, LevelingEngine, MechError, Progress, roll_total, threshold,
};
use hb_sheet::{Ability, Alignment, Character, CharacterRecord, SheetError};

#[test]
fn level_one_to_two_and_back() {
    let mut c = Character::builder().build().unwrap();
    assert_eq!((c.level(), c.experience()), (1, 0));

    c.grant_experience(1000);
    assert_eq!((c.level(), c.experience()), (2, 1000));
    assert_eq!(c.experience_to_next_level(), 2000);
    assert_eq!(threshold(3), 3000);

    c.revoke_experience(500);
    assert_eq!((c.level(), c.experience()), (1, 500));
    assert_eq!(c.experience_to_next_level(), 500);
}

#[test]
fn experience_floor_at_level_one() {
    let mut c = Character::builder().build().unwrap();
    c.grant_experience(500);
    c.revoke_experience(1000);
    assert_eq!(c.level(), 1);
    assert_eq!(c.experience(), 0);
}

#[test]
fn engine_usable_without_a_character() {
    let mut progress = Progress::new();
    let mut engine = LevelingEngine::attach(&progress);
    let change = engine.grant_experience(&mut progress, 15_000);
    assert_eq!(change, LevelChange { from: 1, to: 6 });
    assert_eq!(engine.experience_to_next_level(), 21_000 - 15_000);
}

#[test]
fn ability_rolls_drop_the_lowest_die() {
    for _ in 0..10_000 {
        let total = roll_total(4, 6, 0, 1).unwrap();
        assert!((3..=18).contains(&total));
    }
}

#[test]
fn invalid_dice_never_roll() {
    assert!(matches!(
        DiceSpec::new(2, 6, 0, 3),
        Err(MechError::InvalidArgument(_))
    ));
    assert!(matches!(
        roll_total(2, 6, 0, 3),
        Err(MechError::InvalidArgument(_))
    ));
}

#[test]
fn character_survives_persistence() {
    let mut c = Character::builder()
        .with_alignment("tn".parse().unwrap())
        .with_ability(Ability::Charisma, 18)
        .build()
        .unwrap();
    c.grant_experience(6200);
    c.add_item("Lantern", 1).unwrap();

    let json = c.to_record().to_json().unwrap();
    let restored = Character::from_record(CharacterRecord::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.alignment(), Some(Alignment::TrueNeutral));
    assert_eq!(restored.ability(Ability::Charisma), 18);
    assert_eq!(restored.level(), 4);
    assert_eq!(restored.inventory().items(), c.inventory().items());
}

#[test]
fn errors_are_distinguishable() {
    let mut c = Character::builder().with_inventory_size(1).build().unwrap();
    c.add_item("Potion", 1).unwrap();

    assert!(matches!(
        c.add_item("Potion", 1),
        Err(SheetError::CapacityExceeded { .. })
    ));
    assert!(matches!(
        c.remove_item("Potion", 2),
        Err(SheetError::NotFound { .. })
    ));
    assert!(matches!(
        c.add_item("Potion", 0),
        Err(SheetError::InvalidArgument(_))
    ));
    assert!(matches!(
        "ABC".parse::<Alignment>(),
        Err(SheetError::InvalidArgument(_))
    ));
}
