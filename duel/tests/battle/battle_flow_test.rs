use assert_matches::assert_matches;
use duel::{
    Battle,
    BattleError,
    BattleOptions,
    BattleState,
    CombatantData,
    MoveCatalog,
    MoveCategory,
    MoveData,
    RandomizeBaseDamage,
    Side,
    StatTable,
    Type,
    TypeChart,
    simulate_battle,
};
use duel_test_utils::{
    LogMatch,
    TestBattleBuilder,
    assert_error_message,
    assert_error_message_contains,
    assert_logs_since_start_eq,
    assert_new_logs_eq,
    assert_turn_logs_eq,
    get_controlled_rng_for_battle,
    setup_test_environment,
};

fn combatant(name: &str, hp: u16, spe: u16, types: &[&str]) -> CombatantData {
    CombatantData::new(
        name,
        StatTable {
            hp,
            atk: 50,
            def: 50,
            spa: 50,
            spd: 50,
            spe,
        },
        types,
    )
    .unwrap()
}

fn tackle_only() -> MoveCatalog {
    MoveCatalog::new(vec![MoveData::new(
        "Tackle",
        Type::Normal,
        40,
        100,
        MoveCategory::Physical,
    )])
    .unwrap()
}

fn make_battle<'d>(
    type_chart: &'d TypeChart,
    move_catalog: &'d MoveCatalog,
    combatant_1: CombatantData,
    combatant_2: CombatantData,
) -> Battle<'d> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(RandomizeBaseDamage::Max)
        .with_combatant(Side::One, combatant_1)
        .with_combatant(Side::Two, combatant_2)
        .build(type_chart, move_catalog)
        .unwrap()
}

// Every accuracy check hits and no hit is critical.
fn never_miss_or_crit(battle: &mut Battle) {
    get_controlled_rng_for_battle(battle)
        .unwrap()
        .fake_next_values(1000, 1);
}

fn run_to_completion(battle: &mut Battle) {
    while !battle.next_turn().unwrap().is_over() {}
}

#[test]
fn faster_combatant_loses_race_to_stronger_hits() {
    setup_test_environment();
    let chart = TypeChart::standard();
    let catalog = tackle_only();
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Eevee", 100, 60, &["Normal"]),
        combatant("Sudowoodo", 100, 40, &["Rock"]),
    );
    never_miss_or_crit(&mut battle);
    run_to_completion(&mut battle);
    assert_eq!(battle.state(), BattleState::CombatantTwoWins);
    assert_eq!(battle.turn(), 6);

    let expected_logs = serde_json::from_str::<Vec<LogMatch>>(
        r#"[
            "appear|mon:Eevee,1|health:100/100|types:Normal",
            "appear|mon:Sudowoodo,2|health:100/100|types:Rock",
            "turn|turn:1",
            "move|mon:Eevee,1|name:Tackle|target:Sudowoodo,2",
            "damage|mon:Sudowoodo,2|health:86/100|resisted",
            "move|mon:Sudowoodo,2|name:Tackle|target:Eevee,1",
            "damage|mon:Eevee,1|health:81/100",
            "turn|turn:2",
            "move|mon:Eevee,1|name:Tackle|target:Sudowoodo,2",
            "damage|mon:Sudowoodo,2|health:72/100|resisted",
            "move|mon:Sudowoodo,2|name:Tackle|target:Eevee,1",
            "damage|mon:Eevee,1|health:62/100",
            "turn|turn:3",
            "move|mon:Eevee,1|name:Tackle|target:Sudowoodo,2",
            "damage|mon:Sudowoodo,2|health:58/100|resisted",
            "move|mon:Sudowoodo,2|name:Tackle|target:Eevee,1",
            "damage|mon:Eevee,1|health:43/100",
            "turn|turn:4",
            "move|mon:Eevee,1|name:Tackle|target:Sudowoodo,2",
            "damage|mon:Sudowoodo,2|health:44/100|resisted",
            "move|mon:Sudowoodo,2|name:Tackle|target:Eevee,1",
            "damage|mon:Eevee,1|health:24/100",
            "turn|turn:5",
            "move|mon:Eevee,1|name:Tackle|target:Sudowoodo,2",
            "damage|mon:Sudowoodo,2|health:30/100|resisted",
            "move|mon:Sudowoodo,2|name:Tackle|target:Eevee,1",
            "damage|mon:Eevee,1|health:5/100",
            "turn|turn:6",
            "move|mon:Eevee,1|name:Tackle|target:Sudowoodo,2",
            "damage|mon:Sudowoodo,2|health:16/100|resisted",
            "move|mon:Sudowoodo,2|name:Tackle|target:Eevee,1",
            "damage|mon:Eevee,1|health:0/100",
            "faint|mon:Eevee,1",
            "win|mon:Sudowoodo,2"
        ]"#,
    )
    .unwrap();
    assert_logs_since_start_eq(&battle, &expected_logs);
}

#[test]
fn finished_battle_does_not_advance() {
    let chart = TypeChart::standard();
    let catalog = tackle_only();
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Eevee", 200, 60, &["Normal"]),
        combatant("Magikarp", 1, 40, &["Water"]),
    );
    never_miss_or_crit(&mut battle);
    assert_matches!(battle.next_turn(), Ok(BattleState::CombatantOneWins));
    let log_length = battle.log().len();
    assert_matches!(battle.next_turn(), Ok(BattleState::CombatantOneWins));
    assert_eq!(battle.turn(), 1);
    assert_eq!(battle.log().len(), log_length);
    assert_turn_logs_eq(
        &battle,
        1,
        &[
            "move|mon:Eevee,1|name:Tackle|target:Magikarp,2".into(),
            "damage|mon:Magikarp,2|health:0/1".into(),
            "faint|mon:Magikarp,2".into(),
            "win|mon:Eevee,1".into(),
        ],
    );
}

#[test]
fn reads_out_new_log_entries_per_turn() {
    let chart = TypeChart::standard();
    let catalog = tackle_only();
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Eevee", 100, 60, &["Normal"]),
        combatant("Sudowoodo", 100, 40, &["Rock"]),
    );
    never_miss_or_crit(&mut battle);
    assert_new_logs_eq(
        &mut battle,
        &[
            "battlestart".into(),
            LogMatch::Substrings(vec!["appear".to_owned(), "Eevee,1".to_owned()]),
            LogMatch::Substrings(vec!["appear".to_owned(), "Sudowoodo,2".to_owned()]),
        ],
    );
    battle.next_turn().unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:1".into(),
            "move|mon:Eevee,1|name:Tackle|target:Sudowoodo,2".into(),
            "damage|mon:Sudowoodo,2|health:86/100|resisted".into(),
            "move|mon:Sudowoodo,2|name:Tackle|target:Eevee,1".into(),
            "damage|mon:Eevee,1|health:81/100".into(),
        ],
    );
    assert_new_logs_eq(&mut battle, &[]);
}

#[test]
fn missed_move_deals_no_damage() {
    let chart = TypeChart::standard();
    let catalog = MoveCatalog::new(vec![MoveData::new(
        "Rock Slide",
        Type::Rock,
        75,
        90,
        MoveCategory::Physical,
    )])
    .unwrap();
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Onix", 100, 70, &["Rock", "Ground"]),
        combatant("Geodude", 100, 20, &["Rock", "Ground"]),
    );
    never_miss_or_crit(&mut battle);
    // 95 % 100 is not below 90.
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(1, 95);
    battle.next_turn().unwrap();
    assert_turn_logs_eq(
        &battle,
        1,
        &[
            "move|mon:Onix,1|name:Rock Slide|target:Geodude,2".into(),
            "miss|mon:Onix,1|target:Geodude,2".into(),
            "move|mon:Geodude,2|name:Rock Slide|target:Onix,1".into(),
            LogMatch::Substrings(vec!["damage".to_owned(), "mon:Onix,1".to_owned()]),
        ],
    );
    assert_eq!(battle.combatant(Side::Two).current_health(), 100);
}

#[test]
fn abandons_battle_at_turn_limit() {
    let chart = TypeChart::standard();
    let catalog = tackle_only();
    let result = simulate_battle(
        combatant("Gastly", 30, 80, &["Ghost"]),
        combatant("Haunter", 45, 95, &["Ghost"]),
        &chart,
        &catalog,
        BattleOptions {
            max_turns: 25,
            ..BattleOptions::default().with_seed(100)
        },
    );
    assert_matches!(result, Err(BattleError::TurnLimitExceeded { turns: 25 }));
}

#[test]
fn rejects_invalid_input() {
    let chart = TypeChart::standard();
    let catalog = tackle_only();
    let mut no_health = combatant("Shedinja", 1, 40, &["Bug", "Ghost"]);
    no_health.stats.hp = 0;
    assert_error_message(
        simulate_battle(
            no_health,
            combatant("Eevee", 100, 60, &["Normal"]),
            &chart,
            &catalog,
            BattleOptions::default(),
        ),
        "invalid combatant \"Shedinja\": hp must be positive",
    );

    assert_error_message(
        simulate_battle(
            combatant("Eevee", 100, 60, &["Normal"]),
            combatant("Eevee", 100, 60, &["Normal"]),
            &chart,
            &catalog,
            BattleOptions {
                moveset_size: Some(2),
                ..BattleOptions::default()
            },
        ),
        "invalid battle options: moveset_size 2 exceeds the 1 moves in the catalog",
    );

    assert_error_message_contains(
        CombatantData::new(
            "Missingno",
            StatTable {
                hp: 33,
                atk: 136,
                def: 0,
                spa: 6,
                spd: 6,
                spe: 29,
            },
            &["Bird"],
        ),
        "unknown type",
    );
}
