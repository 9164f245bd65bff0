use duel::{
    Battle,
    CombatantData,
    MoveCatalog,
    MoveCategory,
    MoveData,
    RandomizeBaseDamage,
    Side,
    Stat,
    StatTable,
    Status,
    Type,
    TypeChart,
};
use duel_test_utils::{
    LogMatch,
    TestBattleBuilder,
    assert_turn_logs_eq,
    get_controlled_rng_for_battle,
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
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(RandomizeBaseDamage::Max)
        .with_combatant(Side::One, combatant_1)
        .with_combatant(Side::Two, combatant_2)
        .build(type_chart, move_catalog)
        .unwrap();
    // Every roll fails: moves hit, nothing is critical, and no status condition triggers.
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .fake_next_values(1000, 1);
    battle
}

fn expected(logs: &str) -> Vec<LogMatch> {
    serde_json::from_str(logs).unwrap()
}

#[test]
fn sleeping_combatant_wakes_after_counter_runs_out() {
    let chart = TypeChart::standard();
    let catalog = tackle_only();
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Snorlax", 200, 30, &["Normal"]).with_status(Status::Sleep, 2),
        combatant("Eevee", 200, 60, &["Normal"]),
    );
    battle.next_turn().unwrap();
    battle.next_turn().unwrap();
    assert_eq!(battle.combatant(Side::One).status(), Status::Sleep);
    assert_eq!(battle.combatant(Side::One).status_counter(), 0);
    battle.next_turn().unwrap();
    assert_eq!(battle.combatant(Side::One).status(), Status::None);

    assert_turn_logs_eq(
        &battle,
        1,
        &expected(
            r#"[
                "move|mon:Eevee,2|name:Tackle|target:Snorlax,1",
                "damage|mon:Snorlax,1|health:171/200",
                "cant|mon:Snorlax,1|reason:Sleep"
            ]"#,
        ),
    );
    assert_turn_logs_eq(
        &battle,
        2,
        &expected(
            r#"[
                "move|mon:Eevee,2|name:Tackle|target:Snorlax,1",
                "damage|mon:Snorlax,1|health:142/200",
                "cant|mon:Snorlax,1|reason:Sleep"
            ]"#,
        ),
    );
    assert_turn_logs_eq(
        &battle,
        3,
        &expected(
            r#"[
                "move|mon:Eevee,2|name:Tackle|target:Snorlax,1",
                "damage|mon:Snorlax,1|health:113/200",
                "curestatus|mon:Snorlax,1|status:Sleep",
                "move|mon:Snorlax,1|name:Tackle|target:Eevee,2",
                "damage|mon:Eevee,2|health:171/200"
            ]"#,
        ),
    );
}

#[test]
fn burn_deals_residual_damage_and_halves_attack() {
    let chart = TypeChart::standard();
    let catalog = tackle_only();
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Rattata", 160, 60, &["Normal"]).with_status(Status::Burn, 0),
        combatant("Eevee", 160, 40, &["Normal"]),
    );
    battle.next_turn().unwrap();
    assert_eq!(battle.combatant(Side::One).effective_stat(Stat::Atk), 25f64);
    assert_eq!(battle.combatant(Side::One).base_stat(Stat::Atk), 50);
    assert_turn_logs_eq(
        &battle,
        1,
        &expected(
            r#"[
                "damage|mon:Rattata,1|from:status:Burn|health:150/160",
                "move|mon:Rattata,1|name:Tackle|target:Eevee,2",
                "damage|mon:Eevee,2|health:144/160",
                "move|mon:Eevee,2|name:Tackle|target:Rattata,1",
                "damage|mon:Rattata,1|health:121/160"
            ]"#,
        ),
    );
}

#[test]
fn paralysis_slows_combatant_after_first_turn() {
    let chart = TypeChart::standard();
    let catalog = tackle_only();
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Jolteon", 200, 100, &["Electric"]).with_status(Status::Paralysis, 0),
        combatant("Eevee", 200, 60, &["Normal"]),
    );
    // Jolteon's paralysis check on turn 3.
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(13, 0);
    battle.next_turn().unwrap();
    assert_eq!(battle.combatant(Side::One).effective_stat(Stat::Spe), 50f64);
    battle.next_turn().unwrap();
    battle.next_turn().unwrap();

    assert_turn_logs_eq(
        &battle,
        1,
        &expected(
            r#"[
                "move|mon:Jolteon,1|name:Tackle|target:Eevee,2",
                "damage|mon:Eevee,2|health:181/200",
                "move|mon:Eevee,2|name:Tackle|target:Jolteon,1",
                "damage|mon:Jolteon,1|health:171/200"
            ]"#,
        ),
    );
    assert_turn_logs_eq(
        &battle,
        2,
        &expected(
            r#"[
                "move|mon:Eevee,2|name:Tackle|target:Jolteon,1",
                "damage|mon:Jolteon,1|health:142/200",
                "move|mon:Jolteon,1|name:Tackle|target:Eevee,2",
                "damage|mon:Eevee,2|health:162/200"
            ]"#,
        ),
    );
    assert_turn_logs_eq(
        &battle,
        3,
        &expected(
            r#"[
                "move|mon:Eevee,2|name:Tackle|target:Jolteon,1",
                "damage|mon:Jolteon,1|health:113/200",
                "cant|mon:Jolteon,1|reason:Paralysis"
            ]"#,
        ),
    );
}

#[test]
fn frozen_combatant_thaws_on_successful_roll() {
    let chart = TypeChart::standard();
    let catalog = tackle_only();
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Dewgong", 200, 70, &["Water", "Ice"]).with_status(Status::Freeze, 0),
        combatant("Eevee", 200, 60, &["Normal"]),
    );
    // Dewgong's thaw check on turn 2.
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(4, 0);
    battle.next_turn().unwrap();
    assert_eq!(battle.combatant(Side::One).status(), Status::Freeze);
    battle.next_turn().unwrap();
    assert_eq!(battle.combatant(Side::One).status(), Status::None);

    assert_turn_logs_eq(
        &battle,
        1,
        &expected(
            r#"[
                "cant|mon:Dewgong,1|reason:Freeze",
                "move|mon:Eevee,2|name:Tackle|target:Dewgong,1",
                "damage|mon:Dewgong,1|health:171/200"
            ]"#,
        ),
    );
    assert_turn_logs_eq(
        &battle,
        2,
        &expected(
            r#"[
                "curestatus|mon:Dewgong,1|status:Freeze",
                "move|mon:Dewgong,1|name:Tackle|target:Eevee,2",
                "damage|mon:Eevee,2|health:181/200",
                "move|mon:Eevee,2|name:Tackle|target:Dewgong,1",
                "damage|mon:Dewgong,1|health:142/200"
            ]"#,
        ),
    );
}

#[test]
fn appear_log_shows_starting_status() {
    let chart = TypeChart::standard();
    let catalog = tackle_only();
    let battle = make_battle(
        &chart,
        &catalog,
        combatant("Snorlax", 200, 30, &["Normal"]).with_status(Status::Sleep, 2),
        combatant("Gengar", 120, 110, &["Ghost", "Poison"]),
    );
    pretty_assertions::assert_eq!(
        battle.full_log().collect::<Vec<_>>(),
        vec![
            "battlestart",
            "appear|mon:Snorlax,1|health:200/200|types:Normal|status:Sleep",
            "appear|mon:Gengar,2|health:120/120|types:Ghost/Poison",
        ]
    );
}
