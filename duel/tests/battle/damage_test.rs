use duel::{
    Battle,
    BattleEvent,
    BattleOptions,
    CombatantData,
    DataStoreByName,
    LocalDataStore,
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

fn single_move(name: &str, typ: Type, category: MoveCategory) -> MoveCatalog {
    MoveCatalog::new(vec![MoveData::new(name, typ, 40, 100, category)]).unwrap()
}

fn make_battle<'d>(
    type_chart: &'d TypeChart,
    move_catalog: &'d MoveCatalog,
    combatant_1: CombatantData,
    combatant_2: CombatantData,
    randomize: RandomizeBaseDamage,
) -> Battle<'d> {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .with_base_damage_randomization(randomize)
        .with_combatant(Side::One, combatant_1)
        .with_combatant(Side::Two, combatant_2)
        .build(type_chart, move_catalog)
        .unwrap();
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .fake_next_values(1000, 1);
    battle
}

#[test]
fn immune_defender_takes_no_damage_and_skips_damage_rolls() {
    let chart = TypeChart::standard();
    let catalog = single_move("Thunder Shock", Type::Electric, MoveCategory::Special);
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Pikachu", 100, 90, &["Electric"]),
        combatant("Sandshrew", 100, 40, &["Ground"]),
        RandomizeBaseDamage::Max,
    );
    battle.next_turn().unwrap();
    assert_turn_logs_eq(
        &battle,
        1,
        &[
            "move|mon:Pikachu,1|name:Thunder Shock|target:Sandshrew,2".into(),
            "damage|mon:Sandshrew,2|health:100/100|immune".into(),
            "move|mon:Sandshrew,2|name:Thunder Shock|target:Pikachu,1".into(),
            "damage|mon:Pikachu,1|health:91/100|resisted".into(),
        ],
    );
    // Pikachu's accuracy check, then Sandshrew's accuracy and critical hit checks.
    assert_eq!(
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .sequence_count(),
        3
    );
}

#[test]
fn critical_hit_is_logged() {
    let chart = TypeChart::standard();
    let catalog = single_move("Tackle", Type::Normal, MoveCategory::Physical);
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Eevee", 100, 60, &["Normal"]),
        combatant("Sudowoodo", 100, 40, &["Rock"]),
        RandomizeBaseDamage::Max,
    );
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(2, 0);
    battle.next_turn().unwrap();
    assert_turn_logs_eq(
        &battle,
        1,
        &[
            "move|mon:Eevee,1|name:Tackle|target:Sudowoodo,2".into(),
            "damage|mon:Sudowoodo,2|health:78/100|resisted|crit".into(),
            "move|mon:Sudowoodo,2|name:Tackle|target:Eevee,1".into(),
            "damage|mon:Eevee,1|health:81/100".into(),
        ],
    );
}

#[test]
fn super_effective_hit_is_logged() {
    let chart = TypeChart::standard();
    let catalog = single_move("Water Gun", Type::Water, MoveCategory::Special);
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Squirtle", 100, 43, &["Water"]),
        combatant("Charmander", 100, 65, &["Fire"]),
        RandomizeBaseDamage::Max,
    );
    battle.next_turn().unwrap();
    assert_turn_logs_eq(
        &battle,
        1,
        &[
            "move|mon:Charmander,2|name:Water Gun|target:Squirtle,1".into(),
            "damage|mon:Squirtle,1|health:91/100|resisted".into(),
            "move|mon:Squirtle,1|name:Water Gun|target:Charmander,2".into(),
            "damage|mon:Charmander,2|health:42/100|supereffective".into(),
        ],
    );
}

#[test]
fn random_factor_scales_damage() {
    let chart = TypeChart::standard();
    let catalog = single_move("Tackle", Type::Normal, MoveCategory::Physical);
    let mut battle = make_battle(
        &chart,
        &catalog,
        combatant("Eevee", 100, 60, &["Normal"]),
        combatant("Rattata", 100, 40, &["Normal"]),
        RandomizeBaseDamage::Randomize,
    );
    // Eevee rolls the lowest random factor.
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(3, 15);
    battle.next_turn().unwrap();
    assert_turn_logs_eq(
        &battle,
        1,
        &[
            "move|mon:Eevee,1|name:Tackle|target:Rattata,2".into(),
            "damage|mon:Rattata,2|health:76/100".into(),
            "move|mon:Rattata,2|name:Tackle|target:Eevee,1".into(),
            "damage|mon:Eevee,1|health:71/100".into(),
        ],
    );
}

#[test]
fn immune_species_always_wins() {
    let data = LocalDataStore::embedded().unwrap();
    let gengar = data.get_species_by_name("Gengar").unwrap().unwrap();
    let snorlax = data.get_species_by_name("Snorlax").unwrap().unwrap();
    let catalog = single_move("Tackle", Type::Normal, MoveCategory::Physical);
    for seed in 0..10 {
        let result = simulate_battle(
            CombatantData::from_species(&snorlax),
            CombatantData::from_species(&gengar),
            &data.type_chart,
            &catalog,
            BattleOptions::default().with_seed(seed),
        )
        .unwrap();
        assert_eq!(result.winner, "Gengar");
        assert_eq!(result.winning_side, Side::Two);
        for entry in &result.log {
            if let BattleEvent::Damage { mon, damage, .. } = &entry.event {
                if mon.side == Side::Two {
                    assert_eq!(*damage, 0);
                }
            }
        }
    }
}
