use duel::{
    BattleOptions,
    CombatantData,
    DataStoreByName,
    LocalDataStore,
    Side,
    sample_matchup,
};

fn species(data: &LocalDataStore, name: &str) -> CombatantData {
    CombatantData::from_species(&data.get_species_by_name(name).unwrap().unwrap())
}

#[test]
fn summarizes_reproducible_matchup() {
    let data = LocalDataStore::embedded().unwrap();
    let dragonite = species(&data, "Dragonite");
    let togekiss = species(&data, "Togekiss");
    let options = BattleOptions::default().with_seed(31415);
    let summary = sample_matchup(
        &dragonite,
        &togekiss,
        &data.type_chart,
        &data.moves,
        &options,
        50,
    )
    .unwrap();
    assert_eq!(summary.combatant_1, "Dragonite");
    assert_eq!(summary.combatant_2, "Togekiss");
    assert_eq!(summary.battles, 50);
    assert_eq!(summary.unfinished, 0);
    assert_eq!(summary.wins(Side::One) + summary.wins(Side::Two), 50);
    assert!(summary.longest_battle as f64 >= summary.mean_turns);
    let rates = summary.win_rate(Side::One) + summary.win_rate(Side::Two);
    assert!((rates - 1f64).abs() < 1e-9);

    let again = sample_matchup(
        &dragonite,
        &togekiss,
        &data.type_chart,
        &data.moves,
        &options,
        50,
    )
    .unwrap();
    assert_eq!(summary, again);
}
