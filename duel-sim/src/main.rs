mod render;

use std::{
    path::PathBuf,
    thread,
    time::Duration,
};

use anyhow::{
    Context,
    Result,
    anyhow,
};
use clap::Parser;
use duel::{
    Battle,
    BattleOptions,
    CombatantData,
    DataStoreByName,
    LocalDataStore,
    MatchupSummary,
    Side,
    SpeedTieResolution,
    sample_matchup,
};

use crate::render::{
    OutputFormat,
    render_entry,
    render_outcome,
};

/// Simulates a battle between two species.
#[derive(Parser)]
#[command(name = "duel-sim")]
#[command(about = "Runs 1v1 battles between two species", long_about = None)]
#[command(version)]
struct Args {
    /// Species of the first combatant.
    #[arg(default_value = "Mewtwo")]
    combatant_1: String,

    /// Species of the second combatant.
    #[arg(default_value = "Charizard")]
    combatant_2: String,

    /// Directory containing species.json and optional moves.json and type-chart.json.
    ///
    /// Uses the bundled species and standard tables by default.
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Seed for random number generation.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of turns after which a battle is abandoned.
    #[arg(long, default_value_t = 1000)]
    max_turns: u32,

    /// Number of moves each combatant draws from the catalog.
    #[arg(long)]
    moveset_size: Option<usize>,

    /// Resolve speed ties randomly instead of letting the first combatant act first.
    #[arg(long)]
    random_speed_ties: bool,

    /// Number of battles to run. More than one prints a summary instead of the battle log.
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Output format for battle events.
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Delay between printed events, in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Enables debug logging. Repeat for trace logging.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn battle_options(&self) -> BattleOptions {
        BattleOptions {
            seed: self.seed,
            max_turns: self.max_turns,
            moveset_size: self.moveset_size,
            speed_tie_resolution: if self.random_speed_ties {
                SpeedTieResolution::Random
            } else {
                SpeedTieResolution::Keep
            },
            ..BattleOptions::default()
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing_core::Level::WARN,
        1 => tracing_core::Level::DEBUG,
        _ => tracing_core::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn combatant(data: &LocalDataStore, name: &str) -> Result<CombatantData> {
    let species = data
        .get_species_by_name(name)?
        .ok_or_else(|| anyhow!("species \"{name}\" does not exist"))?;
    Ok(CombatantData::from_species(&species))
}

fn run_battle(
    data: &LocalDataStore,
    combatant_1: CombatantData,
    combatant_2: CombatantData,
    args: &Args,
) -> Result<()> {
    let mut battle = Battle::new(
        combatant_1,
        combatant_2,
        &data.type_chart,
        &data.moves,
        args.battle_options(),
    )?;
    let delay = Duration::from_millis(args.delay_ms);
    loop {
        for entry in battle.new_log_entries() {
            println!("{}", render_entry(entry, args.format)?);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        if let Some(winner) = battle.state().winner() {
            if let Some(outcome) =
                render_outcome(battle.combatant(winner).name(), battle.turn(), args.format)
            {
                println!("{outcome}");
            }
            return Ok(());
        }
        battle.next_turn()?;
    }
}

fn print_summary(summary: &MatchupSummary) {
    println!(
        "{} vs {} over {} battles (seed {})",
        summary.combatant_1, summary.combatant_2, summary.battles, summary.seed
    );
    for (side, name) in [
        (Side::One, &summary.combatant_1),
        (Side::Two, &summary.combatant_2),
    ] {
        println!(
            "  {name}: {} wins ({:.1}%)",
            summary.wins(side),
            summary.win_rate(side) * 100f64
        );
    }
    if summary.unfinished > 0 {
        println!("  unfinished: {}", summary.unfinished);
    }
    println!(
        "  mean turns: {:.2}, longest battle: {} turns",
        summary.mean_turns, summary.longest_battle
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let data = match &args.data_dir {
        Some(dir) => LocalDataStore::new(dir)
            .with_context(|| format!("failed to load data from {}", dir.display()))?,
        None => LocalDataStore::embedded()?,
    };
    let combatant_1 = combatant(&data, &args.combatant_1)?;
    let combatant_2 = combatant(&data, &args.combatant_2)?;

    if args.runs > 1 {
        let summary = sample_matchup(
            &combatant_1,
            &combatant_2,
            &data.type_chart,
            &data.moves,
            &args.battle_options(),
            args.runs,
        )?;
        print_summary(&summary);
        Ok(())
    } else {
        run_battle(&data, combatant_1, combatant_2, &args)
    }
}
