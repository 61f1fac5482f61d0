//! snake-runner: headless runner for the snakesim core.
//!
//! Usage:
//!   snake-runner --ticks 25 --seed 7
//!   snake-runner --board maps/arena.txt --ticks 100 --out final.txt

use anyhow::Result;
use snakesim_core::{engine::GameEngine, spawn::RandomFruitSpawner, state::GameState};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ticks = parse_arg(&args, "--ticks", 10u64);
    let seed = parse_arg(&args, "--seed", 42u64);
    let board_path = args
        .windows(2)
        .find(|w| w[0] == "--board")
        .map(|w| w[1].clone());
    let out_path = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| w[1].clone());
    let events_json = args.iter().any(|a| a == "--events-json");

    println!("snake-runner");
    println!("  board:  {}", board_path.as_deref().unwrap_or("<built-in>"));
    println!("  ticks:  {ticks}");
    println!("  seed:   {seed}");
    println!();

    let state = match &board_path {
        Some(path) => GameState::load(path)?,
        None => GameState::default_board(),
    };

    let mut spawner = RandomFruitSpawner::new(seed);
    let mut engine = GameEngine::new(state);
    let events = engine.run_ticks(ticks, &mut spawner)?;

    if events_json {
        for event in &events {
            println!("{}", serde_json::to_string(event)?);
        }
        println!();
    }

    print!("{}", engine.state.board.encode_to_string());
    println!();
    print_summary(&engine, events.len());

    if let Some(path) = out_path {
        engine.state.save(&path)?;
        log::info!("final board saved to {path}");
    }
    Ok(())
}

fn print_summary(engine: &GameEngine, event_count: usize) {
    let alive = engine.state.living_snakes();
    let dead = engine.state.snakes.len() - alive;
    println!("=== RUN SUMMARY ===");
    println!("  final tick: {}", engine.current_tick());
    println!("  snakes:     {alive} alive, {dead} dead");
    println!("  events:     {event_count}");
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
