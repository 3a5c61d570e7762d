use std::collections::BTreeSet;

use anyhow::{Result, ensure};
use clap::Parser;
use game_core::{Direction, EntityId, Game, ScenarioConfig, TileKind};
use log::debug;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const MOVES: [Direction; 5] =
    [Direction::North, Direction::East, Direction::South, Direction::West, Direction::Hold];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for max {} turns...", args.seed, args.turns);
    let config = ScenarioConfig::default();
    let mut game = Game::from_config(&config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut removed: BTreeSet<EntityId> = BTreeSet::new();
    let mut last_food = game.state().player.food;

    for _ in 0..args.turns {
        // Toggle the slow condition now and then so both cadences get exercised.
        if rng.next_u64() % 5 == 0 {
            game.set_enemies_slowed(!game.enemies_slowed());
        }
        let round = game.play_turn(choose(&mut rng, &MOVES))?;
        debug!("turn {}: {:?}", round.turn, round.enemies.turns);

        for (enemy, _) in &round.enemies.turns {
            ensure!(!removed.contains(enemy), "Invariant failed: removed enemy {enemy:?} acted");
        }
        removed.extend(round.enemies.removed.iter().copied());

        let state = game.state();
        ensure!(state.player.food <= last_food, "Invariant failed: food increased");
        last_food = state.player.food;

        let mut occupied = BTreeSet::new();
        for enemy in state.enemies.iter() {
            ensure!(
                state.map.tile_at(enemy.pos()) != TileKind::Wall,
                "Invariant failed: enemy inside wall"
            );
            ensure!(occupied.insert(enemy.pos()), "Invariant failed: enemies share a tile");
        }

        if let Some(outcome) = round.outcome {
            println!("Finished with outcome {:?} after {} turns", outcome, round.turn);
            break;
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
