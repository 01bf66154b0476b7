//! Maze Chase headless driver
//!
//! Runs a session without a display: ticks the simulation at 60 Hz on a
//! simulated (or real) clock, logs gameplay events, and prints JSON
//! snapshots a renderer could consume.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use serde::Serialize;

use maze_chase::consts::SIM_DT;
use maze_chase::sim::{
    GameEvent, GameRng, GameState, TickInput, WallSet, flee_input, tick,
};
use maze_chase::{Clock, ManualClock, SystemClock, Tuning};

#[derive(Debug, Parser)]
#[command(name = "maze-chase", about = "Run a headless maze chase session")]
struct Args {
    /// Seed for the enemy's wander headings
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Maximum number of ticks to run (300 s at 60 Hz by default)
    #[arg(long, default_value_t = 18_000)]
    ticks: u64,

    /// Tuning overrides (JSON); defaults are used if the file is missing
    #[arg(long, default_value = "maze-chase.json")]
    settings: PathBuf,

    /// Print a JSON snapshot every N ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,

    /// Let the flee autopilot steer the player
    #[arg(long)]
    autopilot: bool,

    /// Pace ticks against the wall clock instead of simulated time
    #[arg(long)]
    realtime: bool,
}

/// What a renderer/HUD needs for one frame
#[derive(Debug, Serialize)]
struct Snapshot {
    tick: u64,
    elapsed: String,
    lives: u8,
    player: EntityView,
    enemy: EntityView,
    events: Vec<GameEvent>,
}

#[derive(Debug, Serialize)]
struct EntityView {
    x: f32,
    y: f32,
    radius: f32,
    /// Player: blink flag. Enemy: always true.
    visible: bool,
    /// Enemy only
    chasing: bool,
}

impl Snapshot {
    fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            elapsed: state.elapsed_label(),
            lives: state.lives(),
            player: EntityView {
                x: state.player.pos.x,
                y: state.player.pos.y,
                radius: state.player.radius,
                visible: state.player.is_visible(),
                chasing: false,
            },
            enemy: EntityView {
                x: state.enemy.pos.x,
                y: state.enemy.pos.y,
                radius: state.enemy.radius,
                visible: true,
                chasing: state.enemy.is_chasing(),
            },
            events: state.events.clone(),
        }
    }
}

/// Session driver holding everything the loop owns
struct Game<C: Clock> {
    state: GameState,
    walls: WallSet,
    clock: C,
    rng: GameRng,
    autopilot: bool,
}

impl<C: Clock> Game<C> {
    fn new(tuning: Tuning, clock: C, seed: u64, autopilot: bool) -> Self {
        let mut rng = GameRng::new(seed);
        let state = GameState::new(tuning, &clock, &mut rng);
        log::info!("Game initialized with seed: {}", rng.seed());
        Self {
            state,
            walls: WallSet::maze(),
            clock,
            rng,
            autopilot,
        }
    }

    fn frame(&mut self) {
        let input = if self.autopilot {
            flee_input(&self.state, &self.walls)
        } else {
            TickInput::default()
        };
        tick(
            &mut self.state,
            &input,
            &self.walls,
            &self.clock,
            &mut self.rng,
        );

        for event in &self.state.events {
            match event {
                GameEvent::Hit {
                    lives_left,
                    elapsed,
                } => log::info!("Caught at {:.1}s, {} lives left", elapsed, lives_left),
                GameEvent::GameOver { elapsed } => log::info!("Game over at {:.1}s", elapsed),
                GameEvent::Won { elapsed } => log::info!("Won at {:.1}s", elapsed),
            }
        }
    }

    fn emit_snapshot(&self) -> Result<(), serde_json::Error> {
        println!("{}", serde_json::to_string(&Snapshot::capture(&self.state))?);
        Ok(())
    }
}

fn run<C: Clock>(
    mut game: Game<C>,
    args: &Args,
    mut advance: impl FnMut(&mut C),
) -> Result<(), serde_json::Error> {
    game.state.start(&game.clock);

    for n in 1..=args.ticks {
        advance(&mut game.clock);
        game.frame();

        if args.snapshot_every > 0 && n % args.snapshot_every == 0 {
            game.emit_snapshot()?;
        }
        if game.state.is_over() {
            break;
        }
    }

    game.emit_snapshot()?;
    log::info!(
        "Session ended: {:?} after {} ticks ({}s)",
        game.state.phase,
        game.state.time_ticks,
        game.state.elapsed_label()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::info!("Maze Chase (headless) starting...");

    let tuning = Tuning::load_or_default(&args.settings).inspect_err(|e| {
        log::error!("{}", e);
    })?;

    if args.realtime {
        let game = Game::new(tuning, SystemClock::new(), args.seed, args.autopilot);
        run(game, &args, |_| std::thread::sleep(Duration::from_secs_f64(SIM_DT)))?;
    } else {
        let game = Game::new(tuning, ManualClock::new(0.0), args.seed, args.autopilot);
        run(game, &args, |clock| clock.advance(SIM_DT))?;
    }
    Ok(())
}
