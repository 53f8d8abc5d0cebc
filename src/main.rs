//! FRP Pong headless host
//!
//! Runs the reduction loop against a ticker and a scripted demo player, with
//! snapshots going to the log. Usage: `frp-pong [config.json] [ticks]`.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use frp_pong::Config;
use frp_pong::input::{InputAdapter, RawInput};
use frp_pong::runtime::{EventStream, LogProjector, run};
use frp_pong::sim::{BodyHandles, Event, GameState};

const DEFAULT_TICKS: u64 = 20_000;
const DEMO_SEED: u64 = 0x5eed;

fn main() {
    env_logger::init();
    log::info!("FRP Pong (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(&path).unwrap_or_else(|e| {
            log::warn!("{}; using default config", e);
            Config::default()
        }),
        None => Config::default(),
    };
    let ticks = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    let interval = Duration::from_millis(config.tick_interval_ms);
    let stream = EventStream::new();
    let ticker = stream.spawn_ticker(interval, ticks);
    let player = spawn_demo_player(
        stream.sender(),
        InputAdapter::new(&config),
        &config,
        demo_duration(interval, ticks),
    );
    let events = stream.into_receiver();

    let initial = GameState::new(&config, BodyHandles::sequential());
    let mut projector = LogProjector::new();
    let last = run(initial, &config, events, &mut projector);

    for (name, handle) in [("ticker", ticker), ("demo player", player)] {
        if handle.join().is_err() {
            log::error!("{} thread panicked", name);
        }
    }

    match serde_json::to_string_pretty(&last) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}

/// How long the demo player keeps playing: as long as the ticker runs, saturating
fn demo_duration(interval: Duration, ticks: u64) -> Duration {
    interval.saturating_mul(u32::try_from(ticks).unwrap_or(u32::MAX))
}

/// Wanders the pointer over the canvas and pokes the power-up keys
fn spawn_demo_player(
    sender: Sender<Event>,
    adapter: InputAdapter,
    config: &Config,
    duration: Duration,
) -> JoinHandle<()> {
    let canvas_height = config.canvas_height;
    let keys = config.keys.clone();
    thread::spawn(move || {
        let mut rng = Pcg32::seed_from_u64(DEMO_SEED);
        let pause = Duration::from_millis(15);
        let mut y = canvas_height / 2.0;
        let mut elapsed = Duration::ZERO;

        let mut emit = |input: RawInput| match adapter.translate(&input) {
            Some(action) => sender.send(action.into()).is_ok(),
            None => true,
        };

        while elapsed < duration {
            y = (y + rng.random_range(-12.0..12.0)).clamp(0.0, canvas_height);
            let mut inputs = vec![RawInput::PointerMove { x: 0.0, y }];

            // A click starts the first game and restarts finished ones
            if elapsed.is_zero() || rng.random_bool(0.01) {
                inputs.push(RawInput::CenterTextClick);
            }
            if rng.random_bool(0.005) {
                inputs.push(RawInput::KeyDown {
                    key: keys.spawn_blocks.clone(),
                    repeat: false,
                });
            }
            for key in [&keys.enlarge, &keys.assist] {
                if rng.random_bool(0.01) {
                    inputs.push(RawInput::KeyDown {
                        key: key.clone(),
                        repeat: false,
                    });
                    inputs.push(RawInput::KeyUp { key: key.clone() });
                }
            }

            if !inputs.into_iter().all(&mut emit) {
                break;
            }
            thread::sleep(pause);
            elapsed += pause;
        }
    })
}
