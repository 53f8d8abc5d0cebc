//! Event stream and reduction loop
//!
//! Ticks and user actions from any number of producers are merged into one
//! channel. A single loop folds them into the game state strictly in arrival
//! order and hands each snapshot to the projector. When a tick and an input
//! arrive together, the channel decides their order; that order is the single
//! total order the loop sees, but it is not reproducible across runs.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::Config;
use crate::sim::{Event, GameState, Phase, SurfaceRequest, reduce_event};

/// Receives every snapshot the loop produces. Owns the visual elements.
pub trait Projector {
    fn project(&mut self, state: &GameState);
}

/// Merged stream of ticks and actions
pub struct EventStream {
    sender: Sender<Event>,
    receiver: Receiver<Event>,
}

impl EventStream {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A new producer handle
    pub fn sender(&self) -> Sender<Event> {
        self.sender.clone()
    }

    /// Start a producer sending `count` ticks, one per `interval`
    pub fn spawn_ticker(&self, interval: Duration, count: u64) -> JoinHandle<()> {
        let sender = self.sender();
        thread::spawn(move || {
            for _ in 0..count {
                thread::sleep(interval);
                if sender.send(Event::Tick).is_err() {
                    break;
                }
            }
        })
    }

    /// Close the stream's own producer handle and return the consumer end.
    /// The loop then ends once every handed-out sender is dropped.
    pub fn into_receiver(self) -> Receiver<Event> {
        self.receiver
    }
}

impl Default for EventStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold every event of `events` into `initial`, projecting each snapshot.
/// Returns the last snapshot once all producers have hung up.
pub fn run(
    initial: GameState,
    config: &Config,
    events: Receiver<Event>,
    projector: &mut dyn Projector,
) -> GameState {
    log::info!("Reduction loop started");
    projector.project(&initial);

    let mut steps: u64 = 0;
    let state = events.iter().fold(initial, |state, event| {
        let next = reduce_event(&state, &event, config);
        projector.project(&next);
        steps += 1;
        next
    });

    log::info!("Reduction loop stopped after {} steps", steps);
    state
}

/// Projector that writes snapshots to the log
#[derive(Debug, Default)]
pub struct LogProjector {
    last_phase: Option<Phase>,
    last_scores: (u32, u32),
    last_text: String,
    live_blocks: usize,
}

impl LogProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of block visuals currently alive on the surface
    pub fn live_blocks(&self) -> usize {
        self.live_blocks
    }
}

impl Projector for LogProjector {
    fn project(&mut self, state: &GameState) {
        for request in &state.requests {
            match request {
                SurfaceRequest::CreateBlock { handle, pos, .. } => {
                    self.live_blocks += 1;
                    log::debug!("create block {:?} at {:?}", handle, pos);
                }
                SurfaceRequest::RemoveBlock { handle } => {
                    self.live_blocks = self.live_blocks.saturating_sub(1);
                    log::debug!("remove block {:?}", handle);
                }
            }
        }

        let phase = state.phase();
        if self.last_phase != Some(phase) {
            log::info!("Phase: {:?}", phase);
            self.last_phase = Some(phase);
        }

        let scores = (state.left_score.score, state.right_score.score);
        if scores != self.last_scores {
            log::info!("Score: {} - {}", scores.0, scores.1);
            self.last_scores = scores;
        }

        if state.center_text.text != self.last_text {
            if !state.center_text.text.is_empty() {
                log::info!("{}", state.center_text.text);
            }
            self.last_text = state.center_text.text.clone();
        }

        log::trace!(
            "ball {:?} left {:?} right {:?}",
            state.ball.center,
            state.left_paddle.pos,
            state.right_paddle.pos
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Action, BodyHandles};

    /// Records every snapshot it sees
    #[derive(Default)]
    struct Recorder {
        states: Vec<GameState>,
    }

    impl Projector for Recorder {
        fn project(&mut self, state: &GameState) {
            self.states.push(state.clone());
        }
    }

    #[test]
    fn test_run_processes_events_in_order() {
        let config = Config::default();
        let initial = GameState::new(&config, BodyHandles::sequential());
        let stream = EventStream::new();
        let sender = stream.sender();
        let events = stream.into_receiver();

        sender.send(Event::Tick).unwrap();
        sender.send(Action::Click.into()).unwrap();
        sender.send(Event::Tick).unwrap();
        sender.send(Action::SpawnBlocks.into()).unwrap();
        drop(sender);

        let mut recorder = Recorder::default();
        let last = run(initial.clone(), &config, events, &mut recorder);

        // Initial snapshot plus one per event
        assert_eq!(recorder.states.len(), 5);
        assert_eq!(recorder.states[1], initial);
        assert_eq!(recorder.states[2].phase(), Phase::Running);
        assert_eq!(recorder.states[3].ball.center.x, 298.5);
        assert_eq!(last.blocks.len(), 36);
        assert_eq!(&last, recorder.states.last().unwrap());
    }

    #[test]
    fn test_ticker_feeds_loop() {
        let config = Config::default();
        let initial = GameState::new(&config, BodyHandles::sequential());
        let stream = EventStream::new();
        let ticker = stream.spawn_ticker(Duration::from_millis(1), 10);
        let events = stream.into_receiver();

        let mut recorder = Recorder::default();
        run(initial, &config, events, &mut recorder);
        ticker.join().unwrap();

        assert_eq!(recorder.states.len(), 11);
    }

    #[test]
    fn test_log_projector_tracks_block_visuals() {
        let config = Config::default();
        let state = GameState::new(&config, BodyHandles::sequential());
        let state = reduce_event(&state, &Action::Click.into(), &config);
        let state = reduce_event(&state, &Action::SpawnBlocks.into(), &config);

        let mut projector = LogProjector::new();
        projector.project(&state);
        assert_eq!(projector.live_blocks(), 36);
    }
}
