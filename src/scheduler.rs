//! Frame scheduler
//!
//! One call to [`FrameScheduler::frame`] is one display refresh: drain queued
//! commands, step the simulation if a run is live, persist a new best score,
//! then render unconditionally. The host (requestAnimationFrame on web, a
//! paced loop natively) decides when the next frame happens.

use crate::input::{Command, CommandQueue};
use crate::persistence::{ScoreStore, load_best_or_zero};
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::GameConfig;

/// Anything that can draw the current state
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// A simulation step ran
    pub stepped: bool,
    pub events: Vec<GameEvent>,
}

pub struct FrameScheduler<R, S> {
    state: GameState,
    commands: CommandQueue,
    renderer: R,
    store: S,
    frames: u64,
}

impl<R: Renderer, S: ScoreStore> FrameScheduler<R, S> {
    /// Build a session seeded with the stored best score
    pub fn new(config: GameConfig, seed: u64, renderer: R, store: S) -> Self {
        let best = load_best_or_zero(&store);
        Self {
            state: GameState::new(config, seed, best),
            commands: CommandQueue::new(),
            renderer,
            store,
            frames: 0,
        }
    }

    /// Queue a command for the next frame
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Run one frame
    pub fn frame(&mut self) -> FrameReport {
        let commands = self.commands.drain();
        let stepped = tick(&mut self.state, &commands);

        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::NewBest { score } = *event {
                if let Err(e) = self.store.save_best(score) {
                    log::warn!("Failed to persist best score {}: {}", score, e);
                }
            }
        }

        self.renderer.render(&self.state);
        self.frames += 1;

        FrameReport { stepped, events }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Frames run so far, stepped or not
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
