//! Terminal host: wires the engine to crossterm input, the adaptive tick
//! chain, and a fixed-rate ratatui frame timer.
//!
//! Everything runs on one thread; the `select!` arms execute one at a
//! time, so the engine is never entered re-entrantly.

use std::io::{stderr, Stderr};
use std::pin::Pin;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::{interval, sleep, Instant, Sleep};

use crate::game::{FoodSpawner, GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::render::{FrameStore, Renderer};
use crate::tick::TickScheduler;

/// Frames redraw at ~30 FPS regardless of the tick rate.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

pub struct Host {
    config: GameConfig,
    engine: GameEngine<FrameStore>,
    frames: FrameStore,
    scheduler: TickScheduler,
    input: InputHandler,
    renderer: Renderer,
    should_quit: bool,
}

impl Host {
    pub fn new(config: GameConfig) -> Self {
        let frames = FrameStore::new();
        let engine = GameEngine::new(&config, FoodSpawner::new(), frames.clone());
        let renderer = Renderer::new(config.scale);

        Self {
            config,
            engine,
            frames,
            scheduler: TickScheduler::new(),
            input: InputHandler::new(),
            renderer,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut events = EventStream::new();
        let mut frame_timer = interval(FRAME_INTERVAL);

        // The one outstanding automatic tick. It is reset in place when an
        // accepted key press advances out of band, and left unarmed once
        // the game is over (the `if` guard below stops polling it).
        let delay = sleep(self.scheduler.next_delay(self.engine.score()));
        tokio::pin!(delay);

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, delay.as_mut());
                    }
                }

                () = &mut delay, if !self.engine.is_over() => {
                    let result = self.engine.advance();
                    if !result.terminated {
                        self.rearm(delay.as_mut());
                    }
                }

                _ = frame_timer.tick() => {
                    if let Some(snap) = self.frames.latest() {
                        terminal
                            .draw(|f| self.renderer.draw(f, &snap, &self.config))
                            .context("failed to draw frame")?;
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, delay: Pin<&mut Sleep>) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input.handle_key_event(key) {
            KeyAction::Move(direction) => {
                // An accepted turn has already advanced; replace the
                // pending scheduled tick rather than stacking another.
                if let Some(result) = self.engine.set_direction(direction) {
                    if !result.terminated {
                        self.rearm(delay);
                    }
                }
            }
            KeyAction::Restart => {
                self.reset_game();
                self.rearm(delay);
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn rearm(&mut self, delay: Pin<&mut Sleep>) {
        delay.reset(Instant::now() + self.scheduler.next_delay(self.engine.score()));
    }

    /// Replaces the engine outright; a finished game stays frozen, restart
    /// never mutates it.
    fn reset_game(&mut self) {
        self.engine = GameEngine::new(&self.config, FoodSpawner::new(), self.frames.clone());
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}
