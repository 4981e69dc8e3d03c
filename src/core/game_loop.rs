//! The frame loop shared by every minigame.
//!
//! One frame is: drain terminal events, capture a tracking frame, tick the
//! game, render, then sleep out the rest of the frame budget. The loop owns
//! the provider, so dropping it (on any exit path) also stops a spawned
//! tracker process.

use crate::core::constants::{EVENT_POLL_MS, MAX_FPS, MAX_FRAME_DT_MS, MIN_FPS};
use crate::games::{ActiveGame, ArcadeGame, GameKind};
use crate::tracking::{FrameError, LandmarkProvider, TrackingFrame};
use crate::ui::{self, field_buffer::field_point_from_cell, ArcadeView};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use rand::RngCore;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Whether a call to [`FrameLoop::step`] advanced the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    /// Capture failed; the game was not ticked.
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Counters shown in the tracking panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub skipped_frames: u64,
    pub last_error: Option<String>,
    pub source_closed: bool,
}

pub struct FrameLoop<P: LandmarkProvider> {
    game: ActiveGame,
    provider: P,
    rng: Box<dyn RngCore>,
    last_frame: TrackingFrame,
    /// Where the play field was drawn last frame, for mouse mapping.
    field_area: Option<Rect>,
    stats: FrameStats,
}

impl<P: LandmarkProvider> FrameLoop<P> {
    pub fn new(kind: GameKind, provider: P, mut rng: Box<dyn RngCore>) -> Self {
        let game = ActiveGame::new(kind, rng.as_mut());
        log::info!("{} ready, tracking from {}", kind.title(), provider.describe());
        Self {
            game,
            provider,
            rng,
            last_frame: TrackingFrame::empty(),
            field_area: None,
            stats: FrameStats::default(),
        }
    }

    pub fn game(&self) -> &ActiveGame {
        &self.game
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn last_frame(&self) -> &TrackingFrame {
        &self.last_frame
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn field_area(&self) -> Option<Rect> {
        self.field_area
    }

    pub fn set_field_area(&mut self, area: Option<Rect>) {
        self.field_area = area;
    }

    /// Capture one tracking frame and tick the game with it. `dt` is the
    /// measured length of the previous frame.
    pub fn step(&mut self, dt: Duration) -> StepOutcome {
        let dt = clamp_frame_dt(dt);
        match self.provider.capture() {
            Ok(frame) => {
                self.game.tick(&frame.hands, dt, self.rng.as_mut());
                self.last_frame = frame;
                self.stats.frames += 1;
                StepOutcome::Advanced
            }
            Err(err) => {
                self.record_failure(&err);
                StepOutcome::Skipped
            }
        }
    }

    fn record_failure(&mut self, err: &FrameError) {
        self.stats.skipped_frames += 1;
        if let FrameError::Closed = err {
            log::info!("{}: {}, continuing without hands", self.provider.describe(), err);
            self.stats.source_closed = true;
        } else {
            log::warn!("Skipping frame: {}", err);
        }
        self.stats.last_error = Some(err.to_string());
    }

    /// Route one terminal event.
    pub fn handle_event(&mut self, event: &Event) -> LoopControl {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    self.handle_click(mouse.column, mouse.row);
                }
                LoopControl::Continue
            }
            _ => LoopControl::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> LoopControl {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return LoopControl::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return LoopControl::Quit
            }
            KeyCode::Enter => {
                self.game.activate(self.rng.as_mut());
            }
            _ => self.provider.observe_key(key),
        }
        LoopControl::Continue
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let Some(area) = self.field_area else {
            return;
        };
        let (width, height) = self.game.kind().field_size();
        if let Some(at) = field_point_from_cell(area, width, height, column, row) {
            log::debug!("Click at ({:.0}, {:.0})", at.x, at.y);
            self.game.click(at, self.rng.as_mut());
        }
    }

    /// Everything the renderer needs for one frame.
    pub fn view(&self) -> ArcadeView<'_> {
        ArcadeView {
            game: &self.game,
            frame: &self.last_frame,
            source: self.provider.describe(),
            key_hints: self.provider.key_hints(),
            stats: &self.stats,
        }
    }

    /// Take over the terminal and play until the user quits. The terminal is
    /// restored whether the loop ends normally or with an error.
    pub fn run(&mut self, fps: u32) -> io::Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.drive(&mut terminal, fps);
        let restored = restore_terminal(&mut terminal);
        log::info!(
            "Session over after {} frames ({} skipped)",
            self.stats.frames,
            self.stats.skipped_frames
        );
        result.and(restored)
    }

    fn drive<B: Backend>(&mut self, terminal: &mut Terminal<B>, fps: u32) -> io::Result<()> {
        let budget = frame_budget(fps);
        let mut dt = budget;
        loop {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                if self.handle_event(&event::read()?) == LoopControl::Quit {
                    return Ok(());
                }
            }

            self.step(dt);

            let mut field_area = None;
            terminal.draw(|frame| field_area = ui::draw_arcade(frame, &self.view()))?;
            self.field_area = field_area;

            let elapsed = frame_start.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
            dt = frame_start.elapsed();
        }
    }
}

/// Clamp a measured frame time to [`MAX_FRAME_DT_MS`].
pub fn clamp_frame_dt(dt: Duration) -> Duration {
    dt.min(Duration::from_millis(MAX_FRAME_DT_MS))
}

/// Wall time available to one frame at `fps`.
pub fn frame_budget(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(fps.clamp(MIN_FPS, MAX_FPS)))
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err);
    }
    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(err)
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()
}

/// Best-effort restore for the panic hook, where no terminal handle exists.
pub fn emergency_restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
}
