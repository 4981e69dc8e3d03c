//! The three arcade minigames and the lifecycle they share.

pub mod catch;
pub mod lock;
pub mod shooter;

pub use catch::{CatchGame, Obstacle};
pub use lock::{LockGame, LockOutcome};
pub use shooter::{Asteroid, Bullet, ShooterGame};

use crate::geometry::FieldPoint;
use crate::tracking::HandLandmarks;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Coarse game flow. Within one run it only moves forward; `reset` is the
/// only way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Running,
    Over,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::NotStarted => "Ready",
            Phase::Running => "Running",
            Phase::Over => "Game Over",
        }
    }
}

/// Which minigame to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Lock,
    Catch,
    Shooter,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Lock, GameKind::Catch, GameKind::Shooter];

    /// Name used on the command line and in the config file.
    pub fn cli_name(self) -> &'static str {
        match self {
            GameKind::Lock => "lock",
            GameKind::Catch => "catch",
            GameKind::Shooter => "shooter",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GameKind::Lock => "Pop the Lock",
            GameKind::Catch => "Taco Catch",
            GameKind::Shooter => "Asteroid Therapy",
        }
    }

    /// Field size in pixels (width, height).
    pub fn field_size(self) -> (f64, f64) {
        match self {
            GameKind::Lock => (lock::FIELD_WIDTH, lock::FIELD_HEIGHT),
            GameKind::Catch => (catch::FIELD_WIDTH, catch::FIELD_HEIGHT),
            GameKind::Shooter => (shooter::FIELD_WIDTH, shooter::FIELD_HEIGHT),
        }
    }

    /// Native simulation rate in frames per second.
    pub fn frame_rate(self) -> u32 {
        match self {
            GameKind::Lock => lock::FRAME_RATE,
            GameKind::Catch => catch::FRAME_RATE,
            GameKind::Shooter => shooter::FRAME_RATE,
        }
    }
}

impl Default for GameKind {
    fn default() -> Self {
        GameKind::Lock
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKind::ALL
            .into_iter()
            .find(|kind| kind.cli_name() == s)
            .ok_or_else(|| format!("unknown game '{}' (expected lock, catch or shooter)", s))
    }
}

/// The lifecycle every minigame exposes to the frame loop.
pub trait ArcadeGame {
    fn kind(&self) -> GameKind;

    fn title(&self) -> &'static str {
        self.kind().title()
    }

    fn frame_rate(&self) -> u32 {
        self.kind().frame_rate()
    }

    fn phase(&self) -> Phase;

    fn score(&self) -> u32;

    /// NotStarted -> Running. No-op in any other phase.
    fn start(&mut self);

    /// Advance one frame with this frame's hands. `dt` is the wall time of
    /// the previous frame.
    fn tick(&mut self, hands: &[HandLandmarks], dt: Duration, rng: &mut dyn RngCore);

    fn is_over(&self) -> bool {
        self.phase() == Phase::Over
    }

    /// Reinitialize every run-scoped field and clear all entities. The phase
    /// returns to NotStarted.
    fn reset(&mut self, rng: &mut dyn RngCore);

    /// Mouse button-down at a field position. Returns true if it changed the phase.
    fn click(&mut self, at: FieldPoint, rng: &mut dyn RngCore) -> bool;

    /// Keyboard shortcut for whichever button is on screen.
    fn activate(&mut self, rng: &mut dyn RngCore) -> bool;
}

impl ArcadeGame for LockGame {
    fn kind(&self) -> GameKind {
        GameKind::Lock
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn start(&mut self) {
        lock::start(self);
    }

    fn tick(&mut self, hands: &[HandLandmarks], dt: Duration, rng: &mut dyn RngCore) {
        lock::tick(self, hands, dt.as_secs_f64(), rng);
    }

    fn reset(&mut self, rng: &mut dyn RngCore) {
        lock::reset(self, rng);
    }

    fn click(&mut self, at: FieldPoint, rng: &mut dyn RngCore) -> bool {
        lock::handle_click(self, at, rng)
    }

    fn activate(&mut self, rng: &mut dyn RngCore) -> bool {
        lock::activate_button(self, rng)
    }
}

impl ArcadeGame for CatchGame {
    fn kind(&self) -> GameKind {
        GameKind::Catch
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn start(&mut self) {
        catch::start(self);
    }

    fn tick(&mut self, hands: &[HandLandmarks], dt: Duration, rng: &mut dyn RngCore) {
        catch::tick(self, hands, dt.as_secs_f64(), rng);
    }

    fn reset(&mut self, _rng: &mut dyn RngCore) {
        catch::reset(self);
    }

    fn click(&mut self, at: FieldPoint, _rng: &mut dyn RngCore) -> bool {
        catch::handle_click(self, at)
    }

    fn activate(&mut self, _rng: &mut dyn RngCore) -> bool {
        catch::activate_button(self)
    }
}

impl ArcadeGame for ShooterGame {
    fn kind(&self) -> GameKind {
        GameKind::Shooter
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn start(&mut self) {
        shooter::start(self);
    }

    fn tick(&mut self, hands: &[HandLandmarks], _dt: Duration, rng: &mut dyn RngCore) {
        shooter::tick(self, hands, rng);
    }

    fn reset(&mut self, _rng: &mut dyn RngCore) {
        shooter::reset(self);
    }

    fn click(&mut self, _at: FieldPoint, _rng: &mut dyn RngCore) -> bool {
        shooter::handle_click(self)
    }

    fn activate(&mut self, _rng: &mut dyn RngCore) -> bool {
        shooter::handle_click(self)
    }
}

/// The minigame currently on screen.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Lock(LockGame),
    Catch(CatchGame),
    Shooter(ShooterGame),
}

impl ActiveGame {
    pub fn new(kind: GameKind, rng: &mut dyn RngCore) -> Self {
        match kind {
            GameKind::Lock => ActiveGame::Lock(LockGame::new(rng)),
            GameKind::Catch => ActiveGame::Catch(CatchGame::new()),
            GameKind::Shooter => ActiveGame::Shooter(ShooterGame::new()),
        }
    }

    fn inner(&self) -> &dyn ArcadeGame {
        match self {
            ActiveGame::Lock(game) => game,
            ActiveGame::Catch(game) => game,
            ActiveGame::Shooter(game) => game,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ArcadeGame {
        match self {
            ActiveGame::Lock(game) => game,
            ActiveGame::Catch(game) => game,
            ActiveGame::Shooter(game) => game,
        }
    }
}

impl ArcadeGame for ActiveGame {
    fn kind(&self) -> GameKind {
        self.inner().kind()
    }

    fn phase(&self) -> Phase {
        self.inner().phase()
    }

    fn score(&self) -> u32 {
        self.inner().score()
    }

    fn start(&mut self) {
        self.inner_mut().start();
    }

    fn tick(&mut self, hands: &[HandLandmarks], dt: Duration, rng: &mut dyn RngCore) {
        self.inner_mut().tick(hands, dt, rng);
    }

    fn reset(&mut self, rng: &mut dyn RngCore) {
        self.inner_mut().reset(rng);
    }

    fn click(&mut self, at: FieldPoint, rng: &mut dyn RngCore) -> bool {
        self.inner_mut().click(at, rng)
    }

    fn activate(&mut self, rng: &mut dyn RngCore) -> bool {
        self.inner_mut().activate(rng)
    }
}
