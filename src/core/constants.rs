// Frame pacing
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;
/// Longest frame time fed to a game; longer stalls are clamped to this.
pub const MAX_FRAME_DT_MS: u64 = 100;

// Event polling
pub const EVENT_POLL_MS: u64 = 0;

// Terminal size needed to show the field, side panels and status bar
pub const MIN_TERMINAL_COLS: u16 = 60;
pub const MIN_TERMINAL_ROWS: u16 = 20;

// Side panel
pub const INFO_PANEL_WIDTH: u16 = 26;
pub const TRACKING_PANEL_HEIGHT: u16 = 12;
