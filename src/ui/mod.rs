//! Terminal rendering for the arcade.

pub mod catch_scene;
pub mod field_buffer;
pub mod game_common;
pub mod lock_scene;
pub mod shooter_scene;
pub mod tracking_panel;

use crate::core::FrameStats;
use crate::games::{ActiveGame, ArcadeGame, GameKind, Phase};
use crate::tracking::TrackingFrame;
use field_buffer::{fit_field_area, FieldBuffer};
use game_common::{
    create_game_layout, fits_terminal, render_panel_frame, render_status_bar, render_too_small,
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Borrowed snapshot of everything drawn in one frame.
pub struct ArcadeView<'a> {
    pub game: &'a ActiveGame,
    pub frame: &'a TrackingFrame,
    pub source: String,
    /// Extra key hints from the tracking source.
    pub key_hints: &'static [(&'static str, &'static str)],
    pub stats: &'a FrameStats,
}

/// Draw the whole screen. Returns where the play field landed, or `None` if
/// the terminal is too small to show it.
pub fn draw_arcade(frame: &mut Frame, view: &ArcadeView) -> Option<Rect> {
    let area = frame.size();
    if !fits_terminal(area) {
        render_too_small(frame, area);
        return None;
    }

    let kind = view.game.kind();
    let layout = create_game_layout(frame, area, kind.title(), border_color(kind));

    let (field_width, field_height) = kind.field_size();
    let field_area = fit_field_area(layout.content, field_width, field_height);
    let mut buffer = FieldBuffer::new(
        field_area.width,
        field_area.height,
        field_width,
        field_height,
    );

    let ((status, status_color), mut info) = match view.game {
        ActiveGame::Lock(game) => {
            lock_scene::render_field(&mut buffer, game);
            (lock_scene::status(game), lock_scene::info_lines(game))
        }
        ActiveGame::Catch(game) => {
            catch_scene::render_field(&mut buffer, game);
            (catch_scene::status(game), catch_scene::info_lines(game))
        }
        ActiveGame::Shooter(game) => {
            shooter_scene::render_field(&mut buffer, game);
            (shooter_scene::status(game), shooter_scene::info_lines(game))
        }
    };
    buffer.render(frame, field_area);

    let controls = controls_for(view.game.phase(), view.key_hints);
    render_status_bar(frame, layout.status_bar, &status, status_color, &controls);

    info.push(Line::from(""));
    info.push(Line::from(vec![
        Span::styled(" Phase:   ", Style::default().fg(Color::Gray)),
        Span::styled(
            view.game.phase().label(),
            Style::default().fg(phase_color(view.game.phase())),
        ),
    ]));
    let info_inner = render_panel_frame(frame, layout.info_panel, "Info");
    frame.render_widget(Paragraph::new(info), info_inner);

    tracking_panel::render_tracking_panel(
        frame,
        layout.tracking_panel,
        view.frame,
        view.stats,
        &view.source,
    );

    Some(field_area)
}

fn border_color(kind: GameKind) -> Color {
    match kind {
        GameKind::Lock => lock_scene::BORDER_COLOR,
        GameKind::Catch => catch_scene::BORDER_COLOR,
        GameKind::Shooter => shooter_scene::BORDER_COLOR,
    }
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::NotStarted => Color::Yellow,
        Phase::Running => Color::Green,
        Phase::Over => Color::Red,
    }
}

/// Status-bar controls: the on-screen button first, then source keys, then quit.
fn controls_for(
    phase: Phase,
    key_hints: &'static [(&'static str, &'static str)],
) -> Vec<(&'static str, &'static str)> {
    let mut controls = Vec::with_capacity(key_hints.len() + 2);
    match phase {
        Phase::NotStarted => controls.push(("[Enter]", "Start")),
        Phase::Over => controls.push(("[Enter]", "Restart")),
        Phase::Running => {}
    }
    controls.extend_from_slice(key_hints);
    controls.push(("[Q]", "Quit"));
    controls
}
