use crate::app::action::Action;
use crate::app::event::{AppEvent, PressId};
use crate::app::state::*;
use crate::counter::{Direction, PressPhase};
use crate::input::{map_key, KeyIntent};
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    let actions = match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::HoldElapsed { press } => {
            handle_hold_elapsed(state, press);
            vec![]
        }
        AppEvent::RepeatTick(timer) => {
            state.counter.on_repeat_tick(timer);
            vec![]
        }
    };

    publish_changes(state);
    actions
}

/// Drain what the counter published: log it, schedule a redraw and ring the
/// bell when the game is lost.
fn publish_changes(state: &mut AppState) {
    for change in state.take_changes() {
        info!(
            previous = change.previous,
            current = change.current,
            cause = ?change.cause,
            "life changed"
        );
        if change.is_loss() {
            info!("game lost");
            if state.config.ui.bell_on_loss {
                state.pending_bell = true;
            }
        }
        state.last_change = Some(change);
        state.dirty = true;
    }
}

fn handle_hold_elapsed(state: &mut AppState, press: PressId) {
    let Some(active) = state.press else {
        return;
    };
    if active.id != press {
        debug!(press, current = active.id, "stale hold timer ignored");
        return;
    }
    if state.counter.phase() == PressPhase::Pressing(active.direction) {
        state.counter.on_hold_start(active.direction);
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        CEvent::FocusLost => {
            state.abandon_press();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(intent) = map_key(&key) else {
        return vec![];
    };

    match (intent, key.kind) {
        (KeyIntent::Quit, KeyEventKind::Press) => vec![Action::Quit],
        (KeyIntent::Crown(detents), KeyEventKind::Press | KeyEventKind::Repeat) => {
            state.rotate_crown(detents);
            vec![]
        }
        (KeyIntent::Button(direction), KeyEventKind::Press) => {
            if state.key_releases {
                if state.press.is_some() {
                    return vec![];
                }
                begin_press(state, direction, PressSource::Keyboard)
            } else {
                // No release events: every press is a complete tap.
                state.counter.on_tap(direction);
                state.dirty = true;
                vec![]
            }
        }
        (KeyIntent::Button(direction), KeyEventKind::Release) => {
            if let Some(active) = state.press {
                if active.source == PressSource::Keyboard && active.direction == direction {
                    state.end_press();
                }
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(direction) = button_at(state.viewport, mouse.column, mouse.row) else {
                return vec![];
            };
            begin_press(state, direction, PressSource::Mouse)
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if state.press.map(|p| p.source) == Some(PressSource::Mouse) {
                state.end_press();
            }
            vec![]
        }
        MouseEventKind::ScrollUp => {
            state.rotate_crown(1);
            vec![]
        }
        MouseEventKind::ScrollDown => {
            state.rotate_crown(-1);
            vec![]
        }
        _ => vec![],
    }
}

fn begin_press(state: &mut AppState, direction: Direction, source: PressSource) -> Vec<Action> {
    let press = state.begin_press(direction, source);
    vec![Action::ArmHoldTimer {
        press,
        after: state.config.timing.hold_threshold(),
    }]
}

fn button_at(viewport: Rect, column: u16, row: u16) -> Option<Direction> {
    let app_layout = layout::compute_layout(viewport);
    let pos = Position::new(column, row);
    if app_layout.decrease_button.contains(pos) {
        Some(Direction::Decrease)
    } else if app_layout.increase_button.contains(pos) {
        Some(Direction::Increase)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::counter::scheduler::ManualScheduler;
    use crate::counter::ChangeCause;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use std::time::Duration;

    fn setup() -> (AppState, ManualScheduler) {
        let sched = ManualScheduler::new();
        let mut state = AppState::new(AppConfig::default(), Box::new(sched.clone()));
        state.viewport = Rect::new(0, 0, 60, 24);
        (state, sched)
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn center(r: Rect) -> (u16, u16) {
        (r.x + r.width / 2, r.y + r.height / 2)
    }

    fn run_ticks(state: &mut AppState, sched: &ManualScheduler, millis: u64) {
        for id in sched.advance(Duration::from_millis(millis)) {
            handle_event(state, AppEvent::RepeatTick(id));
        }
    }

    #[test]
    fn test_click_is_a_tap() {
        let (mut state, _) = setup();
        let app_layout = layout::compute_layout(state.viewport);
        let (x, y) = center(app_layout.increase_button);

        let actions = handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        assert_eq!(
            actions,
            vec![Action::ArmHoldTimer {
                press: 0,
                after: Duration::from_millis(500)
            }]
        );
        assert_eq!(state.held_direction(), Some(Direction::Increase));

        handle_event(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert_eq!(state.counter.value(), 41);
        assert!(state.press.is_none());

        // The hold timer for the finished press fires late and is ignored.
        handle_event(&mut state, AppEvent::HoldElapsed { press: 0 });
        assert!(!state.counter.is_repeating());
        assert_eq!(state.last_change.map(|c| c.cause), Some(ChangeCause::Tap));
    }

    #[test]
    fn test_click_outside_buttons_does_nothing() {
        let (mut state, _) = setup();
        let actions = handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert!(actions.is_empty());
        assert!(state.press.is_none());
    }

    #[test]
    fn test_long_press_repeats_until_release() {
        let (mut state, sched) = setup();
        let app_layout = layout::compute_layout(state.viewport);
        let (x, y) = center(app_layout.decrease_button);

        handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        handle_event(&mut state, AppEvent::HoldElapsed { press: 0 });
        assert_eq!(
            state.counter.phase(),
            PressPhase::Repeating(Direction::Decrease)
        );

        run_ticks(&mut state, &sched, 900);
        assert_eq!(state.counter.value(), 10);

        handle_event(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), x, y));
        run_ticks(&mut state, &sched, 900);
        assert_eq!(state.counter.value(), 10);
        assert_eq!(state.counter.phase(), PressPhase::Idle);
    }

    #[test]
    fn test_loss_rings_bell_when_enabled() {
        let (mut state, sched) = setup();
        state.config.ui.bell_on_loss = true;
        state.counter.apply_delta(-35);
        state.take_changes();

        handle_event(&mut state, key(KeyCode::Char('-'), KeyEventKind::Press));
        assert!(!state.pending_bell);

        state.counter.on_hold_start(Direction::Decrease);
        run_ticks(&mut state, &sched, 300);
        assert_eq!(state.counter.value(), 0);
        assert!(state.pending_bell);
    }

    #[test]
    fn test_keys_tap_without_release_events() {
        let (mut state, _) = setup();
        let actions = handle_event(&mut state, key(KeyCode::Up, KeyEventKind::Press));
        assert!(actions.is_empty());
        handle_event(&mut state, key(KeyCode::Char('+'), KeyEventKind::Press));
        handle_event(&mut state, key(KeyCode::Char('-'), KeyEventKind::Press));
        assert_eq!(state.counter.value(), 41);
        assert!(state.press.is_none());
    }

    #[test]
    fn test_keys_hold_with_release_events() {
        let (mut state, sched) = setup();
        state.key_releases = true;

        let actions = handle_event(&mut state, key(KeyCode::Char('+'), KeyEventKind::Press));
        assert_eq!(actions.len(), 1);
        // Autorepeat from the terminal must not start a second press.
        assert!(handle_event(&mut state, key(KeyCode::Char('+'), KeyEventKind::Press)).is_empty());
        handle_event(&mut state, key(KeyCode::Char('+'), KeyEventKind::Repeat));

        handle_event(&mut state, AppEvent::HoldElapsed { press: 0 });
        run_ticks(&mut state, &sched, 600);
        assert_eq!(state.counter.value(), 60);

        handle_event(&mut state, key(KeyCode::Char('+'), KeyEventKind::Release));
        assert!(state.press.is_none());
        assert!(!state.counter.is_repeating());
        assert_eq!(state.counter.value(), 60);
    }

    #[test]
    fn test_scroll_turns_crown() {
        let (mut state, _) = setup();
        // Default step is half a unit per notch.
        handle_event(&mut state, mouse(MouseEventKind::ScrollUp, 0, 0));
        assert_eq!(state.counter.value(), 41);
        handle_event(&mut state, mouse(MouseEventKind::ScrollUp, 0, 0));
        assert_eq!(state.counter.value(), 41);
        handle_event(&mut state, mouse(MouseEventKind::ScrollUp, 0, 0));
        assert_eq!(state.counter.value(), 42);
        handle_event(&mut state, key(KeyCode::Char('['), KeyEventKind::Press));
        handle_event(&mut state, key(KeyCode::Char('['), KeyEventKind::Press));
        assert_eq!(state.counter.value(), 41);
        handle_event(&mut state, mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(state.counter.value(), 40);
        assert_eq!(state.last_change.map(|c| c.cause), Some(ChangeCause::Rotation));
    }

    #[test]
    fn test_crown_wrap_is_ignored() {
        let (mut state, _) = setup();
        state.crown = crate::input::Crown::new(&crate::config::CrownConfig {
            step: 1.0,
            ..Default::default()
        });
        for _ in 0..100 {
            handle_event(&mut state, key(KeyCode::Char(']'), KeyEventKind::Press));
        }
        assert_eq!(state.counter.value(), 140);
        // 100 wraps to -99: one huge jump, dropped.
        handle_event(&mut state, key(KeyCode::Char(']'), KeyEventKind::Press));
        assert_eq!(state.counter.value(), 140);
        handle_event(&mut state, key(KeyCode::Char(']'), KeyEventKind::Press));
        assert_eq!(state.counter.value(), 141);
    }

    #[test]
    fn test_focus_lost_abandons_press_without_tap() {
        let (mut state, sched) = setup();
        let app_layout = layout::compute_layout(state.viewport);
        let (x, y) = center(app_layout.increase_button);
        handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        handle_event(&mut state, AppEvent::HoldElapsed { press: 0 });
        handle_event(&mut state, AppEvent::Terminal(CEvent::FocusLost));
        run_ticks(&mut state, &sched, 1000);
        assert_eq!(state.counter.value(), 40);
        assert!(state.press.is_none());
        assert_eq!(sched.active_count(), 0);
    }

    #[test]
    fn test_quit_and_resize() {
        let (mut state, _) = setup();
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Char('q'), KeyEventKind::Press)),
            vec![Action::Quit]
        );
        state.dirty = false;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(100, 40)));
        assert_eq!(state.viewport, Rect::new(0, 0, 100, 40));
        assert!(state.dirty);
    }
}
