//! Keyboard input for the terminal front end.
//!
//! Terminals report presses and repeats but no releases, so a direction
//! counts as held for a short window after its last event.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::entity::Direction;

const INPUT_HOLD_MS: u64 = 160;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Steer(Direction),
    Quit,
}

pub fn control_for(key: KeyEvent) -> Option<Control> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Control::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Control::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Control::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Control::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Control::Steer(Direction::Right)),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct InputState {
    last_seen: [Option<Instant>; 4],
    last_pressed: Option<Direction>,
}

impl InputState {
    pub fn press(&mut self, dir: Direction, at: Instant) {
        self.last_seen[idx_for_dir(dir)] = Some(at);
        self.last_pressed = Some(dir);
    }

    /// The most recently pressed direction still within the hold window.
    pub fn active(&self, now: Instant) -> Option<Direction> {
        let hold = Duration::from_millis(INPUT_HOLD_MS);
        let held = |t: Instant| now.saturating_duration_since(t) <= hold;
        if let Some(dir) = self.last_pressed {
            if self.last_seen[idx_for_dir(dir)].is_some_and(held) {
                return Some(dir);
            }
        }
        let mut best: Option<(Direction, Instant)> = None;
        for (idx, dir) in ALL_DIRS.iter().enumerate() {
            if let Some(t) = self.last_seen[idx].filter(|t| held(*t)) {
                match best {
                    Some((_, bt)) if t <= bt => {}
                    _ => best = Some((*dir, t)),
                }
            }
        }
        best.map(|(dir, _)| dir)
    }
}

const ALL_DIRS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn idx_for_dir(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}
