use eframe::egui;
use snake_common::games::snake::Direction;

use crate::screen::UiEvent;

const BOUND_KEYS: [egui::Key; 12] = [
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::W,
    egui::Key::S,
    egui::Key::A,
    egui::Key::D,
    egui::Key::Space,
    egui::Key::Enter,
    egui::Key::Escape,
    egui::Key::P,
];

pub fn key_to_event(key: egui::Key) -> Option<UiEvent> {
    let event = match key {
        egui::Key::ArrowUp | egui::Key::W => UiEvent::Turn(Direction::Up),
        egui::Key::ArrowDown | egui::Key::S => UiEvent::Turn(Direction::Down),
        egui::Key::ArrowLeft | egui::Key::A => UiEvent::Turn(Direction::Left),
        egui::Key::ArrowRight | egui::Key::D => UiEvent::Turn(Direction::Right),
        egui::Key::Space | egui::Key::P => UiEvent::TogglePause,
        egui::Key::Enter => UiEvent::Play,
        egui::Key::Escape => UiEvent::Escape,
        _ => return None,
    };
    Some(event)
}

/// Events for every bound key pressed this frame, in a fixed order.
pub fn pressed_events(input: &egui::InputState) -> Vec<UiEvent> {
    BOUND_KEYS
        .iter()
        .filter(|key| input.key_pressed(**key))
        .filter_map(|key| key_to_event(*key))
        .collect()
}
