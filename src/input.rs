//! Keyboard bindings for panel navigation.

use crate::nav::Direction;

/// What a key press asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Step(Direction),
    ToggleFocus,
}

/// Map a pressed key to a command. Modal dialogs swallow navigation keys.
pub fn command_for_key(key: egui::Key, modal_open: bool) -> Option<NavCommand> {
    if modal_open {
        return None;
    }
    match key {
        egui::Key::ArrowRight => Some(NavCommand::Step(Direction::Right)),
        egui::Key::ArrowLeft => Some(NavCommand::Step(Direction::Left)),
        egui::Key::F => Some(NavCommand::ToggleFocus),
        _ => None,
    }
}

/// Commands for every key pressed this frame, in event order.
pub fn collect_commands(events: &[egui::Event], modal_open: bool) -> Vec<NavCommand> {
    events
        .iter()
        .filter_map(|e| match e {
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
                ..
            } if !modifiers.any() => command_for_key(*key, modal_open),
            _ => None,
        })
        .collect()
}
