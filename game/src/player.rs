use rltk::{Rltk, VirtualKeyCode};

use specs::prelude::*;
use specs_derive::Component;

use crate::actions::Action;

#[derive(Component, Debug)]
pub struct Player {}

pub fn key_action(key: Option<VirtualKeyCode>) -> Option<Action> {
    match key {
        None => None,
        Some(key) => match key {
            VirtualKeyCode::Up | VirtualKeyCode::K => Some(Action::Movement { dx: 0, dy: -1 }),
            VirtualKeyCode::Down | VirtualKeyCode::J => Some(Action::Movement { dx: 0, dy: 1 }),
            VirtualKeyCode::Left | VirtualKeyCode::H => Some(Action::Movement { dx: -1, dy: 0 }),
            VirtualKeyCode::Right | VirtualKeyCode::L => Some(Action::Movement { dx: 1, dy: 0 }),
            VirtualKeyCode::Escape => Some(Action::Escape),
            _ => None,
        },
    }
}

pub fn player_input(ctx: &Rltk) -> Option<Action> {
    key_action(ctx.key)
}
