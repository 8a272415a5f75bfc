use rltk::{Point, RGB};
use specs::prelude::*;

use crate::{
    components::{Name, Position, Renderable},
    player::Player,
};

pub fn spawn_player(ecs: &mut World, x: i32, y: i32) -> Entity {
    ecs.create_entity()
        .with(Position {
            point: Point::new(x, y),
        })
        .with(Renderable {
            glyph: rltk::to_cp437('@'),
            fg: RGB::from_u8(0, 255, 0),
            bg: RGB::named(rltk::BLACK),
        })
        .with(Player {})
        .with(Name {
            name: "Player".to_string(),
        })
        .build()
}

pub fn spawn_npc(ecs: &mut World, x: i32, y: i32) -> Entity {
    ecs.create_entity()
        .with(Position {
            point: Point::new(x, y),
        })
        .with(Renderable {
            glyph: rltk::to_cp437('@'),
            fg: RGB::from_u8(255, 0, 0),
            bg: RGB::named(rltk::BLACK),
        })
        .with(Name {
            name: "Stranger".to_string(),
        })
        .build()
}
