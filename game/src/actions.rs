use rltk::{console, Point};
use specs::prelude::*;
use util::vec_ops;

use crate::components::{Name, Position};
use crate::map::Map;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Action {
    Escape,
    Movement { dx: i32, dy: i32 },
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ActionOutcome {
    Moved,
    Blocked,
    Quit,
}

impl Action {
    /// Applies the action on behalf of `entity`.
    pub fn perform(&self, ecs: &World, entity: Entity) -> ActionOutcome {
        match *self {
            Action::Escape => {
                let names = ecs.read_storage::<Name>();
                if let Some(name) = names.get(entity) {
                    console::log(format!("{} leaves the dungeon", name.name));
                }
                ActionOutcome::Quit
            }
            Action::Movement { dx, dy } => try_move(ecs, entity, dx, dy),
        }
    }
}

fn try_move(ecs: &World, entity: Entity, dx: i32, dy: i32) -> ActionOutcome {
    let map = ecs.fetch::<Map>();
    let mut positions = ecs.write_storage::<Position>();

    if let Some(pos) = positions.get_mut(entity) {
        let (dest_x, dest_y) = vec_ops::offset((pos.point.x, pos.point.y), (dx, dy));
        if !map.in_bounds(dest_x, dest_y) {
            return ActionOutcome::Blocked;
        }
        if !map.is_walkable(dest_x, dest_y) {
            return ActionOutcome::Blocked;
        }

        pos.point = Point::new(dest_x, dest_y);
        return ActionOutcome::Moved;
    }

    ActionOutcome::Blocked
}
