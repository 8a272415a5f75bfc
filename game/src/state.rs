use rltk::{GameState, Point, RandomNumberGenerator, Rltk};

use specs::prelude::*;

use crate::actions::ActionOutcome;
use crate::components::{Name, Position, Renderable};
use crate::config::DungeonConfig;
use crate::map::Map;
use crate::player::{player_input, Player};
use crate::{procgen, spawner};

pub struct State {
    pub ecs: World,

    // sentinel to make sure we don't draw more than we need to
    pub map_drawn: bool,
}

impl State {
    /// Registers components, spawns the player and a stranger, and generates the level.
    pub fn new(config: &DungeonConfig, rng: &mut RandomNumberGenerator) -> State {
        let mut ecs = World::new();
        ecs.register::<Position>();
        ecs.register::<Renderable>();
        ecs.register::<Player>();
        ecs.register::<Name>();

        let mut player_pos = Point::new(config.screen_width / 2, config.screen_height / 2);
        let player = spawner::spawn_player(&mut ecs, player_pos.x, player_pos.y);
        spawner::spawn_npc(&mut ecs, player_pos.x - 5, player_pos.y);

        let map = procgen::generate_dungeon(config, rng, &mut player_pos);
        {
            let mut positions = ecs.write_storage::<Position>();
            if let Some(pos) = positions.get_mut(player) {
                pos.point = player_pos;
            }
        }

        ecs.insert(map);
        ecs.insert(player);

        State {
            ecs,
            map_drawn: false,
        }
    }

    fn draw(&self, ctx: &mut Rltk) {
        ctx.cls();

        self.ecs.fetch::<Map>().render(ctx);

        let positions = self.ecs.read_storage::<Position>();
        let renderables = self.ecs.read_storage::<Renderable>();
        for (pos, render) in (&positions, &renderables).join() {
            ctx.set(pos.point.x, pos.point.y, render.fg, render.bg, render.glyph);
        }
    }
}

impl GameState for State {
    fn tick(&mut self, ctx: &mut Rltk) {
        if let Some(action) = player_input(ctx) {
            let player = *self.ecs.fetch::<Entity>();
            match action.perform(&self.ecs, player) {
                ActionOutcome::Quit => {
                    ctx.quit();
                    return;
                }
                ActionOutcome::Moved => {
                    self.map_drawn = false;
                }
                ActionOutcome::Blocked => {}
            }
        }

        if !self.map_drawn {
            self.map_drawn = true;
            self.draw(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;

    fn small_config() -> DungeonConfig {
        DungeonConfig {
            max_rooms: 1,
            room_min_size: 6,
            room_max_size: 6,
            map_width: 20,
            map_height: 20,
            ..Default::default()
        }
    }

    #[test]
    fn player_starts_on_floor() {
        let mut rng = RandomNumberGenerator::seeded(5);
        let state = State::new(&DungeonConfig::default(), &mut rng);

        let player = *state.ecs.fetch::<Entity>();
        let map = state.ecs.fetch::<Map>();
        let pos = state.ecs.read_storage::<Position>().get(player).unwrap().point;
        assert!(map.is_walkable(pos.x, pos.y));
    }

    #[test]
    fn player_walks_inside_its_room() {
        let mut rng = RandomNumberGenerator::seeded(8);
        let state = State::new(&small_config(), &mut rng);
        let player = *state.ecs.fetch::<Entity>();

        // a 6x6 room leaves two floor cells on each side of its center
        for _ in 0..2 {
            assert_eq!(
                Action::Movement { dx: 1, dy: 0 }.perform(&state.ecs, player),
                ActionOutcome::Moved
            );
        }
        assert_eq!(
            Action::Movement { dx: 1, dy: 0 }.perform(&state.ecs, player),
            ActionOutcome::Blocked
        );
    }

    #[test]
    fn stranger_is_spawned_beside_screen_center() {
        let mut rng = RandomNumberGenerator::seeded(1);
        let config = small_config();
        let state = State::new(&config, &mut rng);

        let players = state.ecs.read_storage::<Player>();
        let positions = state.ecs.read_storage::<Position>();
        let entities = state.ecs.entities();
        let strangers: Vec<Point> = (&entities, &positions, !&players)
            .join()
            .map(|(_, pos, _)| pos.point)
            .collect();
        assert_eq!(
            strangers,
            vec![Point::new(config.screen_width / 2 - 5, config.screen_height / 2)]
        );
    }
}
