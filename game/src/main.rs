pub mod actions;
pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod player;
pub mod procgen;
pub mod rect_room;
pub mod spawner;
pub mod state;
pub mod tile_types;
pub mod tunnel;

use config::DungeonConfig;
use game::Game;
use rltk::console;

fn main() -> rltk::BError {
    let config = DungeonConfig::default();
    if let Err(err) = config.validate() {
        console::log(format!("Invalid dungeon configuration: {}", err));
        return Err(err.into());
    }

    match Game::new(&config) {
        // move game into this function
        Ok(game) => Game::run(game),
        Err(err) => err,
    }
}
