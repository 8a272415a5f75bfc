use rltk::{BError, BTerm};

use crate::{config::DungeonConfig, state::State};

pub struct Game {
    pub context: BTerm,
    pub state: State,
}

impl Game {
    pub fn new(config: &DungeonConfig) -> Result<Self, BError> {
        use rltk::RltkBuilder;

        let try_context = RltkBuilder::simple80x50()
            .with_dimensions(config.screen_width, config.screen_height)
            .with_title("Delve")
            .build();

        match try_context {
            Ok(context) => {
                let mut rng = config.rng();
                let state = State::new(config, &mut rng);

                Ok(Game { context, state })
            }
            Err(err) => Err(Err(err)),
        }
    }

    pub fn run(game: Self) -> BError {
        rltk::main_loop(game.context, game.state)
    }
}
