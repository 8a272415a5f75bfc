use rltk::RandomNumberGenerator;
use thiserror::Error;

use crate::map::{MAPHEIGHT, MAPWIDTH};

pub const SCREEN_WIDTH: i32 = 80;
pub const SCREEN_HEIGHT: i32 = 50;
pub const MAX_ROOMS: i32 = 30;
pub const ROOM_MIN_SIZE: i32 = 6;
pub const ROOM_MAX_SIZE: i32 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("room sizes must be at least 1, got {min}")]
    RoomTooSmall { min: i32 },

    #[error("room_min_size {min} is larger than room_max_size {max}")]
    InvertedRoomSizes { min: i32, max: i32 },

    #[error("rooms up to {room_max_size} cells do not fit in a {map_width}x{map_height} map")]
    RoomsDoNotFit {
        room_max_size: i32,
        map_width: i32,
        map_height: i32,
    },

    #[error("a {map_width}x{map_height} map does not fit on a {screen_width}x{screen_height} screen")]
    MapLargerThanScreen {
        map_width: i32,
        map_height: i32,
        screen_width: i32,
        screen_height: i32,
    },
}

#[derive(Clone, Debug)]
pub struct DungeonConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub map_width: i32,
    pub map_height: i32,
    pub max_rooms: i32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub seed: Option<u64>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        DungeonConfig {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            map_width: MAPWIDTH,
            map_height: MAPHEIGHT,
            max_rooms: MAX_ROOMS,
            room_min_size: ROOM_MIN_SIZE,
            room_max_size: ROOM_MAX_SIZE,
            seed: None,
        }
    }
}

impl DungeonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_min_size < 1 {
            return Err(ConfigError::RoomTooSmall {
                min: self.room_min_size,
            });
        }

        if self.room_min_size > self.room_max_size {
            return Err(ConfigError::InvertedRoomSizes {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }

        // placement samples x from [0, map_width - room_width - 1]
        if self.map_width - self.room_max_size - 1 < 0
            || self.map_height - self.room_max_size - 1 < 0
        {
            return Err(ConfigError::RoomsDoNotFit {
                room_max_size: self.room_max_size,
                map_width: self.map_width,
                map_height: self.map_height,
            });
        }

        if self.map_width > self.screen_width || self.map_height > self.screen_height {
            return Err(ConfigError::MapLargerThanScreen {
                map_width: self.map_width,
                map_height: self.map_height,
                screen_width: self.screen_width,
                screen_height: self.screen_height,
            });
        }

        Ok(())
    }

    pub fn rng(&self) -> RandomNumberGenerator {
        match self.seed {
            Some(seed) => RandomNumberGenerator::seeded(seed),
            None => RandomNumberGenerator::new(),
        }
    }
}
