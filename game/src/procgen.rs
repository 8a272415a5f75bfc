use rltk::{console, Point, RandomNumberGenerator};

use crate::config::DungeonConfig;
use crate::map::Map;
use crate::rect_room::RectangularRoom;
use crate::tile_types::FLOOR;
use crate::tunnel::tunnel_between;

/// Rooms-and-corridors generator.
///
/// Every attempt samples one room; an attempt whose room touches an already
/// accepted room is dropped, not retried, so fewer than `max_rooms` rooms
/// (possibly none) may come out.
pub struct DungeonBuilder {
    map: Map,
    rooms: Vec<RectangularRoom>,
    tunnels: Vec<Vec<Point>>,
    attempts: i32,
}

impl DungeonBuilder {
    pub fn new(map_width: i32, map_height: i32) -> DungeonBuilder {
        DungeonBuilder {
            map: Map::new(map_width, map_height),
            rooms: Vec::new(),
            tunnels: Vec::new(),
            attempts: 0,
        }
    }

    pub fn build(
        &mut self,
        max_rooms: i32,
        room_min_size: i32,
        room_max_size: i32,
        rng: &mut RandomNumberGenerator,
    ) {
        for _ in 0..max_rooms {
            self.attempts += 1;

            let room_width = rng.range(room_min_size, room_max_size + 1);
            let room_height = rng.range(room_min_size, room_max_size + 1);

            // too big to leave a margin on the far edges; the attempt is spent
            if self.map.width - room_width < 1 || self.map.height - room_height < 1 {
                continue;
            }

            let x = rng.range(0, self.map.width - room_width);
            let y = rng.range(0, self.map.height - room_height);
            let new_room = RectangularRoom::new(x, y, room_width, room_height);

            if self.rooms.iter().any(|other| other.intersects(&new_room)) {
                continue;
            }

            self.carve_room(&new_room);

            if let Some(prev) = self.rooms.last() {
                let path: Vec<Point> = tunnel_between(prev.center(), new_room.center(), rng).collect();
                for p in path.iter() {
                    self.map.set_tile(p.x, p.y, FLOOR);
                }
                self.tunnels.push(path);
            }

            self.rooms.push(new_room);
        }
    }

    fn carve_room(&mut self, room: &RectangularRoom) {
        for p in room.interior_points() {
            self.map.set_tile(p.x, p.y, FLOOR);
        }
    }

    pub fn get_map(&self) -> Map {
        self.map.clone()
    }

    pub fn into_map(self) -> Map {
        self.map
    }

    /// Accepted rooms, in acceptance order.
    pub fn rooms(&self) -> &[RectangularRoom] {
        &self.rooms
    }

    /// Tunnel `i` joins room `i` to room `i + 1`.
    pub fn tunnels(&self) -> &[Vec<Point>] {
        &self.tunnels
    }

    pub fn get_starting_position(&self) -> Option<Point> {
        self.rooms.first().map(|room| room.center())
    }
}

/// Builds a dungeon and moves `player` to the center of the first room.
///
/// `player` keeps its value when no room could be placed.
pub fn generate_dungeon(
    config: &DungeonConfig,
    rng: &mut RandomNumberGenerator,
    player: &mut Point,
) -> Map {
    let mut builder = DungeonBuilder::new(config.map_width, config.map_height);
    builder.build(
        config.max_rooms,
        config.room_min_size,
        config.room_max_size,
        rng,
    );

    if let Some(start) = builder.get_starting_position() {
        *player = start;
    }

    let floor_count = builder.map.tiles.iter().filter(|t| t.walkable).count();
    console::log(format!(
        "placed {} of {} rooms, {} floor tiles, {} reachable",
        builder.rooms.len(),
        builder.attempts,
        floor_count,
        builder.map.reachable_count(*player)
    ));

    builder.into_map()
}
