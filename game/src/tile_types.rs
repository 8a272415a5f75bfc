use rltk::RGB;

/// What a cell looks like when drawn: glyph plus foreground and background.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Graphic {
    pub glyph: char,
    pub fg: (u8, u8, u8),
    pub bg: (u8, u8, u8),
}

impl Graphic {
    pub fn fg_rgb(&self) -> RGB {
        RGB::from_u8(self.fg.0, self.fg.1, self.fg.2)
    }

    pub fn bg_rgb(&self) -> RGB {
        RGB::from_u8(self.bg.0, self.bg.1, self.bg.2)
    }

    pub fn font_char(&self) -> rltk::FontCharType {
        rltk::to_cp437(self.glyph)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TileKind {
    pub walkable: bool,
    // doesn't block sight; nothing reads it until there is a viewshed
    pub transparent: bool,
    // appearance outside the field of view
    pub dark: Graphic,
}

pub const fn new_tile(walkable: bool, transparent: bool, dark: Graphic) -> TileKind {
    TileKind {
        walkable,
        transparent,
        dark,
    }
}

pub const FLOOR: TileKind = new_tile(
    true,
    true,
    Graphic {
        glyph: '.',
        fg: (102, 51, 0),
        bg: (192, 139, 98),
    },
);

pub const WALL: TileKind = new_tile(
    false,
    false,
    Graphic {
        glyph: '#',
        fg: (255, 229, 204),
        bg: (102, 0, 0),
    },
);
