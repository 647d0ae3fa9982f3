#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub grid_line: Rgb,
    pub snake_head: Rgb,
    pub snake_body: Rgb,
    pub eye: Rgb,
    pub food: Rgb,
    pub food_highlight: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::from_hex(0x1A2E1A),
            grid_line: Rgb::from_hex(0x2A4A2A),
            snake_head: Rgb::from_hex(0x90EE90),
            snake_body: Rgb::from_hex(0x228B22),
            eye: Rgb::from_hex(0x000000),
            food: Rgb::from_hex(0xFF4444),
            food_highlight: Rgb::from_hex(0xFF8888),
        }
    }
}
