use crate::games::snake::{Direction, GameSettings, GameSnapshot, Point};
use super::palette::Palette;
use super::surface::{PixelRect, Surface};

pub const EYE_SIZE: u32 = 2;
pub const EYE_OFFSET: i32 = 3;

/// Draws one frame of `state` with the default palette. Reads only; the snapshot is untouched.
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &GameSnapshot, settings: &GameSettings) {
    render_with_palette(surface, state, settings, &Palette::default());
}

pub fn render_with_palette<S: Surface + ?Sized>(
    surface: &mut S,
    state: &GameSnapshot,
    settings: &GameSettings,
    palette: &Palette,
) {
    let (width, height) = surface.size();
    surface.fill_rect(PixelRect::new(0, 0, width, height), palette.background);

    draw_grid(surface, settings, palette);
    draw_snake(surface, state, settings, palette);
    if let Some(food) = state.food {
        draw_food(surface, food, settings, palette);
    }
}

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, settings: &GameSettings, palette: &Palette) {
    let cell = settings.cell_size as i32;
    let canvas_width = settings.canvas_width() as i32;
    let canvas_height = settings.canvas_height() as i32;

    for i in 0..=settings.grid_size as i32 {
        let pos = i * cell;
        surface.stroke_line((pos, 0), (pos, canvas_height), palette.grid_line);
        surface.stroke_line((0, pos), (canvas_width, pos), palette.grid_line);
    }
}

fn draw_snake<S: Surface + ?Sized>(
    surface: &mut S,
    state: &GameSnapshot,
    settings: &GameSettings,
    palette: &Palette,
) {
    let cell = settings.cell_size;
    let inner = cell.saturating_sub(2);

    for (index, segment) in state.snake.iter().enumerate() {
        let (x, y) = cell_origin(*segment, cell);
        let color = if index == 0 { palette.snake_head } else { palette.snake_body };
        surface.fill_rect(PixelRect::square(x + 1, y + 1, inner), color);

        if index == 0 {
            for (eye_x, eye_y) in eye_positions(state.direction, x, y, cell) {
                surface.fill_rect(PixelRect::square(eye_x, eye_y, EYE_SIZE), palette.eye);
            }
        }
    }
}

fn draw_food<S: Surface + ?Sized>(surface: &mut S, food: Point, settings: &GameSettings, palette: &Palette) {
    let cell = settings.cell_size;
    let (x, y) = cell_origin(food, cell);
    surface.fill_rect(PixelRect::square(x + 2, y + 2, cell.saturating_sub(4)), palette.food);
    surface.fill_rect(
        PixelRect::square(x + 3, y + 3, cell.saturating_sub(8)),
        palette.food_highlight,
    );
}

fn cell_origin(point: Point, cell: u32) -> (i32, i32) {
    (point.x as i32 * cell as i32, point.y as i32 * cell as i32)
}

/// Top-left corners of the two eyes for a head cell at `(x, y)`, facing `direction`.
pub fn eye_positions(direction: Direction, x: i32, y: i32, cell: u32) -> [(i32, i32); 2] {
    let cell = cell as i32;
    let size = EYE_SIZE as i32;
    let far = cell - EYE_OFFSET - size;
    match direction {
        Direction::Up => [(x + EYE_OFFSET, y + 2), (x + far, y + 2)],
        Direction::Down => [(x + EYE_OFFSET, y + cell - 4), (x + far, y + cell - 4)],
        Direction::Left => [(x + 2, y + EYE_OFFSET), (x + 2, y + far)],
        Direction::Right => [(x + cell - 4, y + EYE_OFFSET), (x + cell - 4, y + far)],
    }
}
