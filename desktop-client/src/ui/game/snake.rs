use eframe::egui;
use snake_common::games::snake::{GameSettings, GameSnapshot};
use snake_common::render::{PixelRect, Rgb, Surface, render};

/// Draws the shared renderer output straight into an egui painter, one point per pixel.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    size: (u32, u32),
}

impl<'a> PainterSurface<'a> {
    fn new(painter: &'a egui::Painter, origin: egui::Pos2, size: (u32, u32)) -> Self {
        Self { painter, origin, size }
    }

    fn point(&self, (x, y): (i32, i32)) -> egui::Pos2 {
        self.origin + egui::vec2(x as f32 + 0.5, y as f32 + 0.5)
    }
}

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn fill_rect(&mut self, rect: PixelRect, fill: Rgb) {
        let min = self.origin + egui::vec2(rect.x as f32, rect.y as f32);
        let rect = egui::Rect::from_min_size(min, egui::vec2(rect.width as f32, rect.height as f32));
        self.painter.rect_filled(rect, 0.0, color(fill));
    }

    fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), stroke: Rgb) {
        self.painter
            .line_segment([self.point(from), self.point(to)], egui::Stroke::new(1.0, color(stroke)));
    }
}

#[derive(Default)]
pub struct SnakeGameUi;

impl SnakeGameUi {
    pub fn render_hud(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot, high_score: u32) {
        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", snapshot.score));
            ui.add_space(20.0);
            ui.label(format!("High score: {}", high_score.max(snapshot.score)));
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new(format!("Speed: {:.1}", snapshot.speed))
                    .small()
                    .color(egui::Color32::GRAY),
            );
        });
    }

    pub fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot, settings: &GameSettings) {
        let size = (settings.canvas_width(), settings.canvas_height());
        let (response, painter) =
            ui.allocate_painter(egui::vec2(size.0 as f32, size.1 as f32), egui::Sense::hover());

        let mut surface = PainterSurface::new(&painter, response.rect.min, size);
        render(&mut surface, snapshot, settings);

        if snapshot.is_paused {
            painter.rect_filled(response.rect, 0.0, egui::Color32::from_black_alpha(140));
            painter.text(
                response.rect.center(),
                egui::Align2::CENTER_CENTER,
                "Paused. Press Space to resume",
                egui::FontId::proportional(22.0),
                egui::Color32::WHITE,
            );
        }
    }
}
