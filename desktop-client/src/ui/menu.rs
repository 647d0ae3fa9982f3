use eframe::egui;
use snake_common::engine::session::SessionOutcome;
use snake_common::games::snake::{GameSettings, SettingsUpdate, WallMode};

use crate::screen::UiEvent;

pub const SPEED_PRESETS: [(&str, f32); 4] = [
    ("Slow", 5.0),
    ("Normal", 8.0),
    ("Fast", 12.0),
    ("Insane", 15.0),
];

pub enum MenuAction {
    Navigate(UiEvent),
    ChangeSettings(SettingsUpdate),
}

pub fn render_main_menu(ui: &mut egui::Ui, high_score: u32) -> Option<MenuAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(
            egui::RichText::new("Snake")
                .color(egui::Color32::from_rgb(144, 238, 144))
                .size(48.0),
        );
        ui.add_space(10.0);
        ui.label(format!("High score: {}", high_score));
        ui.add_space(30.0);

        if ui.button("Play (Enter)").clicked() {
            action = Some(MenuAction::Navigate(UiEvent::Play));
        }
        ui.add_space(10.0);
        if ui.button("Options").clicked() {
            action = Some(MenuAction::Navigate(UiEvent::OpenOptions));
        }

        ui.add_space(30.0);
        ui.label(
            egui::RichText::new("Arrows or WASD to turn, Space to pause, Escape for menu")
                .small()
                .color(egui::Color32::GRAY),
        );
    });

    action
}

pub fn render_options(ui: &mut egui::Ui, settings: &GameSettings) -> Option<MenuAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.heading("Options");
        ui.add_space(20.0);

        ui.label("Speed");
        ui.horizontal(|ui| {
            for (name, speed) in SPEED_PRESETS {
                let selected = settings.initial_speed == speed;
                if ui.selectable_label(selected, name).clicked() && !selected {
                    action = Some(MenuAction::ChangeSettings(SettingsUpdate {
                        initial_speed: Some(speed),
                        ..SettingsUpdate::default()
                    }));
                }
            }
        });

        ui.add_space(10.0);
        ui.label("Walls");
        ui.horizontal(|ui| {
            for (name, mode) in [("Solid", WallMode::Solid), ("Wrap around", WallMode::Wrap)] {
                let selected = settings.wall_mode == mode;
                if ui.selectable_label(selected, name).clicked() && !selected {
                    action = Some(MenuAction::ChangeSettings(SettingsUpdate {
                        wall_mode: Some(mode),
                        ..SettingsUpdate::default()
                    }));
                }
            }
        });

        ui.add_space(10.0);
        let mut sound_enabled = settings.sound_enabled;
        if ui.checkbox(&mut sound_enabled, "Sound").changed() {
            action = Some(MenuAction::ChangeSettings(SettingsUpdate {
                sound_enabled: Some(sound_enabled),
                ..SettingsUpdate::default()
            }));
        }

        ui.add_space(20.0);
        if ui.button("Back (Escape)").clicked() {
            action = Some(MenuAction::Navigate(UiEvent::Escape));
        }
    });

    action
}

pub fn render_game_over(ui: &mut egui::Ui, outcome: &SessionOutcome) -> Option<MenuAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        if outcome.reason.is_win() {
            ui.heading(
                egui::RichText::new("Board cleared!")
                    .color(egui::Color32::GREEN)
                    .size(32.0),
            );
        } else {
            ui.heading(
                egui::RichText::new("Game Over")
                    .color(egui::Color32::RED)
                    .size(32.0),
            );
        }

        ui.add_space(10.0);
        ui.label(format!("Final score: {}", outcome.score));
        if outcome.is_new_high_score {
            ui.label(
                egui::RichText::new("New high score!")
                    .color(egui::Color32::GOLD)
                    .size(20.0),
            );
        }

        ui.add_space(20.0);
        if ui.button("Play Again (Enter)").clicked() {
            action = Some(MenuAction::Navigate(UiEvent::Play));
        }
        ui.add_space(10.0);
        if ui.button("Menu (Escape)").clicked() {
            action = Some(MenuAction::Navigate(UiEvent::Escape));
        }
    });

    action
}
