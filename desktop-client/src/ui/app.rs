use std::sync::Arc;

use eframe::egui;
use snake_common::config::Validate;
use snake_common::engine::session::GameCommand;
use snake_common::games::snake::{GameSettings, SettingsUpdate};
use snake_common::{log_debug, log_warn};

use super::game::SnakeGameUi;
use super::menu::{MenuAction, render_game_over, render_main_menu, render_options};
use crate::config::DesktopConfigManager;
use crate::input::pressed_events;
use crate::offline::SessionHandle;
use crate::screen::{Screen, UiEvent};
use crate::state::SharedState;

pub struct SnakeApp {
    shared_state: SharedState,
    session: SessionHandle,
    config_manager: Arc<DesktopConfigManager>,
    settings: GameSettings,
    high_score: u32,
    screen: Screen,
    game_ui: SnakeGameUi,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        session: SessionHandle,
        config_manager: Arc<DesktopConfigManager>,
        settings: GameSettings,
        high_score: u32,
    ) -> Self {
        Self {
            shared_state,
            session,
            config_manager,
            settings,
            high_score,
            screen: Screen::Menu,
            game_ui: SnakeGameUi::default(),
        }
    }

    fn dispatch(&mut self, event: UiEvent) {
        let transition = self.screen.handle(event);
        if transition.screen != self.screen {
            log_debug!("Screen {:?} -> {:?}", self.screen, transition.screen);
        }
        self.screen = transition.screen;
        if let Some(command) = transition.command {
            self.session.send(command);
        }
    }

    fn change_settings(&mut self, update: SettingsUpdate) {
        if let Err(e) = update.validate() {
            log_warn!("Rejected settings change: {}", e);
            return;
        }

        self.settings.apply(&update);
        if let Err(e) = self.config_manager.update_config(|config| config.game.apply(&update)) {
            log_warn!("Failed to save settings: {}", e);
        }
        self.session.send(GameCommand::UpdateSettings(update));
    }

    fn render_screen(&self, ui: &mut egui::Ui) -> Option<MenuAction> {
        match self.screen {
            Screen::Menu => render_main_menu(ui, self.high_score),
            Screen::Options => render_options(ui, &self.settings),
            Screen::Playing | Screen::Paused => {
                self.render_game(ui);
                None
            }
            Screen::GameOver(outcome) => {
                let action = render_game_over(ui, &outcome);
                ui.add_space(10.0);
                self.render_game(ui);
                action
            }
        }
    }

    fn render_game(&self, ui: &mut egui::Ui) {
        let Some(snapshot) = self.shared_state.latest_snapshot() else {
            ui.centered_and_justified(|ui| {
                ui.label("Waiting for game state...");
            });
            return;
        };

        ui.vertical_centered(|ui| {
            self.game_ui.render_hud(ui, &snapshot, self.high_score);
            ui.add_space(8.0);
            self.game_ui.render_board(ui, &snapshot, &self.settings);
        });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(outcome) = self.shared_state.take_outcome() {
            if outcome.is_new_high_score {
                self.high_score = outcome.score;
            }
            self.dispatch(UiEvent::RoundEnded(outcome));
        }

        for event in ctx.input(pressed_events) {
            self.dispatch(event);
        }

        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            action = self.render_screen(ui);
        });

        match action {
            Some(MenuAction::Navigate(event)) => self.dispatch(event),
            Some(MenuAction::ChangeSettings(update)) => self.change_settings(update),
            None => {}
        }
    }
}
