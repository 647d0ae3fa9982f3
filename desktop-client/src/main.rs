mod config;
mod input;
mod offline;
mod screen;
mod state;
mod ui;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use eframe::egui;
use snake_common::games::SessionRng;
use snake_common::games::snake::{GameSettings, SnakeEngine};
use snake_common::logger::{self, LogLevel};
use snake_common::render::{RasterSurface, render};
use snake_common::{log, log_warn};

use config::{Config, get_config_manager};
use offline::{LocalObserver, SessionSettings, spawn_session};
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_desktop")]
struct Args {
    /// Config file, defaults to snake_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
    /// Fixed food placement seed
    #[arg(long)]
    seed: Option<u64>,
    /// Render the opening board to a PNG file and exit
    #[arg(long)]
    preview: Option<PathBuf>,
}

fn render_preview(settings: &GameSettings, seed: Option<u64>, path: &Path) -> Result<(), String> {
    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let engine = SnakeEngine::new(settings.clone(), rng);

    let mut surface = RasterSurface::for_settings(settings);
    render(&mut surface, &engine.snapshot(), settings);
    surface.save_png(path)?;

    log!("Preview written to {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config_manager = Arc::new(get_config_manager(args.config.as_deref()));
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log_warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    if let Some(path) = args.preview {
        render_preview(&config.game, args.seed, &path)?;
        return Ok(());
    }

    let shared_state = SharedState::new();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.game.canvas_width() as f32 + 40.0,
                config.game.canvas_height() as f32 + 200.0,
            ])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |cc| {
            shared_state.set_context(cc.egui_ctx.clone());

            let observer = LocalObserver::new(shared_state.clone(), config_manager.clone());
            let session = spawn_session(
                SessionSettings {
                    game: config.game.clone(),
                    seed: args.seed,
                    high_score: config.high_score,
                    frame_interval: config.frame_interval(),
                },
                observer,
            )?;

            Ok(Box::new(SnakeApp::new(
                shared_state,
                session,
                config_manager,
                config.game,
                config.high_score,
            )))
        }),
    )?;

    Ok(())
}
