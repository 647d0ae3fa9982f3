mod main_config;

pub(crate) use snake_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use main_config::{Config, DesktopConfigManager, get_config_manager};
