mod config;
mod game_mode;
mod player_config;

pub use config::{Config, get_config_manager, get_config_path};
pub use game_mode::GameMode;
pub use player_config::PlayerConfig;
