use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{Difficulty, Score};
use serde::{Deserialize, Serialize};

use super::{GameMode, PlayerConfig};

const CONFIG_FILE_NAME: &str = "xo_terminal_config.yaml";

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Everything the game remembers between launches.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_x: PlayerConfig,
    pub player_o: PlayerConfig,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub score: Score,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.player_x.validate()?;
        self.player_o.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_x: PlayerConfig::new("Player X"),
            player_o: PlayerConfig::new("Player O"),
            mode: GameMode::Pvc,
            difficulty: Difficulty::Hard,
            muted: false,
            score: Score::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_xo_terminal_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_survives_manager_round_trip() {
        let file_path = get_temp_file_path();
        let config = Config {
            player_x: PlayerConfig::new("Ada"),
            mode: GameMode::Pvp,
            difficulty: Difficulty::Medium,
            muted: true,
            score: Score { x: 4, o: 2, draws: 1 },
            ..Config::default()
        };

        let manager = get_config_manager(&file_path);
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(config, reloaded);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let content = r#"
            player_x:
              name: Ada
            player_o:
              name: Grace
            mode: Pvp
            difficulty: Easy
        "#;
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content(content)
            .unwrap();

        let config = get_config_manager(&file_path).get_config().unwrap();
        assert!(!config.muted);
        assert_eq!(config.score, Score::default());
        assert_eq!(config.difficulty, Difficulty::Easy);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_blank_name_cant_be_read() {
        let content = r#"
            player_x:
              name: "   "
            player_o:
              name: Grace
            mode: Pvc
            difficulty: Hard
        "#;
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content(content)
            .unwrap();

        assert!(get_config_manager(&file_path).get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        let config = Config {
            player_o: PlayerConfig::new(&"O".repeat(30)),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
