use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Default)]
pub enum GameMode {
    Pvp,
    #[default]
    Pvc,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Pvp => write!(f, "Player vs Player"),
            GameMode::Pvc => write!(f, "Player vs Computer"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::Pvp),
            "pvc" => Ok(GameMode::Pvc),
            other => Err(format!("Unknown mode '{}', expected pvp or pvc", other)),
        }
    }
}
