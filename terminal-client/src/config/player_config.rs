use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LENGTH: usize = 24;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerConfig {
    pub name: String,
}

impl PlayerConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Player name must not be empty".to_string());
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(format!(
                "Player name must be at most {} characters",
                MAX_NAME_LENGTH
            ));
        }
        Ok(())
    }
}
