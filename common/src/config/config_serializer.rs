use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

/// JSON documents, used for score exports that other tools read.
#[derive(Default)]
pub struct JsonConfigSerializer {
    pretty: bool,
}

impl JsonConfigSerializer {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl<TConfig> ConfigSerializer<TConfig> for JsonConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        let result = if self.pretty {
            serde_json::to_string_pretty(config)
        } else {
            serde_json::to_string(config)
        };
        result.map_err(|e| format!("Failed to serialize JSON: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_json::from_str(content).map_err(|e| format!("Failed to deserialize JSON: {}", e))
    }
}
