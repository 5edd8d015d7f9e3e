use common::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, JsonConfigSerializer,
};
use common::games::tictactoe::Score;

pub const DEFAULT_EXPORT_FILE: &str = "smartxo-score.json";

pub fn export_score(score: &Score, path: Option<&str>) -> Result<String, String> {
    let path = path.unwrap_or(DEFAULT_EXPORT_FILE);
    let content = JsonConfigSerializer::pretty().serialize(score)?;
    FileContentConfigProvider::new(path.to_string()).set_config_content(&content)?;
    Ok(path.to_string())
}
