use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// YAML documents. A file holding only blank lines and `#` comments reads as
/// `TConfig::default()`, so a hand-emptied config file still starts the game.
#[derive(Default, Clone, Copy, Debug)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }

    fn has_body(content: &str) -> bool {
        content.lines().map(str::trim).any(|line| !line.is_empty() && !line.starts_with('#'))
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Default,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to write YAML config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if !Self::has_body(content) {
            return Ok(TConfig::default());
        }
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to read YAML config: {}", e))
    }
}
