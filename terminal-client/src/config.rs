use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::OpponentSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_ai_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// `None` asks at startup.
    #[serde(default)]
    pub opponent: Option<OpponentSettings>,
    #[serde(default)]
    pub use_log_prefix: bool,
    #[serde(default)]
    pub quiet: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(opponent) = &self.opponent {
            opponent.validate()?;
        }
        Ok(())
    }
}
