use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub vegas: bool,
    pub draw_three: bool,
    pub cumulative: bool,
    pub log_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub vegas: ValueSource,
    pub draw_three: ValueSource,
    pub cumulative: ValueSource,
    pub log_dir: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            vegas: ValueSource::Default,
            draw_three: ValueSource::Default,
            cumulative: ValueSource::Default,
            log_dir: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            vegas: false,
            draw_three: false,
            cumulative: false,
            log_dir: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("PATIENCE_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.vegas {
            cfg.vegas = v;
            sources.vegas = ValueSource::File;
        }
        if let Some(v) = f.draw_three {
            cfg.draw_three = v;
            sources.draw_three = ValueSource::File;
        }
        if let Some(v) = f.cumulative {
            cfg.cumulative = v;
            sources.cumulative = ValueSource::File;
        }
        if let Some(v) = f.log_dir {
            cfg.log_dir = Some(v);
            sources.log_dir = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("PATIENCE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(vegas) = std::env::var("PATIENCE_VEGAS")
        && !vegas.is_empty()
    {
        cfg.vegas =
            parse_bool(&vegas).ok_or_else(|| ConfigError::Invalid("Invalid vegas".into()))?;
        sources.vegas = ValueSource::Env;
    }
    if let Ok(draw) = std::env::var("PATIENCE_DRAW3")
        && !draw.is_empty()
    {
        cfg.draw_three =
            parse_bool(&draw).ok_or_else(|| ConfigError::Invalid("Invalid draw3".into()))?;
        sources.draw_three = ValueSource::Env;
    }
    if let Ok(cml) = std::env::var("PATIENCE_CUMULATIVE")
        && !cml.is_empty()
    {
        cfg.cumulative =
            parse_bool(&cml).ok_or_else(|| ConfigError::Invalid("Invalid cumulative".into()))?;
        sources.cumulative = ValueSource::Env;
    }
    if let Ok(dir) = std::env::var("PATIENCE_LOG_DIR")
        && !dir.is_empty()
    {
        cfg.log_dir = Some(dir);
        sources.log_dir = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    vegas: Option<bool>,
    #[serde(default)]
    draw_three: Option<bool>,
    #[serde(default)]
    cumulative: Option<bool>,
    #[serde(default)]
    log_dir: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(dir) = &cfg.log_dir {
        if dir.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Invalid configuration: log_dir must not be empty".into(),
            ));
        }
    }
    // Draw-three and cumulative only take effect in Vegas; allowed in the
    // file so a single config can serve both modes.
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
