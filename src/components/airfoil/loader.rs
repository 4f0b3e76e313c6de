use bevy::log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::config::AirfoilConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid airfoil configuration: {0}")]
    ValidationError(String),
    #[error("Unknown airfoil profile: {0}")]
    UnknownProfile(String),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn parse<T: for<'de> Deserialize<'de>>(self, contents: &str) -> Result<T, ConfigError> {
        match self {
            Self::Yaml => Ok(serde_yaml::from_str(contents)?),
            Self::Json => Ok(serde_json::from_str(contents)?),
        }
    }
}

/// Load a single airfoil profile from a `.yaml`/`.yml`/`.json` file.
pub fn load_airfoil<P: AsRef<Path>>(path: P) -> Result<AirfoilConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let contents = fs::read_to_string(path)?;
    format.parse(&contents)
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LibraryFile {
    profiles: BTreeMap<String, AirfoilConfig>,
}

/// Named airfoil profiles. Profiles are handed out as `Arc`s so symmetric surfaces
/// (e.g. left and right wing halves) share one record.
#[derive(Debug, Clone, Default)]
pub struct AirfoilLibrary {
    profiles: BTreeMap<String, Arc<AirfoilConfig>>,
}

impl AirfoilLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Yaml.parse::<LibraryFile>(contents).map(Self::from)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Json.parse::<LibraryFile>(contents).map(Self::from)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = fs::read_to_string(path)?;
        let library = Self::from(format.parse::<LibraryFile>(&contents)?);
        info!(
            "Loaded {} airfoil profile(s) from {}",
            library.len(),
            path.display()
        );
        Ok(library)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        let file = LibraryFile {
            profiles: self
                .profiles
                .iter()
                .map(|(name, config)| (name.clone(), AirfoilConfig::clone(config)))
                .collect(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    /// Adds or replaces a profile, returning the shared handle.
    pub fn insert(&mut self, name: impl Into<String>, config: AirfoilConfig) -> Arc<AirfoilConfig> {
        let config = Arc::new(config);
        self.profiles.insert(name.into(), Arc::clone(&config));
        config
    }

    pub fn get(&self, name: &str) -> Result<Arc<AirfoilConfig>, ConfigError> {
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl From<LibraryFile> for AirfoilLibrary {
    fn from(file: LibraryFile) -> Self {
        Self {
            profiles: file
                .profiles
                .into_iter()
                .map(|(name, config)| (name, Arc::new(config)))
                .collect(),
        }
    }
}
