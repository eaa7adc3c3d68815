use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Preferred defaults for a brew. Only preferences live here; timer state is
/// never persisted. Preference values are stored as plain strings so a
/// hand-edited file gets the same lenient fallback as every other input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub brew: BrewSection,
    pub ui: UiSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewSection {
    /// Grams of coffee.
    pub beans_g: f64,
    /// sweet | balance | sour
    pub flavor: String,
    /// light | balance | strong
    pub strength: String,
    /// light | medium | dark
    pub roast: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSection {
    /// en | jp
    pub language: String,
    /// Terminal bell on step changes.
    pub sound: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brew: BrewSection {
                beans_g: 20.0,
                flavor: "balance".to_string(),
                strength: "balance".to_string(),
                roast: "medium".to_string(),
            },
            ui: UiSection {
                language: "en".to_string(),
                sound: true,
            },
        }
    }
}

pub fn yonroku_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".yonroku"))
}

pub fn ensure_yonroku_home() -> Result<PathBuf> {
    let dir = yonroku_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(yonroku_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    ensure_yonroku_home()?;
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn partial_files_are_rejected_loudly() {
        // Missing sections are a config error, not a silent default.
        assert!(toml::from_str::<Config>("[brew]\nbeans_g = 20.0").is_err());
    }

    #[test]
    fn defaults_are_a_balanced_twenty_gram_brew() {
        let cfg = Config::default();
        assert_eq!(cfg.brew.beans_g, 20.0);
        assert_eq!(cfg.brew.flavor, "balance");
        assert_eq!(cfg.brew.strength, "balance");
        assert_eq!(cfg.brew.roast, "medium");
        assert_eq!(cfg.ui.language, "en");
        assert!(cfg.ui.sound);
    }
}
