//! Recipe parameters for the 4:6 pour-over method.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grams of water per gram of coffee.
pub const WATER_RATIO: f64 = 15.0;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RecipeError {
    #[error("beans mass must be a positive number of grams, got {0}")]
    InvalidBeansMass(f64),
}

/// Taste profile of the first 40% of the water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Sweet,
    #[default]
    Balance,
    Sour,
}

impl Flavor {
    /// How the flavor water splits across the first two pours.
    pub fn split(&self) -> (f64, f64) {
        match self {
            Flavor::Sweet => (0.4, 0.6),
            Flavor::Sour => (0.6, 0.4),
            Flavor::Balance => (0.5, 0.5),
        }
    }
}

impl FromStr for Flavor {
    type Err = Infallible;

    /// Lenient on purpose: anything unrecognized selects `Balance`.
    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "sweet" => Flavor::Sweet,
            "sour" => Flavor::Sour,
            _ => Flavor::Balance,
        })
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Flavor::Sweet => "sweet",
            Flavor::Balance => "balance",
            Flavor::Sour => "sour",
        };
        write!(f, "{}", name)
    }
}

/// Brew strength, expressed as how many pours the remaining 60% is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Light,
    #[default]
    Balance,
    Strong,
}

impl Strength {
    pub fn pour_count(&self) -> u32 {
        match self {
            Strength::Light => 1,
            Strength::Balance => 2,
            Strength::Strong => 3,
        }
    }
}

impl FromStr for Strength {
    type Err = Infallible;

    /// Lenient on purpose: anything unrecognized selects `Balance`.
    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "light" => Strength::Light,
            "strong" => Strength::Strong,
            _ => Strength::Balance,
        })
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strength::Light => "light",
            Strength::Balance => "balance",
            Strength::Strong => "strong",
        };
        write!(f, "{}", name)
    }
}

/// Roast level of the beans. Only used to suggest a water temperature;
/// never affects the pour schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Roast {
    Light,
    #[default]
    Medium,
    Dark,
}

impl Roast {
    /// Suggested brew water temperature in degrees Celsius.
    pub fn water_temp_c(&self) -> u32 {
        match self {
            Roast::Light => 93,
            Roast::Medium => 88,
            Roast::Dark => 83,
        }
    }
}

impl FromStr for Roast {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "light" => Roast::Light,
            "dark" => Roast::Dark,
            _ => Roast::Medium,
        })
    }
}

impl fmt::Display for Roast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Roast::Light => "light",
            Roast::Medium => "medium",
            Roast::Dark => "dark",
        };
        write!(f, "{}", name)
    }
}

/// The three inputs the schedule is computed from.
///
/// Beans mass is the one hard-validated field; the preference enums are
/// closed types so bad values cannot reach the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recipe {
    beans_g: f64,
    pub flavor: Flavor,
    pub strength: Strength,
}

impl Recipe {
    pub fn new(beans_g: f64, flavor: Flavor, strength: Strength) -> Result<Self, RecipeError> {
        if !beans_g.is_finite() || beans_g <= 0.0 {
            return Err(RecipeError::InvalidBeansMass(beans_g));
        }
        Ok(Self {
            beans_g,
            flavor,
            strength,
        })
    }

    pub fn beans_g(&self) -> f64 {
        self.beans_g
    }

    /// Total brew water in grams (beans times the 1:15 ratio).
    pub fn total_water_g(&self) -> f64 {
        self.beans_g * WATER_RATIO
    }
}

impl Default for Recipe {
    /// 20 g of coffee, balanced on both axes.
    fn default() -> Self {
        Self {
            beans_g: 20.0,
            flavor: Flavor::default(),
            strength: Strength::default(),
        }
    }
}
