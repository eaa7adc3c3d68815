//! English/Japanese text lookup for the front ends.
//!
//! The core never renders text; it hands over a step kind and a rounded
//! cumulative amount, and this module turns them into display strings.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use yonroku_core::{Flavor, Roast, StepKind, Strength};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Jp,
}

/// Static UI labels for one language. Step labels carry an amount, so they
/// live on `Language` as methods instead.
pub struct Strings {
    pub title: &'static str,
    pub settings: &'static str,
    pub timeline: &'static str,
    pub beans: &'static str,
    pub flavor: &'static str,
    pub strength: &'static str,
    pub roast: &'static str,
    pub water_temp: &'static str,
    pub total_water: &'static str,
    pub running: &'static str,
    pub paused: &'static str,
    pub bell_on: &'static str,
    pub bell_off: &'static str,
    pub help: &'static str,
    pub help_hint: &'static str,
}

static EN: Strings = Strings {
    title: "yonroku 4:6 coffee timer",
    settings: "settings",
    timeline: "timeline",
    beans: "beans",
    flavor: "flavor",
    strength: "strength",
    roast: "roast",
    water_temp: "water",
    total_water: "total",
    running: "brewing",
    paused: "paused",
    bell_on: "bell on",
    bell_off: "bell off",
    help: "space=start/pause, r=reset, up/down=beans, f=flavor, s=strength, t=roast, l=lang, b=bell, q=quit",
    help_hint: "? for keys, q to quit",
};

static JP: Strings = Strings {
    title: "yonroku 4:6 コーヒータイマー",
    settings: "設定",
    timeline: "タイムライン",
    beans: "豆",
    flavor: "味",
    strength: "濃さ",
    roast: "焙煎",
    water_temp: "湯温",
    total_water: "総湯量",
    running: "抽出中",
    paused: "一時停止",
    bell_on: "ベル オン",
    bell_off: "ベル オフ",
    help: "space=開始/停止, r=リセット, up/down=豆, f=味, s=濃さ, t=焙煎, l=言語, b=ベル, q=終了",
    help_hint: "?=操作一覧, q=終了",
};

impl Language {
    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Jp,
            Language::Jp => Language::En,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Jp => &JP,
        }
    }

    /// Timeline line for a step: what to do and how much water should be in
    /// the brewer once it is done. The amount is rounded to whole grams.
    pub fn step_label(&self, kind: StepKind, total_g: f64) -> String {
        let n = total_g.round() as u32;
        match self {
            Language::En => match kind {
                StepKind::FlavorPour1 => format!("First pour (bloom), up to {} g", n),
                StepKind::FlavorPour2 => format!("Second pour, up to {} g", n),
                StepKind::StrengthPour1 => format!("Third pour, up to {} g", n),
                StepKind::StrengthPour2 => format!("Fourth pour, up to {} g", n),
                StepKind::StrengthPour3 => format!("Fifth pour, up to {} g", n),
                StepKind::Finish => format!("Finish, remove dripper at {} g", n),
            },
            Language::Jp => match kind {
                StepKind::FlavorPour1 => format!("1投目(蒸らし) 合計{}g", n),
                StepKind::FlavorPour2 => format!("2投目 合計{}g", n),
                StepKind::StrengthPour1 => format!("3投目 合計{}g", n),
                StepKind::StrengthPour2 => format!("4投目 合計{}g", n),
                StepKind::StrengthPour3 => format!("5投目 合計{}g", n),
                StepKind::Finish => format!("抽出完了 合計{}g ドリッパーを外す", n),
            },
        }
    }

    pub fn flavor_name(&self, flavor: Flavor) -> &'static str {
        match self {
            Language::En => match flavor {
                Flavor::Sweet => "sweet",
                Flavor::Balance => "balance",
                Flavor::Sour => "sour",
            },
            Language::Jp => match flavor {
                Flavor::Sweet => "甘め",
                Flavor::Balance => "バランス",
                Flavor::Sour => "酸味",
            },
        }
    }

    pub fn strength_name(&self, strength: Strength) -> &'static str {
        match self {
            Language::En => match strength {
                Strength::Light => "light",
                Strength::Balance => "balance",
                Strength::Strong => "strong",
            },
            Language::Jp => match strength {
                Strength::Light => "薄め",
                Strength::Balance => "バランス",
                Strength::Strong => "濃いめ",
            },
        }
    }

    pub fn roast_name(&self, roast: Roast) -> &'static str {
        match self {
            Language::En => match roast {
                Roast::Light => "light",
                Roast::Medium => "medium",
                Roast::Dark => "dark",
            },
            Language::Jp => match roast {
                Roast::Light => "浅煎り",
                Roast::Medium => "中煎り",
                Roast::Dark => "深煎り",
            },
        }
    }
}

impl FromStr for Language {
    type Err = Infallible;

    /// Anything that is not Japanese selects English.
    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "jp" | "ja" => Language::Jp,
            _ => Language::En,
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::En => "en",
            Language::Jp => "jp",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_labels_embed_rounded_totals() {
        let en = Language::En;
        assert_eq!(
            en.step_label(StepKind::FlavorPour1, 59.6),
            "First pour (bloom), up to 60 g"
        );
        assert_eq!(
            en.step_label(StepKind::Finish, 300.0),
            "Finish, remove dripper at 300 g"
        );

        let jp = Language::Jp;
        assert_eq!(jp.step_label(StepKind::StrengthPour1, 210.4), "3投目 合計210g");
    }

    #[test]
    fn language_parses_leniently() {
        assert_eq!("jp".parse::<Language>().unwrap(), Language::Jp);
        assert_eq!("JA".parse::<Language>().unwrap(), Language::Jp);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("klingon".parse::<Language>().unwrap(), Language::En);
    }

    #[test]
    fn toggling_flips_between_the_two() {
        assert_eq!(Language::En.toggled(), Language::Jp);
        assert_eq!(Language::Jp.toggled(), Language::En);
    }

    #[test]
    fn preference_names_are_localized() {
        assert_eq!(Language::En.flavor_name(Flavor::Sour), "sour");
        assert_eq!(Language::Jp.strength_name(Strength::Strong), "濃いめ");
        assert_eq!(Language::Jp.roast_name(Roast::Dark), "深煎り");
    }
}
