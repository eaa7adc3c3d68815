use anyhow::Result;
use clap::{Parser, Subcommand};

mod app;
mod config;
mod lang;
mod plain;
mod tui;

use app::App;
use lang::Language;
use yonroku_core::{Flavor, Recipe, Roast, Strength, WATER_RATIO, compute_schedule, format_clock};

#[derive(Parser, Debug)]
#[command(name = "yonroku", version, about = "Interactive 4:6 pour-over coffee timer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a brew with the full-screen timer UI
    Brew {
        /// Coffee mass in grams (default from config)
        #[arg(long)]
        beans: Option<f64>,

        /// Flavor preference: sweet | balance | sour
        #[arg(long)]
        flavor: Option<String>,

        /// Strength preference: light | balance | strong
        #[arg(long)]
        strength: Option<String>,

        /// Roast level: light | medium | dark
        #[arg(long)]
        roast: Option<String>,

        /// Display language: en | jp
        #[arg(long)]
        lang: Option<String>,

        /// Print one line per step change instead of the full-screen UI
        #[arg(long)]
        plain: bool,

        /// Suppress the terminal bell
        #[arg(long)]
        quiet: bool,
    },

    /// Print the pour schedule and exit
    Plan {
        /// Coffee mass in grams (default from config)
        #[arg(long)]
        beans: Option<f64>,

        /// Flavor preference: sweet | balance | sour
        #[arg(long)]
        flavor: Option<String>,

        /// Strength preference: light | balance | strong
        #[arg(long)]
        strength: Option<String>,

        /// Roast level: light | medium | dark
        #[arg(long)]
        roast: Option<String>,

        /// Emit the step list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage ~/.yonroku/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Brew {
            beans,
            flavor,
            strength,
            roast,
            lang,
            plain,
            quiet,
        } => {
            let cfg = config::load_config()?;
            let recipe = resolve_recipe(&cfg, beans, flavor, strength)?;
            let roast = resolve_roast(&cfg, roast);
            let language: Language = lang
                .as_deref()
                .unwrap_or(&cfg.ui.language)
                .parse()
                .unwrap_or_default();
            let sound = cfg.ui.sound && !quiet;

            let app = App::new(recipe, roast, language, sound);
            if plain {
                plain::run(app).await?;
            } else {
                tui::run(app)?;
            }
        }

        Command::Plan {
            beans,
            flavor,
            strength,
            roast,
            json,
        } => {
            let cfg = config::load_config()?;
            let recipe = resolve_recipe(&cfg, beans, flavor, strength)?;
            let roast = resolve_roast(&cfg, roast);
            let language: Language = cfg.ui.language.parse().unwrap_or_default();

            let steps = compute_schedule(&recipe);
            if json {
                println!("{}", serde_json::to_string_pretty(&steps)?);
            } else {
                println!(
                    "Brew plan: {} g coffee, {} g water (1:{})",
                    recipe.beans_g(),
                    recipe.total_water_g(),
                    WATER_RATIO,
                );
                println!(
                    "flavor {}, strength {}, {} roast, water {}C",
                    recipe.flavor,
                    recipe.strength,
                    roast,
                    roast.water_temp_c(),
                );
                println!();
                for step in &steps {
                    println!(
                        "{:>5}  {:>4.0} g -> {:>4.0} g  {}",
                        format_clock(step.time_s),
                        step.pour_g,
                        step.total_g,
                        language.step_label(step.kind, step.total_g),
                    );
                }
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg)?);
            }
            ConfigCommand::Path => {
                println!("{}", config::config_path()?.display());
            }
        },
    }

    Ok(())
}

/// CLI flags win over the config file; preference strings fall back to
/// balance when unrecognized. Beans mass is the one input that can fail.
fn resolve_recipe(
    cfg: &config::Config,
    beans: Option<f64>,
    flavor: Option<String>,
    strength: Option<String>,
) -> Result<Recipe> {
    let beans_g = beans.unwrap_or(cfg.brew.beans_g);
    let flavor: Flavor = flavor
        .as_deref()
        .unwrap_or(&cfg.brew.flavor)
        .parse()
        .unwrap_or_default();
    let strength: Strength = strength
        .as_deref()
        .unwrap_or(&cfg.brew.strength)
        .parse()
        .unwrap_or_default();
    Ok(Recipe::new(beans_g, flavor, strength)?)
}

fn resolve_roast(cfg: &config::Config, roast: Option<String>) -> Roast {
    roast
        .as_deref()
        .unwrap_or(&cfg.brew.roast)
        .parse()
        .unwrap_or_default()
}
