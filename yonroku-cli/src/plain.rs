//! Headless brew runner: one line per step change, driven by an interval.
//!
//! Used for terminals without a TUI and for following a brew from a script.
//! Auto-starts, exits when the finish step is reached, Ctrl-C stops early.

use anyhow::Result;
use std::io::{self, Write};
use std::time::Duration;

use crate::app::App;
use yonroku_core::{current_index, format_clock};

pub async fn run(mut app: App) -> Result<()> {
    let s = app.language.strings();
    println!(
        "{}  |  {} {} g  {} {}  {} {}  {} {}C",
        s.title,
        s.beans,
        app.recipe.beans_g(),
        s.flavor,
        app.language.flavor_name(app.recipe.flavor),
        s.strength,
        app.language.strength_name(app.recipe.strength),
        s.water_temp,
        app.roast.water_temp_c(),
    );
    println!();

    app.play();
    print_current(&app);

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first interval tick completes immediately; consume it so the
    // clock starts counting a full second from now.
    interval.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if app.tick() {
                    print_current(&app);
                    if app.sound {
                        ring_bell()?;
                    }
                }
                if app.finished() {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                println!();
                println!("stopped at {}", format_clock(app.timer.elapsed_s()));
                return Ok(());
            }
        }
    }

    println!();
    println!(
        "done in {}, {} {} g",
        format_clock(app.timer.elapsed_s()),
        s.total_water,
        app.recipe.total_water_g(),
    );
    Ok(())
}

fn print_current(app: &App) {
    if let Some(i) = current_index(&app.steps) {
        let step = app.steps[i];
        println!(
            "{:>5}  {}",
            format_clock(step.time_s),
            app.language.step_label(step.kind, step.total_g),
        );
    }
}

fn ring_bell() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()?;
    Ok(())
}
