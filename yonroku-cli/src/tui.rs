use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crate::app::App;
use yonroku_core::{StepStatus, format_clock};

pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = brew_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn brew_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| {
            let size = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5),
                    Constraint::Length(4),
                    Constraint::Min(8),
                    Constraint::Length(3),
                ])
                .split(size);

            let s = app.language.strings();

            // Header: title plus the running clock.
            let (state_label, state_color) = if app.timer.is_running() {
                (s.running, Color::Green)
            } else {
                (s.paused, Color::Gray)
            };
            let header = Paragraph::new(Text::from(vec![
                Line::from(Span::styled(
                    s.title,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::raw("")),
                Line::from(vec![
                    Span::styled(
                        format!("{} ▼", format_clock(app.timer.elapsed_s())),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(state_label, Style::default().fg(state_color)),
                ]),
            ]))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(header, chunks[0]);

            let settings = Paragraph::new(Text::from(vec![
                Line::from(format!(
                    "{} {} g   {} {}   {} {}   {} {} ({} {}C)",
                    s.beans,
                    app.recipe.beans_g(),
                    s.flavor,
                    app.language.flavor_name(app.recipe.flavor),
                    s.strength,
                    app.language.strength_name(app.recipe.strength),
                    s.roast,
                    app.language.roast_name(app.roast),
                    s.water_temp,
                    app.roast.water_temp_c(),
                )),
                Line::from(format!(
                    "{} {} g   lang {}   {}",
                    s.total_water,
                    app.recipe.total_water_g(),
                    app.language,
                    if app.sound { s.bell_on } else { s.bell_off },
                )),
            ]))
            .block(Block::default().borders(Borders::ALL).title(s.settings));
            f.render_widget(settings, chunks[1]);

            // Timeline: one row per step, styled by status like the brewer
            // would read it: done rows crossed out, the active row bold, the
            // imminent row highlighted.
            let mut lines: Vec<Line> = Vec::new();
            for step in &app.steps {
                let style = match step.status {
                    StepStatus::Current => Style::default().add_modifier(Modifier::BOLD),
                    StepStatus::Completed => Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                    StepStatus::Next => Style::default().fg(Color::Yellow),
                    StepStatus::Upcoming => Style::default(),
                };
                let marker = if step.status == StepStatus::Current {
                    "▶ "
                } else {
                    "  "
                };
                lines.push(Line::from(Span::styled(
                    format!(
                        "{}{:>5}  {}",
                        marker,
                        format_clock(step.time_s),
                        app.language.step_label(step.kind, step.total_g),
                    ),
                    style,
                )));
            }
            let timeline = Paragraph::new(Text::from(lines))
                .block(Block::default().borders(Borders::ALL).title(s.timeline));
            f.render_widget(timeline, chunks[2]);

            let footer_text = if app.show_help { s.help } else { s.help_hint };
            let footer = Paragraph::new(footer_text)
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(footer, chunks[3]);
        })?;

        // Wall-clock tick gate: one timer second per elapsed wall second
        // while running. Drift within a second is acceptable.
        if app.timer.is_running() && last_tick.elapsed() >= Duration::from_secs(1) {
            let crossed = app.tick();
            last_tick = Instant::now();
            if crossed && app.sound {
                ring_bell()?;
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char(' ') => {
                        if app.toggle_play() {
                            // A fresh second starts now, not at the last pause.
                            last_tick = Instant::now();
                        }
                    }
                    KeyCode::Char('r') => app.reset(),
                    KeyCode::Up => app.adjust_beans(1.0),
                    KeyCode::Down => app.adjust_beans(-1.0),
                    KeyCode::Char('f') => app.cycle_flavor(),
                    KeyCode::Char('s') => app.cycle_strength(),
                    KeyCode::Char('t') => app.cycle_roast(),
                    KeyCode::Char('l') => app.toggle_language(),
                    KeyCode::Char('b') => app.toggle_sound(),
                    KeyCode::Char('?') => app.show_help = !app.show_help,
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn ring_bell() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()?;
    Ok(())
}
