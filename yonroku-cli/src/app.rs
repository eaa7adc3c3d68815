//! Brew session state shared by the TUI and the plain front end.

use yonroku_core::{
    BrewTimer, FINISH_S, Flavor, PourStep, Recipe, Roast, Strength, classify, compute_schedule,
    current_index,
};

use crate::lang::Language;

/// Everything a front end needs to draw one brew session. Key handlers
/// mutate it; the draw code only reads.
pub struct App {
    pub recipe: Recipe,
    pub roast: Roast,
    pub steps: Vec<PourStep>,
    pub timer: BrewTimer,
    pub language: Language,
    pub sound: bool,
    pub show_help: bool,
    last_current: Option<usize>,
}

impl App {
    pub fn new(recipe: Recipe, roast: Roast, language: Language, sound: bool) -> Self {
        let mut steps = compute_schedule(&recipe);
        classify(&mut steps, 0);
        let last_current = current_index(&steps);
        Self {
            recipe,
            roast,
            steps,
            timer: BrewTimer::new(),
            language,
            sound,
            show_help: false,
            last_current,
        }
    }

    /// Flips between running and paused. Returns whether the timer is
    /// running afterwards, so callers can re-arm their tick clock.
    pub fn toggle_play(&mut self) -> bool {
        if self.timer.is_running() {
            self.timer.pause();
        } else {
            self.timer.start();
        }
        self.timer.is_running()
    }

    pub fn play(&mut self) {
        self.timer.start();
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        classify(&mut self.steps, 0);
        self.last_current = current_index(&self.steps);
    }

    /// Advances the clock one second and reclassifies. Returns true when the
    /// current step changed, which is the bell edge.
    pub fn tick(&mut self) -> bool {
        if !self.timer.is_running() {
            return false;
        }
        self.timer.tick();
        classify(&mut self.steps, self.timer.elapsed_s());
        let now = current_index(&self.steps);
        let crossed = now != self.last_current;
        self.last_current = now;
        crossed
    }

    /// The finish marker has been reached; plain mode exits here.
    pub fn finished(&self) -> bool {
        self.timer.elapsed_s() >= FINISH_S
    }

    pub fn adjust_beans(&mut self, delta_g: f64) {
        let next = (self.recipe.beans_g() + delta_g).max(1.0);
        if let Ok(recipe) = Recipe::new(next, self.recipe.flavor, self.recipe.strength) {
            self.recipe = recipe;
            self.rebuild();
        }
    }

    pub fn cycle_flavor(&mut self) {
        self.recipe.flavor = match self.recipe.flavor {
            Flavor::Sweet => Flavor::Balance,
            Flavor::Balance => Flavor::Sour,
            Flavor::Sour => Flavor::Sweet,
        };
        self.rebuild();
    }

    pub fn cycle_strength(&mut self) {
        self.recipe.strength = match self.recipe.strength {
            Strength::Light => Strength::Balance,
            Strength::Balance => Strength::Strong,
            Strength::Strong => Strength::Light,
        };
        self.rebuild();
    }

    pub fn cycle_roast(&mut self) {
        self.roast = match self.roast {
            Roast::Light => Roast::Medium,
            Roast::Medium => Roast::Dark,
            Roast::Dark => Roast::Light,
        };
        // Roast only changes the suggested temperature, never the schedule.
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn toggle_sound(&mut self) {
        self.sound = !self.sound;
    }

    /// Parameter changes rebuild the whole schedule; the clock keeps its
    /// elapsed value. The current index is refreshed without signalling a
    /// bell edge.
    fn rebuild(&mut self) {
        self.steps = compute_schedule(&self.recipe);
        classify(&mut self.steps, self.timer.elapsed_s());
        self.last_current = current_index(&self.steps);
    }
}
