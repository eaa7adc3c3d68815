//! yonroku-core: schedule calculation and brew tracking for the 4:6 pour-over method.

pub mod format;
pub mod recipe;
pub mod schedule;
pub mod step;
pub mod timer;

pub use format::format_clock;
pub use recipe::{Flavor, Recipe, RecipeError, Roast, Strength, WATER_RATIO};
pub use schedule::{FINISH_S, FIRST_STRENGTH_POUR_S, SECOND_FLAVOR_POUR_S, compute_schedule};
pub use step::{PourStep, StepKind, StepStatus};
pub use timer::{BrewTimer, NEXT_WINDOW_S, classify, current_index};
