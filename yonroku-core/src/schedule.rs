//! The 4:6 schedule calculator.
//!
//! Pure projection from recipe parameters to the pour sequence. A parameter
//! change rebuilds the whole sequence; nothing is patched in place.

use crate::recipe::Recipe;
use crate::step::{PourStep, StepKind, StepStatus};

/// Time of the second flavor pour.
pub const SECOND_FLAVOR_POUR_S: u32 = 45;
/// Time of the first strength pour.
pub const FIRST_STRENGTH_POUR_S: u32 = 90;
/// Time of the terminal finish marker.
pub const FINISH_S: u32 = 210;

/// Computes the pour sequence for a recipe.
///
/// 40% of the water goes to the two flavor pours, split by taste preference;
/// 60% goes to one, two or three equal strength pours. Extra strength pours
/// are spread evenly over the 120 seconds between the first strength pour
/// and the finish.
pub fn compute_schedule(recipe: &Recipe) -> Vec<PourStep> {
    let total = recipe.total_water_g();
    let flavor_water = total * 0.4;
    let strength_water = total * 0.6;

    let (first_share, second_share) = recipe.flavor.split();
    let strength_count = recipe.strength.pour_count();
    let strength_pour = strength_water / strength_count as f64;

    let mut steps = Vec::with_capacity(strength_count as usize + 3);

    let first_pour = flavor_water * first_share;
    steps.push(PourStep {
        time_s: 0,
        pour_g: first_pour,
        total_g: first_pour,
        kind: StepKind::FlavorPour1,
        status: StepStatus::Upcoming,
    });

    let second_pour = flavor_water * second_share;
    steps.push(PourStep {
        time_s: SECOND_FLAVOR_POUR_S,
        pour_g: second_pour,
        total_g: first_pour + second_pour,
        kind: StepKind::FlavorPour2,
        status: StepStatus::Upcoming,
    });

    let mut running = first_pour + second_pour + strength_pour;
    steps.push(PourStep {
        time_s: FIRST_STRENGTH_POUR_S,
        pour_g: strength_pour,
        total_g: running,
        kind: StepKind::StrengthPour1,
        status: StepStatus::Upcoming,
    });

    // Remaining strength pours are spaced evenly across the window before
    // the finish: one extra lands at 150, two land at 130 and 170.
    let remaining = strength_count - 1;
    if remaining > 0 {
        let interval = (FINISH_S - FIRST_STRENGTH_POUR_S) / (remaining + 1);
        for i in 1..=remaining {
            running += strength_pour;
            let kind = match i {
                1 => StepKind::StrengthPour2,
                _ => StepKind::StrengthPour3,
            };
            steps.push(PourStep {
                time_s: FIRST_STRENGTH_POUR_S + interval * i,
                pour_g: strength_pour,
                total_g: running,
                kind,
                status: StepStatus::Upcoming,
            });
        }
    }

    // The finish marker pours nothing and pins the cumulative column to the
    // exact total, so rounding drift in the running sum never shows up there.
    steps.push(PourStep {
        time_s: FINISH_S,
        pour_g: 0.0,
        total_g: total,
        kind: StepKind::Finish,
        status: StepStatus::Upcoming,
    });

    steps
}
