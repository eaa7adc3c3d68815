//! Brew clock and step status tracking.

use crate::step::{PourStep, StepStatus};

/// Seconds before a step's target time during which it is flagged `Next`.
pub const NEXT_WINDOW_S: u32 = 5;

/// Second-resolution brew clock.
///
/// The timer only counts; the one-second cadence is owned by whichever loop
/// drives it, so a UI can tick from wall-clock polling and a headless run
/// can tick from an interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrewTimer {
    elapsed_s: u32,
    running: bool,
}

impl BrewTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts or resumes counting. Starting a running timer changes nothing.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops counting and keeps the elapsed time. A tick delivered after
    /// this returns is dropped, so the counter cannot advance once paused.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stops counting and zeroes the clock.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_s = 0;
    }

    /// Advances the clock by one second, if running.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_s += 1;
        }
    }

    pub fn elapsed_s(&self) -> u32 {
        self.elapsed_s
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Re-derives every step's status from the elapsed time.
///
/// Runs on every elapsed change and every schedule rebuild; it writes only
/// the status field. Steps must already be in time order. The last step has
/// no successor, so it stays `Current` once reached.
pub fn classify(steps: &mut [PourStep], elapsed_s: u32) {
    for i in 0..steps.len() {
        let next_time_s = steps.get(i + 1).map(|s| s.time_s);
        steps[i].status = status_for(steps[i].time_s, next_time_s, elapsed_s);
    }
}

fn status_for(time_s: u32, next_time_s: Option<u32>, elapsed_s: u32) -> StepStatus {
    if elapsed_s >= time_s {
        return match next_time_s {
            Some(next) if elapsed_s >= next => StepStatus::Completed,
            _ => StepStatus::Current,
        };
    }
    if time_s - elapsed_s <= NEXT_WINDOW_S {
        StepStatus::Next
    } else {
        StepStatus::Upcoming
    }
}

/// Index of the step currently marked `Current`, if any.
pub fn current_index(steps: &[PourStep]) -> Option<usize> {
    steps.iter().position(|s| s.status == StepStatus::Current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Flavor, Recipe, Strength};
    use crate::schedule::compute_schedule;

    fn balance_steps() -> Vec<PourStep> {
        let recipe = Recipe::new(20.0, Flavor::Balance, Strength::Balance).unwrap();
        compute_schedule(&recipe)
    }

    fn statuses(steps: &[PourStep]) -> Vec<StepStatus> {
        steps.iter().map(|s| s.status).collect()
    }

    #[test]
    fn tick_only_counts_while_running() {
        let mut timer = BrewTimer::new();
        timer.tick();
        assert_eq!(timer.elapsed_s(), 0);

        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.elapsed_s(), 2);

        timer.pause();
        timer.tick();
        assert_eq!(timer.elapsed_s(), 2);
        assert!(!timer.is_running());
    }

    #[test]
    fn start_is_idempotent_and_resumes() {
        let mut timer = BrewTimer::new();
        timer.start();
        timer.tick();
        timer.start();
        timer.tick();
        assert_eq!(timer.elapsed_s(), 2);

        timer.pause();
        timer.start();
        timer.tick();
        assert_eq!(timer.elapsed_s(), 3);
    }

    #[test]
    fn reset_zeroes_and_stops() {
        let mut timer = BrewTimer::new();
        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        timer.reset();
        assert_eq!(timer.elapsed_s(), 0);
        assert!(!timer.is_running());
        timer.tick();
        assert_eq!(timer.elapsed_s(), 0);
    }

    #[test]
    fn first_step_is_current_at_zero() {
        let mut steps = balance_steps();
        classify(&mut steps, 0);
        assert_eq!(steps[0].status, StepStatus::Current);
        assert!(steps[1..].iter().all(|s| s.status == StepStatus::Upcoming));
    }

    #[test]
    fn mid_brew_statuses_partition_around_the_active_pour() {
        // Balance/balance puts pours at 0/45/90/150/210. At 150 the fourth
        // pour has just begun.
        let mut steps = balance_steps();
        classify(&mut steps, 150);
        assert_eq!(
            statuses(&steps),
            vec![
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::Current,
                StepStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn lookahead_flags_the_next_step_five_seconds_out() {
        let mut steps = balance_steps();
        classify(&mut steps, 206);
        assert_eq!(steps[4].status, StepStatus::Next);
        assert_eq!(steps[3].status, StepStatus::Current);

        classify(&mut steps, 204);
        assert_eq!(steps[4].status, StepStatus::Upcoming);

        classify(&mut steps, 40);
        assert_eq!(steps[1].status, StepStatus::Next);
    }

    #[test]
    fn finish_step_stays_current() {
        let mut steps = balance_steps();
        classify(&mut steps, 210);
        assert_eq!(steps[4].status, StepStatus::Current);
        classify(&mut steps, 3000);
        assert_eq!(steps[4].status, StepStatus::Current);
    }

    #[test]
    fn exactly_one_current_for_any_elapsed() {
        let mut steps = balance_steps();
        for elapsed in 0..400 {
            classify(&mut steps, elapsed);
            let current = steps
                .iter()
                .filter(|s| s.status == StepStatus::Current)
                .count();
            assert_eq!(current, 1, "elapsed {}", elapsed);
        }
    }

    #[test]
    fn classify_is_idempotent() {
        let mut steps = balance_steps();
        classify(&mut steps, 147);
        let once = statuses(&steps);
        classify(&mut steps, 147);
        assert_eq!(statuses(&steps), once);
    }

    #[test]
    fn current_index_tracks_the_active_pour() {
        let mut steps = balance_steps();
        classify(&mut steps, 91);
        assert_eq!(current_index(&steps), Some(2));
    }
}
