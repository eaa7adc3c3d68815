use yonroku_core::{
    BrewTimer, Flavor, PourStep, Recipe, StepKind, StepStatus, Strength, classify,
    compute_schedule, current_index,
};

fn default_steps() -> Vec<PourStep> {
    compute_schedule(&Recipe::default())
}

/// Ticks the timer `seconds` times, reclassifying after each tick, and
/// returns the times at which the current step changed.
fn run_and_collect_transitions(steps: &mut [PourStep], seconds: u32) -> Vec<u32> {
    let mut timer = BrewTimer::new();
    timer.start();
    classify(steps, timer.elapsed_s());
    let mut last_current = current_index(steps);
    let mut transitions = vec![timer.elapsed_s()];

    for _ in 0..seconds {
        timer.tick();
        classify(steps, timer.elapsed_s());
        let current = current_index(steps);
        if current != last_current {
            transitions.push(timer.elapsed_s());
            last_current = current;
        }
    }
    transitions
}

/// Whole-session walk: the current step must advance exactly at the pour
/// times and nowhere else.
#[test]
fn session_advances_at_pour_times() {
    let mut steps = default_steps();
    let transitions = run_and_collect_transitions(&mut steps, 215);
    assert_eq!(transitions, vec![0, 45, 90, 150, 210]);

    // Past the finish the last step still reads as the active one.
    assert_eq!(current_index(&steps), Some(4));
    assert_eq!(steps[4].kind, StepKind::Finish);
}

/// Pausing freezes both the clock and the derived statuses; resuming picks
/// up where the brew left off.
#[test]
fn pause_freezes_statuses_until_resume() {
    let mut steps = default_steps();
    let mut timer = BrewTimer::new();
    timer.start();
    for _ in 0..100 {
        timer.tick();
    }
    timer.pause();

    // Stray ticks from a still-armed loop must not move the clock.
    timer.tick();
    timer.tick();
    assert_eq!(timer.elapsed_s(), 100);

    classify(&mut steps, timer.elapsed_s());
    assert_eq!(current_index(&steps), Some(2));

    timer.start();
    for _ in 0..50 {
        timer.tick();
    }
    classify(&mut steps, timer.elapsed_s());
    assert_eq!(timer.elapsed_s(), 150);
    assert_eq!(current_index(&steps), Some(3));
}

/// Changing a parameter mid-brew rebuilds the schedule while the clock keeps
/// its elapsed value, and the fresh steps classify consistently.
#[test]
fn parameter_change_mid_brew_rebuilds_schedule() {
    let mut timer = BrewTimer::new();
    timer.start();
    for _ in 0..120 {
        timer.tick();
    }

    let stronger = Recipe::new(20.0, Flavor::Balance, Strength::Strong).unwrap();
    let mut steps = compute_schedule(&stronger);
    classify(&mut steps, timer.elapsed_s());

    // At 120 s the 90 s pour is current and the 130 s pour is ten seconds
    // out, past the lookahead window.
    assert_eq!(steps.len(), 6);
    assert_eq!(current_index(&steps), Some(2));
    assert_eq!(steps[3].status, StepStatus::Upcoming);

    for _ in 0..6 {
        timer.tick();
    }
    classify(&mut steps, timer.elapsed_s());
    assert_eq!(steps[3].status, StepStatus::Next);
}

/// Reset mid-brew returns the session to its initial shape.
#[test]
fn reset_returns_to_initial_state() {
    let mut steps = default_steps();
    let mut timer = BrewTimer::new();
    timer.start();
    for _ in 0..140 {
        timer.tick();
    }
    timer.reset();
    classify(&mut steps, timer.elapsed_s());

    assert_eq!(timer.elapsed_s(), 0);
    assert!(!timer.is_running());
    assert_eq!(current_index(&steps), Some(0));
    assert!(steps[1..].iter().all(|s| s.status == StepStatus::Upcoming));
}

/// The serialized step list is the scripting interface, so field and kind
/// names are load bearing.
#[test]
fn step_list_serializes_with_stable_names() {
    let steps = default_steps();
    let value = serde_json::to_value(&steps).unwrap();

    let first = &value[0];
    assert_eq!(first["time_s"], 0);
    assert_eq!(first["pour_g"], 60.0);
    assert_eq!(first["total_g"], 60.0);
    assert_eq!(first["kind"], "flavor-pour-1");
    assert_eq!(first["status"], "upcoming");

    let last = &value[4];
    assert_eq!(last["kind"], "finish");
    assert_eq!(last["total_g"], 300.0);
}
