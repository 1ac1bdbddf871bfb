use ironflow_core::timer::{
    ExerciseTimer, Phase, TickOutcome, TimerConfig, TimerError, REST_DURATION_SECS,
    SET_DURATION_SECS,
};

fn timer(total_sets: u32) -> ExerciseTimer {
    ExerciseTimer::new(TimerConfig {
        total_sets,
        ..TimerConfig::default()
    })
    .unwrap()
}

fn tick_n(timer: &mut ExerciseTimer, n: u32) -> TickOutcome {
    let mut last = TickOutcome::Idle;
    for _ in 0..n {
        last = timer.tick();
    }
    last
}

#[test]
fn rejects_zero_configuration() {
    assert!(matches!(
        ExerciseTimer::new(TimerConfig {
            total_sets: 0,
            ..TimerConfig::default()
        }),
        Err(TimerError::ZeroSets)
    ));
    assert!(matches!(
        ExerciseTimer::new(TimerConfig {
            set_duration_secs: 0,
            ..TimerConfig::default()
        }),
        Err(TimerError::ZeroSetDuration)
    ));
    assert!(matches!(
        ExerciseTimer::new(TimerConfig {
            rest_duration_secs: 0,
            ..TimerConfig::default()
        }),
        Err(TimerError::ZeroRestDuration)
    ));
}

#[test]
fn ticks_are_ignored_until_started() {
    let mut t = timer(3);
    assert_eq!(t.tick(), TickOutcome::Idle);
    assert_eq!(t.elapsed_in_phase(), 0);
    assert_eq!(t.phase(), Phase::Active);
}

#[test]
fn forty_five_ticks_finish_a_set_and_start_the_rest() {
    let mut t = timer(3);
    t.start();

    assert_eq!(tick_n(&mut t, SET_DURATION_SECS - 1), TickOutcome::Advanced);
    assert_eq!(t.phase(), Phase::Active);
    assert_eq!(t.current_set(), 1);

    // The 45th tick flips to rest with the set counter bumped.
    assert_eq!(t.tick(), TickOutcome::RestStarted);
    assert_eq!(t.phase(), Phase::Resting);
    assert_eq!(t.current_set(), 2);
    assert_eq!(t.elapsed_in_phase(), 0);
}

#[test]
fn sixty_rest_ticks_return_to_active() {
    let mut t = timer(3);
    t.start();
    tick_n(&mut t, SET_DURATION_SECS);
    assert_eq!(t.phase(), Phase::Resting);

    assert_eq!(tick_n(&mut t, REST_DURATION_SECS - 1), TickOutcome::Advanced);
    assert_eq!(t.tick(), TickOutcome::SetStarted);
    assert_eq!(t.phase(), Phase::Active);
    assert_eq!(t.current_set(), 2);
    assert_eq!(t.elapsed_in_phase(), 0);
}

#[test]
fn final_set_goes_straight_to_completed() {
    let mut t = timer(2);
    t.start();

    // Set 1 + rest + set 2.
    tick_n(&mut t, SET_DURATION_SECS + REST_DURATION_SECS);
    assert_eq!(t.current_set(), 2);
    assert_eq!(t.phase(), Phase::Active);

    assert_eq!(tick_n(&mut t, SET_DURATION_SECS), TickOutcome::ExerciseCompleted);
    assert_eq!(t.phase(), Phase::Completed);
    assert!(!t.is_running());
    // Elapsed frozen at the set duration, never wrapped.
    assert_eq!(t.elapsed_in_phase(), SET_DURATION_SECS);
}

#[test]
fn completed_timer_ignores_everything_but_reset() {
    let mut t = timer(1);
    t.start();
    tick_n(&mut t, SET_DURATION_SECS);
    assert_eq!(t.phase(), Phase::Completed);

    t.start();
    assert!(!t.is_running());
    assert_eq!(t.tick(), TickOutcome::Idle);
    t.pause();
    assert_eq!(t.phase(), Phase::Completed);
    assert_eq!(t.elapsed_in_phase(), SET_DURATION_SECS);
}

#[test]
fn pause_freezes_elapsed_time() {
    let mut t = timer(3);
    t.start();
    tick_n(&mut t, 10);

    t.pause();
    assert!(!t.is_running());
    tick_n(&mut t, 20);
    assert_eq!(t.elapsed_in_phase(), 10);

    t.start();
    t.tick();
    assert_eq!(t.elapsed_in_phase(), 11);
}

#[test]
fn reset_restores_the_initial_state_from_anywhere() {
    let mut t = timer(3);
    t.start();
    tick_n(&mut t, SET_DURATION_SECS + 12); // mid-rest

    t.reset();
    assert_eq!(t.current_set(), 1);
    assert_eq!(t.phase(), Phase::Active);
    assert_eq!(t.elapsed_in_phase(), 0);
    assert!(!t.is_running());

    // Also from completed.
    let mut done = timer(1);
    done.start();
    tick_n(&mut done, SET_DURATION_SECS);
    done.reset();
    assert_eq!(done.phase(), Phase::Active);
    assert_eq!(done.current_set(), 1);
}

#[test]
fn display_accessors_track_the_phases() {
    let mut t = timer(3);
    assert_eq!(t.phase_label(), "Set 1 of 3");
    assert_eq!(t.remaining_in_phase(), SET_DURATION_SECS);
    assert_eq!(t.progress_percent(), 0);

    t.start();
    tick_n(&mut t, SET_DURATION_SECS);
    assert_eq!(t.phase_label(), "Rest - Set 1 Complete");
    assert_eq!(t.remaining_in_phase(), REST_DURATION_SECS);

    tick_n(&mut t, REST_DURATION_SECS / 2);
    assert_eq!(t.progress_percent(), 50);

    tick_n(&mut t, REST_DURATION_SECS / 2);
    assert_eq!(t.phase_label(), "Set 2 of 3");
}

#[test]
fn full_three_set_session_tick_count() {
    // 3 sets of 45s with two 60s rests in between: 255 ticks total.
    let mut t = timer(3);
    t.start();

    let total = 3 * SET_DURATION_SECS + 2 * REST_DURATION_SECS;
    assert_eq!(tick_n(&mut t, total), TickOutcome::ExerciseCompleted);
    assert_eq!(t.phase(), Phase::Completed);
    assert_eq!(t.current_set(), 3);
}
