use log::debug;
use profile_schema::ExerciseSpec;
use thiserror::Error;

/// Active-phase length of one set.
pub const SET_DURATION_SECS: u32 = 45;
/// Rest length between sets.
pub const REST_DURATION_SECS: u32 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("total sets must be positive")]
    ZeroSets,
    #[error("set duration must be positive")]
    ZeroSetDuration,
    #[error("rest duration must be positive")]
    ZeroRestDuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub total_sets: u32,
    pub set_duration_secs: u32,
    pub rest_duration_secs: u32,
}

impl TimerConfig {
    /// Config for a concrete exercise: set count from the exercise
    /// record, durations fixed.
    pub fn for_exercise(exercise: &ExerciseSpec) -> Self {
        Self {
            total_sets: exercise.sets,
            ..Self::default()
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            total_sets: 3,
            set_duration_secs: SET_DURATION_SECS,
            rest_duration_secs: REST_DURATION_SECS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Resting,
    Completed,
}

/// What one tick did, for the driving screen's display update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running (paused or already completed); nothing moved.
    Idle,
    /// One second elapsed within the current phase.
    Advanced,
    /// A set finished and a rest began; the set counter already points
    /// at the upcoming set.
    RestStarted,
    /// A rest finished and the next set's active phase began.
    SetStarted,
    /// The final set finished; the timer stopped itself.
    ExerciseCompleted,
}

/// Countdown state machine for one exercise's set/rest cycle.
///
/// Construction validates the config once; after that every operation
/// is total. `tick()` is the only way time advances, so the scheduling
/// mechanism (interval thread, test loop) stays swappable.
#[derive(Debug)]
pub struct ExerciseTimer {
    config: TimerConfig,
    current_set: u32,
    phase: Phase,
    elapsed_in_phase: u32,
    running: bool,
}

impl ExerciseTimer {
    pub fn new(config: TimerConfig) -> Result<Self, TimerError> {
        if config.total_sets == 0 {
            return Err(TimerError::ZeroSets);
        }
        if config.set_duration_secs == 0 {
            return Err(TimerError::ZeroSetDuration);
        }
        if config.rest_duration_secs == 0 {
            return Err(TimerError::ZeroRestDuration);
        }
        Ok(Self {
            config,
            current_set: 1,
            phase: Phase::Active,
            elapsed_in_phase: 0,
            running: false,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 1-based, never exceeds the configured total.
    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    pub fn total_sets(&self) -> u32 {
        self.config.total_sets
    }

    pub fn elapsed_in_phase(&self) -> u32 {
        self.elapsed_in_phase
    }

    pub fn remaining_in_phase(&self) -> u32 {
        self.phase_duration().saturating_sub(self.elapsed_in_phase)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Per-phase progress, 0-100, as the timer screen displays it.
    pub fn progress_percent(&self) -> u32 {
        self.elapsed_in_phase * 100 / self.phase_duration()
    }

    pub fn phase_label(&self) -> String {
        match self.phase {
            Phase::Active => format!("Set {} of {}", self.current_set, self.config.total_sets),
            Phase::Resting => format!("Rest - Set {} Complete", self.current_set - 1),
            Phase::Completed => "Completed!".to_string(),
        }
    }

    /// Start or resume. No effect once completed.
    pub fn start(&mut self) {
        if self.phase != Phase::Completed {
            self.running = true;
        }
    }

    /// Freeze elapsed time in the current phase.
    pub fn pause(&mut self) {
        if self.phase != Phase::Completed {
            self.running = false;
        }
    }

    /// Back to set 1, active phase, zero elapsed, stopped.
    pub fn reset(&mut self) {
        self.current_set = 1;
        self.phase = Phase::Active;
        self.elapsed_in_phase = 0;
        self.running = false;
    }

    /// Advance by one one-second quantum. Invoked once per second while
    /// running; a no-op otherwise.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        match self.phase {
            Phase::Completed => TickOutcome::Idle,
            Phase::Active => {
                self.elapsed_in_phase += 1;
                if self.elapsed_in_phase < self.config.set_duration_secs {
                    return TickOutcome::Advanced;
                }
                if self.current_set < self.config.total_sets {
                    self.phase = Phase::Resting;
                    self.current_set += 1;
                    self.elapsed_in_phase = 0;
                    debug!("set finished, rest begins before set {}", self.current_set);
                    TickOutcome::RestStarted
                } else {
                    // Final set: elapsed stays frozen at the set duration.
                    self.phase = Phase::Completed;
                    self.running = false;
                    debug!("all {} sets finished", self.config.total_sets);
                    TickOutcome::ExerciseCompleted
                }
            }
            Phase::Resting => {
                self.elapsed_in_phase += 1;
                if self.elapsed_in_phase < self.config.rest_duration_secs {
                    TickOutcome::Advanced
                } else {
                    self.phase = Phase::Active;
                    self.elapsed_in_phase = 0;
                    debug!("rest over, set {} begins", self.current_set);
                    TickOutcome::SetStarted
                }
            }
        }
    }

    fn phase_duration(&self) -> u32 {
        match self.phase {
            Phase::Active | Phase::Completed => self.config.set_duration_secs,
            Phase::Resting => self.config.rest_duration_secs,
        }
    }
}
