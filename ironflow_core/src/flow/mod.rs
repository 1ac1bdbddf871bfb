pub mod steps;

use log::{debug, trace};
use profile_schema::{merge, ProfilePatch, UserProfile};

pub use self::steps::{ParseStepError, StepId, STEP_ORDER};

/// Render input pushed back to the consuming screen whenever the flow
/// state changes. Drained via [`FlowController::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    StepChanged(StepId),
    ProfileUpdated,
}

/// Owns the ordered step list, the current step pointer and the session
/// profile, and mediates every profile mutation.
///
/// Every operation is total: boundary navigation and unknown jump
/// targets are silent no-ops, never errors. The controller is a thin
/// router; validation, if any, is the calling screen's concern.
pub struct FlowController {
    steps: Vec<StepId>,
    current: usize,
    profile: UserProfile,
    pending: Vec<FlowEvent>,
}

impl FlowController {
    /// Controller over the canonical 20-step sequence, starting at the
    /// first step with an empty profile.
    pub fn new() -> Self {
        Self::with_steps(STEP_ORDER.to_vec())
    }

    /// Controller over a caller-supplied step list. The list must be
    /// non-empty; the canonical constant always is.
    pub fn with_steps(steps: Vec<StepId>) -> Self {
        debug_assert!(!steps.is_empty());
        Self {
            steps,
            current: 0,
            profile: UserProfile::default(),
            pending: Vec::new(),
        }
    }

    pub fn current_step(&self) -> StepId {
        self.steps[self.current]
    }

    pub fn step_index(&self) -> usize {
        self.current
    }

    pub fn steps(&self) -> &[StepId] {
        &self.steps
    }

    /// Read-only snapshot of the session profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Advance one step. Saturates silently at the last step; there is
    /// no completion signal.
    pub fn next(&mut self) {
        if self.current + 1 < self.steps.len() {
            self.move_to(self.current + 1);
        }
    }

    /// Retreat one step. Saturates silently at the first step.
    pub fn prev(&mut self) {
        if self.current > 0 {
            self.move_to(self.current - 1);
        }
    }

    /// Jump to a named step. An identifier outside the configured list
    /// does not move the pointer at all.
    pub fn go_to(&mut self, step: StepId) {
        match self.steps.iter().position(|s| *s == step) {
            Some(index) => self.move_to(index),
            None => debug!("ignoring jump to unconfigured step {step}"),
        }
    }

    /// Shallow-merge a partial profile patch into the session profile.
    /// Patch contents are not validated; any screen may write any
    /// subset of fields.
    pub fn update(&mut self, patch: ProfilePatch) {
        trace!("merging profile patch at step {}", self.current_step());
        self.profile = merge(&self.profile, patch);
        self.pending.push(FlowEvent::ProfileUpdated);
    }

    /// Drains events accumulated since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<FlowEvent> {
        std::mem::take(&mut self.pending)
    }

    fn move_to(&mut self, index: usize) {
        if index == self.current {
            return;
        }
        self.current = index;
        let step = self.steps[index];
        debug!("flow step -> {step}");
        self.pending.push(FlowEvent::StepChanged(step));
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new()
    }
}
