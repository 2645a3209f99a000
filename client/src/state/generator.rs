//! Generation form state machine.
//!
//! DESIGN
//! ======
//! The form is a pure reducer: `GeneratorState::apply` consumes the current
//! record and an action and returns the next record plus an optional
//! `Outcome` for the component to carry out (show a notice, send a request,
//! invalidate a query). Nothing here touches the network, timers, or signals.
//!
//! Each submission gets a fresh `request_id`. Progress ticks and completions
//! are only honoured while the form is pending on that same id, so the
//! progress timer for a settled request is a no-op and stops itself.

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use crate::net::types::{GenerationMode, GenerationRequest, GenerationResult, TemplateId};
use crate::state::query::QueryKey;
use crate::state::toast::Notice;

/// Simulated progress never passes this value before the request settles.
pub const PROGRESS_CAP: u8 = 90;

/// Interval between simulated progress ticks.
pub const TICK_INTERVAL_MS: u32 = 500;

/// Upper bound of one random progress step.
pub const MAX_TICK_INCREMENT: u8 = 15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending {
        request_id: u64,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorState {
    pub prompt: String,
    pub template: Option<TemplateId>,
    pub mode: GenerationMode,
    /// Displayed percentage, `0..=PROGRESS_CAP` while pending.
    pub progress: u8,
    pub phase: Phase,
    last_request_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneratorAction {
    SetPrompt(String),
    SelectTemplate(TemplateId),
    SelectMode(GenerationMode),
    Submit,
    Tick { request_id: u64, increment: u8 },
    Succeeded { request_id: u64, result: GenerationResult },
    Failed { request_id: u64, error: String },
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Validation failed; nothing was sent.
    Rejected(Notice),
    /// Send `request` and start the progress timer for `request_id`.
    Dispatch { request_id: u64, request: GenerationRequest },
    /// Generation succeeded; show `notice` and mark `invalidate` stale.
    Completed { notice: Notice, invalidate: QueryKey },
    /// Generation failed; show `notice`.
    Failed(Notice),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GeneratorState,
    pub outcome: Option<Outcome>,
}

impl Transition {
    fn quiet(state: GeneratorState) -> Self {
        Self { state, outcome: None }
    }
}

impl GeneratorState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Request currently in flight, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<u64> {
        match self.phase {
            Phase::Pending { request_id } => Some(request_id),
            Phase::Idle => None,
        }
    }

    fn is_pending_on(&self, request_id: u64) -> bool {
        self.pending_request() == Some(request_id)
    }

    /// Apply one action and return the next state.
    #[must_use]
    pub fn apply(self, action: GeneratorAction) -> Transition {
        match action {
            GeneratorAction::SetPrompt(prompt) if !self.is_pending() => {
                Transition::quiet(Self { prompt, ..self })
            }
            GeneratorAction::SelectTemplate(template) if !self.is_pending() => {
                Transition::quiet(Self { template: Some(template), ..self })
            }
            GeneratorAction::SelectMode(mode) if !self.is_pending() => Transition::quiet(Self { mode, ..self }),
            GeneratorAction::Submit if !self.is_pending() => self.submit(),
            GeneratorAction::Tick { request_id, increment } if self.is_pending_on(request_id) => {
                let progress = self
                    .progress
                    .saturating_add(increment)
                    .min(PROGRESS_CAP);
                Transition::quiet(Self { progress, ..self })
            }
            GeneratorAction::Succeeded { request_id, result } if self.is_pending_on(request_id) => Transition {
                state: Self { prompt: String::new(), progress: 0, phase: Phase::Idle, ..self },
                outcome: Some(Outcome::Completed {
                    notice: success_notice(&result.name),
                    invalidate: QueryKey::WEBSITES,
                }),
            },
            GeneratorAction::Failed { request_id, .. } if self.is_pending_on(request_id) => Transition {
                state: Self { progress: 0, phase: Phase::Idle, ..self },
                outcome: Some(Outcome::Failed(failure_notice())),
            },
            // Inputs are disabled while pending; stale ticks/results are dropped.
            _ => Transition::quiet(self),
        }
    }

    fn submit(self) -> Transition {
        let prompt = self.prompt.trim();
        let Some(template) = self.template.filter(|_| !prompt.is_empty()) else {
            return Transition { state: self, outcome: Some(Outcome::Rejected(missing_information_notice())) };
        };

        let request = GenerationRequest::new(prompt, template, self.mode);
        let request_id = self.last_request_id + 1;
        Transition {
            state: Self { progress: 0, phase: Phase::Pending { request_id }, last_request_id: request_id, ..self },
            outcome: Some(Outcome::Dispatch { request_id, request }),
        }
    }
}

/// Map a uniform roll in `[0, 1)` to a progress step in `1..=MAX_TICK_INCREMENT`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tick_increment(roll: f64) -> u8 {
    let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
    let step = (roll * f64::from(MAX_TICK_INCREMENT)).floor() as u8;
    step.min(MAX_TICK_INCREMENT - 1) + 1
}

pub fn missing_information_notice() -> Notice {
    Notice::error("Missing Information", "Please provide a description and select a template.")
}

pub fn success_notice(site_name: &str) -> Notice {
    Notice::success(
        "Website Generated Successfully!",
        format!("Your website \"{site_name}\" has been created."),
    )
}

pub fn failure_notice() -> Notice {
    Notice::error("Generation Failed", "There was an error generating your website. Please try again.")
}
