//! Idle actions and the probability triggers that fire them.
//!
//! Each tick draws one independent sample per trigger and fires the action
//! when the sample exceeds the trigger's threshold. Fired actions are applied
//! in the canonical `IdleAction::ALL` order, so a later action overrides an
//! earlier one in the same tick (stop-winking reopens an eye a blink closed).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animator::sampler::Sampler;
use crate::face::Face;

/// An action the idle animator may take on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleAction {
    Blink,
    LookLeft,
    LookRight,
    LookForward,
    Smile,
    StopSmiling,
    Frown,
    Wink,
    StopWinking,
}

impl IdleAction {
    pub const COUNT: usize = 9;

    /// Every action, in application order.
    pub const ALL: [IdleAction; Self::COUNT] = [
        IdleAction::Blink,
        IdleAction::LookLeft,
        IdleAction::LookRight,
        IdleAction::LookForward,
        IdleAction::Smile,
        IdleAction::StopSmiling,
        IdleAction::Frown,
        IdleAction::Wink,
        IdleAction::StopWinking,
    ];

    /// Position in the application order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blink => "blink",
            Self::LookLeft => "look_left",
            Self::LookRight => "look_right",
            Self::LookForward => "look_forward",
            Self::Smile => "smile",
            Self::StopSmiling => "stop_smiling",
            Self::Frown => "frown",
            Self::Wink => "wink",
            Self::StopWinking => "stop_winking",
        }
    }

    pub fn apply(self, face: &mut Face) {
        match self {
            Self::Blink => face.blink(),
            Self::LookLeft => face.look_left(),
            Self::LookRight => face.look_right(),
            Self::LookForward => face.look_forward(),
            Self::Smile => face.smile(),
            Self::StopSmiling => face.stop_smiling(),
            Self::Frown => face.frown(),
            Self::Wink => face.wink(),
            Self::StopWinking => face.stop_winking(),
        }
    }
}

impl std::fmt::Display for IdleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fires `action` when a sample is strictly greater than `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub action: IdleAction,
    pub threshold: f64,
}

impl Trigger {
    pub const fn new(action: IdleAction, threshold: f64) -> Self {
        Self { action, threshold }
    }

    /// Chance per tick that this trigger fires.
    pub fn probability(&self) -> f64 {
        1.0 - self.threshold
    }
}

/// Errors building a behavior from custom triggers.
#[derive(Debug, Error, PartialEq)]
pub enum BehaviorError {
    #[error("threshold {threshold} for {action} is outside [0, 1]")]
    ThresholdOutOfRange { action: IdleAction, threshold: f64 },

    #[error("{0} has more than one trigger")]
    DuplicateAction(IdleAction),
}

/// Named sets of triggers shipped with the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Blinks, smiles and recentres the gaze
    Calm,
    /// Also glances sideways, frowns and winks
    Lively,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Calm, Profile::Lively];

    pub fn behavior(self) -> Behavior {
        match self {
            Profile::Calm => Behavior::calm(),
            Profile::Lively => Behavior::lively(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Calm => "calm",
            Profile::Lively => "lively",
        }
    }
}

/// An ordered set of triggers, at most one per action.
#[derive(Debug, Clone, PartialEq)]
pub struct Behavior {
    triggers: Vec<Trigger>,
}

impl Behavior {
    /// The default idle set.
    pub fn calm() -> Self {
        Self {
            triggers: vec![
                Trigger::new(IdleAction::Blink, 0.95),
                Trigger::new(IdleAction::LookForward, 0.93),
                Trigger::new(IdleAction::Smile, 0.93),
                Trigger::new(IdleAction::StopSmiling, 0.95),
            ],
        }
    }

    /// Every action enabled.
    pub fn lively() -> Self {
        Self {
            triggers: vec![
                Trigger::new(IdleAction::Blink, 0.95),
                Trigger::new(IdleAction::LookLeft, 0.97),
                Trigger::new(IdleAction::LookRight, 0.97),
                Trigger::new(IdleAction::LookForward, 0.93),
                Trigger::new(IdleAction::Smile, 0.93),
                Trigger::new(IdleAction::StopSmiling, 0.95),
                Trigger::new(IdleAction::Frown, 0.95),
                Trigger::new(IdleAction::Wink, 0.97),
                Trigger::new(IdleAction::StopWinking, 0.94),
            ],
        }
    }

    /// Build a behavior from custom triggers, sorted into application order.
    pub fn from_triggers(triggers: impl IntoIterator<Item = Trigger>) -> Result<Self, BehaviorError> {
        let mut triggers: Vec<Trigger> = triggers.into_iter().collect();

        for trigger in &triggers {
            if !(0.0..=1.0).contains(&trigger.threshold) {
                return Err(BehaviorError::ThresholdOutOfRange {
                    action: trigger.action,
                    threshold: trigger.threshold,
                });
            }
        }

        triggers.sort_by_key(|t| t.action.index());
        if let Some(pair) = triggers.windows(2).find(|w| w[0].action == w[1].action) {
            return Err(BehaviorError::DuplicateAction(pair[0].action));
        }

        Ok(Self { triggers })
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    /// Draw one sample per trigger and return the actions that fire, in
    /// application order.
    pub fn evaluate<S: Sampler + ?Sized>(&self, sampler: &mut S) -> Vec<IdleAction> {
        self.triggers
            .iter()
            .filter_map(|trigger| (sampler.sample() > trigger.threshold).then_some(trigger.action))
            .collect()
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Self::calm()
    }
}
