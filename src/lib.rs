//! Idle Face - an animated face for 16x2 character displays.
//!
//! A small expression model maps facial feature states to glyphs at fixed
//! panel coordinates, and an idle animator randomly blinks, glances and
//! smiles on a fixed tick to make the face look alive.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Idle Face                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐        │
//! │  │   Sampler   │──▶│  Behavior   │──▶│    Face     │        │
//! │  │  (uniform)  │   │ (triggers)  │   │  (actions)  │        │
//! │  └─────────────┘   └─────────────┘   └─────────────┘        │
//! │                                             │ render        │
//! │                                             ▼               │
//! │  ┌─────────────┐                     ┌─────────────┐        │
//! │  │    Stats    │                     │   Display   │        │
//! │  │  (session)  │                     │   (16x2)    │        │
//! │  └─────────────┘                     └─────────────┘        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use idle_face::{Behavior, IdleAnimator, MemoryDisplay, ScriptedSampler};
//!
//! // Blink on the first tick, then stay idle
//! let sampler = ScriptedSampler::new([0.99, 0.0, 0.0, 0.0]);
//! let mut animator = IdleAnimator::new(MemoryDisplay::new(), sampler, Behavior::calm());
//!
//! animator.tick().unwrap();
//! assert_eq!(animator.display().lines()[0], "   $ -   - $    ");
//! ```

pub mod animator;
pub mod config;
pub mod display;
pub mod face;

// Re-export key types at crate root for convenience
pub use animator::{
    AnimatorStats, Behavior, BehaviorError, IdleAction, IdleAnimator, Profile, RandomSampler,
    Sampler, ScriptedSampler, Trigger,
};
pub use config::{Backend, Config, ConfigError};
pub use display::{acquire, Display, DisplayError, MemoryDisplay, TerminalDisplay};
pub use face::{EyeDirection, EyelidState, Face, FaceMode, MouthState};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
