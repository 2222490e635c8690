//! Tap, double tap, pinch and swipe recognition for manipulation-style
//! touch input.
//!
//! A host surface forwards its manipulation callbacks to a
//! [`GestureEngine`]: "starting" opens a session, "started" feeds the
//! double-tap detector with the manipulation origin, pointer samples are
//! tracked per contact, and "completed" yields one [`GestureVerdict`].
//! [`dispatch`] maps a verdict onto the host's [`GestureReactions`].

pub mod classify;
pub mod config;
pub mod dispatch;
pub mod double_tap;
pub mod error;
pub mod recognizer;
pub mod tracker;
pub mod types;

pub use classify::GestureClassifier;
pub use config::{GestureConfig, TrajectoryRetention};
pub use dispatch::{dispatch, GestureReactions};
pub use double_tap::DoubleTapDetector;
pub use error::{ConfigError, EngineError};
pub use recognizer::{GestureEngine, ManipulationEvent, RecognizerPhase};
pub use tracker::{TouchSession, TouchTracker, Trajectory};
pub use types::{GestureVerdict, Point, PointerId, SwipeDirection};
