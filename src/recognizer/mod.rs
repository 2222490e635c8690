mod engine;
mod events;
mod machine;

pub use engine::GestureEngine;
pub use events::{ManipulationEvent, RecognizerPhase};
