use statig::blocking::IntoStateMachineExt as _;

use super::events::{ManipulationEvent, RecognizerEvent, RecognizerPhase};
use super::machine::{DispatchContext, EngineResponse, RecognizerMachine};
use crate::config::GestureConfig;
use crate::dispatch::{dispatch, GestureReactions};
use crate::error::EngineError;
use crate::tracker::TouchSession;
use crate::types::{GestureVerdict, Point, PointerId};

/// Gesture recognizer bound to one surface.
///
/// Owns the session and the double-tap history. Callbacks for a surface must
/// arrive one at a time; use one engine per surface.
pub struct GestureEngine {
    machine: statig::blocking::StateMachine<RecognizerMachine>,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureEngine {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            machine: RecognizerMachine::new(config).state_machine(),
        }
    }

    /// Feeds one host callback. Returns the verdict for `Completed`.
    pub fn handle(
        &mut self,
        event: ManipulationEvent,
    ) -> Result<Option<GestureVerdict>, EngineError> {
        let response = self.apply(RecognizerEvent::Manipulation(event))?;
        Ok(match response {
            EngineResponse::Verdict(verdict) => Some(verdict),
            _ => None,
        })
    }

    /// Clears the session and claims the manipulation.
    pub fn starting(&mut self) -> Result<(), EngineError> {
        self.apply(RecognizerEvent::Manipulation(ManipulationEvent::Starting))
            .map(|_| ())
    }

    /// Runs double-tap detection on the manipulation origin.
    pub fn started(&mut self, origin: Point, now_ms: u64) -> Result<bool, EngineError> {
        let response = self.apply(RecognizerEvent::Manipulation(ManipulationEvent::Started {
            origin,
            now_ms,
        }))?;
        Ok(matches!(response, EngineResponse::TapEvaluated(true)))
    }

    pub fn pointer_moved(&mut self, pointer: PointerId, point: Point) -> Result<(), EngineError> {
        self.apply(RecognizerEvent::Manipulation(
            ManipulationEvent::PointerMoved { pointer, point },
        ))
        .map(|_| ())
    }

    /// Ends the session and returns its verdict.
    pub fn completed(&mut self) -> Result<GestureVerdict, EngineError> {
        let response = self.apply(RecognizerEvent::Manipulation(ManipulationEvent::Completed))?;
        Ok(verdict_of(response))
    }

    /// [`completed`](Self::completed), then invokes the matching reaction hook.
    pub fn complete_with<R>(&mut self, reactions: &mut R) -> Result<GestureVerdict, EngineError>
    where
        R: GestureReactions + ?Sized,
    {
        let verdict = self.completed()?;
        dispatch(verdict, reactions);
        Ok(verdict)
    }

    /// Verdict for the samples seen so far; only valid mid-session.
    pub fn live_verdict(&mut self) -> Result<GestureVerdict, EngineError> {
        let response = self.apply(RecognizerEvent::LiveVerdict)?;
        Ok(verdict_of(response))
    }

    pub fn enable(&mut self) {
        let _ = self.apply(RecognizerEvent::Enable);
    }

    /// Drops any open session; events are rejected until [`enable`](Self::enable).
    pub fn disable(&mut self) {
        let _ = self.apply(RecognizerEvent::Disable);
    }

    pub fn phase(&self) -> RecognizerPhase {
        self.machine.inner().phase
    }

    pub fn is_enabled(&self) -> bool {
        self.phase() != RecognizerPhase::Disabled
    }

    pub fn is_double_tapping(&self) -> bool {
        self.machine.inner().is_double_tapping
    }

    pub fn config(&self) -> &GestureConfig {
        &self.machine.inner().config
    }

    pub fn session(&self) -> &TouchSession {
        self.machine.inner().tracker.session()
    }

    pub fn current_point(&self) -> Option<Point> {
        self.machine.inner().tracker.current_point()
    }

    pub fn max_left_extent(&self) -> f64 {
        self.session().max_left_extent()
    }

    pub fn max_right_extent(&self) -> f64 {
        self.session().max_right_extent()
    }

    fn apply(&mut self, event: RecognizerEvent) -> Result<EngineResponse, EngineError> {
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&event, &mut context);
        match context.response {
            EngineResponse::Rejected(error) => {
                log::warn!("recognizer: rejected {}: {error}", event.label());
                Err(error)
            }
            response => Ok(response),
        }
    }
}

fn verdict_of(response: EngineResponse) -> GestureVerdict {
    match response {
        EngineResponse::Verdict(verdict) => verdict,
        _ => GestureVerdict::None,
    }
}
