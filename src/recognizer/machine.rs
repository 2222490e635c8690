use statig::prelude::*;

use super::events::{ManipulationEvent, RecognizerEvent, RecognizerPhase};
use crate::classify::GestureClassifier;
use crate::config::GestureConfig;
use crate::double_tap::DoubleTapDetector;
use crate::error::EngineError;
use crate::tracker::TouchTracker;
use crate::types::{GestureVerdict, Point};

pub(super) struct RecognizerMachine {
    pub(super) config: GestureConfig,
    pub(super) phase: RecognizerPhase,
    pub(super) tracker: TouchTracker,
    pub(super) classifier: GestureClassifier,
    pub(super) double_tap: DoubleTapDetector,
    pub(super) started: bool,
    pub(super) is_double_tapping: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(super) enum EngineResponse {
    #[default]
    Accepted,
    TapEvaluated(bool),
    Verdict(GestureVerdict),
    Rejected(EngineError),
}

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct DispatchContext {
    pub(super) response: EngineResponse,
}

impl RecognizerMachine {
    pub(super) fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: RecognizerPhase::Idle,
            tracker: TouchTracker::new(config.trajectory_retention),
            classifier: GestureClassifier::new(&config),
            double_tap: DoubleTapDetector::new(&config),
            started: false,
            is_double_tapping: false,
        }
    }

    fn open_session(&mut self) {
        self.tracker.start_session();
        self.started = false;
        self.is_double_tapping = false;
        self.phase = RecognizerPhase::SessionOpen;
        log::debug!("recognizer: session open");
    }

    fn evaluate_origin(&mut self, origin: Point, now_ms: u64) -> bool {
        self.started = true;
        self.tracker.set_current_point(origin);
        self.is_double_tapping = self.double_tap.evaluate_tap(origin, now_ms);
        self.is_double_tapping
    }

    fn classify(&mut self) -> GestureVerdict {
        self.classifier.classify(self.tracker.session_mut())
    }

    fn complete_session(&mut self) -> GestureVerdict {
        let classified = self.classify();
        // A second tap that swiped or pinched reports the motion instead.
        let verdict = if self.is_double_tapping
            && matches!(classified, GestureVerdict::None | GestureVerdict::SingleTap)
        {
            GestureVerdict::DoubleTap
        } else {
            classified
        };
        self.phase = RecognizerPhase::Idle;
        log::debug!(
            "recognizer: completed pointers={} classified={classified} verdict={verdict}",
            self.tracker.session().pointer_count()
        );
        verdict
    }

    fn shut_down(&mut self) {
        self.tracker.start_session();
        self.started = false;
        self.is_double_tapping = false;
        self.phase = RecognizerPhase::Disabled;
        log::debug!("recognizer: disabled");
    }

    fn reject(&self, context: &mut DispatchContext, event: &RecognizerEvent) {
        let error = match self.phase {
            RecognizerPhase::Disabled => EngineError::Disabled {
                event: event.label(),
            },
            phase => EngineError::ContractViolation {
                state: phase.label(),
                event: event.label(),
            },
        };
        context.response = EngineResponse::Rejected(error);
    }
}

#[state_machine(initial = "State::idle()")]
impl RecognizerMachine {
    #[state]
    fn disabled(
        &mut self,
        context: &mut DispatchContext,
        event: &RecognizerEvent,
    ) -> Outcome<State> {
        match event {
            RecognizerEvent::Enable => {
                self.phase = RecognizerPhase::Idle;
                log::debug!("recognizer: enabled");
                Transition(State::idle())
            }
            RecognizerEvent::Disable => Handled,
            _ => {
                self.reject(context, event);
                Handled
            }
        }
    }

    #[state]
    fn idle(&mut self, context: &mut DispatchContext, event: &RecognizerEvent) -> Outcome<State> {
        match event {
            RecognizerEvent::Manipulation(ManipulationEvent::Starting) => {
                self.open_session();
                Transition(State::session_open())
            }
            RecognizerEvent::Enable => Handled,
            RecognizerEvent::Disable => {
                self.shut_down();
                Transition(State::disabled())
            }
            _ => {
                self.reject(context, event);
                Handled
            }
        }
    }

    #[state]
    fn session_open(
        &mut self,
        context: &mut DispatchContext,
        event: &RecognizerEvent,
    ) -> Outcome<State> {
        match event {
            RecognizerEvent::Manipulation(ManipulationEvent::Started { origin, now_ms }) => {
                if self.started {
                    self.reject(context, event);
                } else {
                    let paired = self.evaluate_origin(*origin, *now_ms);
                    context.response = EngineResponse::TapEvaluated(paired);
                }
                Handled
            }
            RecognizerEvent::Manipulation(ManipulationEvent::PointerMoved { pointer, point }) => {
                log::trace!(
                    "recognizer: sample id={pointer} x={:.1} y={:.1}",
                    point.x,
                    point.y
                );
                self.tracker.track_point(*pointer, *point);
                Handled
            }
            RecognizerEvent::LiveVerdict => {
                context.response = EngineResponse::Verdict(self.classify());
                Handled
            }
            // Every session must feed its origin to the double-tap detector.
            RecognizerEvent::Manipulation(ManipulationEvent::Completed) if !self.started => {
                self.reject(context, event);
                Handled
            }
            RecognizerEvent::Manipulation(ManipulationEvent::Completed) => {
                context.response = EngineResponse::Verdict(self.complete_session());
                Transition(State::idle())
            }
            RecognizerEvent::Enable => Handled,
            RecognizerEvent::Disable => {
                self.shut_down();
                Transition(State::disabled())
            }
            RecognizerEvent::Manipulation(ManipulationEvent::Starting) => {
                self.reject(context, event);
                Handled
            }
        }
    }
}
