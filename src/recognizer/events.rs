use crate::types::{Point, PointerId};

/// Host manipulation callbacks, in the order a surface delivers them:
/// `Starting`, `Started`, any number of `PointerMoved`, then `Completed`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ManipulationEvent {
    Starting,
    /// `origin` must be in a frame that stays stable across sessions.
    Started {
        origin: Point,
        now_ms: u64,
    },
    PointerMoved {
        pointer: PointerId,
        point: Point,
    },
    Completed,
}

impl ManipulationEvent {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Started { .. } => "started",
            Self::PointerMoved { .. } => "pointer_moved",
            Self::Completed => "completed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum RecognizerEvent {
    Manipulation(ManipulationEvent),
    LiveVerdict,
    Enable,
    Disable,
}

impl RecognizerEvent {
    pub(super) const fn label(&self) -> &'static str {
        match self {
            Self::Manipulation(event) => event.label(),
            Self::LiveVerdict => "live_verdict",
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecognizerPhase {
    Disabled,
    #[default]
    Idle,
    SessionOpen,
}

impl RecognizerPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Idle => "idle",
            Self::SessionOpen => "in session",
        }
    }
}
