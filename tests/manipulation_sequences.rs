use touch_gestures::{
    EngineError, GestureConfig, GestureEngine, GestureReactions, GestureVerdict, ManipulationEvent,
    Point, PointerId, SwipeDirection,
};

#[derive(Default)]
struct CountingReactions {
    single_tap: u32,
    double_tap: u32,
    pinch: u32,
    swipe_up: u32,
    swipe_down: u32,
    swipe_left: u32,
    swipe_right: u32,
}

impl CountingReactions {
    fn total(&self) -> u32 {
        self.single_tap
            + self.double_tap
            + self.pinch
            + self.swipe_up
            + self.swipe_down
            + self.swipe_left
            + self.swipe_right
    }
}

impl GestureReactions for CountingReactions {
    fn on_single_tap(&mut self) {
        self.single_tap += 1;
    }
    fn on_double_tap(&mut self) {
        self.double_tap += 1;
    }
    fn on_pinch(&mut self) {
        self.pinch += 1;
    }
    fn on_swipe_up(&mut self) {
        self.swipe_up += 1;
    }
    fn on_swipe_down(&mut self) {
        self.swipe_down += 1;
    }
    fn on_swipe_left(&mut self) {
        self.swipe_left += 1;
    }
    fn on_swipe_right(&mut self) {
        self.swipe_right += 1;
    }
}

fn moved(id: u32, x: f64, y: f64) -> ManipulationEvent {
    ManipulationEvent::PointerMoved {
        pointer: PointerId(id),
        point: Point::new(x, y),
    }
}

fn started(x: f64, y: f64, now_ms: u64) -> ManipulationEvent {
    ManipulationEvent::Started {
        origin: Point::new(x, y),
        now_ms,
    }
}

fn replay(engine: &mut GestureEngine, events: &[ManipulationEvent]) -> Vec<GestureVerdict> {
    events
        .iter()
        .filter_map(|event| engine.handle(*event).expect("event accepted"))
        .collect()
}

#[test]
fn swipe_down_invokes_exactly_one_hook() {
    let mut engine = GestureEngine::default();
    let mut reactions = CountingReactions::default();

    engine.starting().unwrap();
    engine.started(Point::new(0.0, 0.0), 0).unwrap();
    engine.pointer_moved(PointerId(1), Point::new(0.0, 0.0)).unwrap();
    engine.pointer_moved(PointerId(1), Point::new(0.0, 30.0)).unwrap();
    let verdict = engine.complete_with(&mut reactions).unwrap();

    assert_eq!(verdict, GestureVerdict::Swipe(SwipeDirection::Down));
    assert_eq!(reactions.swipe_down, 1);
    assert_eq!(reactions.total(), 1);
}

#[test]
fn four_swipe_directions_over_consecutive_sessions() {
    let mut engine = GestureEngine::default();
    let verdicts = replay(
        &mut engine,
        &[
            ManipulationEvent::Starting,
            started(100.0, 100.0, 0),
            moved(1, 100.0, 100.0),
            moved(1, 100.0, 85.0),
            ManipulationEvent::Completed,
            ManipulationEvent::Starting,
            started(100.0, 100.0, 1_000),
            moved(1, 100.0, 100.0),
            moved(1, 100.0, 115.0),
            ManipulationEvent::Completed,
            ManipulationEvent::Starting,
            started(100.0, 100.0, 2_000),
            moved(1, 100.0, 100.0),
            moved(1, 85.0, 100.0),
            ManipulationEvent::Completed,
            ManipulationEvent::Starting,
            started(100.0, 100.0, 3_000),
            moved(1, 100.0, 100.0),
            moved(1, 115.0, 100.0),
            ManipulationEvent::Completed,
        ],
    );

    assert_eq!(
        verdicts,
        vec![
            GestureVerdict::Swipe(SwipeDirection::Up),
            GestureVerdict::Swipe(SwipeDirection::Down),
            GestureVerdict::Swipe(SwipeDirection::Left),
            GestureVerdict::Swipe(SwipeDirection::Right),
        ]
    );
}

#[test]
fn tap_then_quick_tap_is_single_then_double() {
    let mut engine = GestureEngine::default();
    let verdicts = replay(
        &mut engine,
        &[
            ManipulationEvent::Starting,
            started(40.0, 40.0, 5_000),
            moved(1, 40.0, 40.0),
            ManipulationEvent::Completed,
            ManipulationEvent::Starting,
            started(43.0, 44.0, 5_100),
            moved(1, 43.0, 44.0),
            ManipulationEvent::Completed,
            ManipulationEvent::Starting,
            started(43.0, 44.0, 5_600),
            moved(1, 43.0, 44.0),
            ManipulationEvent::Completed,
        ],
    );

    assert_eq!(
        verdicts,
        vec![
            GestureVerdict::SingleTap,
            GestureVerdict::DoubleTap,
            GestureVerdict::SingleTap,
        ]
    );
}

#[test]
fn far_second_tap_is_not_double() {
    let mut engine = GestureEngine::default();
    let verdicts = replay(
        &mut engine,
        &[
            ManipulationEvent::Starting,
            started(0.0, 0.0, 100),
            moved(1, 0.0, 0.0),
            ManipulationEvent::Completed,
            ManipulationEvent::Starting,
            started(15.0, 20.0, 200),
            moved(1, 15.0, 20.0),
            ManipulationEvent::Completed,
        ],
    );
    assert_eq!(
        verdicts,
        vec![GestureVerdict::SingleTap, GestureVerdict::SingleTap]
    );
}

#[test]
fn pinch_ignores_pointer_motion() {
    let mut engine = GestureEngine::default();
    let mut reactions = CountingReactions::default();
    engine.starting().unwrap();
    engine.started(Point::new(0.0, 0.0), 0).unwrap();
    for step in 0..5 {
        let offset = step as f64 * 10.0;
        engine
            .pointer_moved(PointerId(1), Point::new(offset, 0.0))
            .unwrap();
        engine
            .pointer_moved(PointerId(2), Point::new(200.0 - offset, 0.0))
            .unwrap();
    }
    assert_eq!(
        engine.complete_with(&mut reactions),
        Ok(GestureVerdict::Pinch)
    );
    assert_eq!(reactions.pinch, 1);
    assert_eq!(reactions.total(), 1);
}

#[test]
fn misuse_never_masquerades_as_no_gesture() {
    let mut engine = GestureEngine::default();
    let err = engine
        .handle(moved(1, 0.0, 0.0))
        .expect_err("sample before starting");
    assert!(matches!(err, EngineError::ContractViolation { .. }));
    assert!(err.to_string().contains("pointer_moved"));
}

#[test]
fn completion_requires_started_in_the_same_session() {
    let mut engine = GestureEngine::default();
    let mut reactions = CountingReactions::default();
    engine.handle(ManipulationEvent::Starting).unwrap();
    engine.handle(moved(1, 500.0, 500.0)).unwrap();

    let err = engine
        .complete_with(&mut reactions)
        .expect_err("completed without started");
    assert!(matches!(
        err,
        EngineError::ContractViolation {
            event: "completed",
            ..
        }
    ));
    assert_eq!(reactions.total(), 0);
}

#[test]
fn boundary_thresholds_are_configurable() {
    let config = GestureConfig {
        minimum_move: 0.5,
        max_double_tap_distance: 1.0,
        max_double_tap_interval_ms: 50,
        ..GestureConfig::default()
    };
    let mut engine = GestureEngine::new(config);
    let verdicts = replay(
        &mut engine,
        &[
            ManipulationEvent::Starting,
            started(0.0, 0.0, 0),
            moved(1, 0.0, 0.0),
            moved(1, 0.0, 0.6),
            ManipulationEvent::Completed,
            ManipulationEvent::Starting,
            started(0.5, 0.0, 50),
            ManipulationEvent::Completed,
            ManipulationEvent::Starting,
            started(0.5, 0.0, 101),
            ManipulationEvent::Completed,
        ],
    );
    assert_eq!(
        verdicts,
        vec![
            GestureVerdict::Swipe(SwipeDirection::Down),
            GestureVerdict::DoubleTap,
            GestureVerdict::None,
        ]
    );
}
