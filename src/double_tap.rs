use crate::config::GestureConfig;
use crate::types::Point;

/// Pairs taps across manipulation sessions.
///
/// Each evaluation reads the previous tap and then replaces it, so a tap that
/// completes a double tap can also open the next one.
#[derive(Clone, Copy, Debug)]
pub struct DoubleTapDetector {
    max_distance: f64,
    max_interval_ms: u64,
    last_tap_point: Point,
    last_tap_ms: Option<u64>,
}

impl Default for DoubleTapDetector {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl DoubleTapDetector {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            max_distance: config.max_double_tap_distance,
            max_interval_ms: config.max_double_tap_interval_ms,
            last_tap_point: Point::default(),
            last_tap_ms: None,
        }
    }

    /// `point` must be in a coordinate frame that is stable across sessions.
    pub fn evaluate_tap(&mut self, point: Point, now_ms: u64) -> bool {
        let distance = self.last_tap_point.distance_to(point);
        let within_range = distance < self.max_distance;
        let elapsed_ms = self.last_tap_ms.map(|t_ms| now_ms.saturating_sub(t_ms));
        let within_time = matches!(
            elapsed_ms,
            Some(elapsed) if elapsed > 0 && elapsed <= self.max_interval_ms
        );

        self.last_tap_point = point;
        self.last_tap_ms = Some(now_ms);

        log::debug!(
            "double_tap: distance={distance:.1} elapsed_ms={elapsed_ms:?} paired={}",
            within_range && within_time
        );
        within_range && within_time
    }

    pub fn last_tap(&self) -> Option<(Point, u64)> {
        self.last_tap_ms.map(|t_ms| (self.last_tap_point, t_ms))
    }
}
