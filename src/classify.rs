use crate::config::GestureConfig;
use crate::tracker::TouchSession;
use crate::types::{GestureVerdict, SwipeDirection};

/// Turns accumulated session trajectories into one verdict.
///
/// Two simultaneous pointers always mean pinch; one pointer is a tap or a
/// swipe along whichever axis dominates; any other count is `None`.
#[derive(Clone, Copy, Debug)]
pub struct GestureClassifier {
    minimum_move: f64,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl GestureClassifier {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            minimum_move: config.minimum_move,
        }
    }

    /// Classifies the session, extending its horizontal extent watermarks.
    pub fn classify(&self, session: &mut TouchSession) -> GestureVerdict {
        match session.pointer_count() {
            2 => GestureVerdict::Pinch,
            1 => {
                let Some((_, trajectory)) = session.trajectories().next() else {
                    return GestureVerdict::None;
                };
                if trajectory.is_single_point() {
                    return GestureVerdict::SingleTap;
                }
                let (dx, dy) = trajectory.displacement();
                session.record_horizontal_extent(dx);
                self.classify_swipe(dx, dy)
            }
            _ => GestureVerdict::None,
        }
    }

    fn classify_swipe(&self, dx: f64, dy: f64) -> GestureVerdict {
        let abs_dx = dx.abs();
        let abs_dy = dy.abs();

        if abs_dy > self.minimum_move && abs_dy > abs_dx {
            if dy > 0.0 {
                GestureVerdict::Swipe(SwipeDirection::Down)
            } else {
                GestureVerdict::Swipe(SwipeDirection::Up)
            }
        } else if abs_dx > self.minimum_move && abs_dx > abs_dy {
            if dx > 0.0 {
                GestureVerdict::Swipe(SwipeDirection::Right)
            } else {
                GestureVerdict::Swipe(SwipeDirection::Left)
            }
        } else {
            GestureVerdict::None
        }
    }
}
