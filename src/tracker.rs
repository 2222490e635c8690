use smallvec::SmallVec;

use crate::config::TrajectoryRetention;
use crate::types::{Point, PointerId};

/// Samples kept per pointer when full retention is enabled.
pub const TRAJECTORY_HISTORY_CAPACITY: usize = 32;

/// Path of one pointer within a session.
///
/// Classification only reads the endpoints; the recent-sample window is kept
/// for hosts that ask for [`TrajectoryRetention::Full`].
#[derive(Clone, Debug)]
pub struct Trajectory {
    first: Point,
    last: Point,
    len: usize,
    recent: Option<heapless::Vec<Point, TRAJECTORY_HISTORY_CAPACITY>>,
}

impl Trajectory {
    fn new(point: Point, retention: TrajectoryRetention) -> Self {
        let recent = match retention {
            TrajectoryRetention::Endpoints => None,
            TrajectoryRetention::Full => {
                let mut window = heapless::Vec::new();
                let _ = window.push(point);
                Some(window)
            }
        };
        Self {
            first: point,
            last: point,
            len: 1,
            recent,
        }
    }

    fn push(&mut self, point: Point) {
        self.last = point;
        self.len = self.len.saturating_add(1);
        if let Some(window) = &mut self.recent {
            if window.push(point).is_err() {
                let _ = window.remove(0);
                let _ = window.push(point);
            }
        }
    }

    pub fn first(&self) -> Point {
        self.first
    }

    pub fn last(&self) -> Point {
        self.last
    }

    /// Number of samples observed, including ones evicted from the window.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a trajectory is created by its first sample.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_single_point(&self) -> bool {
        self.len == 1
    }

    /// Most recent samples in chronological order; empty under endpoint retention.
    pub fn recent(&self) -> &[Point] {
        self.recent.as_deref().unwrap_or(&[])
    }

    pub fn displacement(&self) -> (f64, f64) {
        (self.last.x - self.first.x, self.last.y - self.first.y)
    }
}

/// Pointer trajectories observed since the last "manipulation starting".
#[derive(Clone, Debug, Default)]
pub struct TouchSession {
    trajectories: SmallVec<[(PointerId, Trajectory); 2]>,
    max_left_extent: f64,
    max_right_extent: f64,
}

impl TouchSession {
    pub fn pointer_count(&self) -> usize {
        self.trajectories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    pub fn trajectory(&self, pointer: PointerId) -> Option<&Trajectory> {
        self.trajectories
            .iter()
            .find(|(id, _)| *id == pointer)
            .map(|(_, trajectory)| trajectory)
    }

    /// Trajectories in the order their pointers first appeared.
    pub fn trajectories(&self) -> impl Iterator<Item = (PointerId, &Trajectory)> + '_ {
        self.trajectories.iter().map(|(id, trajectory)| (*id, trajectory))
    }

    /// Most negative horizontal displacement seen; zero or below.
    pub fn max_left_extent(&self) -> f64 {
        self.max_left_extent
    }

    /// Most positive horizontal displacement seen; zero or above.
    pub fn max_right_extent(&self) -> f64 {
        self.max_right_extent
    }

    pub(crate) fn record_horizontal_extent(&mut self, delta_x: f64) {
        if delta_x > 0.0 && delta_x > self.max_right_extent {
            self.max_right_extent = delta_x;
        } else if delta_x < 0.0 && delta_x < self.max_left_extent {
            self.max_left_extent = delta_x;
        }
    }

    fn clear(&mut self) {
        self.trajectories.clear();
        self.max_left_extent = 0.0;
        self.max_right_extent = 0.0;
    }
}

/// Owns the current session and records pointer samples into it.
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    session: TouchSession,
    current_point: Option<Point>,
    retention: TrajectoryRetention,
}

impl TouchTracker {
    pub fn new(retention: TrajectoryRetention) -> Self {
        Self {
            session: TouchSession::default(),
            current_point: None,
            retention,
        }
    }

    /// Drops every trajectory and zeroes both extent watermarks.
    pub fn start_session(&mut self) {
        self.session.clear();
    }

    pub fn track_point(&mut self, pointer: PointerId, point: Point) {
        match self
            .session
            .trajectories
            .iter_mut()
            .find(|(id, _)| *id == pointer)
        {
            Some((_, trajectory)) => trajectory.push(point),
            None => {
                log::trace!("tracker: new pointer id={pointer}");
                self.session
                    .trajectories
                    .push((pointer, Trajectory::new(point, self.retention)));
            }
        }
        self.current_point = Some(point);
    }

    pub fn session(&self) -> &TouchSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TouchSession {
        &mut self.session
    }

    /// Latest point seen by tracking or tap evaluation; survives session clears.
    pub fn current_point(&self) -> Option<Point> {
        self.current_point
    }

    pub(crate) fn set_current_point(&mut self, point: Point) {
        self.current_point = Some(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn samples_append_per_pointer_in_first_seen_order() {
        let mut tracker = TouchTracker::new(TrajectoryRetention::Endpoints);
        tracker.start_session();
        tracker.track_point(PointerId(7), p(1.0, 1.0));
        tracker.track_point(PointerId(3), p(50.0, 50.0));
        tracker.track_point(PointerId(7), p(2.0, 5.0));

        let session = tracker.session();
        assert_eq!(session.pointer_count(), 2);
        let ids: Vec<PointerId> = session.trajectories().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![PointerId(7), PointerId(3)]);

        let seven = session.trajectory(PointerId(7)).expect("pointer 7 tracked");
        assert_eq!(seven.first(), p(1.0, 1.0));
        assert_eq!(seven.last(), p(2.0, 5.0));
        assert_eq!(seven.len(), 2);
        assert!(seven.recent().is_empty());
        assert_eq!(tracker.current_point(), Some(p(2.0, 5.0)));
    }

    #[test]
    fn start_session_twice_leaves_empty_zero_extent_session() {
        let mut tracker = TouchTracker::default();
        tracker.track_point(PointerId(1), p(0.0, 0.0));
        tracker.session_mut().record_horizontal_extent(-12.0);
        tracker.session_mut().record_horizontal_extent(30.0);

        tracker.start_session();
        tracker.start_session();

        let session = tracker.session();
        assert!(session.is_empty());
        assert_eq!(session.max_left_extent(), 0.0);
        assert_eq!(session.max_right_extent(), 0.0);
    }

    #[test]
    fn current_point_survives_session_clear() {
        let mut tracker = TouchTracker::default();
        tracker.track_point(PointerId(1), p(4.0, 9.0));
        tracker.start_session();
        assert_eq!(tracker.current_point(), Some(p(4.0, 9.0)));
    }

    #[test]
    fn extent_watermarks_only_extend() {
        let mut session = TouchSession::default();
        session.record_horizontal_extent(15.0);
        session.record_horizontal_extent(8.0);
        session.record_horizontal_extent(-4.0);
        session.record_horizontal_extent(-2.0);
        assert_eq!(session.max_right_extent(), 15.0);
        assert_eq!(session.max_left_extent(), -4.0);
    }

    #[test]
    fn full_retention_keeps_bounded_recent_window() {
        let mut tracker = TouchTracker::new(TrajectoryRetention::Full);
        let total = TRAJECTORY_HISTORY_CAPACITY + 5;
        for i in 0..total {
            tracker.track_point(PointerId(1), p(i as f64, 0.0));
        }

        let trajectory = tracker
            .session()
            .trajectory(PointerId(1))
            .expect("pointer tracked");
        assert_eq!(trajectory.len(), total);
        assert_eq!(trajectory.first(), p(0.0, 0.0));
        assert_eq!(trajectory.last(), p((total - 1) as f64, 0.0));

        let recent = trajectory.recent();
        assert_eq!(recent.len(), TRAJECTORY_HISTORY_CAPACITY);
        assert_eq!(recent[0], p(5.0, 0.0));
        assert_eq!(recent[recent.len() - 1], trajectory.last());
    }
}
