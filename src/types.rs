use core::fmt;

/// Surface-local coordinate of a contact sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Identifies one finger or stylus for the lifetime of a manipulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Single classified result for a manipulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureVerdict {
    #[default]
    None,
    SingleTap,
    DoubleTap,
    Pinch,
    Swipe(SwipeDirection),
}

impl GestureVerdict {
    pub const ALL: [GestureVerdict; 8] = [
        GestureVerdict::None,
        GestureVerdict::SingleTap,
        GestureVerdict::DoubleTap,
        GestureVerdict::Pinch,
        GestureVerdict::Swipe(SwipeDirection::Up),
        GestureVerdict::Swipe(SwipeDirection::Down),
        GestureVerdict::Swipe(SwipeDirection::Left),
        GestureVerdict::Swipe(SwipeDirection::Right),
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SingleTap => "single_tap",
            Self::DoubleTap => "double_tap",
            Self::Pinch => "pinch",
            Self::Swipe(SwipeDirection::Up) => "swipe_up",
            Self::Swipe(SwipeDirection::Down) => "swipe_down",
            Self::Swipe(SwipeDirection::Left) => "swipe_left",
            Self::Swipe(SwipeDirection::Right) => "swipe_right",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|verdict| verdict.label() == label)
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for GestureVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
