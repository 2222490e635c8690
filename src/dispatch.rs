use crate::types::{GestureVerdict, SwipeDirection};

/// Host reactions to recognized gestures. Unimplemented hooks do nothing.
pub trait GestureReactions {
    fn on_single_tap(&mut self) {}
    fn on_double_tap(&mut self) {}
    fn on_pinch(&mut self) {}
    fn on_swipe_up(&mut self) {}
    fn on_swipe_down(&mut self) {}
    fn on_swipe_left(&mut self) {}
    fn on_swipe_right(&mut self) {}
}

/// Invokes the one hook matching `verdict`. Returns `false` for `None`.
pub fn dispatch<R>(verdict: GestureVerdict, reactions: &mut R) -> bool
where
    R: GestureReactions + ?Sized,
{
    match verdict {
        GestureVerdict::None => return false,
        GestureVerdict::SingleTap => reactions.on_single_tap(),
        GestureVerdict::DoubleTap => reactions.on_double_tap(),
        GestureVerdict::Pinch => reactions.on_pinch(),
        GestureVerdict::Swipe(SwipeDirection::Up) => reactions.on_swipe_up(),
        GestureVerdict::Swipe(SwipeDirection::Down) => reactions.on_swipe_down(),
        GestureVerdict::Swipe(SwipeDirection::Left) => reactions.on_swipe_left(),
        GestureVerdict::Swipe(SwipeDirection::Right) => reactions.on_swipe_right(),
    }
    true
}
