use crate::constants::{MAX_TRAIL, MAX_TRAIL_LIMIT};
use glam::Vec2;
use std::collections::VecDeque;

/// Last known pointer position plus a short newest-first trail.
#[derive(Clone, Debug)]
pub struct PointerState {
    position: Option<Vec2>,
    trail: VecDeque<Vec2>,
    max_trail: usize,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(MAX_TRAIL)
    }
}

impl PointerState {
    pub fn new(max_trail: usize) -> Self {
        let max_trail = max_trail.max(1);
        Self {
            position: None,
            trail: VecDeque::with_capacity(max_trail.saturating_add(1).min(MAX_TRAIL_LIMIT + 1)),
            max_trail,
        }
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }

    /// Trail points, newest first.
    pub fn trail(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.trail.iter().copied()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Record a pointer move. Non-finite coordinates are dropped.
    pub fn move_to(&mut self, pos: Vec2) {
        if !pos.is_finite() {
            return;
        }
        self.position = Some(pos);
        self.trail.push_front(pos);
        if self.trail.len() > self.max_trail {
            self.trail.pop_back();
        }
    }

    pub fn leave(&mut self) {
        self.position = None;
        self.trail.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_is_newest_first_and_bounded() {
        let mut p = PointerState::new(3);
        for i in 0..5 {
            p.move_to(Vec2::new(i as f32, 0.0));
        }
        let xs: Vec<f32> = p.trail().map(|v| v.x).collect();
        assert_eq!(xs, vec![4.0, 3.0, 2.0]);
        assert_eq!(p.position(), Some(Vec2::new(4.0, 0.0)));
    }

    #[test]
    fn leave_clears_position_and_trail() {
        let mut p = PointerState::default();
        p.move_to(Vec2::new(1.0, 2.0));
        p.move_to(Vec2::new(3.0, 4.0));
        p.leave();
        assert!(!p.is_present());
        assert_eq!(p.trail_len(), 0);
    }

    #[test]
    fn oversized_trail_limit_does_not_overflow() {
        let mut p = PointerState::new(usize::MAX);
        p.move_to(Vec2::new(1.0, 1.0));
        p.move_to(Vec2::new(2.0, 2.0));
        assert_eq!(p.trail_len(), 2);
    }

    #[test]
    fn non_finite_moves_are_ignored() {
        let mut p = PointerState::default();
        p.move_to(Vec2::new(f32::NAN, 2.0));
        assert!(!p.is_present());
        assert_eq!(p.trail_len(), 0);
    }
}
