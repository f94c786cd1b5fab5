/// Which page effects run for a given `prefers-reduced-motion` answer.
/// Reduced motion turns off everything that moves on its own or follows
/// the pointer, and shows reveals and counters in their final state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectPlan {
    pub hover: bool,
    pub scroll_progress: bool,
    pub parallax: bool,
    pub reveal_on_scroll: bool,
    pub animate_counters: bool,
}

impl EffectPlan {
    pub fn for_motion(reduced_motion: bool) -> Self {
        let animate = !reduced_motion;
        Self {
            hover: animate,
            scroll_progress: animate,
            parallax: animate,
            reveal_on_scroll: animate,
            animate_counters: animate,
        }
    }
}
