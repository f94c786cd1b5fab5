//! Page micro-interactions and widgets that run alongside the particle canvas.

pub mod forms;
pub mod hover;
pub mod scroll;
pub mod widgets;

pub use forms::wire_forms;
pub use hover::wire_hover_effects;
pub use scroll::wire_scroll_effects;
pub use widgets::{wire_carousel, wire_faq};
