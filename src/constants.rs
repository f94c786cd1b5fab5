// DOM hooks and web-side tuning for the particle canvas and page effects.

// Particle canvas
pub const CANVAS_ID: &str = "particles-canvas";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const OVERRIDE_ATTR_PREFIX: &str = "data-"; // e.g. data-particle-count on the canvas

// Hover effects
pub const MAGNETIC_SELECTOR: &str = ".btn-primary, .btn-secondary";
pub const TILT_SELECTOR: &str = ".service-card, .benefit-card, .portfolio-card";
pub const RIPPLE_SELECTOR: &str = ".btn, .card";
pub const MAGNETIC_TRANSITION: &str = "transform 0.3s cubic-bezier(0.23, 1, 0.32, 1)";
pub const TILT_TRANSITION: &str = "transform 0.5s cubic-bezier(0.23, 1, 0.32, 1)";
pub const TILT_GLARE_CLASS: &str = "tilt-glare";
pub const RIPPLE_CLASS: &str = "ripple-effect";
pub const RIPPLE_SEED_PX: f32 = 10.0; // seed disk diameter before the CSS animation scales it
pub const RIPPLE_DURATION_MS: i32 = 600;
pub const RIPPLE_ANIMATION: &str = "rippleAnimation 0.6s linear";
pub const RIPPLE_BACKGROUND: &str = "rgba(255, 255, 255, 0.4)";
pub const RIPPLE_STYLE_ID: &str = "ripple-keyframes";
pub const RIPPLE_KEYFRAMES: &str =
    "@keyframes rippleAnimation { to { transform: scale(40); opacity: 0; } }";
pub const TILT_GLARE_BASE: &str = "linear-gradient(135deg, rgba(255,255,255,0) 0%, rgba(255,255,255,0) 40%, rgba(255,255,255,0.2) 45%, rgba(255,255,255,0) 50%)";
pub const TILT_GLARE_Z_INDEX: &str = "10";

// Scroll effects
pub const COUNTER_SELECTOR: &str = "[data-count]";
pub const COUNTER_THRESHOLD: f64 = 0.5; // fraction visible before a counter starts
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const SCROLL_PROGRESS_CLASS: &str = "scroll-progress";
pub const SCROLL_PROGRESS_TRANSITION: &str = "width 0.1s linear";
pub const COUNT_ATTR: &str = "data-count";
pub const COUNT_SUFFIX_ATTR: &str = "data-suffix";
pub const COUNT_EASING_ATTR: &str = "data-easing";
pub const PARALLAX_ATTR: &str = "data-parallax";

// Reveal on scroll
pub const REVEAL_SELECTOR: &str = ".animate";
pub const REVEAL_CLASS: &str = "in-view";
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const ANIMATE_READY_CLASS: &str = "animate-ready"; // on <body> once reveals are armed

// Forms
pub const FORM_SELECTOR: &str = "form[data-validate]";
pub const REQUIRED_SELECTOR: &str = "[required]";
pub const SUBMIT_SELECTOR: &str = "[type=\"submit\"]";
pub const FORM_ERROR_CLASS: &str = "form-error";
pub const INPUT_ERROR_CLASS: &str = "error";
pub const FORM_SUCCESS_CLASS: &str = "form-success";
pub const FORM_SUCCESS_TEXT: &str = "Thanks! We'll be in touch within 24 hours.";
pub const FORM_SENDING_HTML: &str = "<span class=\"animate-spin\">&#9696;</span> Sending...";
pub const FORM_SEND_DELAY_MS: i32 = 1500;
pub const FORM_SUCCESS_MS: i32 = 5000;

// FAQ accordion
pub const FAQ_ITEM_SELECTOR: &str = ".faq-item";
pub const FAQ_QUESTION_SELECTOR: &str = ".faq-question";
pub const FAQ_ANSWER_SELECTOR: &str = ".faq-answer";
pub const ACTIVE_CLASS: &str = "active";

// Portfolio carousel
pub const CAROUSEL_TRACK_SELECTOR: &str = ".portfolio-track";
pub const CAROUSEL_SLIDE_SELECTOR: &str = ".portfolio-slide";
pub const CAROUSEL_PREV_SELECTOR: &str = ".portfolio-prev";
pub const CAROUSEL_NEXT_SELECTOR: &str = ".portfolio-next";
pub const CAROUSEL_DOT_SELECTOR: &str = ".portfolio-dot";
