//! Geometry behind the site's hover and scroll micro-interactions.
//!
//! The web frontend measures elements and the pointer, calls into here, and
//! writes the result back as CSS. Nothing in this module touches the DOM.

use crate::easing::Easing;
use glam::Vec2;

/// An element's bounding box in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Client coordinates relative to the element's top-left corner.
    pub fn local(&self, client: Vec2) -> Vec2 {
        client - Vec2::new(self.left, self.top)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Buttons that lean towards the pointer while hovered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnetic {
    pub strength: f32,
}

impl Default for Magnetic {
    fn default() -> Self {
        Self { strength: 0.3 }
    }
}

impl Magnetic {
    pub fn offset(&self, rect: ElementRect, pointer: Vec2) -> Vec2 {
        (pointer - rect.center()) * self.strength
    }

    pub fn transform_css(offset: Vec2) -> String {
        format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
    }
}

/// Cards that rotate in 3D under the pointer, with a glare hotspot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub max_rotation_deg: f32,
    pub perspective_px: f32,
    pub hover_scale: f32,
}

impl Default for Tilt {
    fn default() -> Self {
        Self {
            max_rotation_deg: 15.0,
            perspective_px: 1000.0,
            hover_scale: 1.02,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
    /// Glare centre in percent of the card's width and height.
    pub glare: Vec2,
}

impl Tilt {
    pub fn rest(&self) -> TiltPose {
        TiltPose {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            scale: 1.0,
            glare: Vec2::splat(50.0),
        }
    }

    pub fn pose(&self, rect: ElementRect, pointer: Vec2) -> TiltPose {
        if rect.is_empty() {
            return self.rest();
        }
        let local = rect.local(pointer);
        let half = Vec2::new(rect.width, rect.height) / 2.0;
        TiltPose {
            rotate_x_deg: (local.y - half.y) / half.y * -self.max_rotation_deg,
            rotate_y_deg: (local.x - half.x) / half.x * self.max_rotation_deg,
            scale: self.hover_scale,
            glare: Vec2::new(local.x / rect.width, local.y / rect.height) * 100.0,
        }
    }

    pub fn transform_css(&self, pose: &TiltPose) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
            self.perspective_px,
            pose.rotate_x_deg,
            pose.rotate_y_deg,
            s = pose.scale
        )
    }

    pub fn glare_css(pose: &TiltPose) -> String {
        format!(
            "radial-gradient(circle at {:.1}% {:.1}%, rgba(255,255,255,0.3) 0%, rgba(255,255,255,0.1) 30%, rgba(255,255,255,0) 60%)",
            pose.glare.x, pose.glare.y
        )
    }
}

/// Where a click ripple starts, relative to the clicked element.
pub fn ripple_origin(rect: ElementRect, pointer: Vec2) -> Vec2 {
    rect.local(pointer)
}

/// A number that counts up from zero when it scrolls into view.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    pub target: i64,
    pub duration_ms: f64,
    pub easing: Easing,
    pub suffix: String,
}

impl Counter {
    pub fn new(target: i64, suffix: impl Into<String>) -> Self {
        Self {
            target,
            duration_ms: 2000.0,
            easing: Easing::OutQuart,
            suffix: suffix.into(),
        }
    }

    /// Parse `data-count` by its leading integer (`"12+"` is 12); anything
    /// without one counts to zero.
    pub fn from_attrs(count: Option<&str>, suffix: Option<&str>) -> Self {
        let target = count.and_then(leading_int).unwrap_or(0);
        Self::new(target, suffix.unwrap_or_default())
    }

    pub fn with_easing(mut self, easing: Easing, duration_ms: f64) -> Self {
        self.easing = easing;
        self.duration_ms = duration_ms;
        self
    }

    /// `data-easing="elastic"` switches to the slower elastic landing.
    pub fn with_easing_attr(self, easing: Option<&str>) -> Self {
        match easing.map(str::trim) {
            Some("elastic") => self.with_easing(Easing::OutElastic, 2500.0),
            _ => self,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.target;
        }
        let eased = self.easing.apply(progress).min(1.0) as f64;
        (self.target as f64 * eased).floor() as i64
    }

    /// Grouped digits, with the suffix only once the count has landed.
    pub fn text_at(&self, elapsed_ms: f64) -> String {
        let mut text = group_thousands(self.value_at(elapsed_ms));
        if self.is_finished(elapsed_ms) {
            text.push_str(&self.suffix);
        }
        text
    }
}

/// Optional whitespace and sign followed by at least one digit; anything
/// after the digits is ignored.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Page scroll position as a percentage of the scrollable distance.
pub fn scroll_progress(scroll_top: f32, document_height: f32, viewport_height: f32) -> f32 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub const DEFAULT_PARALLAX_SPEED: f32 = 0.5;

/// Parse a `data-parallax` speed. Missing, unparsable or zero values fall
/// back to the default.
pub fn parallax_speed(attr: Option<&str>) -> f32 {
    attr.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|s| s.is_finite() && *s != 0.0)
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

pub fn parallax_offset(scroll_y: f32, speed: f32) -> f32 {
    scroll_y * speed
}

/// Whether `value` looks like `local@domain.tld`: no whitespace, exactly one
/// `@`, and a dot inside the domain with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

impl FieldKind {
    /// From an input's `type` attribute.
    pub fn from_type_attr(ty: Option<&str>) -> Self {
        match ty.map(str::trim) {
            Some(t) if t.eq_ignore_ascii_case("email") => FieldKind::Email,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::Required => "This field is required",
            FieldError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

/// Check one required form field.
pub fn validate_required(kind: FieldKind, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    if kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// FAQ list where at most one item is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new(open: Option<usize>) -> Self {
        Self { open }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    /// Clicking the open item closes it; clicking another opens it alone.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }
}

pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
pub const CAROUSEL_AUTOPLAY_MS: i32 = 5000;
pub const CAROUSEL_DEFAULT_GAP_PX: f32 = 32.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
}

/// A touch that travelled more than the threshold; leftward goes forward.
pub fn swipe(start_x: f32, end_x: f32) -> Option<Swipe> {
    let diff = start_x - end_x;
    if diff.is_nan() || diff.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    Some(if diff > 0.0 { Swipe::Next } else { Swipe::Prev })
}

/// Index into a wrapping row of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// `None` for an empty carousel.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Jump to a dot; out-of-range indices land on the last slide.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.index = index.min(self.len - 1);
        self.index
    }

    pub fn apply(&mut self, swipe: Swipe) -> usize {
        match swipe {
            Swipe::Next => self.next(),
            Swipe::Prev => self.prev(),
        }
    }

    /// Track translation for slides `slide_width` wide separated by `gap`.
    pub fn offset_px(&self, slide_width: f32, gap: f32) -> f32 {
        -(self.index as f32) * (slide_width + gap)
    }
}

/// Parse a computed `gap` such as `"24px"`, falling back to the default.
pub fn carousel_gap(computed: Option<&str>) -> f32 {
    computed
        .and_then(leading_int)
        .filter(|g| *g > 0)
        .map(|g| g as f32)
        .unwrap_or(CAROUSEL_DEFAULT_GAP_PX)
}
