// Host-side tests for hover and scroll micro-interaction math.

use glam::Vec2;
use particle_core::easing::Easing;
use particle_core::interactions::*;

fn card() -> ElementRect {
    ElementRect::new(100.0, 50.0, 200.0, 100.0)
}

#[test]
fn magnetic_offset_scales_distance_from_centre() {
    let m = Magnetic::default();
    assert_eq!(m.offset(card(), Vec2::new(200.0, 100.0)), Vec2::ZERO);
    let off = m.offset(card(), Vec2::new(300.0, 50.0));
    assert!((off.x - 30.0).abs() < 1e-4);
    assert!((off.y - -15.0).abs() < 1e-4);
    assert_eq!(
        Magnetic::transform_css(Vec2::new(3.0, -1.5)),
        "translate(3.00px, -1.50px)"
    );
}

#[test]
fn tilt_is_flat_at_centre_and_maximal_at_edges() {
    let tilt = Tilt::default();
    let centre = tilt.pose(card(), Vec2::new(200.0, 100.0));
    assert_eq!(centre.rotate_x_deg, 0.0);
    assert_eq!(centre.rotate_y_deg, 0.0);
    assert_eq!(centre.glare, Vec2::new(50.0, 50.0));
    assert_eq!(centre.scale, 1.02);

    let top_right = tilt.pose(card(), Vec2::new(300.0, 50.0));
    assert_eq!(top_right.rotate_x_deg, 15.0);
    assert_eq!(top_right.rotate_y_deg, 15.0);
    assert_eq!(top_right.glare, Vec2::new(100.0, 0.0));

    let bottom_left = tilt.pose(card(), Vec2::new(100.0, 150.0));
    assert_eq!(bottom_left.rotate_x_deg, -15.0);
    assert_eq!(bottom_left.rotate_y_deg, -15.0);
}

#[test]
fn tilt_on_empty_rect_rests() {
    let tilt = Tilt::default();
    let pose = tilt.pose(ElementRect::new(0.0, 0.0, 0.0, 10.0), Vec2::new(5.0, 5.0));
    assert_eq!(pose, tilt.rest());
    assert_eq!(
        tilt.transform_css(&pose),
        "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) scale3d(1, 1, 1)"
    );
}

#[test]
fn ripple_starts_at_local_click_point() {
    assert_eq!(ripple_origin(card(), Vec2::new(110.0, 75.0)), Vec2::new(10.0, 25.0));
}

#[test]
fn counter_lands_exactly_on_target_with_suffix() {
    let c = Counter::from_attrs(Some("1500"), Some("+"));
    assert_eq!(c.value_at(0.0), 0);
    assert_eq!(c.text_at(0.0), "0");
    let mid = c.value_at(1000.0);
    assert!(mid > 1000 && mid < 1500, "mid={mid}");
    assert!(!c.text_at(1000.0).ends_with('+'));
    assert_eq!(c.text_at(2000.0), "1,500+");
    assert_eq!(c.text_at(9000.0), "1,500+");
}

#[test]
fn elastic_counter_never_overshoots_target() {
    let c = Counter::new(250, "%").with_easing(Easing::OutElastic, 2500.0);
    for ms in (0..=2500).step_by(25) {
        assert!(c.value_at(ms as f64) <= 250);
    }
    assert_eq!(c.text_at(2500.0), "250%");
}

#[test]
fn easing_attribute_selects_elastic_landing() {
    let c = Counter::from_attrs(Some("40"), None).with_easing_attr(Some("elastic"));
    assert_eq!(c.easing, Easing::OutElastic);
    assert_eq!(c.duration_ms, 2500.0);
    let plain = Counter::from_attrs(Some("40"), None).with_easing_attr(Some("bouncy"));
    assert_eq!(plain.easing, Easing::OutQuart);
    assert_eq!(plain.duration_ms, 2000.0);
}

#[test]
fn counter_is_monotonic_with_out_quart() {
    let c = Counter::new(98_765, "");
    let mut prev = -1;
    for ms in (0..=2000).step_by(10) {
        let v = c.value_at(ms as f64);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn bad_count_attribute_counts_to_zero() {
    let c = Counter::from_attrs(Some("lots"), None);
    assert_eq!(c.target, 0);
    assert_eq!(c.text_at(5000.0), "0");
}

#[test]
fn count_attribute_reads_leading_digits() {
    assert_eq!(Counter::from_attrs(Some("12+"), None).target, 12);
    assert_eq!(Counter::from_attrs(Some("  250 clients"), None).target, 250);
    assert_eq!(Counter::from_attrs(Some("-7"), None).target, -7);
    assert_eq!(leading_int("x12"), None);
    assert_eq!(leading_int("+"), None);
    assert_eq!(leading_int("99999999999999999999"), Some(i64::MAX));
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
    assert_eq!(group_thousands(-12_000), "-12,000");
}

#[test]
fn scroll_progress_clamps_and_handles_short_pages() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
    assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
    assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(100.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn parallax_speed_defaults_and_offsets() {
    assert_eq!(parallax_speed(None), 0.5);
    assert_eq!(parallax_speed(Some("nope")), 0.5);
    assert_eq!(parallax_speed(Some("0")), 0.5);
    assert_eq!(parallax_speed(Some(" -0.25 ")), -0.25);
    assert_eq!(parallax_offset(400.0, 0.25), 100.0);
}

#[test]
fn email_pattern() {
    for ok in ["a@b.co", "first.last@mail.example.org", "x@y.z"] {
        assert!(is_valid_email(ok), "{ok}");
    }
    for bad in [
        "", "plain", "@b.co", "a@.co", "a@b.", "a@bco", "a@b@c.de", "a b@c.de", "a@b.co ",
    ] {
        assert!(!is_valid_email(bad), "{bad:?}");
    }
}

#[test]
fn required_fields_and_email_messages() {
    assert_eq!(validate_required(FieldKind::Text, "  "), Err(FieldError::Required));
    assert_eq!(validate_required(FieldKind::Text, "Ada"), Ok(()));
    assert_eq!(
        validate_required(FieldKind::Email, "ada@"),
        Err(FieldError::InvalidEmail)
    );
    assert_eq!(validate_required(FieldKind::Email, "ada@lovelace.dev"), Ok(()));
    assert_eq!(FieldKind::from_type_attr(Some("EMAIL")), FieldKind::Email);
    assert_eq!(FieldKind::from_type_attr(None), FieldKind::Text);
    assert_eq!(FieldError::Required.message(), "This field is required");
}

#[test]
fn accordion_keeps_at_most_one_open() {
    let mut faq = Accordion::default();
    assert_eq!(faq.toggle(2), Some(2));
    assert_eq!(faq.toggle(0), Some(0));
    assert_eq!(faq.toggle(0), None);
    assert_eq!(faq.open(), None);

    let mut preset = Accordion::new(Some(1));
    assert_eq!(preset.toggle(1), None);
}

#[test]
fn carousel_wraps_both_ways() {
    assert!(Carousel::new(0).is_none());
    let mut c = Carousel::new(3).unwrap();
    assert_eq!(c.prev(), 2);
    assert_eq!(c.next(), 0);
    assert_eq!(c.next(), 1);
    assert_eq!(c.go_to(9), 2);
    assert_eq!(c.offset_px(300.0, 32.0), -664.0);
}

#[test]
fn swipes_need_more_than_fifty_pixels() {
    assert_eq!(swipe(200.0, 150.0), None);
    assert_eq!(swipe(200.0, 149.0), Some(Swipe::Next));
    assert_eq!(swipe(100.0, 151.0), Some(Swipe::Prev));
    let mut c = Carousel::new(4).unwrap();
    assert_eq!(c.apply(Swipe::Prev), 3);
}

#[test]
fn carousel_gap_parsing() {
    assert_eq!(carousel_gap(Some("24px")), 24.0);
    assert_eq!(carousel_gap(Some("normal")), 32.0);
    assert_eq!(carousel_gap(None), 32.0);
}
