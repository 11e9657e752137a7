// Host-side tests for theme, tilt, scroll math, count-up and loop control.

use folio_core::scroll::{self, Section};
use folio_core::tilt::{self, Tilt};
use folio_core::{LoopControl, Theme};
use glam::DVec2;

#[test]
fn theme_reads_only_explicit_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_toggle_round_trips_with_matching_chrome() {
    let dark = Theme::Light.toggled();
    assert!(dark.is_dark());
    assert_eq!(dark.storage_value(), "dark");
    assert_eq!(dark.icon_class(), "fa-sun");
    assert_eq!(dark.toggle_label(), "Light Mode");

    let light = dark.toggled();
    assert_eq!(light, Theme::Light);
    assert_eq!(light.storage_value(), "light");
    assert_eq!(light.icon_class(), "fa-moon");
    assert_eq!(light.toggle_label(), "Dark Mode");
    assert_eq!(Theme::from_stored(Some(light.storage_value())), light);
}

#[test]
fn tilt_is_flat_at_center_and_maxed_at_corners() {
    let size = DVec2::new(300.0, 200.0);
    assert_eq!(Tilt::from_pointer(DVec2::new(150.0, 100.0), size), Tilt::default());

    let bottom_right = Tilt::from_pointer(size, size);
    assert_eq!(bottom_right.rotate_x, -5.0);
    assert_eq!(bottom_right.rotate_y, 5.0);

    let top_left = Tilt::from_pointer(DVec2::ZERO, size);
    assert_eq!(top_left.rotate_x, 5.0);
    assert_eq!(top_left.rotate_y, -5.0);
}

#[test]
fn tilt_handles_empty_cards() {
    let t = Tilt::from_pointer(DVec2::new(4.0, 4.0), DVec2::ZERO);
    assert_eq!(t, Tilt::default());
}

#[test]
fn tilt_css_strings() {
    let t = Tilt {
        rotate_x: -5.0,
        rotate_y: 2.5,
    };
    assert_eq!(t.to_css(), "perspective(1000px) rotateX(-5deg) rotateY(2.5deg)");
    assert_eq!(
        tilt::resting_transform(),
        "perspective(1000px) rotateX(0) rotateY(0)"
    );
}

#[test]
fn tilt_is_desktop_only() {
    assert!(!tilt::tilt_enabled(375.0));
    assert!(!tilt::tilt_enabled(768.0));
    assert!(tilt::tilt_enabled(1024.0));
}

#[test]
fn progress_percent_basic_and_degenerate() {
    assert_eq!(scroll::progress_percent(0.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll::progress_percent(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(scroll::progress_percent(1000.0, 2000.0, 1000.0), 100.0);
    assert_eq!(scroll::progress_percent(120.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll::progress_percent(0.0, 500.0, 800.0), 0.0);
}

fn sections() -> Vec<Section> {
    vec![
        Section::new("home", 0.0),
        Section::new("services", 900.0),
        Section::new("work", 1800.0),
        Section::new("contact", 2600.0),
    ]
}

#[test]
fn current_section_leads_by_250px() {
    let s = sections();
    assert_eq!(scroll::current_section(&s, 0.0), Some("home"));
    assert_eq!(scroll::current_section(&s, 649.0), Some("home"));
    assert_eq!(scroll::current_section(&s, 650.0), Some("services"));
    assert_eq!(scroll::current_section(&s, 1600.0), Some("work"));
    assert_eq!(scroll::current_section(&s, 10_000.0), Some("contact"));
}

#[test]
fn current_section_none_above_first() {
    let s = vec![Section::new("about", 1000.0)];
    assert_eq!(scroll::current_section(&s, 0.0), None);
    assert_eq!(scroll::current_section(&[], 500.0), None);
}

#[test]
fn nav_links_match_by_href() {
    assert!(scroll::link_is_active("#work", Some("work")));
    assert!(!scroll::link_is_active("#home", Some("work")));
    assert!(!scroll::link_is_active("#home", None));
    assert!(!scroll::link_is_active("#home", Some("")));
}

#[test]
fn count_up_steps_by_ceiling_of_a_two_hundredth() {
    assert_eq!(scroll::next_count(0.0, 250.0), 2.0); // ceil(1.25)
    assert_eq!(scroll::next_count(2.0, 250.0), 4.0); // ceil(3.25)
    assert_eq!(scroll::next_count(0.0, 50.0), 1.0); // ceil(0.25)
}

#[test]
fn count_up_snaps_to_target() {
    assert_eq!(scroll::next_count(250.0, 250.0), 250.0);
    assert_eq!(scroll::next_count(251.0, 250.0), 250.0);
    assert!(scroll::count_done(250.0, 250.0));
    assert!(scroll::count_done(300.0, 250.0));
    assert!(!scroll::count_done(249.0, 250.0));
    assert!(scroll::count_done(f64::NAN, 250.0));
}

#[test]
fn count_up_terminates_on_the_target() {
    for target in [1.0, 7.0, 99.0, 250.0, 1234.0] {
        let mut c = 0.0;
        let mut ticks = 0;
        while !scroll::count_done(c, target) {
            c = scroll::next_count(c, target);
            ticks += 1;
            assert!(ticks <= 201, "target {target} did not finish");
        }
        assert!(c >= target);
        assert_eq!(scroll::next_count(c, target), target);
    }
}

#[test]
fn count_up_with_no_positive_target_writes_it_at_once() {
    assert_eq!(scroll::next_count(0.0, 0.0), 0.0);
    assert_eq!(scroll::next_count(0.0, -5.0), -5.0);
    assert!(scroll::count_done(0.0, 0.0));
}

#[test]
fn loop_runs_only_when_started_and_visible() {
    let mut c = LoopControl::default();
    assert!(!c.is_active());
    assert!(c.is_visible());

    assert!(c.start());
    assert!(c.is_active());
    assert!(!c.start(), "starting twice is not a transition");

    assert!(c.set_visible(false));
    assert!(!c.is_active());
    assert!(c.is_running());

    assert!(!c.stop(), "already inactive while hidden");
    assert!(!c.set_visible(true), "still stopped");
    assert!(c.start());
    assert!(c.is_active());

    assert!(c.stop());
    assert!(!c.is_active());
}
