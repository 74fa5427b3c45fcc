// Integration tests for scroll-driven section tracking.

use folio_core::{section_at, Section, SectionLayout, SectionTracker};

/// Four stacked sections, 800px each, starting at the top of the page.
fn stacked(section: Section) -> Option<SectionLayout> {
    let idx = Section::ALL.iter().position(|s| *s == section)? as f64;
    Some(SectionLayout::new(idx * 800.0, 800.0))
}

#[test]
fn top_of_page_is_home() {
    let mut tracker = SectionTracker::new();
    tracker.update(0.0, stacked);
    assert_eq!(tracker.active(), Section::Home);
}

#[test]
fn header_offset_moves_the_probe() {
    // 750 + 100 = 850 falls inside projects [800, 1600)
    let mut tracker = SectionTracker::new();
    assert!(tracker.update(750.0, stacked));
    assert_eq!(tracker.active(), Section::Projects);
    // 699 + 100 = 799 is still home
    assert!(tracker.update(699.0, stacked));
    assert_eq!(tracker.active(), Section::Home);
    // 700 + 100 = 800 is the first projects pixel
    tracker.update(700.0, stacked);
    assert_eq!(tracker.active(), Section::Projects);
}

#[test]
fn every_offset_selects_first_containing_section() {
    // Property: the chosen section is always the first declared one whose
    // interval contains offset + 100.
    let mut tracker = SectionTracker::new();
    for offset in (0..3200).step_by(37) {
        let offset = offset as f64;
        tracker.update(offset, stacked);
        let probe = offset + 100.0;
        let expected = Section::ALL
            .into_iter()
            .find(|s| stacked(*s).unwrap().contains(probe));
        if let Some(expected) = expected {
            assert_eq!(tracker.active(), expected, "offset {offset}");
        }
    }
}

#[test]
fn no_match_keeps_previous_section() {
    let mut tracker = SectionTracker::new();
    tracker.update(1700.0, stacked);
    assert_eq!(tracker.active(), Section::About);
    // Past the end of contact: nothing matches
    assert!(!tracker.update(10_000.0, stacked));
    assert_eq!(tracker.active(), Section::About);
    // Same for a layout with no sections mounted yet
    assert!(!tracker.update(0.0, |_| None));
    assert_eq!(tracker.active(), Section::About);
}

#[test]
fn missing_sections_are_skipped() {
    let without_projects = |s: Section| match s {
        Section::Projects => None,
        other => stacked(other),
    };
    let mut tracker = SectionTracker::new();
    tracker.update(1700.0, without_projects);
    assert_eq!(tracker.active(), Section::About);
    // The probe sits in the missing section's range: no change
    assert!(!tracker.update(900.0, without_projects));
    assert_eq!(tracker.active(), Section::About);
}

#[test]
fn overlapping_layouts_prefer_declaration_order() {
    let overlapping = |s: Section| match s {
        Section::Home => Some(SectionLayout::new(0.0, 1000.0)),
        Section::Projects => Some(SectionLayout::new(500.0, 1000.0)),
        _ => None,
    };
    assert_eq!(section_at(700.0, overlapping), Some(Section::Home));
    assert_eq!(section_at(1200.0, overlapping), Some(Section::Projects));
}

#[test]
fn unchanged_section_reports_no_change() {
    let mut tracker = SectionTracker::new();
    assert!(!tracker.update(0.0, stacked));
    assert!(!tracker.update(200.0, stacked));
    assert_eq!(tracker.active(), Section::Home);
}
