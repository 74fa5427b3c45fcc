//! Scroll-driven navigation highlighting.
//!
//! The tracker owns only the active section; section geometry is read from
//! the live layout on every update and never cached.

use crate::constants::HEADER_OFFSET_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Projects,
    About,
    Contact,
}

impl Section {
    /// Declaration order; earlier sections win when layouts overlap.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::About,
        Section::Contact,
    ];

    /// Element id of the section in the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Vertical extent of a rendered section in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionLayout {
    pub top: f64,
    pub height: f64,
}

impl SectionLayout {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section, in declaration order, whose extent contains `probe`.
/// Sections without a layout are skipped.
pub fn section_at<F>(probe: f64, mut layout_of: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionLayout>,
{
    Section::ALL
        .into_iter()
        .find(|&s| layout_of(s).is_some_and(|l| l.contains(probe)))
}

#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    active: Section,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Recompute the active section for the given scroll offset.
    ///
    /// Returns `true` when the active section changed. When no section
    /// contains the probe the previous value is kept.
    pub fn update<F>(&mut self, scroll_y: f64, layout_of: F) -> bool
    where
        F: FnMut(Section) -> Option<SectionLayout>,
    {
        let probe = scroll_y + HEADER_OFFSET_PX;
        match section_at(probe, layout_of) {
            Some(s) if s != self.active => {
                log::trace!("[nav] {} -> {}", self.active.id(), s.id());
                self.active = s;
                true
            }
            _ => false,
        }
    }
}
