use std::collections::HashMap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealList {
    Section,
    Experience,
    Skills,
    Projects,
    Awards,
    Certifications,
    Education,
}

impl RevealList {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Awards => "awards",
            Self::Certifications => "certifications",
            Self::Education => "education",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "section" => Some(Self::Section),
            "experience" => Some(Self::Experience),
            "skills" => Some(Self::Skills),
            "projects" => Some(Self::Projects),
            "awards" => Some(Self::Awards),
            "certifications" => Some(Self::Certifications),
            "education" => Some(Self::Education),
            _ => None,
        }
    }

    pub fn stagger_unit(self) -> Duration {
        let millis = match self {
            Self::Section => 0,
            Self::Skills => 50,
            Self::Experience | Self::Certifications => 100,
            Self::Projects | Self::Awards | Self::Education => 150,
        };
        Duration::from_millis(millis)
    }

    pub fn threshold(self) -> f64 {
        match self {
            Self::Section | Self::Experience | Self::Skills | Self::Projects => 0.1,
            Self::Awards | Self::Certifications | Self::Education => 0.2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealKey {
    pub list: RevealList,
    pub index: usize,
}

impl RevealKey {
    pub fn new(list: RevealList, index: usize) -> Self {
        Self { list, index }
    }

    /// Key for a list that fades in as one block, with no stagger.
    pub fn whole(list: RevealList) -> Self {
        Self::new(list, 0)
    }

    pub fn dom_key(self) -> String {
        format!("{}:{}", self.list.as_str(), self.index)
    }

    pub fn parse(value: &str) -> Option<Self> {
        let (list, index) = value.split_once(':')?;
        Some(Self {
            list: RevealList::from_str(list)?,
            index: index.parse().ok()?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealableItem {
    pub index: usize,
    pub stagger_unit: Duration,
    revealed: bool,
    pending: bool,
}

impl RevealableItem {
    fn new(key: RevealKey) -> Self {
        Self {
            index: key.index,
            stagger_unit: key.list.stagger_unit(),
            revealed: false,
            pending: false,
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal_delay(&self) -> Duration {
        let steps = u32::try_from(self.index).unwrap_or(u32::MAX);
        self.stagger_unit.saturating_mul(steps)
    }
}

#[derive(Debug, Default)]
pub struct VisibilityTracker {
    items: HashMap<RevealKey, RevealableItem>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, key: RevealKey) -> bool {
        if self.items.contains_key(&key) {
            return false;
        }

        self.items.insert(key, RevealableItem::new(key));
        true
    }

    pub fn detach(&mut self, key: RevealKey) -> Option<RevealableItem> {
        self.items.remove(&key)
    }

    pub fn on_intersect(&mut self, key: RevealKey, is_intersecting: bool) -> Option<Duration> {
        if !is_intersecting {
            return None;
        }

        let item = self.items.get_mut(&key)?;
        if item.revealed || item.pending {
            return None;
        }

        item.pending = true;
        Some(item.reveal_delay())
    }

    pub fn complete(&mut self, key: RevealKey) -> bool {
        let Some(item) = self.items.get_mut(&key) else {
            return false;
        };

        item.pending = false;
        if item.revealed {
            return false;
        }

        item.revealed = true;
        true
    }

    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.items.get(&key).is_some_and(RevealableItem::revealed)
    }

    pub fn item(&self, key: RevealKey) -> Option<&RevealableItem> {
        self.items.get(&key)
    }

    pub fn attached_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_with_index_and_stagger_unit() {
        let mut tracker = VisibilityTracker::new();

        for index in 0..5 {
            let key = RevealKey::new(RevealList::Projects, index);
            tracker.attach(key);
            let delay = tracker.on_intersect(key, true).expect("first intersection schedules");
            assert_eq!(delay, Duration::from_millis(150 * index as u64));
        }

        let skill = RevealKey::new(RevealList::Skills, 3);
        tracker.attach(skill);
        assert_eq!(tracker.on_intersect(skill, true), Some(Duration::from_millis(150)));
    }

    #[test]
    fn first_item_and_sections_reveal_immediately() {
        let mut tracker = VisibilityTracker::new();
        let first_award = RevealKey::new(RevealList::Awards, 0);
        let third_section = RevealKey::new(RevealList::Section, 2);
        tracker.attach(first_award);
        tracker.attach(third_section);

        assert_eq!(tracker.on_intersect(first_award, true), Some(Duration::ZERO));
        assert_eq!(tracker.on_intersect(third_section, true), Some(Duration::ZERO));
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut tracker = VisibilityTracker::new();
        let key = RevealKey::new(RevealList::Experience, 1);
        tracker.attach(key);

        assert!(tracker.on_intersect(key, true).is_some());
        assert!(!tracker.is_revealed(key));
        assert!(tracker.complete(key));
        assert!(tracker.is_revealed(key));

        assert_eq!(tracker.on_intersect(key, false), None);
        assert_eq!(tracker.on_intersect(key, true), None);
        assert!(!tracker.complete(key));
        assert!(tracker.is_revealed(key));
    }

    #[test]
    fn repeated_intersection_while_pending_schedules_once() {
        let mut tracker = VisibilityTracker::new();
        let key = RevealKey::new(RevealList::Education, 2);
        tracker.attach(key);

        assert_eq!(tracker.on_intersect(key, true), Some(Duration::from_millis(300)));
        assert_eq!(tracker.on_intersect(key, false), None);
        assert_eq!(tracker.on_intersect(key, true), None);
    }

    #[test]
    fn never_intersecting_item_stays_hidden() {
        let mut tracker = VisibilityTracker::new();
        let key = RevealKey::new(RevealList::Certifications, 0);
        tracker.attach(key);

        assert_eq!(tracker.on_intersect(key, false), None);
        assert!(!tracker.is_revealed(key));
    }

    #[test]
    fn detached_item_ignores_late_completion() {
        let mut tracker = VisibilityTracker::new();
        let key = RevealKey::new(RevealList::Skills, 4);
        tracker.attach(key);
        tracker.on_intersect(key, true);

        let detached = tracker.detach(key).expect("item was attached");
        assert!(!detached.revealed());
        assert_eq!(tracker.attached_count(), 0);

        assert!(!tracker.complete(key));
        assert!(!tracker.is_revealed(key));
        assert_eq!(tracker.on_intersect(key, true), None);
    }

    #[test]
    fn reattach_after_detach_starts_fresh() {
        let mut tracker = VisibilityTracker::new();
        let key = RevealKey::new(RevealList::Projects, 1);
        tracker.attach(key);
        tracker.on_intersect(key, true);
        tracker.complete(key);

        assert!(!tracker.attach(key));
        assert!(tracker.is_revealed(key));

        tracker.detach(key);
        assert!(tracker.attach(key));
        assert!(!tracker.is_revealed(key));
    }

    #[test]
    fn dom_key_parses_back() {
        let key = RevealKey::new(RevealList::Certifications, 12);

        assert_eq!(key.dom_key(), "certifications:12");
        assert_eq!(RevealKey::parse(&key.dom_key()), Some(key));
        assert_eq!(RevealKey::parse("unknown:1"), None);
        assert_eq!(RevealKey::parse("skills:x"), None);
        assert_eq!(RevealKey::parse("skills"), None);
    }

    #[test]
    fn card_lists_use_higher_threshold() {
        assert_eq!(RevealList::Section.threshold(), 0.1);
        assert_eq!(RevealList::Awards.threshold(), 0.2);
        assert_eq!(RevealList::Education.threshold(), 0.2);
    }

    #[test]
    fn whole_list_reveals_without_stagger() {
        let mut tracker = VisibilityTracker::new();
        let carousel = RevealKey::whole(RevealList::Projects);
        tracker.attach(carousel);

        assert_eq!(tracker.on_intersect(carousel, true), Some(Duration::ZERO));
        assert!(tracker.complete(carousel));
        assert!(tracker.is_revealed(carousel));

        let third_slide = RevealKey::new(RevealList::Projects, 2);
        assert_eq!(tracker.item(third_slide), None);
    }
}
