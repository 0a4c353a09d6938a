/// Guard check for the protected route being entered.
///
/// Each navigation starts a fresh check. A page renders only once the check
/// started for that same route has answered, so a session that lapsed
/// between two pages never shows the second one.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryCheck<K> {
    requested: Option<K>,
    verified: Option<K>,
}

impl<K> Default for EntryCheck<K> {
    fn default() -> Self {
        Self {
            requested: None,
            verified: None,
        }
    }
}

impl<K: Clone + PartialEq> EntryCheck<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `route` was entered; whatever was verified before no longer counts.
    pub fn begin(&mut self, route: K) {
        self.requested = Some(route);
        self.verified = None;
    }

    /// The check started for `route` answered. Returns false when the user
    /// had already moved elsewhere and the answer was dropped.
    pub fn finish(&mut self, route: &K) -> bool {
        if self.requested.as_ref() != Some(route) {
            return false;
        }
        self.verified = Some(route.clone());
        true
    }

    pub fn is_verified(&self, route: &K) -> bool {
        self.verified.as_ref() == Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_renders_before_first_check() {
        let mut entry = EntryCheck::new();
        assert!(!entry.is_verified(&"/admin"));

        entry.begin("/admin");
        assert!(!entry.is_verified(&"/admin"));

        assert!(entry.finish(&"/admin"));
        assert!(entry.is_verified(&"/admin"));
    }

    #[test]
    fn test_navigation_requires_a_new_check() {
        let mut entry = EntryCheck::new();
        entry.begin("/admin");
        entry.finish(&"/admin");

        entry.begin("/admin/packages");
        assert!(!entry.is_verified(&"/admin/packages"));
        assert!(!entry.is_verified(&"/admin"));
    }

    #[test]
    fn test_late_answer_for_left_route_is_dropped() {
        let mut entry = EntryCheck::new();
        entry.begin("/admin");
        entry.begin("/admin/teachers");
        entry.finish(&"/admin/teachers");

        assert!(!entry.finish(&"/admin"));
        assert!(entry.is_verified(&"/admin/teachers"));
    }

    #[test]
    fn test_returning_to_a_route_checks_again() {
        let mut entry = EntryCheck::new();
        entry.begin("/admin");
        entry.finish(&"/admin");
        entry.begin("/admin/faqs");
        entry.begin("/admin");

        assert!(!entry.is_verified(&"/admin"));
    }
}
