//! Day classification from free-text Toggl tags.
//!
//! Tags are matched as case-insensitive substrings. Leave and remote are two
//! independent axes: a leave day still reports remote when tagged so.
//! The matching policy sits behind [`TagClassifier`] so the layout engine
//! never inspects tag text itself.

/// Whether a row counts towards worked time or leave time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Worked,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: DayKind,
    pub remote: bool,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            kind: DayKind::Worked,
            remote: false,
        }
    }
}

pub trait TagClassifier {
    fn is_leave(&self, tags: &str) -> bool;

    fn is_remote(&self, tags: &str) -> bool;

    /// Leave is decided first, remote independently of it. Absent or blank
    /// tags classify as a worked, on-site day.
    fn classify(&self, tags: Option<&str>) -> Classification {
        match tags.map(str::trim).filter(|tags| !tags.is_empty()) {
            Some(tags) => Classification {
                kind: if self.is_leave(tags) { DayKind::Leave } else { DayKind::Worked },
                remote: self.is_remote(tags),
            },
            None => Classification::default(),
        }
    }
}

/// Substring matcher over lower-cased tag text.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    leave: Vec<String>,
    remote: Vec<String>,
}

impl KeywordClassifier {
    pub fn new<L, R>(leave: L, remote: R) -> Self
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        Self {
            leave: leave.into_iter().map(|token| token.as_ref().to_lowercase()).collect(),
            remote: remote.into_iter().map(|token| token.as_ref().to_lowercase()).collect(),
        }
    }

    fn contains_any(tokens: &[String], tags: &str) -> bool {
        let tags = tags.to_lowercase();
        tokens.iter().any(|token| tags.contains(token.as_str()))
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        // "remot" catches remoto, remote, remotely...
        Self::new(["ferie", "permesso"], ["remot"])
    }
}

impl TagClassifier for KeywordClassifier {
    fn is_leave(&self, tags: &str) -> bool {
        Self::contains_any(&self.leave, tags)
    }

    fn is_remote(&self, tags: &str) -> bool {
        Self::contains_any(&self.remote, tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_tokens_are_case_insensitive() {
        let classifier = KeywordClassifier::default();
        assert!(classifier.is_leave("Ferie"));
        assert!(classifier.is_leave("mezza giornata, PERMESSO"));
        assert!(!classifier.is_leave("sviluppo"));
    }

    #[test]
    fn remote_matches_any_variant() {
        let classifier = KeywordClassifier::default();
        assert!(classifier.is_remote("remoto"));
        assert!(classifier.is_remote("Remote"));
        assert!(classifier.is_remote("lavoro REMOTO, cliente"));
        assert!(!classifier.is_remote("in sede"));
    }

    #[test]
    fn leave_and_remote_are_independent() {
        let classifier = KeywordClassifier::default();
        let classification = classifier.classify(Some("ferie, remoto"));
        assert_eq!(classification.kind, DayKind::Leave);
        assert!(classification.remote);
    }

    #[test]
    fn missing_tags_mean_worked_on_site() {
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify(None), Classification::default());
        assert_eq!(classifier.classify(Some("   ")), Classification::default());
    }

    #[test]
    fn custom_tokens_replace_defaults() {
        let classifier = KeywordClassifier::new(["vacation"], ["home"]);
        let classification = classifier.classify(Some("Vacation at home"));
        assert_eq!(classification.kind, DayKind::Leave);
        assert!(classification.remote);
        assert!(!classifier.is_leave("ferie"));
    }
}
