/// Visual treatment applied to the status and mood lines, keyed by status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum MoodClass {
    Party,
    Sleepy,
    Festive,
    Spooky,
    Love,
    Great,
    Bad,
}

impl MoodClass {
    /// Static status -> style lookup. Unmapped statuses get no extra styling.
    pub fn for_status(status: &str) -> Option<Self> {
        match status {
            "ZOOMIES" | "CELEBRATING" => Some(MoodClass::Party),
            "SLEEPY" => Some(MoodClass::Sleepy),
            "FESTIVE" | "MERRY" => Some(MoodClass::Festive),
            "SPOOKY" => Some(MoodClass::Spooky),
            "FEELING LOVE" => Some(MoodClass::Love),
            "GREAT" => Some(MoodClass::Great),
            "BAD" => Some(MoodClass::Bad),
            _ => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            MoodClass::Party => "mood-party",
            MoodClass::Sleepy => "mood-sleepy",
            MoodClass::Festive => "mood-festive",
            MoodClass::Spooky => "mood-spooky",
            MoodClass::Love => "mood-love",
            MoodClass::Great => "mood-great",
            MoodClass::Bad => "mood-bad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn party_statuses_share_a_class() {
        assert_eq!(MoodClass::for_status("ZOOMIES"), Some(MoodClass::Party));
        assert_eq!(MoodClass::for_status("CELEBRATING"), Some(MoodClass::Party));
        assert_eq!(MoodClass::for_status("SLEEPY").map(|c| c.css_class()), Some("mood-sleepy"));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(MoodClass::for_status("GOOD BOY"), None);
        assert_eq!(MoodClass::for_status("sleepy"), None);
        assert_eq!(MoodClass::for_status(""), None);
    }

    #[test]
    fn classes_are_distinct() {
        let mut seen: Vec<&str> = MoodClass::iter().map(|c| c.css_class()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), MoodClass::iter().count());
    }
}
