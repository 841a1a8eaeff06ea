//! The fixed subject-category set for the video catalog.

/// Subject categories known to the client.
///
/// The chip bar always shows the full set regardless of what the
/// loaded videos reference. If the server introduces a category this
/// build doesn't know, display falls back to the raw id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectCategory {
    History,
    Geography,
    Biology,
    Mathematics,
    Physics,
    Chemistry,
    English,
    ComputerScience,
}

impl SubjectCategory {
    /// All categories, ordered by raw id — the chip bar order.
    pub const ALL: &[SubjectCategory] = &[
        Self::History,
        Self::Geography,
        Self::Biology,
        Self::Mathematics,
        Self::Physics,
        Self::Chemistry,
        Self::English,
        Self::ComputerScience,
    ];

    /// Raw category id used by the API.
    pub fn id(self) -> &'static str {
        match self {
            Self::History => "67add41bbda4fc7efa507528",
            Self::Geography => "67add41bbda4fc7efa50752a",
            Self::Biology => "67add41bbda4fc7efa50752c",
            Self::Mathematics => "67add41bbda4fc7efa50752e",
            Self::Physics => "67add41bbda4fc7efa507530",
            Self::Chemistry => "67add41bbda4fc7efa507532",
            Self::English => "67add41bbda4fc7efa507534",
            Self::ComputerScience => "67add41bbda4fc7efa507536",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::History => "Histori",
            Self::Geography => "Geografi",
            Self::Biology => "Biologji",
            Self::Mathematics => "Matematikë",
            Self::Physics => "Fizikë",
            Self::Chemistry => "Kimi",
            Self::English => "Anglisht",
            Self::ComputerScience => "Informatikë",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }

    /// Display name for a raw id, falling back to the id itself for an
    /// unknown category.
    pub fn display_name(id: &str) -> &str {
        match Self::from_id(id) {
            Some(category) => category.name(),
            None => id,
        }
    }
}

impl std::fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_eight_categories_ordered_by_id() {
        assert_eq!(SubjectCategory::ALL.len(), 8);
        let ids: Vec<&str> = SubjectCategory::ALL.iter().map(|c| c.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_from_id_roundtrip() {
        for &category in SubjectCategory::ALL {
            assert_eq!(SubjectCategory::from_id(category.id()), Some(category));
        }
        assert_eq!(SubjectCategory::from_id("000000000000000000000000"), None);
    }

    #[test]
    fn test_unknown_id_displays_raw() {
        assert_eq!(
            SubjectCategory::display_name("67add41bbda4fc7efa50752e"),
            "Matematikë"
        );
        // A 9th category the client doesn't know falls back to the id.
        assert_eq!(
            SubjectCategory::display_name("ffffffffffffffffffffffff"),
            "ffffffffffffffffffffffff"
        );
    }
}
