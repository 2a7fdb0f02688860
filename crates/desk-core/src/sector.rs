use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// Sentinel sector for mentors without a preference.
pub const AGNOSTIC_SECTOR: &str = "Agnostic";
/// Sector that every non-agnostic mentor accepts.
pub const OTHER_SECTOR: &str = "Other";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
/// Industry sector label. Comparison trims whitespace and ignores ASCII case.
pub struct Sector(String);

impl Sector {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.len() == raw.len() {
            Self(raw)
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_agnostic(&self) -> bool {
        self.0.eq_ignore_ascii_case(AGNOSTIC_SECTOR)
    }

    pub fn is_other(&self) -> bool {
        self.0.eq_ignore_ascii_case(OTHER_SECTOR)
    }
}

impl PartialEq for Sector {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Sector {}

impl Hash for Sector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "sectors", rename_all = "snake_case")]
/// Mentor sector preference: either no filter, or up to three sectors plus `Other`.
pub enum SectorPreference {
    Agnostic,
    Preferred(Vec<Sector>),
}

impl SectorPreference {
    pub const MAX_SECTORS: usize = 3;

    /// Builds a preference from raw spreadsheet cells in column order.
    ///
    /// Blank cells are ignored. A row with no sectors, or with `Agnostic` in any
    /// cell, is agnostic. Duplicates collapse and only the first
    /// [`Self::MAX_SECTORS`] sectors are kept.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sectors: Vec<Sector> = Vec::new();
        for cell in cells {
            let sector = Sector::new(cell.as_ref());
            if sector.is_blank() {
                continue;
            }
            if sector.is_agnostic() {
                return Self::Agnostic;
            }
            if sectors.len() < Self::MAX_SECTORS && !sectors.contains(&sector) {
                sectors.push(sector);
            }
        }

        if sectors.is_empty() {
            Self::Agnostic
        } else {
            Self::Preferred(sectors)
        }
    }

    pub fn is_agnostic(&self) -> bool {
        matches!(self, Self::Agnostic)
    }

    pub fn sectors(&self) -> &[Sector] {
        match self {
            Self::Agnostic => &[],
            Self::Preferred(sectors) => sectors,
        }
    }

    /// Returns true when a startup in `sector` passes this preference filter.
    pub fn admits(&self, sector: &Sector) -> bool {
        match self {
            Self::Agnostic => true,
            Self::Preferred(sectors) => sector.is_other() || sectors.contains(sector),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Agnostic => AGNOSTIC_SECTOR.to_string(),
            Self::Preferred(sectors) => sectors
                .iter()
                .map(Sector::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{Sector, SectorPreference};

    #[test]
    fn unit_sector_comparison_ignores_case_and_padding() {
        assert_eq!(Sector::new("  FinTech "), Sector::new("fintech"));
        assert_eq!(Sector::new(" FinTech ").as_str(), "FinTech");
        assert!(Sector::new("other").is_other());
        assert!(Sector::new("AGNOSTIC").is_agnostic());
    }

    #[test]
    fn unit_from_cells_blank_row_is_agnostic() {
        assert_eq!(
            SectorPreference::from_cells(["", "  ", ""]),
            SectorPreference::Agnostic
        );
    }

    #[test]
    fn functional_from_cells_drops_blanks_without_turning_agnostic() {
        let preference = SectorPreference::from_cells(["FinTech", "", "EdTech"]);
        assert_eq!(
            preference,
            SectorPreference::Preferred(vec![Sector::new("FinTech"), Sector::new("EdTech")])
        );
        assert_eq!(preference.label(), "FinTech, EdTech");
    }

    #[test]
    fn functional_from_cells_agnostic_cell_overrides_other_sectors() {
        let preference = SectorPreference::from_cells(["FinTech", "Agnostic", "EdTech"]);
        assert!(preference.is_agnostic());
        assert_eq!(preference.label(), "Agnostic");
    }

    #[test]
    fn regression_from_cells_caps_sectors_and_collapses_duplicates() {
        let preference =
            SectorPreference::from_cells(["FinTech", "fintech", "EdTech", "AgriTech", "BioTech"]);
        assert_eq!(
            preference.sectors(),
            &[
                Sector::new("FinTech"),
                Sector::new("EdTech"),
                Sector::new("AgriTech")
            ]
        );
    }

    #[test]
    fn functional_admits_other_for_preferred_mentors() {
        let preference = SectorPreference::from_cells(["FinTech"]);
        assert!(preference.admits(&Sector::new("FinTech")));
        assert!(preference.admits(&Sector::new("Other")));
        assert!(!preference.admits(&Sector::new("HealthTech")));
    }

    #[test]
    fn unit_preference_serializes_with_mode_tag() {
        let json = serde_json::to_value(SectorPreference::from_cells(["FinTech"]))
            .expect("serialize preference");
        assert_eq!(json["mode"], "preferred");
        assert_eq!(json["sectors"][0], "FinTech");
    }

    proptest! {
        #[test]
        fn property_agnostic_admits_every_sector(raw in "[A-Za-z ]{0,16}") {
            prop_assert!(SectorPreference::Agnostic.admits(&Sector::new(raw)));
        }

        #[test]
        fn property_preferred_admits_only_listed_or_other(
            listed in "[A-Z][a-z]{2,8}",
            candidate in "[A-Z][a-z]{2,8}",
        ) {
            prop_assume!(!listed.eq_ignore_ascii_case("agnostic"));
            let preference = SectorPreference::from_cells([listed.as_str()]);
            let sector = Sector::new(candidate.clone());
            let expected = candidate.eq_ignore_ascii_case(&listed) || sector.is_other();
            prop_assert_eq!(preference.admits(&sector), expected);
        }
    }
}
