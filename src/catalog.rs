//! Facet option lists offered by the filter editor.
//!
//! Each facet has an "All …" sentinel. Picking the sentinel clears the facet
//! (no restriction); it is never stored in a selection.

use serde::{Deserialize, Serialize};

/// One filterable dimension of the case list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Program,
    District,
    Lawyer,
    CaseReferred,
    CaseType,
}

impl Facet {
    pub const ALL: [Facet; 5] = [
        Facet::Program,
        Facet::District,
        Facet::Lawyer,
        Facet::CaseReferred,
        Facet::CaseType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::District => "district",
            Self::Lawyer => "lawyer",
            Self::CaseReferred => "caseReferred",
            Self::CaseType => "caseType",
        }
    }

    /// Label of the "no restriction" entry at the top of the dropdown.
    pub fn sentinel(&self) -> &'static str {
        match self {
            Self::Program => "All Programs",
            Self::District => "All Districts",
            Self::Lawyer => "All Lawyers",
            Self::CaseReferred => "All Sources",
            Self::CaseType => "All Types",
        }
    }

    /// Selectable values, sentinel excluded.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Program => PROGRAMS,
            Self::District => DISTRICTS,
            Self::Lawyer => LAWYERS,
            Self::CaseReferred => REFERRAL_SOURCES,
            Self::CaseType => CASE_TYPES,
        }
    }

    pub fn is_sentinel(&self, value: &str) -> bool {
        value == self.sentinel()
    }

    pub fn is_known_option(&self, value: &str) -> bool {
        self.options().contains(&value)
    }
}

pub const PROGRAMS: &[&str] = &[
    "100 Case",
    "100 Case 2.0",
    "Bank Alfalah",
    "HRD",
    "HRCP",
    "IG",
    "IG 2.0",
    "MFL",
    "Non-Program",
    "PPRF",
    "RM",
    "SV/GBV",
    "WRLMP",
];

pub const DISTRICTS: &[&str] = &[
    "Badin",
    "Dadu",
    "Ghotki",
    "Hyderabad",
    "Jamshoro",
    "Karachi Central",
    "Karachi East",
    "Karachi South",
    "Karachi West",
    "Khairpur",
    "Larkana",
    "Malir",
    "Sanghar",
    "Sukkur",
];

pub const LAWYERS: &[&str] = &[
    "ABid Ali Jatoi",
    "Abida Bibi",
    "Afifa Iqbal",
    "Amanullah",
    "Habib ur Rahman",
    "Nafees Khattak",
];

pub const REFERRAL_SOURCES: &[&str] = &[
    "CSOs",
    "Govt. Institutions",
    "HRCP",
    "IG",
    "Paralegal",
    "SLACC",
    "Walk-In",
    "Other",
];

pub const CASE_TYPES: &[&str] = &[
    "Child Custody / G & W",
    "Civil Appeal",
    "Civil Suit",
    "Constitutional Petition",
    "Criminal",
    "Family",
];
