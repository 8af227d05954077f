//! Chart series behind the analytics panel, and the case lists a clicked
//! segment drills down into.

use serde::Serialize;

use crate::types::ChartCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: &'static str,
    pub value: u32,
}

const fn point(name: &'static str, value: u32) -> ChartPoint {
    ChartPoint { name, value }
}

/// Program distribution pie. Its length is the known program count the
/// metrics scale against.
pub const PROGRAM_DISTRIBUTION: [ChartPoint; 8] = [
    point("Non-Program", 350),
    point("HRD", 463),
    point("WRLMP", 280),
    point("IG", 190),
    point("100 Case", 420),
    point("MFL", 150),
    point("Bank Alfalah", 200),
    point("Other", 380),
];

pub const CASE_REFERRED: [ChartPoint; 6] = [
    point("Walk-In", 850),
    point("Govt. Institutions", 420),
    point("CSOs", 380),
    point("Paralegal", 310),
    point("SLACC", 190),
    point("Other", 280),
];

pub const GENDER: [ChartPoint; 3] = [
    point("Female", 1650),
    point("Male", 1280),
    point("Transgender", 47),
];

pub const RELIGION: [ChartPoint; 4] = [
    point("Muslim", 2100),
    point("Christian", 520),
    point("Hindu", 280),
    point("Other", 77),
];

pub const NATURE_OF_CASE: [ChartPoint; 4] = [
    point("Family", 1200),
    point("Criminal", 890),
    point("Civil", 620),
    point("Constitutional", 267),
];

/// District bar chart. Its length is the known district count.
pub const DISTRICT_DISTRIBUTION: [ChartPoint; 8] = [
    point("Hyderabad", 400),
    point("Karachi Central", 350),
    point("Karachi East", 320),
    point("Karachi South", 290),
    point("Karachi West", 260),
    point("Larkana", 380),
    point("Sukkur", 180),
    point("Malir", 150),
];

pub const COURT_LEVEL: [ChartPoint; 6] = [
    point("Family Court", 980),
    point("Sessions", 650),
    point("High Court", 420),
    point("Magistrate", 380),
    point("Civil Judge", 320),
    point("Supreme Court", 120),
];

/// Cases filed per month.
pub const MONTHLY_TREND: [ChartPoint; 12] = [
    point("Jan", 45),
    point("Feb", 52),
    point("Mar", 48),
    point("Apr", 61),
    point("May", 55),
    point("Jun", 67),
    point("Jul", 78),
    point("Aug", 84),
    point("Sep", 91),
    point("Oct", 88),
    point("Nov", 102),
    point("Dec", 115),
];

/// Every series the analytics panel can render, keyed by chart title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Program,
    CaseReferred,
    Gender,
    Religion,
    NatureOfCase,
    District,
    CourtLevel,
    MonthlyTrend,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Program => "Program Name",
            Self::CaseReferred => "Case Referred",
            Self::Gender => "Gender",
            Self::Religion => "Religion",
            Self::NatureOfCase => "Nature of Case",
            Self::District => "District-wise Cases",
            Self::CourtLevel => "Court Level",
            Self::MonthlyTrend => "Monthly Case Trend",
        }
    }

    pub fn series(&self) -> &'static [ChartPoint] {
        match self {
            Self::Program => &PROGRAM_DISTRIBUTION,
            Self::CaseReferred => &CASE_REFERRED,
            Self::Gender => &GENDER,
            Self::Religion => &RELIGION,
            Self::NatureOfCase => &NATURE_OF_CASE,
            Self::District => &DISTRICT_DISTRIBUTION,
            Self::CourtLevel => &COURT_LEVEL,
            Self::MonthlyTrend => &MONTHLY_TREND,
        }
    }

    pub fn total(&self) -> u32 {
        self.series().iter().map(|p| p.value).sum()
    }
}

const DRILL_DOWN_CLIENTS: [&str; 12] = [
    "Rashida Bibi",
    "Ahmed Hassan",
    "Fatima Zahra",
    "Muhammad Akram",
    "Saima Akhtar",
    "Ali Raza",
    "Zainab Khan",
    "Imran Shah",
    "Nadia Malik",
    "Usman Ahmed",
    "Ayesha Siddiqui",
    "Hassan Ali",
];
const DRILL_DOWN_LAWYERS: [&str; 4] = ["Nafees Khattak", "Amanullah", "Abida Bibi", "Habib ur Rahman"];
const DRILL_DOWN_COURTS: [&str; 4] = ["Family Court", "Sessions Court", "High Court", "District Court"];
const DRILL_DOWN_STATUSES: [&str; 4] = ["Pending", "In Progress", "Disposed", "Adjourned"];

/// Cases behind a clicked chart segment.
///
/// Case numbers take the first three characters of the segment name,
/// uppercased: "Walk-In" → `2024-WAL-1000`.
pub fn drill_down_cases(filter_value: &str) -> Vec<ChartCase> {
    let prefix: String = filter_value.chars().take(3).collect::<String>().to_uppercase();

    DRILL_DOWN_CLIENTS
        .iter()
        .enumerate()
        .map(|(idx, name)| ChartCase {
            id: idx as u32 + 1,
            case_number: format!("2024-{}-{}", prefix, 1000 + idx),
            client_name: name.to_string(),
            case_type: filter_value.to_string(),
            status: DRILL_DOWN_STATUSES[idx % DRILL_DOWN_STATUSES.len()].to_string(),
            date: format!("2026-01-{:02}", idx + 1),
            lawyer: DRILL_DOWN_LAWYERS[idx % DRILL_DOWN_LAWYERS.len()].to_string(),
            court: DRILL_DOWN_COURTS[idx % DRILL_DOWN_COURTS.len()].to_string(),
        })
        .collect()
}
