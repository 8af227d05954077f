//! In-process record sets standing in for the case-management backend.
//!
//! Read-only. Each call returns fresh owned rows so callers can filter and
//! sort without touching shared state.

use chrono::NaiveDate;

use crate::types::{
    ApprovalRecord, ApprovalStatus, CaseRecord, CaseStatus, HearingRecord, HearingType,
    InterviewRecord, InterviewStatus, Priority,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn case(
    id: u32,
    file_number: &str,
    client_name: &str,
    case_number: &str,
    court_name: &str,
    district: &str,
    interviewer: &str,
    status: ApprovalStatus,
    case_status: CaseStatus,
    last_updated: NaiveDate,
) -> CaseRecord {
    CaseRecord {
        id,
        file_number: file_number.to_string(),
        client_name: client_name.to_string(),
        case_number: case_number.to_string(),
        court_name: court_name.to_string(),
        district: district.to_string(),
        interviewer: interviewer.to_string(),
        status,
        case_status,
        last_updated,
    }
}

/// Most recently opened cases, newest first.
#[rustfmt::skip]
pub fn cases() -> Vec<CaseRecord> {
    use ApprovalStatus::{Approved, Pending};
    use CaseStatus::{Active, Disposed};

    vec![
        case(463, "2024-HRD-2863", "Mehtab", "1234/2024", "Family Court", "Karachi West",
            "Nafees Khattak", Approved, Active, ymd(2024, 12, 28)),
        case(462, "2024-HRD-2862", "Seema", "2999/2024", "XXIII-JM (W)", "Karachi West",
            "Nafees Khattak", Approved, Disposed, ymd(2024, 12, 25)),
        case(461, "2024-HRD-2514", "Shaman Ali", "829-K/2022", "Supreme Court of Pakistan",
            "Karachi South", "Habib ur Rahman", Approved, CaseStatus::Pending, ymd(2024, 11, 15)),
        case(460, "2024-HRD-2510", "Muhammad Faisal", "1234/2024", "High Court", "Hyderabad",
            "Amanullah", Pending, Active, ymd(2024, 10, 20)),
        case(459, "2024-HRD-2505", "Sufiya Begum", "567/2024", "Family Court", "Karachi East",
            "Abida Bibi", Approved, CaseStatus::Pending, ymd(2024, 9, 10)),
        case(458, "2024-HRD-2498", "Ahmed Khan", "890/2024", "Sessions Court", "Larkana",
            "Nafees Khattak", Approved, Active, ymd(2024, 8, 5)),
    ]
}

/// Upcoming hearings in date order.
#[rustfmt::skip]
pub fn hearings() -> Vec<HearingRecord> {
    let rows = [
        (1, "2024-HRD-2863", "Mehtab", "Family Court, Karachi West", ymd(2026, 1, 8), "10:00 AM",
            "Nafees Khattak", HearingType::FirstHearing),
        (2, "2024-HRD-2862", "Seema", "XXIII-JM (W)", ymd(2026, 1, 9), "11:30 AM",
            "Nafees Khattak", HearingType::Adjournment),
        (3, "2024-HRD-2514", "Shaman Ali", "Supreme Court of Pakistan", ymd(2026, 1, 10),
            "09:00 AM", "Habib ur Rahman", HearingType::FinalArguments),
        (4, "2024-HRD-2510", "Muhammad Faisal", "High Court, Hyderabad", ymd(2026, 1, 12),
            "02:00 PM", "Amanullah", HearingType::Judgment),
        (5, "2024-HRD-2505", "Sufiya Begum", "Family Court, Karachi East", ymd(2026, 1, 14),
            "10:30 AM", "Abida Bibi", HearingType::FirstHearing),
    ];

    rows.into_iter()
        .map(|(id, case_number, client, court, date, time, lawyer, hearing_type)| HearingRecord {
            id,
            case_number: case_number.to_string(),
            client_name: client.to_string(),
            court_name: court.to_string(),
            date,
            time: time.to_string(),
            lawyer: lawyer.to_string(),
            hearing_type,
        })
        .collect()
}

/// Intake interviews awaiting follow-up.
#[rustfmt::skip]
pub fn interviews() -> Vec<InterviewRecord> {
    let rows = [
        (1, "Rashida Bibi", "+92 321 1234567", ymd(2026, 1, 4), "Nafees Khattak", "HRD",
            InterviewStatus::PendingReview),
        (2, "Ahmed Hassan", "+92 333 9876543", ymd(2026, 1, 3), "Amanullah", "100 Case",
            InterviewStatus::Completed),
        (3, "Fatima Zahra", "+92 300 5551234", ymd(2026, 1, 6), "Abida Bibi", "WRLMP",
            InterviewStatus::Scheduled),
        (4, "Muhammad Akram", "+92 312 7778899", ymd(2026, 1, 2), "Habib ur Rahman",
            "Bank Alfalah", InterviewStatus::Completed),
        (5, "Saima Akhtar", "+92 345 2223344", ymd(2026, 1, 5), "Nafees Khattak", "HRD",
            InterviewStatus::PendingReview),
    ];

    rows.into_iter()
        .map(|(id, client, phone, date, interviewer, program, status)| InterviewRecord {
            id,
            client_name: client.to_string(),
            phone: phone.to_string(),
            date,
            interviewer: interviewer.to_string(),
            program: program.to_string(),
            status,
        })
        .collect()
}

/// Cases submitted for approval.
#[rustfmt::skip]
pub fn approvals() -> Vec<ApprovalRecord> {
    let rows = [
        (1, "2024-HRD-2870", "Nadia Hussain", "HRD", "Nafees Khattak", ymd(2026, 1, 3), "Family",
            Priority::High),
        (2, "2024-100C-1234", "Tariq Mehmood", "100 Case", "Amanullah", ymd(2026, 1, 2),
            "Criminal", Priority::High),
        (3, "2024-WRLMP-567", "Zainab Ali", "WRLMP", "Abida Bibi", ymd(2026, 1, 4), "Family",
            Priority::Medium),
        (4, "2024-BA-890", "Imran Shah", "Bank Alfalah", "Habib ur Rahman", ymd(2026, 1, 1),
            "Civil", Priority::Low),
    ];

    rows.into_iter()
        .map(|(id, file_number, client, program, submitted_by, submitted_date, case_type, priority)| {
            ApprovalRecord {
                id,
                file_number: file_number.to_string(),
                client_name: client.to_string(),
                program: program.to_string(),
                submitted_by: submitted_by.to_string(),
                submitted_date,
                case_type: case_type.to_string(),
                priority,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(cases().len(), 6);
        assert_eq!(hearings().len(), 5);
        assert_eq!(interviews().len(), 5);
        assert_eq!(approvals().len(), 4);
    }

    #[test]
    fn test_cases_newest_first() {
        let rows = cases();
        for pair in rows.windows(2) {
            assert!(pair[0].last_updated >= pair[1].last_updated);
            assert!(pair[0].id > pair[1].id);
        }
    }

    #[test]
    fn test_hearings_in_date_order() {
        let rows = hearings();
        assert!(rows.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_no_placeholder_dates() {
        assert!(cases().iter().all(|c| c.last_updated != NaiveDate::MIN));
        assert!(approvals().iter().all(|a| a.submitted_date != NaiveDate::MIN));
    }
}
