use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Donation kind used when a row does not specify one.
pub const DEFAULT_DONATION_KIND: &str = "Makanan / Uang";

/// One donor entry in the schedule.
///
/// `dates` always holds at least one entry (possibly an empty string) so the
/// editor has a slot to render. Serialized field names mirror the persisted
/// JSON blobs, including the `type` key for the donation kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    /// Opaque unique id; no two live rows share one.
    pub id: String,
    /// Display sequence number, kept as text; non-numeric values count as 0
    /// wherever a number is needed.
    pub no: String,
    pub name: String,
    pub dates: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl DonationRecord {
    /// Fresh empty row carrying the given sequence number.
    pub fn new(no: i64) -> Self {
        DonationRecord {
            id: Uuid::new_v4().to_string(),
            no: no.to_string(),
            name: String::new(),
            dates: vec![String::new()],
            kind: DEFAULT_DONATION_KIND.to_string(),
        }
    }

    /// Case-insensitive substring match against name and donation kind.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.kind.to_lowercase().contains(&q)
    }
}

/// Next sequence number: one past the highest numeric `no` in the list.
pub fn next_no(records: &[DonationRecord]) -> i64 {
    records
        .iter()
        .map(|r| r.no.trim().parse::<i64>().unwrap_or(0))
        .max()
        .map_or(1, |highest| highest + 1)
}

/// Seed data shown on first start, before anything was persisted.
pub fn example_records() -> Vec<DonationRecord> {
    [("1", "SYAMBIAH"), ("2", "SINTA / NENE AMMAS"), ("3", "ANGGIN")]
        .into_iter()
        .map(|(no, name)| DonationRecord {
            id: Uuid::new_v4().to_string(),
            no: no.to_string(),
            name: name.to_string(),
            dates: vec!["19/02/2026".to_string(), "06/03/2026".to_string()],
            kind: DEFAULT_DONATION_KIND.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn next_no_starts_at_one() {
        assert_eq!(next_no(&[]), 1);
    }

    #[test]
    fn next_no_follows_the_highest_numeric_value() {
        let mut records = vec![DonationRecord::new(2), DonationRecord::new(7)];
        records.push(DonationRecord::new(4));
        assert_eq!(next_no(&records), 8);
    }

    #[test]
    fn next_no_treats_non_numeric_values_as_zero() {
        let mut a = DonationRecord::new(1);
        a.no = "bis".to_string();
        let mut b = DonationRecord::new(1);
        b.no = String::new();
        assert_eq!(next_no(&[a.clone(), b]), 1);

        let mut c = DonationRecord::new(5);
        c.no = " 5 ".to_string();
        assert_eq!(next_no(&[a, c]), 6);
    }

    #[test]
    fn fresh_rows_always_have_a_date_slot() {
        let row = DonationRecord::new(1);
        assert_eq!(row.dates, vec![String::new()]);
        assert_eq!(row.kind, DEFAULT_DONATION_KIND);
        assert!(!row.id.is_empty());
    }

    #[test]
    fn search_matches_name_and_kind_case_insensitively() {
        let mut row = DonationRecord::new(1);
        row.name = "Syambiah".to_string();
        assert!(row.matches("SYAM"));
        assert!(row.matches("makanan"));
        assert!(row.matches(""));
        assert!(!row.matches("uang tunai"));
    }

    #[test]
    fn kind_serializes_under_the_type_key() {
        let row = DonationRecord::new(1);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["type"], DEFAULT_DONATION_KIND);
    }
}
