use serde::{Deserialize, Serialize};

/// Print-header texts, persisted as a single blob.
///
/// The editor never mutates this in place: edits go into a draft copy that
/// only overwrites the canonical value on an explicit save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    pub top_header: String,
    pub sub_header: String,
    pub mosque_name: String,
    pub hijri_year: String,
    pub masehi_year: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        HeaderConfig {
            top_header: "SELAMAT MENUNAIKAN IBADAH PUASA".to_string(),
            sub_header: "JADWAL MEMBERI TA'JIL BUKA PUASA".to_string(),
            mosque_name: "MESJID NURUL HUDA KAMPUNG GUNUNG SARI".to_string(),
            hijri_year: "1447 HIJRIYAH".to_string(),
            masehi_year: "2026 MASEHI".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blob_field_names_stay_camel_case() {
        let json = serde_json::to_value(HeaderConfig::default()).unwrap();
        assert!(json.get("topHeader").is_some());
        assert!(json.get("mosqueName").is_some());
        assert!(json.get("masehiYear").is_some());
    }

    #[test]
    fn round_trips_through_json() {
        let header = HeaderConfig::default();
        let json = serde_json::to_string(&header).unwrap();
        let back: HeaderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, header);
    }
}
