use crate::models::RsvpRecord;

/// Filters records by case-insensitive substring match over the guest name,
/// attendance, dietary and message fields. A blank query keeps everything.
/// Timestamps are not searched.
pub fn filter_records(records: &[RsvpRecord], query: &str) -> Vec<RsvpRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            record.guest_name.to_lowercase().contains(&needle)
                || record.attending.to_lowercase().contains(&needle)
                || record.dietary.to_lowercase().contains(&needle)
                || record.message.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, attending: &str, dietary: &str, message: &str) -> RsvpRecord {
        RsvpRecord {
            guest_name: name.to_string(),
            attending: attending.to_string(),
            guests: 1,
            dietary: dietary.to_string(),
            message: message.to_string(),
            timestamp: "2026-01-01T10:00:00Z".to_string(),
        }
    }

    fn sample() -> Vec<RsvpRecord> {
        vec![
            record("Ana Silva", "yes", "vegan", "So excited!"),
            record("Ben Brown", "no", "", "Sorry, can't make it"),
            record("Carla", "yes", "gluten-free", ""),
        ]
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let records = sample();

        assert_eq!(filter_records(&records, ""), records);
        assert_eq!(filter_records(&records, "   "), records);
    }

    #[test]
    fn matches_are_case_insensitive() {
        let records = sample();

        let hits = filter_records(&records, "ANA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].guest_name, "Ana Silva");
    }

    #[test]
    fn every_searchable_field_is_considered() {
        let records = sample();

        assert_eq!(filter_records(&records, "no").len(), 1);
        assert_eq!(filter_records(&records, "vegan").len(), 1);
        assert_eq!(filter_records(&records, "sorry").len(), 1);
        assert_eq!(filter_records(&records, "gluten").len(), 1);
    }

    #[test]
    fn timestamps_are_not_searched() {
        let records = sample();

        assert!(filter_records(&records, "2026").is_empty());
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let records = sample();

        assert!(filter_records(&records, "zzz").is_empty());
    }

    #[test]
    fn result_preserves_input_order() {
        let records = sample();

        let hits = filter_records(&records, "yes");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].guest_name, "Ana Silva");
        assert_eq!(hits[1].guest_name, "Carla");
    }
}
