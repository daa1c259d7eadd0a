use crate::models::RsvpRecord;

/// Column order of the exported CSV.
pub const CSV_HEADERS: [&str; 6] = [
    "Timestamp",
    "Guest Name",
    "Attending",
    "Guests",
    "Dietary",
    "Message",
];

/// Renders records as CSV text, header row first. Lines are joined with a
/// bare newline and there is no trailing newline.
pub fn to_csv(records: &[RsvpRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for record in records {
        let guests = record.guests.to_string();
        let fields = [
            record.timestamp.as_str(),
            record.guest_name.as_str(),
            record.attending.as_str(),
            guests.as_str(),
            record.dietary.as_str(),
            record.message.as_str(),
        ];
        let line = fields
            .iter()
            .map(|field| escape_field(field))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    lines.join("\n")
}

/// Quotes a field when it contains a comma, newline or double quote,
/// doubling any inner quotes.
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('\n') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, message: &str) -> RsvpRecord {
        RsvpRecord {
            guest_name: name.to_string(),
            attending: "yes".to_string(),
            guests: 2,
            dietary: "none".to_string(),
            message: message.to_string(),
            timestamp: "2026-01-01T10:00:00Z".to_string(),
        }
    }

    // Minimal CSV reader used to check that exports stay parseable. Handles
    // quoted fields, doubled quotes and embedded newlines.
    fn parse_csv(text: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if in_quotes {
                match ch {
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        field.push('"');
                    }
                    '"' => in_quotes = false,
                    other => field.push(other),
                }
            } else {
                match ch {
                    '"' => in_quotes = true,
                    ',' => row.push(std::mem::take(&mut field)),
                    '\n' => {
                        row.push(std::mem::take(&mut field));
                        rows.push(std::mem::take(&mut row));
                    }
                    other => field.push(other),
                }
            }
        }
        row.push(field);
        rows.push(row);
        rows
    }

    #[test]
    fn empty_export_is_just_the_header() {
        assert_eq!(to_csv(&[]), "Timestamp,Guest Name,Attending,Guests,Dietary,Message");
    }

    #[test]
    fn plain_fields_are_written_unquoted() {
        let csv = to_csv(&[record("Ana", "See you there")]);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "2026-01-01T10:00:00Z,Ana,yes,2,none,See you there");
    }

    #[test]
    fn fields_with_commas_quotes_and_newlines_are_escaped() {
        let csv = to_csv(&[record("Ana", "Hello, \"friend\"\nSee you!")]);

        let expected = format!(
            "{}\n{}",
            CSV_HEADERS.join(","),
            "2026-01-01T10:00:00Z,Ana,yes,2,none,\"Hello, \"\"friend\"\"\nSee you!\""
        );
        assert_eq!(csv, expected);
    }

    #[test]
    fn export_round_trips_through_a_csv_reader() {
        let tricky = vec![
            record("Silva, Ana", "line one\nline two"),
            record("The \"Best\" Guest", "plain"),
            record("", ""),
        ];

        let rows = parse_csv(&to_csv(&tricky));

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], CSV_HEADERS);
        assert_eq!(rows[1][1], "Silva, Ana");
        assert_eq!(rows[1][5], "line one\nline two");
        assert_eq!(rows[2][1], "The \"Best\" Guest");
        assert_eq!(rows[3][1], "");
        assert_eq!(rows[3][5], "");
    }

    #[test]
    fn numeric_guests_are_rendered_bare() {
        let csv = to_csv(&[record("Ana", "hi")]);
        assert!(csv.contains(",2,"));
    }
}
