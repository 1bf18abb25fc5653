use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Paid,
    Failed,
    Refunded,
}

// Wire names follow the table front end's column keys.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct BillingRecord {
    // Zero-padded, e.g. "099"
    pub id: &'static str,
    // Local time, no offset
    #[serde(rename = "date")]
    pub occurred_at: &'static str,
    pub status: Status,
    #[serde(rename = "links")]
    pub counterparty_email: &'static str,
    #[serde(rename = "pages")]
    pub page_count: u32,
}

// Ordered by descending id and time. Not validated at startup.
static RECORDS: [BillingRecord; 5] = [
    BillingRecord {
        id: "100",
        occurred_at: "2024-03-11T15:30:00",
        status: Status::Paid,
        counterparty_email: "james.anderson@example.com",
        page_count: 594,
    },
    BillingRecord {
        id: "099",
        occurred_at: "2024-03-11T10:10:00",
        status: Status::Failed,
        counterparty_email: "mia.white@example.com",
        page_count: 276,
    },
    BillingRecord {
        id: "098",
        occurred_at: "2024-03-11T08:50:00",
        status: Status::Refunded,
        counterparty_email: "william.brown@example.com",
        page_count: 315,
    },
    BillingRecord {
        id: "097",
        occurred_at: "2024-03-10T19:45:00",
        status: Status::Paid,
        counterparty_email: "emma.davis@example.com",
        page_count: 529,
    },
    BillingRecord {
        id: "096",
        occurred_at: "2024-03-10T15:55:00",
        status: Status::Paid,
        counterparty_email: "ethan.harris@example.com",
        page_count: 639,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct RecordListProvider {
    records: &'static [BillingRecord],
}

impl RecordListProvider {
    pub fn fixed() -> Self {
        RecordListProvider { records: &RECORDS }
    }

    pub fn list_records(&self) -> &'static [BillingRecord] {
        self.records
    }
}

impl Default for RecordListProvider {
    fn default() -> Self {
        Self::fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::collections::HashSet;

    #[test]
    fn list_is_deterministic_across_calls() {
        let provider = RecordListProvider::fixed();
        let first = provider.list_records();
        let second = provider.list_records();
        assert_eq!(first, second);
        assert_eq!(RecordListProvider::default().list_records(), first);
    }

    #[test]
    fn list_has_five_unique_ids() {
        let records = RecordListProvider::fixed().list_records();
        assert_eq!(records.len(), 5);
        let ids: HashSet<&str> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), records.len(), "ids must be unique");
    }

    #[test]
    fn list_is_ordered_by_descending_id_and_time() {
        let records = RecordListProvider::fixed().list_records();
        for pair in records.windows(2) {
            assert!(pair[0].id > pair[1].id, "{} !> {}", pair[0].id, pair[1].id);
            // Fixed-width local timestamps compare lexically
            assert!(pair[0].occurred_at > pair[1].occurred_at);
        }
    }

    #[test]
    fn statuses_serialize_to_known_values() {
        let allowed = ["paid", "failed", "refunded"];
        for r in RecordListProvider::fixed().list_records() {
            let v = serde_json::to_value(r.status).expect("status json");
            let s = v.as_str().expect("status is a string");
            assert!(allowed.contains(&s), "unexpected status {}", s);
        }
    }

    #[test]
    fn first_and_last_records() {
        let records = RecordListProvider::fixed().list_records();
        let first = records.first().expect("first");
        assert_eq!(first.id, "100");
        assert_eq!(first.status, Status::Paid);
        assert_eq!(first.page_count, 594);
        assert_eq!(first.counterparty_email, "james.anderson@example.com");
        assert_eq!(first.occurred_at, "2024-03-11T15:30:00");

        let last = records.last().expect("last");
        assert_eq!(last.id, "096");
        assert_eq!(last.status, Status::Paid);
        assert_eq!(last.page_count, 639);
    }

    #[test]
    fn record_uses_wire_field_names() {
        let v = serde_json::to_value(RecordListProvider::fixed().list_records()[1]).unwrap();
        assert_eq!(
            v,
            json!({
                "id": "099",
                "date": "2024-03-11T10:10:00",
                "status": "failed",
                "links": "mia.white@example.com",
                "pages": 276
            })
        );
    }

    #[test]
    fn json_round_trip_matches_static_list() {
        let records = RecordListProvider::fixed().list_records();
        let text = serde_json::to_string(records).expect("serialize");
        let parsed: Value = serde_json::from_str(&text).expect("parse");
        let arr = parsed.as_array().expect("array");
        assert_eq!(arr.len(), 5);
        for (obj, rec) in arr.iter().zip(records) {
            assert_eq!(obj.get("id").and_then(|v| v.as_str()), Some(rec.id));
            assert_eq!(obj.get("date").and_then(|v| v.as_str()), Some(rec.occurred_at));
            assert_eq!(
                obj.get("links").and_then(|v| v.as_str()),
                Some(rec.counterparty_email)
            );
            assert_eq!(
                obj.get("pages").and_then(|v| v.as_u64()),
                Some(u64::from(rec.page_count))
            );
            assert_eq!(obj.get("status"), Some(&serde_json::to_value(rec.status).unwrap()));
            assert_eq!(obj.as_object().map(|o| o.len()), Some(5));
        }
    }
}
