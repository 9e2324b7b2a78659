use std::collections::HashMap;
use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

/// One training session as loaded from the CSV-derived roster endpoint.
/// An open column-name → cell mapping; the client never writes to it.
pub type RosterRow = HashMap<String, String>;

/// An open JSON object whose key order is meaningful (serde_json's
/// `preserve_order` keeps first-appearance order on deserialize).
pub type Record = serde_json::Map<String, Value>;

/// Per-training detail returned by the training-detail endpoint.
///
/// Both sections are optional; the backend omits whichever it could not
/// scrape. Wire keys are the upstream system's Japanese labels.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TrainingDetail {
    /// Key/value facts about the session, rendered in wire order.
    #[serde(rename = "基本情報", default)]
    pub basic_info: Option<Record>,
    /// One record per trainee. Rows are heterogeneous; see [`union_keys`].
    #[serde(rename = "受講者一覧", default)]
    pub trainee_list: Option<Vec<Record>>,
}

/// Column set for a heterogeneous record list: the union of keys across all
/// rows, in order of first appearance.
pub fn union_keys(rows: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for row in rows {
        for key in row.keys() {
            if seen.insert(key.clone()) {
                keys.push(key.clone());
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn union_keys_keeps_first_appearance_order() {
        let rows = vec![
            record(json!({"氏名": "a", "申込No": "1"})),
            record(json!({"氏名": "b", "会社名": "x", "申込No": "2"})),
            record(json!({"備考": "-"})),
        ];
        assert_eq!(union_keys(&rows), ["氏名", "申込No", "会社名", "備考"]);
    }

    #[test]
    fn union_keys_of_nothing_is_empty() {
        assert!(union_keys(&[]).is_empty());
    }

    #[test]
    fn detail_deserializes_japanese_wire_keys() {
        let detail: TrainingDetail = serde_json::from_value(json!({
            "基本情報": {"研修名": "新人研修", "開催日": "2026-04-01"},
            "受講者一覧": [{"氏名": "田中", "申込No": "100"}],
        }))
        .unwrap();
        let basic = detail.basic_info.unwrap();
        assert_eq!(basic.keys().collect::<Vec<_>>(), ["研修名", "開催日"]);
        assert_eq!(detail.trainee_list.unwrap().len(), 1);
    }

    #[test]
    fn missing_sections_deserialize_to_none() {
        let detail: TrainingDetail = serde_json::from_value(json!({})).unwrap();
        assert_eq!(detail.basic_info, None);
        assert_eq!(detail.trainee_list, None);
    }
}
