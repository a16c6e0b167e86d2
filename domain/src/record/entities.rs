//! Record and dataset entities

use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// A single question/answer training example (Entity)
///
/// Only `question` and `answers` are kept. Every other key of the input
/// object (`positive_ctxs`, `negative_ctxs`, `hard_negative_ctxs`, ...) is
/// skipped while deserializing and never materialized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(expecting = "a DPR record object with `question` and `answers`")]
pub struct DprRecord {
    /// Question text
    pub question: String,
    /// Answers in whatever shape the input file uses
    pub answers: Value,
}

impl DprRecord {
    pub fn new(question: impl Into<String>, answers: impl Into<Value>) -> Self {
        Self {
            question: question.into(),
            answers: answers.into(),
        }
    }

    /// Whether the question carries a tab or line break
    ///
    /// Such a question is still written verbatim, but its gold line can no
    /// longer be split back into exactly one question field.
    pub fn question_contains_separator(&self) -> bool {
        self.question.contains(['\t', '\n', '\r'])
    }
}

/// Ordered, fully materialized collection of records (Aggregate)
///
/// Records have no identity beyond their position. A dataset is immutable
/// once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<DprRecord>,
}

impl Dataset {
    pub fn new(records: Vec<DprRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DprRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DprRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DprRecord;
    type IntoIter = std::slice::Iter<'a, DprRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<Vec<DprRecord>> for Dataset {
    fn from(records: Vec<DprRecord>) -> Self {
        Self::new(records)
    }
}

// Hand-written so that a non-array document reports what was expected
// instead of serde's generic "a sequence".
impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = Dataset;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON array of DPR records")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Dataset, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut records = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(record) = seq.next_element::<DprRecord>()? {
                    records.push(record);
                }
                Ok(Dataset::new(records))
            }
        }

        deserializer.deserialize_seq(DatasetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dataset_preserves_order() {
        let dataset: Dataset = serde_json::from_str(
            r#"[{"question": "q1", "answers": "a1"}, {"question": "q2", "answers": "a2"}]"#,
        )
        .unwrap();

        let questions: Vec<_> = dataset.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["q1", "q2"]);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_empty_array_is_empty_dataset() {
        let dataset: Dataset = serde_json::from_str("[]").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dataset: Dataset = serde_json::from_str(
            r#"[{
                "dataset": "nq_dev_psgs_w100",
                "question": "who sings does he love me with reba",
                "answers": ["Linda Davis"],
                "positive_ctxs": [{"title": "Does He Love You", "text": "...", "score": 1000}],
                "negative_ctxs": [],
                "hard_negative_ctxs": []
            }]"#,
        )
        .unwrap();

        assert_eq!(
            dataset.records()[0],
            DprRecord::new("who sings does he love me with reba", json!(["Linda Davis"]))
        );
    }

    #[test]
    fn test_missing_answers_is_rejected() {
        let err = serde_json::from_str::<Dataset>(r#"[{"question": "q1"}]"#).unwrap_err();
        assert!(err.to_string().contains("missing field `answers`"));
    }

    #[test]
    fn test_missing_question_is_rejected() {
        let err = serde_json::from_str::<Dataset>(r#"[{"answers": ["a"]}]"#).unwrap_err();
        assert!(err.to_string().contains("missing field `question`"));
    }

    #[test]
    fn test_non_string_question_is_rejected() {
        let err =
            serde_json::from_str::<Dataset>(r#"[{"question": 42, "answers": []}]"#).unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_non_array_document_is_rejected() {
        let err = serde_json::from_str::<Dataset>(r#"{"question": "q", "answers": []}"#)
            .unwrap_err();
        assert!(err.to_string().contains("a JSON array of DPR records"));
    }

    #[test]
    fn test_null_answers_are_kept() {
        let dataset: Dataset =
            serde_json::from_str(r#"[{"question": "q", "answers": null}]"#).unwrap();
        assert_eq!(dataset.records()[0].answers, Value::Null);
    }

    #[test]
    fn test_question_contains_separator() {
        assert!(DprRecord::new("a\tb", "x").question_contains_separator());
        assert!(DprRecord::new("a\nb", "x").question_contains_separator());
        assert!(!DprRecord::new("who is obama", "x").question_contains_separator());
    }
}
