//! # Ordered Label Set
//!
//! **The label order is the contract with the tagger / classifier.**
//! A predicted index `n` names the `n`-th label of the set; a label list
//! out of step with the model's training order produces silently wrong
//! spans, not an error.

use std::collections::BTreeMap;

use crate::{SCResult, SlotchipperError, types::SCHashSet};

/// An ordered list of unique, non-empty labels.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Build a label set; index `n` is the label for predicted index `n`.
    ///
    /// ## Arguments
    /// * `labels` - the ordered labels.
    ///
    /// ## Returns
    /// A `Result` containing the set, or [`SlotchipperError::InvalidLabels`]
    /// when the list is empty, or a label is empty or repeated.
    pub fn new<I, S>(labels: I) -> SCResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(SlotchipperError::InvalidLabels(
                "label list is empty".to_string(),
            ));
        }

        let mut seen: SCHashSet<&str> = SCHashSet::default();
        for label in &labels {
            if label.is_empty() {
                return Err(SlotchipperError::InvalidLabels(
                    "empty label name".to_string(),
                ));
            }
            if !seen.insert(label.as_str()) {
                return Err(SlotchipperError::InvalidLabels(format!(
                    "repeated label {label:?}"
                )));
            }
        }

        Ok(Self { labels })
    }

    /// Build a label set from a ``{ label -> index }`` map.
    ///
    /// The indices must be exactly ``0..len``.
    pub fn from_label_ids<I, S>(ids: I) -> SCResult<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut by_index: BTreeMap<usize, String> = BTreeMap::new();
        for (label, index) in ids {
            let label = label.into();
            if let Some(other) = by_index.insert(index, label.clone()) {
                return Err(SlotchipperError::InvalidLabels(format!(
                    "labels {other:?} and {label:?} share index {index}"
                )));
            }
        }

        for (expected, &index) in by_index.keys().enumerate() {
            if expected != index {
                return Err(SlotchipperError::InvalidLabels(format!(
                    "label indices are not dense: missing index {expected}"
                )));
            }
        }

        Self::new(by_index.into_values())
    }

    /// The number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; a label set is never empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The label at a predicted index.
    pub fn label(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// The index of a label.
    pub fn index_of(
        &self,
        label: &str,
    ) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Iterate over the labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// The labels in index order.
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

impl TryFrom<Vec<String>> for LabelSet {
    type Error = SlotchipperError;

    fn try_from(labels: Vec<String>) -> SCResult<Self> {
        Self::new(labels)
    }
}

impl From<LabelSet> for Vec<String> {
    fn from(labels: LabelSet) -> Self {
        labels.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let labels = LabelSet::new(["O", "B-city", "I-city"]).unwrap();

        assert_eq!(labels.len(), 3);
        assert!(!labels.is_empty());
        assert_eq!(labels.label(1), Some("B-city"));
        assert_eq!(labels.label(3), None);
        assert_eq!(labels.index_of("I-city"), Some(2));
        assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["O", "B-city", "I-city"]);
    }

    #[test]
    fn test_invalid() {
        let empty: [&str; 0] = [];
        assert!(LabelSet::new(empty).is_err());
        assert!(LabelSet::new(["O", ""]).is_err());
        assert!(LabelSet::new(["O", "city", "O"]).is_err());
    }

    #[test]
    fn test_from_label_ids() {
        let labels = LabelSet::from_label_ids([("city", 1), ("O", 0), ("date", 2)]).unwrap();
        assert_eq!(labels.as_slice(), &["O", "city", "date"]);

        assert!(LabelSet::from_label_ids([("O", 0), ("city", 2)]).is_err());
        assert!(LabelSet::from_label_ids([("O", 0), ("city", 0)]).is_err());
    }

    #[test]
    fn test_serde() {
        let labels: LabelSet = serde_json::from_str(r#"["O", "city"]"#).unwrap();
        assert_eq!(labels.label(1), Some("city"));
        assert_eq!(serde_json::to_string(&labels).unwrap(), r#"["O","city"]"#);

        assert!(serde_json::from_str::<LabelSet>(r#"["O", "O"]"#).is_err());
    }
}
