//! # Pipeline Labels

use std::path::Path;

use crate::{SCResult, decoders::LabelSet};

/// The ordered label lists a trained tagger / classifier pair expects.
///
/// ```json
/// { "slots": ["O", "B-city"], "intents": ["greet", "book_flight"] }
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipelineLabels {
    /// The tagger's slot labels, in index order.
    pub slots: LabelSet,

    /// The classifier's intents, in index order.
    pub intents: LabelSet,
}

impl PipelineLabels {
    /// Load labels from a JSON file.
    pub fn load_path<P: AsRef<Path>>(path: P) -> SCResult<Self> {
        let reader = std::io::BufReader::new(std::fs::File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_path() {
        let dir = tempdir::TempDir::new("slotchipper_labels").unwrap();
        let path = dir.path().join("labels.json");
        std::fs::write(
            &path,
            r#"{"slots": ["O", "B-city"], "intents": ["greet", "weather"]}"#,
        )
        .unwrap();

        let labels = PipelineLabels::load_path(&path).unwrap();
        assert_eq!(labels.slots.label(1), Some("B-city"));
        assert_eq!(labels.intents.index_of("weather"), Some(1));

        std::fs::write(&path, r#"{"slots": [], "intents": ["greet"]}"#).unwrap();
        assert!(PipelineLabels::load_path(&path).is_err());
    }
}
