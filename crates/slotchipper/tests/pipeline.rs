use std::sync::Arc;

use slotchipper::{
    decoders::{LabelSet, TagPrediction},
    dictionary::{
        LexicalDictionary,
        filter_pretrained_entries,
        io::{load_fasttext_entries_path, load_key_list_path, save_key_list_path},
        split_pretrained_entries,
    },
    encoders::EncoderOptions,
    evaluation::PredictionStats,
    language::Language,
    pipeline::{PipelineLabels, PipelineOptions, SlotPipeline},
};

type T = u32;

const VEC_FILE: &str = "\
9 2
the 0.1 0.1
a 0.2 0.2
n 0.3 0.3
e 0.4 0.4
w 0.5 0.5
ne 0.6 0.6
ew 0.7 0.7
two 0.8 0.8
.. 0.9 0.9
";

fn labels() -> PipelineLabels {
    PipelineLabels {
        slots: LabelSet::new(["O", "city", "count"]).unwrap(),
        intents: LabelSet::new(["greet", "travel"]).unwrap(),
    }
}

#[test]
fn test_fasttext_to_predictions() {
    let dir = tempdir::TempDir::new("slotchipper_pipeline").unwrap();
    let vec_path = dir.path().join("dictionary.vec");
    std::fs::write(&vec_path, VEC_FILE).unwrap();

    let tokenizer = Language::English.tokenizer();
    let entries = load_fasttext_entries_path(&vec_path).unwrap();
    let entries = filter_pretrained_entries(entries, &tokenizer);
    let (dictionary, vectors) = split_pretrained_entries::<T, _>(entries).unwrap();

    // "the" and ".." are dropped; "two" also registers "2".
    assert_eq!(
        dictionary.keys().collect::<Vec<_>>(),
        vec!["__", "a", "n", "e", "w", "ne", "ew", "two", "2"]
    );
    assert_eq!(vectors.dimensions(), 2);
    assert_eq!(vectors.vector(7u32), vectors.vector(8u32));

    let key_path = dir.path().join("keys.txt");
    save_key_list_path(&dictionary, &key_path).unwrap();
    let reloaded: LexicalDictionary<T> = load_key_list_path(&key_path).unwrap();
    assert_eq!(reloaded, dictionary);

    let pipeline = SlotPipeline::new(
        Arc::new(dictionary),
        labels(),
        PipelineOptions::default().with_encoder(EncoderOptions::new(4, 3)),
    )
    .unwrap();

    let sentences = ["Two to New York", "new"];
    let buffer = pipeline.encode_words(&sentences);
    assert_eq!(buffer.shape(), [2, 4, 3]);
    // "two": exact hit.
    assert_eq!(buffer.row(0, 0), &[7, 0, 0]);
    // "to": too short for bigrams; "t" and "o" are unknown.
    assert_eq!(buffer.row(0, 1), &[0, 0, 0]);
    // "new": bigrams.
    assert_eq!(buffer.row(0, 2), &[5, 6, 0]);
    // "york": no bigrams, no characters.
    assert_eq!(buffer.row(0, 3), &[0, 0, 0]);
    assert_eq!(buffer.row(1, 0), &[5, 6, 0]);

    let chars = pipeline.encode_characters(&sentences);
    assert_eq!(chars.row(0, 2), &[2, 3, 4]);

    #[rustfmt::skip]
    let tag_flat: [f32; 24] = [
        0.1, 0.1, 0.8,   0.9, 0.05, 0.05,   0.1, 0.8, 0.1,   0.1, 0.6, 0.3,
        0.2, 0.7, 0.1,   1.0, 0.0, 0.0,     1.0, 0.0, 0.0,   1.0, 0.0, 0.0,
    ];
    let intent_flat = [0.1, 0.9, 0.4, 0.6];

    let predictions = pipeline.predict(&sentences, &intent_flat, &tag_flat).unwrap();
    assert_eq!(predictions[0].intent, "travel");
    assert_eq!(predictions[0].slots["count"][0].value, "two");
    assert_eq!(predictions[0].slots["city"][0].value, "new york");
    assert!((predictions[0].slots["city"][0].confidence - 0.7).abs() < 1e-6);
    assert_eq!(predictions[1].slots["city"][0].value, "new");

    let json = serde_json::to_string(&predictions[1]).unwrap();
    assert!(json.contains(r#""sentence":"new""#), "{json}");

    let intents = pipeline.decode_intents(&sentences, &intent_flat).unwrap();
    let mut stats = PredictionStats::default();
    stats
        .score_intents(pipeline.intent_decoder(), &[1, 0], &intents)
        .unwrap();
    assert_eq!(stats.correct, 1);
    assert_eq!(stats.wrong, 1);

    let tags = TagPrediction::from_batch_probabilities(&tag_flat, 4, 3).unwrap();
    let predicted: Vec<Vec<usize>> = tags
        .iter()
        .map(|s| s.iter().map(|t| t.highest_index).collect())
        .collect();
    let expected: Vec<Vec<usize>> = vec![vec![2, 0, 1, 1], vec![1]];
    let mut stats = PredictionStats::default();
    stats
        .score_tags(&sentences, &expected, &predicted)
        .unwrap();
    assert_eq!(stats.correct, 2);
}

#[test]
fn test_spanish_pipeline() {
    let dictionary = LexicalDictionary::<T>::from_keys(["__", "ñ", "a", "añ", "ño", "o"]).unwrap();
    let options: PipelineOptions = serde_json::from_str(r#"{"language": "ES"}"#).unwrap();
    let pipeline = SlotPipeline::new(Arc::new(dictionary), labels(), options).unwrap();

    assert_eq!(pipeline.tokenizer().language(), Language::Spanish);
    let buffer = pipeline.encode_words(&["¡Año"]);
    assert_eq!(&buffer.row(0, 0)[..3], &[3, 4, 0]);
}

#[test]
fn test_unsupported_language() {
    assert!(PipelineOptions::default().with_language_code("fr").is_err());
    assert!(serde_json::from_str::<PipelineOptions>(r#"{"language": "pt"}"#).is_err());
}
