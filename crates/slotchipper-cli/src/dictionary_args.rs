use std::sync::Arc;

use slotchipper::{
    dictionary::{
        LexicalDictionary,
        filter_pretrained_entries,
        io::{load_fasttext_entries_path, load_key_list_path},
        split_pretrained_entries,
    },
    language::LanguageTokenizer,
};

/// Dictionary file formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DictionaryFormat {
    /// fastText ``.vec`` text listing.
    Fasttext,

    /// One key per line, in id order.
    Keys,
}

/// Dictionary source arg group.
#[derive(clap::Args, Debug)]
pub struct DictionaryArgs {
    /// Dictionary file.
    #[arg(long)]
    dictionary: String,

    /// Dictionary file format.
    #[arg(long, default_value = "fasttext")]
    dictionary_format: DictionaryFormat,

    /// Reduce a fastText listing to characters and bigrams.
    #[arg(long)]
    filter: bool,
}

impl DictionaryArgs {
    /// Load the shared dictionary.
    ///
    /// ## Arguments
    /// * `tokenizer` - the language rules used by `--filter`.
    pub fn load_dictionary(
        &self,
        tokenizer: &LanguageTokenizer,
    ) -> Result<Arc<LexicalDictionary<u32>>, Box<dyn std::error::Error>> {
        log::info!("dictionary: {}", self.dictionary);
        let dictionary = match self.dictionary_format {
            DictionaryFormat::Fasttext => {
                let mut entries = load_fasttext_entries_path(&self.dictionary)?;
                if self.filter {
                    entries = filter_pretrained_entries(entries, tokenizer);
                }
                let (dictionary, _vectors) = split_pretrained_entries(entries)?;
                dictionary
            }
            DictionaryFormat::Keys => {
                if self.filter {
                    log::warn!("--filter only applies to fastText dictionaries");
                }
                load_key_list_path(&self.dictionary)?
            }
        };
        log::info!("dictionary keys: {}", dictionary.len());
        Ok(Arc::new(dictionary))
    }
}
