//! # Dictionary IO
//!
//! * [`fasttext_io`] - pretrained ``.vec`` text listings.
//! * [`key_list_io`] - plain one-key-per-line vocabularies.

pub mod fasttext_io;
pub mod key_list_io;

#[doc(inline)]
pub use fasttext_io::*;
#[doc(inline)]
pub use key_list_io::*;
