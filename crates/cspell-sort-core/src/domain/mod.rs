//! Domain layer: the YAML document model and the word-list transformation.
//!
//! Nothing in here touches the file system or the environment.  Callers hand
//! in the document text and get rendered text back.

pub mod document;
pub mod locate;
pub mod normalize;
pub mod word_list;
