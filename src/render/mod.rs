//! Rendering module for converting structured documents to IRaMuTeQ corpora.

mod corpus;
mod options;
mod result;

pub use corpus::{render_corpus, to_corpus, to_corpus_with_stats, write_corpus, CorpusFormatter};
pub use options::CorpusOptions;
pub use result::{CorpusResult, CorpusStats};
