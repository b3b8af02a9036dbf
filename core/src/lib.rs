//! TF-IDF retrieval engine: tokenization, IDF tables, and the two ranking
//! passes (documents by TF-IDF, sentences by IDF sum + query term density).
//! Pure computation only; loading files, splitting sentences, and the prompt
//! loop live in the `qa` binary crate.

pub mod idf;
pub mod rank;
pub mod tokenizer;

pub use idf::compute_idfs;
pub use rank::{rank_files, rank_sentences, top_files, top_sentences, FileScore, SentenceScore};
pub use tokenizer::{query_terms, tokenize};
