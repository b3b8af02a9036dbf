use anyhow::Result;
use qa_core::{compute_idfs, query_terms, tokenize, top_files, top_sentences};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub mod corpus;
pub mod sentence;

/// A loaded corpus with its cached token sequences and document-level IDF
/// table. Documents never change within a run, so both are computed once;
/// only the sentence phase runs per query.
pub struct Corpus {
    texts: BTreeMap<String, String>,
    tokens: HashMap<String, Vec<String>>,
    idfs: HashMap<String, f64>,
}

impl Corpus {
    pub fn open(dir: &Path) -> Result<Self> {
        let texts = corpus::load_corpus(dir)?;
        let tokens: HashMap<String, Vec<String>> = texts
            .iter()
            .map(|(name, text)| (name.clone(), tokenize(text)))
            .collect();
        let idfs = compute_idfs(&tokens)?;
        tracing::info!(num_terms = idfs.len(), "document idf table ready");
        Ok(Self { texts, tokens, idfs })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Two-phase retrieval: select the best documents by TF-IDF, then rank
    /// sentences inside them by IDF sum with query term density as the
    /// tie-break. The sentence IDF table is scoped to the winning documents
    /// only and rebuilt per query.
    pub fn answer(&self, query_text: &str, n_files: usize, n_sentences: usize) -> Result<Vec<String>> {
        let query = query_terms(query_text);
        let winners = top_files(&query, &self.tokens, &self.idfs, n_files)?;

        let mut sentences: HashMap<String, Vec<String>> = HashMap::new();
        for name in &winners {
            for paragraph in self.texts[name].split('\n') {
                for sent in sentence::split_paragraph(paragraph) {
                    let tokens = tokenize(&sent);
                    // Sentences that tokenize to nothing carry no signal and
                    // would make density ill-defined.
                    if !tokens.is_empty() {
                        sentences.entry(sent).or_insert(tokens);
                    }
                }
            }
        }
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        let sentence_idfs = compute_idfs(&sentences)?;
        top_sentences(&query, &sentences, &sentence_idfs, n_sentences)
    }
}
