use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// TF-IDF score of one file against a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileScore {
    pub name: String,
    pub score: f64,
}

/// Ranking keys of one sentence against a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceScore {
    pub sentence: String,
    /// Sum of IDFs of query words present in the sentence (presence only).
    pub idf_sum: f64,
    /// Fraction of the sentence's tokens that are query words, counting
    /// every occurrence over the whole token sequence.
    pub density: f64,
}

/// Score every file by `sum(idf(w) * tf(w, file))` over the query words and
/// return them sorted by score descending, ties by name ascending. Query
/// words absent from `idfs` never appeared in any file and contribute 0.
pub fn rank_files(
    query: &HashSet<String>,
    files: &HashMap<String, Vec<String>>,
    idfs: &HashMap<String, f64>,
) -> Vec<FileScore> {
    let mut scored: Vec<FileScore> = files
        .iter()
        .map(|(name, tokens)| {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for token in tokens {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
            let score = query
                .iter()
                .filter_map(|word| {
                    let tf = *counts.get(word.as_str())? as f64;
                    let idf = idfs.get(word.as_str()).copied().unwrap_or(0.0);
                    Some(tf * idf)
                })
                .sum();
            FileScore { name: name.clone(), score }
        })
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    scored
}

/// Return the names of the `n` best-matching files. Returns all files when
/// `n` exceeds the file count; `n == 0` is a caller error.
pub fn top_files(
    query: &HashSet<String>,
    files: &HashMap<String, Vec<String>>,
    idfs: &HashMap<String, f64>,
    n: usize,
) -> Result<Vec<String>> {
    ensure!(n > 0, "requested file count must be positive");
    Ok(rank_files(query, files, idfs)
        .into_iter()
        .take(n)
        .map(|f| f.name)
        .collect())
}

/// Score every sentence by total IDF of the query words it contains, with
/// query term density as the tie-break, and return them sorted descending
/// on both keys, final ties by sentence text ascending.
///
/// Callers must exclude sentences whose tokenization is empty.
pub fn rank_sentences(
    query: &HashSet<String>,
    sentences: &HashMap<String, Vec<String>>,
    idfs: &HashMap<String, f64>,
) -> Vec<SentenceScore> {
    let mut scored: Vec<SentenceScore> = sentences
        .iter()
        .map(|(sentence, tokens)| {
            let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            let idf_sum = query
                .iter()
                .filter(|word| present.contains(word.as_str()))
                .map(|word| idfs.get(word.as_str()).copied().unwrap_or(0.0))
                .sum();
            // Full scan: every occurrence of a query word counts.
            let matches = tokens.iter().filter(|t| query.contains(t.as_str())).count();
            let density = matches as f64 / tokens.len() as f64;
            SentenceScore { sentence: sentence.clone(), idf_sum, density }
        })
        .collect();
    scored.sort_by(|a, b| {
        b.idf_sum
            .partial_cmp(&a.idf_sum)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.density.partial_cmp(&a.density).unwrap_or(Ordering::Equal))
            .then_with(|| a.sentence.cmp(&b.sentence))
    });
    scored
}

/// Return the `n` best-matching sentences in ranked order.
pub fn top_sentences(
    query: &HashSet<String>,
    sentences: &HashMap<String, Vec<String>>,
    idfs: &HashMap<String, f64>,
    n: usize,
) -> Result<Vec<String>> {
    ensure!(n > 0, "requested sentence count must be positive");
    ensure!(
        sentences.values().all(|tokens| !tokens.is_empty()),
        "sentence collection contains an empty token sequence"
    );
    Ok(rank_sentences(query, sentences, idfs)
        .into_iter()
        .take(n)
        .map(|s| s.sentence)
        .collect())
}
