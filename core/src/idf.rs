use anyhow::{ensure, Result};
use std::collections::{HashMap, HashSet};

/// Compute inverse document frequencies over a collection of token sequences.
///
/// For every token present in at least one member, `idf = ln(N / df)` where
/// `df` counts the members containing the token at least once. A token found
/// in every member scores 0; a token found in exactly one scores `ln(N)`.
/// An empty collection is rejected rather than dividing by zero.
pub fn compute_idfs(collection: &HashMap<String, Vec<String>>) -> Result<HashMap<String, f64>> {
    ensure!(
        !collection.is_empty(),
        "cannot compute IDFs over an empty collection"
    );
    let n = collection.len() as f64;

    let mut df: HashMap<&str, usize> = HashMap::new();
    for tokens in collection.values() {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in distinct {
            *df.entry(token).or_insert(0) += 1;
        }
    }

    let idfs: HashMap<String, f64> = df
        .into_iter()
        .map(|(token, count)| (token.to_string(), (n / count as f64).ln()))
        .collect();
    tracing::debug!(num_members = collection.len(), num_terms = idfs.len(), "idf table built");
    Ok(idfs)
}
