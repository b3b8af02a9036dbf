use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Terminal punctuation, optional closing quotes/brackets, then whitespace.
    static ref BOUNDARY: Regex = Regex::new(r#"[.!?]+["')\]]*\s+"#).expect("valid regex");
}

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "al", "fig", "no",
];

// A period after "Dr", "e.g", or a lone initial does not end a sentence.
fn ends_with_abbreviation(prefix: &str) -> bool {
    let last = prefix
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if last.contains('.') {
        return true;
    }
    if last.len() == 1 && last.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATIONS.contains(&last.as_str())
}

/// Split one paragraph into sentence strings, terminal punctuation included.
/// Text with no boundary comes back as a single sentence.
pub fn split_paragraph(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for mat in BOUNDARY.find_iter(text) {
        if ends_with_abbreviation(&text[start..mat.start()]) {
            continue;
        }
        let sentence = text[start..mat.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = mat.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}
