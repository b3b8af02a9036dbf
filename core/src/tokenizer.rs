use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}][\p{L}\p{N}_']*").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

// English word segmentation splits clitics off their host: "einstein's" is
// "einstein" + "'s", "don't" is "do" + "n't". A trailing bare apostrophe is
// standalone punctuation and drops with the rest.
fn split_clitic(token: &str) -> Vec<&str> {
    let token = token.trim_end_matches('\'');
    if token.contains('\'') {
        for clitic in CLITICS {
            if let Some(stem) = token.strip_suffix(clitic) {
                if !stem.is_empty() {
                    return vec![stem, clitic];
                }
            }
        }
    }
    vec![token]
}

/// Tokenize text into lowercased word and number tokens using NFKC
/// normalization, clitic splitting, and stopword removal. Order and
/// duplicates are preserved so callers can count term frequencies.
/// Standalone punctuation never matches the word pattern.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    let mut tokens = Vec::new();
    for mat in RE.find_iter(&normalized) {
        for piece in split_clitic(mat.as_str()) {
            if !piece.is_empty() && !is_stopword(piece) {
                tokens.push(piece.to_string());
            }
        }
    }
    tokens
}

/// Tokenize a query string into its set of unique terms.
pub fn query_terms(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}
