use qa::Corpus;
use std::fs;
use tempfile::tempdir;

fn build_corpus(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    for (name, text) in files {
        fs::write(dir.path().join(name), text).unwrap();
    }
    dir
}

#[test]
fn answers_from_the_matching_document() {
    let dir = build_corpus(&[
        (
            "python.txt",
            "Python is a programming language.\nIt emphasizes readability. Many beginners start with it.",
        ),
        ("snakes.txt", "Snakes are reptiles. They have no legs."),
    ]);
    let corpus = Corpus::open(dir.path()).unwrap();

    let matches = corpus.answer("What is the Python language?", 1, 1).unwrap();
    assert_eq!(matches, vec!["Python is a programming language."]);
}

#[test]
fn repeated_queries_are_deterministic() {
    let dir = build_corpus(&[
        ("a.txt", "Compilers translate source code. Interpreters run it directly."),
        ("b.txt", "Linkers combine object files. Loaders map them into memory."),
    ]);
    let corpus = Corpus::open(dir.path()).unwrap();

    let first = corpus.answer("how do compilers translate code", 2, 3).unwrap();
    let second = corpus.answer("how do compilers translate code", 2, 3).unwrap();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn sentence_count_is_respected() {
    let dir = build_corpus(&[(
        "doc.txt",
        "Rust prevents data races. Rust has no garbage collector. Rust compiles to native code.",
    )]);
    let corpus = Corpus::open(dir.path()).unwrap();

    let matches = corpus.answer("rust compiles", 1, 2).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0], "Rust compiles to native code.");
}

#[test]
fn non_txt_files_are_ignored() {
    let dir = build_corpus(&[
        ("real.txt", "Ferris is the Rust mascot."),
        ("notes.md", "Ferris facts live here too."),
    ]);
    let corpus = Corpus::open(dir.path()).unwrap();
    assert_eq!(corpus.len(), 1);
}

#[test]
fn empty_corpus_directory_fails_to_open() {
    let dir = tempdir().unwrap();
    assert!(Corpus::open(dir.path()).is_err());
}

#[test]
fn zero_sentence_request_is_rejected() {
    let dir = build_corpus(&[("doc.txt", "One sentence only.")]);
    let corpus = Corpus::open(dir.path()).unwrap();
    assert!(corpus.answer("sentence", 1, 0).is_err());
    assert!(corpus.answer("sentence", 0, 1).is_err());
}
