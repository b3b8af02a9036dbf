use anyhow::Result;
use clap::Parser;
use qa::Corpus;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "qa")]
#[command(about = "Answer natural-language queries from a directory of text files", long_about = None)]
struct Args {
    /// Directory containing the .txt corpus
    corpus: PathBuf,
    /// Number of top documents to draw sentences from
    #[arg(long, default_value_t = 1)]
    files: usize,
    /// Number of sentences to print per query
    #[arg(long, default_value_t = 1)]
    sentences: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let corpus = Corpus::open(&args.corpus)?;
    tracing::info!(num_docs = corpus.len(), "ready for queries");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "Query: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        let start = std::time::Instant::now();
        let matches = corpus.answer(query, args.files, args.sentences)?;
        tracing::info!(
            took_s = start.elapsed().as_secs_f64(),
            num_matches = matches.len(),
            "query answered"
        );
        for sentence in &matches {
            println!("{sentence}");
        }
    }
    Ok(())
}
