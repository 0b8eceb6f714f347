use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lse_core::corpus::read_text;
use lse_core::index::scan_text;
use lse_core::tokenizer::{normalize_keyword, NoiseWords};
use lse_core::{InvertedIndex, Occurrence};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lse")]
#[command(about = "Index a set of text documents by keyword and run two-keyword searches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and print a summary
    Build {
        /// File listing one document per line
        #[arg(long, default_value = "docs.txt")]
        docs: PathBuf,
        /// File listing noise words
        #[arg(long, default_value = "noisewords.txt")]
        noise: PathBuf,
        /// Print the whole index as JSON
        #[arg(long, default_value_t = false)]
        dump: bool,
    },
    /// Find documents containing either keyword, most frequent first
    Search {
        #[arg(long, default_value = "docs.txt")]
        docs: PathBuf,
        #[arg(long, default_value = "noisewords.txt")]
        noise: PathBuf,
        kw1: String,
        kw2: String,
        /// Maximum number of documents returned
        #[arg(long, default_value_t = lse_core::MAX_RESULTS)]
        limit: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show how a single token is normalized
    Keyword {
        token: String,
        #[arg(long)]
        noise: Option<PathBuf>,
    },
    /// List the keywords of one document with their frequencies
    Keywords {
        doc: PathBuf,
        #[arg(long)]
        noise: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    kw1: Option<&'a str>,
    kw2: Option<&'a str>,
    results: &'a [String],
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { docs, noise, dump } => build(&docs, &noise, dump),
        Commands::Search { docs, noise, kw1, kw2, limit, json } => search(&docs, &noise, &kw1, &kw2, limit, json),
        Commands::Keyword { token, noise } => keyword(&token, noise.as_deref()),
        Commands::Keywords { doc, noise } => doc_keywords(&doc, noise.as_deref()),
    }
}

fn load_index(docs: &Path, noise: &Path) -> Result<InvertedIndex> {
    InvertedIndex::build(docs, noise)
        .with_context(|| format!("building index from {} and {}", docs.display(), noise.display()))
}

fn load_noise(noise: Option<&Path>) -> Result<NoiseWords> {
    match noise {
        Some(path) => Ok(NoiseWords::parse(&read_text(path)?)),
        None => Ok(NoiseWords::new()),
    }
}

fn build(docs: &Path, noise: &Path, dump: bool) -> Result<()> {
    let index = load_index(docs, noise)?;
    if dump {
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }
    println!("{} keywords, {} noise words", index.len(), index.noise_words().len());
    for kw in index.keywords() {
        let occs: Vec<String> = index.occurrences(kw).unwrap_or(&[]).iter().map(Occurrence::to_string).collect();
        println!("{kw}: {}", occs.join(" "));
    }
    Ok(())
}

fn search(docs: &Path, noise: &Path, kw1: &str, kw2: &str, limit: usize, json: bool) -> Result<()> {
    let index = load_index(docs, noise)?;
    // Query words go through the same normalization as document words.
    let kw1 = normalize_keyword(kw1, index.noise_words());
    let kw2 = normalize_keyword(kw2, index.noise_words());
    let results = index.search_top(kw1.as_deref().unwrap_or(""), kw2.as_deref().unwrap_or(""), limit);

    if json {
        let out = SearchOutput { kw1: kw1.as_deref(), kw2: kw2.as_deref(), results: &results };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if results.is_empty() {
        println!("no matches");
    } else {
        for (rank, doc) in results.iter().enumerate() {
            println!("{}. {doc}", rank + 1);
        }
    }
    Ok(())
}

fn keyword(token: &str, noise: Option<&Path>) -> Result<()> {
    let noise = load_noise(noise)?;
    match normalize_keyword(token, &noise) {
        Some(kw) => println!("{kw}"),
        None => println!("{token:?} is not a keyword"),
    }
    Ok(())
}

fn doc_keywords(doc: &Path, noise: Option<&Path>) -> Result<()> {
    let noise = load_noise(noise)?;
    let text = read_text(doc)?;
    let name = doc.to_string_lossy();
    let mut kws: Vec<(String, u32)> = scan_text(&name, &text, &noise)
        .into_iter()
        .map(|(kw, occ)| (kw, occ.frequency))
        .collect();
    kws.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tracing::info!(doc = %name, keywords = kws.len(), "scanned");
    for (kw, freq) in kws {
        println!("{freq} {kw}");
    }
    Ok(())
}
