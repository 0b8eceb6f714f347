// Changes the process working directory, so this file holds a single test.
use lse_core::{InvertedIndex, Occurrence};
use std::fs;
use tempfile::tempdir;

#[test]
fn listed_paths_resolve_against_working_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("corpus")).unwrap();
    fs::write(dir.path().join("corpus/a.txt"), "Rust and more rust.").unwrap();
    fs::write(dir.path().join("corpus/docs.txt"), "corpus/a.txt\n").unwrap();
    fs::write(dir.path().join("noise.txt"), "and\n").unwrap();

    std::env::set_current_dir(dir.path()).unwrap();
    let index = InvertedIndex::build("corpus/docs.txt", "noise.txt").unwrap();

    assert_eq!(index.occurrences("rust").unwrap(), &[Occurrence::new("corpus/a.txt", 2)]);
    assert_eq!(index.search("rust", "more"), vec!["corpus/a.txt"]);
}
