//! Build one word list from a directory tree of saved HTML pages.
//!
//! Usage: `extract_files <dir-or-file>... [--out <prefix>]`
//!
//! Writes `<prefix>_words.txt` (`word, count`, most frequent first),
//! `<prefix>_emails.txt` and `<prefix>_meta.txt` (`kind<TAB>value`).
//! The default prefix is `cewlio`.

use rs_cewlio::{extract_bytes, EmailSet, MetadataEntry, WordFrequencyTable};
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn collect_files_rec(path: &Path, acc: &mut Vec<PathBuf>) -> io::Result<()> {
    if path.is_file() {
        acc.push(path.to_path_buf());
        return Ok(());
    }

    let mut entries: Vec<fs::DirEntry> = fs::read_dir(path)?.collect::<Result<Vec<_>, io::Error>>()?;
    entries.sort_by_key(fs::DirEntry::path);

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_files_rec(&path, acc)?;
        } else if path.is_file() {
            let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
            let ext = ext.to_ascii_lowercase();
            if ext == "html" || ext == "htm" || ext == "xhtml" {
                acc.push(path);
            }
        }
    }

    Ok(())
}

fn create_writer(prefix: &str, suffix: &str) -> io::Result<(PathBuf, BufWriter<fs::File>)> {
    let path = PathBuf::from(format!("{prefix}_{suffix}.txt"));
    let file = fs::File::create(&path)?;
    Ok((path, BufWriter::new(file)))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut inputs = Vec::new();
    let mut prefix = "cewlio".to_string();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--out" {
            prefix = args.next().ok_or("--out needs a value")?;
        } else {
            inputs.push(PathBuf::from(arg));
        }
    }
    if inputs.is_empty() {
        eprintln!("Usage: extract_files <dir-or-file>... [--out <prefix>]");
        std::process::exit(1);
    }

    let mut files = Vec::new();
    for input in &inputs {
        collect_files_rec(input, &mut files)?;
    }

    let mut words = WordFrequencyTable::new();
    let mut emails = EmailSet::new();
    let mut metadata: Vec<MetadataEntry> = Vec::new();
    let mut failed: usize = 0;

    for path in &files {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read file");
                failed += 1;
                continue;
            }
        };

        let source = path.display().to_string();
        match extract_bytes(&bytes, &source) {
            Ok(result) => {
                words.merge(&result.words);
                for email in result.emails.iter() {
                    emails.insert(email);
                }
                metadata.extend(result.metadata);
            }
            Err(e) => {
                warn!(path = %source, error = %e, "skipping undecodable file");
                failed += 1;
            }
        }
    }

    let (words_path, mut out) = create_writer(&prefix, "words")?;
    for entry in words.ranked() {
        writeln!(out, "{}, {}", entry.word, entry.count)?;
    }
    out.flush()?;

    let (emails_path, mut out) = create_writer(&prefix, "emails")?;
    for email in emails.iter() {
        writeln!(out, "{email}")?;
    }
    out.flush()?;

    let (meta_path, mut out) = create_writer(&prefix, "meta")?;
    for entry in &metadata {
        writeln!(out, "{}\t{}", entry.kind, entry.value.replace(['\t', '\n'], " "))?;
    }
    out.flush()?;

    info!(
        files = files.len(),
        failed,
        words = words.len(),
        emails = emails.len(),
        metadata = metadata.len(),
        "finished"
    );
    eprintln!("Wrote: {}", words_path.display());
    eprintln!("Wrote: {}", emails_path.display());
    eprintln!("Wrote: {}", meta_path.display());

    Ok(())
}
