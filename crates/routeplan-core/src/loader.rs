// Line-oriented loaders for edge lists and query lists
use crate::models::{EdgeRecord, Query, Weight};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot open file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Records parsed from a line source, plus how many lines were discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

/// Parses `<source> <destination> <weight>`; fields past the third are ignored.
pub fn parse_edge_line(line: &str) -> Option<EdgeRecord> {
    let mut fields = line.split_whitespace();
    let source = fields.next()?;
    let destination = fields.next()?;
    let weight: Weight = fields.next()?.parse().ok()?;
    Some(EdgeRecord::new(source, destination, weight))
}

/// Parses `<origin> <destination>`; fields past the second are ignored.
pub fn parse_query_line(line: &str) -> Option<Query> {
    let mut fields = line.split_whitespace();
    let origin = fields.next()?;
    let destination = fields.next()?;
    Some(Query::new(origin, destination))
}

pub fn read_edges<R: BufRead>(reader: R) -> io::Result<Parsed<EdgeRecord>> {
    read_lines(reader, parse_edge_line)
}

pub fn read_queries<R: BufRead>(reader: R) -> io::Result<Parsed<Query>> {
    read_lines(reader, parse_query_line)
}

pub fn load_edges(path: &Path) -> Result<Parsed<EdgeRecord>, LoadError> {
    let parsed = load_with(path, read_edges)?;
    info!(
        "Loaded {} edges from {} ({} lines skipped)",
        parsed.records.len(),
        path.display(),
        parsed.skipped
    );
    Ok(parsed)
}

pub fn load_queries(path: &Path) -> Result<Parsed<Query>, LoadError> {
    let parsed = load_with(path, read_queries)?;
    info!(
        "Loaded {} queries from {} ({} lines skipped)",
        parsed.records.len(),
        path.display(),
        parsed.skipped
    );
    Ok(parsed)
}

fn load_with<T>(
    path: &Path,
    read: impl FnOnce(BufReader<File>) -> io::Result<Parsed<T>>,
) -> Result<Parsed<T>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read(BufReader::new(file)).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_lines<R, T, F>(mut reader: R, parse: F) -> io::Result<Parsed<T>>
where
    R: BufRead,
    F: Fn(&str) -> Option<T>,
{
    let mut parsed = Parsed::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        // Location names are not guaranteed to be UTF-8.
        let line = String::from_utf8_lossy(&buf);
        match parse(&line) {
            Some(record) => parsed.records.push(record),
            None => {
                if !line.trim().is_empty() {
                    debug!("Skipping malformed line {}: {:?}", line_no, line.trim_end());
                }
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}
