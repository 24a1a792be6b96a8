//! Dictionary assembly and persistence.
//!
//! Takes the surviving segments, orders them by byte value, and writes
//! one entry per line, overwriting any previous file at the destination.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the dictionary to `path`, sorted ascending, one word per line.
///
/// Returns the number of unique entries written. The destination is
/// truncated if it already exists.
pub fn write_dictionary(words: &HashSet<String>, path: &Path) -> io::Result<usize> {
    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for word in &sorted {
        writeln!(writer, "{word}")?;
    }
    writer.flush()?;

    Ok(sorted.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn words(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_entries_written_sorted_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordlist.txt");

        let count = write_dictionary(&words(&["zeta", "admin", "api"]), &path).unwrap();

        assert_eq!(count, 3);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "admin\napi\nzeta\n");
    }

    #[test]
    fn test_existing_file_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordlist.txt");
        fs::write(&path, "stale content\nmore stale\n").unwrap();

        write_dictionary(&words(&["fresh"]), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("wordlist.txt");

        assert!(write_dictionary(&words(&["word"]), &path).is_err());
    }
}
