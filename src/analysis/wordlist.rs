//! Candidate wordlists for offline password testing.
//!
//! Combines keywords with years, then adds leet-speak variants, so a
//! user can check whether a password cracker would find their vault
//! password quickly.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::errors::{Result, VaultGuardError};

/// Letter substitutions applied to generated words, in order.
pub const LEET_MAP: [(char, char); 5] = [('a', '@'), ('e', '3'), ('i', '1'), ('o', '0'), ('s', '$')];

/// Build a wordlist from keywords and years.
///
/// For each keyword: the keyword, then `keyword + year` and
/// `KEYWORD + year` for every year.  Afterwards, for every word generated
/// so far and every leet mapping whose letter appears in the lowercased
/// word, the lowercased word with that letter substituted is appended.
/// Duplicates are kept.
pub fn generate<K, Y>(keywords: &[K], years: &[Y]) -> Vec<String>
where
    K: AsRef<str>,
    Y: AsRef<str>,
{
    let mut words = Vec::with_capacity(keywords.len() * (1 + 2 * years.len()));
    for word in keywords {
        let word = word.as_ref();
        words.push(word.to_string());
        for year in years {
            let year = year.as_ref();
            words.push(format!("{word}{year}"));
            words.push(format!("{}{year}", word.to_uppercase()));
        }
    }

    let base_len = words.len();
    for i in 0..base_len {
        let lower = words[i].to_lowercase();
        for (letter, replacement) in LEET_MAP {
            if lower.contains(letter) {
                words.push(lower.replace(letter, &replacement.to_string()));
            }
        }
    }

    words
}

/// Default output name: `wordlist_<YYYYmmdd_HHMMSS>.txt`.
pub fn default_file_name(now: DateTime<Local>) -> String {
    format!("wordlist_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Write one word per line (no trailing newline).
pub fn write_wordlist(path: &Path, words: &[String]) -> Result<()> {
    fs::write(path, words.join("\n")).map_err(|source| VaultGuardError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn combines_keywords_years_and_leet() {
        let words = generate(&["john"], &["2025"]);
        assert_eq!(
            words,
            vec!["john", "john2025", "JOHN2025", "j0hn", "j0hn2025", "j0hn2025"]
        );
    }

    #[test]
    fn each_matching_letter_yields_its_own_variant() {
        let words = generate(&["sea"], &[] as &[&str]);
        assert_eq!(words, vec!["sea", "se@", "s3a", "$ea"]);
    }

    #[test]
    fn substitution_replaces_every_occurrence() {
        let words = generate(&["banana"], &[] as &[&str]);
        assert!(words.contains(&"b@n@n@".to_string()));
    }

    #[test]
    fn no_keywords_no_words() {
        assert!(generate(&[] as &[&str], &["2020"]).is_empty());
    }

    #[test]
    fn default_file_name_is_timestamped() {
        let now = Local.with_ymd_and_hms(2025, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(default_file_name(now), "wordlist_20250309_140507.txt");
    }

    #[test]
    fn write_wordlist_joins_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        write_wordlist(&path, &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb");
    }
}
