//! `vaultguard wordlist` — write a keyword/year wordlist for offline testing.
//!
//! Usage:
//!   vaultguard wordlist -k john,dog -y 2020,2025
//!   vaultguard wordlist -k admin -y 2024 -o words.txt

use std::path::PathBuf;

use chrono::Local;

use crate::analysis::wordlist;
use crate::cli::{output, split_csv};
use crate::errors::{Result, VaultGuardError};

/// Execute the `wordlist` command.
pub fn execute(keywords: &str, years: &str, output_path: Option<&str>) -> Result<()> {
    let keywords = split_csv(keywords);
    let years = split_csv(years);
    if keywords.is_empty() || years.is_empty() {
        return Err(VaultGuardError::CommandFailed(
            "both --keywords and --years need at least one value".into(),
        ));
    }

    let words = wordlist::generate(&keywords, &years);

    let path = output_path.map_or_else(
        || PathBuf::from(wordlist::default_file_name(Local::now())),
        PathBuf::from,
    );
    wordlist::write_wordlist(&path, &words)?;

    tracing::info!(
        entries = words.len(),
        file = %path.display(),
        "generated wordlist"
    );
    output::success(&format!(
        "Generated {} candidates in {}",
        words.len(),
        path.display()
    ));
    output::tip(&format!(
        "Use with tools like Hashcat: hashcat -a 0 -m 100 hashes.txt {}",
        path.display()
    ));

    Ok(())
}
