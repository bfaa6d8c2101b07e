//! `vaultguard completions` — print a shell completion script.
//!
//! Usage:
//!   vaultguard completions bash > ~/.local/share/bash-completion/completions/vaultguard
//!   vaultguard completions zsh > ~/.zfunc/_vaultguard

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    write_completions(shell, &mut io::stdout().lock())
}

/// Render the completion script for `shell` into `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "vaultguard", out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_mentions_every_subcommand() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf).unwrap();
        let script = String::from_utf8(buf).unwrap();

        for sub in ["encrypt", "decrypt", "analyze", "wordlist", "completions"] {
            assert!(script.contains(sub), "missing {sub}");
        }
    }

    #[test]
    fn zsh_script_is_named_for_the_binary() {
        let mut buf = Vec::new();
        write_completions(Shell::Zsh, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("vaultguard"));
    }
}
