//! One module per subcommand, each exposing `execute`.

pub mod analyze;
pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod wordlist;
