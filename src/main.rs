use clap::Parser;
use vaultguard::cli::{commands, Cli, Commands};
use vaultguard::config::Settings;
use vaultguard::errors::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        vaultguard::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completion scripts need neither settings nor a log file.
    if let Commands::Completions { shell } = cli.command {
        return commands::completions::execute(shell);
    }

    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    // Created once, kept alive until exit so the log file gets flushed.
    let log = vaultguard::logging::init(&settings)?;
    log.install_global()?;
    tracing::info!(command = cli.command.name(), "session started");

    let result = match cli.command {
        Commands::Encrypt {
            ref file,
            remove_source,
        } => commands::encrypt::execute(&settings, &log, file, remove_source),
        Commands::Decrypt {
            ref file,
            ref output,
            stdout,
        } => commands::decrypt::execute(&settings, &log, file, output.as_deref(), stdout),
        Commands::Analyze { ref password } => commands::analyze::execute(password.as_deref()),
        Commands::Wordlist {
            ref keywords,
            ref years,
            ref output,
        } => commands::wordlist::execute(keywords, years, output.as_deref()),
        Commands::Completions { .. } => Ok(()),
    };

    match &result {
        Ok(()) => tracing::info!(command = cli.command.name(), "command succeeded"),
        Err(e) => tracing::error!(
            command = cli.command.name(),
            error = e.kind(),
            "command failed"
        ),
    }

    result
}
