//! xtask - Development tasks for usagi

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, Shell};
use std::fs;
use std::path::Path;
use usagi::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for usagi")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs,

    /// Write shell completion scripts for packaging
    GenCompletions,
}

/// Commands typed at the interactive prompt, appended to the generated reference
const INTERACTIVE_REFERENCE: &str = r#"
## Interactive prompt

Running `usagi` without a subcommand reads one command per line:

| Command | Example |
|---|---|
| `list` | `list` |
| `todo <title>` | `todo read book` |
| `deadline <title> /by <date-time>` | `deadline return book /by 2/12/2019 1800` |
| `event <title> /from <date-time> /to <date-time>` | `event party /from 2023-12-24 0900 /to 2023-12-26 1000` |
| `recurring <title> /from <date-time> /to <date-time> /every <pattern> [interval]` | `recurring standup /from 2024-01-01 0900 /to 2024-01-01 0915 /every weekly 2` |
| `mark <n>`, `unmark <n>`, `delete <n>` | `mark 1` |
| `find <keyword>` | `find book` |
| `on <date>` | `on 25/12/2023` |
| `advance [n]` | `advance 3` |
| `upcoming [days]` | `upcoming 14` |
| `bye` | `bye` |

Dates are `yyyy-MM-dd`, `d/M/yyyy` or `M/d/yyyy` (day-first wins when both
fit); date-times add ` HHmm` or use ISO `yyyy-MM-ddTHH:mm`.
"#;

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs => generate_cli_docs(),
        Commands::GenCompletions => generate_completions(),
    }
}

fn generate_cli_docs() {
    let mut markdown = clap_markdown::help_markdown::<Cli>();
    markdown.push_str(INTERACTIVE_REFERENCE);

    let docs_dir = Path::new("docs/cli");
    fs::create_dir_all(docs_dir).expect("Failed to create docs/cli directory");

    let output_path = docs_dir.join("reference.md");
    fs::write(&output_path, markdown).expect("Failed to write CLI reference");

    println!("Generated CLI documentation at {}", output_path.display());
}

fn generate_completions() {
    let out_dir = Path::new("target/completions");
    fs::create_dir_all(out_dir).expect("Failed to create target/completions directory");

    let mut command = Cli::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let path = generate_to(shell, &mut command, "usagi", out_dir)
            .expect("Failed to write completion script");
        println!("Generated {} completions at {}", shell, path.display());
    }
}
