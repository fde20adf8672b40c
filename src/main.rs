/*!
Main binary for jsonindex.
*/

use anyhow::{Context, Result, bail};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, info};
use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};
use std::path::PathBuf;

use jsonindex::commands::generate;
use jsonindex::display::{DisplayOptions, write_document};
use jsonindex::{IndexBuilder, JsonIndex, Tokenizer, WordChars, loader};

/// Search an array of JSON documents for exact words.
#[derive(Parser)]
#[command(
    name = "ji",
    version,
    about,
    long_about = None,
    arg_required_else_help = true,
    disable_help_subcommand = true
)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    /// Path to a JSON file holding an array of objects. Use "-" to read from
    /// STDIN
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
    /// Words to search for. If omitted, words are read from STDIN, one per
    /// line, until "exit"
    #[arg(value_name = "TERM")]
    terms: Vec<String>,
    /// Treat accented letters and other scripts as word characters
    #[arg(long, action = ArgAction::SetTrue)]
    unicode: bool,
    /// Print the ids of matching documents instead of the documents
    #[arg(long, action = ArgAction::SetTrue)]
    ids: bool,
    /// Print the number of matching documents
    #[arg(long, action = ArgAction::SetTrue)]
    count: bool,
    /// Do not pretty-print the matched documents, instead use compact
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,
    /// Omit members with this key from displayed documents (repeatable)
    #[arg(long = "skip-key", value_name = "KEY")]
    skip_keys: Vec<String>,
    /// Print document and term counts after indexing
    #[arg(long, action = ArgAction::SetTrue)]
    stats: bool,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Available subcommands for `ji`
#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate man pages to the output directory if specified, else the
    /// current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Entry point for main binary.
///
/// Loads the document array from FILE (or STDIN), builds the index, and
/// answers each TERM in turn. Without TERMs, terms are read line by line from
/// STDIN until "exit", "quit", or end of input.
fn main() -> Result<()> {
    let mut args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    match args.command.take() {
        Some(Commands::Generate(GenerateCommand::Shell { shell })) => {
            let mut cmd = Args::command();
            let mut out = io::stdout().lock();
            generate::write_completions(shell, &mut cmd, &mut out);
            Ok(())
        }
        Some(Commands::Generate(GenerateCommand::Man { output_dir })) => {
            let written =
                generate::write_man_pages(&Args::command(), output_dir)?;
            for path in written {
                println!("Generated: {}", path.display());
            }
            Ok(())
        }
        None => run(&args),
    }
}

fn run(args: &Args) -> Result<()> {
    let file = args.input.as_deref().filter(|path| path.as_os_str() != "-");
    let root = match file {
        Some(path) => loader::load_path(path).with_context(|| {
            format!("Failed to load documents from {}", path.display())
        })?,
        None => {
            if io::stdin().is_terminal() {
                // No piped input and no file specified
                let mut cmd = Args::command();
                return Ok(cmd.print_help()?);
            }
            if args.input.is_none() {
                bail!(
                    "no FILE given; pass \"-\" as FILE to read documents \
                     from STDIN, e.g. `ji - TERM`"
                );
            }
            if args.terms.is_empty() {
                bail!(
                    "search terms are required when documents are read from \
                     STDIN"
                );
            }
            loader::load_reader(io::stdin().lock())
                .context("Failed to load documents from STDIN")?
        }
    };

    let word_chars = if args.unicode {
        WordChars::Unicode
    } else {
        WordChars::Ascii
    };
    let builder = IndexBuilder::new(Tokenizer::new(word_chars));
    let index = JsonIndex::from_root_with(builder, &root)
        .context("Failed to build index")?;
    info!("indexed {} documents", index.len());

    let options = DisplayOptions {
        pretty: !args.compact,
        skip_keys: args.skip_keys.clone(),
    };
    let mut out = io::stdout().lock();

    if args.stats {
        let stats = format!(
            "Documents: {}\nTerms: {}\nPostings: {}",
            index.len(),
            index.index().term_count(),
            index.index().posting_count()
        );
        ignore_broken_pipe(writeln!(out, "{stats}"))?;
    }

    if !args.terms.is_empty() {
        for term in &args.terms {
            answer(&index, term, args, &options, &mut out)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            let prompt = write!(out, "search> ").and_then(|()| out.flush());
            ignore_broken_pipe(prompt)?;
        }
        let Some(line) = lines.next() else { break };
        let line = line.context("Failed to read search term")?;
        let term = line.trim();
        match term {
            "" => {}
            "exit" | "quit" => break,
            term => answer(&index, term, args, &options, &mut out)?,
        }
    }
    Ok(())
}

/// Write the result of searching `term` to `out`.
fn answer<W: Write>(
    index: &JsonIndex<'_>,
    term: &str,
    args: &Args,
    options: &DisplayOptions,
    out: &mut W,
) -> Result<()> {
    let ids = index.search_ids(term);
    debug!("'{term}' matched {} documents", ids.len());

    if args.count {
        ignore_broken_pipe(writeln!(out, "Found matches: {}", ids.len()))?;
    }

    if args.ids {
        let ids = serde_json::to_string(&ids)?;
        return ignore_broken_pipe(writeln!(out, "{ids}"));
    }

    if args.count {
        return Ok(());
    }

    if ids.is_empty() {
        let miss = writeln!(out, "No matching documents for '{term}'.");
        ignore_broken_pipe(miss)?;
        if let Some(suggestion) = index.suggest(term) {
            ignore_broken_pipe(writeln!(out, "Did you mean '{suggestion}'?"))?;
        }
        return Ok(());
    }

    for doc in ids {
        if let Some(value) = index.document(doc) {
            write_document(out, doc, value, options)?;
        }
    }
    Ok(())
}

/// Treat a closed stdout as success so `ji ... | head` exits cleanly.
fn ignore_broken_pipe(result: io::Result<()>) -> Result<()> {
    match result {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other.context("write to stdout"),
    }
}
