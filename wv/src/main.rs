use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::exit;
use tracing::*;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};
use wordvocab::{
    read_text_file, Abbreviations, TokenizeConfig, Vocabulary, WordTokenizer,
    DEFAULT_MIN_FREQUENCY,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    globals: Globals,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Globals {
    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    debug: u8,
}

#[derive(Args)]
struct TokenizeArgs {
    /// Recognize an extra abbreviation, which keeps its trailing punctuation.
    ///
    /// May be given more than once.  These are added to the built-in list.
    #[arg(long = "abbreviation", value_name = "ABBREVIATION")]
    abbreviations: Vec<String>,

    /// Read extra abbreviations from a file, one per line.  Blank lines are ignored
    #[arg(long, value_name = "FILE")]
    abbreviations_file: Option<PathBuf>,
}

impl TokenizeArgs {
    fn abbreviations(&self) -> anyhow::Result<Abbreviations> {
        let mut extra = self.abbreviations.clone();

        if let Some(path) = &self.abbreviations_file {
            let text = read_text_file(path)?;
            extra.extend(
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string),
            );
        }

        debug!(count = extra.len(), "Extra abbreviations");

        Ok(Abbreviations::default().extended(extra))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a vocabulary from one or more text files and print it, one entry per line
    Vocab {
        #[command(flatten)]
        tokenize: TokenizeArgs,

        /// Words occurring fewer times than this in a file become unknown tokens
        #[arg(long, env = "WORDVOCAB_MIN_FREQUENCY", default_value_t = DEFAULT_MIN_FREQUENCY)]
        min_frequency: usize,

        /// Seed the vocabulary with this token before reading any files.
        ///
        /// May be given more than once.
        #[arg(long = "seed", value_name = "TOKEN")]
        seed: Vec<String>,

        /// Prefix each entry with its position in the vocabulary, and print unknown tokens with
        /// their ids
        #[arg(long)]
        show_ids: bool,

        /// The text files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the tokens of a text file in order, one per line
    Tokenize {
        #[command(flatten)]
        tokenize: TokenizeArgs,

        /// The text file to read
        file: PathBuf,
    },
}

impl Commands {
    fn execute(self, _globals: &Globals) -> anyhow::Result<()> {
        use Commands::*;
        match self {
            Vocab {
                tokenize,
                min_frequency,
                seed,
                show_ids,
                files,
            } => {
                let config = TokenizeConfig {
                    min_frequency,
                    abbreviations: tokenize.abbreviations()?,
                };
                let tokenizer = WordTokenizer::new(config)?;
                let mut vocab = Vocabulary::with_seed(seed)?;

                let mut failed = 0;
                for file in &files {
                    if let Err(e) = tokenize_file(&tokenizer, file, &mut vocab) {
                        // Keep going; one unreadable file shouldn't cost the rest of the vocabulary
                        error!(path = %file.display(), "{:#}", anyhow::Error::from(e));
                        failed += 1;
                    }
                }

                for (position, token) in vocab.iter().enumerate() {
                    if show_ids {
                        println!("{position}\t{token:#}");
                    } else {
                        println!("{token}");
                    }
                }

                info!(
                    files = files.len(),
                    failed,
                    size = vocab.len(),
                    unknown = vocab.unknown_count(),
                    "Built vocabulary"
                );

                if failed > 0 {
                    anyhow::bail!("{failed} of {} files could not be tokenized", files.len());
                }
            }
            Tokenize { tokenize, file } => {
                let config = TokenizeConfig {
                    abbreviations: tokenize.abbreviations()?,
                    ..Default::default()
                };
                let tokenizer = WordTokenizer::new(config)?;
                let text = read_text_file(&file)?;

                for token in tokenizer.fragments(&text) {
                    println!("{token}");
                }
            }
        }

        Ok(())
    }
}

/// Load one file and merge its tokens into `vocab`.  A file that can't be loaded never reaches
/// the tokenizer.
fn tokenize_file(
    tokenizer: &WordTokenizer,
    path: &Path,
    vocab: &mut Vocabulary,
) -> wordvocab::Result<()> {
    let text = read_text_file(path)?;
    tokenizer.tokenize_into(&text, vocab)?;

    debug!(path = %path.display(), size = vocab.len(), "Merged file into vocabulary");

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let default_log_directive = match cli.globals.debug {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // JSON log events go to stderr, leaving stdout for the output itself
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_log_directive.into())
                .from_env_lossy(),
        )
        .json()
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    if let Err(e) = cli.command.execute(&cli.globals) {
        error!("{:#}", e);
        exit(1);
    } else {
        debug!("command executed successfully");
    }
}
