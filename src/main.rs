use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use conjugue::{output, Config, Mode, Tables, Tense};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// A verb to show a table of conjugations for, or a file with one verb per
    /// line to list every conjugated form of.
    #[arg(name = "input")]
    input: String,
    /// Treat the input as a file of verbs.
    #[arg(long)]
    file: bool,
    /// Only show the specified tense. Can be used multiple times. Accepts
    /// `present`, `imperfect`, `future`, `simple-past`, `conditional` or the
    /// French name of the tense.
    #[arg(long = "tense", name = "tense")]
    tenses: Vec<Tense>,
    /// Text to show in place of forms which don't exist. Defaults to "-".
    #[arg(long)]
    placeholder: Option<String>,
    /// Load configuration from the given path.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Show the table in question form, like `mangé-je ?`.
    #[arg(long)]
    interrogative: bool,
    /// Show the rule which matched the verb in each tense.
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let mut config = Config::load(args.config.as_deref())?;

    if !args.tenses.is_empty() {
        config.tenses = args.tenses;
    }

    if let Some(placeholder) = args.placeholder {
        config.placeholder = placeholder;
    }

    let tables = Tables::new();

    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    let path = Path::new(&args.input);

    if args.file || path.is_file() {
        let data = fs::read_to_string(path).with_context(|| anyhow!("{}", path.display()))?;

        for line in data.lines() {
            let verb = line.trim().to_lowercase();

            if verb.is_empty() {
                continue;
            }

            if output::write_forms(&mut o, &tables, &verb, config.tenses())? == 0 {
                tracing::warn!(%verb, "Unknown verb");
            }
        }
    } else {
        let verb = args.input.trim().to_lowercase();

        if output::is_unknown(&tables, &verb, config.tenses()) {
            writeln!(o, "nothing for `{verb}`")?;
            return Ok(());
        }

        if args.explain {
            output::write_rules(&mut o, &tables, &verb, config.tenses())?;
            writeln!(o)?;
        }

        output::write_table(
            &mut o,
            &tables,
            &verb,
            config.tenses(),
            Mode::from_interrogative(args.interrogative),
            &config.placeholder,
        )?;
    }

    o.flush()?;
    Ok(())
}
