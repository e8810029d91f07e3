//! ngspicer-highlight - print a source file with syntax highlighting

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use ngspicer_highlight::render;
use ngspicer_highlight::{Config, GrammarRegistry, HighlightEngine, Language, Result, ThemeKind};

/// Highlight SPICE netlists, Python, C and Matlab/Octave sources
#[derive(Parser)]
#[command(name = "ngspicer-highlight", version)]
struct Cli {
    /// File to highlight
    file: PathBuf,

    /// Language to use instead of detecting it from the file extension
    #[arg(long)]
    language: Option<String>,

    /// Color theme (Light or Dark)
    #[arg(long)]
    theme: Option<String>,

    /// Configuration file to read instead of ~/.ngspicer.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print styled spans instead of colored text
    #[arg(long)]
    spans: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(name) = &cli.theme {
        config.theme = ThemeKind::from_name(name)?;
    }
    let theme = config.build_theme();

    let language = match &cli.language {
        Some(name) => Language::from_name(name)?,
        None => config.build_selector().detect(&cli.file),
    };
    tracing::debug!(%language, file = %cli.file.display(), "selected language");

    let text = std::fs::read_to_string(&cli.file)?;

    let mut engine = HighlightEngine::new();
    if config.highlighting {
        let registry = GrammarRegistry::new();
        engine.set_grammar(registry.build(language, &theme)?);
    }
    // A final newline ends the last line rather than starting another
    engine.set_text(text.strip_suffix('\n').unwrap_or(&text));

    let mut stdout = io::stdout().lock();
    if cli.spans {
        render::dump_spans(&mut stdout, &engine)
    } else {
        render::render_document(&mut stdout, &engine, &theme)
    }
}
