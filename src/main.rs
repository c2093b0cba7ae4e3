//! docblockr: generate and reformat documentation comments.
//!
//! - `docblockr generate -l rust src/lib.rs < following-text`
//! - `docblockr format -l java --in-place Foo.java`
//! - `docblockr tags -l javascript @pa`
//! - `docblockr header -l php --file-name index.php`

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use docblockr::config::Config;
use docblockr::engine;
use docblockr::header::{header_block, HeaderContext};
use docblockr::parser::LanguageParser;
use docblockr::profile::Language;
use docblockr::render::{format, format_header, RenderOptions};
use docblockr::tags::lookup_tags;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "docblockr.toml";

#[derive(Parser)]
#[command(
    name = "docblockr",
    version,
    about = "Generate and reformat documentation comments from source declarations"
)]
struct Cli {
    /// Configuration file (defaults to ./docblockr.toml when present)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Document the declaration at the start of the input
    Generate {
        /// Source language (javascript, typescript, php, java, c, cpp, objc, rust, ruby, swift)
        #[arg(short = 'l', long)]
        lang: String,

        /// Text following the insertion point. Reads stdin if omitted.
        file: Option<PathBuf>,

        /// Print default values instead of ${n:default} snippet placeholders
        #[arg(long)]
        plain: bool,

        /// Print the classified declaration and rows as JSON
        #[arg(long, conflicts_with = "width")]
        json: bool,

        /// Re-flow the block to this many columns
        #[arg(short = 'w', long)]
        width: Option<usize>,
    },

    /// Reformat every docblock in the input
    Format {
        #[arg(short = 'l', long)]
        lang: String,

        /// Source file. Reads stdin if omitted.
        file: Option<PathBuf>,

        /// Wrap width (defaults to the configured wrap-width)
        #[arg(short = 'w', long)]
        width: Option<usize>,

        /// Rewrite the file instead of printing
        #[arg(short = 'i', long, requires = "file")]
        in_place: bool,
    },

    /// List known tags matching a partial name
    Tags {
        #[arg(short = 'l', long)]
        lang: String,

        /// Partially typed tag, e.g. `@pa` or `\brief`
        #[arg(default_value = "")]
        partial: String,

        #[arg(long)]
        json: bool,
    },

    /// Print a file header block
    Header {
        #[arg(short = 'l', long)]
        lang: String,

        /// Replaces the $FILENAME token
        #[arg(long)]
        file_name: Option<String>,

        /// Replaces the $WORKSPACE_NAME token
        #[arg(long)]
        workspace: Option<String>,

        #[arg(long)]
        plain: bool,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Generate {
            lang,
            file,
            plain,
            json,
            width,
        } => generate(&config, &lang, file.as_deref(), !plain, json, width),
        Command::Format {
            lang,
            file,
            width,
            in_place,
        } => reformat(&config, &lang, file.as_deref(), width, in_place),
        Command::Tags { lang, partial, json } => tags(&lang, &partial, json),
        Command::Header {
            lang,
            file_name,
            workspace,
            plain,
        } => header(&config, &lang, file_name, workspace, !plain),
    }
}

/// Log to stderr, filtered by `DOCBLOCKR_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("DOCBLOCKR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None if Path::new(DEFAULT_CONFIG).is_file() => Config::load(Path::new(DEFAULT_CONFIG))
            .with_context(|| format!("failed to load {DEFAULT_CONFIG}")),
        None => Ok(Config::default()),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn parser(config: &Config, lang: &str) -> Result<Box<dyn LanguageParser>> {
    let language: Language = lang.parse()?;
    match engine::parser_for(language.id(), config) {
        Some(parser) => Ok(parser),
        None => bail!("language '{language}' is disabled in the configuration"),
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn generate(
    config: &Config,
    lang: &str,
    file: Option<&Path>,
    placeholders: bool,
    json: bool,
    width: Option<usize>,
) -> Result<()> {
    let parser = parser(config, lang)?;
    let input = read_input(file)?;
    let documented = engine::document(parser.as_ref(), &input);

    if json {
        let out = serde_json::to_string_pretty(&documented).context("failed to serialize")?;
        println!("{out}");
        return Ok(());
    }

    let profile = parser.profile();
    let lines = match documented {
        Some(documented) => {
            let mut options = RenderOptions::new(profile, config, placeholders);
            if let Some(width) = width {
                options = options.with_wrap_width(width);
            }
            format(&documented.block, profile, &options)
        }
        None => engine::fallback_block(profile, placeholders),
    };
    print_lines(&lines);
    Ok(())
}

fn reformat(
    config: &Config,
    lang: &str,
    file: Option<&Path>,
    width: Option<usize>,
    in_place: bool,
) -> Result<()> {
    let parser = parser(config, lang)?;
    let input = read_input(file)?;
    let width = width.unwrap_or(config.wrap_width);
    let output = engine::reformat_all(parser.profile().language.id(), &input, config, width)
        .context("nothing to reformat")?;

    match file {
        Some(path) if in_place => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display())),
        _ => {
            print!("{output}");
            Ok(())
        }
    }
}

fn tags(lang: &str, partial: &str, json: bool) -> Result<()> {
    let language: Language = lang.parse()?;
    let matches = lookup_tags(language, partial);

    if json {
        let out = serde_json::to_string_pretty(&matches).context("failed to serialize")?;
        println!("{out}");
    } else {
        for tag in &matches {
            println!("{}", tag.snippet());
        }
    }
    Ok(())
}

fn header(
    config: &Config,
    lang: &str,
    file_name: Option<String>,
    workspace_name: Option<String>,
    placeholders: bool,
) -> Result<()> {
    let parser = parser(config, lang)?;
    let profile = parser.profile();
    let ctx = HeaderContext {
        year: chrono::Local::now().year(),
        file_name,
        workspace_name,
    };
    let block = header_block(profile, &config.custom_tags, &ctx);
    let options = RenderOptions::new(profile, config, placeholders);
    print_lines(&format_header(&block, profile, &options));
    Ok(())
}
