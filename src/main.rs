//! Command-line front end: export a saved listing page

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::warn;

use listing_export::sink::{FileSink, Sink, WriterSink};
use listing_export::{export_html, is_item_page, ExportConfig, Locale};

#[derive(Parser, Debug)]
#[command(name = "listing-export", version, about = "Export a Mercari listing page to Markdown")]
struct Cli {
    /// Saved HTML of the item page
    html_file: PathBuf,

    /// Address the page was captured from
    #[arg(long)]
    url: String,

    /// Write `<prefix>_<title>_<timestamp>.md` into this directory instead of stdout
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the extracted item as JSON instead of Markdown
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = LocaleArg::Ja)]
    locale: LocaleArg,

    #[arg(long, default_value_t = 540, allow_negative_numbers = true)]
    utc_offset_minutes: i32,

    #[arg(long, default_value = "mercari")]
    prefix: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LocaleArg {
    Ja,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Ja => Locale::Ja,
            LocaleArg::En => Locale::En,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_export=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if !is_item_page(&cli.url) {
        warn!(url = %cli.url, "not a Mercari item page, extraction may be incomplete");
    }

    let html = std::fs::read_to_string(&cli.html_file)
        .with_context(|| format!("failed to read {}", cli.html_file.display()))?;

    let config = ExportConfig {
        locale: cli.locale.into(),
        utc_offset_minutes: cli.utc_offset_minutes,
        filename_prefix: cli.prefix,
        ..ExportConfig::default()
    };

    let export = export_html(&html, &cli.url, &config).context("export failed")?;

    let (document, filename) = if cli.json {
        let name = PathBuf::from(&export.filename).with_extension("json");
        (
            serde_json::to_string_pretty(&export.item)?,
            name.to_string_lossy().into_owned(),
        )
    } else {
        (export.markdown, export.filename)
    };

    let written = match cli.out_dir {
        Some(dir) => FileSink::new(dir).deliver(&document, &filename)?,
        None => WriterSink::new(io::stdout().lock()).deliver(&document, &filename)?,
    };
    if let Some(path) = written {
        eprintln!("{}", path.display());
    }

    Ok(())
}
