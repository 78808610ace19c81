//! socsignals - render and inspect article documents

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use socsignals::document::stats;
use socsignals::export::{Exporter, HtmlExporter, TextExporter};
use socsignals::{Document, HtmlConfig, generate_slug};

#[derive(Parser)]
#[command(name = "socsignals")]
#[command(version, about = "Render and inspect SOCSignals article documents", long_about = None)]
#[command(after_help = "EXAMPLES:
    socsignals render article.json                 Print the HTML fragment
    socsignals render article.json -o out.html -s  Write a standalone page
    socsignals slug \"Hello, World!\"                Print the URL slug
    socsignals stats article.json                  Show word count and read time")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log render diagnostics (skipped blocks) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render a document to HTML or plain text
    Render {
        /// Document JSON file
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Wrap HTML output in a complete page
        #[arg(short, long)]
        standalone: bool,

        /// Page title for standalone output
        #[arg(short, long, default_value = "")]
        title: String,

        /// Stylesheet to link from standalone output
        #[arg(long, value_name = "HREF")]
        stylesheet: Option<String>,

        /// CSS class for heading elements
        #[arg(long, value_name = "CLASS")]
        heading_class: Option<String>,

        /// CSS class for code listings
        #[arg(long, value_name = "CLASS")]
        code_class: Option<String>,

        /// Put each block on its own line
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print the URL slug for a title
    Slug {
        /// Article title
        #[arg(value_name = "TITLE")]
        title: String,
    },
    /// Show block count, word count, read time, and excerpt
    Stats {
        /// Document JSON file
        #[arg(value_name = "INPUT")]
        input: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Render {
            input,
            output,
            format,
            standalone,
            title,
            stylesheet,
            heading_class,
            code_class,
            pretty,
        } => {
            let config = HtmlConfig {
                heading_class,
                code_class,
                pretty,
            };
            let mut exporter = HtmlExporter::with_config(config);
            if standalone {
                exporter = exporter.standalone(title);
            }
            if let Some(href) = stylesheet {
                exporter = exporter.with_stylesheet(href);
            }
            render(&input, output.as_deref(), format, &exporter)
        }
        Command::Slug { title } => {
            println!("{}", generate_slug(&title));
            Ok(())
        }
        Command::Stats { input } => show_stats(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "socsignals=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn load(path: &str) -> socsignals::Result<Document> {
    let bytes = fs::read(path)?;
    Document::from_bytes(&bytes)
}

fn render(
    input: &str,
    output: Option<&str>,
    format: Format,
    html: &HtmlExporter,
) -> socsignals::Result<()> {
    let doc = load(input)?;

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        Format::Html => html.export(&doc, &mut writer)?,
        Format::Text => TextExporter::new().export(&doc, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

fn show_stats(path: &str) -> socsignals::Result<()> {
    let doc = load(path)?;
    let rendered = doc.nodes().count();

    println!("File: {path}");
    println!("Blocks: {} ({} rendered)", doc.len(), rendered);
    println!("Words: {}", stats::word_count(&doc));
    println!("Read time: {} min", stats::read_time_minutes(&doc));
    if let Some(excerpt) = stats::excerpt(&doc, 160) {
        println!("Excerpt: {excerpt}");
    }

    Ok(())
}
