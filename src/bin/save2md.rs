//! Command-line host: reads an HTML page, extracts its main content and
//! writes it as a Markdown file.
//!
//! ```text
//! save2md page.html --url https://example.com/post --output-dir notes/
//! curl -s https://example.com/post | save2md --url https://example.com/post
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use save2md::{
    dom, encoding, extract, markdown_filename, Error, Extraction, ImageMode, PageMeta, Result, Settings,
};

#[derive(Parser, Debug)]
#[command(name = "save2md")]
#[command(about = "Save the readable content of a web page as Markdown")]
#[command(version)]
struct Cli {
    /// HTML file to read (stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Page address, used for the header and to resolve relative links
    #[arg(short, long, default_value = "")]
    url: String,

    /// Title for the header and filename (defaults to the page's <title>)
    #[arg(short, long)]
    title: Option<String>,

    /// Settings JSON file ({"includeImages": .., "imageMode": ..})
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Include images
    #[arg(long, overrides_with = "no_images")]
    images: bool,

    /// Leave images out
    #[arg(long, overrides_with = "images")]
    no_images: bool,

    /// How included images are referenced
    #[arg(long, value_enum)]
    image_mode: Option<ImageModeArg>,

    /// Write the Markdown to this file
    #[arg(short, long, value_name = "FILE", conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Write the Markdown into this directory, named after the title
    #[arg(short = 'd', long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Print the extraction (markdown, title, url, images) as JSON
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ImageModeArg {
    /// Keep remote image URLs
    Reference,
    /// Inline images as base64 data URIs
    Datauri,
}

impl From<ImageModeArg> for ImageMode {
    fn from(arg: ImageModeArg) -> Self {
        match arg {
            ImageModeArg::Reference => Self::Reference,
            ImageModeArg::Datauri => Self::DataUri,
        }
    }
}

impl Cli {
    /// Settings file (or defaults) with command-line overrides applied.
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if self.images {
            settings.include_images = true;
        }
        if self.no_images {
            settings.include_images = false;
        }
        if let Some(mode) = self.image_mode {
            settings.image_mode = mode.into();
        }
        Ok(settings)
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                fs::read(path).map_err(|e| Error::io(path, e))
            }
            _ => {
                let mut buf = Vec::new();
                io::stdin().read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        log::error!("{err}");
        eprintln!("save2md: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    let html = encoding::decode_html(&cli.read_input()?);
    let doc = dom::parse(&html);

    let mut page = PageMeta::from_document(&doc, cli.url.clone());
    if let Some(title) = &cli.title {
        page.title.clone_from(title);
    }

    let mut extraction = extract(&doc, &page, &settings.conversion_options(&cli.url));
    if settings.embeds_images() && !extraction.images.is_empty() {
        embed(&mut extraction)?;
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&extraction).map_err(|e| Error::Stream(io::Error::other(e)))?;
        return write_stdout(&json);
    }

    match (&cli.output, &cli.output_dir) {
        (Some(path), _) => write_file(path, &extraction.markdown),
        (None, Some(dir)) => write_file(&dir.join(markdown_filename(&extraction.title)), &extraction.markdown),
        (None, None) => write_stdout(&extraction.markdown),
    }
}

#[cfg(feature = "http")]
fn embed(extraction: &mut Extraction) -> Result<()> {
    let fetcher = save2md::embed::HttpFetcher::new()?;
    extraction.markdown = save2md::embed_images(&extraction.markdown, &extraction.images, &fetcher);
    Ok(())
}

#[cfg(not(feature = "http"))]
fn embed(_extraction: &mut Extraction) -> Result<()> {
    log::warn!("built without the `http` feature; keeping remote image URLs");
    Ok(())
}

fn write_file(path: &Path, markdown: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, markdown).map_err(|e| Error::io(path, e))?;
    log::info!("saved {}", path.display());
    Ok(())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}
