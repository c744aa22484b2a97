use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use restaurant_pages::{data::WpData, page, render::LayoutOptionsBuilder};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PageKind {
    /// restaurant card grid
    Listing,
    /// single restaurant with its menus
    Detail,
}

/// Render a restaurant page from injected page data.
#[derive(Parser, Debug)]
#[command(name = "render-page", version)]
struct Cli {
    #[arg(value_enum)]
    kind: PageKind,

    /// Page data file, JSON or `var WPData = {...};`. Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Only list restaurants whose name matches this pattern
    #[arg(short, long, default_value = "")]
    search: String,

    #[arg(long)]
    site_title: Option<String>,

    #[arg(long)]
    stylesheet: Option<String>,

    /// Footer year, defaults to the current year
    #[arg(long)]
    year: Option<i32>,
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("fail to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("fail to read stdin")?;
            Ok(raw)
        }
    }
}

/// Blank input means the page had no data object.
fn parse_page_data(raw: &str) -> anyhow::Result<Option<WpData>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    WpData::from_script(raw).map(Some)
}

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_file(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let cli = Cli::parse();

    let mut layout = LayoutOptionsBuilder::default();
    if let Some(title) = cli.site_title {
        layout.site_title(title);
    }
    if let Some(stylesheet) = cli.stylesheet {
        layout.stylesheet(stylesheet);
    }
    if let Some(year) = cli.year {
        layout.copyright_year(year);
    }
    let layout = layout.build()?;

    let raw = read_input(cli.input.as_ref())?;
    let data = parse_page_data(&raw)?;

    let html = match cli.kind {
        PageKind::Listing => page::filtered_listing_page(data.as_ref(), &cli.search, &layout),
        PageKind::Detail => page::detail_page(data.as_ref(), &layout),
    };
    println!("{}", html.into_string());
    Ok(())
}
