//! Marten terminal viewer
//!
//! Prints web pages and local HTML files as Markdown.
//!
//! - marten https://example.com      # Print one page
//! - marten --tree page.html         # Print the parsed DOM tree
//! - marten -i                       # Interactive viewer with history

mod commands;
mod repl;

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use marten_browser::{Browser, BrowserConfig, DEFAULT_HOME_URL, Page, load_document};
use marten_common::net::{Fetch, FetchConfig, HttpFetcher};
use marten_common::url::{has_http_scheme, normalize_user_url};
use marten_common::warning::set_verbose;
use marten_html::{dump_tree, parse_document};
use marten_markdown::RenderOptions;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Marten: a JavaScript-free page viewer that renders HTML as Markdown
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "marten")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print a page as Markdown
    marten example.com

    # Render a local file, resolving relative links against its location
    marten --resolve-links ./index.html

    # Render inline HTML
    marten --html '<h1>Test</h1><p>Hello</p>'

    # Print the DOM tree instead of Markdown
    marten --tree https://example.com

    # Machine-readable output
    marten --json https://example.com

    # Browse interactively
    marten -i https://example.com
"#)]
struct Cli {
    /// Path to HTML file or URL to open
    #[arg(value_name = "FILE|URL")]
    path: Option<String>,

    /// Render HTML string directly instead of file/URL
    #[arg(long, value_name = "HTML", conflicts_with = "interactive")]
    html: Option<String>,

    /// Base URL for --html input
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Resolve relative links and image sources against the page URL
    #[arg(long)]
    resolve_links: bool,

    /// Print the DOM tree instead of Markdown
    #[arg(long, conflicts_with = "json")]
    tree: bool,

    /// Print parser issues after the page
    #[arg(long)]
    issues: bool,

    /// Print a JSON report instead of Markdown
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value = "30")]
    timeout: u64,

    /// Maximum number of redirects to follow
    #[arg(long, value_name = "N", default_value = "10")]
    max_redirects: usize,

    /// Home page for the interactive `home` command
    #[arg(long, value_name = "URL", default_value = DEFAULT_HOME_URL)]
    home: String,

    /// Print progress notes to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Start the interactive viewer
    #[arg(short, long)]
    interactive: bool,
}

/// What `--json` prints.
#[derive(Debug, Serialize)]
struct PageReport<'a> {
    url: &'a str,
    title: Option<&'a str>,
    markdown: &'a str,
    parse_issues: &'a [String],
}

impl<'a> From<&'a Page> for PageReport<'a> {
    fn from(page: &'a Page) -> Self {
        Self {
            url: &page.url,
            title: page.title.as_deref(),
            markdown: &page.markdown,
            parse_issues: &page.parse_issues,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    set_verbose(cli.verbose);

    let config = BrowserConfig {
        home_url: cli.home.clone(),
        fetch: FetchConfig {
            timeout: Duration::from_secs(cli.timeout),
            max_redirects: cli.max_redirects,
            ..FetchConfig::default()
        },
        render: RenderOptions {
            resolve_links: cli.resolve_links,
        },
    };

    if cli.interactive {
        let mut browser = Browser::new(config).context("failed to start the viewer")?;
        return repl::run(&mut browser, cli.path.as_deref());
    }

    let fetcher = HttpFetcher::new(&config.fetch)?;

    if cli.tree {
        let html = read_source(&cli, &fetcher)?;
        let parsed = parse_document(&html)?;
        print!("{}", dump_tree(&parsed.dom));
        if cli.issues {
            print_issues(&parsed.parse_issues);
        }
        return Ok(());
    }

    let page = load_page(&cli, &fetcher, &config.render)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&PageReport::from(&page))?);
        return Ok(());
    }

    print_page(&page);
    if cli.issues {
        print_issues(&page.parse_issues);
    }
    Ok(())
}

/// Local paths that exist are read as files; everything else is an address.
fn resolve_target(path: &str) -> String {
    if has_http_scheme(path) || Path::new(path).exists() {
        path.to_string()
    } else {
        normalize_user_url(path)
    }
}

/// Load and render the page named on the command line
fn load_page(cli: &Cli, fetcher: &HttpFetcher, options: &RenderOptions) -> anyhow::Result<Page> {
    if let Some(ref html) = cli.html {
        let base_url = cli.base_url.as_deref().unwrap_or_default();
        Ok(Page::from_html(html, base_url, options))
    } else if let Some(ref path) = cli.path {
        let target = resolve_target(path);
        load_document(&target, fetcher, options).with_context(|| format!("could not load {target}"))
    } else {
        anyhow::bail!("nothing to show: pass a file path, a URL, --html, or -i")
    }
}

/// Raw HTML named on the command line, for `--tree`
fn read_source(cli: &Cli, fetcher: &HttpFetcher) -> anyhow::Result<String> {
    if let Some(ref html) = cli.html {
        return Ok(html.clone());
    }
    let Some(ref path) = cli.path else {
        anyhow::bail!("nothing to show: pass a file path, a URL, or --html")
    };

    let target = resolve_target(path);
    if has_http_scheme(&target) {
        let fetched = fetcher
            .fetch(&target)
            .with_context(|| format!("could not load {target}"))?;
        Ok(fetched.body)
    } else {
        fs::read_to_string(&target).with_context(|| format!("could not read {target}"))
    }
}

/// Print a page: title banner on stderr, Markdown on stdout.
fn print_page(page: &Page) {
    if let Some(ref title) = page.title {
        eprintln!("{} {}", title.bold(), format!("<{}>", page.url).dimmed());
    }
    println!("{}", page.markdown);
}

fn print_issues(issues: &[String]) {
    if issues.is_empty() {
        return;
    }
    println!("\n=== Parse Issues ===");
    for issue in issues {
        println!("  - {issue}");
    }
}
