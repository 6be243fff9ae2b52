//! # portfolix
//!
//! Renders the PortfoliX landing page to static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Write dist/index.html
//! portfolix
//!
//! # Custom output directory
//! portfolix --out public
//!
//! # Print instead of writing
//! portfolix --stdout
//! portfolix --stdout --fragment
//!
//! # Dump the page copy as JSON
//! portfolix --content-json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use portfolix_landing::{landing_content, render_home, render_page, write_site};

#[derive(Parser, Debug)]
#[command(name = "portfolix")]
#[command(about = "Render the PortfoliX landing page to a static site")]
#[command(version)]
struct Args {
    /// Output directory; index.html is written inside it
    #[arg(short, long, default_value = "dist")]
    out: PathBuf,

    /// Print the rendered page to stdout instead of writing a file
    #[arg(long, conflicts_with = "content_json")]
    stdout: bool,

    /// Print only the Home fragment, without <html>/<head> (requires --stdout)
    #[arg(long, requires = "stdout")]
    fragment: bool,

    /// Print the literal page copy as JSON and exit
    #[arg(long)]
    content_json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// What a single invocation produces.
#[derive(Debug, PartialEq, Eq)]
enum Output {
    Site(PathBuf),
    Page,
    Fragment,
    ContentJson,
}

impl Args {
    fn output(&self) -> Output {
        if self.content_json {
            Output::ContentJson
        } else if self.stdout && self.fragment {
            Output::Fragment
        } else if self.stdout {
            Output::Page
        } else {
            Output::Site(self.out.clone())
        }
    }
}

fn init_logging(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn print(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}").context("failed to write to stdout")
}

fn run(args: Args) -> Result<()> {
    let output = args.output();
    debug!(?output, "starting");

    match output {
        Output::Site(out_dir) => {
            let index = write_site(&out_dir)
                .with_context(|| format!("could not render site into {}", out_dir.display()))?;
            info!("open {} or serve the directory with any static server", index.display());
        }
        Output::Page => print(&render_page())?,
        Output::Fragment => print(&render_home())?,
        Output::ContentJson => {
            let json = landing_content()
                .to_json_pretty()
                .context("failed to serialize page content")?;
            print(&json)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[portfolix] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("portfolix").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_dist_site() {
        let args = parse(&[]);
        assert_eq!(args.log_level, "info");
        assert_eq!(args.output(), Output::Site(PathBuf::from("dist")));
    }

    #[test]
    fn stdout_and_fragment_select_printing() {
        assert_eq!(parse(&["--stdout"]).output(), Output::Page);
        assert_eq!(parse(&["--stdout", "--fragment"]).output(), Output::Fragment);
        assert_eq!(parse(&["--content-json"]).output(), Output::ContentJson);
    }

    #[test]
    fn fragment_requires_stdout() {
        let result = Args::try_parse_from(["portfolix", "--fragment"]);
        assert!(result.is_err());
    }

    #[test]
    fn stdout_conflicts_with_content_json() {
        let result = Args::try_parse_from(["portfolix", "--stdout", "--content-json"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_writes_into_out_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("site");
        let args = parse(&["--out", out.to_str().unwrap()]);

        run(args).unwrap();
        assert!(out.join("index.html").is_file());
    }

    #[test]
    fn run_reports_unwritable_out_dir() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "file").unwrap();

        let err = run(parse(&["--out", blocker.to_str().unwrap()])).unwrap_err();
        assert!(format!("{:#}", err).contains("could not render site"));
    }
}
