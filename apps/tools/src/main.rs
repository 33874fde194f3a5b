use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::{Profile, Section, PROFILE_FILE_NAME};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Inspect and validate PurismCV profile documents")]
struct Cli {
    /// Directory holding profile.json; defaults to the viewer's data dir.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a document strictly and report what it contains.
    Check { path: Option<PathBuf> },
    /// Print the display text of one section.
    Section {
        section: Section,
        #[arg(long)]
        path: Option<PathBuf>,
        /// Use the built-in default profile when the document cannot be loaded.
        #[arg(long)]
        fallback: bool,
    },
    /// Print the built-in default profile as JSON.
    Default,
}

impl Cli {
    fn document_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }
        let data_dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .context("unable to resolve app data dir")?
                .join("purism-cv"),
        };
        Ok(data_dir.join(PROFILE_FILE_NAME))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Check { path } => {
            let path = cli.document_path(path.clone())?;
            let profile = Profile::load(&path)
                .with_context(|| format!("profile document {} is not usable", path.display()))?;
            println!("ok: {}", path.display());
            println!("name={} email={} phone={}", profile.name, profile.email, profile.phone);
            println!("skills={}", profile.skills.len());
            for section in Section::ALL {
                println!(
                    "{section}: {} fragment(s), {} char(s)",
                    profile.section(section).fragments().len(),
                    profile.section_text(section).chars().count()
                );
            }
        }
        Command::Section {
            section,
            path,
            fallback,
        } => {
            let path = cli.document_path(path.clone())?;
            let profile = if *fallback {
                shared::load_or_default(&path).profile
            } else {
                Profile::load(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?
            };
            print!("{}", profile.section_text(*section));
        }
        Command::Default => {
            println!(
                "{}",
                serde_json::to_string_pretty(&Profile::builtin_default())?
            );
        }
    }

    Ok(())
}
