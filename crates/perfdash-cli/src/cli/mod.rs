//! CLI for the perfdash dashboard utilities.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use perfdash_core::config::{self, PerfdashConfig};
use perfdash_core::url_model::SchemePolicy;
use std::path::PathBuf;

use commands::{
    run_completions, run_export, run_link, run_man, run_normalize, run_save, run_table,
    LinkArgs, SaveArgs,
};

/// Top-level CLI for perfdash.
#[derive(Debug, Parser)]
#[command(name = "perfdash")]
#[command(about = "perfdash: safe external links and exports for the performance dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize raw URLs into safe absolute links (empty line = rejected).
    Normalize {
        /// Raw URL strings.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Reject every scheme except http/https.
        #[arg(long)]
        web_only: bool,
    },

    /// Render an external link as HTML.
    Link {
        /// Link target (untrusted).
        href: String,
        /// Link text (defaults to the href).
        #[arg(long)]
        text: Option<String>,
        /// CSS class (defaults to `link_class` from config).
        #[arg(long)]
        class: Option<String>,
        /// Title attribute (defaults to the normalized URL).
        #[arg(long)]
        title: Option<String>,
        /// Reject every scheme except http/https.
        #[arg(long)]
        web_only: bool,
    },

    /// Export a performance payload (JSON) as CSV into the download dir.
    Export {
        /// Path to the payload JSON file.
        payload: PathBuf,
        /// Output filename (default: performance-<period>.csv).
        #[arg(long, value_name = "NAME")]
        out: Option<String>,
        /// Directory to save into (overrides config).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Print a performance payload (JSON) as an HTML table fragment.
    Table {
        /// Path to the payload JSON file.
        payload: PathBuf,
    },

    /// Save a local file through the download helper.
    Save {
        /// File to save.
        path: PathBuf,
        /// Suggested filename (default: the file's own name).
        #[arg(long)]
        name: Option<String>,
        /// MIME type tag for the saved content.
        #[arg(long)]
        mime: Option<String>,
        /// Treat the file as UTF-8 text (MIME defaults to `default_mime` from config).
        #[arg(long)]
        text: bool,
        /// Directory to save into (overrides config).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        shell: clap_complete::Shell,
    },

    /// Print the man page.
    Man,
}

/// `--web-only` wins over the configured policy.
fn scheme_policy(cfg: &PerfdashConfig, web_only: bool) -> SchemePolicy {
    if web_only {
        SchemePolicy::WebOnly
    } else {
        cfg.scheme_policy
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Normalize { urls, web_only } => {
                run_normalize(&urls, scheme_policy(&cfg, web_only))
            }
            CliCommand::Link {
                href,
                text,
                class,
                title,
                web_only,
            } => {
                let args = LinkArgs {
                    href,
                    text,
                    class: class.or_else(|| cfg.link_class.clone()),
                    title,
                    policy: scheme_policy(&cfg, web_only),
                };
                run_link(&args)
            }
            CliCommand::Export { payload, out, dir } => {
                let dir = match dir {
                    Some(d) => d,
                    None => cfg.resolve_download_dir()?,
                };
                run_export(&payload, out.as_deref(), &dir, cfg.scheme_policy)
            }
            CliCommand::Table { payload } => {
                run_table(&payload, cfg.scheme_policy, cfg.link_class.as_deref())
            }
            CliCommand::Save {
                path,
                name,
                mime,
                text,
                dir,
            } => {
                let args = SaveArgs {
                    dir: match dir {
                        Some(d) => d,
                        None => cfg.resolve_download_dir()?,
                    },
                    mime: if text {
                        mime.or_else(|| Some(cfg.default_mime.clone()))
                    } else {
                        mime
                    },
                    path,
                    name,
                    text,
                };
                run_save(&args)
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man(),
        }
    }
}

#[cfg(test)]
mod tests;
