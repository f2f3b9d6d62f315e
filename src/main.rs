use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use git_cred_prompt::git::{self, GitManager};
use git_cred_prompt::logger;

#[derive(Parser)]
#[command(name = "git-cred-prompt")]
#[command(about = "Run git remote operations with interactive credential prompts", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone a remote repository
    Clone {
        /// Remote git URL
        url: String,

        /// Destination directory
        path: PathBuf,
    },

    /// Fetch from a remote of an existing repository
    Fetch {
        /// Path to the local repository
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Remote name
        #[arg(long, default_value = "origin")]
        remote: String,
    },

    /// Push a branch to a remote of an existing repository
    Push {
        /// Path to the local repository
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Remote name
        #[arg(long, default_value = "origin")]
        remote: String,

        /// Branch to push
        #[arg(short, long)]
        branch: String,
    },

    /// List the references advertised by a remote
    LsRemote {
        /// Remote git URL
        url: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    match cli.command {
        Commands::Clone { url, path } => {
            GitManager::clone(&url, &path)?;
            println!("{}", format!("✓ Cloned into {}", path.display()).green());
        }
        Commands::Fetch { repo, remote } => {
            GitManager::open(&repo)?.fetch(&remote)?;
            println!("{}", format!("✓ Fetched {remote}").green());
        }
        Commands::Push {
            repo,
            remote,
            branch,
        } => {
            GitManager::open(&repo)?
                .push(&remote, &branch)
                .context("Push failed")?;
            println!("{}", format!("✓ Pushed {branch} to {remote}").green());
        }
        Commands::LsRemote { url } => {
            for remote_ref in git::ls_remote(&url)? {
                println!("{}\t{}", remote_ref.oid, remote_ref.name);
            }
        }
    }

    Ok(())
}
