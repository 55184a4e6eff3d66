use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use rollback_git::areas::repository::Repository;
use rollback_git::artifacts::revert::walker::WalkOutcome;
use rollback_git::commands::porcelain::rollback::RollbackOptions;

#[derive(Parser)]
#[command(
    name = "rollback_git",
    version,
    author = "Paul Durivage",
    about = "Reverts commits in a git branch from HEAD to an arbitrary tag",
    long_about = "Walks the history of a branch from its head down to a tag and reverts \
    every commit in between, newest first. Commits that are already reverts, and the \
    commits they undid, are skipped. Merge commits are reverted relative to their first \
    parent.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
{all-args}
"
)]
struct Cli {
    #[arg(
        short,
        long,
        default_value = "master",
        help = "Branch on which to add reverts"
    )]
    branch: String,
    #[arg(
        short,
        long,
        default_value = "prod",
        help = "Tag at which to stop reverting"
    )]
    tag: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let pwd = std::env::current_dir()?;
    let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    let opts = RollbackOptions {
        branch: cli.branch,
        tag: cli.tag,
    };

    if let WalkOutcome::ResolutionFailed(message) = repository.rollback(&opts)? {
        eprintln!("{}", message);
        std::process::exit(1);
    }

    Ok(())
}
