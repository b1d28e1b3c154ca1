use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_release_note::boundary::BoundaryNotice;
use git_release_note::cli::{self, RunArgs};
use git_release_note::config;
use git_release_note::git::{CommitRange, Git2Repository};
use git_release_note::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-release-note",
    version,
    about = "Suggest the next version and a tag message from conventional commits"
)]
struct Args {
    /// Tag to start from (defaults to the latest reachable tag)
    from_tag: Option<String>,

    /// Version to propose instead of the inferred one
    target_version: Option<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match config::load_config(None) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let run_args = RunArgs {
        from_tag: args.from_tag,
        target_version: args.target_version,
    };

    // Without a repository there is no history to analyze, which is not a failure
    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_notice(&BoundaryNotice::HistoryUnavailable {
                range: CommitRange::from_boundary(run_args.from_tag.as_deref()),
                reason: e.to_string(),
            });
            return Ok(());
        }
    };

    let outcome = cli::run(&run_args, &config, &repo);
    ui::display_outcome(&outcome, &config.output)?;

    Ok(())
}
