use anyhow::Result;
use bosque::LogDisplayFormat;
use bosque::areas::repository::Repository;
use bosque::artifacts::branch::branch_name::BranchName;
use bosque::artifacts::core::{PagerWriter, page_all, should_page};
use bosque::commands::show::ShowOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bosque",
    version = "0.1.0",
    about = "A reflog viewer for git branches",
    long_about = "This tool renders the reflog of a git branch as a formatted document. \
    It locates the repository by walking ancestor directories upward from a starting path, \
    reads the branch's reflog file, and renders each entry with author, date, and message.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "show",
        about = "Render the reflog of a branch",
        long_about = "This command locates the repository containing the given path (the current \
        directory by default), reads the reflog of the selected branch, and renders every valid \
        entry. Malformed log lines are skipped."
    )]
    Show {
        #[arg(index = 1, help = "The path to start the repository search from")]
        path: Option<String>,
        #[arg(
            short,
            long,
            default_value = "main",
            help = "The branch whose reflog to render"
        )]
        branch: String,
        #[arg(
            short,
            long,
            value_enum,
            default_value = "html",
            help = "The output format"
        )]
        format: LogDisplayFormat,
        #[arg(
            short,
            long,
            help = "Write the rendered document to a file instead of stdout"
        )]
        output: Option<String>,
    },
    #[command(
        name = "branches",
        about = "List branches that have a reflog",
        long_about = "This command locates the repository containing the given path and lists \
        every branch with a reflog, one per line."
    )]
    Branches {
        #[arg(index = 1, help = "The path to start the repository search from")]
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Show {
            path,
            branch,
            format,
            output,
        } => {
            let start = resolve_start_path(path)?;
            let opts = ShowOptions {
                branch: BranchName::try_parse(branch.clone())?,
                format: *format,
            };

            match output {
                Some(output) => {
                    let file = std::fs::File::create(output)?;
                    Repository::discover(&start, Box::new(file))?.show(&opts)?
                }
                None if opts.format == LogDisplayFormat::Text && should_page() => {
                    let pager = minus::Pager::new();
                    let repository =
                        Repository::discover(&start, Box::new(PagerWriter::new(pager.clone())))?;

                    repository.show(&opts)?;
                    page_all(pager)?
                }
                None => Repository::discover(&start, Box::new(std::io::stdout()))?.show(&opts)?,
            }
        }
        Commands::Branches { path } => {
            let start = resolve_start_path(path)?;
            let repository = Repository::discover(&start, Box::new(std::io::stdout()))?;

            repository.branches()?
        }
    }

    Ok(())
}

fn resolve_start_path(path: &Option<String>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(std::env::current_dir()?),
    }
}
