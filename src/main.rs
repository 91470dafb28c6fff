use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ci_version::collector::collect_versions;
use ci_version::git::GitRepo;
use ci_version::manifest::{self, ManifestKind};
use ci_version::resolver;
use ci_version::ui;
use ci_version::CiVersionError;

#[derive(clap::Parser)]
#[command(
    name = "ci-version",
    about = "Compute the next semantic version for a repository from its git tags"
)]
struct Args {
    #[arg(short, long, default_value = ".", help = "Repository directory")]
    repository: PathBuf,

    #[arg(
        short,
        long,
        value_parser = ["package.json", "composer.json"],
        help = "Stay compatible with the version in the specified manifest file"
    )]
    compatible_with: Option<String>,

    #[arg(
        short,
        long,
        default_value = ".",
        help = "Directory containing the manifest file, relative to the repository root"
    )]
    path: PathBuf,

    #[arg(
        long,
        default_value = "",
        help = "Tag prefix to filter on and re-apply to the result"
    )]
    prefix: String,

    #[arg(
        short,
        long,
        help = "Print the next version even if the current commit is already tagged"
    )]
    next: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match run(&args) {
        Ok(version) => {
            // Empty line means no new version is needed.
            println!("{}", version.unwrap_or_default());
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> ci_version::Result<Option<String>> {
    let repo = GitRepo::open(&args.repository)?;
    let mut sets = collect_versions(&repo, &args.prefix)?;

    // --next asks for the hypothetical next version: resolve as if the
    // current commit carried no version tag yet.
    if args.next {
        sets.current.clear();
    }

    match &args.compatible_with {
        Some(name) => {
            let kind: ManifestKind = name.parse().map_err(CiVersionError::ManifestParse)?;
            let baseline = manifest::read_baseline(&args.repository, &args.path, kind)?;
            let resolved = resolver::compatible_version(&sets, &baseline)?;
            Ok(resolved.map(|v| v.to_string()))
        }
        None => Ok(resolver::global_version(&sets, &args.prefix)),
    }
}
