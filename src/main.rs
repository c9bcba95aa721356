use anyhow::{Result, bail};
use clap::Parser;

use docs_tl::cli::commands::{cache, translate};
use docs_tl::cli::{Args, Command};
use docs_tl::config::ResolveOptions;
use docs_tl::output::{self, OutputConfig};
use docs_tl::translation::print_languages;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "docs_tl=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });
    init_logging(args.verbose);

    let resolve = ResolveOptions {
        from: args.from,
        to: args.to,
        cache_dir: args.cache_dir,
    };

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Cache { action }) => {
            let options = cache::CacheOptions {
                action,
                config: args.config,
                resolve,
            };
            cache::run_cache(&options)?;
        }
        None => {
            let (Some(src_dir), Some(dest_dir)) = (args.src_dir, args.dest_dir) else {
                bail!(
                    "Error: Missing source or destination directory\n\n\
                     Usage: docs-tl <SRC_DIR> <DEST_DIR> [--files <NAME>...]\n\
                     Run 'docs-tl --help' for all options."
                );
            };

            let options = translate::TranslateOptions {
                src_dir,
                dest_dir,
                files: args.files,
                config: args.config,
                resolve,
                keep_going: args.keep_going,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
