use std::{env, path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use locale_kit::{
    catalog, Config, LocaleCatalogEntry, LocaleCollection, LocaleResolver, MemoryNavigator,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "locale-kit", version)]
#[command(about = "Translate keys from locale dictionaries and browse locale metadata.", long_about = None)]
struct Cli {
    /// The config file. Default to `locale.toml` in the current directory.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Print debug logs.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Translate a key.
    #[command(arg_required_else_help = true)]
    Translate {
        /// The translation key.
        key: String,
        /// The locale to translate to. Default to the configured locale.
        #[arg(short, long)]
        locale: Option<String>,
        /// The value replacing the `$$$` placeholder.
        #[arg(long)]
        value: Option<String>,
    },
    /// List the locales with a dictionary.
    Locales,
    /// Show the locale catalog, or a single entry of it.
    Catalog {
        /// The locale code, such as `fr_FR`.
        code: Option<String>,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Switch to another locale and print the new route.
    #[command(arg_required_else_help = true)]
    Switch {
        /// The target locale code.
        locale: String,
        /// The current path. Default to the configured path.
        #[arg(short, long)]
        path: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Translate { key, locale, value } => {
            let config = load_config(cli.config)?;
            let resolver = build_resolver(&config, locale, None)?;
            println!("{}", resolver.resolve(&key, value.as_deref()));
        }
        Commands::Locales => {
            let config = load_config(cli.config)?;
            let resolver = build_resolver(&config, None, None)?;
            for code in resolver.available_locales() {
                match catalog::lookup(code) {
                    Some(entry) => println!("{code}\t{} {}", entry.flag, entry.language),
                    None => println!("{code}"),
                }
            }
        }
        Commands::Catalog { code, json } => {
            let entries: Vec<&LocaleCatalogEntry> = match code {
                Some(code) => match catalog::lookup(&code) {
                    Some(entry) => vec![entry],
                    None => {
                        eprintln!("Unknown locale code: `{code}`");
                        return Ok(ExitCode::FAILURE);
                    }
                },
                None => catalog::all_entries().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    println!(
                        "{}\t{} {} ({})",
                        entry.code,
                        entry.flag,
                        entry.language,
                        entry.countries.join(", ")
                    );
                }
            }
        }
        Commands::Switch { locale, path } => {
            let config = load_config(cli.config)?;
            let navigator = Arc::new(navigator(&config, None, path));
            let resolver = build_resolver(&config, None, Some(navigator.clone()))?;
            resolver.change_locale(&locale)?;
            println!("{}", serde_json::to_string_pretty(&navigator.route())?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(&path),
        None => Config::locate(&env::current_dir()?),
    }
}

fn navigator(config: &Config, locale: Option<String>, path: Option<String>) -> MemoryNavigator {
    let navigator = MemoryNavigator::new(path.unwrap_or_else(|| config.path.clone()));
    match locale.or_else(|| config.locale.clone()) {
        Some(locale) => navigator.with_locale(locale),
        None => navigator,
    }
}

fn build_resolver(
    config: &Config,
    locale: Option<String>,
    navigator: Option<Arc<MemoryNavigator>>,
) -> Result<LocaleResolver> {
    let dictionaries = if config.dictionaries.exists() {
        LocaleCollection::load_dir(&config.dictionaries).with_context(|| {
            format!(
                "Failed to set up locales from `{}`",
                config.dictionaries.display()
            )
        })?
    } else {
        tracing::warn!(
            dir = %config.dictionaries.display(),
            "dictionary directory not found"
        );
        LocaleCollection::default()
    };
    let navigator = navigator.unwrap_or_else(|| Arc::new(self::navigator(config, locale, None)));
    let resolver = LocaleResolver::new(dictionaries, navigator)
        .with_fallback_locale(config.default_locale.as_str());
    tracing::debug!(?resolver, "resolver ready");
    Ok(resolver)
}
