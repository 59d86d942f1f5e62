use clap::Parser;
use katsuyo_config::Config;
use katsuyo_config::log::LogConfig;
use katsuyo_core::language::{ConjugationRequest, Conjugator};
use katsuyo_lang_japanese::{Construction, FeatureState, FormProvider, RuleProvider};
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod output;
pub mod state;


use self::cli::{Cli, Command};
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let (config, source) = Config::load(&cli.config)?;
    init_tracing(&config.log);
    source.log();

    let state = AppState::new(config)?;
    let rendered = run(&state, &cli)?;
    print!("{rendered}");
    Ok(())
}

/// Logs go to stderr so stdout stays parseable
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub fn run(state: &AppState, cli: &Cli) -> anyhow::Result<String> {
    let conjugator = &state.conjugator;

    match &cli.command {
        Command::Conjugate {
            verb,
            toggles,
            formality,
        } => {
            let request = ConjugationRequest {
                verb: verb.clone(),
                features: FeatureState::new().replay(toggles.iter().copied()),
                formality: state.formality(*formality),
            };
            let result = conjugator.conjugate(&request)?;
            if cli.json {
                output::to_json(&result)
            } else {
                Ok(output::render_result(&result))
            }
        }
        Command::Grid { verb, toggles } => {
            let features = FeatureState::new().replay(toggles.iter().copied());
            let grid = conjugator.grid(verb, &features)?;
            if cli.json {
                output::to_json(&grid)
            } else {
                Ok(output::render_grid(&grid))
            }
        }
        Command::Form {
            verb,
            construction,
            formality,
            person,
        } => {
            let result = conjugator.conjugate_construction(
                verb,
                construction,
                state.formality(*formality),
                *person,
            )?;
            if cli.json {
                output::to_json(&result)
            } else {
                Ok(output::render_result(&result))
            }
        }
        Command::Classify { verb } => {
            let classification = conjugator.classify(verb)?;
            if cli.json {
                output::to_json(&classification)
            } else {
                Ok(output::render_classification(&classification))
            }
        }
        Command::Provide {
            verb,
            negative,
            polite,
        } => {
            let verb = conjugator.prepare(verb)?;
            let forms = RuleProvider::new()
                .forms(&verb, *negative, *polite)
                .ok_or_else(|| anyhow::anyhow!("no forms for {verb}"))?;
            if cli.json {
                output::to_json(&forms)
            } else {
                Ok(output::render_forms(&forms))
            }
        }
        Command::Constructions => {
            let names: Vec<String> = Construction::all().iter().map(Construction::name).collect();
            if cli.json {
                output::to_json(&names)
            } else {
                Ok(names.iter().map(|n| format!("{n}\n")).collect())
            }
        }
    }
}
