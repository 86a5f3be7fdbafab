use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use wisepick::config::{EngineConfig, ScaleMode, load_config};
use wisepick::engine::ScoringEngine;
use wisepick::logging::init_logging;
use wisepick::model::{BuildSpec, Category, Need};
use wisepick::narrative::TemplateNarrative;
use wisepick::report::OutputFormat;
use wisepick::report::json::{
    render_build_json, render_listing_json, render_ranking_json, render_verdict_json,
};
use wisepick::report::text::{
    render_build_text, render_listing_text, render_ranking_text, render_verdict_text,
};
use wisepick::repository::{load_catalog, seed_repository};

#[derive(Debug, Parser)]
#[command(name = "wisepick", version)]
#[command(about = "Compare CPUs, GPUs, RAM kits and full builds on a population-relative 0-100 index")]
struct Cli {
    /// JSON catalog of components; the built-in reference catalog is used when omitted
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// JSON engine configuration (weight tables, build weights, scale mode)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Scale against the two candidates only instead of the whole category
    #[arg(long, global = true)]
    pairwise: bool,

    #[arg(long, global = true, value_enum, default_value_t = NarrativeMode::None)]
    narrative: NarrativeMode,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NarrativeMode {
    None,
    Template,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare two components of one category
    Compare {
        category: Category,
        first: String,
        second: String,
    },
    /// Compare two CPU + GPU + RAM builds
    Build {
        #[arg(long, num_args = 2, required = true, value_names = ["FIRST", "SECOND"])]
        cpu: Vec<String>,
        #[arg(long, num_args = 2, required = true, value_names = ["FIRST", "SECOND"])]
        gpu: Vec<String>,
        #[arg(long, num_args = 2, required = true, value_names = ["FIRST", "SECOND"])]
        ram: Vec<String>,
        #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"], default_values = ["Build A", "Build B"])]
        names: Vec<String>,
        /// Usage profile selecting category weights (balanced, gaming, work, video_editing, 3d_rendering)
        #[arg(long)]
        need: Option<Need>,
    },
    /// Rank every component of a category
    Rank { category: Category },
    /// List the components of a category
    List { category: Category },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = match &cli.config {
        Some(path) => load_config(path).map_err(|e| e.to_string())?,
        None => EngineConfig::default_v1(),
    };
    if cli.pairwise {
        config.scale_mode = ScaleMode::Pairwise;
    }

    let repository = match &cli.catalog {
        Some(path) => load_catalog(path).map_err(|e| e.to_string())?,
        None => seed_repository().map_err(|e| e.to_string())?,
    };

    let mut engine = ScoringEngine::new(Box::new(repository), config);
    if cli.narrative == NarrativeMode::Template {
        engine = engine.with_narrator(Box::new(TemplateNarrative::new()));
    }

    let output = match cli.command {
        Command::Compare {
            category,
            first,
            second,
        } => {
            let verdict = engine
                .compare(category, &first, &second)
                .map_err(|e| e.to_string())?;
            match cli.format {
                OutputFormat::Text => render_verdict_text(&verdict),
                OutputFormat::Json => render_verdict_json(&verdict).map_err(|e| e.to_string())?,
            }
        }
        Command::Build {
            cpu,
            gpu,
            ram,
            names,
            need,
        } => {
            let (first, second) = build_specs(&names, &cpu, &gpu, &ram)?;
            let weights = match need {
                Some(n) => n.build_weights(),
                None => engine.config().build,
            };
            let verdict = engine
                .compare_builds(&first, &second, need, weights)
                .map_err(|e| e.to_string())?;
            match cli.format {
                OutputFormat::Text => render_build_text(&verdict),
                OutputFormat::Json => render_build_json(&verdict).map_err(|e| e.to_string())?,
            }
        }
        Command::Rank { category } => {
            let ranking = engine.rank(category).map_err(|e| e.to_string())?;
            match cli.format {
                OutputFormat::Text => render_ranking_text(category, &ranking),
                OutputFormat::Json => {
                    render_ranking_json(category, &ranking).map_err(|e| e.to_string())?
                }
            }
        }
        Command::List { category } => {
            let components = engine.population(category).map_err(|e| e.to_string())?;
            match cli.format {
                OutputFormat::Text => render_listing_text(category, &components),
                OutputFormat::Json => {
                    render_listing_json(category, &components).map_err(|e| e.to_string())?
                }
            }
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn build_specs(
    names: &[String],
    cpu: &[String],
    gpu: &[String],
    ram: &[String],
) -> Result<(BuildSpec, BuildSpec), String> {
    let (name_a, name_b) = pair(names, "--names")?;
    let (cpu_a, cpu_b) = pair(cpu, "--cpu")?;
    let (gpu_a, gpu_b) = pair(gpu, "--gpu")?;
    let (ram_a, ram_b) = pair(ram, "--ram")?;
    Ok((
        BuildSpec {
            name: name_a,
            cpu: cpu_a,
            gpu: gpu_a,
            ram: ram_a,
        },
        BuildSpec {
            name: name_b,
            cpu: cpu_b,
            gpu: gpu_b,
            ram: ram_b,
        },
    ))
}

fn pair(values: &[String], flag: &str) -> Result<(String, String), String> {
    match values {
        [a, b] => Ok((a.clone(), b.clone())),
        _ => Err(format!("{flag} takes exactly two values")),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
