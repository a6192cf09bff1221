//! CLI for running cellular automata in the terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pixelpals_life::{
    config::{CliOverrides, OutputFormat, Settings},
    life::{create_example_patterns, load_pattern_from_file, Life, Lifeform, RulePreset},
    utils::{ColorOutput, RunReport, WorldFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pixelpals_life")]
#[command(about = "Generalized Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of generations to simulate (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Grid rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Rule preset, e.g. game_of_life or high_life (overrides config)
        #[arg(short = 'r', long)]
        preset: Option<RulePreset>,

        /// Built-in lifeform to load (overrides config)
        #[arg(short, long)]
        lifeform: Option<Lifeform>,

        /// Pattern file to load instead of a built-in lifeform
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Print every generation instead of a final summary
        #[arg(long)]
        show_evolution: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// List the built-in rule presets
    Rules,

    /// List the built-in lifeform patterns
    Patterns,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            generations,
            rows,
            cols,
            preset,
            lifeform,
            pattern,
            show_evolution,
        } => run_command(
            config,
            CliOverrides {
                generations,
                rows,
                cols,
                preset,
                lifeform,
                pattern_file: pattern,
            },
            show_evolution,
        ),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Rules => {
            for preset in RulePreset::ALL {
                println!("{:20} {}", preset.name(), preset.rule_set());
            }
            Ok(())
        }
        Commands::Patterns => {
            for form in Lifeform::ALL {
                println!("{:20} {} cells", form.name(), form.offsets().len());
            }
            Ok(())
        }
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, show_evolution: bool) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let rule = settings.rule.resolve()?;
    let mut life = Life::new(
        settings.simulation.rows,
        settings.simulation.cols,
        settings.simulation.trace_depth,
    );
    life.set_rule(rule);

    if let Some(pattern_file) = &settings.input.pattern_file {
        let offsets = load_pattern_from_file(pattern_file)?;
        life.load(&offsets);
    } else if let Some(lifeform) = settings.input.lifeform {
        life.load(lifeform.offsets());
    }

    let mut report = RunReport::new(&life);
    report.sample(&life);

    for _ in 0..settings.simulation.generations {
        life.step();
        report.sample(&life);

        if show_evolution || settings.output.format == OutputFormat::Visual {
            println!("{}", WorldFormatter::format_world(&life, settings.output.trace));
            println!("{}", WorldFormatter::format_counters(&life));
            println!();
        }
    }

    match settings.output.format {
        OutputFormat::Json => {
            println!("{}", report.to_json()?);
        }
        OutputFormat::Text | OutputFormat::Visual => {
            if !show_evolution && settings.output.format != OutputFormat::Visual {
                println!("{}", WorldFormatter::format_world(&life, settings.output.trace));
            }
            println!(
                "{}",
                ColorOutput::success(&WorldFormatter::format_counters(&life))
            );
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("{}", ColorOutput::success("Setup complete"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
