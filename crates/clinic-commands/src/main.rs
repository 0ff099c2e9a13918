use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clinic_commands::parse_command;
use clinic_core::{ClinicConfig, ClinicModel, JsonClinicStorage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "clinic-find")]
#[command(about = "Search the clinic's patient records")]
struct Cli {
    /// Config file (JSON)
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Data file, overriding the config
    #[arg(long)]
    data: Option<PathBuf>,

    /// Command to run, e.g. `find n/alice bob` or `f id/S872D`
    #[arg(trailing_var_arg = true, required = true)]
    command: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ClinicConfig::load(&cli.config)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data_file = cli.data.unwrap_or(config.data_file);
    let storage = JsonClinicStorage::new(&data_file);
    let patients = storage
        .load_or_empty()
        .with_context(|| format!("could not load {}", data_file.display()))?;
    let mut model = ClinicModel::new(patients);

    let command = parse_command(&cli.command.join(" "))?;
    let result = command.execute(&mut model);

    println!("{}", result.feedback);
    for patient in model.filtered_patients() {
        let id = patient.id().map(|id| id.as_str()).unwrap_or("-");
        println!("{}  {}", id, patient.name());
    }
    Ok(())
}
