use std::{env, fs, io, path::Path, process};

use anyhow::Context;
use log::info;

use netopo::{Scenario, ScenarioConfig};

fn usage(bin: &str) -> ! {
    eprintln!("Usage: {bin} <scenario|index|config.json> [nodes]");
    eprintln!("Scenarios:");
    for scenario in Scenario::ALL {
        eprintln!(
            "  {} {:<18} {}",
            scenario.index(),
            scenario.name(),
            scenario.description()
        );
    }
    process::exit(1);
}

/// Reads a config file if `arg` names one, otherwise parses `arg` as a
/// scenario name or index.
fn load_config(arg: &str) -> anyhow::Result<ScenarioConfig> {
    let path = Path::new(arg);
    if path.extension().is_some_and(|ext| ext == "json") {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        return ScenarioConfig::from_json(&json)
            .with_context(|| format!("parsing config {}", path.display()));
    }

    let scenario: Scenario = arg.parse()?;
    Ok(scenario.into())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        usage(args.first().map_or("netopo", String::as_str));
    }

    let mut config = load_config(&args[1])?;
    if let Some(nodes) = args.get(2) {
        let nodes = nodes
            .parse::<usize>()
            .with_context(|| format!("invalid node count: {nodes}"))?;
        config = config.with_nodes(nodes);
    }

    info!(
        "simulating {} with {} node(s)",
        config.scenario().description(),
        config.nodes()
    );
    let topology = config.generate()?;

    let stdout = io::stdout().lock();
    serde_json::to_writer(stdout, &topology).context("writing topology")?;
    println!();
    Ok(())
}
