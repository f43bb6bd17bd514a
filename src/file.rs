use std::fs;
use std::path::Path;

use serde::Deserialize;
use toml;
use tracing::debug;

#[derive(Deserialize, Debug)]
struct Config {
    scenarios: Vec<ScenarioConfig>,
}

#[derive(Deserialize, Debug)]
struct IncludedConfig {
    scenarios: Vec<ScenarioConfig>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum ScenarioConfig {
    Explicit {
        name: Option<String>,
        latitude: f64,
        molecule: i32,
    },
    Include {
        include: String,
    },
}

/// A single latitude/molecule pair to evaluate.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: String,
    /// Radians from the north pole.
    pub latitude: f64,
    /// 0 for water, anything else for carbon dioxide.
    pub molecule: i32,
}

pub fn load_scenarios(path: &str) -> Result<Vec<Scenario>, Box<dyn std::error::Error>> {
    debug!("loading scenario config: {}", path);
    let config_content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_content)?;
    debug!("parsed {} top-level scenario entries", config.scenarios.len());

    let mut scenarios = Vec::new();
    let config_path = Path::new(path);
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    load_scenarios_recursive(config.scenarios, &mut scenarios, base_dir)?;

    Ok(scenarios)
}

fn load_scenarios_recursive(
    scenario_configs: Vec<ScenarioConfig>,
    scenarios: &mut Vec<Scenario>,
    base_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    for scenario_config in scenario_configs {
        match scenario_config {
            ScenarioConfig::Explicit {
                name,
                latitude,
                molecule,
            } => {
                let name = name.unwrap_or_else(|| format!("Scenario {}", scenarios.len() + 1));
                scenarios.push(Scenario {
                    name,
                    latitude,
                    molecule,
                });
            }
            ScenarioConfig::Include { include } => {
                // included files are relative to the config that names them
                let included_path = base_dir.join(&include);
                debug!("loading included config: {}", included_path.display());
                let content = fs::read_to_string(&included_path)?;
                let included: IncludedConfig = toml::from_str(&content)?;

                let new_base_dir = included_path.parent().unwrap_or_else(|| Path::new("."));
                load_scenarios_recursive(included.scenarios, scenarios, new_base_dir)?;
            }
        }
    }
    Ok(())
}
