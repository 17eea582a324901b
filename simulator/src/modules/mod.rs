use std::io::ErrorKind;
use std::path::Path;
use std::thread;

use crossbeam_channel::unbounded;
use tracing::{error, info, warn};

use shared_resources::config::{Config, SelectorConfig};
use shared_resources::{ConfigError, IndexBase, RandomMoveSelector};

use crate::error::SimError;
use crate::utilities::debug;

pub mod assigner;
pub mod simulation;

use simulation::Simulation;

fn selector(index_base: IndexBase, seed: Option<u64>) -> RandomMoveSelector {
    match seed {
        Some(seed) => RandomMoveSelector::seeded(seed, index_base),
        None => RandomMoveSelector::from_entropy(index_base),
    }
}

pub fn run(
    mut config: Config,
    ticks: Option<u64>,
    index_base: Option<IndexBase>,
    seed: Option<u64>,
    display: bool,
) -> Result<(), SimError> {
    if let Some(ticks) = ticks {
        config.simulation.ticks = ticks;
    }
    let index_base = index_base.unwrap_or(config.selector.index_base);
    let seed = seed.or(config.selector.seed);

    info!(
        floors = config.building.num_floors,
        elevators = config.building.num_elevators,
        ticks = config.simulation.ticks,
        index_base = index_base.as_str(),
        ?seed,
        "starting simulation"
    );

    let mut simulation = Simulation::new(&config, selector(index_base, seed), seed);

    // INITIALIZE THREAD FOR STATUS DISPLAY
    let (report_tx, display_handle) = if display {
        let (report_tx, report_rx) = unbounded();
        let handle = thread::Builder::new()
            .name("status_display".to_string())
            .spawn(move || {
                if let Err(e) = debug::main(report_rx) {
                    error!("status display failed: {}", e);
                }
            })?;
        (Some(report_tx), Some(handle))
    } else {
        (None, None)
    };

    let result = simulation.run(report_tx);

    if let Some(handle) = display_handle {
        handle.join().map_err(|_| SimError::DisplayPanicked)?;
    }

    let summary = result?;
    info!(
        ticks = summary.ticks,
        delivered = summary.delivered,
        waiting = summary.waiting,
        riding = summary.riding,
        "simulation finished"
    );
    Ok(())
}

/// Selector settings for `assign`. Without `--config` the usual
/// `config.json`/`_config.json` lookup applies; only a missing file falls
/// back to the defaults.
pub fn selector_config(config_path: Option<&Path>) -> Result<SelectorConfig, SimError> {
    let loaded = match config_path {
        Some(path) => Config::from_file(path),
        None => Config::get(),
    };
    match loaded {
        Ok(config) => Ok(config.selector),
        Err(ConfigError::Io { source, .. })
            if config_path.is_none() && source.kind() == ErrorKind::NotFound =>
        {
            warn!("no configuration file found, assigning with default selector settings");
            Ok(SelectorConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn assign(
    input: &str,
    selector_config: &SelectorConfig,
    index_base: Option<IndexBase>,
    seed: Option<u64>,
) -> Result<String, SimError> {
    let index_base = index_base.unwrap_or(selector_config.index_base);
    let seed = seed.or(selector_config.seed);
    assigner::assign_moves(&mut selector(index_base, seed), input)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use shared_resources::Move;

    use super::*;

    const CONFIG: &str = r#"{
        "building": { "num_floors": 2, "num_elevators": 1, "elevator_capacity": 4 },
        "selector": { "index_base": "one", "seed": 4 },
        "simulation": { "ticks": 1, "tick_interval_ms": 0, "spawn_probability": 0.0 }
    }"#;

    const INPUT: &str = r#"{"floors": [1, 2], "elevators": [1]}"#;

    #[test]
    fn assign_honors_configured_index_base() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();
        let selector_config = selector_config(Some(file.path())).unwrap();
        assert_eq!(selector_config.index_base, IndexBase::One);

        for _ in 0..20 {
            let output = assign(INPUT, &selector_config, None, None).unwrap();
            let moves: Vec<Move> = serde_json::from_str(&output).unwrap();
            assert_eq!(moves.len(), 1);
            assert_eq!(moves[0].elevator, 1);
            assert!((1..=2).contains(&moves[0].floor));
        }
    }

    #[test]
    fn flags_override_configured_selector() {
        let selector_config = SelectorConfig {
            index_base: IndexBase::One,
            seed: Some(4),
        };
        let output = assign(INPUT, &selector_config, Some(IndexBase::Zero), None).unwrap();
        let moves: Vec<Move> = serde_json::from_str(&output).unwrap();
        assert_eq!(moves[0].elevator, 0);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(
            selector_config(Some(path.as_path())),
            Err(SimError::Config(ConfigError::Io { .. }))
        ));
    }
}
