/// ----- SIMULATION MODULE -----
/// Host driver for an elevator AI. Once per tick it lets new people show up,
/// hands the floor and elevator snapshots to the AI and applies whatever
/// moves come back. Reports are published to the status display if one is
/// attached.

use std::time::Duration;

use crossbeam_channel::{tick, Sender};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use shared_resources::config::Config;
use shared_resources::MoveSelector;

use crate::error::SimError;
use crate::utilities::building::Building;
use crate::utilities::tick_report::TickReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u64,
    pub delivered: u64,
    pub waiting: u64,
    pub riding: u64,
}

pub struct Simulation<S> {
    building: Building,
    selector: S,
    passenger_rng: StdRng,
    spawn_probability: f64,
    ticks: u64,
    tick_interval: Duration,
}

impl<S: MoveSelector> Simulation<S> {
    pub fn new(config: &Config, selector: S, seed: Option<u64>) -> Self {
        let passenger_rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };
        Simulation {
            building: Building::new(
                config.building.num_floors,
                config.building.num_elevators,
                config.building.elevator_capacity,
            ),
            selector,
            passenger_rng,
            spawn_probability: config.simulation.spawn_probability,
            ticks: config.simulation.ticks,
            tick_interval: Duration::from_millis(config.simulation.tick_interval_ms),
        }
    }

    pub fn step(&mut self, tick_number: u64) -> Result<TickReport, SimError> {
        let spawned = self
            .building
            .spawn_passengers(&mut self.passenger_rng, self.spawn_probability);
        if spawned > 0 {
            debug!(tick = tick_number, spawned, "new passengers");
        }

        let moves = self
            .selector
            .compute_next_move(self.building.floors(), self.building.elevators())?;

        let index_base = self.selector.index_base();
        let mut boarded = 0;
        for mv in &moves {
            let zero_based = mv.to_zero_based(index_base).ok_or(SimError::MoveOutOfRange {
                mv: *mv,
                elevators: self.building.elevators().len(),
                floors: self.building.floors().len(),
            })?;
            info!(tick = tick_number, elevator = mv.elevator, floor = mv.floor, "move");
            boarded += self.building.apply_move(zero_based)?;
        }

        Ok(TickReport {
            tick: tick_number,
            moves,
            boarded,
            floors: self.building.floors().to_vec(),
            elevators: self.building.elevators().to_vec(),
            delivered: self.building.delivered(),
        })
    }

    pub fn run(&mut self, report_tx: Option<Sender<TickReport>>) -> Result<Summary, SimError> {
        let timer = tick(self.tick_interval);
        let mut ticks_run = 0;

        for tick_number in 1..=self.ticks {
            if !self.tick_interval.is_zero() && timer.recv().is_err() {
                break;
            }
            let report = self.step(tick_number)?;
            ticks_run = tick_number;

            if let Some(tx) = &report_tx {
                if tx.send(report).is_err() {
                    warn!("status display disconnected, continuing without it");
                }
            }
        }

        Ok(Summary {
            ticks: ticks_run,
            delivered: self.building.delivered(),
            waiting: self.building.waiting(),
            riding: self.building.riding(),
        })
    }
}
