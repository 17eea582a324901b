use shared_resources::{ElevatorState, FloorState, Move};

/// What happened on one tick, handed to the status display.
#[derive(Debug, Clone)]
pub struct TickReport {
    pub tick: u64,
    pub moves: Vec<Move>,
    pub boarded: u32,
    pub floors: Vec<FloorState>,
    pub elevators: Vec<ElevatorState>,
    pub delivered: u64,
}

impl TickReport {
    pub fn waiting(&self) -> u64 {
        self.floors.iter().map(|f| f.people_waiting as u64).sum()
    }
}
