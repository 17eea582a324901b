/// Snapshot of one floor as handed to an elevator AI.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FloorState {
    pub people_waiting: u32,
}

/// Snapshot of one car as handed to an elevator AI.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ElevatorState {
    pub floor: usize,
    pub occupants: u32,
    pub capacity: u32,
}

impl ElevatorState {
    pub fn new(capacity: u32) -> Self {
        ElevatorState {
            floor: 0,
            occupants: 0,
            capacity,
        }
    }

    pub fn is_full(&self) -> bool {
        self.occupants >= self.capacity
    }

    pub fn free_space(&self) -> u32 {
        self.capacity.saturating_sub(self.occupants)
    }
}
