/// ----- ASSIGNER -----
/// One-shot boundary for external drivers. Takes the floor and elevator
/// states as JSON, asks the AI for a move and returns the moves as a JSON
/// list of `[elevator, floor]` pairs. Element contents are passed through
/// untouched; only the lengths matter to the random AI.

use tracing::debug;

use shared_resources::MoveSelector;

use crate::error::SimError;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct AssignerInput {
    pub floors: Vec<serde_json::Value>,
    pub elevators: Vec<serde_json::Value>,
}

pub fn assign_moves<S: MoveSelector>(selector: &mut S, json_input: &str) -> Result<String, SimError> {
    let input: AssignerInput = serde_json::from_str(json_input)?;
    debug!(
        floors = input.floors.len(),
        elevators = input.elevators.len(),
        "assigner input parsed"
    );
    let moves = selector.compute_next_move(&input.floors, &input.elevators)?;
    Ok(serde_json::to_string(&moves)?)
}

#[cfg(test)]
mod tests {
    use shared_resources::{IndexBase, Move, MoveError, RandomMoveSelector};

    use super::*;

    #[test]
    fn returns_a_single_pair() {
        let mut selector = RandomMoveSelector::seeded(3, IndexBase::Zero);
        let input = r#"{
            "floors": [{"peopleWaiting": 1}, {"peopleWaiting": 0}, {"peopleWaiting": 2}],
            "elevators": [{"floor": 0, "occupants": 0, "capacity": 8}]
        }"#;
        let output = assign_moves(&mut selector, input).unwrap();
        let moves: Vec<Move> = serde_json::from_str(&output).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].elevator, 0);
        assert!(moves[0].floor < 3);
    }

    #[test]
    fn element_shape_is_opaque() {
        let mut selector = RandomMoveSelector::seeded(3, IndexBase::One);
        let output = assign_moves(&mut selector, r#"{"floors": [1, "x", null], "elevators": [[], {}]}"#).unwrap();
        let moves: Vec<(usize, usize)> = serde_json::from_str(&output).unwrap();
        assert!((1..=2).contains(&moves[0].0));
        assert!((1..=3).contains(&moves[0].1));
    }

    #[test]
    fn empty_building_is_a_precondition_error() {
        let mut selector = RandomMoveSelector::seeded(3, IndexBase::Zero);
        let result = assign_moves(&mut selector, r#"{"floors": [], "elevators": [1]}"#);
        assert!(matches!(result, Err(SimError::Move(MoveError::NoFloors))));
    }

    #[test]
    fn malformed_json_is_reported() {
        let mut selector = RandomMoveSelector::seeded(3, IndexBase::Zero);
        assert!(matches!(
            assign_moves(&mut selector, "{\"floors\": 3}"),
            Err(SimError::Json(_))
        ));
    }
}
