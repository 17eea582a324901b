use std::fmt;

use super::index_base::IndexBase;

/// A proposed action for one tick: send `elevator` to `floor`.
///
/// Serialized as the pair `[elevator, floor]`, so a list of moves has the
/// sequence-of-pairs shape the host driver expects.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Move {
    pub elevator: usize,
    pub floor: usize,
}

impl Move {
    pub fn new(elevator: usize, floor: usize) -> Self {
        Move { elevator, floor }
    }

    pub fn to_zero_based(self, base: IndexBase) -> Option<Move> {
        Some(Move {
            elevator: base.to_zero_based(self.elevator)?,
            floor: base.to_zero_based(self.floor)?,
        })
    }
}

impl From<(usize, usize)> for Move {
    fn from((elevator, floor): (usize, usize)) -> Self {
        Move { elevator, floor }
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.elevator, mv.floor)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.elevator, self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_sequence_of_pairs() {
        let moves = vec![Move::new(1, 3)];
        assert_eq!(serde_json::to_string(&moves).unwrap(), "[[1,3]]");

        let parsed: Vec<Move> = serde_json::from_str("[[0,4],[1,2]]").unwrap();
        assert_eq!(parsed, vec![Move::new(0, 4), Move::new(1, 2)]);
    }

    #[test]
    fn one_based_move_converts_down() {
        assert_eq!(Move::new(2, 5).to_zero_based(IndexBase::One), Some(Move::new(1, 4)));
        assert_eq!(Move::new(0, 5).to_zero_based(IndexBase::One), None);
        assert_eq!(Move::new(0, 5).to_zero_based(IndexBase::Zero), Some(Move::new(0, 5)));
    }
}
