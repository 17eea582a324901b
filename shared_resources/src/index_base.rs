use std::ops::RangeInclusive;

/// Convention used for elevator and floor indices in a move.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndexBase {
    #[default]
    Zero,
    One,
}

impl IndexBase {
    pub fn first(self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }

    /// Valid indices for a collection of `len` elements. Empty when `len` is 0.
    pub fn range(self, len: usize) -> RangeInclusive<usize> {
        match (self, len) {
            (IndexBase::Zero, 0) => 1..=0,
            (IndexBase::Zero, _) => 0..=len - 1,
            (IndexBase::One, _) => 1..=len,
        }
    }

    pub fn contains(self, len: usize, index: usize) -> bool {
        self.range(len).contains(&index)
    }

    /// Returns `None` for index 0 under the one-based convention.
    pub fn to_zero_based(self, index: usize) -> Option<usize> {
        index.checked_sub(self.first())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndexBase::Zero => "zero",
            IndexBase::One => "one",
        }
    }
}

impl std::str::FromStr for IndexBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" | "0" => Ok(IndexBase::Zero),
            "one" | "1" => Ok(IndexBase::One),
            other => Err(format!("unknown index base '{}', expected 'zero' or 'one'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_follow_convention() {
        assert_eq!(IndexBase::Zero.range(5), 0..=4);
        assert_eq!(IndexBase::One.range(5), 1..=5);
        assert!(IndexBase::Zero.range(0).is_empty());
        assert!(IndexBase::One.range(0).is_empty());
    }

    #[test]
    fn contains_rejects_off_by_one() {
        assert!(IndexBase::Zero.contains(3, 0));
        assert!(!IndexBase::Zero.contains(3, 3));
        assert!(!IndexBase::One.contains(3, 0));
        assert!(IndexBase::One.contains(3, 3));
    }

    #[test]
    fn zero_based_conversion() {
        assert_eq!(IndexBase::One.to_zero_based(1), Some(0));
        assert_eq!(IndexBase::One.to_zero_based(0), None);
        assert_eq!(IndexBase::Zero.to_zero_based(0), Some(0));
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("one".parse::<IndexBase>(), Ok(IndexBase::One));
        assert_eq!("ZERO".parse::<IndexBase>(), Ok(IndexBase::Zero));
        assert!("two".parse::<IndexBase>().is_err());
    }
}
