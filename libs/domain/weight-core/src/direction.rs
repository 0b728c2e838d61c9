use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    None,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::None => "none",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in" => Some(Direction::In),
            "out" => Some(Direction::Out),
            "none" => Some(Direction::None),
            _ => None,
        }
    }
}

/// Parses a comma-separated `filter` query param into a set of directions.
/// An empty or absent filter means "no constraint" (empty vec).
pub fn parse_direction_filter(raw: Option<&str>) -> Vec<Direction> {
    match raw {
        None => Vec::new(),
        Some(s) if s.trim().is_empty() => Vec::new(),
        Some(s) => s.split(',').filter_map(Direction::parse).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_directions_case_insensitively() {
        assert_eq!(Direction::parse("IN"), Some(Direction::In));
        assert_eq!(Direction::parse("out"), Some(Direction::Out));
        assert_eq!(Direction::parse("None"), Some(Direction::None));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn empty_filter_means_no_constraint() {
        assert_eq!(parse_direction_filter(None), Vec::new());
        assert_eq!(parse_direction_filter(Some("")), Vec::new());
    }

    #[test]
    fn parses_comma_separated_filter() {
        assert_eq!(parse_direction_filter(Some("in,out")), vec![Direction::In, Direction::Out]);
    }
}
