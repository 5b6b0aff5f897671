//! Algorithm selectors for both engines.
//!
//! Selectors parse from the names used in request routes (`bubble`, `bfs`,
//! ...). Anything else is [`TraceError::InvalidAlgorithm`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// The instrumented comparison sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    /// Route name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "selection" => Ok(SortAlgorithm::Selection),
            "insertion" => Ok(SortAlgorithm::Insertion),
            "quick" => Ok(SortAlgorithm::Quick),
            "heap" => Ok(SortAlgorithm::Heap),
            _ => Err(TraceError::InvalidAlgorithm { name: s.to_string() }),
        }
    }
}

/// The instrumented grid searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[serde(rename = "dfs")]
    DepthFirst,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 2] = [SearchAlgorithm::BreadthFirst, SearchAlgorithm::DepthFirst];

    /// Route name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::BreadthFirst => "bfs",
            SearchAlgorithm::DepthFirst => "dfs",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(SearchAlgorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(SearchAlgorithm::DepthFirst),
            _ => Err(TraceError::InvalidAlgorithm { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_names_roundtrip_through_from_str() {
        for alg in SortAlgorithm::ALL {
            assert_eq!(alg.name().parse::<SortAlgorithm>().unwrap(), alg);
        }
        assert_eq!("Quick".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
    }

    #[test]
    fn search_accepts_long_names() {
        assert_eq!(
            "breadth-first".parse::<SearchAlgorithm>().unwrap(),
            SearchAlgorithm::BreadthFirst
        );
        assert_eq!("DFS".parse::<SearchAlgorithm>().unwrap(), SearchAlgorithm::DepthFirst);
    }

    #[test]
    fn unknown_names_are_invalid_algorithm() {
        let err = "bogo".parse::<SortAlgorithm>().unwrap_err();
        assert_eq!(err, TraceError::InvalidAlgorithm { name: "bogo".into() });

        let err = "astar".parse::<SearchAlgorithm>().unwrap_err();
        assert_eq!(err.kind(), "InvalidAlgorithm");
    }

    #[test]
    fn serde_uses_route_names() {
        assert_eq!(serde_json::to_string(&SortAlgorithm::Heap).unwrap(), "\"heap\"");
        assert_eq!(
            serde_json::to_string(&SearchAlgorithm::BreadthFirst).unwrap(),
            "\"bfs\""
        );
    }
}
