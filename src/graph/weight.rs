use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Selects which cost of an edge is used during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostMode {
    /// The edge's primary cost
    #[default]
    Cost,
    /// Every edge counts as one hop
    ShortestPath,
}

/// Anything that can report a non-negative cost for a given mode
pub trait EdgeCost {
    fn cost(&self, mode: CostMode) -> f64;
}

/// Labelled cost attached to an edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    name: String,
    cost: f64,
}

impl Weight {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Weight {
            name: name.into(),
            cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The primary cost, as used by [`CostMode::Cost`]
    pub fn primary_cost(&self) -> f64 {
        self.cost
    }
}

impl EdgeCost for Weight {
    fn cost(&self, mode: CostMode) -> f64 {
        match mode {
            CostMode::Cost => self.cost,
            CostMode::ShortestPath => 1.0,
        }
    }
}

impl EdgeCost for f64 {
    fn cost(&self, mode: CostMode) -> f64 {
        match mode {
            CostMode::Cost => *self,
            CostMode::ShortestPath => 1.0,
        }
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.name, self.cost)
    }
}
