//! Demonstration graphs

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{DsaError, Result};
use crate::graph::Graph;

/// Built-in sample graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Sample {
    /// Four vertices, four edges
    Simple,
    /// Seven European cities joined by flight distances in km
    Cities,
}

impl Sample {
    pub const ALL: [Sample; 2] = [Sample::Simple, Sample::Cities];

    pub fn build(self) -> Result<Graph> {
        match self {
            Sample::Simple => simple(),
            Sample::Cities => cities(),
        }
    }
}

impl FromStr for Sample {
    type Err = DsaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Sample::Simple),
            "cities" => Ok(Sample::Cities),
            other => Err(DsaError::unsupported("sample", other, "simple, cities")),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Simple => write!(f, "simple"),
            Sample::Cities => write!(f, "cities"),
        }
    }
}

/// A, B, C, D with A-B 4, A-C 2, A-D 7, C-D 3
pub fn simple() -> Result<Graph> {
    Graph::from_parts(
        &["A", "B", "C", "D"],
        &[("A", "B", 4), ("A", "C", 2), ("A", "D", 7), ("C", "D", 3)],
    )
}

pub fn cities() -> Result<Graph> {
    Graph::from_parts(
        &[
            "Dublin", "London", "Paris", "Brussels", "Prague", "Bern", "Madrid",
        ],
        &[
            ("Dublin", "London", 464),
            ("Dublin", "Paris", 783),
            ("London", "Paris", 340),
            ("London", "Brussels", 320),
            ("Brussels", "Prague", 720),
            ("Brussels", "Bern", 489),
            ("Brussels", "Paris", 252),
            ("Paris", "Bern", 435),
            ("Paris", "Madrid", 1052),
            ("Bern", "Madrid", 1151),
            ("Bern", "Prague", 620),
        ],
    )
}
