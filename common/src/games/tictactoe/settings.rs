use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::alpha_beta::{AlphaBetaMinimax, DEFAULT_ALPHA_BETA_DEPTH};
use super::bot_controller::{SearchEngine, require_player};
use super::depth_limited::DepthLimitedSearch;
use super::minimax::Minimax;
use super::types::{CELL_COUNT, Mark};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentKind {
    #[default]
    Minimax,
    DepthLimited,
    AlphaBeta,
}

impl OpponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpponentKind::Minimax => "minimax",
            OpponentKind::DepthLimited => "depth-limited",
            OpponentKind::AlphaBeta => "alpha-beta",
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpponentKind {
    type Err = String;

    /// Accepts the names and the menu numbers 1-3.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "minimax" => Ok(OpponentKind::Minimax),
            "2" | "depth-limited" | "dls" => Ok(OpponentKind::DepthLimited),
            "3" | "alpha-beta" | "alphabeta" => Ok(OpponentKind::AlphaBeta),
            other => Err(format!(
                "Invalid opponent choice '{}', expected minimax, depth-limited or alpha-beta",
                other
            )),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct OpponentSettings {
    pub kind: OpponentKind,
    /// Required by the depth-limited opponent, ignored by the others.
    #[serde(default)]
    pub search_depth: Option<u32>,
    #[serde(default = "default_alpha_beta_depth")]
    pub alpha_beta_depth: u32,
}

fn default_alpha_beta_depth() -> u32 {
    DEFAULT_ALPHA_BETA_DEPTH
}

impl Default for OpponentSettings {
    fn default() -> Self {
        Self {
            kind: OpponentKind::default(),
            search_depth: None,
            alpha_beta_depth: DEFAULT_ALPHA_BETA_DEPTH,
        }
    }
}

impl Validate for OpponentSettings {
    fn validate(&self) -> Result<(), String> {
        if self.kind == OpponentKind::DepthLimited {
            match self.search_depth {
                None => return Err("The depth-limited opponent needs a search depth".to_string()),
                Some(0) => return Err("Search depth must be a positive number".to_string()),
                Some(_) => {}
            }
        }
        if self.alpha_beta_depth == 0 || self.alpha_beta_depth as usize > CELL_COUNT {
            return Err(format!(
                "alpha_beta_depth must be between 1 and {}, got {}",
                CELL_COUNT, self.alpha_beta_depth
            ));
        }
        Ok(())
    }
}

impl OpponentSettings {
    pub fn new(kind: OpponentKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn build_engine(&self, player: Mark) -> Result<Box<dyn SearchEngine>, String> {
        self.validate()?;
        let player = require_player(player)?;
        let engine: Box<dyn SearchEngine> = match self.kind {
            OpponentKind::Minimax => Box::new(Minimax::new(player)),
            OpponentKind::DepthLimited => {
                let depth = self.search_depth.unwrap_or_default();
                Box::new(DepthLimitedSearch::new(player, depth)?)
            }
            OpponentKind::AlphaBeta => {
                Box::new(AlphaBetaMinimax::with_depth(player, self.alpha_beta_depth)?)
            }
        };
        Ok(engine)
    }
}
