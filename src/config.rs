//! Generation settings, loadable from JSON.

use crate::bsp::SplitRules;
use crate::constants::*;
use crate::error::{DungeonError, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings for one generation run. Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Smallest side length drawn for the grid (inclusive)
    pub min_dungeon_size: u32,
    /// Largest side length drawn for the grid (exclusive)
    pub max_dungeon_size: u32,
    pub min_room_size: i32,
    pub max_room_size: i32,
    pub split_threshold: f32,
    pub entity_margin: i32,
    /// Fixed seed; `None` lets the caller pick one
    pub seed: Option<u64>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            min_dungeon_size: DUNGEON_MIN_SIZE,
            max_dungeon_size: DUNGEON_MAX_SIZE,
            min_room_size: DUNGEON_MIN_ROOM_SIZE,
            max_room_size: DUNGEON_MAX_ROOM_SIZE,
            split_threshold: DUNGEON_SPLIT_THRESHOLD,
            entity_margin: DUNGEON_ENTITY_MARGIN,
            seed: None,
        }
    }
}

impl DungeonConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Pin the grid to a single side length.
    pub fn with_fixed_size(mut self, size: u32) -> Self {
        self.min_dungeon_size = size;
        self.max_dungeon_size = size.saturating_add(1);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_dungeon_size == 0 {
            return Err(DungeonError::InvalidConfig(
                "min_dungeon_size must be positive".into(),
            ));
        }
        if self.max_dungeon_size <= self.min_dungeon_size {
            return Err(DungeonError::InvalidConfig(format!(
                "max_dungeon_size ({}) must exceed min_dungeon_size ({})",
                self.max_dungeon_size, self.min_dungeon_size
            )));
        }
        if self.max_dungeon_size > DUNGEON_SIZE_LIMIT {
            return Err(DungeonError::InvalidConfig(format!(
                "max_dungeon_size ({}) must not exceed {}",
                self.max_dungeon_size, DUNGEON_SIZE_LIMIT
            )));
        }
        // Bounded by DUNGEON_SIZE_LIMIT above, so the cast is lossless
        let max_side = self.max_dungeon_size as i32;
        if self.min_room_size < 1 {
            return Err(DungeonError::InvalidConfig(
                "min_room_size must be at least 1".into(),
            ));
        }
        if self.min_room_size > max_side {
            return Err(DungeonError::InvalidConfig(format!(
                "min_room_size ({}) must not exceed max_dungeon_size ({})",
                self.min_room_size, self.max_dungeon_size
            )));
        }
        if self.max_room_size < 0 {
            return Err(DungeonError::InvalidConfig(
                "max_room_size must not be negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.split_threshold) {
            return Err(DungeonError::InvalidConfig(format!(
                "split_threshold {} is outside [0, 1]",
                self.split_threshold
            )));
        }
        if self.entity_margin < 0 {
            return Err(DungeonError::InvalidConfig(
                "entity_margin must not be negative".into(),
            ));
        }
        if self.entity_margin > max_side {
            return Err(DungeonError::InvalidConfig(format!(
                "entity_margin ({}) must not exceed max_dungeon_size ({})",
                self.entity_margin, self.max_dungeon_size
            )));
        }
        Ok(())
    }

    pub fn split_rules(&self) -> SplitRules {
        SplitRules {
            min_room_size: self.min_room_size,
            max_room_size: self.max_room_size,
            split_threshold: self.split_threshold,
        }
    }
}
