// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use crate::config::Settings;
use crate::engine::{timestamp_id, timestamp_now, ChartEngine};
use crate::error::EngineError;
use crate::tables;
use crate::types::{Authority, BirthData, Chart, EngineVersion, HdType, Planets, Profile};

pub const PRIMARY_ENGINE: &str = "hd-engine-v1";

const PLACEHOLDER_CROSS: &str = "Right Angle Cross of Planning";
const PLACEHOLDER_CONFIDENCE: f64 = 0.95;

/// Placeholder for an ephemeris-backed calculator. Always returns the same
/// generator chart with no centers, gates, channels or planet positions.
#[derive(Debug, Clone)]
pub struct PrimaryEngine {
    user_id: String,
}

impl Default for PrimaryEngine {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl PrimaryEngine {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            user_id: settings.primary_user_id.clone(),
        }
    }
}

impl ChartEngine for PrimaryEngine {
    fn name(&self) -> &str {
        PRIMARY_ENGINE
    }

    async fn calculate(&self, birth: &BirthData) -> Result<Chart, EngineError> {
        let hd_type = HdType::Generator;
        Ok(Chart {
            id: timestamp_id("chart"),
            user_id: self.user_id.clone(),
            birth_data: birth.clone(),
            hd_type,
            authority: Authority::Sacral,
            profile: Profile::P35,
            strategy: tables::strategy(hd_type).to_string(),
            not_self: tables::not_self(hd_type).to_string(),
            incarnation_cross: PLACEHOLDER_CROSS.to_string(),
            centers: Vec::new(),
            gates: Vec::new(),
            channels: Vec::new(),
            planets: Planets::default(),
            calculated_at: timestamp_now(),
            engine_version: EngineVersion {
                primary: PRIMARY_ENGINE.to_string(),
                secondary: PRIMARY_ENGINE.to_string(),
                differences: Vec::new(),
            },
            confidence: PLACEHOLDER_CONFIDENCE,
        })
    }
}
