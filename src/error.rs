// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use thiserror::Error;

/// Rejected birth data. Names the first offending field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    Date(String),
    #[error("invalid time {0:?}: expected HH:MM or HH:MM:SS")]
    Time(String),
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine {engine} unavailable: {reason}")]
    Unavailable { engine: String, reason: String },
}

#[derive(Debug, Error)]
pub enum HdError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, HdError>;
