// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

pub mod config;
pub mod crosscheck;
pub mod engine;
pub mod error;
pub mod primary;
pub mod seed;
pub mod service;
pub mod simulator;
pub mod tables;
pub mod types;
pub mod validate;

pub use config::Settings;
pub use engine::ChartEngine;
pub use error::{EngineError, HdError, ValidationError};
pub use primary::PrimaryEngine;
pub use service::HdService;
pub use simulator::SimulatorEngine;
pub use types::*;
