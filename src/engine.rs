// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use rand::Rng;

use crate::error::EngineError;
use crate::types::{BirthData, Chart};

/// A source of charts. The service runs one as primary and cross-checks it
/// against the simulator.
#[allow(async_fn_in_trait)]
pub trait ChartEngine {
    /// Label recorded in `EngineVersion`.
    fn name(&self) -> &str;

    async fn calculate(&self, birth: &BirthData) -> Result<Chart, EngineError>;
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `<prefix>_<unix ms>_<9 base36 chars>`. Not derived from the chart seed, so
/// two charts for the same birth data still get distinct ids.
pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}_{}_{}", prefix, chrono::Utc::now().timestamp_millis(), suffix)
}

/// `<prefix>_<unix millis>`, without a random suffix.
pub fn timestamp_id(prefix: &str) -> String {
    format!("{}_{}", prefix, chrono::Utc::now().timestamp_millis())
}

/// RFC 3339 UTC timestamp with millisecond precision.
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
