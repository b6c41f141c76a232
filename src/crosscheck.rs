// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use crate::types::{Chart, TimeAccuracy};

const REDUCTION_PER_DIFFERENCE: f64 = 0.05;
const MAX_REDUCTION: f64 = 0.3;
const CONFIDENCE_FLOOR: f64 = 0.5;
/// Gate counts closer than this are not reported.
const GATE_COUNT_TOLERANCE: usize = 3;

/// Field-by-field differences between two charts, in a fixed order.
pub fn compare_charts(a: &Chart, b: &Chart) -> Vec<String> {
    let mut differences = Vec::new();

    if a.hd_type != b.hd_type {
        differences.push(format!("Type: {} vs {}", a.hd_type, b.hd_type));
    }
    if a.authority != b.authority {
        differences.push(format!("Authority: {} vs {}", a.authority, b.authority));
    }
    if a.profile != b.profile {
        differences.push(format!("Profile: {} vs {}", a.profile, b.profile));
    }
    if a.defined_centers() != b.defined_centers() {
        differences.push("Defined centers differ".to_string());
    }

    let (na, nb) = (a.gates.len(), b.gates.len());
    if na.abs_diff(nb) > GATE_COUNT_TOLERANCE {
        differences.push(format!("Gate count: {} vs {}", na, nb));
    }

    differences
}

pub fn base_confidence(accuracy: TimeAccuracy) -> f64 {
    match accuracy {
        TimeAccuracy::Exact => 1.0,
        TimeAccuracy::Approximate => 0.85,
        TimeAccuracy::Unknown => 0.60,
    }
}

/// `max(0.5, base - min(0.05 * n, 0.3))`
pub fn calculate_confidence(differences: &[String], accuracy: TimeAccuracy) -> f64 {
    let reduction = (differences.len() as f64 * REDUCTION_PER_DIFFERENCE).min(MAX_REDUCTION);
    (base_confidence(accuracy) - reduction).max(CONFIDENCE_FLOOR)
}

/// Weighted average of `(score, weight)` pairs rounded to two decimals.
/// Returns 0 when there is no positive total weight.
pub fn compatibility_score(factors: &[(f64, f64)]) -> f64 {
    let total_weight: f64 = factors.iter().map(|(_, w)| w).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = factors.iter().map(|(s, w)| s * w).sum();
    ((weighted / total_weight) * 100.0).round() / 100.0
}
