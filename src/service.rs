// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::crosscheck::{calculate_confidence, compare_charts, compatibility_score};
use crate::engine::{generate_id, timestamp_now, ChartEngine};
use crate::error::Result;
use crate::primary::{PrimaryEngine, PRIMARY_ENGINE};
use crate::simulator::SimulatorEngine;
use crate::types::{
    BirthData, ChannelDynamic, ChartResult, Compatibility, CompatibilityFactor, CrossCheck,
    DominanceDynamic, Dynamics, EngineVersion, Impact, Person, RelationshipAnalysis, Transit,
};
use crate::validate::validate_birth_data;

pub const FALLBACK_LABEL: &str = "fallback-simulator";
pub const PRIMARY_UNAVAILABLE: &str = "Primary engine unavailable";
const PRIMARY_UNAVAILABLE_CONFIDENCE: f64 = 0.7;

/// Runs a primary engine and cross-checks it against the simulator.
pub struct HdService<P = PrimaryEngine> {
    primary: P,
    fallback: SimulatorEngine,
}

impl HdService<PrimaryEngine> {
    pub fn new(settings: &Settings) -> Self {
        Self {
            primary: PrimaryEngine::from_settings(settings),
            fallback: SimulatorEngine::from_settings(settings),
        }
    }
}

impl<P: ChartEngine> HdService<P> {
    pub fn with_engines(primary: P, fallback: SimulatorEngine) -> Self {
        Self { primary, fallback }
    }

    /// Validates the input, then returns the primary chart annotated with the
    /// cross-check against the simulator. When the primary engine fails the
    /// simulator chart is returned instead at reduced confidence.
    pub async fn calculate_chart(&self, birth: &BirthData) -> Result<ChartResult> {
        validate_birth_data(birth)?;

        let primary_chart = match self.primary.calculate(birth).await {
            Ok(chart) => chart,
            Err(err) => {
                log::warn!("primary engine {} failed, using fallback: {}", self.primary.name(), err);
                let chart = self.fallback.calculate(birth).await?;
                return Ok(ChartResult {
                    chart,
                    cross_check: CrossCheck {
                        differences: vec![PRIMARY_UNAVAILABLE.to_string()],
                        confidence: PRIMARY_UNAVAILABLE_CONFIDENCE,
                    },
                });
            }
        };

        let fallback_chart = self.fallback.calculate(birth).await?;
        let differences = compare_charts(&primary_chart, &fallback_chart);
        let confidence = calculate_confidence(&differences, birth.time_accuracy);
        log::info!(
            "cross-check {} vs {}: {} difference(s), confidence {:.2}",
            self.primary.name(),
            self.fallback.name(),
            differences.len(),
            confidence
        );

        let mut chart = primary_chart;
        chart.engine_version = EngineVersion {
            primary: PRIMARY_ENGINE.to_string(),
            secondary: FALLBACK_LABEL.to_string(),
            differences: differences.clone(),
        };
        chart.confidence = confidence;

        Ok(ChartResult {
            chart,
            cross_check: CrossCheck {
                differences,
                confidence,
            },
        })
    }

    /// Simulated relationship reading. Content is fixed; only ids and
    /// timestamps vary.
    pub fn analyze_relationship(&self, chart_a: &str, chart_b: &str) -> RelationshipAnalysis {
        let factors = vec![
            factor(
                "Energetic Compatibility",
                80.0,
                "Strong electromagnetic connection through defined channels",
                Impact::Positive,
            ),
            factor(
                "Communication",
                70.0,
                "Different authorities require patience and understanding",
                Impact::Neutral,
            ),
            factor(
                "Decision Making",
                65.0,
                "Complementary strategies can create harmony",
                Impact::Positive,
            ),
            factor(
                "Emotional Dynamics",
                85.0,
                "Balanced emotional centers create stability",
                Impact::Positive,
            ),
        ];
        let weighted: Vec<(f64, f64)> = factors.iter().map(|f| (f.score, 1.0)).collect();

        RelationshipAnalysis {
            id: generate_id("analysis"),
            chart_a: chart_a.to_string(),
            chart_b: chart_b.to_string(),
            compatibility: Compatibility {
                overall: compatibility_score(&weighted),
                factors,
            },
            dynamics: Dynamics {
                electromagnetic: vec![dynamic(
                    "34-20",
                    "Channel of Charisma - Creates magnetic attraction",
                )],
                compromise: vec![dynamic(
                    "36-35",
                    "Channel of Transitoriness - Shared experiences",
                )],
                dominance: vec![DominanceDynamic {
                    channel: "21-45".to_string(),
                    person: Person::A,
                    description: "Channel of Money - Person A has material control".to_string(),
                }],
                companionship: vec![dynamic(
                    "1-8",
                    "Channel of Inspiration - Mutual creative support",
                )],
            },
            strengths: strings(&[
                "Complementary energy types create balance",
                "Strong sacral connection enhances intimacy",
                "Different perspectives enrich decision-making",
            ]),
            challenges: strings(&[
                "Different rhythms may require adjustment",
                "Communication styles need conscious bridging",
                "Emotional waves require patience",
            ]),
            recommendations: strings(&[
                "Honor each other's strategy and authority",
                "Create space for individual expression",
                "Practice active listening during decisions",
                "Celebrate your differences as strengths",
            ]),
            analyzed_at: timestamp_now(),
        }
    }

    /// Simulated transit: a fixed gate set with generic guidance.
    pub fn calculate_transit(&self, chart_id: &str, date: DateTime<Utc>) -> Transit {
        Transit {
            chart_id: chart_id.to_string(),
            date: date.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            activated_gates: vec![1, 2, 3, 4, 5],
            theme: "Time for new beginnings".to_string(),
            advice: "Follow your strategy during this transit period".to_string(),
        }
    }
}

fn factor(category: &str, score: f64, description: &str, impact: Impact) -> CompatibilityFactor {
    CompatibilityFactor {
        category: category.to_string(),
        score,
        description: description.to_string(),
        impact,
    }
}

fn dynamic(channel: &str, description: &str) -> ChannelDynamic {
    ChannelDynamic {
        channel: channel.to_string(),
        description: description.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
