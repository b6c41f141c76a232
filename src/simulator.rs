// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

//! Fallback engine: a deterministic pseudo-random chart keyed by the birth
//! data. There is no astronomy here. The same input always yields the same
//! type, authority, profile, gates, centers, channels, planets and cross.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Duration;

use crate::config::Settings;
use crate::engine::{generate_id, timestamp_now, ChartEngine};
use crate::error::EngineError;
use crate::seed::SeededRandom;
use crate::tables::{
    self, CENTER_GATES, CHANNELS, CHART_PLANETS, GATE_COUNT, GATE_PLANETS, INCARNATION_CROSSES,
};
use crate::types::{
    Authority, BirthData, Center, Channel, ChannelKind, Chart, EngineVersion, Gate, HdType,
    PlanetPosition, Planets, Profile, TimeAccuracy,
};

pub const SIMULATOR_ENGINE: &str = "simulator-v1";

const MIN_ACTIVE_GATES: usize = 26;
const ACTIVE_GATE_SPREAD: usize = 10;
const SINGLE_GATE_DEFINITION_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone)]
pub struct SimulatorEngine {
    latency: Duration,
    user_id: String,
}

impl Default for SimulatorEngine {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl SimulatorEngine {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            latency: Duration::from_millis(settings.simulated_latency_ms),
            user_id: settings.simulator_user_id.clone(),
        }
    }

    /// Builds the chart synchronously, skipping the simulated delay.
    pub fn generate(&self, birth: &BirthData) -> Chart {
        let mut random = SeededRandom::from_birth_data(birth);

        let hd_type = *random.pick(&HdType::ALL);
        let authority = *random.pick(&Authority::ALL);
        let profile = *random.pick(&Profile::ALL);

        let gates = generate_gates(&mut random);
        let mut centers = generate_centers(&gates, &mut random);
        let channels = generate_channels(&gates);
        connect_channels(&mut centers, &channels);
        let planets = generate_planets(&mut random);
        let incarnation_cross = (*random.pick(INCARNATION_CROSSES)).to_string();

        log::debug!(
            "simulated chart: {} gates, {} channels, {} draws",
            gates.len(),
            channels.len(),
            random.draws()
        );

        Chart {
            id: generate_id("chart"),
            user_id: self.user_id.clone(),
            birth_data: birth.clone(),
            hd_type,
            authority,
            profile,
            strategy: tables::strategy(hd_type).to_string(),
            not_self: tables::not_self(hd_type).to_string(),
            incarnation_cross,
            centers,
            gates,
            channels,
            planets,
            calculated_at: timestamp_now(),
            engine_version: EngineVersion {
                primary: SIMULATOR_ENGINE.to_string(),
                secondary: SIMULATOR_ENGINE.to_string(),
                differences: Vec::new(),
            },
            confidence: simulated_confidence(birth.time_accuracy),
        }
    }
}

impl ChartEngine for SimulatorEngine {
    fn name(&self) -> &str {
        SIMULATOR_ENGINE
    }

    async fn calculate(&self, birth: &BirthData) -> Result<Chart, EngineError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.generate(birth))
    }
}

pub fn simulated_confidence(accuracy: TimeAccuracy) -> f64 {
    match accuracy {
        TimeAccuracy::Exact => 0.99,
        TimeAccuracy::Approximate => 0.75,
        TimeAccuracy::Unknown => 0.5,
    }
}

fn generate_gates(random: &mut SeededRandom) -> Vec<Gate> {
    let total = MIN_ACTIVE_GATES + random.below(ACTIVE_GATE_SPREAD);
    let mut used = HashSet::with_capacity(total);
    let mut gates = Vec::with_capacity(total);

    while gates.len() < total {
        let number = random.range(1, GATE_COUNT);
        if !used.insert(number) {
            continue;
        }
        let design = random.chance(0.5);
        gates.push(Gate {
            number,
            line: random.range(1, 6),
            color: Some(random.range(1, 6)),
            tone: Some(random.range(1, 6)),
            base: Some(random.range(1, 5)),
            activated: true,
            planet: (*random.pick(GATE_PLANETS)).to_string(),
            design,
        });
    }
    gates
}

fn generate_centers(gates: &[Gate], random: &mut SeededRandom) -> Vec<Center> {
    let active: HashSet<u8> = gates.iter().map(|g| g.number).collect();

    CENTER_GATES
        .iter()
        .map(|(name, center_gates)| {
            let present: Vec<u8> =
                center_gates.iter().copied().filter(|g| active.contains(g)).collect();
            // The coin is only drawn when exactly one gate is active.
            let defined = match present.len() {
                0 => false,
                1 => random.chance(SINGLE_GATE_DEFINITION_THRESHOLD),
                _ => true,
            };
            Center {
                name: *name,
                defined,
                gates: present,
                connected_channels: Vec::new(),
            }
        })
        .collect()
}

fn generate_channels(gates: &[Gate]) -> Vec<Channel> {
    let design_by_gate: HashMap<u8, bool> = gates.iter().map(|g| (g.number, g.design)).collect();

    CHANNELS
        .iter()
        .filter_map(|&(a, b)| {
            let a_design = *design_by_gate.get(&a)?;
            let b_design = *design_by_gate.get(&b)?;
            Some(Channel {
                gates: (a, b),
                defined: true,
                kind: ChannelKind::from_design_flags(a_design, b_design),
                name: tables::channel_name(a, b),
            })
        })
        .collect()
}

/// Records on each center the defined channels that touch one of its gates.
fn connect_channels(centers: &mut [Center], channels: &[Channel]) {
    for center in centers.iter_mut() {
        let own = tables::center_gates(center.name);
        center.connected_channels = channels
            .iter()
            .filter(|c| c.defined && (own.contains(&c.gates.0) || own.contains(&c.gates.1)))
            .map(|c| c.name.clone())
            .collect();
    }
}

fn generate_planets(random: &mut SeededRandom) -> Planets {
    let mut personality = BTreeMap::new();
    let mut design = BTreeMap::new();

    for planet in CHART_PLANETS {
        personality.insert(planet.to_string(), random_position(random));
        design.insert(planet.to_string(), random_position(random));
    }
    Planets { personality, design }
}

fn random_position(random: &mut SeededRandom) -> PlanetPosition {
    PlanetPosition {
        gate: random.range(1, GATE_COUNT),
        line: random.range(1, 6),
        degree: random.next_f64() * 360.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    fn birth(date: &str, time: &str) -> BirthData {
        BirthData {
            date: date.into(),
            time: time.into(),
            time_accuracy: TimeAccuracy::Exact,
            location: Location {
                lat: 53.551086,
                lon: 9.993682,
                name: "Hamburg".into(),
                timezone: "Europe/Berlin".into(),
            },
        }
    }

    fn engine() -> SimulatorEngine {
        SimulatorEngine::from_settings(&Settings::instant())
    }

    /// Replays the documented draw order on a fresh stream and checks the
    /// leading categorical labels agree with the generated chart.
    #[test]
    fn labels_come_from_the_first_three_draws() {
        let b = birth("1990-05-15", "14:30");
        let chart = engine().generate(&b);
        let mut random = SeededRandom::from_birth_data(&b);
        assert_eq!(chart.hd_type, HdType::ALL[random.below(5)]);
        assert_eq!(chart.authority, Authority::ALL[random.below(9)]);
        assert_eq!(chart.profile, Profile::ALL[random.below(12)]);
    }

    #[test]
    fn gate_count_matches_fourth_draw() {
        let b = birth("2001-01-01", "00:00");
        let chart = engine().generate(&b);
        let mut random = SeededRandom::from_birth_data(&b);
        random.next_f64();
        random.next_f64();
        random.next_f64();
        let expected = MIN_ACTIVE_GATES + random.below(ACTIVE_GATE_SPREAD);
        assert_eq!(chart.gates.len(), expected);
    }

    #[test]
    fn same_input_same_chart_body() {
        let b = birth("1977-07-07", "07:07");
        let e = engine();
        let x = e.generate(&b);
        let y = e.generate(&b);
        assert_eq!(x.hd_type, y.hd_type);
        assert_eq!(x.gates, y.gates);
        assert_eq!(x.centers, y.centers);
        assert_eq!(x.channels, y.channels);
        assert_eq!(x.planets, y.planets);
        assert_eq!(x.incarnation_cross, y.incarnation_cross);
    }

    #[test]
    fn channels_from_fixed_gates() {
        let gate = |number, design| Gate {
            number,
            line: 1,
            color: None,
            tone: None,
            base: None,
            activated: true,
            planet: "Sun".into(),
            design,
        };
        let gates = vec![gate(1, true), gate(8, true), gate(20, false), gate(34, true), gate(57, false)];
        let channels = generate_channels(&gates);
        let names: Vec<&str> = channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["1-8", "20-34", "20-57", "34-57"]);
        assert_eq!(channels[0].kind, ChannelKind::Unconscious);
        assert_eq!(channels[1].kind, ChannelKind::Both);
        assert_eq!(channels[2].kind, ChannelKind::Conscious);
    }

    #[test]
    fn centers_draw_only_for_single_gate() {
        let gate = |number| Gate {
            number,
            line: 1,
            color: None,
            tone: None,
            base: None,
            activated: true,
            planet: "Sun".into(),
            design: false,
        };
        // head: 2 gates, ajna: 1 gate, everything else empty
        let gates = vec![gate(64), gate(61), gate(47)];
        let mut random = SeededRandom::new(12345);
        let centers = generate_centers(&gates, &mut random);
        assert_eq!(random.draws(), 1);
        assert!(centers[0].defined);
        assert_eq!(centers[0].gates, vec![64, 61]);
        assert_eq!(centers[1].gates, vec![47]);
        assert!(centers[2..].iter().all(|c| !c.defined && c.gates.is_empty()));

        let mut replay = SeededRandom::new(12345);
        assert_eq!(centers[1].defined, replay.chance(SINGLE_GATE_DEFINITION_THRESHOLD));
    }

    #[test]
    fn connected_channels_touch_center_gates() {
        let chart = engine().generate(&birth("1964-03-21", "12:00"));
        for center in &chart.centers {
            let own = tables::center_gates(center.name);
            for name in &center.connected_channels {
                let channel = chart.channels.iter().find(|c| &c.name == name).unwrap();
                assert!(own.contains(&channel.gates.0) || own.contains(&channel.gates.1));
            }
        }
    }

    #[test]
    fn confidence_tracks_time_accuracy() {
        let mut b = birth("1990-05-15", "14:30");
        b.time_accuracy = TimeAccuracy::Approximate;
        assert_eq!(engine().generate(&b).confidence, 0.75);
        b.time_accuracy = TimeAccuracy::Unknown;
        assert_eq!(engine().generate(&b).confidence, 0.5);
    }
}
