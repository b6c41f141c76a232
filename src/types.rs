// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// BIRTH DATA
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeAccuracy {
    Exact,
    Approximate,
    Unknown,
}

impl TimeAccuracy {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeAccuracy::Exact => "exact",
            TimeAccuracy::Approximate => "approximate",
            TimeAccuracy::Unknown => "unknown",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Some(TimeAccuracy::Exact),
            "approximate" => Some(TimeAccuracy::Approximate),
            "unknown" => Some(TimeAccuracy::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for TimeAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub timezone: String,
}

/// Input to every engine. Field order is part of the seed: the simulator
/// hashes the compact JSON form, keys in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BirthData {
    pub date: String,
    pub time: String,
    pub time_accuracy: TimeAccuracy,
    pub location: Location,
}

// ============================================================================
// CATEGORICAL LABELS
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HdType {
    Manifestor,
    Generator,
    ManifestingGenerator,
    Projector,
    Reflector,
}

impl HdType {
    pub const ALL: [HdType; 5] = [
        HdType::Manifestor,
        HdType::Generator,
        HdType::ManifestingGenerator,
        HdType::Projector,
        HdType::Reflector,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HdType::Manifestor => "manifestor",
            HdType::Generator => "generator",
            HdType::ManifestingGenerator => "manifesting_generator",
            HdType::Projector => "projector",
            HdType::Reflector => "reflector",
        }
    }
}

impl fmt::Display for HdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    EgoManifested,
    EgoProjected,
    SelfProjected,
    Lunar,
    Mental,
    None,
}

impl Authority {
    pub const ALL: [Authority; 9] = [
        Authority::Emotional,
        Authority::Sacral,
        Authority::Splenic,
        Authority::EgoManifested,
        Authority::EgoProjected,
        Authority::SelfProjected,
        Authority::Lunar,
        Authority::Mental,
        Authority::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Authority::Emotional => "emotional",
            Authority::Sacral => "sacral",
            Authority::Splenic => "splenic",
            Authority::EgoManifested => "ego_manifested",
            Authority::EgoProjected => "ego_projected",
            Authority::SelfProjected => "self_projected",
            Authority::Lunar => "lunar",
            Authority::Mental => "mental",
            Authority::None => "none",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Profile {
    #[serde(rename = "1/3")]
    P13,
    #[serde(rename = "1/4")]
    P14,
    #[serde(rename = "2/4")]
    P24,
    #[serde(rename = "2/5")]
    P25,
    #[serde(rename = "3/5")]
    P35,
    #[serde(rename = "3/6")]
    P36,
    #[serde(rename = "4/1")]
    P41,
    #[serde(rename = "4/6")]
    P46,
    #[serde(rename = "5/1")]
    P51,
    #[serde(rename = "5/2")]
    P52,
    #[serde(rename = "6/2")]
    P62,
    #[serde(rename = "6/3")]
    P63,
}

impl Profile {
    pub const ALL: [Profile; 12] = [
        Profile::P13,
        Profile::P14,
        Profile::P24,
        Profile::P25,
        Profile::P35,
        Profile::P36,
        Profile::P41,
        Profile::P46,
        Profile::P51,
        Profile::P52,
        Profile::P62,
        Profile::P63,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::P13 => "1/3",
            Profile::P14 => "1/4",
            Profile::P24 => "2/4",
            Profile::P25 => "2/5",
            Profile::P35 => "3/5",
            Profile::P36 => "3/6",
            Profile::P41 => "4/1",
            Profile::P46 => "4/6",
            Profile::P51 => "5/1",
            Profile::P52 => "5/2",
            Profile::P62 => "6/2",
            Profile::P63 => "6/3",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CenterName {
    Head,
    Ajna,
    Throat,
    GCenter,
    Heart,
    Spleen,
    SolarPlexus,
    Sacral,
    Root,
}

impl CenterName {
    pub fn as_str(self) -> &'static str {
        match self {
            CenterName::Head => "head",
            CenterName::Ajna => "ajna",
            CenterName::Throat => "throat",
            CenterName::GCenter => "g_center",
            CenterName::Heart => "heart",
            CenterName::Spleen => "spleen",
            CenterName::SolarPlexus => "solar_plexus",
            CenterName::Sacral => "sacral",
            CenterName::Root => "root",
        }
    }
}

impl fmt::Display for CenterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CHART COMPONENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gate {
    pub number: u8,
    pub line: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<u8>,
    pub activated: bool,
    pub planet: String,
    /// true = Design (unconscious, red), false = Personality (conscious, black)
    pub design: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Conscious,
    Unconscious,
    Both,
}

impl ChannelKind {
    pub fn from_design_flags(a_design: bool, b_design: bool) -> Self {
        match (a_design, b_design) {
            (true, true) => ChannelKind::Unconscious,
            (false, false) => ChannelKind::Conscious,
            _ => ChannelKind::Both,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    pub gates: (u8, u8),
    pub defined: bool,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub name: CenterName,
    pub defined: bool,
    pub gates: Vec<u8>,
    pub connected_channels: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanetPosition {
    pub gate: u8,
    pub line: u8,
    pub degree: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Planets {
    pub personality: BTreeMap<String, PlanetPosition>,
    pub design: BTreeMap<String, PlanetPosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineVersion {
    pub primary: String,
    pub secondary: String,
    #[serde(default)]
    pub differences: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub id: String,
    pub user_id: String,
    pub birth_data: BirthData,
    #[serde(rename = "type")]
    pub hd_type: HdType,
    pub authority: Authority,
    pub profile: Profile,
    pub strategy: String,
    pub not_self: String,
    pub incarnation_cross: String,
    pub centers: Vec<Center>,
    pub gates: Vec<Gate>,
    pub channels: Vec<Channel>,
    pub planets: Planets,
    pub calculated_at: String,
    pub engine_version: EngineVersion,
    pub confidence: f64,
}

impl Chart {
    /// Defined center names, sorted.
    pub fn defined_centers(&self) -> Vec<CenterName> {
        let mut names: Vec<CenterName> =
            self.centers.iter().filter(|c| c.defined).map(|c| c.name).collect();
        names.sort();
        names
    }

    pub fn has_gate(&self, number: u8) -> bool {
        self.gates.iter().any(|g| g.number == number)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrossCheck {
    pub differences: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    pub chart: Chart,
    pub cross_check: CrossCheck,
}

// ============================================================================
// RELATIONSHIP / TRANSIT
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Neutral,
    Challenging,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompatibilityFactor {
    pub category: String,
    pub score: f64,
    pub description: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Compatibility {
    pub overall: f64,
    pub factors: Vec<CompatibilityFactor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelDynamic {
    pub channel: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Person {
    A,
    B,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DominanceDynamic {
    pub channel: String,
    pub person: Person,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dynamics {
    pub electromagnetic: Vec<ChannelDynamic>,
    pub compromise: Vec<ChannelDynamic>,
    pub dominance: Vec<DominanceDynamic>,
    pub companionship: Vec<ChannelDynamic>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipAnalysis {
    pub id: String,
    pub chart_a: String,
    pub chart_b: String,
    pub compatibility: Compatibility,
    pub dynamics: Dynamics,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub recommendations: Vec<String>,
    pub analyzed_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transit {
    pub chart_id: String,
    pub date: String,
    pub activated_gates: Vec<u8>,
    pub theme: String,
    pub advice: String,
}
