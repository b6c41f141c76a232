// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

//! Fixed symbolic vocabulary: centers, channels, planets and the texts
//! attached to types and authorities.
//!
//! Kept as plain static slices. Sampling indexes into these in order, so
//! reordering any of them changes every simulated chart.

use crate::types::{Authority, CenterName, HdType, TimeAccuracy};

pub const GATE_COUNT: u8 = 64;

/// Center -> associated gates. Table order is also the order centers appear
/// in a chart and the order their coin flips are drawn.
pub static CENTER_GATES: &[(CenterName, &[u8])] = &[
    (CenterName::Head, &[64, 61, 63]),
    (CenterName::Ajna, &[47, 24, 4, 17, 43, 11]),
    (CenterName::Throat, &[62, 23, 56, 35, 12, 45, 33, 8, 31, 20, 16]),
    (CenterName::GCenter, &[7, 1, 13, 25, 46, 2, 15, 10]),
    (CenterName::Heart, &[21, 40, 26, 51]),
    (CenterName::Spleen, &[48, 57, 44, 50, 32, 28, 18]),
    (CenterName::SolarPlexus, &[36, 22, 37, 6, 49, 55, 30]),
    (CenterName::Sacral, &[5, 14, 29, 59, 9, 3, 42, 27, 34]),
    (CenterName::Root, &[53, 60, 52, 19, 39, 41, 58, 38, 54]),
];

pub static CHANNELS: &[(u8, u8)] = &[
    (1, 8), (2, 14), (3, 60), (4, 63), (5, 15), (6, 59), (7, 31), (9, 52),
    (10, 20), (10, 34), (10, 57), (11, 56), (12, 22), (13, 33), (16, 48),
    (17, 62), (18, 58), (19, 49), (20, 34), (20, 57), (21, 45), (23, 43),
    (24, 61), (25, 51), (26, 44), (27, 50), (28, 38), (29, 46), (30, 41),
    (32, 54), (34, 57), (35, 36), (37, 40), (39, 55), (42, 53), (47, 64),
];

/// Planets a single gate activation can be attributed to.
pub static GATE_PLANETS: &[&str] = &[
    "Sun", "Earth", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
    "Pluto",
];

/// Bodies listed in the personality/design position tables.
pub static CHART_PLANETS: &[&str] = &[
    "Sun", "Earth", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
    "Pluto", "North Node", "South Node",
];

pub static INCARNATION_CROSSES: &[&str] = &[
    "Right Angle Cross of Planning",
    "Left Angle Cross of Separation",
    "Juxtaposition Cross of Listening",
    "Right Angle Cross of the Four Ways",
    "Left Angle Cross of Revolution",
];

static HEXAGRAMS: &[&str] = &[
    "Das Schöpferische", "Das Empfangende", "Die Anfangsschwierigkeit", "Die Jugendtorheit",
    "Das Warten", "Der Streit", "Das Heer", "Das Zusammenhalten", "Die Zähmungskraft des Kleinen",
    "Das Auftreten", "Der Friede", "Die Stockung", "Die Gemeinschaft", "Der Besitz von Großem",
    "Die Bescheidenheit", "Die Begeisterung", "Die Nachfolge", "Die Arbeit am Verdorbenen",
    "Die Annäherung", "Die Betrachtung", "Das Durchbeißen", "Die Anmut", "Die Zersplitterung",
    "Die Wiederkehr", "Die Unschuld", "Die Zähmungskraft des Großen", "Die Ernährung",
    "Das Übergewicht des Großen", "Das Abgründige", "Das Haftende", "Die Einwirkung", "Die Dauer",
    "Der Rückzug", "Die Macht des Großen", "Der Fortschritt", "Die Verfinsterung des Lichts",
    "Die Sippe", "Der Gegensatz", "Das Hemmnis", "Die Befreiung", "Die Minderung", "Die Mehrung",
    "Der Durchbruch", "Das Entgegenkommen", "Die Sammlung", "Das Empordringen", "Die Bedrängnis",
    "Der Brunnen", "Die Umwälzung", "Der Tiegel", "Das Erregende", "Das Stillehalten",
    "Die Entwicklung", "Das heiratende Mädchen", "Die Fülle", "Der Wanderer", "Das Sanfte",
    "Das Heitere", "Die Auflösung", "Die Beschränkung", "Innere Wahrheit",
    "Das Übergewicht des Kleinen", "Nach der Vollendung", "Vor der Vollendung",
];

pub fn strategy(hd_type: HdType) -> &'static str {
    match hd_type {
        HdType::Manifestor => "Informiere bevor du handelst",
        HdType::Generator => "Warte darauf zu reagieren",
        HdType::ManifestingGenerator => "Warte darauf zu reagieren, dann informiere",
        HdType::Projector => "Warte auf die Einladung",
        HdType::Reflector => "Warte einen Mondzyklus",
    }
}

pub fn not_self(hd_type: HdType) -> &'static str {
    match hd_type {
        HdType::Manifestor => "Wut",
        HdType::Generator => "Frustration",
        HdType::ManifestingGenerator => "Frustration und Wut",
        HdType::Projector => "Verbitterung",
        HdType::Reflector => "Enttäuschung",
    }
}

pub fn authority_description(authority: Authority) -> &'static str {
    match authority {
        Authority::Emotional => "Emotionale Autorität - Warte auf emotionale Klarheit",
        Authority::Sacral => "Sakrale Autorität - Höre auf dein Bauchgefühl",
        Authority::Splenic => "Milz-Autorität - Vertraue deiner Intuition",
        Authority::EgoManifested => "Ego-manifestierte Autorität - Handle aus deiner Willenskraft",
        Authority::EgoProjected => {
            "Ego-projizierte Autorität - Sprich mit anderen über deine Entscheidungen"
        }
        Authority::SelfProjected => "Selbst-projizierte Autorität - Höre auf deine innere Stimme",
        Authority::Lunar => "Lunare Autorität - Warte einen Mondzyklus",
        Authority::Mental => "Mentale Autorität - Diskutiere mit deiner Umgebung",
        Authority::None => "Keine innere Autorität - Reflektiere deine Umgebung",
    }
}

pub fn time_accuracy_label(accuracy: TimeAccuracy) -> &'static str {
    match accuracy {
        TimeAccuracy::Exact => "Exakt",
        TimeAccuracy::Approximate => "Ungefähr",
        TimeAccuracy::Unknown => "Unbekannt",
    }
}

/// I-Ching hexagram name for a gate; out-of-range numbers get a generic label.
pub fn gate_hexagram(gate: u8) -> String {
    match gate.checked_sub(1).and_then(|i| HEXAGRAMS.get(i as usize)) {
        Some(name) => (*name).to_string(),
        None => format!("Tor {}", gate),
    }
}

pub fn center_gates(center: CenterName) -> &'static [u8] {
    CENTER_GATES
        .iter()
        .find(|(name, _)| *name == center)
        .map(|(_, gates)| *gates)
        .unwrap_or(&[])
}

/// Center a gate belongs to. Every gate 1..=64 belongs to exactly one center.
pub fn center_of_gate(gate: u8) -> Option<CenterName> {
    CENTER_GATES
        .iter()
        .find(|(_, gates)| gates.contains(&gate))
        .map(|(name, _)| *name)
}

pub fn channel_name(a: u8, b: u8) -> String {
    format!("{}-{}", a, b)
}
