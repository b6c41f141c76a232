// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

//! Seeding for the simulator engine.
//!
//! The seed is a 32-bit rolling hash of the compact JSON form of the birth
//! data; the stream is a small linear congruential generator. Neither is
//! meant to be statistically good, only stable across runs and platforms.

use crate::types::BirthData;

const LCG_MUL: u64 = 9301;
const LCG_INC: u64 = 49297;
const LCG_MOD: u64 = 233_280;

/// Polynomial rolling hash (`h = h * 31 + c`) over UTF-16 code units,
/// wrapping at 32 bits. The signed result is folded to its absolute value,
/// so `i32::MIN` maps to 2^31.
pub fn hash_code(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(unit as i32);
    }
    (hash as i64).unsigned_abs() as u32
}

/// Compact JSON of the birth data, keys in declaration order, numbers printed
/// the way a JavaScript engine would (`0` rather than `0.0`).
pub fn canonical_json(birth: &BirthData) -> String {
    format!(
        "{{\"date\":{},\"time\":{},\"timeAccuracy\":{},\"location\":{{\"lat\":{},\"lon\":{},\"name\":{},\"timezone\":{}}}}}",
        json_string(&birth.date),
        json_string(&birth.time),
        json_string(birth.time_accuracy.as_str()),
        js_number(birth.location.lat),
        js_number(birth.location.lon),
        json_string(&birth.location.name),
        json_string(&birth.location.timezone),
    )
}

pub fn seed_for(birth: &BirthData) -> u32 {
    hash_code(&canonical_json(birth))
}

fn json_string(s: &str) -> String {
    // Serializing a &str cannot fail.
    serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
}

fn js_number(x: f64) -> String {
    if !x.is_finite() {
        return "null".to_string();
    }
    if x == 0.0 {
        // -0 prints as 0 in JSON.stringify
        return "0".to_string();
    }
    let magnitude = x.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        // Exponent form: `5e-7`, `1.5e-7`, `1e+21`.
        let exp = format!("{:e}", x);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }
    format!("{}", x)
}

/// Seeded linear congruential stream of values in [0, 1).
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
    draws: u64,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed as u64,
            draws: 0,
        }
    }

    pub fn from_birth_data(birth: &BirthData) -> Self {
        Self::new(seed_for(birth))
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MUL + LCG_INC) % LCG_MOD;
        self.draws += 1;
        self.state as f64 / LCG_MOD as f64
    }

    /// `floor(next * n)`, in `0..n`.
    pub fn below(&mut self, n: usize) -> usize {
        ((self.next_f64() * n as f64).floor() as usize).min(n.saturating_sub(1))
    }

    /// `lo + floor(next * n)`, in `lo..lo + n`.
    pub fn range(&mut self, lo: u8, n: u8) -> u8 {
        lo + self.below(n as usize) as u8
    }

    /// Coin flip that passes when the next value exceeds `threshold`.
    pub fn chance(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
