use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The eight canonical rating categories, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Aaa,
    Aa,
    A,
    Baa,
    Ba,
    B,
    Caa,
    Ca,
}

impl Grade {
    pub const ORDER: [Grade; 8] = [
        Grade::Aaa,
        Grade::Aa,
        Grade::A,
        Grade::Baa,
        Grade::Ba,
        Grade::B,
        Grade::Caa,
        Grade::Ca,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::Aaa => "Aaa",
            Grade::Aa => "Aa",
            Grade::A => "A",
            Grade::Baa => "Baa",
            Grade::Ba => "Ba",
            Grade::B => "B",
            Grade::Caa => "Caa",
            Grade::Ca => "Ca",
        }
    }

    /// Trims surrounding whitespace and matches case-insensitively.
    pub fn parse(token: &str) -> Option<Grade> {
        let token = token.trim();
        Self::ORDER
            .into_iter()
            .find(|grade| grade.as_str().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed `[low, high]` interval on the rating axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct AxisRange {
    pub low: f64,
    pub high: f64,
}

impl AxisRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Linear re-projection of `value` onto this interval.
    pub fn interpolate(&self, value: f64) -> f64 {
        if self.high == self.low {
            return self.low;
        }
        let t = (value - self.low) / (self.high - self.low);
        self.low + t * (self.high - self.low)
    }
}

impl From<[f64; 2]> for AxisRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<AxisRange> for [f64; 2] {
    fn from(range: AxisRange) -> Self {
        [range.low, range.high]
    }
}

/// A complete set of quantitative buckets, indexed in canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRanges([AxisRange; 8]);

impl AxisRanges {
    pub fn get(&self, grade: Grade) -> AxisRange {
        self.0[grade as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Grade, AxisRange)> + '_ {
        Grade::ORDER.into_iter().zip(self.0.iter().copied())
    }

    /// First bucket in canonical order that contains `value`.
    pub fn bucket(&self, value: f64) -> Option<(Grade, AxisRange)> {
        self.iter().find(|(_, range)| range.contains(value))
    }

    pub fn min(&self) -> f64 {
        self.get(Grade::Aaa).low
    }

    pub fn max(&self) -> f64 {
        self.get(Grade::Ca).high
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleDefinition {
    pub qualitative_to_numeric: BTreeMap<Grade, f64>,
    pub quantitative_axis_ranges: Option<BTreeMap<Grade, AxisRange>>,
}

impl ScaleDefinition {
    pub fn qualitative_value(&self, grade: Grade) -> Option<f64> {
        self.qualitative_to_numeric.get(&grade).copied()
    }

    /// Fails on the first canonical grade without a quantitative range.
    pub fn axis_ranges(&self) -> Result<AxisRanges, ScoreError> {
        let missing = |grade: Grade| ScoreError::MissingScaleData {
            grade: grade.to_string(),
        };
        let ranges = self
            .quantitative_axis_ranges
            .as_ref()
            .ok_or_else(|| missing(Grade::Aaa))?;

        let mut resolved = [AxisRange::new(0.0, 0.0); 8];
        for (slot, grade) in resolved.iter_mut().zip(Grade::ORDER) {
            *slot = *ranges.get(&grade).ok_or_else(|| missing(grade))?;
        }
        Ok(AxisRanges(resolved))
    }
}
