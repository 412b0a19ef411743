use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::frequency::Frequency;

/// Per-frequency thresholds in dB HL for one ear and one pathway.
///
/// Only measured frequencies are stored; a frequency missing from the map
/// means "no measurement taken", never zero. JSON `null` entries are accepted
/// on input and read as absent. Finite values outside -10..=120 are kept as
/// given, range checking is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ThresholdMap(BTreeMap<Frequency, f64>);

impl ThresholdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(frequency, dB HL)` pairs. Later pairs overwrite
    /// earlier ones at the same frequency.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (Frequency, f64)>,
    ) -> Result<Self, CoreError> {
        let mut map = Self::new();
        for (frequency, value) in pairs {
            map.set(frequency, value)?;
        }
        Ok(map)
    }

    pub fn get(&self, frequency: Frequency) -> Option<f64> {
        self.0.get(&frequency).copied()
    }

    /// Record a measurement. NaN and infinities are a caller contract
    /// violation and are rejected.
    pub fn set(&mut self, frequency: Frequency, value: f64) -> Result<(), CoreError> {
        if !value.is_finite() {
            return Err(CoreError::NonFiniteValue {
                frequency: frequency.label().to_string(),
                value,
            });
        }
        self.0.insert(frequency, value);
        Ok(())
    }

    /// Clear a measurement, returning the previous value.
    pub fn remove(&mut self, frequency: Frequency) -> Option<f64> {
        self.0.remove(&frequency)
    }

    /// Present measurements in ascending frequency order.
    pub fn iter(&self) -> impl Iterator<Item = (Frequency, f64)> + '_ {
        self.0.iter().map(|(f, v)| (*f, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ThresholdMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<Frequency, Option<f64>>::deserialize(deserializer)?;
        let present = raw
            .into_iter()
            .filter_map(|(frequency, value)| value.map(|v| (frequency, v)));
        ThresholdMap::from_pairs(present).map_err(serde::de::Error::custom)
    }
}

/// Which ear a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EarSide {
    Right,
    Left,
}

impl EarSide {
    pub const BOTH: [EarSide; 2] = [EarSide::Right, EarSide::Left];

    pub fn label(self) -> &'static str {
        match self {
            Self::Right => "Right",
            Self::Left => "Left",
        }
    }
}

impl fmt::Display for EarSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value recorded independently for each ear.
///
/// Either side may be missing or `null` in stored JSON; it then reads as
/// `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
#[ts(export)]
pub struct EarPair<T> {
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub right: T,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub left: T,
}

impl<T> EarPair<T> {
    pub fn new(right: T, left: T) -> Self {
        Self { right, left }
    }

    pub fn get(&self, side: EarSide) -> &T {
        match side {
            EarSide::Right => &self.right,
            EarSide::Left => &self.left,
        }
    }

    pub fn as_ref(&self) -> EarPair<&T> {
        EarPair {
            right: &self.right,
            left: &self.left,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> EarPair<U> {
        EarPair {
            right: f(self.right),
            left: f(self.left),
        }
    }
}
