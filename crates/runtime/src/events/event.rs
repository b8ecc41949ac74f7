//! Immutable event records.

use std::collections::BTreeMap;
use std::fmt;

use game_core::{EnemyId, RoomId};
use serde::{Deserialize, Serialize};

use super::EventKind;

/// A payload value. Payloads are open key/value maps of plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl EventValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:.2}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

macro_rules! int_value {
    ($($ty:ty),*) => {
        $(impl From<$ty> for EventValue {
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

int_value!(i32, u32, i64, u8, u16);

impl From<usize> for EventValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<bool> for EventValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for EventValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for EventValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for EventValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<RoomId> for EventValue {
    fn from(value: RoomId) -> Self {
        Self::Int(i64::from(value.0))
    }
}

impl From<EnemyId> for EventValue {
    fn from(value: EnemyId) -> Self {
        Self::Text(value.to_string())
    }
}

/// A published fact. Built with [`Event::with`], immutable once published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    kind: EventKind,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    payload: BTreeMap<String, EventValue>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            payload: BTreeMap::new(),
        }
    }

    /// Adds a payload entry, replacing any previous value under `key`.
    pub fn with(mut self, key: &str, value: impl Into<EventValue>) -> Self {
        self.payload.insert(key.to_owned(), value.into());
        self
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn payload(&self) -> &BTreeMap<String, EventValue> {
        &self.payload
    }

    pub fn get(&self, key: &str) -> Option<&EventValue> {
        self.payload.get(key)
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(EventValue::as_int)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(EventValue::as_str)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.payload.is_empty() {
            return Ok(());
        }
        f.write_str(" {")?;
        for (index, (key, value)) in self.payload.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, " {key}={value}")?;
        }
        f.write_str(" }")
    }
}
