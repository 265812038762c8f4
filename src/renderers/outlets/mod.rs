//! Outlet reporting of decoded scores
//!
//! Results leave the crate as named outlet messages, each carrying a list of
//! positional values, the way a patcher host receives `outlet(name, ...args)`
//! calls. The host side is anything implementing [`OutletSink`]; the JS
//! binding lives in `api::sink`, and [`RecordingSink`] keeps messages in
//! memory.

pub mod emitter;
pub mod settings;

pub use emitter::ResultEmitter;
pub use settings::{OutletNames, ReadSettings};

use serde::{Deserialize, Serialize};
use std::fmt;

/// One positional argument of an outlet message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutletValue {
    Int(u64),
    Float(f64),
    Text(String),
}

impl From<u64> for OutletValue {
    fn from(value: u64) -> Self {
        OutletValue::Int(value)
    }
}

impl From<usize> for OutletValue {
    fn from(value: usize) -> Self {
        OutletValue::Int(value as u64)
    }
}

impl From<u16> for OutletValue {
    fn from(value: u16) -> Self {
        OutletValue::Int(u64::from(value))
    }
}

impl From<u8> for OutletValue {
    fn from(value: u8) -> Self {
        OutletValue::Int(u64::from(value))
    }
}

impl From<f64> for OutletValue {
    fn from(value: f64) -> Self {
        OutletValue::Float(value)
    }
}

impl From<&str> for OutletValue {
    fn from(value: &str) -> Self {
        OutletValue::Text(value.to_string())
    }
}

impl From<String> for OutletValue {
    fn from(value: String) -> Self {
        OutletValue::Text(value)
    }
}

impl fmt::Display for OutletValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutletValue::Int(v) => write!(f, "{}", v),
            OutletValue::Float(v) => write!(f, "{}", v),
            OutletValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// A message sent on one named outlet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletMessage {
    pub outlet: String,
    pub args: Vec<OutletValue>,
}

impl OutletMessage {
    pub fn new(outlet: impl Into<String>, args: Vec<OutletValue>) -> Self {
        Self {
            outlet: outlet.into(),
            args,
        }
    }
}

impl fmt::Display for OutletMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.outlet)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Receiver of outlet messages
pub trait OutletSink {
    fn send(&mut self, outlet: &str, args: Vec<OutletValue>);
}

/// Sink that stores every message in arrival order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordingSink {
    pub messages: Vec<OutletMessage>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent on one outlet, in order
    pub fn on<'a>(&'a self, outlet: &'a str) -> impl Iterator<Item = &'a OutletMessage> + 'a {
        self.messages.iter().filter(move |m| m.outlet == outlet)
    }
}

impl OutletSink for RecordingSink {
    fn send(&mut self, outlet: &str, args: Vec<OutletValue>) {
        self.messages.push(OutletMessage::new(outlet, args));
    }
}

impl<S: OutletSink + ?Sized> OutletSink for &mut S {
    fn send(&mut self, outlet: &str, args: Vec<OutletValue>) {
        (**self).send(outlet, args);
    }
}
