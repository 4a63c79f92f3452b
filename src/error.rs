//! Errors raised while building bodies and scenarios
//!
//! Numerical degeneracies inside a step (coincident bodies, zero total mass)
//! are not represented here; they surface as inf/NaN in the state

use std::{error, fmt::Display};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    NonPositiveMass(f64),
    InvalidBodyLength(usize),
    InvalidGenerator(String),
    InvalidParameters(String),
    MissingBodies,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NonPositiveMass(m) => write!(f, "Body mass must be positive and finite, got {}", m),
            Error::InvalidBodyLength(n) => {
                write!(f, "Body needs 5 values [x, y, m, vx, vy], got {}", n)
            }
            Error::InvalidGenerator(s) => write!(f, "Invalid generator parameters: {}", s),
            Error::InvalidParameters(s) => write!(f, "Invalid simulation parameters: {}", s),
            Error::MissingBodies => write!(f, "Scenario defines neither bodies nor a generator"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
