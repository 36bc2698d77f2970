use std::fmt::{self, Display};

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: usize },
    #[error("{axis} index {index} out of bounds (expected 1..={size})")]
    OutOfBounds {
        axis: Axis,
        index: usize,
        size: usize,
    },
    #[error("statistic is undefined for {trials} trial(s), at least 2 are required")]
    UndefinedStatistic { trials: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
