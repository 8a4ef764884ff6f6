pub mod cards;
pub mod check;
pub mod context;
pub mod sequence;

pub use crate::domain::model::{DeckSnapshot, FlowReport, PileCount, StepReport};
pub use crate::domain::ports::Flow;
pub use crate::utils::error::Result;
