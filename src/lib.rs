pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod flows;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::client::{deck::DeckClient, users::UsersClient};
pub use crate::core::{check::Expect, context::FlowContext, sequence::FlowSequence};
pub use crate::domain::ports::Flow;
pub use crate::flows::{deck::DeckFlow, users::UserCrudFlow};
pub use crate::utils::error::{CheckError, Result};
