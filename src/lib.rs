pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::render::render;
pub use app::session::{Session, SessionOptions, SessionState};
pub use config::{settings::Settings, toml_config::TomlConfig};
pub use crate::core::derangement::{generate, generate_with_rng, regenerate, MIN_PARTICIPANTS};
pub use crate::core::draw::DrawEngine;
pub use domain::model::{Assignment, OutputFormat, Pairing};
pub use domain::roster::Roster;
pub use utils::error::{Result, SantaError};
