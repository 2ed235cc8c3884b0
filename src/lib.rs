// Tue Jan 15 2026 - Alex

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod output;
pub mod structure;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use engine::{run, ConversionReport, Converter};
pub use error::{ConvertError, ConvertResult};
pub use model::OoaDocument;
pub use output::R2ScriptWriter;
pub use structure::ClassLayout;
