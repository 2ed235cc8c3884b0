// Tue Jan 13 2026 - Alex

pub mod core;
pub mod report;

pub use self::core::Converter;
pub use report::{ConversionReport, ConversionStats, Diagnostic};

use crate::config::Config;
use crate::error::{ConvertError, ConvertResult};
use crate::model::OoaDocument;
use crate::output::R2ScriptWriter;
use std::fs::File;
use std::io::BufWriter;

/// Runs one conversion from `config.json_file` into `config.output_file`.
///
/// The output is created and its header written before the input is read, so
/// a missing or malformed input still leaves a header-only script behind.
pub fn run(config: &Config) -> ConvertResult<ConversionReport> {
    config.validate()?;

    let file = File::create(&config.output_file).map_err(|source| ConvertError::CreateOutput {
        path: config.output_file.clone(),
        source,
    })?;
    let mut writer = R2ScriptWriter::new(BufWriter::new(file));
    writer.write_header(&config.json_file.display().to_string())?;
    writer.flush()?;

    let doc = OoaDocument::load(&config.json_file)?;
    log::info!(
        "loaded {} structures from {}",
        doc.structures.as_ref().map_or(0, Vec::len),
        config.json_file.display()
    );

    let report = Converter::new(config).convert(&doc, &mut writer)?;
    writer.flush()?;
    Ok(report)
}
