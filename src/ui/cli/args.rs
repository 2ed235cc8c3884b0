// Wed Jan 15 2026 - Alex

use crate::config::{Config, DEFAULT_FLAG_PREFIX};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Single-dash multi-letter flags accepted for compatibility, with their long forms.
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-liu", "--leave-import-usage-info"),
    ("-dcn", "--use-demangled-class-names"),
];

#[derive(Parser, Debug)]
#[command(name = "ooa2r2")]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Export OOAnalyzer's output JSON file into a radare2 initialization script", long_about = None)]
pub struct Args {
    /// Path to the OOAnalyzer's output JSON file
    #[arg(short = 'j', long = "JSONFile", value_name = "JSON_FILE")]
    pub json_file: PathBuf,

    /// Export to a specified file path (ex: OutputFileName.r2)
    #[arg(short = 'o', long = "OutputFile", value_name = "OUT_FILE")]
    pub output_file: PathBuf,

    /// Don't export OOAnalyzer's usage info to radare2 (also -liu)
    #[arg(long = "leave-import-usage-info")]
    pub leave_import_usage_info: bool,

    /// Use demangled class names, if available, while initializing classes (also -dcn)
    #[arg(long = "use-demangled-class-names")]
    pub use_demangled_class_names: bool,

    /// Prefix put in front of every generated flag name
    #[arg(long, default_value = DEFAULT_FLAG_PREFIX)]
    pub prefix: String,

    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Parses the process arguments, accepting the legacy `-liu`/`-dcn` spellings.
    pub fn parse_with_legacy() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    pub fn to_config(&self) -> Config {
        Config::new(self.json_file.clone(), self.output_file.clone())
            .with_import_usages(!self.leave_import_usage_info)
            .with_demangled_names(self.use_demangled_class_names)
            .with_flag_prefix(&self.prefix)
    }
}

/// Rewrites `-liu` and `-dcn` to their long forms. clap only knows
/// single-character short flags, so these have to be mapped before parsing.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            LEGACY_FLAGS
                .iter()
                .find(|(short, _)| arg.to_str() == Some(*short))
                .map(|(_, long)| OsString::from(*long))
                .unwrap_or(arg)
        })
        .collect()
}
