// Tue Jan 13 2026 - Alex

use crate::error::ConvertError;
use std::path::PathBuf;

pub const DEFAULT_FLAG_PREFIX: &str = "ooa.";

#[derive(Debug, Clone)]
pub struct Config {
    pub json_file: PathBuf,
    pub output_file: PathBuf,
    pub import_usages: bool,
    pub use_demangled_names: bool,
    pub flag_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_file: PathBuf::new(),
            output_file: PathBuf::new(),
            import_usages: true,
            use_demangled_names: false,
            flag_prefix: DEFAULT_FLAG_PREFIX.to_string(),
        }
    }
}

impl Config {
    pub fn new(json_file: PathBuf, output_file: PathBuf) -> Self {
        Self {
            json_file,
            output_file,
            ..Self::default()
        }
    }

    pub fn with_import_usages(mut self, import: bool) -> Self {
        self.import_usages = import;
        self
    }

    pub fn with_demangled_names(mut self, demangled: bool) -> Self {
        self.use_demangled_names = demangled;
        self
    }

    pub fn with_flag_prefix(mut self, prefix: &str) -> Self {
        self.flag_prefix = prefix.to_string();
        self
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.json_file.as_os_str().is_empty() {
            return Err(ConvertError::InvalidConfig("json_file must be set".to_string()));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(ConvertError::InvalidConfig("output_file must be set".to_string()));
        }
        if self.json_file == self.output_file {
            return Err(ConvertError::InvalidConfig(
                "output_file must differ from json_file".to_string(),
            ));
        }
        if self.flag_prefix.is_empty() {
            return Err(ConvertError::InvalidConfig("flag_prefix must not be empty".to_string()));
        }
        if self.flag_prefix.chars().any(char::is_whitespace) {
            return Err(ConvertError::InvalidConfig(
                "flag_prefix must not contain whitespace".to_string(),
            ));
        }
        Ok(())
    }
}
