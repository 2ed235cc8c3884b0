// Tue Jan 13 2026 - Alex

use crate::structure::ClassLayout;
use std::fmt;

/// A schema gap that was tolerated during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    NoStructures,
    NoUsages,
    /// Structures dropped because they carry no usable name.
    SkippedStructures(usize),
    /// Member usages dropped for a missing address or class.
    SkippedUsages(usize),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoStructures => write!(f, "No Structures found!"),
            Diagnostic::NoUsages => write!(f, "No Usage info found!"),
            Diagnostic::SkippedStructures(n) => write!(f, "Skipped {} structure(s) without a name", n),
            Diagnostic::SkippedUsages(n) => write!(f, "Skipped {} incomplete member usage(s)", n),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub classes: usize,
    pub vtables: usize,
    pub methods: usize,
    pub virtual_methods: usize,
    pub skipped_entries: usize,
    pub usages: usize,
}

impl ConversionStats {
    pub fn record_class(&mut self, class: &ClassLayout) {
        self.classes += 1;
        self.vtables += class.vtables.len();
        self.methods += class.methods.len();
        self.virtual_methods += class.virtual_method_count();
        self.skipped_entries += class.skipped_entries;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub stats: ConversionStats,
    pub diagnostics: Vec<Diagnostic>,
}

impl ConversionReport {
    pub fn has(&self, diagnostic: Diagnostic) -> bool {
        self.diagnostics.contains(&diagnostic)
    }
}
