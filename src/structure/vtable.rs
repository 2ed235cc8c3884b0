// Tue Jan 15 2026 - Alex

use crate::model::{Method, Scalar, Vftable, VftableEntry};
use crate::utils::string::flag_name;
use std::fmt;

/// How a method was recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodKind {
    /// Listed in the structure's own method list, with OOAnalyzer's type tag.
    Plain { tag: String },
    /// Occupies a virtual table slot at `offset`.
    Virtual { tag: String, offset: String },
}

impl MethodKind {
    pub fn is_virtual(&self) -> bool {
        matches!(self, MethodKind::Virtual { .. })
    }

    pub fn virtual_offset(&self) -> Option<&str> {
        match self {
            MethodKind::Virtual { offset, .. } => Some(offset),
            MethodKind::Plain { .. } => None,
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodKind::Plain { tag } => write!(f, "{}", tag),
            MethodKind::Virtual { tag, offset } => write!(f, "virt_{}_{}", tag, offset),
        }
    }
}

/// A method ready to be attached to its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSlot {
    pub name: String,
    pub kind: MethodKind,
}

impl MethodSlot {
    /// Slot for an entry of the structure's method list. `None` without a name.
    pub fn from_method(prefix: &str, method: &Method) -> Option<Self> {
        let name = method.name.as_deref()?;
        Some(Self {
            name: flag_name(prefix, name),
            kind: MethodKind::Plain { tag: tag_of(method.kind.as_ref()) },
        })
    }

    /// Slot for a vftable entry. Entries without a name or an offset give `None`.
    pub fn from_entry(prefix: &str, entry: &VftableEntry) -> Option<Self> {
        let name = entry.name.as_deref()?;
        let offset = entry.offset.as_ref()?;
        Some(Self {
            name: flag_name(prefix, name),
            kind: MethodKind::Virtual {
                tag: tag_of(entry.kind.as_ref()),
                offset: offset.to_string(),
            },
        })
    }
}

fn tag_of(kind: Option<&Scalar>) -> String {
    kind.map(Scalar::to_string).unwrap_or_default()
}

/// Returns the vfptr field text for a table, if the table names one.
pub fn vfptr_of(table: &Vftable) -> Option<String> {
    table.vfptr.as_ref().map(Scalar::to_string)
}
