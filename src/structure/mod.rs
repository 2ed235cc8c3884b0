// Tue Jan 15 2026 - Alex

pub mod vtable;

pub use vtable::{MethodKind, MethodSlot};

use crate::model::Structure;
use crate::utils::string::flag_name;
use indexmap::IndexMap;

/// Everything the script needs to declare one class. Keys are rendered
/// addresses (`0x...`), iterated in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct ClassLayout {
    pub name: String,
    pub vtables: IndexMap<String, String>,
    pub methods: IndexMap<String, MethodSlot>,
    /// Methods and vftable entries dropped for a missing address, name or offset.
    pub skipped_entries: usize,
}

impl ClassLayout {
    /// Merges the structure's methods and vftable entries by address. A vftable
    /// entry replaces a plain method at the same address but keeps its position.
    /// Returns `None` when the structure has no name to declare it under.
    pub fn from_structure(st: &Structure, prefix: &str, prefer_demangled: bool) -> Option<Self> {
        let name = flag_name(prefix, st.display_name(prefer_demangled)?);

        let mut skipped_entries = 0;
        let mut methods = IndexMap::with_capacity(st.methods().len());
        for method in st.methods() {
            match (&method.ea, MethodSlot::from_method(prefix, method)) {
                (Some(ea), Some(slot)) => {
                    methods.insert(ea.to_string(), slot);
                }
                _ => {
                    log::debug!("{}: method {:?} is missing ea or name, skipped", name, method);
                    skipped_entries += 1;
                }
            }
        }

        for table in st.vftables() {
            for entry in table.entries() {
                match (&entry.ea, MethodSlot::from_entry(prefix, entry)) {
                    (Some(ea), Some(slot)) => {
                        methods.insert(ea.to_string(), slot);
                    }
                    _ => {
                        // TODO: confirm with OOAnalyzer output whether offset-less entries can occur
                        log::debug!("{}: vftable entry {:?} is incomplete, skipped", name, entry);
                        skipped_entries += 1;
                    }
                }
            }
        }

        let mut vtables = IndexMap::new();
        for table in st.vftables() {
            match (&table.ea, vtable::vfptr_of(table)) {
                (Some(ea), Some(vfptr)) => {
                    vtables.insert(ea.to_string(), vfptr);
                }
                _ => log::debug!("{}: vftable {:?} has no ea or vfptr, not attached", name, table.ea),
            }
        }

        Some(Self {
            name,
            vtables,
            methods,
            skipped_entries,
        })
    }

    pub fn virtual_method_count(&self) -> usize {
        self.methods.values().filter(|m| m.kind.is_virtual()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure(json: &str) -> Structure {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_plain_methods_only() {
        let st = structure(
            r#"{"Name": "cls_1", "Methods": [
                {"ea": "401000", "name": "ctor", "type": "ctor"},
                {"ea": "401100", "name": "meth_a", "type": "meth"},
                {"ea": "401200", "name": "meth_b", "type": "meth"}
            ]}"#,
        );
        let layout = ClassLayout::from_structure(&st, "ooa.", false).unwrap();
        assert_eq!(layout.name, "ooa.cls_1");
        assert_eq!(layout.methods.len(), 3);
        assert!(layout.vtables.is_empty());
        assert_eq!(layout.virtual_method_count(), 0);
    }

    #[test]
    fn test_vftable_entry_overrides_method() {
        let st = structure(
            r#"{"Name": "cls_1",
                "Methods": [
                    {"ea": "401000", "name": "plain_one", "type": "meth"},
                    {"ea": "401100", "name": "plain_two", "type": "meth"}
                ],
                "Vftables": [{"ea": "4a0000", "vfptr": "0", "entries": [
                    {"ea": "401000", "name": "virt_one", "type": "meth", "offset": "4"}
                ]}]}"#,
        );
        let layout = ClassLayout::from_structure(&st, "ooa.", false).unwrap();

        assert_eq!(layout.methods.len(), 2);
        let (addr, slot) = layout.methods.get_index(0).unwrap();
        assert_eq!(addr, "0x401000");
        assert_eq!(slot.name, "ooa.virt_one");
        assert_eq!(slot.kind.virtual_offset(), Some("4"));
        assert_eq!(layout.vtables.get("0x4a0000").map(String::as_str), Some("0"));
    }

    #[test]
    fn test_missing_entries_and_offsets() {
        let st = structure(
            r#"{"Name": "cls_1", "Methods": [],
                "Vftables": [
                    {"ea": "4a0000", "vfptr": "0"},
                    {"ea": "4a0100", "vfptr": "8", "entries": [
                        {"ea": "402000", "name": "no_offset", "type": "meth"},
                        {"ea": "402100", "name": "with_offset", "type": "meth", "offset": "8"}
                    ]}
                ]}"#,
        );
        let layout = ClassLayout::from_structure(&st, "ooa.", false).unwrap();
        assert_eq!(layout.vtables.len(), 2);
        assert_eq!(layout.methods.len(), 1);
        assert_eq!(layout.skipped_entries, 1);
        assert!(layout.methods.contains_key("0x402100"));
    }

    #[test]
    fn test_demangled_name() {
        let st = structure(r#"{"Name": "cls_1", "DemangledName": "Foo::Bar", "Methods": []}"#);
        assert_eq!(ClassLayout::from_structure(&st, "ooa.", true).unwrap().name, "ooa.FooBar");
        assert_eq!(ClassLayout::from_structure(&st, "ooa.", false).unwrap().name, "ooa.cls_1");
    }

    #[test]
    fn test_incomplete_records_are_skipped() {
        let st = structure(
            r#"{"Name": "cls_1",
                "Methods": [
                    {"ea": "401000", "name": "ok", "type": "meth"},
                    {"name": "no_ea", "type": "meth"},
                    {"ea": "401200", "type": "meth"}
                ],
                "Vftables": [
                    {"vfptr": "0", "entries": [
                        {"ea": "402000", "type": "meth", "offset": "0"},
                        {"name": "no_ea", "type": "meth", "offset": "4"},
                        {"ea": "402100", "name": "vf", "type": "meth", "offset": "8"}
                    ]}
                ]}"#,
        );
        let layout = ClassLayout::from_structure(&st, "ooa.", false).unwrap();
        assert_eq!(layout.methods.len(), 2);
        assert!(layout.methods.contains_key("0x401000"));
        assert!(layout.methods.contains_key("0x402100"));
        assert_eq!(layout.skipped_entries, 4);
        assert!(layout.vtables.is_empty());
    }

    #[test]
    fn test_structure_without_name() {
        let st = structure(r#"{"Methods": [{"ea": "401000", "name": "m"}]}"#);
        assert!(ClassLayout::from_structure(&st, "ooa.", false).is_none());
        assert!(ClassLayout::from_structure(&st, "ooa.", true).is_none());
    }
}
