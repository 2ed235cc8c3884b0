// Tue Jan 13 2026 - Alex

pub mod value;

pub use value::{HexAddress, Scalar};

use crate::error::{ConvertError, ConvertResult};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use value::{lenient, lenient_list};

/// Top level of an OOAnalyzer JSON export. Only the parts the converter
/// reads are modelled; everything else is ignored.
///
/// Every field below the top level is read leniently: a record with a
/// missing or oddly typed field still parses, and the converter decides
/// whether it is usable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OoaDocument {
    #[serde(rename = "Structures", default, deserialize_with = "lenient_list")]
    pub structures: Option<Vec<Structure>>,
    #[serde(rename = "Usages", default, deserialize_with = "lenient_list")]
    pub usages: Option<Vec<UsageGroup>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Structure {
    #[serde(rename = "Name", default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(rename = "DemangledName", default, deserialize_with = "lenient")]
    pub demangled_name: Option<String>,
    #[serde(rename = "Methods", default, deserialize_with = "lenient_list")]
    pub methods: Option<Vec<Method>>,
    #[serde(rename = "Vftables", default, deserialize_with = "lenient_list")]
    pub vftables: Option<Vec<Vftable>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Method {
    #[serde(default, deserialize_with = "lenient")]
    pub ea: Option<HexAddress>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Vftable {
    #[serde(default, deserialize_with = "lenient")]
    pub ea: Option<HexAddress>,
    #[serde(default, deserialize_with = "lenient")]
    pub vfptr: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub entries: Option<Vec<VftableEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VftableEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub ea: Option<HexAddress>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub offset: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageGroup {
    #[serde(rename = "Members", default, deserialize_with = "lenient_list")]
    pub members: Option<Vec<MemberUsage>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberUsage {
    #[serde(default, deserialize_with = "lenient")]
    pub ea: Option<HexAddress>,
    #[serde(default, deserialize_with = "lenient")]
    pub class: Option<String>,
}

impl Structure {
    /// Name to show for the class. The demangled name is only used when asked
    /// for and non-empty. `None` when the structure has no usable `Name`.
    pub fn display_name(&self, prefer_demangled: bool) -> Option<&str> {
        match &self.demangled_name {
            Some(demangled) if prefer_demangled && !demangled.is_empty() => Some(demangled.as_str()),
            _ => self.name.as_deref(),
        }
    }

    pub fn methods(&self) -> &[Method] {
        self.methods.as_deref().unwrap_or(&[])
    }

    pub fn vftables(&self) -> &[Vftable] {
        self.vftables.as_deref().unwrap_or(&[])
    }
}

impl Vftable {
    pub fn entries(&self) -> &[VftableEntry] {
        self.entries.as_deref().unwrap_or(&[])
    }
}

impl OoaDocument {
    pub fn parse(json: &str) -> ConvertResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> ConvertResult<Self> {
        let file = File::open(path).map_err(|source| ConvertError::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = serde_json::from_reader(BufReader::new(file))?;
        Ok(doc)
    }

    /// `Members` of the first usage group, if the document has one.
    pub fn member_usages(&self) -> Option<&[MemberUsage]> {
        self.usages
            .as_ref()?
            .first()?
            .members
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Version": "1.0",
        "Structures": [
            {
                "Name": "cls_0x401000",
                "DemangledName": "Foo::Bar",
                "Methods": [
                    {"ea": "401000", "name": "ctor_401000", "type": "ctor"}
                ],
                "Vftables": [
                    {
                        "ea": "4a0000",
                        "vfptr": "0",
                        "entries": [
                            {"ea": "402000", "name": "virt_402000", "type": "meth", "offset": "0"}
                        ]
                    },
                    {"ea": "4a0100", "vfptr": "8"}
                ]
            }
        ],
        "Usages": [
            {"Members": [{"ea": "405000", "class": "Foo::Bar"}]}
        ]
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let doc = OoaDocument::parse(SAMPLE).unwrap();
        let structures = doc.structures.as_ref().unwrap();
        assert_eq!(structures.len(), 1);

        let st = &structures[0];
        assert_eq!(st.methods().len(), 1);
        assert_eq!(st.vftables().len(), 2);
        assert_eq!(st.vftables()[0].entries().len(), 1);
        assert!(st.vftables()[1].entries().is_empty());
        assert_eq!(doc.member_usages().map(|m| m.len()), Some(1));
    }

    #[test]
    fn test_display_name() {
        let doc = OoaDocument::parse(SAMPLE).unwrap();
        let st = &doc.structures.as_ref().unwrap()[0];
        assert_eq!(st.display_name(false), Some("cls_0x401000"));
        assert_eq!(st.display_name(true), Some("Foo::Bar"));
    }

    #[test]
    fn test_empty_demangled_name_falls_back() {
        let st: Structure = serde_json::from_str(
            r#"{"Name": "cls_1", "DemangledName": "", "Methods": []}"#,
        )
        .unwrap();
        assert_eq!(st.display_name(true), Some("cls_1"));
    }

    #[test]
    fn test_missing_sections() {
        let doc = OoaDocument::parse("{}").unwrap();
        assert!(doc.structures.is_none());
        assert!(doc.member_usages().is_none());

        let doc = OoaDocument::parse(r#"{"Structures": null, "Usages": []}"#).unwrap();
        assert!(doc.structures.is_none());
        assert!(doc.member_usages().is_none());

        let doc = OoaDocument::parse(r#"{"Usages": [{}]}"#).unwrap();
        assert!(doc.member_usages().is_none());
    }

    #[test]
    fn test_missing_leaf_fields_still_parse() {
        let doc = OoaDocument::parse(
            r#"{"Structures": [{"Methods": [{"ea": "401000"}],
                "Vftables": [{"entries": [{"name": "vf", "offset": 4}]}]}],
                "Usages": [{"Members": [{"ea": "405000"}, 17]}]}"#,
        )
        .unwrap();
        let st = &doc.structures.as_ref().unwrap()[0];
        assert!(st.name.is_none());
        assert!(st.display_name(true).is_none());
        assert!(st.methods()[0].name.is_none());
        assert!(st.vftables()[0].ea.is_none());
        assert!(st.vftables()[0].entries()[0].ea.is_none());

        let members = doc.member_usages().unwrap();
        assert_eq!(members.len(), 1);
        assert!(members[0].class.is_none());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            OoaDocument::parse("{ not json"),
            Err(ConvertError::InvalidJson(_))
        ));
        assert!(matches!(
            OoaDocument::parse("\"just a string\""),
            Err(ConvertError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = OoaDocument::load(Path::new("/nonexistent/ooa.json")).unwrap_err();
        assert!(matches!(err, ConvertError::OpenInput { .. }));
    }
}
