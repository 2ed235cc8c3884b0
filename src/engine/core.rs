// Tue Jan 13 2026 - Alex

use crate::config::Config;
use crate::engine::report::{ConversionReport, Diagnostic};
use crate::model::{MemberUsage, OoaDocument, Structure};
use crate::output::R2ScriptWriter;
use crate::structure::ClassLayout;
use crate::utils::string::flag_name;
use indexmap::IndexMap;
use std::io::{self, Write};

pub struct Converter<'a> {
    config: &'a Config,
}

impl<'a> Converter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Emits every class and, when enabled, the member usage comments.
    /// Missing sections are reported in the returned report, never as errors.
    pub fn convert<W: Write>(
        &self,
        doc: &OoaDocument,
        writer: &mut R2ScriptWriter<W>,
    ) -> io::Result<ConversionReport> {
        let mut report = ConversionReport::default();

        match doc.structures.as_deref() {
            Some(structures) if !structures.is_empty() => {
                self.set_classes(structures, writer, &mut report)?;
            }
            _ => {
                log::warn!("document has no structures");
                report.diagnostics.push(Diagnostic::NoStructures);
            }
        }

        if self.config.import_usages {
            match doc.member_usages() {
                Some(members) => self.set_usages(members, writer, &mut report)?,
                None => {
                    log::warn!("document has no member usage info");
                    report.diagnostics.push(Diagnostic::NoUsages);
                }
            }
        } else {
            log::debug!("member usage import disabled");
        }

        Ok(report)
    }

    fn set_classes<W: Write>(
        &self,
        structures: &[Structure],
        writer: &mut R2ScriptWriter<W>,
        report: &mut ConversionReport,
    ) -> io::Result<()> {
        let mut skipped = 0;
        for st in structures {
            let Some(class) = ClassLayout::from_structure(
                st,
                &self.config.flag_prefix,
                self.config.use_demangled_names,
            ) else {
                log::debug!("structure without a name skipped");
                skipped += 1;
                continue;
            };
            log::debug!(
                "class {}: {} vtables, {} methods",
                class.name,
                class.vtables.len(),
                class.methods.len()
            );
            for (addr, method) in &class.methods {
                log::trace!("  {} {} [{}]", addr, method.name, method.kind);
            }
            writer.write_class(&class)?;
            report.stats.record_class(&class);
        }

        if skipped > 0 {
            log::warn!("{} structures have no name", skipped);
            report.diagnostics.push(Diagnostic::SkippedStructures(skipped));
        }
        Ok(())
    }

    fn set_usages<W: Write>(
        &self,
        members: &[MemberUsage],
        writer: &mut R2ScriptWriter<W>,
        report: &mut ConversionReport,
    ) -> io::Result<()> {
        let mut usages = IndexMap::with_capacity(members.len());
        let mut skipped = 0;
        for usage in members {
            match (&usage.ea, &usage.class) {
                (Some(ea), Some(class)) => {
                    usages.insert(ea.to_string(), flag_name(&self.config.flag_prefix, class));
                }
                _ => {
                    log::debug!("member usage {:?} is incomplete, skipped", usage);
                    skipped += 1;
                }
            }
        }

        writer.write_usages(&usages)?;
        report.stats.usages = usages.len();

        if skipped > 0 {
            log::warn!("{} member usages are incomplete", skipped);
            report.diagnostics.push(Diagnostic::SkippedUsages(skipped));
        }
        Ok(())
    }
}
