// Tue Jan 13 2026 - Alex

use crate::structure::ClassLayout;
use std::io::{self, Write};

const HEADER_RULE: &str = "########################################################";

/// Writes radare2 commands to any sink. The sink is owned for the whole run
/// and written strictly in order.
pub struct R2ScriptWriter<W: Write> {
    out: W,
}

impl<W: Write> R2ScriptWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self, source: &str) -> io::Result<()> {
        writeln!(self.out, "{}", HEADER_RULE)?;
        writeln!(self.out, "#")?;
        writeln!(self.out, "# This file was generated by ooa2r2.")?;
        writeln!(self.out, "# Source: {}", source)?;
        writeln!(self.out, "#")?;
        writeln!(self.out, "{}", HEADER_RULE)?;
        Ok(())
    }

    /// `ac`, then one `acv` per vtable, then one `acm` per method.
    pub fn write_class(&mut self, class: &ClassLayout) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "ac {}", class.name)?;

        for (addr, vfptr) in &class.vtables {
            writeln!(self.out, "acv {} {} {}", class.name, addr, vfptr)?;
        }

        for (addr, method) in &class.methods {
            match method.kind.virtual_offset() {
                Some(offset) => {
                    writeln!(self.out, "acm {} {} {} {}", class.name, method.name, addr, offset)?
                }
                None => writeln!(self.out, "acm {} {} {}", class.name, method.name, addr)?,
            }
        }
        Ok(())
    }

    /// One `CCu` comment per `(address, class flag)` pair.
    pub fn write_usages<'a, I>(&mut self, usages: I) -> io::Result<()>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        writeln!(self.out)?;
        for (addr, class) in usages {
            writeln!(self.out, "CCu Member usage: {} @{}", class, addr)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
