// Tue Jan 13 2026 - Alex

pub mod script;

pub use script::R2ScriptWriter;
