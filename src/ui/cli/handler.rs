// Wed Jan 15 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::engine::{self, ConversionReport};
use crate::ui::banner::Banner;
use colored::Colorize;

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(&mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;

        if args.no_color {
            colored::control::set_override(false);
        }

        if !self.quiet {
            Banner::ooa2r2().print();
        }

        self.setup_logging(&args)?;

        self.handle_convert(&args.to_config())
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            other => anyhow::bail!("Unknown log level: {}", other),
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .ok();

        Ok(())
    }

    fn handle_convert(&self, config: &Config) -> anyhow::Result<()> {
        println!(
            "{} Starting conversion from '{}' to '{}'",
            "[+]".green(),
            config.json_file.display(),
            config.output_file.display()
        );

        let report = engine::run(config)?;

        for diagnostic in &report.diagnostics {
            println!("{} {}", "[-]".yellow(), diagnostic);
        }

        if !self.quiet {
            self.print_summary(&report);
        }

        println!("{} Conversion done.", "[+]".green());
        println!(
            "{} Execute: r2 -i {} [program]",
            "[!]".cyan(),
            config.output_file.display()
        );
        Ok(())
    }

    fn print_summary(&self, report: &ConversionReport) {
        let stats = &report.stats;
        println!("{}", "Conversion Summary".cyan().bold());
        println!("{}", "-".repeat(40).cyan());
        println!("  Classes:         {}", stats.classes.to_string().green());
        println!("  Virtual tables:  {}", stats.vtables.to_string().green());
        println!("  Methods:         {}", stats.methods.to_string().green());
        println!("  Virtual methods: {}", stats.virtual_methods.to_string().green());
        println!("  Member usages:   {}", stats.usages.to_string().green());
        if stats.skipped_entries > 0 {
            println!(
                "  Skipped incomplete methods/vftable entries: {}",
                stats.skipped_entries.to_string().yellow()
            );
        }
        println!();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
