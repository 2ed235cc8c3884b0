// Wed Jan 15 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{normalize_legacy_flags, Args};
pub use handler::CommandHandler;

pub fn parse_args() -> Args {
    Args::parse_with_legacy()
}

pub fn run() -> anyhow::Result<()> {
    let args = parse_args();
    let mut handler = CommandHandler::new();
    handler.execute(args)
}
