use std::sync::OnceLock;

use clap::Parser;

/// Component gallery for the Qualia design system
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Launch the gallery window maximized
    #[arg(long)]
    pub maximized: bool,

    /// Window title
    #[arg(long, default_value = "Qualia UI")]
    pub title: String,
}

static ARGS: OnceLock<Args> = OnceLock::new();

pub fn get_args() -> &'static Args {
    ARGS.get_or_init(Args::parse)
}
