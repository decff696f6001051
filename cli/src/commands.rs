pub mod decode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "wwnhandler")]
#[command(version)]
#[command(about = "Decode Fibre Channel World Wide Names (NAA 6).")]
pub struct CommandLine {
    /// WWN to decode, with or without colons (e.g. 60:06:01:60:... or 60060160...)
    pub wwn: String,

    /// Also print the binary encoding of the WWN
    #[arg(short, long)]
    pub binary: bool,

    /// Hide the banner and headers (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
