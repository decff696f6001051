mod commands;
mod config;
mod terminal;

use commands::{CommandLine, decode};
use config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        show_binary: commands.binary,
        q_level: commands.quiet,
    };

    print::banner(cfg.q_level);
    decode::decode(&commands.wwn, &cfg)?;
    print::end_of_program(cfg.q_level);

    Ok(())
}
