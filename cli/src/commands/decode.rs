use anyhow::Context;
use tracing::debug;
use wwnhandler_common::{Wwn, WwnReport};

use crate::config::Config;
use crate::terminal::{format, print};

/// Decodes a WWN and prints every field it carries.
pub fn decode(raw: &str, cfg: &Config) -> anyhow::Result<()> {
    let wwn: Wwn = Wwn::new(raw).with_context(|| format!("Cannot parse WWN {raw:?}"))?;
    debug!("Decoding {wwn:?}");

    let report: WwnReport = wwn
        .report()
        .with_context(|| format!("Cannot decode WWN {wwn}"))?;

    let lines = format::report_to_key_value_pairs(&report, cfg.show_binary);
    print::set_key_width(lines.iter().map(|(key, _)| *key));

    print::header("decoded wwn", cfg.q_level);
    for (key, value) in lines {
        print::aligned_line(key, value);
    }

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
