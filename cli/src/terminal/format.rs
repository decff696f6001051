use crate::terminal::colors;
use colored::*;
use wwnhandler_common::WwnReport;

/// Placeholder shown for fields the vendor does not encode.
const EMPTY_FIELD: &str = "-";

fn value_or_placeholder(value: &str) -> ColoredString {
    if value.is_empty() {
        EMPTY_FIELD.color(colors::EMPTY_VALUE)
    } else {
        value.color(colors::TEXT_DEFAULT)
    }
}

/// Turns a decoded WWN into the labelled lines of the report.
pub fn report_to_key_value_pairs(
    report: &WwnReport,
    show_binary: bool,
) -> Vec<(&'static str, ColoredString)> {
    let mut lines: Vec<(&'static str, ColoredString)> = vec![
        ("WWN", report.wwn.as_str().color(colors::ACCENT)),
        ("WWN (no dots)", report.wwn_nodots.as_str().color(colors::ACCENT)),
        ("OUI", value_or_placeholder(&report.oui)),
        ("Vendor", value_or_placeholder(report.vendor)),
        ("Serial Number", value_or_placeholder(&report.serial)),
        ("LUN ID", value_or_placeholder(&report.lunid)),
    ];

    if show_binary {
        lines.push(("Binary", value_or_placeholder(&report.binary)));
    }

    lines
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
