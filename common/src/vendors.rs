//! # Storage Vendor Lookup
//!
//! Maps the OUI of an NAA 6 WWN (colon form, e.g. `00:60:e8`) to the
//! storage array vendor that issued it.

/// Known OUIs of storage array vendors.
///
/// Keys are matched exactly. The VMware entry keeps its uppercase `C`, and
/// since OUIs are always derived from a lowercased address it never matches.
pub const VENDORS: &[(&str, &str)] = &[
    ("00:00:97", "EMC"),
    ("00:60:16", "EMC"),
    ("00:60:48", "EMC"),
    ("00:01:44", "EMC"),
    ("00:a0:98", "Netapp"),
    ("0a:98:00", "Netapp"),
    ("00:50:76", "IBM"),
    ("00:60:e8", "Hitachi"),
    ("00:0C:29", "VMware"),
];

/// OUI of EMC (VMAX/Symmetrix) arrays that embed a serial and LUN id.
pub const OUI_EMC: &str = "00:00:97";

/// OUI of Hitachi arrays that embed a serial and LUN id.
pub const OUI_HITACHI: &str = "00:60:e8";

/// Looks up the vendor name of an OUI in [`VENDORS`].
pub fn lookup(oui: &str) -> Option<&'static str> {
    VENDORS
        .iter()
        .find(|(key, _)| *key == oui)
        .map(|(_, vendor)| *vendor)
}

/// Defines the contract for resolving storage vendors from OUIs.
pub trait VendorRepository {
    /// Retrieves the vendor name for a given OUI.
    ///
    /// # Returns
    /// * `Some(&str)` - The name of the vendor if found.
    /// * `None` - If the OUI is unknown.
    fn get_vendor(&self, oui: &str) -> Option<&'static str>;
}

/// Vendor repository backed by the built-in [`VENDORS`] table.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticVendorRepo;

impl VendorRepository for StaticVendorRepo {
    fn get_vendor(&self, oui: &str) -> Option<&'static str> {
        lookup(oui)
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
