//! # World Wide Name Model
//!
//! Defines [`Wwn`], a validated and normalized Fibre Channel address.
//!
//! Accepted inputs:
//! * 16 hex digits (e.g. `6006016012345678`).
//! * 32 hex digits, used by arrays that double-encode the name.
//! * The colon-separated form of either (e.g. `60:06:01:60:12:34:56:78`).
//! * Any of the above with a leading `3`, as found in some OS disk UUIDs.
//!
//! Only NAA type 6 (registered extended) names are supported. Every other
//! field (OUI, vendor, serial, LUN id) is derived from the stored address
//! on each access.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::RegexSet;
use tracing::{debug, trace};

use crate::error::WwnError;
use crate::utils::hex::{hex_to_binary, pairs, slice, tail};
use crate::vendors::{OUI_EMC, OUI_HITACHI, StaticVendorRepo, VendorRepository};

/// Length of a WWN embedded in an OS UUID, including the leading `3`.
const OS_UUID_LEN: usize = 33;

static WWN_FORMATS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"^[0-9a-fA-F]{16}$",
        r"^[0-9a-fA-F]{32}$",
        r"^([0-9a-fA-F]{2}|:){15}$",
        r"^([0-9a-fA-F]{2}|:){31}$",
    ])
    .expect("failed to compile WWN formats")
});

/// A Fibre Channel World Wide Name, NAA type 6.
///
/// The address is stored once, lowercase and colon separated.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Wwn {
    address: String,
}

/// All decoded fields of a [`Wwn`], ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WwnReport {
    pub wwn: String,
    pub wwn_nodots: String,
    pub oui: String,
    pub vendor: &'static str,
    pub serial: String,
    pub lunid: String,
    pub binary: String,
}

impl Wwn {
    /// Validates and normalizes a raw WWN string.
    ///
    /// The shape is checked before the NAA type, so a malformed address
    /// always reports [`WwnError::InvalidFormat`].
    pub fn new(raw: &str) -> Result<Self, WwnError> {
        let address: &str = strip_os_prefix(raw);

        if !WWN_FORMATS.is_match(address) {
            return Err(WwnError::InvalidFormat(address.to_string()));
        }

        if !address.starts_with('6') {
            return Err(WwnError::UnsupportedNaa(address.to_string()));
        }

        let address: String = if address.contains(':') {
            address.to_lowercase()
        } else {
            pairs(address).join(":").to_lowercase()
        };

        debug!("Normalized {raw:?} to {address}");
        Ok(Self { address })
    }

    /// The canonical colon-separated address.
    pub fn wwn(&self) -> &str {
        &self.address
    }

    /// The address without colons.
    pub fn wwn_nodots(&self) -> String {
        self.address.replace(':', "")
    }

    /// Organizationally unique identifier, as used for vendor lookup.
    ///
    /// For NAA 6 these are the 7 hex digits following the NAA nibble,
    /// regrouped into octets. The seventh digit has no partner and is
    /// dropped, e.g. `6006016...` gives `00:60:16`.
    pub fn oui(&self) -> Result<String, WwnError> {
        match self.address.chars().next() {
            Some('6') => {
                let nodots: String = self.wwn_nodots();
                Ok(pairs(slice(&nodots, 1, 8)).join(":"))
            }
            Some('1' | '2' | '5' | 'c') => Err(WwnError::UnsupportedNaa(self.address.clone())),
            _ => Err(WwnError::UnnormalizedAddress(self.address.clone())),
        }
    }

    /// Name of the vendor that issued this WWN, or `""` if unknown.
    pub fn vendor(&self) -> &'static str {
        self.vendor_from(&StaticVendorRepo)
    }

    /// Like [`Wwn::vendor`], resolving the OUI through `repo`.
    pub(crate) fn vendor_from<R: VendorRepository>(&self, repo: &R) -> &'static str {
        let Ok(oui) = self.oui() else {
            return "";
        };
        let vendor: &'static str = repo.get_vendor(&oui).unwrap_or_default();
        trace!("OUI {oui} resolved to vendor {vendor:?}");
        vendor
    }

    /// The address as a base-2 string, without prefix or leading zeros.
    pub fn wwn_to_binary(&self) -> String {
        // The address only ever holds hex digits and colons.
        hex_to_binary(&self.wwn_nodots()).unwrap_or_default()
    }

    /// Array serial number embedded in the WWN.
    ///
    /// * EMC: 12 raw hex digits following the OUI.
    /// * Hitachi: 4 hex digits converted to decimal.
    /// * Anyone else: `""`.
    pub fn serial(&self) -> Result<String, WwnError> {
        let oui: String = self.oui()?;
        let nodots: String = self.wwn_nodots();

        match oui.as_str() {
            OUI_EMC => Ok(slice(&nodots, 8, 20).to_string()),
            OUI_HITACHI => {
                let field: &str = slice(&nodots, 10, 14);
                u32::from_str_radix(field, 16)
                    .map(|serial| serial.to_string())
                    .map_err(|_| WwnError::InvalidSerial(self.address.clone()))
            }
            _ => Ok(String::new()),
        }
    }

    /// LUN identifier embedded in the WWN.
    ///
    /// * EMC VMAX: the last 5 bytes, read as text.
    /// * Hitachi: the last 5 characters of the colon form, colon included.
    /// * Anyone else: `""`.
    pub fn lunid(&self) -> Result<String, WwnError> {
        let oui: String = self.oui()?;

        match oui.as_str() {
            OUI_EMC => {
                let nodots: String = self.wwn_nodots();
                let bytes: Vec<u8> = hex::decode(tail(&nodots, 10))
                    .map_err(|_| WwnError::LunDecode(self.address.clone()))?;
                String::from_utf8(bytes).map_err(|_| WwnError::LunDecode(self.address.clone()))
            }
            OUI_HITACHI => Ok(tail(&self.address, 5).to_string()),
            _ => Ok(String::new()),
        }
    }

    /// Collects every decoded field.
    pub fn report(&self) -> Result<WwnReport, WwnError> {
        Ok(WwnReport {
            wwn: self.address.clone(),
            wwn_nodots: self.wwn_nodots(),
            oui: self.oui()?,
            vendor: self.vendor(),
            serial: self.serial()?,
            lunid: self.lunid()?,
            binary: self.wwn_to_binary(),
        })
    }
}

/// Removes the `3` some operating systems put in front of a 32 digit WWN.
fn strip_os_prefix(raw: &str) -> &str {
    if raw.len() == OS_UUID_LEN {
        if let Some(stripped) = raw.strip_prefix('3') {
            return stripped;
        }
    }
    raw
}

impl FromStr for Wwn {
    type Err = WwnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Wwn {
    type Error = WwnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Wwn {
    type Error = WwnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<&Wwn> for Wwn {
    fn from(other: &Wwn) -> Self {
        other.clone()
    }
}

impl fmt::Display for Wwn {
    /// By convention NAA 5 names are written with colons, NAA 6 without.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.address.starts_with('6') {
            write!(f, "{}", self.wwn_nodots())
        } else {
            write!(f, "{}", self.address)
        }
    }
}

impl fmt::Debug for Wwn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WWN({})", self.address)
    }
}

// A string that is not a valid WWN is simply not equal.
impl PartialEq<str> for Wwn {
    fn eq(&self, other: &str) -> bool {
        Wwn::new(other).is_ok_and(|other| *self == other)
    }
}

impl PartialEq<&str> for Wwn {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for Wwn {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl PartialEq<Wwn> for str {
    fn eq(&self, other: &Wwn) -> bool {
        *other == *self
    }
}

impl PartialEq<Wwn> for &str {
    fn eq(&self, other: &Wwn) -> bool {
        *other == **self
    }
}

impl PartialEq<Wwn> for String {
    fn eq(&self, other: &Wwn) -> bool {
        *other == *self.as_str()
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
