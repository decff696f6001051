use wwnhandler_common::{Wwn, WwnError, WwnReport};
use wwnhandler_integration_tests::{
    EMC_CLARIION, EMC_VMAX, HITACHI, NETAPP, UNKNOWN_VENDOR, VMWARE, wwn,
};

#[test]
fn oui_uses_seven_digits_after_naa() -> anyhow::Result<()> {
    assert_eq!(wwn(EMC_CLARIION).oui()?, "00:60:16");
    assert_eq!(wwn(EMC_VMAX).oui()?, "00:00:97");
    assert_eq!(wwn(HITACHI).oui()?, "00:60:e8");
    assert_eq!(wwn(NETAPP).oui()?, "00:a0:98");
    Ok(())
}

#[test]
fn vendor_lookup() {
    assert_eq!(wwn(EMC_CLARIION).vendor(), "EMC");
    assert_eq!(wwn(EMC_VMAX).vendor(), "EMC");
    assert_eq!(wwn(HITACHI).vendor(), "Hitachi");
    assert_eq!(wwn(NETAPP).vendor(), "Netapp");
    assert_eq!(wwn(UNKNOWN_VENDOR).vendor(), "");
}

#[test]
fn vmware_entry_is_unreachable() -> anyhow::Result<()> {
    let wwn: Wwn = wwn(&VMWARE.to_uppercase());
    assert_eq!(wwn.oui()?, "00:0c:29");
    assert_eq!(wwn.vendor(), "");
    Ok(())
}

#[test]
fn emc_vmax_fields() -> anyhow::Result<()> {
    let wwn: Wwn = wwn(EMC_VMAX);
    assert_eq!(wwn.serial()?, "000192601234");
    assert_eq!(wwn.lunid()?, "0104A");
    Ok(())
}

#[test]
fn emc_vmax_lunid_must_be_text() {
    let wwn: Wwn = wwn("600009700001926012345330313034ff");
    assert!(matches!(wwn.lunid(), Err(WwnError::LunDecode(_))));
}

#[test]
fn hitachi_fields() -> anyhow::Result<()> {
    let wwn: Wwn = wwn(HITACHI);
    assert_eq!(wwn.serial()?, "100");
    assert_eq!(wwn.lunid()?, "64:ab");
    Ok(())
}

#[test]
fn other_vendors_have_no_serial_or_lunid() -> anyhow::Result<()> {
    for raw in [EMC_CLARIION, NETAPP, VMWARE, UNKNOWN_VENDOR] {
        let wwn: Wwn = wwn(raw);
        assert_eq!(wwn.serial()?, "");
        assert_eq!(wwn.lunid()?, "");
    }
    Ok(())
}

#[test]
fn binary_drops_leading_zeros() {
    let short: Wwn = wwn("6006016012345678");
    assert_eq!(short.wwn_to_binary(), format!("{:b}", 0x6006016012345678u64));

    let long: Wwn = wwn(EMC_CLARIION);
    assert_eq!(
        long.wwn_to_binary(),
        format!("{:b}", u128::from_str_radix(EMC_CLARIION, 16).unwrap())
    );
}

#[test]
fn report_collects_all_fields() -> anyhow::Result<()> {
    let report: WwnReport = wwn(EMC_VMAX).report()?;
    assert_eq!(report.wwn_nodots, EMC_VMAX);
    assert_eq!(report.oui, "00:00:97");
    assert_eq!(report.vendor, "EMC");
    assert_eq!(report.serial, "000192601234");
    assert_eq!(report.lunid, "0104A");
    assert!(report.binary.starts_with("110"));
    Ok(())
}
