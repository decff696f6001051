use wwnhandler_common::{Wwn, WwnError};
use wwnhandler_integration_tests::{
    EMC_CLARIION, EMC_VMAX, HITACHI, UNKNOWN_VENDOR, with_colons, wwn,
};

#[test]
fn bare_short_round_trips_to_lowercase() {
    for raw in ["6006016012345678", "60060160ABCDEF00", "6000C29012345678"] {
        assert_eq!(wwn(raw).wwn_nodots(), raw.to_lowercase());
    }
}

#[test]
fn normalization_is_idempotent() {
    for raw in [EMC_VMAX, EMC_CLARIION, HITACHI, UNKNOWN_VENDOR] {
        let once: Wwn = wwn(raw);
        let twice: Wwn = wwn(once.wwn());
        assert_eq!(once, twice);
        assert_eq!(once.wwn(), twice.wwn());
    }
}

#[test]
fn bare_and_colon_forms_are_equal() {
    for raw in [EMC_VMAX, HITACHI, UNKNOWN_VENDOR] {
        let colons: String = with_colons(raw);
        assert_eq!(wwn(raw), wwn(&colons));
        assert_eq!(wwn(&colons).wwn(), colons);
    }
}

#[test]
fn os_prefix_is_stripped() {
    let prefixed: String = format!("3{EMC_VMAX}");
    assert_eq!(prefixed.len(), 33);
    assert_eq!(wwn(&prefixed), wwn(EMC_VMAX));
}

#[test]
fn os_prefix_stripping_still_validates() {
    let prefixed: String = format!("3{}", "5".repeat(32));
    assert!(matches!(Wwn::new(&prefixed), Err(WwnError::UnsupportedNaa(_))));

    let prefixed: String = format!("3{}", "z".repeat(32));
    assert!(matches!(Wwn::new(&prefixed), Err(WwnError::InvalidFormat(_))));
}

#[test]
fn copy_construction_keeps_address() {
    let original: Wwn = wwn(HITACHI);
    let copy: Wwn = Wwn::from(&original);
    assert_eq!(copy.wwn(), original.wwn());
}

#[test]
fn parse_via_std_traits() -> anyhow::Result<()> {
    let parsed: Wwn = HITACHI.parse()?;
    let converted: Wwn = Wwn::try_from(String::from(HITACHI))?;
    assert_eq!(parsed, converted);
    Ok(())
}

#[test]
fn rejects_wrong_lengths_and_characters() {
    let cases = [
        "",
        "600601601234567",
        "60060160123456789",
        "6006016012345678900",
        "6006016012x45678",
        "60.06.01.60.12.34.56.78",
    ];
    for raw in cases {
        assert!(
            matches!(Wwn::new(raw), Err(WwnError::InvalidFormat(_))),
            "{raw:?} should be malformed"
        );
    }
}

#[test]
fn rejects_other_naa_types() {
    for raw in ["1006016012345678", "2000002500000001", "5006016012345678", "c006016012345678"] {
        assert!(
            matches!(Wwn::new(raw), Err(WwnError::UnsupportedNaa(_))),
            "{raw:?} should be an unsupported NAA"
        );
    }
}

#[test]
fn format_error_wins_over_naa_error() {
    assert!(matches!(Wwn::new("5006"), Err(WwnError::InvalidFormat(_))));
    assert!(matches!(Wwn::new("5006016012345g78"), Err(WwnError::InvalidFormat(_))));
}

#[test]
fn error_carries_input() {
    let err: WwnError = Wwn::new("not-a-wwn").unwrap_err();
    assert_eq!(err, WwnError::InvalidFormat(String::from("not-a-wwn")));
    assert!(err.to_string().contains("not-a-wwn"));
}

#[test]
fn equality_against_strings_never_fails() {
    let wwn: Wwn = wwn(EMC_CLARIION);
    assert!(wwn == EMC_CLARIION);
    assert!(wwn == with_colons(EMC_CLARIION));
    assert!(wwn != "not-a-wwn");
    assert!(wwn != "");
    assert!(wwn != "5006016012345678");
}

#[test]
fn display_uses_no_colon_form() {
    assert_eq!(wwn(&with_colons(HITACHI)).to_string(), HITACHI);
}
