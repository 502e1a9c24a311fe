use super::*;

#[test]
fn validate_org_name_trims() {
    assert_eq!(validate_org_name("  River Cleanup Org  "), Ok("River Cleanup Org".to_owned()));
}

#[test]
fn validate_org_name_rejects_blank() {
    assert_eq!(validate_org_name("   "), Err("Enter your organization's name."));
}
