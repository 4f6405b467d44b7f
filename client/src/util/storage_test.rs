#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn reads_are_empty_outside_the_browser() {
    assert_eq!(load_raw("erp_token"), None);
    assert_eq!(load_json::<Vec<i64>>("erp_user"), None);
}

#[test]
fn writes_are_noops_but_callable() {
    save_raw("erp_dark", "true");
    save_json("erp_user", &vec![1, 2, 3]);
    remove("erp_user");
    assert_eq!(load_raw("erp_dark"), None);
}
