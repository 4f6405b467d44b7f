use super::*;

fn supplier(city: Option<&str>, country: Option<&str>) -> Supplier {
    Supplier {
        id: 2,
        name: "Acme Parts".to_owned(),
        contact_name: Some("Rae".to_owned()),
        email: None,
        phone: None,
        address: None,
        city: city.map(str::to_owned),
        country: country.map(str::to_owned),
        payment_terms: 45,
        lead_time: 10,
        status: SupplierStatus::Inactive,
        created_at: None,
    }
}

// =============================================================================
// validate_supplier
// =============================================================================

#[test]
fn default_draft_uses_standard_terms() {
    let draft = SupplierDraft::default();
    assert_eq!(draft.payment_terms, "30");
    assert_eq!(draft.lead_time, "7");
    assert_eq!(draft.status, SupplierStatus::Active);
}

#[test]
fn name_is_required() {
    let errors = validate_supplier(&SupplierDraft::default()).unwrap_err();
    assert_eq!(errors.name, Some("Name required"));
    assert_eq!(errors.payment_terms, None);
}

#[test]
fn negative_or_garbage_days_are_rejected() {
    let draft =
        SupplierDraft { name: "X".to_owned(), payment_terms: "-1".to_owned(), lead_time: "soon".to_owned(), ..SupplierDraft::default() };
    let errors = validate_supplier(&draft).unwrap_err();
    assert!(errors.payment_terms.is_some());
    assert!(errors.lead_time.is_some());
}

#[test]
fn blank_optional_fields_are_omitted() {
    let draft = SupplierDraft { name: "  Acme ".to_owned(), email: "  ".to_owned(), city: "Oslo".to_owned(), ..SupplierDraft::default() };
    let request = validate_supplier(&draft).unwrap();
    assert_eq!(request.name, "Acme");
    assert_eq!(request.email, None);
    assert_eq!(request.city.as_deref(), Some("Oslo"));
    assert_eq!((request.payment_terms, request.lead_time), (30, 7));
}

#[test]
fn draft_from_supplier_keeps_terms() {
    let draft = SupplierDraft::from(&supplier(None, None));
    assert_eq!(draft.payment_terms, "45");
    assert_eq!(draft.lead_time, "10");
    assert_eq!(draft.contact_name, "Rae");
    assert_eq!(draft.status, SupplierStatus::Inactive);
}

// =============================================================================
// display helpers
// =============================================================================

#[test]
fn location_joins_present_parts() {
    assert_eq!(supplier_location(&supplier(Some("Lyon"), Some("France"))), "Lyon, France");
    assert_eq!(supplier_location(&supplier(None, Some("France"))), "France");
    assert_eq!(supplier_location(&supplier(None, None)), "\u{2014}");
}

#[test]
fn captions_and_messages() {
    assert_eq!(suppliers_caption(3), "3 suppliers registered");
    assert_eq!(save_message(true), "Supplier updated");
    assert_eq!(save_message(false), "Supplier created");
}
