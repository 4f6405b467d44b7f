use super::*;

#[test]
fn products_key_trims_search_term() {
    assert_eq!(products_key(2, "  bolt "), vec!["products", "2", "bolt"]);
    assert_eq!(products_key(0, ""), vec!["products", "0", ""]);
}

#[test]
fn blank_search_lists_catalog() {
    assert_eq!(products_request(1, "   ").path, "/products?page=1&size=20");
}

#[test]
fn search_term_uses_search_endpoint() {
    assert_eq!(products_request(0, " hex bolt ").path, "/products/search?name=hex%20bolt&page=0&size=20");
}

#[test]
fn catalog_caption_groups_total() {
    assert_eq!(catalog_caption(0), "0 products in catalog");
    assert_eq!(catalog_caption(1_204), "1,204 products in catalog");
}
