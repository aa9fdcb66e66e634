use axum::http::Method;

use crate::server::middleware::auth::is_protected;

#[test]
fn protects_catalog_writes() {
    assert!(is_protected(&Method::POST, "/api/products"));
    assert!(is_protected(&Method::PUT, "/api/products/3"));
    assert!(is_protected(&Method::DELETE, "/api/products/3"));
    assert!(is_protected(&Method::POST, "/api/categories"));
    assert!(is_protected(&Method::DELETE, "/api/categories/2"));
    assert!(is_protected(&Method::POST, "/api/categories/2/products"));
    assert!(is_protected(&Method::DELETE, "/api/categories/2/products/3"));
    assert!(is_protected(&Method::POST, "/api/images"));
}

#[test]
fn leaves_reads_and_user_routes_alone() {
    assert!(!is_protected(&Method::GET, "/api/products"));
    assert!(!is_protected(&Method::GET, "/api/products/3"));
    assert!(!is_protected(&Method::POST, "/api/products/3/reviews"));
    assert!(!is_protected(&Method::GET, "/api/categories/slug/shirts"));
    assert!(!is_protected(&Method::POST, "/api/cart"));
    assert!(!is_protected(&Method::POST, "/api/auth/login"));
}
