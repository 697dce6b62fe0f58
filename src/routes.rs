//! Storefront path helpers.
//!
//! Paths are built without a locale prefix; stores select localized
//! content through slugs instead.

use crate::domain::{Product, Taxon};

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const ACCOUNT_PATH: &str = "/account";
pub const PASSWORD_RESET_PATH: &str = "/user/password/new";
pub const PRODUCTS_PATH: &str = "/products";

/// `/products/{slug}`
pub fn product_path(product: &Product) -> String {
    format!("{}/{}", PRODUCTS_PATH, product.slug.trim_matches('/'))
}

/// `/t/{permalink}`, nested permalinks keep their slashes
pub fn nested_taxons_path(taxon: &Taxon) -> String {
    format!("/t/{}", taxon.permalink.trim_matches('/'))
}

/// Ensure a CMS path or slug is rooted
pub fn rooted(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
