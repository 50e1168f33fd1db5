//! Plain-text rendering of the two views.

use std::fmt::Write;
use winkel_core::model::{Product, ShoppingList};

pub(crate) fn lists_table(lists: &[ShoppingList]) -> String {
    if lists.is_empty() {
        return "No lists yet.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {}", "ID", "NAME");
    for l in lists {
        let _ = writeln!(out, "{:<8} {}", l.id.to_string(), l.name);
    }
    out
}

pub(crate) fn list_detail(list: &ShoppingList, products: &[Product]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (list {})", list.name, list.id);
    if products.is_empty() {
        let _ = writeln!(out, "  no products");
        return out;
    }
    for p in products {
        let mark = if p.purchased { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{}] {:<8} {}", mark, p.id.to_string(), p.name);
    }
    out
}

pub(crate) fn purchased_label(purchased: bool) -> &'static str {
    if purchased {
        "purchased"
    } else {
        "not purchased"
    }
}
