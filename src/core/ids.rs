//! Opaque id generation for groups and items.

use crate::models::StoreRoot;
use uuid::Uuid;

/// Random 128-bit token as 32 lowercase hex characters.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// A token not already used by any group or item of `root`.
pub fn fresh_id(root: &StoreRoot) -> String {
    loop {
        let id = new_id();
        if !root.contains_id(&id) {
            return id;
        }
    }
}
