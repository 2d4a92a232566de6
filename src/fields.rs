use mongodb::bson::Document;

use crate::error::Error;

/// Field names no client body may carry.
pub const ALWAYS_RESERVED: &[&str] = &["_id"];

/// Rejects client-supplied fields the caller is not allowed to write,
/// including operator-looking keys that MongoDB would refuse anyway.
pub fn reject_reserved(fields: &Document, reserved: &[&str]) -> Result<(), Error> {
    for key in fields.keys() {
        if key.starts_with('$') || ALWAYS_RESERVED.contains(&key.as_str()) {
            return Err(Error::ReservedField { field: key.clone() });
        }
        if reserved.contains(&key.as_str()) {
            return Err(Error::ReservedField { field: key.clone() });
        }
    }

    Ok(())
}
