use crate::error::{AppError, AppResult};

/// Parse a path id, accepting only positive integers.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<i32> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("Invalid {entity} ID"))),
    }
}
