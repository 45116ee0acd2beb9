use super::ApiError;

/// Parses the `:id` path segment. Ids that parse but are not positive are
/// left to the lookup, which reports them as missing.
pub fn parse_movie_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::validation(format!("Invalid movie id: {raw}")))
}
