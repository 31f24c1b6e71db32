/// Dictionary and character primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a path segment into a [`DbId`].
///
/// Returns `None` for anything that is not a plain integer, so callers can
/// treat malformed ids the same as ids that do not exist.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse().ok()
}
