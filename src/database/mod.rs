pub mod pool;
pub mod seed;

/// True when the error is a Postgres unique-constraint violation (23505).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == "23505")
        .unwrap_or(false)
}
