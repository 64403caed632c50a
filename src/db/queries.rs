//! SQL query constants
//!
//! Every statement the service issues against the `movies` table. The table
//! itself is provisioned by `sql/schema.sql`.

/// Connectivity check used at startup
pub const PING: &str = "SELECT 1";

/// All rows in storage order, surrogate `id` included
pub const SELECT_MOVIES: &str = "SELECT * FROM movies";

/// The id is widened so SERIAL and BIGSERIAL keys decode the same way
pub const INSERT_MOVIE: &str = r#"
    INSERT INTO movies (movie_id, movie_name)
    VALUES ($1, $2)
    RETURNING id::BIGINT
"#;

/// Removes every row carrying the external id; duplicates go together
pub const DELETE_MOVIE: &str = "DELETE FROM movies WHERE movie_id = $1";

pub const DELETE_ALL_MOVIES: &str = "DELETE FROM movies";
