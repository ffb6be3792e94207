//! Database CLI destructive operation checks: PostgreSQL, MySQL/MariaDB,
//! MongoDB, Redis.

use super::check;
use crate::catalog::Check;

pub(in crate::catalog) fn register(checks: &mut Vec<Check>) {
    check!(
        checks,
        "database:drop_database",
        "database",
        r"(?i)\bDROP\s+DATABASE\b",
        Critical,
        "DROP DATABASE permanently deletes a database and all its data.",
        hint = Word
    );
    check!(
        checks,
        "database:drop_table",
        "database",
        r"(?i)\bDROP\s+TABLE\b",
        High,
        "DROP TABLE permanently deletes a table and all its rows."
    );
    check!(
        checks,
        "database:drop_schema",
        "database",
        r"(?i)\bDROP\s+SCHEMA\b",
        High,
        "DROP SCHEMA removes a schema and everything defined in it."
    );
    check!(
        checks,
        "database:truncate",
        "database",
        r"(?i)\bTRUNCATE\s+(TABLE\s+)?\w",
        High,
        "TRUNCATE removes all rows from a table without the ability to roll back in most engines."
    );
    check!(
        checks,
        "database:mysqladmin_drop",
        "database",
        r"\bmysqladmin\s+.*\bdrop\b",
        Critical,
        "mysqladmin drop deletes a MySQL/MariaDB database."
    );
    check!(
        checks,
        "database:pg_dropdb",
        "database",
        r"\bdropdb\b",
        Critical,
        "dropdb permanently deletes a PostgreSQL database."
    );
    check!(
        checks,
        "database:mongo_drop_database",
        "database",
        r"\bdb\.dropDatabase\s*\(",
        Critical,
        "db.dropDatabase() permanently deletes the current MongoDB database.",
        hint = Word
    );
    check!(
        checks,
        "database:mongo_drop_collection",
        "database",
        r"\bdb\.\w+\.drop\s*\(",
        High,
        "db.<collection>.drop() permanently deletes a MongoDB collection."
    );
    check!(
        checks,
        "database:redis_flushall",
        "database",
        r"(?i)\bredis-cli\b.*\bFLUSHALL\b",
        Critical,
        "FLUSHALL deletes every key across all Redis databases.",
        hint = Word
    );
    check!(
        checks,
        "database:redis_flushdb",
        "database",
        r"(?i)\bredis-cli\b.*\bFLUSHDB\b",
        High,
        "FLUSHDB deletes every key in the current Redis database."
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_checks() -> Vec<Check> {
        let mut v = Vec::new();
        register(&mut v);
        v
    }

    #[test]
    fn drop_database_is_case_insensitive() {
        let checks = catalog_checks();
        let hit = checks
            .iter()
            .find(|c| c.id == "database:drop_database")
            .unwrap();
        assert!(hit.is_match(r#"psql -c "DROP DATABASE production""#));
        assert!(hit.is_match("drop database production;"));
    }

    #[test]
    fn truncate_requires_a_target() {
        let checks = catalog_checks();
        let hit = checks.iter().find(|c| c.id == "database:truncate").unwrap();
        assert!(hit.is_match("TRUNCATE TABLE sessions"));
        assert!(hit.is_match("TRUNCATE sessions"));
    }

    #[test]
    fn redis_flushall_vs_flushdb_distinct() {
        let checks = catalog_checks();
        let flushall = checks
            .iter()
            .find(|c| c.id == "database:redis_flushall")
            .unwrap();
        let flushdb = checks
            .iter()
            .find(|c| c.id == "database:redis_flushdb")
            .unwrap();
        assert!(flushall.is_match("redis-cli FLUSHALL"));
        assert!(!flushdb.is_match("redis-cli FLUSHALL"));
        assert!(flushdb.is_match("redis-cli FLUSHDB"));
    }
}
