//! Schema migrations
//!
//! SQL files live in `migrations/` next to this crate's manifest and are
//! applied in version order by SQLx's migrator.

use std::path::{Path, PathBuf};

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Directory holding the bundled migrations
pub fn migrations_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

/// Apply the bundled migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    run_migrations_from(pool, migrations_dir()).await
}

/// Apply migrations from a custom directory
pub async fn run_migrations_from(pool: &PgPool, dir: PathBuf) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir.clone()).await?;
    migrator.run(pool).await?;

    info!(dir = %dir.display(), count = migrator.iter().count(), "Migrations applied");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_dir_contains_reactions_table() {
        let dir = migrations_dir();
        let has_reactions = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(Result::ok)
            .any(|e| e.file_name().to_string_lossy().contains("create_reactions_table"));
        assert!(has_reactions);
    }
}
