use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create config (unless in test mode) and database, then run migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    ttlog(&pool.conn, "init", &cfg.database, "Database initialized")?;

    success(format!("Database:    {}", cfg.database));
    Ok(())
}
