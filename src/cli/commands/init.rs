use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{open_store, record};
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode) and its migrations
///  - the three default groups
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing pcdeath…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let store = open_store(&db_path)?;

    println!(
        "✅ Database initialized at {} ({} groups)",
        &db_path,
        store.groups().len()
    );

    record(
        &store,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 pcdeath initialization completed!");
    Ok(())
}
