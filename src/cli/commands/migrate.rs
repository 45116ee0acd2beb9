//! Schema and fixture command handlers

use crate::cli::MigrateCommands;
use crate::config::Config;
use crate::db::Store;

async fn connect(config: &Config) -> anyhow::Result<Store> {
    Store::connect(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await
}

pub async fn cmd_migrate(config: &Config, command: &MigrateCommands) -> anyhow::Result<()> {
    let store = connect(config).await?;

    match command {
        MigrateCommands::Up => {
            store.migrate_up().await?;
            println!("✓ Migrations applied");
        }
        MigrateCommands::Down => {
            store.migrate_down().await?;
            println!("✓ Migrations rolled back");
        }
        MigrateCommands::Fresh => {
            store.migrate_fresh().await?;
            println!("✓ Schema recreated");
        }
        MigrateCommands::Status => {
            let states = store.migration_status().await?;
            if states.is_empty() {
                println!("No migrations defined.");
            }
            for state in states {
                let marker = if state.applied { "applied" } else { "pending" };
                println!("{:<8} {}", marker, state.name);
            }
        }
    }

    Ok(())
}

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let count = store.seed().await?;
    println!("✓ Seeded {count} movies");
    Ok(())
}

pub async fn cmd_reset(config: &Config) -> anyhow::Result<()> {
    let store = connect(config).await?;
    let count = store.reset().await?;
    println!("✓ Database reset with {count} movies");
    Ok(())
}
