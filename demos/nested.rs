//! Example demonstrating nested records and binding diagnostics
//!
//! Run with `RUST_LOG=envs=trace` to see which fields were bound or skipped.

use envs::{BindError, Envs};

#[derive(Debug, Default, Envs)]
struct Database {
    #[envs("DB_URL")]
    pub url: String,

    #[envs("DB_POOL_SIZE")]
    pub pool_size: u32,
}

#[derive(Debug, Default, Envs)]
struct Config {
    #[envs("SERVICE_NAME")]
    pub name: String,

    // Nested records are bound recursively
    #[envs]
    pub database: Database,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    std::env::set_var("SERVICE_NAME", "billing");
    std::env::set_var("DB_URL", "postgres://localhost/billing");
    std::env::set_var("DB_POOL_SIZE", "sixteen");

    let mut config = Config {
        database: Database {
            pool_size: 4,
            ..Default::default()
        },
        ..Default::default()
    };

    if let Err(err) = envs::bind(&mut config) {
        // Binding is not transactional: fields before the failure are already set
        println!("Binding failed at {:?}: {err}", err.path());
        if let BindError::InvalidIntegerValue { key, value, .. } = err.root_cause() {
            println!("  {key}={value:?} is not an integer, fixing it up");
        }
        std::env::set_var("DB_POOL_SIZE", "16");
        envs::bind(&mut config)?;
    }

    println!("Configuration loaded: {config:#?}");

    Ok(())
}
