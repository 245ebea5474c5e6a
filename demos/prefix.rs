//! Example demonstrating prefix attribute

use envs::Envs;

#[derive(Debug, Default, Envs)]
#[envs(prefix = "MYAPP_")]
struct Config {
    // Keys are prefixed: MYAPP_DATABASE_URL, MYAPP_API_KEY, etc.
    #[envs("DATABASE_URL")]
    pub database_url: String,

    #[envs("API_KEY")]
    pub api_key: String,

    #[envs("PORT")]
    pub port: u16,

    #[envs("DEBUG")]
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables with prefix
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_API_KEY", "secret-key-123");
    std::env::set_var("MYAPP_PORT", "3000");

    let mut config = Config {
        port: 8080,
        ..Default::default()
    };
    envs::bind(&mut config)?;

    println!("Configuration with prefix 'MYAPP_':");
    println!("  Database URL: {}", config.database_url);
    println!("  API Key: {}", config.api_key);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);

    Ok(())
}
