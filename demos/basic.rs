//! Basic usage example

use envs::Envs;

#[derive(Debug, Envs)]
struct Config {
    // Loaded from DATABASE_URL
    #[envs("DATABASE_URL")]
    pub database_url: String,

    // Keeps its current value unless SERVER_ADDR is set
    #[envs("SERVER_ADDR")]
    pub server_addr: String,

    // Numeric type
    #[envs("MAX_CONNECTIONS")]
    pub max_connections: u32,

    // Boolean type: only "true" enables it
    #[envs("DEBUG_MODE")]
    pub debug_mode: bool,

    // Never read from the environment
    #[envs("-")]
    pub build_id: String,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Defaults are whatever the struct starts with
    let mut config = Config {
        database_url: String::new(),
        server_addr: "127.0.0.1:8080".to_string(),
        max_connections: 10,
        debug_mode: false,
        build_id: "dev".to_string(),
    };

    // Bind configuration
    config.bind_envs()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Build ID: {}", config.build_id);

    Ok(())
}
