use testcontainers::{core::WaitFor, GenericImage, RunnableImage};
use tokio_postgres::NoTls;

/// The PostgreSQL Docker image to use for testing
pub const POSTGRES_IMAGE: &str = "postgres";
pub const POSTGRES_TAG: &str = "16-alpine";

/// Default PostgreSQL port
pub const POSTGRES_PORT: u16 = 5432;

/// Default credentials for the PostgreSQL container
pub const POSTGRES_USER: &str = "postgres";
pub const POSTGRES_PASSWORD: &str = "studychat_password";
pub const POSTGRES_DB: &str = "studychat";

/// Table definitions applied to each fresh container
pub const SCHEMA_SQL: &str = include_str!("../../schema.sql");

/// Create a runnable PostgreSQL container
pub fn create_postgres_container() -> RunnableImage<GenericImage> {
    let image = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
        .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
        .with_env_var("POSTGRES_DB", POSTGRES_DB)
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ));

    RunnableImage::from(image).with_tag(POSTGRES_TAG)
}

/// Build a connection string for the running PostgreSQL container
pub fn build_connection_string(host: &str, port: u16) -> String {
    format!(
        "postgresql://{}:{}@{}:{}/{}",
        POSTGRES_USER, POSTGRES_PASSWORD, host, port, POSTGRES_DB
    )
}

/// Apply the schema to a fresh database
pub async fn apply_schema(connection_string: &str) {
    let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
        .await
        .expect("Failed to connect for schema setup");

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("schema setup connection error: {}", e);
        }
    });

    client
        .batch_execute(SCHEMA_SQL)
        .await
        .expect("Failed to apply schema");
}
