pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS providers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS trucks (
        id TEXT PRIMARY KEY,
        provider_id INTEGER NOT NULL REFERENCES providers(id),
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rates (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id TEXT NOT NULL,
        rate INTEGER NOT NULL,
        scope TEXT NOT NULL
    );
    "#,
    "CREATE INDEX IF NOT EXISTS idx_trucks_provider ON trucks(provider_id);",
    "CREATE INDEX IF NOT EXISTS idx_rates_product ON rates(product_id);",
];
