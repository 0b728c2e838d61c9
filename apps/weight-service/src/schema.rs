/// Idempotent schema statements applied by [`scalehouse_db::TursoClient::connect`].
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS containers (
        id TEXT PRIMARY KEY,
        weight_kg INTEGER,
        original_unit TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        session_id TEXT NOT NULL,
        created_at TEXT NOT NULL,
        direction TEXT NOT NULL,
        truck TEXT,
        containers TEXT NOT NULL,
        bruto INTEGER NOT NULL,
        truck_tara INTEGER,
        neto INTEGER,
        produce TEXT
    );
    "#,
    "CREATE INDEX IF NOT EXISTS idx_transactions_session ON transactions(session_id);",
    "CREATE INDEX IF NOT EXISTS idx_transactions_session_direction ON transactions(session_id, direction);",
    "CREATE INDEX IF NOT EXISTS idx_transactions_direction ON transactions(direction);",
    "CREATE INDEX IF NOT EXISTS idx_transactions_truck ON transactions(truck);",
    "CREATE INDEX IF NOT EXISTS idx_transactions_created_at ON transactions(created_at);",
];
