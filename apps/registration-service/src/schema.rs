pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS candidates (
        id TEXT PRIMARY KEY,
        company_name TEXT NOT NULL,
        contact_email TEXT NOT NULL UNIQUE,
        phone TEXT,
        products TEXT NOT NULL,
        truck_count INTEGER NOT NULL,
        capacity_tons_per_day INTEGER NOT NULL,
        location TEXT,
        status TEXT NOT NULL DEFAULT 'pending',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        provider_id INTEGER,
        version INTEGER NOT NULL DEFAULT 1,
        rejection_reason TEXT
    );
    "#,
    "CREATE INDEX IF NOT EXISTS idx_candidates_status ON candidates(status);",
    "CREATE INDEX IF NOT EXISTS idx_candidates_created_at ON candidates(created_at);",
];
