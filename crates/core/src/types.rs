/// Database primary key type (SQLite `INTEGER PRIMARY KEY`).
pub type DbId = i64;
