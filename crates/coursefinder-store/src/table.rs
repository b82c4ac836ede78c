//! SQLite item table

use crate::store::Manifest;
use chrono::{DateTime, Utc};
use coursefinder_core::{Error, Item, Result};
use rusqlite::{params, Connection, OpenFlags};
use std::collections::HashMap;
use std::path::Path;

pub(crate) fn write(path: &Path, items: &[Item], manifest: &Manifest) -> Result<()> {
    let db_err = |e: rusqlite::Error| Error::corrupt(path, e.to_string());

    let mut conn = Connection::open(path).map_err(db_err)?;
    conn.execute_batch(
        "CREATE TABLE items (
            row_idx INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            institution TEXT NOT NULL,
            difficulty TEXT NOT NULL,
            rating REAL,
            url TEXT NOT NULL,
            description TEXT NOT NULL,
            skills TEXT NOT NULL
        );
        CREATE TABLE meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )
    .map_err(db_err)?;

    let tx = conn.transaction().map_err(db_err)?;
    {
        let mut stmt = tx
            .prepare(
                "INSERT INTO items (row_idx, name, institution, difficulty, rating, url, description, skills)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )
            .map_err(db_err)?;
        for (idx, item) in items.iter().enumerate() {
            stmt.execute(params![
                idx as i64,
                &item.name,
                &item.institution,
                &item.difficulty,
                item.rating.map(f64::from),
                &item.url,
                &item.description,
                &item.skills,
            ])
            .map_err(db_err)?;
        }

        let mut meta = tx
            .prepare("INSERT INTO meta (key, value) VALUES (?1, ?2)")
            .map_err(db_err)?;
        for (key, value) in [
            ("build_id", manifest.build_id.to_string()),
            ("row_count", manifest.row_count.to_string()),
            ("built_at", manifest.built_at.to_rfc3339()),
            ("max_features", manifest.max_features.to_string()),
        ] {
            meta.execute(params![key, value]).map_err(db_err)?;
        }
    }
    tx.commit().map_err(db_err)?;
    Ok(())
}

fn open(path: &Path) -> Result<Connection> {
    Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(|e| Error::corrupt(path, e.to_string()))
}

pub(crate) fn read_manifest(path: &Path) -> Result<Manifest> {
    let conn = open(path)?;
    manifest_from(path, &conn)
}

fn manifest_from(path: &Path, conn: &Connection) -> Result<Manifest> {
    let db_err = |e: rusqlite::Error| Error::corrupt(path, e.to_string());

    let mut stmt = conn.prepare("SELECT key, value FROM meta").map_err(db_err)?;
    let meta: HashMap<String, String> = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(db_err)?
        .collect::<std::result::Result<_, _>>()
        .map_err(db_err)?;

    let field = |key: &str| {
        meta.get(key)
            .ok_or_else(|| Error::corrupt(path, format!("meta key '{key}' missing")))
    };
    let bad = |key: &str| Error::corrupt(path, format!("meta key '{key}' is malformed"));

    Ok(Manifest {
        build_id: field("build_id")?.parse().map_err(|_| bad("build_id"))?,
        row_count: field("row_count")?.parse().map_err(|_| bad("row_count"))?,
        built_at: DateTime::parse_from_rfc3339(field("built_at")?)
            .map_err(|_| bad("built_at"))?
            .with_timezone(&Utc),
        max_features: field("max_features")?
            .parse()
            .map_err(|_| bad("max_features"))?,
    })
}

pub(crate) fn read(path: &Path) -> Result<(Manifest, Vec<Item>)> {
    let db_err = |e: rusqlite::Error| Error::corrupt(path, e.to_string());

    let conn = open(path)?;
    let manifest = manifest_from(path, &conn)?;

    let mut stmt = conn
        .prepare(
            "SELECT name, institution, difficulty, rating, url, description, skills
             FROM items ORDER BY row_idx",
        )
        .map_err(db_err)?;
    let items = stmt
        .query_map([], |row| {
            Ok(Item {
                name: row.get(0)?,
                institution: row.get(1)?,
                difficulty: row.get(2)?,
                rating: row.get::<_, Option<f64>>(3)?.map(|r| r as f32),
                url: row.get(4)?,
                description: row.get(5)?,
                skills: row.get(6)?,
            })
        })
        .map_err(db_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(db_err)?;

    Ok((manifest, items))
}
