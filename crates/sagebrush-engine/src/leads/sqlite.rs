use rusqlite::{Connection, ErrorCode, OptionalExtension, params};
use std::fs;
use std::path::Path;

use super::records::{ConsultationRequest, NewConsultation, NewSubscriber, Subscriber};
use super::store::{LeadStore, StoreError};

/// [`LeadStore`] persisted in a SQLite database file.
pub struct SqliteLeadStore {
    conn: Connection,
}

impl SqliteLeadStore {
    /// Open (creating if needed) the database at `path` and its tables.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}

fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute("PRAGMA encoding = 'UTF-8'", [])?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS subscribers (
            id INTEGER PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS consultation_requests (
            id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            company TEXT,
            client_type TEXT NOT NULL,
            message TEXT,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

impl LeadStore for SqliteLeadStore {
    fn find_subscriber(&mut self, email: &str) -> Result<Option<Subscriber>, StoreError> {
        let subscriber = self
            .conn
            .query_row(
                "SELECT id, email, created_at FROM subscribers WHERE email = ?1",
                [email],
                |row| {
                    Ok(Subscriber {
                        id: row.get(0)?,
                        email: row.get(1)?,
                        created_at: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(subscriber)
    }

    fn create_subscriber(&mut self, subscriber: NewSubscriber) -> Result<Subscriber, StoreError> {
        let inserted = self.conn.execute(
            "INSERT INTO subscribers (email, created_at) VALUES (?1, ?2)",
            params![subscriber.email, subscriber.created_at],
        );

        match inserted {
            Ok(_) => Ok(Subscriber {
                id: self.conn.last_insert_rowid(),
                email: subscriber.email,
                created_at: subscriber.created_at,
            }),
            Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateEmail(subscriber.email)),
            Err(e) => Err(e.into()),
        }
    }

    fn create_consultation(
        &mut self,
        request: NewConsultation,
    ) -> Result<ConsultationRequest, StoreError> {
        self.conn.execute(
            "INSERT INTO consultation_requests
                (first_name, last_name, email, phone, company, client_type, message, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                request.first_name,
                request.last_name,
                request.email,
                request.phone,
                request.company,
                request.client_type.as_str(),
                request.message,
                request.created_at,
            ],
        )?;

        Ok(request.into_record(self.conn.last_insert_rowid()))
    }
}
