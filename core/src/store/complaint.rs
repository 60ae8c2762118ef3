use super::IntakeStore;
use crate::{
    error::{IntakeError, IntakeResult},
    record::{ComplaintDraft, ComplaintPatch, ComplaintRecord},
    repository::ComplaintRepository,
    types::{Priority, Status},
};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, OptionalExtension};

const COMPLAINT_COLUMNS: &str = "complaint_id, user_name, user_email, category, priority, \
     description, is_anonymous, file_url, status, admin_reply, created_at, updated_at";

// Fixed-width RFC 3339 so lexical order in SQLite equals chronological order.
fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn decode_timestamp(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn decode_enum<T>(
    row: &rusqlite::Row<'_>,
    idx: usize,
    parse: fn(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    parse(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("unrecognized enum value: {raw}").into(),
        )
    })
}

fn complaint_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<ComplaintRecord> {
    Ok(ComplaintRecord {
        complaint_id: row.get(0)?,
        user_name: row.get(1)?,
        user_email: row.get(2)?,
        category: row.get(3)?,
        priority: decode_enum(row, 4, Priority::parse)?,
        description: row.get(5)?,
        is_anonymous: row.get::<_, i32>(6)? != 0,
        file_url: row.get(7)?,
        status: decode_enum(row, 8, Status::parse)?,
        admin_reply: row.get(9)?,
        created_at: decode_timestamp(row, 10)?,
        updated_at: decode_timestamp(row, 11)?,
    })
}

impl ComplaintRepository for IntakeStore {
    fn create(&self, draft: &ComplaintDraft) -> IntakeResult<()> {
        let now = encode_timestamp(Utc::now());
        let result = self.conn().execute(
            "INSERT INTO complaints (
                complaint_id, user_name, user_email, category, priority,
                description, is_anonymous, file_url, status, admin_reply,
                created_at, updated_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)",
            params![
                &draft.complaint_id,
                &draft.user_name,
                &draft.user_email,
                &draft.category,
                draft.priority.as_str(),
                &draft.description,
                if draft.is_anonymous { 1i32 } else { 0i32 },
                draft.file_url.as_deref(),
                draft.status.as_str(),
                &draft.admin_reply,
                now,
            ],
        );
        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(IntakeError::DuplicateComplaint {
                    id: draft.complaint_id.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn get_by_id(&self, complaint_id: &str) -> IntakeResult<Option<ComplaintRecord>> {
        self.conn()
            .query_row(
                &format!("SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE complaint_id = ?1"),
                params![complaint_id],
                complaint_row_mapper,
            )
            .optional()
            .map_err(Into::into)
    }

    fn update(&self, complaint_id: &str, patch: &ComplaintPatch) -> IntakeResult<()> {
        // COALESCE keeps the stored value where the patch leaves a field
        // unset; updated_at always refreshes.
        let changed = self.conn().execute(
            "UPDATE complaints
             SET status      = COALESCE(?2, status),
                 admin_reply = COALESCE(?3, admin_reply),
                 updated_at  = ?4
             WHERE complaint_id = ?1",
            params![
                complaint_id,
                patch.status.map(|s| s.as_str()),
                patch.admin_reply.as_deref(),
                encode_timestamp(patch.updated_at),
            ],
        )?;
        if changed == 0 {
            return Err(IntakeError::UnknownComplaint {
                id: complaint_id.to_string(),
            });
        }
        Ok(())
    }

    fn snapshot_all(&self) -> IntakeResult<Vec<ComplaintRecord>> {
        let mut stmt = self.conn().prepare(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints
             ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt.query_map([], complaint_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
