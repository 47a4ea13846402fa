//! Question set repository: insert and newest-first listing.

use chrono::Utc;

use lector_core::entities::{GeneratedQuestionSet, NewQuestionSet};

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_string_list};
use crate::{LectorDb, PREFIX_QUESTION_SET};

fn row_to_question_set(row: &libsql::Row) -> Result<GeneratedQuestionSet, DatabaseError> {
    Ok(GeneratedQuestionSet {
        id: row.get::<String>(0)?,
        source_text: row.get::<String>(1)?,
        questions: parse_string_list(&row.get::<String>(2)?)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl LectorDb {
    pub async fn insert_question_set(
        &self,
        set: NewQuestionSet,
    ) -> Result<GeneratedQuestionSet, DatabaseError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_QUESTION_SET).await?;
        let questions =
            serde_json::to_string(&set.questions).map_err(|e| DatabaseError::Other(e.into()))?;

        self.conn()
            .execute(
                "INSERT INTO question_sets (id, source_text, questions, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    id.as_str(),
                    set.source_text.as_str(),
                    questions,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(GeneratedQuestionSet {
            id,
            source_text: set.source_text,
            questions: set.questions,
            created_at: now,
        })
    }

    pub async fn get_question_set(&self, id: &str) -> Result<GeneratedQuestionSet, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, source_text, questions, created_at FROM question_sets WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_question_set(&row)
    }

    pub async fn recent_question_sets(
        &self,
        limit: u32,
    ) -> Result<Vec<GeneratedQuestionSet>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, source_text, questions, created_at FROM question_sets
                 ORDER BY created_at DESC, rowid DESC LIMIT ?1",
                [i64::from(limit)],
            )
            .await?;
        let mut sets = Vec::new();
        while let Some(row) = rows.next().await? {
            sets.push(row_to_question_set(&row)?);
        }
        Ok(sets)
    }
}
