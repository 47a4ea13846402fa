//! Graded answer repository: insert and chronological listing.

use chrono::Utc;

use lector_core::entities::{GradedAnswer, NewGradedAnswer};
use lector_core::enums::Correctness;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};
use crate::{LectorDb, PREFIX_GRADED_ANSWER};

const SELECT_COLUMNS: &str =
    "SELECT id, source_text, question, user_answer, feedback_sentence, category, created_at
     FROM graded_answers";

fn row_to_graded_answer(row: &libsql::Row) -> Result<GradedAnswer, DatabaseError> {
    Ok(GradedAnswer {
        id: row.get::<String>(0)?,
        source_text: row.get::<String>(1)?,
        question: row.get::<String>(2)?,
        user_answer: row.get::<String>(3)?,
        feedback_sentence: row.get::<String>(4)?,
        category: get_opt_string(row, 5)?
            .map(|s| parse_enum::<Correctness>(&s))
            .transpose()?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl LectorDb {
    pub async fn insert_graded_answer(
        &self,
        answer: NewGradedAnswer,
    ) -> Result<GradedAnswer, DatabaseError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_GRADED_ANSWER).await?;

        self.conn()
            .execute(
                "INSERT INTO graded_answers
                 (id, source_text, question, user_answer, feedback_sentence, category, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    answer.source_text.as_str(),
                    answer.question.as_str(),
                    answer.user_answer.as_str(),
                    answer.feedback_sentence.as_str(),
                    answer.category.map(Correctness::as_str),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(GradedAnswer {
            id,
            source_text: answer.source_text,
            question: answer.question,
            user_answer: answer.user_answer,
            feedback_sentence: answer.feedback_sentence,
            category: answer.category,
            created_at: now,
        })
    }

    /// All graded answers, oldest first.
    pub async fn list_graded_answers(&self) -> Result<Vec<GradedAnswer>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("{SELECT_COLUMNS} ORDER BY created_at ASC, rowid ASC"),
                (),
            )
            .await?;
        let mut answers = Vec::new();
        while let Some(row) = rows.next().await? {
            answers.push(row_to_graded_answer(&row)?);
        }
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn test_db() -> LectorDb {
        LectorDb::open_local(":memory:").await.unwrap()
    }

    fn new_answer(answer: &str, feedback: &str, category: Option<Correctness>) -> NewGradedAnswer {
        NewGradedAnswer {
            source_text: "El texto.".to_string(),
            question: "¿De qué habla?".to_string(),
            user_answer: answer.to_string(),
            feedback_sentence: feedback.to_string(),
            category,
        }
    }

    #[tokio::test]
    async fn insert_and_list_in_order() {
        let db = test_db().await;
        let first = db
            .insert_graded_answer(new_answer(
                "De nada",
                "Tu respuesta es INCORRECTA.",
                Some(Correctness::Incorrect),
            ))
            .await
            .unwrap();
        let second = db
            .insert_graded_answer(new_answer("Del texto", "Buen intento.", None))
            .await
            .unwrap();

        let listed = db.list_graded_answers().await.unwrap();
        assert_eq!(listed, vec![first, second]);
        assert_eq!(listed[0].category, Some(Correctness::Incorrect));
        assert_eq!(listed[1].category, None);
    }

    #[tokio::test]
    async fn sqlite_default_timestamps_are_readable() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO graded_answers (id, source_text, question, user_answer, feedback_sentence, category)
                 VALUES ('ans-legacy', 't', 'q', 'a', 'Tu respuesta es CORRECTA.', 'correct')",
                (),
            )
            .await
            .unwrap();

        let listed = db.list_graded_answers().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category, Some(Correctness::Correct));
    }
}
