#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use lector_analysis::{HeuristicDetector, Tutor, TutorSettings};
use lector_core::entities::{GeneratedQuestionSet, GradedAnswer, NewGradedAnswer, NewQuestionSet};
use lector_core::repository::{Repository, RepositoryError};
use lector_model::{GenerateRequest, GenerateResponse, ModelClient, ModelError};

/// Model fake that replays queued replies and records every request.
///
/// When the queue runs dry it answers with an empty string.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, ModelError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedModel {
    pub fn new<I, S>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let model = Self::default();
        model
            .replies
            .lock()
            .unwrap()
            .extend(replies.into_iter().map(|reply| Ok(reply.into())));
        Arc::new(model)
    }

    pub fn push_error(&self, error: ModelError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedModel {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ModelError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(GenerateResponse::new(text)),
            Some(Err(e)) => Err(e),
            None => Ok(GenerateResponse::new("")),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Model fake for an unreachable service.
pub struct FailingModel;

#[async_trait]
impl ModelClient for FailingModel {
    async fn generate(&self, _request: &GenerateRequest) -> Result<GenerateResponse, ModelError> {
        Err(ModelError::Unavailable("connection refused".to_string()))
    }

    fn model_name(&self) -> &str {
        "offline"
    }
}

/// In-memory repository; `failing()` rejects every write.
#[derive(Default)]
pub struct MemoryRepository {
    question_sets: Mutex<Vec<GeneratedQuestionSet>>,
    answers: Mutex<Vec<GradedAnswer>>,
    fail_writes: bool,
}

impl MemoryRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail_writes: true,
            ..Self::default()
        })
    }

    pub fn question_sets(&self) -> Vec<GeneratedQuestionSet> {
        self.question_sets.lock().unwrap().clone()
    }

    pub fn answers(&self) -> Vec<GradedAnswer> {
        self.answers.lock().unwrap().clone()
    }

    fn check_writable(&self) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::Backend("disk full".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn save_question_set(
        &self,
        set: NewQuestionSet,
    ) -> Result<GeneratedQuestionSet, RepositoryError> {
        self.check_writable()?;
        let mut sets = self.question_sets.lock().unwrap();
        let stored = GeneratedQuestionSet {
            id: format!("qst-{}", sets.len() + 1),
            source_text: set.source_text,
            questions: set.questions,
            created_at: Utc::now(),
        };
        sets.push(stored.clone());
        Ok(stored)
    }

    async fn save_graded_answer(
        &self,
        answer: NewGradedAnswer,
    ) -> Result<GradedAnswer, RepositoryError> {
        self.check_writable()?;
        let mut answers = self.answers.lock().unwrap();
        let stored = GradedAnswer {
            id: format!("ans-{}", answers.len() + 1),
            source_text: answer.source_text,
            question: answer.question,
            user_answer: answer.user_answer,
            feedback_sentence: answer.feedback_sentence,
            category: answer.category,
            created_at: Utc::now(),
        };
        answers.push(stored.clone());
        Ok(stored)
    }

    async fn find_graded_answers(&self) -> Result<Vec<GradedAnswer>, RepositoryError> {
        Ok(self.answers())
    }

    async fn list_question_sets(
        &self,
        limit: u32,
    ) -> Result<Vec<GeneratedQuestionSet>, RepositoryError> {
        let mut sets = self.question_sets();
        sets.reverse();
        sets.truncate(limit as usize);
        Ok(sets)
    }
}

pub fn tutor(model: Arc<dyn ModelClient>, repository: Arc<dyn Repository>) -> Tutor {
    Tutor::new(
        model,
        repository,
        Arc::new(HeuristicDetector::builtin()),
        TutorSettings::default(),
    )
}
