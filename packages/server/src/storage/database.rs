use async_trait::async_trait;
use chrono::Utc;
use common::{InterviewStatus, SubmissionStatus, Verdict};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::instrument;

use super::{
    InterviewCompletion, NewInterview, NewSubmission, Storage, StorageError, UserProfile,
};
use crate::entity::{interview, pattern, problem, submission, user};

/// [`Storage`] backed by a sea-orm connection pool.
#[derive(Clone)]
pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn list_patterns(&self) -> Result<Vec<pattern::Model>, StorageError> {
        Ok(pattern::Entity::find()
            .order_by_asc(pattern::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_pattern(&self, id: i32) -> Result<Option<pattern::Model>, StorageError> {
        Ok(pattern::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn list_problems_for_pattern(
        &self,
        pattern_id: i32,
    ) -> Result<Vec<problem::Model>, StorageError> {
        Ok(problem::Entity::find()
            .filter(problem::Column::PatternId.eq(pattern_id))
            .order_by_asc(problem::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get_problem(&self, id: i32) -> Result<Option<problem::Model>, StorageError> {
        Ok(problem::Entity::find_by_id(id).one(&self.db).await?)
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.id))]
    async fn upsert_user(&self, profile: &UserProfile) -> Result<user::Model, StorageError> {
        let now = Utc::now();
        let model = user::ActiveModel {
            id: Set(profile.id.clone()),
            email: Set(profile.email.clone()),
            first_name: Set(profile.first_name.clone()),
            last_name: Set(profile.last_name.clone()),
            profile_image_url: Set(profile.profile_image_url.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user::Entity::insert(model)
            .on_conflict(
                OnConflict::column(user::Column::Id)
                    .update_columns([
                        user::Column::Email,
                        user::Column::FirstName,
                        user::Column::LastName,
                        user::Column::ProfileImageUrl,
                        user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        user::Entity::find_by_id(profile.id.clone())
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", profile.id)).into())
    }

    #[instrument(skip(self, new), fields(user_id = %new.user_id, problem_id = new.problem_id))]
    async fn create_submission(
        &self,
        new: NewSubmission,
    ) -> Result<submission::Model, StorageError> {
        let model = submission::ActiveModel {
            user_id: Set(new.user_id),
            problem_id: Set(new.problem_id),
            language: Set(new.language),
            code: Set(new.code),
            status: Set(SubmissionStatus::Pending),
            feedback: Set(None),
            score: Set(None),
            test_results: Set(None),
            created_at: Set(Utc::now()),
            graded_at: Set(None),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    #[instrument(skip(self, verdict), fields(status = %verdict.status))]
    async fn record_verdict(&self, id: i32, verdict: &Verdict) -> Result<bool, StorageError> {
        let update = submission::ActiveModel {
            status: Set(verdict.status),
            feedback: Set(Some(verdict.feedback.clone())),
            score: Set(Some(verdict.score)),
            test_results: Set(Some(serde_json::to_value(&verdict.test_results)?)),
            graded_at: Set(Some(Utc::now())),
            ..Default::default()
        };

        let result = submission::Entity::update_many()
            .set(update)
            .filter(submission::Column::Id.eq(id))
            .filter(submission::Column::Status.eq(SubmissionStatus::Pending))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn list_submissions_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<submission::Model>, StorageError> {
        Ok(submission::Entity::find()
            .filter(submission::Column::UserId.eq(user_id))
            .order_by_desc(submission::Column::CreatedAt)
            .order_by_desc(submission::Column::Id)
            .all(&self.db)
            .await?)
    }

    #[instrument(skip(self, new), fields(user_id = %new.user_id, interview_type = %new.interview_type))]
    async fn create_interview(&self, new: NewInterview) -> Result<interview::Model, StorageError> {
        let model = interview::ActiveModel {
            user_id: Set(new.user_id),
            interview_type: Set(new.interview_type),
            status: Set(InterviewStatus::InProgress),
            recording_url: Set(None),
            feedback: Set(None),
            score: Set(None),
            analysis_feedback: Set(None),
            duration_seconds: Set(None),
            code: Set(None),
            notes: Set(None),
            whiteboard_data: Set(None),
            expires_at: Set(new.expires_at),
            submitted_at: Set(None),
            analyzed_at: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn get_interview(&self, id: i32) -> Result<Option<interview::Model>, StorageError> {
        Ok(interview::Entity::find_by_id(id).one(&self.db).await?)
    }

    #[instrument(skip(self, completion))]
    async fn complete_interview(
        &self,
        id: i32,
        completion: InterviewCompletion,
    ) -> Result<bool, StorageError> {
        let update = interview::ActiveModel {
            status: Set(InterviewStatus::Completed),
            feedback: Set(completion.feedback),
            recording_url: Set(completion.recording_url),
            code: Set(completion.code),
            notes: Set(completion.notes),
            whiteboard_data: Set(completion.whiteboard_data),
            duration_seconds: Set(Some(completion.duration_seconds)),
            submitted_at: Set(completion.submitted_at),
            ..Default::default()
        };

        let result = interview::Entity::update_many()
            .set(update)
            .filter(interview::Column::Id.eq(id))
            .filter(interview::Column::Status.eq(InterviewStatus::InProgress))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    #[instrument(skip(self, feedback))]
    async fn record_analysis(
        &self,
        id: i32,
        feedback: &str,
        score: i32,
    ) -> Result<bool, StorageError> {
        let update = interview::ActiveModel {
            analysis_feedback: Set(Some(feedback.to_string())),
            score: Set(Some(score)),
            analyzed_at: Set(Some(Utc::now())),
            ..Default::default()
        };

        let result = interview::Entity::update_many()
            .set(update)
            .filter(interview::Column::Id.eq(id))
            .filter(interview::Column::Status.eq(InterviewStatus::Completed))
            .filter(interview::Column::AnalyzedAt.is_null())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn list_interviews_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<interview::Model>, StorageError> {
        Ok(interview::Entity::find()
            .filter(interview::Column::UserId.eq(user_id))
            .order_by_desc(interview::Column::CreatedAt)
            .order_by_desc(interview::Column::Id)
            .all(&self.db)
            .await?)
    }
}
