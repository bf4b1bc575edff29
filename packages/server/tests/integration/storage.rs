use chrono::{TimeDelta, Utc};
use common::{InterviewStatus, InterviewType, SubmissionStatus, TestCase, TestOutcome, TestResult, Verdict};

use pattern_gym_server::storage::{
    DatabaseStorage, InterviewCompletion, NewInterview, NewSubmission, Storage, UserProfile,
};

use crate::common::TestApp;

fn profile(id: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        email: Some(format!("{id}@example.com")),
        first_name: None,
        last_name: None,
        profile_image_url: None,
    }
}

fn verdict(outcome: TestOutcome) -> Verdict {
    let case = TestCase::new("1", "1");
    Verdict::from_results(vec![TestResult::new(&case, "1", outcome)])
}

#[tokio::test]
async fn verdict_is_recorded_once() {
    let app = TestApp::spawn().await;
    let storage = DatabaseStorage::new(app.db.clone());
    let problem_id = app.pair_sum_id().await;

    storage.upsert_user(&profile("alice")).await.unwrap();
    let submission = storage
        .create_submission(NewSubmission {
            user_id: "alice".into(),
            problem_id,
            language: "javascript".into(),
            code: "x".into(),
        })
        .await
        .unwrap();
    assert_eq!(submission.status, SubmissionStatus::Pending);

    assert!(storage.record_verdict(submission.id, &verdict(TestOutcome::Passed)).await.unwrap());
    assert!(!storage.record_verdict(submission.id, &verdict(TestOutcome::WrongAnswer)).await.unwrap());

    let stored = storage.list_submissions_for_user("alice").await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, SubmissionStatus::Passed);
    assert_eq!(stored[0].score, Some(100.0));
}

#[tokio::test]
async fn interview_completes_and_is_analyzed_once() {
    let app = TestApp::spawn().await;
    let storage = DatabaseStorage::new(app.db.clone());

    storage.upsert_user(&profile("bob")).await.unwrap();
    let interview = storage
        .create_interview(NewInterview {
            user_id: "bob".into(),
            interview_type: InterviewType::Dsa,
            expires_at: Utc::now() + TimeDelta::minutes(45),
        })
        .await
        .unwrap();
    assert_eq!(interview.status, InterviewStatus::InProgress);

    let completion = |code: &str| InterviewCompletion {
        code: Some(code.to_string()),
        duration_seconds: 30,
        submitted_at: Some(Utc::now()),
        ..Default::default()
    };
    assert!(storage.complete_interview(interview.id, completion("first")).await.unwrap());
    assert!(!storage.complete_interview(interview.id, completion("second")).await.unwrap());

    assert!(storage.record_analysis(interview.id, "Good", 90).await.unwrap());
    assert!(!storage.record_analysis(interview.id, "Bad", 10).await.unwrap());

    let stored = storage.get_interview(interview.id).await.unwrap().unwrap();
    assert_eq!(stored.status, InterviewStatus::Completed);
    assert_eq!(stored.code.as_deref(), Some("first"));
    assert!(stored.feedback.is_none());
    assert_eq!(stored.analysis_feedback.as_deref(), Some("Good"));
    assert_eq!(stored.score, Some(90));
    assert!(stored.analyzed_at.is_some());
}

#[tokio::test]
async fn upsert_refreshes_profile_fields() {
    let app = TestApp::spawn().await;
    let storage = DatabaseStorage::new(app.db.clone());

    let first = storage.upsert_user(&profile("carol")).await.unwrap();
    let mut updated = profile("carol");
    updated.first_name = Some("Carol".into());
    let second = storage.upsert_user(&updated).await.unwrap();

    assert_eq!(second.first_name.as_deref(), Some("Carol"));
    assert_eq!(second.created_at, first.created_at);
}
