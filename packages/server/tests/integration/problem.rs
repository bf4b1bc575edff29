use serde_json::json;

use crate::common::{TestApp, routes};

const ALL_PASSED: &str =
    "Excellent pattern recognition! Your solution is optimal and handles all edge cases.";

mod problem_lookup {
    use super::*;

    #[tokio::test]
    async fn get_problem_by_id() {
        let app = TestApp::spawn().await;
        let id = app.pair_sum_id().await;

        let res = app.get_without_token(&routes::problem(id)).await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["title"], "Pair Sum");
        assert_eq!(
            res.body["description"],
            "Find two numbers that add up to target."
        );
        assert_eq!(res.body["edgeCases"], json!([]));
    }

    #[tokio::test]
    async fn unknown_problem_returns_404() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(&routes::problem(999_999)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["message"], "Problem not found");
    }
}

mod grading {
    use super::*;

    #[tokio::test]
    async fn short_problems_are_padded_to_five_cases() {
        let app = TestApp::spawn().await;
        let id = app
            .insert_problem("Two Cases", &[("[1,2,3], 5", "[2,3]"), ("[2,7], 9", "[2,7]")])
            .await;

        let res = app
            .post_without_token(
                &routes::problem_submit(id),
                &json!({ "code": "function pairSum(a, t) { return []; }", "language": "javascript" }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);

        let results = res.body["testResults"].as_array().unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(results[0]["input"], "[1,2,3], 5");
        assert_eq!(results[0]["expected"], "[2,3]");
        assert_eq!(results[1]["input"], "[2,7], 9");
        assert_eq!(results[1]["expected"], "[2,7]");
        assert_eq!(results[2]["input"], "Case 1");
        assert_eq!(results[2]["expected"], "Success");

        let passed = results.iter().filter(|r| r["passed"] == true).count();
        assert_eq!(res.body["score"].as_f64().unwrap(), passed as f64 * 20.0);
        assert_eq!(res.body["status"] == "passed", passed == 5);
        assert!(res.body.get("submissionId").is_none());
    }

    #[tokio::test]
    async fn identical_submissions_get_identical_verdicts() {
        let app = TestApp::spawn().await;
        let id = app.pair_sum_id().await;
        let body = json!({ "code": "return [2, 3];", "language": "javascript" });

        let first = app.post_without_token(&routes::problem_submit(id), &body).await;
        let second = app.post_without_token(&routes::problem_submit(id), &body).await;
        assert_eq!(first.status, 200);
        assert_eq!(first.body, second.body);
    }

    #[tokio::test]
    async fn certain_pass_probability_passes_everything() {
        let app = TestApp::spawn_with(|c| c.evaluator.pass_probability = 1.0).await;
        let id = app.pair_sum_id().await;

        let res = app
            .post_without_token(
                &routes::problem_submit(id),
                &json!({ "code": "return [2, 3];", "language": "javascript" }),
            )
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["status"], "passed");
        assert_eq!(res.body["score"], 100.0);
        assert_eq!(res.body["feedback"], ALL_PASSED);
    }

    #[tokio::test]
    async fn failed_cases_report_expected_output() {
        let app = TestApp::spawn_with(|c| c.evaluator.pass_probability = 0.0).await;
        let id = app.pair_sum_id().await;

        let res = app
            .post_without_token(
                &routes::problem_submit(id),
                &json!({ "code": "return null;", "language": "javascript" }),
            )
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["status"], "failed");
        assert_eq!(res.body["score"], 0.0);
        assert_eq!(res.body["testResults"][0]["actual"], "Error: Expected [2,3]");
        assert_eq!(res.body["testResults"][0]["outcome"], "wrong_answer");
        assert_eq!(
            res.body["feedback"],
            "You're close! Your solution passed 0 out of 5 cases. Consider the boundary conditions."
        );
    }

    #[tokio::test]
    async fn blank_code_is_rejected() {
        let app = TestApp::spawn().await;
        let id = app.pair_sum_id().await;

        let res = app
            .post_without_token(
                &routes::problem_submit(id),
                &json!({ "code": "   ", "language": "javascript" }),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_body_is_a_validation_error() {
        let app = TestApp::spawn().await;
        let id = app.pair_sum_id().await;

        let res = app.post_raw(&routes::problem_submit(id), "{\"code\": 42").await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn submitting_to_unknown_problem_returns_404() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                &routes::problem_submit(999_999),
                &json!({ "code": "x", "language": "javascript" }),
            )
            .await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "Problem not found");
    }

    #[tokio::test]
    async fn invalid_token_grades_anonymously() {
        let app = TestApp::spawn().await;
        let id = app.pair_sum_id().await;

        let res = app
            .post_with_token(
                &routes::problem_submit(id),
                &json!({ "code": "x", "language": "javascript" }),
                "not-a-jwt",
            )
            .await;
        assert_eq!(res.status, 200);
        assert!(res.body.get("submissionId").is_none());
    }
}
