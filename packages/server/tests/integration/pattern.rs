use crate::common::{TestApp, routes};

mod pattern_listing {
    use super::*;

    #[tokio::test]
    async fn seeded_patterns_are_listed_in_order() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::PATTERNS).await;
        assert_eq!(res.status, 200, "{}", res.text);

        let patterns = res.body.as_array().unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0]["title"], "Two Pointers");
        assert_eq!(patterns[0]["category"], "dsa");
        assert_eq!(patterns[0]["difficulty"], "beginner");
        assert_eq!(
            patterns[0]["checklist"],
            serde_json::json!(["Sorted array?", "Find pair?", "Reduce O(N^2) to O(N)?"])
        );
        assert_eq!(patterns[1]["title"], "Sliding Window");
        assert_eq!(patterns[1]["difficulty"], "intermediate");
        assert_eq!(patterns[1]["intuition"], "Subarray or substring problems.");
    }

    #[tokio::test]
    async fn get_pattern_by_id() {
        let app = TestApp::spawn().await;
        let id = app.pattern_id("Sliding Window").await;

        let res = app.get_without_token(&routes::pattern(id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["id"], id);
        assert_eq!(
            res.body["description"],
            "Maintain a window of elements to satisfy condition."
        );
    }

    #[tokio::test]
    async fn unknown_pattern_returns_404() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(&routes::pattern(999_999)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["message"], "Pattern not found");
    }

    #[tokio::test]
    async fn empty_library_lists_nothing() {
        let app = TestApp::spawn_with(|c| c.seed.enabled = false).await;

        let res = app.get_without_token(routes::PATTERNS).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, serde_json::json!([]));
    }
}

mod pattern_problems {
    use super::*;

    #[tokio::test]
    async fn problems_of_a_pattern_are_listed() {
        let app = TestApp::spawn().await;
        let id = app.pattern_id("Two Pointers").await;

        let res = app.get_without_token(&routes::pattern_problems(id)).await;
        assert_eq!(res.status, 200, "{}", res.text);

        let problems = res.body.as_array().unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0]["title"], "Pair Sum");
        assert_eq!(problems[0]["patternId"], id);
        assert_eq!(problems[0]["difficulty"], "easy");
        assert_eq!(
            problems[0]["testCases"],
            serde_json::json!([{ "input": "[1,2,3], 5", "output": "[2,3]" }])
        );
        assert_eq!(
            problems[0]["starterCode"]["javascript"],
            "function pairSum(arr, target) {\n  // Your code here\n}"
        );
    }

    #[tokio::test]
    async fn unknown_pattern_has_no_problems() {
        let app = TestApp::spawn().await;

        let res = app
            .get_without_token(&routes::pattern_problems(999_999))
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, serde_json::json!([]));
    }
}
