use pattern_gym_server::seed::{SeedReport, seed_content};

use crate::common::TestApp;

#[tokio::test]
async fn seeding_twice_inserts_once() {
    let app = TestApp::spawn_with(|c| c.seed.enabled = false).await;

    let first = seed_content(&app.db).await.unwrap();
    assert_eq!(
        first,
        SeedReport {
            patterns: 2,
            problems: 2
        }
    );

    let second = seed_content(&app.db).await.unwrap();
    assert_eq!(second, SeedReport::default());

    app.pattern_id("Two Pointers").await;
    app.pattern_id("Sliding Window").await;
}
