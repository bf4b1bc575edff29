use std::net::SocketAddr;

use reqwest::Client;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::{Value, json};
use tempfile::TempDir;

use pattern_gym_server::config::{
    AnalyzerBackend, AnalyzerConfig, AppConfig, AuthConfig, CorsConfig, DatabaseConfig, InterviewConfig,
    SeedConfig, ServerConfig,
};
use pattern_gym_server::entity::problem;
use pattern_gym_server::state::AppState;
use pattern_gym_server::utils::jwt::{self, Claims};

pub const JWT_SECRET: &str = "test-secret-for-integration-tests";

pub mod routes {
    pub const PATTERNS: &str = "/api/patterns";
    pub const SUBMISSIONS: &str = "/api/submissions";
    pub const INTERVIEWS: &str = "/api/interviews";
    pub const USER: &str = "/api/user";
    pub const OPENAPI: &str = "/api-docs/openapi.json";

    pub fn pattern(id: i32) -> String {
        format!("/api/patterns/{id}")
    }

    pub fn pattern_problems(id: i32) -> String {
        format!("/api/patterns/{id}/problems")
    }

    pub fn problem(id: i32) -> String {
        format!("/api/problems/{id}")
    }

    pub fn problem_submit(id: i32) -> String {
        format!("/api/problems/{id}/submit")
    }

    pub fn interview(id: i32) -> String {
        format!("/api/interviews/{id}")
    }

    pub fn interview_submit(id: i32) -> String {
        format!("/api/interviews/{id}/submit")
    }

    pub fn interview_analyze(id: i32) -> String {
        format!("/api/interviews/{id}/analyze")
    }
}

/// A running test server backed by a fresh SQLite file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    _dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

pub fn test_config(db_url: String) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            log_level: "warn".to_string(),
            body_limit_bytes: 16 * 1024 * 1024,
            cors: CorsConfig {
                allow_origins: vec![],
                max_age: 3600,
            },
        },
        database: DatabaseConfig { url: db_url },
        auth: AuthConfig {
            jwt_secret: JWT_SECRET.to_string(),
            cookie_name: "session".to_string(),
        },
        evaluator: Default::default(),
        interview: InterviewConfig {
            duration_secs: 45 * 60,
            grace_secs: 60,
        },
        analyzer: AnalyzerConfig {
            backend: AnalyzerBackend::Canned,
            url: None,
            api_key: None,
            timeout_secs: 5,
        },
        seed: SeedConfig { enabled: true },
    }
}

impl TestApp {
    /// Spawn a server with seeded content and default settings.
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn a server after letting `configure` adjust the settings.
    pub async fn spawn_with(configure: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let mut app_config = test_config(db_url);
        configure(&mut app_config);

        let db = pattern_gym_server::database::init_db(&app_config.database.url)
            .await
            .expect("Failed to initialize test database");
        if app_config.seed.enabled {
            pattern_gym_server::seed::seed_content(&db)
                .await
                .expect("Failed to seed test database");
        }

        let state = AppState::new(db.clone(), app_config).expect("Failed to build state");
        let app = pattern_gym_server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Sign a session token for `sub`, the way the identity provider would.
    pub fn token_for(&self, sub: &str) -> String {
        let mut claims = Claims::new(sub, chrono::Duration::hours(1));
        claims.email = Some(format!("{sub}@example.com"));
        claims.first_name = Some("Test".into());
        jwt::sign(&claims, JWT_SECRET).expect("Failed to sign token")
    }

    pub async fn post_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_with_cookie(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Cookie", format!("session={token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_without_token(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_without_token(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    /// Id of the seeded pattern titled `title`.
    pub async fn pattern_id(&self, title: &str) -> i32 {
        let res = self.get_without_token(routes::PATTERNS).await;
        assert_eq!(res.status, 200, "list patterns failed: {}", res.text);
        res.body
            .as_array()
            .and_then(|patterns| patterns.iter().find(|p| p["title"] == title))
            .and_then(|p| p["id"].as_i64())
            .unwrap_or_else(|| panic!("pattern {title} should be seeded")) as i32
    }

    /// Id of the seeded "Pair Sum" problem.
    pub async fn pair_sum_id(&self) -> i32 {
        let pattern_id = self.pattern_id("Two Pointers").await;
        let res = self
            .get_without_token(&routes::pattern_problems(pattern_id))
            .await;
        assert_eq!(res.status, 200, "list problems failed: {}", res.text);
        res.body[0]["id"].as_i64().expect("problem id") as i32
    }

    /// Insert a problem with the given `(input, output)` cases and return its id.
    pub async fn insert_problem(&self, title: &str, cases: &[(&str, &str)]) -> i32 {
        let test_cases: Vec<Value> = cases
            .iter()
            .map(|(input, output)| json!({ "input": input, "output": output }))
            .collect();

        let model = problem::ActiveModel {
            pattern_id: Set(None),
            title: Set(title.to_string()),
            description: Set("Inserted by a test.".to_string()),
            difficulty: Set(common::ProblemDifficulty::Easy),
            starter_code: Set(json!({})),
            test_cases: Set(json!(test_cases)),
            expected_time_complexity: Set(None),
            expected_space_complexity: Set(None),
            edge_cases: Set(json!([])),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        model.insert(&self.db).await.expect("insert problem").id
    }

    /// Start an interview of `kind` and return its id.
    pub async fn create_interview(&self, token: &str, kind: &str) -> i32 {
        let res = self
            .post_with_token(routes::INTERVIEWS, &json!({ "type": kind }), token)
            .await;
        assert_eq!(res.status, 201, "create_interview failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> i32 {
        self.body["id"]
            .as_i64()
            .expect("response body should contain 'id'") as i32
    }
}
