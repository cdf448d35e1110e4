//! Integration tests for pipekit-client against an in-process stub service.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::extract::{Path as UrlPath, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use pipekit_client::{ClientError, PipelineClient, RunOptions, RunSubmitter};
use pipekit_compiler::Compiler;
use pipekit_core::domain::run::RunState;
use pipekit_core::{Arguments, Component, ParameterSpec, ParameterType, Pipeline, Task};
use serde_json::{Value, json};

/// Requests seen by the stub service
#[derive(Default)]
struct Recorded {
    runs: Vec<Value>,
    created_experiments: Vec<String>,
    auth_headers: Vec<Option<String>>,
    looked_up_runs: Vec<String>,
}

type Shared = Arc<Mutex<Recorded>>;

async fn create_run(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut recorded = state.lock().unwrap();
    recorded.auth_headers.push(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
    let display_name = body["display_name"].clone();
    let experiment_id = body.get("experiment_id").cloned().unwrap_or(Value::Null);
    recorded.runs.push(body);

    Json(json!({
        "run_id": "run-1",
        "display_name": display_name,
        "experiment_id": experiment_id,
        "state": "PENDING",
        "created_at": "2026-10-17T10:00:00Z"
    }))
}

async fn get_run(
    State(state): State<Shared>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    state.lock().unwrap().looked_up_runs.push(id.clone());
    if id == "run-1" {
        Ok(Json(json!({ "run_id": "run-1", "state": "SUCCEEDED" })))
    } else {
        Err((StatusCode::NOT_FOUND, format!("run {} not found", id)))
    }
}

async fn list_experiments(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let filter = query.get("filter").cloned().unwrap_or_default();
    if filter.contains("\"Existing\"") {
        Json(json!({
            "experiments": [{ "experiment_id": "exp-existing", "display_name": "Existing" }],
            "total_size": 1
        }))
    } else {
        Json(json!({}))
    }
}

async fn create_experiment(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let name = body["display_name"].as_str().unwrap_or_default().to_string();
    state.lock().unwrap().created_experiments.push(name.clone());
    Json(json!({ "experiment_id": "exp-new", "display_name": name }))
}

/// Start the stub service on an ephemeral port and return its base URL
async fn spawn_service() -> (String, Shared) {
    let state = Shared::default();
    let app = Router::new()
        .route("/apis/v2beta1/runs", post(create_run))
        .route("/apis/v2beta1/runs/{id}", get(get_run))
        .route(
            "/apis/v2beta1/experiments",
            get(list_experiments).post(create_experiment),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

fn relay(message: &str) -> String {
    message.to_string()
}

/// Compile a small pipeline into `dir` and return the package path
fn write_package(dir: &Path) -> PathBuf {
    let component = Component::new(
        "relay",
        ParameterSpec::string("message"),
        ParameterType::String,
        relay,
    );
    let pipeline = Pipeline::new(
        "relay-pipeline",
        ParameterSpec::string("recipient"),
        Task::new("relay", component, "recipient"),
    );

    let path = dir.join("pipeline.yaml");
    Compiler::default()
        .compile_to_file(&pipeline, &path)
        .unwrap();
    path
}

fn recipient(value: &str) -> Arguments {
    [("recipient".to_string(), value.to_string())].into()
}

#[tokio::test]
async fn test_create_run_from_package() {
    let (url, state) = spawn_service().await;
    let dir = tempfile::tempdir().unwrap();
    let package = write_package(dir.path());

    let client = PipelineClient::new(url);
    let run = client
        .create_run_from_pipeline_package(&package, recipient("World"), &RunOptions::default())
        .await
        .unwrap();

    assert_eq!(run.run_id, "run-1");
    assert_eq!(run.state, RunState::Pending);

    let recorded = state.lock().unwrap();
    assert_eq!(recorded.runs.len(), 1);
    let body = &recorded.runs[0];
    assert_eq!(
        body["runtime_config"]["parameters"],
        json!({ "recipient": "World" })
    );
    assert_eq!(body["pipeline_spec"]["pipelineInfo"]["name"], "relay-pipeline");
    assert!(
        body["display_name"]
            .as_str()
            .unwrap()
            .starts_with("relay-pipeline ")
    );
    assert!(body.get("experiment_id").is_none());
    assert_eq!(recorded.auth_headers, vec![None]);
}

#[tokio::test]
async fn test_submitter_uses_named_experiment_and_token() {
    let (url, state) = spawn_service().await;
    let dir = tempfile::tempdir().unwrap();
    let package = write_package(dir.path());

    let client = PipelineClient::new(url).with_token("s3cret");
    let submitter: &dyn RunSubmitter = &client;
    let options = RunOptions {
        run_name: Some("greeting".to_string()),
        experiment_name: Some("Existing".to_string()),
        pipeline_root: None,
    };

    let run = submitter
        .submit(&package, recipient("Ada"), &options)
        .await
        .unwrap();
    assert_eq!(run.experiment_id.as_deref(), Some("exp-existing"));

    let recorded = state.lock().unwrap();
    assert!(recorded.created_experiments.is_empty());
    assert_eq!(recorded.runs[0]["display_name"], "greeting");
    assert_eq!(
        recorded.auth_headers,
        vec![Some("Bearer s3cret".to_string())]
    );
}

#[tokio::test]
async fn test_missing_experiment_is_created() {
    let (url, state) = spawn_service().await;
    let client = PipelineClient::new(url);

    let experiment = client.get_or_create_experiment("Fresh").await.unwrap();
    assert_eq!(experiment.experiment_id, "exp-new");
    assert_eq!(
        state.lock().unwrap().created_experiments,
        vec!["Fresh".to_string()]
    );
}

#[tokio::test]
async fn test_get_run() {
    let (url, _state) = spawn_service().await;
    let client = PipelineClient::new(url);

    let run = client.get_run("run-1").await.unwrap();
    assert_eq!(run.state, RunState::Succeeded);

    let err = client.get_run("nope").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_run_id_cannot_escape_runs_route() {
    let (url, state) = spawn_service().await;
    let client = PipelineClient::new(url);

    let err = client.get_run("../experiments").await.unwrap_err();
    assert!(err.is_not_found());

    let err = client.get_run("run-1?view=FULL").await.unwrap_err();
    assert!(err.is_not_found());

    let err = client.get_run("..").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidRequest(_)));

    assert_eq!(
        state.lock().unwrap().looked_up_runs,
        vec!["../experiments".to_string(), "run-1?view=FULL".to_string()]
    );
}

#[tokio::test]
async fn test_missing_package_fails_before_request() {
    let (url, state) = spawn_service().await;
    let dir = tempfile::tempdir().unwrap();
    let client = PipelineClient::new(url);

    let err = client
        .create_run_from_pipeline_package(
            &dir.path().join("absent.yaml"),
            recipient("World"),
            &RunOptions::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Package(_)));
    assert!(state.lock().unwrap().runs.is_empty());
}
