use reqtrack::error::{AppError, ImportError};
use reqtrack::state::record::{HttpMethod, Record};
use reqtrack::transfer::{self, json, markdown};

fn sample() -> Vec<Record> {
    vec![
        Record::new(r"\/x", HttpMethod::Get, "{}", "{}"),
        Record::new(r"\/users\/\d+", HttpMethod::Put, "{\"a\": 1}", "{\"ok\": true}"),
    ]
}

#[test]
fn markdown_export_writes_requests_md() {
    let dir = tempfile::tempdir().unwrap();
    let download = markdown::download(&sample()).unwrap();
    let saved = transfer::save(dir.path(), &download).unwrap();

    assert_eq!(saved.path, dir.path().join("requests.md"));
    let body = std::fs::read_to_string(&saved.path).unwrap();
    assert!(body.starts_with("## Request 1\n\n**URL:** \\/x\n"));
    assert!(body.contains("## Request 2\n\n**URL:** \\/users\\/\\d+\n\n**Method:** PUT\n"));
    assert!(body.contains("**Response:**\n```json\n{\"ok\": true}\n```\n"));
}

#[test]
fn json_export_then_import_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let records = sample();
    let saved = transfer::save(dir.path(), &json::download(&records).unwrap()).unwrap();
    assert_eq!(saved.path, dir.path().join("requests.json"));

    let text = std::fs::read_to_string(&saved.path).unwrap();
    assert!(text.starts_with("[\n  {\n    \"url\""));
    assert_eq!(json::parse_records(&text).unwrap(), records);
}

#[test]
fn export_leaves_no_temporary_files() {
    let dir = tempfile::tempdir().unwrap();
    for _ in 0..3 {
        transfer::save(dir.path(), &markdown::download(&sample()).unwrap()).unwrap();
        transfer::save(dir.path(), &json::download(&sample()).unwrap()).unwrap();
    }
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["requests.json", "requests.md"]);
}

#[test]
fn empty_store_exports_are_valid() {
    let dir = tempfile::tempdir().unwrap();
    let md = transfer::save(dir.path(), &markdown::download(&[]).unwrap()).unwrap();
    let js = transfer::save(dir.path(), &json::download(&[]).unwrap()).unwrap();
    assert_eq!(md.size_bytes, 0);
    assert_eq!(std::fs::read_to_string(js.path).unwrap(), "[]");
}

#[tokio::test]
async fn read_file_rejects_wrong_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"url": "x"}"#).unwrap();

    let err = json::read_file(&path).await.unwrap_err();
    assert!(matches!(err, AppError::Import(ImportError::NotAnArray(_))));
    assert!(err.to_string().contains("expected a JSON array"));
}

#[tokio::test]
async fn read_file_parses_exported_file() {
    let dir = tempfile::tempdir().unwrap();
    let saved = transfer::save(dir.path(), &json::download(&sample()).unwrap()).unwrap();
    assert_eq!(json::read_file(&saved.path).await.unwrap(), sample());
}
