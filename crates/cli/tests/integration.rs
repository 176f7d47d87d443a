use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"{
  "group": "dev.example",
  "version": "2.1.0",
  "components": { "java": "build/libs/lib.jar" },
  "artifacts": {
    "java-jar-javadoc": { "path": "build/libs/lib-javadoc.jar", "classifier": "javadoc" },
    "java-jar-sources": { "path": "build/libs/lib-sources.jar", "classifier": "sources" }
  },
  "publications": [
    {
      "name": "release",
      "artifactId": "lib",
      "pom": {
        "artifactUrl": "https://github.com/example/lib.git",
        "description": "Example library",
        "licenses": [{}],
        "developers": [{ "id": "dev", "name": "Dev Eloper", "roles": ["maintainer"] }],
        "scm": {}
      }
    }
  ]
}"#;

const CONFIG_WITHOUT_ARTIFACT_ID: &str = r#"{
  "publications": [
    { "name": "release", "pom": { "artifactUrl": "https://github.com/example/lib" } }
  ]
}"#;

fn write_config(root: &Path, content: &str) {
    fs::create_dir_all(root.join(".pomkit")).unwrap();
    fs::write(root.join(".pomkit/config.json"), content).unwrap();
}

async fn run_in(dir: &Path, args: &[&str]) -> anyhow::Result<()> {
    let args: Vec<String> = std::iter::once("pomkit")
        .chain(args.iter().copied())
        .map(str::to_string)
        .collect();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir).unwrap();
    let result = pomkit_cli::main(&args).await;
    std::env::set_current_dir(&original_dir).unwrap();
    result
}

#[tokio::test]
#[serial]
async fn test_cli_init_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("settings.gradle.kts"), "").unwrap();

    let result = run_in(temp_dir.path(), &["init", "--dry-run"]).await;

    assert!(result.is_ok());
    assert!(!temp_dir.path().join(".pomkit/config.json").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("settings.gradle.kts"), "").unwrap();

    let result = run_in(temp_dir.path(), &["init"]).await;
    assert!(result.is_ok());

    let content = fs::read_to_string(temp_dir.path().join(".pomkit/config.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["publications"][0]["name"], "release");
    assert!(json["artifacts"]["java-jar-javadoc"].is_object());
}

#[tokio::test]
#[serial]
async fn test_cli_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "{}");

    let result = run_in(temp_dir.path(), &["init"]).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("already initialized"));
}

#[tokio::test]
#[serial]
async fn test_cli_config_from_subdirectory() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), CONFIG);
    let nested = temp_dir.path().join("src/main/java");
    fs::create_dir_all(&nested).unwrap();

    let result = run_in(&nested, &["config"]).await;

    assert!(result.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_config_rejects_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "{ not json");

    let result = run_in(temp_dir.path(), &["config"]).await;

    assert!(result.is_err());
}

#[tokio::test]
#[serial]
async fn test_cli_env_reads_root_property_files() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "{}");
    fs::write(
        temp_dir.path().join("local.properties"),
        "pomkitIntegrationKey = from-file\n",
    )
    .unwrap();

    let found = run_in(temp_dir.path(), &["env", "pomkitIntegrationKey"]).await;
    assert!(found.is_ok());

    let missing = run_in(temp_dir.path(), &["env", "pomkitIntegrationMissing"]).await;
    assert_eq!(
        missing.unwrap_err().to_string(),
        "pomkitIntegrationMissing is not set"
    );

    let defaulted = run_in(
        temp_dir.path(),
        &["env", "pomkitIntegrationMissing", "--default", "x", "--format", "json"],
    )
    .await;
    assert!(defaulted.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_pom_write() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), CONFIG);

    let result = run_in(temp_dir.path(), &["pom", "--write"]).await;
    assert!(result.is_ok());

    let pom_path = temp_dir
        .path()
        .join("build/publications/release/pom-default.xml");
    let pom = fs::read_to_string(pom_path).unwrap();
    assert!(pom.contains("<groupId>dev.example</groupId>"));
    assert!(pom.contains("<artifactId>lib</artifactId>"));
    assert!(pom.contains("<version>2.1.0</version>"));
    assert!(pom.contains("<url>https://github.com/example/lib.git</url>"));
    assert!(pom.contains("<url>https://github.com/example/lib/tree/main</url>"));
    assert!(pom.contains("<connection>scm:git:github.com/example/lib.git</connection>"));
    assert!(pom.contains("<name>MIT</name>"));
}

#[tokio::test]
#[serial]
async fn test_cli_pom_unknown_publication() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), CONFIG);

    let result = run_in(temp_dir.path(), &["pom", "-p", "snapshot"]).await;

    assert!(result.is_err());
}

#[tokio::test]
#[serial]
async fn test_cli_pom_without_publications() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "{}");

    let result = run_in(temp_dir.path(), &["pom"]).await;

    assert!(result.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_javadoc() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), CONFIG);

    assert!(run_in(temp_dir.path(), &["javadoc"]).await.is_ok());
    assert!(
        run_in(temp_dir.path(), &["javadoc", "-p", "missing"])
            .await
            .is_err()
    );
}

#[tokio::test]
#[serial]
async fn test_cli_check_missing_artifact_id() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), CONFIG_WITHOUT_ARTIFACT_ID);

    let result = run_in(temp_dir.path(), &["check"]).await;

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("artifactId"));
}

#[tokio::test]
#[serial]
async fn test_cli_check_json_and_strict() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), CONFIG);

    let lenient = run_in(temp_dir.path(), &["check", "--format", "json"]).await;
    assert!(lenient.is_ok());

    // No signing keys in the project property files
    let strict = run_in(temp_dir.path(), &["check", "--strict"]).await;
    assert!(strict.is_err());
}
