use rootbrowse::tooling::cli::{CliContext, Commands};
use rootbrowse::BrowseError;
use std::fs;
use tempfile::TempDir;

fn context(temp: &TempDir) -> CliContext {
    let config = rootbrowse::config::BrowseConfig::default();
    CliContext::from_config(Some(temp.path().to_path_buf()), &config).unwrap()
}

fn browse_json(cli: &CliContext, path: &str) -> serde_json::Value {
    let output = cli
        .execute(&Commands::Browse {
            path: path.to_string(),
            format: "json".to_string(),
        })
        .unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn folder_browse_json_contract() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub/.hidden.txt"), "").unwrap();
    let cli = context(&temp);

    let parsed = browse_json(&cli, "sub");
    assert_eq!(parsed.get("is_folder").and_then(|v| v.as_bool()), Some(true));
    let contents = parsed
        .get("folder_contents")
        .and_then(|v| v.as_array())
        .expect("folder_contents array should exist");
    assert_eq!(contents, &vec![serde_json::Value::from(".hidden.txt")]);
}

#[test]
fn file_browse_json_contract() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    let cli = context(&temp);

    let parsed = browse_json(&cli, "a.txt");
    assert_eq!(parsed.get("is_file").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(parsed.get("name").and_then(|v| v.as_str()), Some("a"));
    assert!(parsed.get("owner").and_then(|v| v.as_u64()).is_some());
    assert_eq!(parsed.get("size").and_then(|v| v.as_u64()), Some(5));
    let permissions = parsed
        .get("permissions")
        .and_then(|v| v.as_str())
        .expect("permissions string should exist");
    assert_eq!(permissions.len(), 3);
    assert_eq!(
        parsed.get("file_contents").and_then(|v| v.as_str()),
        Some("hello")
    );
}

#[test]
fn mutation_commands_acknowledge_with_detail() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);

    let checks: Vec<(Commands, &str)> = vec![
        (
            Commands::CreateFolder {
                name: "test1/test1_1".to_string(),
            },
            "Folder Created Successfully",
        ),
        (
            Commands::CreateFile {
                name: "test1/test1_1.txt".to_string(),
                content: "sample".to_string(),
            },
            "File Created Successfully",
        ),
        (
            Commands::DeleteFile {
                name: "test1/test1_1.txt".to_string(),
            },
            "File Deleted Successfully",
        ),
        (
            Commands::EmptyFolder {
                name: "test1".to_string(),
            },
            "Folder Emptied Successfully",
        ),
        (
            Commands::DeleteFolder {
                name: "test1".to_string(),
            },
            "Folder Deleted Successfully",
        ),
    ];

    for (command, expected) in checks {
        let output = cli.execute(&command).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed.get("detail").and_then(|v| v.as_str()),
            Some(expected),
            "unexpected output for {:?}",
            command
        );
    }
    assert!(!temp.path().join("test1").exists());
}

#[test]
fn failures_carry_status_hints() {
    let temp = TempDir::new().unwrap();
    let cli = context(&temp);

    let err = cli
        .execute(&Commands::Browse {
            path: "missing".to_string(),
            format: "json".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, BrowseError::NotFound(_)));
    assert_eq!(err.status_code(), 404);

    let err = cli
        .execute(&Commands::CreateFile {
            name: "a.md".to_string(),
            content: String::new(),
        })
        .unwrap_err();
    assert!(matches!(err, BrowseError::UnsupportedType(_)));
    assert_eq!(err.status_code(), 422);
}

#[test]
fn text_browse_renders_listing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("readme.txt"), "r").unwrap();
    let cli = context(&temp);

    let output = cli
        .execute(&Commands::Browse {
            path: String::new(),
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("readme.txt"));
}
