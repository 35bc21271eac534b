use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn post(title: &str, related_slug: Option<&str>) -> String {
    let related = related_slug.map(|s| format!("relatedSlug: {s}\n")).unwrap_or_default();
    format!(
        "---\ntitle: \"{title}\"\ndescription: \"About {title}\"\npubDate: 2024-05-10\n{related}draft: false\ntags: [notes]\nauthor: Thiago\nimage:\n  url: \"blog/{title}\"\n  alt: \"{title}\"\n---\nBody\n"
    )
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).expect("Failed to create directory");
    fs::write(path, content).expect("Failed to write post");
}

#[test]
fn test_valid_pair_exits_zero() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write(temp_dir.path(), "blog/es/foo.md", &post("foo", Some("foo-en")));
    write(temp_dir.path(), "blog/en/foo-en.md", &post("foo-en", Some("foo")));

    let mut cmd = cargo_bin_cmd!("postcheck");
    cmd.current_dir(temp_dir.path()).arg("--content-dir").arg("blog");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Validating blog posts..."))
        .stdout(predicate::str::contains("Found 1 Spanish posts"))
        .stdout(predicate::str::contains("Found 1 English posts"))
        .stdout(predicate::str::contains("All posts are valid!"));
}

#[test]
fn test_dangling_link_exits_one() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write(temp_dir.path(), "blog/es/qux.md", &post("qux", Some("qux-en")));

    let mut cmd = cargo_bin_cmd!("postcheck");
    cmd.current_dir(temp_dir.path())
        .arg("check")
        .arg("--content-dir")
        .arg("blog")
        .arg("--no-color");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 error(s) and 0 warning(s)"))
        .stdout(predicate::str::contains("qux.md"))
        .stdout(predicate::str::contains("✗ relatedSlug 'qux-en' not found in en posts"));
}

#[test]
fn test_warnings_only_exit_zero() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write(temp_dir.path(), "blog/es/solo.md", &post("solo", None));

    let mut cmd = cargo_bin_cmd!("postcheck");
    cmd.current_dir(temp_dir.path()).args(["--content-dir", "blog", "--no-color"]);

    // relatedSlug is required, so this is an error
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Missing required field: relatedSlug"))
        .stdout(predicate::str::contains("⚠ No translation link (relatedSlug) specified"));

    write(temp_dir.path(), "blog/es/solo.md", &post("solo", Some("solo-en")).replace("tags: [notes]\n", ""));
    write(temp_dir.path(), "blog/en/solo-en.md", &post("solo-en", Some("solo")));

    let mut cmd = cargo_bin_cmd!("postcheck");
    cmd.current_dir(temp_dir.path()).args(["--content-dir", "blog", "--no-color"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 0 error(s) and 1 warning(s)"));
}

#[test]
fn test_json_output() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write(temp_dir.path(), "blog/es/baz.md", &post("baz", Some("baz")));

    let mut cmd = cargo_bin_cmd!("postcheck");
    cmd.current_dir(temp_dir.path()).args(["--content-dir", "blog", "--format", "json"]);

    let output = cmd.output().expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(value["errors"], 1);
    assert_eq!(value["warnings"], 0);
    assert_eq!(value["files"][0]["findings"][0]["message"], "relatedSlug points to itself: baz");
}

#[test]
fn test_missing_content_dir_fails() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");

    let mut cmd = cargo_bin_cmd!("postcheck");
    cmd.current_dir(temp_dir.path()).args(["--content-dir", "nowhere"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error opening content directory"));
}

#[test]
fn test_config_file_sets_content_dir() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write(temp_dir.path(), "site/posts/es/foo.md", &post("foo", Some("foo-en")));
    write(temp_dir.path(), "site/posts/en/foo-en.md", &post("foo-en", Some("foo")));
    write(temp_dir.path(), "postcheck.toml", "[paths]\ncontent_dir = \"site/posts\"\n");

    let mut cmd = cargo_bin_cmd!("postcheck");
    cmd.current_dir(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 1 Spanish posts"));
}

#[test]
fn test_bad_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write(temp_dir.path(), "custom.toml", "[paths\n");

    let mut cmd = cargo_bin_cmd!("postcheck");
    cmd.current_dir(temp_dir.path()).args(["--config", "custom.toml"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error parsing configuration file"));
}

#[test]
fn test_new_writes_linked_pair() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");

    let mut cmd = cargo_bin_cmd!("postcheck");
    cmd.current_dir(temp_dir.path()).args([
        "new", "--content-dir", "blog",
        "--title-es", "Hola mundo", "--title-en", "Hello world",
        "--author", "Thiago", "--output", "file",
    ]);
    cmd.assert().success();

    let es = fs::read_to_string(temp_dir.path().join("blog/es/hola-mundo.md")).expect("Spanish post");
    assert!(es.contains("relatedSlug: hello-world"));

    let mut cmd = cargo_bin_cmd!("postcheck");
    cmd.current_dir(temp_dir.path()).args(["--content-dir", "blog"]);
    cmd.assert().success();
}
