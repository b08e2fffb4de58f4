use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use ordbok_cli::{Args, CliError, ConfigError};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn args(article_ids: &[u64], entries_dir: &Path) -> Args {
    Args {
        article_ids: article_ids.to_vec(),
        articles_dir: Some(fixtures().join("articles")),
        entries_dir: Some(entries_dir.to_path_buf()),
        concepts: Some(fixtures().join("concepts.json")),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_articles() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    ordbok_cli::run(&args(&[1, 2], temp_dir.path())).expect("Valid articles should render");

    let foo = fs::read_to_string(temp_dir.path().join("1.html")).expect("1.html written");
    assert_eq!(
        foo,
        concat!(
            "<h3><span>foo</span></h3>",
            "<div>substantiv hankjønn</div>",
            "<h4>Betydning og bruk</h4>",
            r#"<div class="explanation">means bar</div>"#
        )
    );

    let and = fs::read_to_string(temp_dir.path().join("2.html")).expect("2.html written");
    assert_eq!(
        and,
        concat!(
            "<h3><span>and</span><span>II</span></h3>",
            "<div>substantiv hankjønn</div>",
            "<section><h4>Opphav</h4><span>norrønt önd</span></section>",
            "<h4>Betydning og bruk</h4>",
            "<ol>",
            r#"<li><div class="explanation">fugl</div>"#,
            "<h5>Eksempel</h5>",
            "<ul><li><em>skyte and</em><p>familiært jakt</p></li></ul>",
            "</li>",
            r#"<li><div class="explanation">i uttrykk gammel</div></li>"#,
            "</ol>",
            "<h4>Faste uttrykk</h4>",
            r#"<ul><li class="sub-article"></li></ul>"#
        )
    );
}

#[test]
fn e2e_smoke_test_failures_do_not_stop_the_batch() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    // 3 is structurally invalid, 4 references an unknown concept, 99 does not exist
    let result = ordbok_cli::run(&args(&[3, 1, 4, 99], temp_dir.path()));

    match result {
        Err(CliError::Batch { failed, total }) => {
            assert_eq!(failed, [3, 4, 99]);
            assert_eq!(total, 4);
        }
        other => panic!("Expected batch failure, got {other:?}"),
    }

    assert!(temp_dir.path().join("1.html").exists());
    for id in [3, 4, 99] {
        assert!(
            !temp_dir.path().join(format!("{id}.html")).exists(),
            "No entry may be written for failed article {id}"
        );
    }
}

#[test]
fn e2e_smoke_test_creates_entries_dir() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let entries_dir = temp_dir.path().join("nested/entries");

    ordbok_cli::run(&args(&[1], &entries_dir)).expect("Article should render");

    assert!(entries_dir.join("1.html").is_file());
}

#[test]
fn e2e_smoke_test_config_labels() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[labels]\ndefinitions = \"Meaning\"\nsub_articles = \"Idioms\"\n",
    )
    .expect("Failed to write config");

    let entries_dir = temp_dir.path().join("entries");
    let mut cfg = args(&[2], &entries_dir);
    cfg.config = Some(config_path.to_string_lossy().to_string());

    ordbok_cli::run(&cfg).expect("Article should render");

    let html = fs::read_to_string(entries_dir.join("2.html")).expect("2.html written");
    assert!(html.contains("<h4>Meaning</h4>"));
    assert!(html.contains("<h4>Idioms</h4>"));
    assert!(html.contains("<h4>Opphav</h4>"));
}

#[test]
fn e2e_smoke_test_config_paths() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let entries_dir = temp_dir.path().join("from-config");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[paths]\narticles = {:?}\nentries = {:?}\nconcepts = {:?}\n",
            fixtures().join("articles").to_string_lossy(),
            entries_dir.to_string_lossy(),
            fixtures().join("concepts.json").to_string_lossy(),
        ),
    )
    .expect("Failed to write config");

    let cfg = Args {
        article_ids: vec![1],
        articles_dir: None,
        entries_dir: None,
        concepts: None,
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    ordbok_cli::run(&cfg).expect("Article should render");

    assert!(entries_dir.join("1.html").is_file());
}

#[test]
fn e2e_smoke_test_missing_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut cfg = args(&[1], temp_dir.path());
    cfg.config = Some(temp_dir.path().join("absent.toml").to_string_lossy().to_string());

    assert!(matches!(
        ordbok_cli::run(&cfg),
        Err(CliError::Config(ConfigError::MissingFile(_)))
    ));
}

#[test]
fn e2e_smoke_test_missing_concepts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut cfg = args(&[1], temp_dir.path());
    cfg.concepts = Some(temp_dir.path().join("absent.json"));

    assert!(matches!(ordbok_cli::run(&cfg), Err(CliError::Ordbok(_))));
    assert!(!temp_dir.path().join("1.html").exists());
}
