use super::support::ListingServer;
use dirmirror::commands::mirror::run;
use dirmirror::{HttpTransport, Mirror, MirrorConfig, NodeOutcome, Transport};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use url::Url;

fn config_for(server: &ListingServer, start: &str, output: PathBuf) -> MirrorConfig {
    MirrorConfig {
        start_url: server.url(start),
        output_dir: output,
        ..MirrorConfig::default()
    }
}

fn sample_tree(server: &ListingServer) {
    server.listing("/pub/", &["readme.txt", "docs/", "data.bin"]);
    server.file("/pub/readme.txt", b"top-level readme\n", "text/plain");
    server.listing("/pub/docs/", &["guide.md", "img/"]);
    server.file("/pub/docs/guide.md", b"# Guide\n", "text/markdown");
    server.listing("/pub/docs/img/", &[]);
    server.file(
        "/pub/data.bin",
        &[0x00, 0xff, 0x10, 0x80, 0x7f],
        "application/octet-stream",
    );
}

#[test]
fn test_mirror_full_listing() {
    let server = ListingServer::start();
    sample_tree(&server);
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("downloads");

    let outcome = run(&config_for(&server, "/pub/", output.clone())).unwrap();

    assert_eq!(
        fs::read(output.join("readme.txt")).unwrap(),
        b"top-level readme\n"
    );
    assert_eq!(
        fs::read(output.join("docs").join("guide.md")).unwrap(),
        b"# Guide\n"
    );
    assert_eq!(
        fs::read(output.join("data.bin")).unwrap(),
        vec![0x00, 0xff, 0x10, 0x80, 0x7f]
    );
    assert!(output.join("docs").join("img").is_dir());

    let summary = outcome.summary();
    assert_eq!(summary.folders, 3);
    assert_eq!(summary.files, 3);
    assert!(!summary.has_errors());
}

#[test]
fn test_mirror_visits_depth_first_in_document_order() {
    let server = ListingServer::start();
    sample_tree(&server);
    let temp_dir = TempDir::new().unwrap();

    let outcome = run(&config_for(
        &server,
        "/pub/",
        temp_dir.path().join("downloads"),
    ))
    .unwrap();

    let paths: Vec<String> = outcome
        .visited_urls()
        .iter()
        .map(|u| u.path().to_string())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/pub/",
            "/pub/readme.txt",
            "/pub/docs/",
            "/pub/docs/guide.md",
            "/pub/docs/img/",
            "/pub/data.bin",
        ]
    );
}

#[test]
fn test_failed_child_does_not_stop_siblings() {
    let server = ListingServer::start();
    server.listing("/", &["missing.txt", "broken/", "ok.txt"]);
    server.status("/broken/", 500);
    server.file("/ok.txt", b"still here", "text/plain");
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("downloads");

    let outcome = run(&config_for(&server, "/", output.clone())).unwrap();

    let children = outcome.children();
    assert_eq!(children.len(), 3);
    assert!(matches!(children[0], NodeOutcome::NetworkError { .. }));
    assert!(matches!(children[1], NodeOutcome::NetworkError { .. }));
    assert!(matches!(children[2], NodeOutcome::File { .. }));

    assert!(!output.join("missing.txt").exists());
    assert!(!output.join("broken").exists());
    assert_eq!(fs::read(output.join("ok.txt")).unwrap(), b"still here");
    assert_eq!(outcome.summary().network_errors, 2);
}

#[test]
fn test_timeout_is_a_network_error() {
    let server = ListingServer::start();
    server.listing("/", &["slow.bin", "fast.bin"]);
    server.slow_file("/slow.bin", b"late", Duration::from_secs(5));
    server.file("/fast.bin", b"fast", "application/octet-stream");
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("downloads");

    let config = MirrorConfig {
        timeout_secs: 1,
        ..config_for(&server, "/", output.clone())
    };
    let outcome = run(&config).unwrap();

    let children = outcome.children();
    assert!(matches!(children[0], NodeOutcome::NetworkError { .. }));
    assert!(!output.join("slow.bin").exists());
    assert_eq!(fs::read(output.join("fast.bin")).unwrap(), b"fast");
}

#[test]
fn test_rerun_overwrites_in_place() {
    let server = ListingServer::start();
    sample_tree(&server);
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("downloads");
    let config = config_for(&server, "/pub/", output.clone());

    let first = run(&config).unwrap();
    let guide_before = fs::read(output.join("docs").join("guide.md")).unwrap();

    let second = run(&config).unwrap();
    let guide_after = fs::read(output.join("docs").join("guide.md")).unwrap();

    assert_eq!(guide_before, guide_after);
    assert_eq!(first.summary(), second.summary());
    assert!(!second.summary().has_errors());
}

#[test]
fn test_non_html_start_url_cannot_overwrite_output_folder() {
    let server = ListingServer::start();
    server.file("/single.iso", b"iso bytes", "application/octet-stream");
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("downloads");

    let outcome = run(&config_for(&server, "/single.iso", output.clone())).unwrap();

    assert!(matches!(outcome, NodeOutcome::WriteError { .. }));
    assert!(output.is_dir());
}

#[test]
fn test_invalid_start_url_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config = MirrorConfig {
        start_url: "ftp://example.com/pub/".to_string(),
        output_dir: temp_dir.path().join("downloads"),
        ..MirrorConfig::default()
    };

    assert!(run(&config).is_err());
    assert!(!temp_dir.path().join("downloads").exists());
}

#[test]
fn test_unresolvable_link_fails_the_run() {
    let server = ListingServer::start();
    server.listing("/", &["https://", "later.txt"]);
    server.file("/later.txt", b"never fetched", "text/plain");
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("downloads");

    let result = run(&config_for(&server, "/", output.clone()));

    assert!(result.is_err());
    assert!(!output.join("later.txt").exists());
}

#[test]
fn test_http_transport_reports_status_and_content_type() {
    let server = ListingServer::start();
    server.file("/notes.txt", b"notes", "text/plain; charset=utf-8");
    server.status("/forbidden/", 403);

    let transport = HttpTransport::from_config(&MirrorConfig::default()).unwrap();

    let page = transport
        .get(&Url::parse(&server.url("/notes.txt")).unwrap())
        .unwrap();
    assert_eq!(page.body, b"notes");
    assert!(!page.is_html());
    assert!(page
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("text/plain"));

    let err = transport
        .get(&Url::parse(&server.url("/forbidden/")).unwrap())
        .unwrap_err();
    assert!(err.is_network());
    assert!(err.to_string().contains("403"));
}

#[test]
fn test_mirror_over_http_creates_folder_for_single_listing() {
    let server = ListingServer::start();
    server.listing("/empty/", &[]);
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("a").join("b");

    let transport = HttpTransport::from_config(&MirrorConfig::default()).unwrap();
    let outcome = Mirror::new(transport)
        .fetch(&Url::parse(&server.url("/empty/")).unwrap(), &target)
        .unwrap();

    assert!(target.is_dir());
    assert!(matches!(outcome, NodeOutcome::Directory { created: true, .. }));
}
