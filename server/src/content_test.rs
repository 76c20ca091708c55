use std::path::PathBuf;

use super::*;

fn contentful() -> ContentfulConfig {
    ContentfulConfig {
        space_id: "space1".into(),
        access_token: "token1".into(),
        environment: "master".into(),
        base_url: "https://cdn.example.test".into(),
    }
}

fn config_with(content_path: Option<PathBuf>, contentful: Option<ContentfulConfig>) -> SiteConfig {
    SiteConfig {
        port: 3000,
        content_path,
        contentful,
        content_timeout_secs: 1,
        assets_dir: PathBuf::from("assets"),
    }
}

fn temp_yaml(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("evolve-site-{}-{name}.yaml", std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

// =============================================================
// Entries endpoint
// =============================================================

#[test]
fn entries_url_targets_site_content_type() {
    assert_eq!(
        entries_url(&contentful()),
        "https://cdn.example.test/spaces/space1/environments/master/entries?content_type=siteContent&limit=1"
    );
}

#[test]
fn parse_entries_takes_first_item_fields() {
    let body = r#"{"total":2,"items":[{"sys":{"id":"a"},"fields":{"hero_title":"First"}},{"fields":{"hero_title":"Second"}}]}"#;
    let content = parse_entries(body).unwrap();
    assert_eq!(content.hero_title, "First");
    assert_eq!(content.brand, SiteContent::default().brand);
}

#[test]
fn parse_entries_without_items_is_empty_error() {
    assert!(matches!(parse_entries(r#"{"items":[]}"#), Err(ContentError::Empty)));
    assert!(matches!(parse_entries("{}"), Err(ContentError::Empty)));
}

#[test]
fn parse_entries_rejects_malformed_json() {
    assert!(matches!(parse_entries("not json"), Err(ContentError::Parse(_))));
}

// =============================================================
// YAML file
// =============================================================

#[tokio::test]
async fn load_file_reads_partial_yaml() {
    let path = temp_yaml("partial", "brand:\n  phone: 555-0100\nhero_title: Calm in the storm\n");
    let content = load_file(&path).await.unwrap();
    assert_eq!(content.brand.phone, "555-0100");
    assert_eq!(content.hero_title, "Calm in the storm");
    assert_eq!(content.talks, SiteContent::default().talks);
    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn load_file_reports_missing_file() {
    let err = load_file(Path::new("/nonexistent/evolve-site.yaml")).await.unwrap_err();
    assert!(matches!(err, ContentError::Read { .. }));
}

#[tokio::test]
async fn load_file_reports_bad_yaml() {
    let path = temp_yaml("bad", "programs: [unterminated\n");
    let err = load_file(&path).await.unwrap_err();
    assert!(matches!(err, ContentError::Yaml { .. }));
    std::fs::remove_file(path).unwrap();
}

// =============================================================
// Startup loading
// =============================================================

#[tokio::test]
async fn builtin_content_when_no_provider_configured() {
    let content = load_site_content(&config_with(None, None)).await;
    assert_eq!(content.programs, SiteContent::default().programs);
    assert!(content.copyright_year.is_some());
}

#[tokio::test]
async fn file_provider_wins_over_contentful() {
    let path = temp_yaml("wins", "hero_title: From file\n");
    let (content, origin) = fetch(&config_with(Some(path.clone()), Some(contentful()))).await.unwrap();
    assert_eq!(content.hero_title, "From file");
    assert_eq!(origin, ContentOrigin::File(path.clone()));
    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn provider_failure_falls_back_to_builtin() {
    let config = config_with(Some(PathBuf::from("/nonexistent/evolve-site.yaml")), None);
    let content = load_site_content(&config).await;
    assert_eq!(content.hero_title, SiteContent::default().hero_title);
    assert!(content.copyright_year.is_some());
}

#[test]
fn content_error_messages() {
    assert_eq!(ContentError::Status { status: 401 }.to_string(), "content provider returned status 401");
    assert_eq!(ContentError::Empty.to_string(), "content provider returned no siteContent entry");
}
