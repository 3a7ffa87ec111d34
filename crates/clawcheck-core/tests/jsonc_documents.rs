//! Strip → parse → required-path check over realistic OpenClaw documents.

use clawcheck_core::{default_required_paths, find_missing, strip_comments, ConfigFile};
use serde_json::Value;

const STRICT_WITH_COMMENTS: &str = r#"// openclaw.g.json — Gemini via cliproxy
{
  "gateway": {
    "port": 18789, // loopback only
    "bind": "loopback"
  },
  /* Providers are proxied through cliproxy. */
  "models": {
    "providers": {
      "cliproxy": {
        "baseUrl": "http://127.0.0.1:8317/v1",
        "apiKey": "${CLIPROXY_API_KEY}"
      }
    }
  },
  "agents": { "defaults": { "model": { "primary": "cliproxy/gemini-2.5-pro" } } },
  "channels": {
    "whatsapp": { "dmPolicy": "allowlist", "allowFrom": ["${WHATSAPP_NUMBER}"] }
  }
}
"#;

#[test]
fn commented_config_passes_required_paths() {
    let doc: Value = serde_json::from_str(&strip_comments(STRICT_WITH_COMMENTS)).unwrap();
    let paths = default_required_paths();
    assert!(find_missing(&doc, &paths).is_empty());
    assert_eq!(doc["gateway"]["port"], 18789);
}

#[test]
fn url_values_survive_stripping() {
    let doc: Value = serde_json::from_str(&strip_comments(STRICT_WITH_COMMENTS)).unwrap();
    assert_eq!(
        doc["models"]["providers"]["cliproxy"]["baseUrl"],
        "http://127.0.0.1:8317/v1"
    );
}

#[test]
fn config_file_parse_matches_manual_pipeline() {
    let file = ConfigFile::from_text("configs/openclaw.g.json", STRICT_WITH_COMMENTS);
    let manual: Value = serde_json::from_str(&strip_comments(STRICT_WITH_COMMENTS)).unwrap();
    assert_eq!(file.parse().unwrap(), manual);
}

#[test]
fn missing_section_is_named() {
    let text = STRICT_WITH_COMMENTS.replace("\"channels\"", "\"telegram\"");
    let doc: Value = serde_json::from_str(&strip_comments(&text)).unwrap();
    let paths = default_required_paths();
    let missing: Vec<String> = find_missing(&doc, &paths)
        .iter()
        .map(|p| p.to_string())
        .collect();
    assert_eq!(missing, vec!["channels.whatsapp"]);
}

#[test]
fn js_object_syntax_does_not_parse_strictly() {
    let text = "// openclaw.a.json\n{\n  gateway: { port: 18789, },\n}\n";
    let file = ConfigFile::from_text("openclaw.a.json", text);
    assert!(file.parse().is_err());
}
