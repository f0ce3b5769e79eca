//! Token codec properties: total decoding over malformed input, claim
//! extraction and role filtering. The codec must never fail the caller;
//! every bad input degrades to the anonymous default.

use base64::Engine;
use serde_json::json;
use studylance::token::{decode, Claims};

fn credential_for(claims: serde_json::Value) -> String {
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("hdr.{payload}.sig")
}

#[test]
fn malformed_inputs_decode_to_defaults() {
    let cases: [Option<&str>; 7] = [
        None,
        Some(""),
        Some("single-segment"),
        Some("header."),
        Some("header..signature"),
        Some("header.%%%not-base64%%%.signature"),
        Some("header.!.signature"),
    ];
    for raw in cases {
        assert_eq!(decode(raw), Claims::default(), "input {raw:?}");
    }
}

#[test]
fn valid_base64_of_non_json_decodes_to_defaults() {
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("definitely not json");
    let raw = format!("hdr.{payload}.sig");
    assert_eq!(decode(Some(&raw)), Claims::default());
}

#[test]
fn valid_claims_extract_subject_and_roles() {
    let raw = credential_for(json!({"sub": "alice", "roles": ["ROLE_ADMIN", "ROLE_USER"]}));
    let claims = decode(Some(&raw));
    assert_eq!(claims.subject, "alice");
    assert_eq!(claims.roles, vec!["ROLE_ADMIN", "ROLE_USER"]);
    assert!(claims.is_admin());
}

#[test]
fn roles_are_filtered_and_deduped() {
    let raw = credential_for(json!({
        "sub": "bob",
        "roles": ["ROLE_USER", "", "ROLE_USER", null, 5, "ROLE_ADMIN"]
    }));
    let claims = decode(Some(&raw));
    assert_eq!(claims.roles, vec!["ROLE_USER", "ROLE_ADMIN"]);
}

#[test]
fn non_string_subject_reads_as_empty() {
    let raw = credential_for(json!({"sub": 42, "roles": ["ROLE_USER"]}));
    let claims = decode(Some(&raw));
    assert_eq!(claims.subject, "");
    assert_eq!(claims.roles, vec!["ROLE_USER"]);
}

#[test]
fn missing_claim_fields_default() {
    let raw = credential_for(json!({"exp": 1234567890}));
    assert_eq!(decode(Some(&raw)), Claims::default());
}

#[test]
fn admin_flag_requires_the_admin_tag() {
    let admin = decode(Some(&credential_for(json!({"sub": "a", "roles": ["ROLE_ADMIN"]}))));
    assert!(admin.is_admin());

    let user = decode(Some(&credential_for(json!({"sub": "a", "roles": ["ROLE_USER"]}))));
    assert!(!user.is_admin());
}

#[test]
fn unpadded_url_safe_segment_decodes() {
    // Payload length chosen so the bare segment is not a multiple of four;
    // the codec must restore the padding itself.
    let claims = json!({"sub": "al", "roles": []});
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
    assert_ne!(payload.len() % 4, 0, "test payload should exercise the padding path");
    let decoded = decode(Some(&format!("h.{payload}.s")));
    assert_eq!(decoded.subject, "al");
}

#[test]
fn standard_alphabet_segment_also_decodes() {
    // Issuers using padded standard base64 pass through the translation
    // unchanged and must decode identically.
    let claims = json!({"sub": "alice", "roles": ["ROLE_USER"]});
    let payload = base64::engine::general_purpose::STANDARD.encode(claims.to_string());
    let decoded = decode(Some(&format!("h.{payload}.s")));
    assert_eq!(decoded.subject, "alice");
}
