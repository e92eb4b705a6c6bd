use super::*;

#[test]
fn bearer_formats_token() {
    assert_eq!(bearer("xyz"), "Bearer xyz");
}

#[test]
fn headers_without_token_carry_only_content_type() {
    let headers = auth_headers(None);
    assert_eq!(headers, vec![("Content-Type", "application/json".to_owned())]);
}

#[test]
fn headers_with_token_add_authorization() {
    let headers = auth_headers(Some("xyz"));
    assert_eq!(
        headers,
        vec![
            ("Content-Type", "application/json".to_owned()),
            ("Authorization", "Bearer xyz".to_owned()),
        ]
    );
}

#[test]
fn token_is_passed_through_verbatim() {
    // Opaque JWTs must not be trimmed or re-encoded.
    let token = "  a.b.c==  ";
    assert_eq!(bearer(token), "Bearer   a.b.c==  ");
}
