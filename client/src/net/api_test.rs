use super::*;

#[test]
fn endpoints_point_at_api_routes() {
    assert_eq!(GENERATE_ENDPOINT, "/api/generate");
    assert_eq!(WEBSITES_ENDPOINT, "/api/websites");
}

#[test]
fn request_failed_message_prefers_server_error() {
    let msg = request_failed_message("generation", 502, Some("upstream timed out".to_owned()));
    assert_eq!(msg, "generation failed: upstream timed out");
}

#[test]
fn request_failed_message_falls_back_to_status() {
    assert_eq!(request_failed_message("generation", 500, None), "generation failed: 500");
    assert_eq!(
        request_failed_message("website list", 503, Some("   ".to_owned())),
        "website list failed: 503"
    );
}
