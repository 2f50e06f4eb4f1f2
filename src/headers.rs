use crate::config::ApnsNotification;

/// Builds the ordered header set for one notification request.
///
/// APNs does not care about header order, but a fixed order keeps request
/// assembly deterministic and easy to assert on. Apple documents the
/// authorization scheme in lowercase, so `bearer` it is.
pub fn build_headers(notification: &ApnsNotification, bearer_token: &str) -> Vec<(String, String)> {
    let mut headers = vec![
        ("authorization".to_string(), format!("bearer {}", bearer_token)),
        ("apns-topic".to_string(), notification.bundle_id.clone()),
        ("apns-push-type".to_string(), notification.push_type.as_str().to_string()),
        ("content-type".to_string(), "application/json".to_string()),
        ("apns-priority".to_string(), notification.priority.to_string()),
    ];

    if notification.expiration > 0 {
        headers.push((
            "apns-expiration".to_string(),
            notification.expiration.to_string(),
        ));
    }

    if let Some(collapse_id) = &notification.collapse_id {
        if !collapse_id.is_empty() {
            headers.push(("apns-collapse-id".to_string(), collapse_id.clone()));
        }
    }

    for (name, value) in &notification.custom_headers {
        headers.push((name.clone(), value.clone()));
    }

    headers
}
