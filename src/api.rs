use gloo::console;
use gloo_net::http::Request;
use serde_json::Value;

use crate::error::FetchError;
use crate::task::Task;

/// One `GET` for the task at `url`. No retries, no timeout.
pub async fn fetch_task(url: &str) -> Result<Task, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    // Error bodies are never decoded, so don't read them.
    let body = if resp.ok() {
        resp.text().await.map_err(|e| FetchError::Body(e.to_string()))?
    } else {
        String::new()
    };

    let task = settle(resp.ok(), resp.status(), resp.status_text(), &body)?;
    console::log!(format!("loaded {url}: {}", payload_line(&body)));
    Ok(task)
}

/// Turns a finished response into a task or an error.
pub fn settle(ok: bool, code: u16, text: String, body: &str) -> Result<Task, FetchError> {
    if !ok {
        return Err(FetchError::Status { code, text });
    }
    decode_task(body)
}

pub fn decode_task(body: &str) -> Result<Task, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// The whole payload as compact JSON, including fields `Task` does not keep.
fn payload_line(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(v) => v.to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str =
        r#"{"id":"t1","name":"demo","state":"RUNNING","resources":{"cpu_cores":4,"ram_gb":16}}"#;

    #[test]
    fn decodes_task_body() {
        let task = decode_task(DEMO).unwrap();
        assert_eq!(task.name.as_deref(), Some("demo"));
        assert_eq!(task.resources.and_then(|r| r.ram_gb), Some(16.0));
    }

    #[test]
    fn html_body_is_a_decode_error() {
        let err = decode_task("<!doctype html><html></html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn non_object_is_a_decode_error() {
        assert!(matches!(decode_task("[1, 2]"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn ok_response_is_decoded() {
        let task = settle(true, 200, "OK".into(), DEMO).unwrap();
        assert_eq!(task.id.as_deref(), Some("t1"));
    }

    #[test]
    fn error_status_is_not_decoded() {
        let err = settle(false, 404, "Not Found".into(), DEMO).unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                code: 404,
                text: "Not Found".into()
            }
        );
    }

    #[test]
    fn ok_response_with_bad_body_fails() {
        let err = settle(true, 200, "OK".into(), "").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn payload_line_keeps_unknown_fields() {
        let line = payload_line(
            r#"{"id":"t1","executors":[{"image":"alpine"}],"logs":[{"start_time":"x"}]}"#,
        );
        assert!(line.contains(r#""executors":[{"image":"alpine"}]"#));
        assert!(line.contains(r#""logs""#));
    }
}
