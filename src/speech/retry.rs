use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

pub(crate) const RATE_LIMIT_MAX_RETRIES: usize = 5;
pub(crate) const RATE_LIMIT_BASE_DELAY: Duration = Duration::from_secs(2);
pub(crate) const RATE_LIMIT_MAX_DELAY: Duration = Duration::from_secs(60);

pub(crate) fn is_rate_limited(status: StatusCode, body: &[u8]) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }
    if matches!(status.as_u16(), 503 | 529) {
        return true;
    }
    // Audio bodies are binary; only short error pages are worth sniffing.
    let Ok(text) = std::str::from_utf8(body) else {
        return false;
    };
    let lower = text.to_lowercase();
    lower.contains("rate limit")
        || lower.contains("too many requests")
        || lower.contains("unusual traffic")
        || lower.contains("quota")
}

pub(crate) fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get("retry-after")?.to_str().ok()?.trim();
    value.parse::<u64>().ok().map(Duration::from_secs)
}

pub(crate) async fn wait_with_backoff(
    attempt: usize,
    delay: Duration,
    retry_after: Option<Duration>,
) -> Duration {
    let wait = match retry_after {
        Some(retry_after) if retry_after > delay => retry_after,
        _ => delay,
    };
    warn!(
        "speech service rate limited; retrying in {:.1}s (attempt {}/{})",
        wait.as_secs_f32(),
        attempt,
        RATE_LIMIT_MAX_RETRIES
    );
    sleep(wait).await;
    next_delay(delay)
}

pub(crate) fn next_delay(current: Duration) -> Duration {
    let next = Duration::from_secs(
        current
            .as_secs()
            .saturating_mul(2)
            .max(RATE_LIMIT_BASE_DELAY.as_secs()),
    );
    next.min(RATE_LIMIT_MAX_DELAY)
}
