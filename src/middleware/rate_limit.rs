use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
struct Window {
    opened_at: Instant,
    served: u32,
}

/// Fixed-window request limiter shared across the API routes.
#[derive(Clone, Debug)]
pub struct RequestLimiter {
    max_requests: u32,
    window: Duration,
    state: Arc<Mutex<Window>>,
}

impl RequestLimiter {
    pub fn per_second(max_requests: u32) -> Self {
        Self::with_window(max_requests, Duration::from_secs(1))
    }

    fn with_window(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests: max_requests.max(1),
            window,
            state: Arc::new(Mutex::new(Window {
                opened_at: Instant::now(),
                served: 0,
            })),
        }
    }

    fn try_acquire(&self) -> bool {
        let mut window = self.state.lock().expect("rate limiter mutex poisoned");
        if window.opened_at.elapsed() >= self.window {
            window.opened_at = Instant::now();
            window.served = 0;
        }
        if window.served < self.max_requests {
            window.served += 1;
            true
        } else {
            false
        }
    }
}

pub async fn limit_middleware(
    State(limiter): State<RequestLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !limiter.try_acquire() {
        return (StatusCode::TOO_MANY_REQUESTS, "rate_limit_exceeded").into_response();
    }
    next.run(req).await
}
