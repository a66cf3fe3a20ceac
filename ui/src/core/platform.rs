//! Platform detection and timer helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

pub fn platform_string() -> String {
    match Platform::current() {
        Platform::Web => "web".to_string(),
        Platform::Desktop => std::env::consts::OS.to_string(),
    }
}

/// Suspend the current task for `ms` milliseconds.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}

/// Origin the web build is served from (fixture files live at its root).
#[cfg(target_arch = "wasm32")]
pub fn static_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_tests_report_desktop() {
        assert_eq!(Platform::current(), Platform::Desktop);
        assert!(!platform_string().is_empty());
    }

    #[tokio::test]
    async fn sleep_resolves() {
        sleep_ms(1).await;
    }
}
