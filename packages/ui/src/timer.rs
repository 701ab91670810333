use std::time::Duration;

use credentials::Timer;

/// Browser timers on WASM, tokio everywhere else.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlatformTimer;

impl Timer for PlatformTimer {
    async fn sleep(&self, duration: Duration) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}
