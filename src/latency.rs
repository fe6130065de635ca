use std::time::Duration;

/// Delay applied before a reply is handed back, to mimic a remote assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency(Duration);

impl Latency {
    pub const DEFAULT_MILLIS: u64 = 1000;

    pub const fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns immediately for a zero latency.
    pub async fn wait(&self) {
        if self.is_none() {
            return;
        }
        tokio::time::sleep(self.0).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_configured_duration() {
        let start = tokio::time::Instant::now();
        Latency::from_millis(250).wait().await;
        assert_eq!(Latency::from_millis(250).duration(), Duration::from_millis(250));
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn none_does_not_advance_time() {
        let start = tokio::time::Instant::now();
        Latency::none().wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
