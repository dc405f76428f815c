//! 時刻実装（SystemTime 委譲と固定時刻）

use crate::ports::outbound::Clock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// 標準ライブラリの SystemTime を使う Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// 指定時刻を返し続ける Clock（テスト・再現用）。`advance` で進められる。
#[derive(Debug, Default)]
pub struct FixedClock {
    ms: AtomicU64,
}

impl FixedClock {
    pub fn new(ms: u64) -> Self {
        Self { ms: AtomicU64::new(ms) }
    }

    pub fn advance(&self, delta_ms: u64) {
        self.ms.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.ms.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_utc() {
        // 2026-10-19T12:00:00.000Z
        let clock = FixedClock::new(1_792_411_200_000);
        assert_eq!(clock.now_utc().to_rfc3339(), "2026-10-19T12:00:00+00:00");
        clock.advance(1_500);
        assert_eq!(clock.now_ms(), 1_792_411_201_500);
    }

    #[test]
    fn test_std_clock_is_after_2020() {
        assert!(StdClock.now_ms() > 1_577_836_800_000);
    }
}
