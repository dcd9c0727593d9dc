//! 時鐘抽象
//!
//! 快取的 TTL 判定透過注入的時鐘取得現在時間，測試可用假時鐘控制。

use chrono::{DateTime, Utc};

/// 時鐘
pub trait Clock {
    /// 現在時間
    fn now(&self) -> DateTime<Utc>;
}

/// 系統時鐘
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
