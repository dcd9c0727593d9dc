//! 產品屬性定義快取
//!
//! 固定 TTL 的顯式快取物件：時鐘由外部注入，失效靠明確呼叫，
//! 不依賴模組層級的隱式可變狀態。

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// 產品屬性定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// 定義ID
    pub id: i64,

    /// 屬性名稱
    pub name: String,

    /// 允許的值
    pub allowed_values: Vec<String>,
}

struct CacheEntry {
    definitions: Vec<AttributeDefinition>,
    loaded_at: DateTime<Utc>,
}

/// 屬性定義快取（以公司ID為鍵）
pub struct AttributeDefinitionCache<C: Clock> {
    entries: HashMap<i64, CacheEntry>,
    ttl: Duration,
    clock: C,
}

impl<C: Clock> AttributeDefinitionCache<C> {
    /// 創建新的快取
    pub fn new(ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
        }
    }

    /// 讀取未過期的快取項
    pub fn get(&self, company_id: i64) -> Option<&[AttributeDefinition]> {
        let entry = self.entries.get(&company_id)?;

        if self.clock.now() - entry.loaded_at >= self.ttl {
            return None;
        }

        Some(&entry.definitions)
    }

    /// 寫入快取項（載入時間取自注入的時鐘）
    pub fn put(&mut self, company_id: i64, definitions: Vec<AttributeDefinition>) {
        self.entries.insert(
            company_id,
            CacheEntry {
                definitions,
                loaded_at: self.clock.now(),
            },
        );
    }

    /// 失效單一公司的快取項
    pub fn invalidate(&mut self, company_id: i64) {
        self.entries.remove(&company_id);
    }

    /// 失效全部快取項
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// 清除已過期的快取項，回傳清除數量
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let before = self.entries.len();

        self.entries.retain(|_, entry| now - entry.loaded_at < ttl);

        before - self.entries.len()
    }

    /// 目前快取項數量（含已過期未清除者）
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 檢查快取是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
