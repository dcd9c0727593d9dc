//! 髒標記追蹤
//!
//! 記錄哪些組件的彙總已過時，供增量重算使用。

use std::collections::HashSet;

/// 髒標記追蹤器
pub struct DirtyTracker {
    dirty_assemblies: HashSet<String>,
}

impl DirtyTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self {
            dirty_assemblies: HashSet::new(),
        }
    }

    /// 標記組件彙總為過時
    pub fn mark_dirty(&mut self, assembly_id: String) {
        self.dirty_assemblies.insert(assembly_id);
    }

    /// 檢查組件彙總是否過時
    pub fn is_dirty(&self, assembly_id: &str) -> bool {
        self.dirty_assemblies.contains(assembly_id)
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_assemblies.clear();
    }

    /// 取出所有髒組件並清空追蹤器（重算迴圈用）
    pub fn drain(&mut self) -> Vec<String> {
        self.dirty_assemblies.drain().collect()
    }

    /// 獲取所有髒組件
    pub fn get_dirty_assemblies(&self) -> Vec<String> {
        self.dirty_assemblies.iter().cloned().collect()
    }
}

impl Default for DirtyTracker {
    fn default() -> Self {
        Self::new()
    }
}
