//! 账户领域模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 账户资料
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// 显示名称
    pub display_name: String,
    /// 邮箱
    pub email: String,
    /// 最后更新时间
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// 创建账户资料
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            updated_at: Utc::now(),
        }
    }
}
