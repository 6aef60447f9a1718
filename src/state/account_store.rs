//! 账户资料存储

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::Account;

/// 账户资料存储（单账户）
#[derive(Clone)]
pub struct AccountStore {
    account: Arc<RwLock<Account>>,
}

impl AccountStore {
    /// 以初始资料创建存储
    pub fn new(account: Account) -> Self {
        Self {
            account: Arc::new(RwLock::new(account)),
        }
    }

    /// 读取当前资料
    pub async fn get(&self) -> Account {
        self.account.read().await.clone()
    }

    /// 更新资料并刷新时间戳
    pub async fn update(&self, display_name: String, email: String) -> Account {
        let mut account = self.account.write().await;
        account.display_name = display_name;
        account.email = email;
        account.updated_at = Utc::now();
        account.clone()
    }
}
