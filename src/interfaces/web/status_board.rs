//! アップロード進捗のステータスボード
//!
//! 編成の各遷移で更新されるユーザー向けステータス文字列を1件だけ保持する。
//! 終端メッセージは成功5秒・失敗10秒で自動的に消える。

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::application::use_cases::UploadPhase;
use crate::application::use_cases::add_artwork::ProgressObserver;

pub const SUCCESS_TTL: Duration = Duration::from_secs(5);
pub const ERROR_TTL: Duration = Duration::from_secs(10);

#[derive(Clone, Default)]
pub struct UploadStatusBoard {
    inner: Arc<Mutex<Slot>>,
}

#[derive(Default)]
struct Slot {
    message: Option<String>,
    /// 自動クリアが後続メッセージを消さないための世代番号
    generation: u64,
}

impl UploadStatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在のステータス文字列
    pub fn current(&self) -> Option<String> {
        self.inner.lock().unwrap().message.clone()
    }

    /// 次の更新まで表示され続けるステータスを設定する
    pub fn set(&self, message: impl Into<String>) {
        let mut slot = self.inner.lock().unwrap();
        slot.message = Some(message.into());
        slot.generation += 1;
    }

    /// 一定時間後に自動で消えるステータスを設定する
    pub fn set_transient(&self, message: impl Into<String>, ttl: Duration) {
        let generation = {
            let mut slot = self.inner.lock().unwrap();
            slot.message = Some(message.into());
            slot.generation += 1;
            slot.generation
        };

        let inner = self.inner.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = inner.lock().unwrap();
            if slot.generation == generation {
                slot.message = None;
            }
        });
    }

    /// 失敗ステータス。常に "Error:" で始まる
    pub fn set_error(&self, detail: impl std::fmt::Display) {
        self.set_transient(format!("Error: {detail}"), ERROR_TTL);
    }
}

impl ProgressObserver for UploadStatusBoard {
    fn phase_changed(&self, phase: UploadPhase) {
        match phase {
            UploadPhase::Done => {
                if let Some(message) = phase.status_message() {
                    self.set_transient(message, SUCCESS_TTL);
                }
            }
            // Failed のメッセージはエラー内容と共にハンドラ側で設定する
            UploadPhase::Failed => {}
            _ => {
                if let Some(message) = phase.status_message() {
                    self.set(message);
                }
            }
        }
    }
}
