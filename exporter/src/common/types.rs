//! Pingdom API型定義
//!
//! `GET /checks?include_tags=true` のレスポンス形式

use serde::{Deserialize, Deserializer, Serialize};

/// `null` をデフォルト値として読む
///
/// 欠落フィールドはコンテナの `#[serde(default)]` で埋める。
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 監視対象チェック
///
/// Pingdomに登録された1件のチェック。1サイクルの間は読み取り専用として扱う。
/// 欠落または `null` のフィールドはゼロ値になり、1件の不完全なチェックが
/// 一覧全体のデコードを失敗させることはない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Check {
    /// チェックID（時間を通じて不変）
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// チェック名
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// 監視対象ホスト名
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    /// Pingdom側のチェック間隔（秒）
    #[serde(deserialize_with = "null_as_default")]
    pub resolution: i64,
    /// 一時停止フラグ（上流の値は信頼できないため`status`で補正する）
    #[serde(deserialize_with = "null_as_default")]
    pub paused: bool,
    /// 現在のステータス文字列
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// タグ一覧（順序は上流のまま）
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<CheckTag>,
    /// 最終テストの応答時間（ミリ秒）
    #[serde(rename = "lastresponsetime", deserialize_with = "null_as_default")]
    pub last_response_time: i64,
}

impl Check {
    /// ステータスを解釈して返す
    pub fn check_status(&self) -> CheckStatus {
        CheckStatus::from(self.status.as_str())
    }
}

/// チェックに付与されたタグ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckTag {
    /// タグ名
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// タグ種別（`a`: 自動, `u`: ユーザー）
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// チェック一覧レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecksResponse {
    /// チェック一覧
    #[serde(default, deserialize_with = "null_as_default")]
    pub checks: Vec<Check>,
}

/// Pingdom APIのエラーレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// エラー詳細
    pub error: ApiErrorDetail,
}

/// Pingdom APIのエラー詳細
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// ステータス説明
    #[serde(default, rename = "statusdesc")]
    pub status_desc: String,
    /// エラーメッセージ
    #[serde(default, rename = "errormessage")]
    pub error_message: String,
}

/// チェックステータス
///
/// 未知の文字列も受け付け、`Other`として保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// 不明
    Unknown,
    /// 一時停止中
    Paused,
    /// 稼働中
    Up,
    /// ダウン（未確認）
    UnconfirmedDown,
    /// ダウン
    Down,
    /// 上記以外
    Other(String),
}

impl CheckStatus {
    /// `pingdom_check_status` に出力する値
    pub fn status_value(&self) -> f64 {
        match self {
            CheckStatus::Unknown => -2.0,
            CheckStatus::Paused => -1.0,
            CheckStatus::Up => 0.0,
            CheckStatus::UnconfirmedDown => 1.0,
            CheckStatus::Down => 2.0,
            CheckStatus::Other(_) => 100.0,
        }
    }

    /// `pingdom_check_state` に出力する値（upのみ1）
    pub fn state_value(&self) -> f64 {
        if *self == CheckStatus::Up {
            1.0
        } else {
            0.0
        }
    }
}

impl From<&str> for CheckStatus {
    fn from(s: &str) -> Self {
        match s {
            "unknown" => CheckStatus::Unknown,
            "paused" => CheckStatus::Paused,
            "up" => CheckStatus::Up,
            "unconfirmed_down" => CheckStatus::UnconfirmedDown,
            "down" => CheckStatus::Down,
            other => CheckStatus::Other(other.to_string()),
        }
    }
}
