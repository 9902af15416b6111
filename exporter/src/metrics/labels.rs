//! チェック単位メトリクスのラベルセット

/// `pingdom_check_status` / `pingdom_check_response_time` のラベル名（順序固定）
pub const CHECK_LABEL_NAMES: [&str; 6] = ["id", "name", "hostname", "resolution", "paused", "tags"];

/// `pingdom_check_state` のラベル名
pub const STATE_LABEL_NAMES: [&str; 1] = ["hostname"];

/// 公開されるシリーズの識別子となるラベルセット
///
/// 6フィールドすべてが一致する場合のみ等しい。いずれかが変われば別シリーズとして扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricLabels {
    /// チェックID（10進文字列）
    pub id: String,
    /// チェック名
    pub name: String,
    /// ホスト名
    pub hostname: String,
    /// チェック間隔（10進文字列）
    pub resolution: String,
    /// `"true"` / `"false"`
    pub paused: String,
    /// カンマ区切りのタグ名
    pub tags: String,
}

impl MetricLabels {
    /// [`CHECK_LABEL_NAMES`] と同じ順序のラベル値
    pub fn values(&self) -> [&str; 6] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.hostname.as_str(),
            self.resolution.as_str(),
            self.paused.as_str(),
            self.tags.as_str(),
        ]
    }
}
