//! 統合テスト共通ユーティリティ

#![allow(dead_code)]

use async_trait::async_trait;
use pingdom_exporter::common::error::FetchError;
use pingdom_exporter::common::types::{Check, CheckTag};
use pingdom_exporter::pingdom::CheckFetcher;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

/// 結果を順番に返すフェッチャー（尽きたら空一覧）
#[derive(Clone, Default)]
pub struct ScriptedFetcher {
    results: Arc<Mutex<VecDeque<Result<Vec<Check>, FetchError>>>>,
}

impl ScriptedFetcher {
    pub fn push_ok(&self, checks: Vec<Check>) {
        self.results.lock().unwrap().push_back(Ok(checks));
    }

    pub fn push_err(&self, err: FetchError) {
        self.results.lock().unwrap().push_back(Err(err));
    }
}

#[async_trait]
impl CheckFetcher for ScriptedFetcher {
    async fn fetch(&self) -> Result<Vec<Check>, FetchError> {
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// テスト用チェックを作成
pub fn check(id: i64, name: &str, hostname: &str, status: &str, tags: &[&str]) -> Check {
    Check {
        id,
        name: name.to_string(),
        hostname: hostname.to_string(),
        resolution: 60,
        paused: false,
        status: status.to_string(),
        tags: tags
            .iter()
            .map(|name| CheckTag {
                name: name.to_string(),
                kind: "u".to_string(),
            })
            .collect(),
        last_response_time: 0,
    }
}

/// エクスポート結果の1サンプル
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: String,
    pub labels: BTreeMap<String, String>,
    pub value: f64,
}

/// テキスト形式をサンプル一覧へ変換（テストで使う範囲のエスケープのみ対応）
pub fn parse_exposition(text: &str) -> Vec<Sample> {
    text.lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Sample {
    let (series, value) = line.rsplit_once(' ').expect("sample line has a value");
    let value = value.parse().expect("sample value is a float");

    let Some((name, rest)) = series.split_once('{') else {
        return Sample {
            name: series.to_string(),
            labels: BTreeMap::new(),
            value,
        };
    };

    let body = rest.strip_suffix('}').expect("label set is closed");
    let mut labels = BTreeMap::new();
    let mut remaining = body;
    while !remaining.is_empty() {
        let (key, after_key) = remaining.split_once("=\"").expect("label has a value");
        let end = after_key.find('"').expect("label value is closed");
        labels.insert(key.to_string(), after_key[..end].to_string());
        remaining = after_key[end + 1..].trim_start_matches(',');
    }

    Sample {
        name: name.to_string(),
        labels,
        value,
    }
}

/// 指定メトリクスのサンプルのみ抽出
pub fn samples<'a>(all: &'a [Sample], name: &str) -> Vec<&'a Sample> {
    all.iter().filter(|s| s.name == name).collect()
}
