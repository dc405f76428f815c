//! apology のユースケース（generate / repeat / history）
//!
//! CLI からはこの型だけを呼ぶ。時刻・乱数・保存先はすべて注入されたポート経由。

use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, RandomSource};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{
    GenerateArgs, GenerationRequest, HistoryEntry, HistoryList, OutputTarget, RemoveTarget,
    Settings, TextStats,
};
use crate::ports::outbound::HistoryRepository;
use crate::usecase::generate::{generate, repeat};
use crate::usecase::history::HistoryStore;

/// generate の結果
#[derive(Debug)]
pub struct GenerateOutcome {
    pub text: String,
    pub stats: TextStats,
    /// ファイルに保存した場合のパス
    pub saved_to: Option<PathBuf>,
    /// ファイル保存に失敗した場合のエラー（生成結果と履歴は有効）
    pub save_error: Option<Error>,
    /// 履歴に追加したエントリ（記録しない指定なら None）
    pub recorded: Option<HistoryEntry>,
    /// 履歴の保存に失敗した場合のエラー（生成結果は有効）
    pub history_error: Option<Error>,
}

pub struct ApologyUseCase {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    rng: Arc<dyn RandomSource>,
    history: Arc<dyn HistoryRepository>,
    settings: Settings,
}

impl ApologyUseCase {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        rng: Arc<dyn RandomSource>,
        history: Arc<dyn HistoryRepository>,
        settings: Settings,
    ) -> Self {
        Self {
            fs,
            clock,
            rng,
            history,
            settings,
        }
    }

    /// CLI 引数に設定の既定値を補ってリクエストを作る
    fn build_request(&self, args: &GenerateArgs) -> Result<GenerationRequest, Error> {
        let count = args.count.unwrap_or(self.settings.default_count);
        let style = args
            .style
            .as_deref()
            .unwrap_or(self.settings.default_style.name());
        GenerationRequest::new(
            &args.name,
            &args.message,
            count,
            style,
            args.emojis.unwrap_or(self.settings.add_emojis),
            args.timestamp.unwrap_or(self.settings.add_timestamp),
        )
    }

    /// 謝罪文を生成し、必要ならファイル保存と履歴記録を行う。
    ///
    /// 入力が不正なら何もせずエラー。履歴とファイルの保存失敗は
    /// `history_error` / `save_error` に入れ、生成結果は返す。
    pub fn generate(&self, args: &GenerateArgs) -> Result<GenerateOutcome, Error> {
        let request = self.build_request(args)?;
        let text = generate(&request, self.clock.as_ref(), self.rng.as_ref());
        let stats = TextStats::of(&text);

        let (recorded, history_error) = if args.record {
            let mut store = HistoryStore::open(Arc::clone(&self.history));
            match store.record(&request, self.clock.now_utc()) {
                Ok(entry) => (Some(entry), None),
                Err(e) => (store.list().first().cloned(), Some(e)),
            }
        } else {
            (None, None)
        };

        let target = match &args.output {
            OutputTarget::Stdout => None,
            OutputTarget::DefaultFile => Some(self.default_file_name()),
            OutputTarget::File(path) => Some(path.clone()),
        };
        let (saved_to, save_error) = match target {
            Some(path) => match self.save_output(&text, &path) {
                Ok(saved) => (Some(saved), None),
                Err(e) => (None, Some(e)),
            },
            None => (None, None),
        };

        Ok(GenerateOutcome {
            text,
            stats,
            saved_to,
            save_error,
            recorded,
            history_error,
        })
    }

    /// ダウンロード相当の既定ファイル名（UTC の日付）
    pub fn default_file_name(&self) -> PathBuf {
        PathBuf::from(format!(
            "apology-{}.txt",
            self.clock.now_utc().format("%Y-%m-%d")
        ))
    }

    pub fn save_output(&self, text: &str, path: &Path) -> Result<PathBuf, Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write(path, text)?;
        Ok(path.to_path_buf())
    }

    pub fn repeat(&self, name: &str, count: i64) -> String {
        repeat(name, count)
    }

    pub fn list_history(&self) -> HistoryList {
        HistoryStore::open(Arc::clone(&self.history)).list().clone()
    }

    /// 履歴のエントリからもう一度生成する（履歴には記録しない）
    pub fn replay(
        &self,
        id: u64,
        emojis: Option<bool>,
        timestamp: Option<bool>,
    ) -> Result<String, Error> {
        let store = HistoryStore::open(Arc::clone(&self.history));
        let entry = store
            .list()
            .find(id)
            .ok_or_else(|| Error::validation(format!("no history entry with id {}", id)))?;
        let request = entry.to_request(
            emojis.unwrap_or(self.settings.add_emojis),
            timestamp.unwrap_or(self.settings.add_timestamp),
        )?;
        Ok(generate(&request, self.clock.as_ref(), self.rng.as_ref()))
    }

    pub fn remove_history(&self, target: &RemoveTarget) -> Result<HistoryList, Error> {
        let mut store = HistoryStore::open(Arc::clone(&self.history));
        match target {
            RemoveTarget::Id(id) => store.remove_by_id(*id),
            RemoveTarget::Timestamp(ts) => store.remove(ts),
        }
    }
}
