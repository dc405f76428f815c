//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, FileKeyValueStore, NoopLog, StdClock, StdEnvResolver, StdFileSystem, StdRandom};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, KeyValueStore, Log, RandomSource};

use crate::adapter::{load_settings, KvHistoryRepository, LoggingHistoryRepository};
use crate::ports::outbound::HistoryRepository;
use crate::usecase::ApologyUseCase;

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    pub use_case: ApologyUseCase,
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
}

/// ログ出力先を解決する。解決できなければ何も出さない。
fn wire_logger(env_resolver: &dyn EnvResolver, fs: &Arc<dyn FileSystem>) -> Arc<dyn Log> {
    env_resolver
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog))
}

/// 配線: 標準アダプタで App を組み立てる
///
/// `home_dir` は CLI の -d/--home-dir。
pub fn wire_apology(home_dir: Option<PathBuf>) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver = StdEnvResolver::new(home_dir);
    let logger = wire_logger(&env_resolver, &fs);
    let dirs = env_resolver.resolve_dirs()?;

    let settings = load_settings(fs.as_ref(), &dirs.settings_file())?;
    let store: Arc<dyn KeyValueStore> =
        Arc::new(FileKeyValueStore::new(Arc::clone(&fs), dirs.store_dir()));
    let history: Arc<dyn HistoryRepository> = Arc::new(LoggingHistoryRepository::new(
        Arc::new(KvHistoryRepository::new(store)),
        Arc::clone(&logger),
    ));
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let rng: Arc<dyn RandomSource> = Arc::new(StdRandom::new());

    Ok(App {
        use_case: ApologyUseCase::new(fs, clock, rng, history, settings),
        logger,
    })
}
