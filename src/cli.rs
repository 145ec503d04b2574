use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "ローカル画像ギャラリー", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をアップロード（ファイルまたはフォルダ）
    Upload {
        /// 画像ファイル/フォルダのパス
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// ファイル間の待機を行わない
        #[arg(long)]
        no_delay: bool,
    },

    /// 画像一覧を表示
    List {
        /// 表示名で絞り込み（大文字小文字を区別しない）
        #[arg(short, long)]
        search: Option<String>,
    },

    /// 画像を削除
    Delete {
        /// 画像ID
        #[arg(required = true)]
        id: String,

        /// 確認せずに削除
        #[arg(short, long)]
        yes: bool,
    },

    /// 画像を元のファイルとして書き出す
    Download {
        /// 画像ID
        #[arg(required = true)]
        id: String,

        /// 出力ファイル/ディレクトリ（省略時: カレント/元のファイル名）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// すべての画像を削除
    Clear {
        /// 確認せずに削除
        #[arg(short, long)]
        yes: bool,
    },

    /// 件数と合計サイズを表示
    Stats,

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 保存容量の上限（バイト、0で無制限）
        #[arg(long)]
        set_quota: Option<u64>,

        /// ファイル間の待機時間（ミリ秒）
        #[arg(long)]
        set_delay: Option<u64>,

        /// 保存先ディレクトリ
        #[arg(long)]
        set_storage_dir: Option<PathBuf>,
    },
}

/// バイト数を人が読める形式に
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let b = bytes as f64;
    if b >= MB {
        format!("{:.2} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}
