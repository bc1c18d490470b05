use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adoul-cms")]
#[command(about = "生地・施工実績カタログ管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ストレージファイル（デフォルト: データディレクトリ/adoul-cms/storage.json）
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 生地一覧を表示
    Fabrics,

    /// 施工実績一覧を表示
    Works,

    /// 依頼フォームの生地選択肢を表示
    Options,

    /// 生地を追加（管理パスワードが必要）
    AddFabric {
        /// 生地名
        #[arg(long, default_value = "")]
        name: String,

        /// 生地コード
        #[arg(long, default_value = "")]
        code: String,

        /// 種類
        #[arg(long = "type", default_value = "")]
        fabric_type: String,

        /// 備考
        #[arg(long, default_value = "")]
        notes: String,

        /// 画像ファイル（jpg/png/gif/webp/svg）
        #[arg(long)]
        image: Option<PathBuf>,

        /// 管理パスワード（省略時は対話入力）
        #[arg(long)]
        password: Option<String>,
    },

    /// 施工実績を追加（管理パスワードが必要）
    AddWork {
        /// タイトル
        #[arg(long, default_value = "")]
        title: String,

        /// 説明
        #[arg(long, default_value = "")]
        description: String,

        /// 画像ファイル
        #[arg(long)]
        image: Option<PathBuf>,

        /// 管理パスワード（省略時は対話入力）
        #[arg(long)]
        password: Option<String>,
    },

    /// 仕立て依頼の確認メッセージを表示（保存しない）
    Quote {
        /// 仕立ての種類
        #[arg(long, default_value = "")]
        item: String,

        /// 生地名
        #[arg(long, default_value = "")]
        fabric: String,

        /// 寸法
        #[arg(long, default_value = "")]
        dimensions: String,

        /// 都市
        #[arg(long, default_value = "")]
        city: String,

        /// 電話番号
        #[arg(long, default_value = "")]
        phone: String,
    },

    /// 設定を表示・変更
    Config {
        /// 管理パスワードを設定
        #[arg(long)]
        set_password: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
