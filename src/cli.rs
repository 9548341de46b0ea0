use clap::{Args, Parser, Subcommand};

use crate::util::parse_percent;

#[derive(Parser)]
#[command(
    name = "monitor-control-cli",
    version,
    about = "Control monitor brightness and contrast over DDC/CI"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// モニタの一覧と現在の設定を表示
    List(ListArgs),
    /// 指定モニタの輝度とコントラストを表示
    Get(GetArgs),
    /// 輝度(0〜100)を設定
    Brightness(ValueArgs),
    /// コントラスト(0〜100)を設定
    Contrast(ValueArgs),
    /// プリセットで輝度とコントラストをまとめて設定
    Preset(PresetArgs),
    /// 輝度を±deltaで相対調整
    AdjustBrightness(DeltaArgs),
    /// コントラストを±deltaで相対調整
    AdjustContrast(DeltaArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args, Clone, Debug)]
pub struct GetArgs {
    /// モニタ番号(0始まり)。未指定なら環境変数MONITOR、それも無ければ0
    pub monitor: Option<usize>,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args, Clone, Debug)]
pub struct ValueArgs {
    /// 設定するパーセント値(0〜100)
    #[arg(value_parser = parse_percent)]
    pub value: u16,
    /// モニタ番号(0始まり)
    pub monitor: Option<usize>,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args, Clone, Debug)]
pub struct PresetArgs {
    /// プリセット名 (bright, normal, dim, night, gaming, reading, set-30, set-40, set-75)
    pub name: String,
    /// モニタ番号(0始まり)
    pub monitor: Option<usize>,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args, Clone, Debug)]
pub struct DeltaArgs {
    /// 符号付きの変化量(+10, -5 など)。結果は0〜100に収められる
    #[arg(allow_negative_numbers = true)]
    pub delta: i32,
    /// モニタ番号(0始まり)
    pub monitor: Option<usize>,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// モデル名の部分文字列でモニタを絞り込む
    #[arg(long)]
    pub model: Option<String>,
    /// シリアル番号の部分文字列で絞り込む
    #[arg(long)]
    pub serial: Option<String>,
    /// バックエンド名(i2c-dev, winapiなど)で絞り込む
    #[arg(long)]
    pub backend: Option<String>,
}
