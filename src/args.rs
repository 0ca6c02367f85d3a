// src/args.rs
use clap::{ArgAction, Parser};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "prime_range",
    version,
    about = "指定範囲の素数を数えるツール",
    long_about = "開始値と終了値を対話的に入力し、範囲内の素数の個数と最後の3つの素数を表示します。"
)]
pub struct Args {
    /// ログを詳細に出力 (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// ログ出力を抑制
    #[arg(short, long)]
    pub quiet: bool,

    /// 位置引数は受け付けるが使用しない
    #[arg(hide = true, num_args = 0..)]
    pub ignored: Vec<String>,
}

impl Args {
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
