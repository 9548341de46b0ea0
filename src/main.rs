use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

use monitor_control_cli::{
    handle_adjust, handle_get, handle_list, handle_preset, handle_set, load_env_defaults, Cli,
    Commands, Feature,
};

fn main() -> Result<()> {
    // .envでデフォルトのモニタ番号やフィルタを読み込み
    dotenv().ok();

    let cli = Cli::parse();
    let env_defaults = load_env_defaults()?;

    match cli.command {
        Commands::List(args) => handle_list(&args, &env_defaults),
        Commands::Get(args) => handle_get(&args, &env_defaults),
        Commands::Brightness(args) => handle_set(&args, &env_defaults, Feature::Brightness),
        Commands::Contrast(args) => handle_set(&args, &env_defaults, Feature::Contrast),
        Commands::Preset(args) => handle_preset(&args, &env_defaults),
        Commands::AdjustBrightness(args) => {
            handle_adjust(&args, &env_defaults, Feature::Brightness)
        }
        Commands::AdjustContrast(args) => handle_adjust(&args, &env_defaults, Feature::Contrast),
    }
}
