use anyhow::{anyhow, Context, Result};

use crate::cli::{DeltaArgs, GetArgs, ListArgs, PresetArgs, ValueArgs};
use crate::ddc::{
    adjust_percent, apply_preset, pick_monitor, read_settings, set_percent, snapshot_monitors,
    Feature, MonitorDescriptor,
};
use crate::env_config::{merge_filter, resolve_monitor_index, EnvDefaults};
use crate::presets::{find_preset, preset_names};
use crate::util::format_opt;

/// モニタ一覧をフィルタ付きで表示する
///
/// - .envとCLI引数をマージして対象モニタを抽出
/// - 見つからなければその旨を標準出力に表示（エラーにはしない）
/// - 各モニタの輝度/コントラストは読めた場合のみ表示し、失敗しても列挙は続行
pub fn handle_list(args: &ListArgs, env: &EnvDefaults) -> Result<()> {
    let filter = merge_filter(&args.filter, env);
    let mut monitors = snapshot_monitors(&filter);
    if monitors.is_empty() {
        println!("モニタは見つかりませんでした");
        return Ok(());
    }

    println!("{}台のモニタを検出しました", monitors.len());
    for (index, display) in monitors.iter_mut().enumerate() {
        let desc = MonitorDescriptor::from_info(&display.info);
        println!(
            "[{index}] id={:<24} backend={:<8} model={:<20} serial={}",
            desc.id,
            desc.backend,
            format_opt(desc.model.as_deref()),
            format_opt(desc.serial.as_deref()),
        );
        match read_settings(display) {
            Ok((brightness, contrast)) => {
                println!("    brightness={brightness}% contrast={contrast}%");
            }
            Err(e) => println!("    設定を読み取れませんでした: {e}"),
        }
    }
    Ok(())
}

/// 対象モニタの現在の輝度とコントラストを表示する
pub fn handle_get(args: &GetArgs, env: &EnvDefaults) -> Result<()> {
    let filter = merge_filter(&args.filter, env);
    let index = resolve_monitor_index(args.monitor, env);
    let mut monitor = pick_monitor(&filter, index)?;

    let (brightness, contrast) = read_settings(&mut monitor)
        .with_context(|| format!("設定の取得に失敗しました (monitor={})", index))?;
    println!("monitor={index} brightness={brightness}% contrast={contrast}%");
    Ok(())
}

/// 輝度またはコントラストを絶対値で設定する
pub fn handle_set(args: &ValueArgs, env: &EnvDefaults, feature: Feature) -> Result<()> {
    let filter = merge_filter(&args.filter, env);
    let index = resolve_monitor_index(args.monitor, env);
    let mut monitor = pick_monitor(&filter, index)?;

    let value = set_percent(&mut monitor, feature.code(), args.value).with_context(|| {
        format!("{}の設定に失敗しました (monitor={})", feature.label(), index)
    })?;
    println!("monitor={index} {}={value}%", feature.label());
    Ok(())
}

/// プリセットを適用して輝度とコントラストをまとめて設定する
pub fn handle_preset(args: &PresetArgs, env: &EnvDefaults) -> Result<()> {
    let preset = find_preset(&args.name).ok_or_else(|| {
        anyhow!(
            "不明なプリセット '{}' です。指定可能: {}",
            args.name,
            preset_names()
        )
    })?;

    let filter = merge_filter(&args.filter, env);
    let index = resolve_monitor_index(args.monitor, env);
    let mut monitor = pick_monitor(&filter, index)?;

    apply_preset(&mut monitor, preset).with_context(|| {
        format!(
            "プリセット '{}' の適用に失敗しました (monitor={})",
            preset.name, index
        )
    })?;
    println!(
        "monitor={index} preset={} brightness={}% contrast={}%",
        preset.name, preset.brightness, preset.contrast
    );
    Ok(())
}

/// 現在値に±deltaを加えて設定する。結果は[0,100]へクランプされる
pub fn handle_adjust(args: &DeltaArgs, env: &EnvDefaults, feature: Feature) -> Result<()> {
    let filter = merge_filter(&args.filter, env);
    let index = resolve_monitor_index(args.monitor, env);
    let mut monitor = pick_monitor(&filter, index)?;

    let value = adjust_percent(&mut monitor, feature.code(), args.delta).with_context(|| {
        format!("{}の調整に失敗しました (monitor={})", feature.label(), index)
    })?;
    println!("monitor={index} {}={value}%", feature.label());
    Ok(())
}
