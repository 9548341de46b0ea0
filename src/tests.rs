use crate::cli::FilterArgs;
use crate::ddc::{
    adjust_percent, apply_preset, current_percent, mock::MockMonitor, read_settings, set_percent,
    Feature, MonitorDescriptor, VCP_CONTRAST, VCP_LUMINANCE,
};
use crate::env_config::{merge_filter, resolve_monitor_index, EnvDefaults};
use crate::presets::{find_preset, preset_names, PRESETS};
use crate::util::{clamp_percent, format_opt, parse_percent};

// パーセント値パーサが範囲チェックまで行うことを確認
#[test]
fn parse_percent_accepts_bounds() {
    assert_eq!(parse_percent("0").unwrap(), 0);
    assert_eq!(parse_percent("100").unwrap(), 100);
    assert_eq!(parse_percent("75").unwrap(), 75);
}

#[test]
fn parse_percent_rejects_out_of_range_and_garbage() {
    assert!(parse_percent("101").is_err());
    assert!(parse_percent("-1").is_err());
    assert!(parse_percent("abc").is_err());
}

#[test]
fn clamp_percent_limits_both_ends() {
    assert_eq!(clamp_percent(-5), 0);
    assert_eq!(clamp_percent(250), 100);
    assert_eq!(clamp_percent(42), 42);
}

#[test]
fn format_opt_falls_back_to_dash() {
    assert_eq!(format_opt(None), "-");
    assert_eq!(format_opt(Some("")), "-");
    assert_eq!(format_opt(Some("DELL U2720Q")), "DELL U2720Q");
}

// フィルタ統合ロジックがCLI優先で環境変数を補完する挙動を確認
#[test]
fn merge_filter_prefers_cli_over_env_defaults() {
    let cli = FilterArgs {
        model: Some("U2720Q".to_string()),
        serial: None,
        backend: Some("i2c-dev".to_string()),
    };
    let env = EnvDefaults {
        monitor: None,
        model: Some("ignored".to_string()),
        serial: Some("ABC123".to_string()),
        backend: None,
    };

    let merged = merge_filter(&cli, &env);
    assert_eq!(merged.model.as_deref(), Some("U2720Q"));
    assert_eq!(merged.serial.as_deref(), Some("ABC123"));
    assert_eq!(merged.backend.as_deref(), Some("i2c-dev"));
}

#[test]
fn merge_filter_fills_missing_from_env() {
    let cli = FilterArgs::default();
    let env = EnvDefaults {
        monitor: None,
        model: Some("LG".to_string()),
        serial: Some("XYZ".to_string()),
        backend: Some("winapi".to_string()),
    };

    let merged = merge_filter(&cli, &env);
    assert_eq!(merged.model.as_deref(), Some("LG"));
    assert_eq!(merged.serial.as_deref(), Some("XYZ"));
    assert_eq!(merged.backend.as_deref(), Some("winapi"));
}

#[test]
fn resolve_monitor_index_precedence() {
    let env = EnvDefaults {
        monitor: Some(1),
        ..EnvDefaults::default()
    };
    assert_eq!(resolve_monitor_index(Some(2), &env), 2);
    assert_eq!(resolve_monitor_index(None, &env), 1);
    assert_eq!(resolve_monitor_index(None, &EnvDefaults::default()), 0);
}

// プリセット表の内容を確認
#[test]
fn find_preset_returns_fixed_pair() {
    let preset = find_preset("reading").unwrap();
    assert_eq!(preset.brightness, 40);
    assert_eq!(preset.contrast, 60);

    let preset = find_preset("set-30").unwrap();
    assert_eq!(preset.brightness, 30);
    assert_eq!(preset.contrast, 30);
}

#[test]
fn find_preset_rejects_unknown_name() {
    assert!(find_preset("super-bright").is_none());
    assert!(preset_names().contains("set-75"));
}

#[test]
fn preset_table_stays_within_percent_range() {
    for preset in PRESETS {
        assert!(preset.brightness <= 100, "{}", preset.name);
        assert!(preset.contrast <= 100, "{}", preset.name);
    }
}

// モニタ記述子のフィルタ一致判定を確認
#[test]
fn descriptor_matches_model_substring() {
    let desc = MonitorDescriptor {
        id: "i2c-dev/i2c-4".to_string(),
        backend: "i2c-dev".to_string(),
        manufacturer: Some("DEL".to_string()),
        model: Some("DELL U2720Q".to_string()),
        serial: Some("ABC123".to_string()),
    };

    let filter = FilterArgs {
        model: Some("U2720".to_string()),
        serial: None,
        backend: None,
    };
    assert!(desc.matches(&filter));

    let filter = FilterArgs {
        model: Some("LG".to_string()),
        serial: None,
        backend: None,
    };
    assert!(!desc.matches(&filter));
}

#[test]
fn descriptor_without_model_fails_model_filter() {
    let desc = MonitorDescriptor {
        id: "i2c-dev/i2c-5".to_string(),
        backend: "i2c-dev".to_string(),
        ..MonitorDescriptor::default()
    };

    let filter = FilterArgs {
        model: Some("DELL".to_string()),
        serial: None,
        backend: None,
    };
    assert!(!desc.matches(&filter));
    assert!(desc.matches(&FilterArgs::default()));
}

// VCP操作のモックテスト
#[test]
fn set_percent_writes_requested_value() {
    let mut device = MockMonitor::with_values(&[]);
    let value = set_percent(&mut device, Feature::Brightness.code(), 75).unwrap();
    assert_eq!(value, 75);
    assert_eq!(device.last_written(), Some((VCP_LUMINANCE, 75)));
}

#[test]
fn adjust_percent_applies_signed_delta() {
    let mut device = MockMonitor::with_values(&[(VCP_LUMINANCE, 50)]);
    let value = adjust_percent(&mut device, VCP_LUMINANCE, -10).unwrap();
    assert_eq!(value, 40);
    assert_eq!(device.last_written(), Some((VCP_LUMINANCE, 40)));
}

#[test]
fn adjust_percent_clamps_to_percent_range() {
    let mut device = MockMonitor::with_values(&[(VCP_LUMINANCE, 5)]);
    assert_eq!(adjust_percent(&mut device, VCP_LUMINANCE, -1000).unwrap(), 0);

    let mut device = MockMonitor::with_values(&[(VCP_CONTRAST, 95)]);
    assert_eq!(adjust_percent(&mut device, VCP_CONTRAST, 1000).unwrap(), 100);
    assert_eq!(device.last_written(), Some((VCP_CONTRAST, 100)));
}

#[test]
fn apply_preset_writes_both_features() {
    let preset = find_preset("reading").unwrap();
    let mut device = MockMonitor::with_values(&[]);
    apply_preset(&mut device, preset).unwrap();
    assert_eq!(
        device.written,
        vec![(VCP_LUMINANCE, 40), (VCP_CONTRAST, 60)]
    );
}

#[test]
fn read_settings_returns_brightness_and_contrast() {
    let mut device = MockMonitor::with_values(&[(VCP_LUMINANCE, 70), (VCP_CONTRAST, 55)]);
    assert_eq!(current_percent(&mut device, VCP_LUMINANCE).unwrap(), 70);
    assert_eq!(read_settings(&mut device).unwrap(), (70, 55));
}

#[test]
fn read_settings_fails_when_feature_missing() {
    let mut device = MockMonitor::with_values(&[(VCP_LUMINANCE, 70)]);
    assert!(read_settings(&mut device).is_err());
}
