use anyhow::{anyhow, bail, Result};
use ddc_hi::{Ddc, Display, FeatureCode};

use crate::cli::FilterArgs;
use crate::presets::Preset;
use crate::util::clamp_percent;

/// 輝度(luminance)のVCPフィーチャコード
pub const VCP_LUMINANCE: FeatureCode = 0x10;
/// コントラストのVCPフィーチャコード
pub const VCP_CONTRAST: FeatureCode = 0x12;

/// VCPの読み書きを抽象化するトレイト（テストでモックしやすくするため）
pub trait VcpIo {
    fn read_vcp(&mut self, code: FeatureCode) -> Result<FeatureValue>;
    fn write_vcp(&mut self, code: FeatureCode, value: u16) -> Result<()>;
}

/// VCPフィーチャの現在値と最大値
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureValue {
    pub value: u16,
    pub maximum: u16,
}

impl VcpIo for Display {
    fn read_vcp(&mut self, code: FeatureCode) -> Result<FeatureValue> {
        let value = self
            .handle
            .get_vcp_feature(code)
            .map_err(|e| anyhow!("VCP 0x{:02x} の読み取りに失敗: {}", code, e))?;
        Ok(FeatureValue {
            value: value.value(),
            maximum: value.maximum(),
        })
    }

    fn write_vcp(&mut self, code: FeatureCode, value: u16) -> Result<()> {
        self.handle
            .set_vcp_feature(code, value)
            .map_err(|e| anyhow!("VCP 0x{:02x} の書き込みに失敗: {}", code, e))
    }
}

/// 操作対象のVCPフィーチャ
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    Brightness,
    Contrast,
}

impl Feature {
    pub fn code(self) -> FeatureCode {
        match self {
            Feature::Brightness => VCP_LUMINANCE,
            Feature::Contrast => VCP_CONTRAST,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::Brightness => "brightness",
            Feature::Contrast => "contrast",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MonitorDescriptor {
    pub id: String,
    pub backend: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial: Option<String>,
}

impl MonitorDescriptor {
    pub fn from_info(info: &ddc_hi::DisplayInfo) -> Self {
        Self {
            id: info.id.clone(),
            backend: info.backend.to_string(),
            manufacturer: info.manufacturer_id.clone(),
            model: info.model_name.clone(),
            serial: info.serial_number.clone(),
        }
    }

    pub fn matches(&self, filter: &FilterArgs) -> bool {
        if let Some(model) = filter.model.as_deref() {
            let hit = self
                .model
                .as_deref()
                .map(|m| m.contains(model))
                .unwrap_or(false);
            if !hit {
                return false;
            }
        }
        if let Some(serial) = filter.serial.as_deref() {
            let hit = self
                .serial
                .as_deref()
                .map(|s| s.contains(serial))
                .unwrap_or(false);
            if !hit {
                return false;
            }
        }
        if let Some(backend) = filter.backend.as_deref() {
            if !self.backend.contains(backend) {
                return false;
            }
        }
        true
    }
}

pub fn snapshot_monitors(filter: &FilterArgs) -> Vec<Display> {
    // 接続中のモニタを列挙し、フィルタに合致するものだけ抽出
    let mut monitors = Vec::new();
    for display in Display::enumerate() {
        if !MonitorDescriptor::from_info(&display.info).matches(filter) {
            continue;
        }
        monitors.push(display);
    }
    monitors
}

pub fn pick_monitor(filter: &FilterArgs, index: usize) -> Result<Display> {
    let monitors = snapshot_monitors(filter);
    if monitors.is_empty() {
        bail!("モニタが検出されませんでした");
    }
    if index >= monitors.len() {
        bail!(
            "モニタ番号{}は範囲外です。指定可能: 0〜{}",
            index,
            monitors.len() - 1
        );
    }
    Ok(monitors.into_iter().nth(index).unwrap())
}

pub fn current_percent(device: &mut dyn VcpIo, code: FeatureCode) -> Result<u16> {
    Ok(device.read_vcp(code)?.value)
}

/// 輝度とコントラストをまとめて読む
pub fn read_settings(device: &mut dyn VcpIo) -> Result<(u16, u16)> {
    let brightness = current_percent(device, VCP_LUMINANCE)?;
    let contrast = current_percent(device, VCP_CONTRAST)?;
    Ok((brightness, contrast))
}

/// 値を[0,100]へ収めて書き込み、実際に設定した値を返す
pub fn set_percent(device: &mut dyn VcpIo, code: FeatureCode, value: u16) -> Result<u16> {
    let value = clamp_percent(i32::from(value));
    device.write_vcp(code, value)?;
    Ok(value)
}

/// 現在値に±deltaを加えた値を書き込む。結果は[0,100]に収まる
pub fn adjust_percent(device: &mut dyn VcpIo, code: FeatureCode, delta: i32) -> Result<u16> {
    let current = i32::from(current_percent(device, code)?);
    let target = clamp_percent(current + delta);
    device.write_vcp(code, target)?;
    Ok(target)
}

/// プリセットの輝度とコントラストを両方書き込む
pub fn apply_preset(device: &mut dyn VcpIo, preset: &Preset) -> Result<()> {
    device.write_vcp(VCP_LUMINANCE, preset.brightness)?;
    device.write_vcp(VCP_CONTRAST, preset.contrast)?;
    Ok(())
}
