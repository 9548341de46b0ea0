/// 名前付きプリセット。輝度とコントラストをまとめて設定する
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub brightness: u16,
    pub contrast: u16,
}

pub const PRESETS: &[Preset] = &[
    Preset { name: "bright", brightness: 90, contrast: 75 },
    Preset { name: "normal", brightness: 50, contrast: 50 },
    Preset { name: "dim", brightness: 20, contrast: 40 },
    Preset { name: "night", brightness: 15, contrast: 30 },
    Preset { name: "gaming", brightness: 70, contrast: 80 },
    Preset { name: "reading", brightness: 40, contrast: 60 },
    Preset { name: "set-30", brightness: 30, contrast: 30 },
    Preset { name: "set-40", brightness: 40, contrast: 40 },
    Preset { name: "set-75", brightness: 75, contrast: 75 },
];

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// エラーメッセージ用にプリセット名をまとめる
pub fn preset_names() -> String {
    PRESETS
        .iter()
        .map(|p| p.name)
        .collect::<Vec<_>>()
        .join(", ")
}
