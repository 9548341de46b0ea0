pub fn parse_percent(input: &str) -> std::result::Result<u16, String> {
    let value = input.parse::<u16>().map_err(|e| e.to_string())?;
    if value > 100 {
        return Err("0〜100の範囲で指定してください".to_string());
    }
    Ok(value)
}

pub fn clamp_percent(value: i32) -> u16 {
    value.clamp(0, 100) as u16
}

pub fn format_opt(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "-".to_string(),
    }
}
