pub mod cli;
pub mod commands;
pub mod ddc;
pub mod env_config;
pub mod presets;
pub mod util;

pub use cli::{
    Cli, Commands, DeltaArgs, FilterArgs, GetArgs, ListArgs, PresetArgs, ValueArgs,
};
pub use commands::{handle_adjust, handle_get, handle_list, handle_preset, handle_set};
pub use ddc::{Feature, FeatureValue, MonitorDescriptor, VcpIo, VCP_CONTRAST, VCP_LUMINANCE};
pub use env_config::{load_env_defaults, merge_filter, resolve_monitor_index, EnvDefaults};
pub use presets::{find_preset, preset_names, Preset, PRESETS};
pub use util::{clamp_percent, format_opt, parse_percent};

#[cfg(test)]
mod tests;
