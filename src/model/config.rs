use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from tasking.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub edit: EditConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot (e.g. `header = "#330074"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

/// Literal strings shown in the interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub placeholder: String,
    pub empty: String,
    pub delete: String,
    pub save: String,
    pub edit_title: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            title: "Tasking App".into(),
            placeholder: "Buat Tugas".into(),
            empty: "Tidak ada tugas".into(),
            delete: "Hapus".into(),
            save: "Simpan".into(),
            edit_title: "Edit".into(),
        }
    }
}

/// How save-edit picks the task to update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditTargeting {
    /// The task whose id was recorded when editing began
    #[default]
    ById,
    /// The first task whose text equals the text captured when editing began
    FirstTextMatch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditConfig {
    #[serde(default)]
    pub targeting: EditTargeting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file path. Logging is off when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// `tracing` filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "tasking=info".into()
}
