use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct ValidateReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}

#[derive(Serialize, Clone)]
pub struct ExtensionRow {
    pub position: usize,
    pub id: String,
}

#[derive(Serialize)]
pub struct ThemeReport {
    pub html_theme: Option<String>,
    pub options: Vec<ThemeOption>,
}

#[derive(Serialize, Clone)]
pub struct ThemeOption {
    pub key: String,
    pub value: Value,
}
