//! Bridge WASM <-> JavaScript cho phiên bàn giao, không phụ thuộc framework UI.

use handoff_core::{DismissalScope, EngineConfig, EngineSnapshot, HandoffError, Patient};
use handoff_engine::HandoffSession;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Cấu hình từng phần từ JS; trường nào thiếu sẽ dùng mặc định.
#[derive(Debug, Default, Deserialize)]
struct JsEngineConfig {
    #[serde(default)]
    suggestion_min_score: Option<f64>,
    #[serde(default)]
    recent_selection_window: Option<usize>,
    #[serde(default)]
    max_cascade_depth: Option<u32>,
    #[serde(default)]
    dismissal_scope: Option<DismissalScope>,
    #[serde(default)]
    utc_offset_minutes: Option<i32>,
}

impl From<JsEngineConfig> for EngineConfig {
    fn from(cfg: JsEngineConfig) -> Self {
        let mut base = EngineConfig::default();
        if let Some(score) = cfg.suggestion_min_score {
            base.suggestion_min_score = score;
        }
        if let Some(window) = cfg.recent_selection_window {
            base.recent_selection_window = window;
        }
        if let Some(depth) = cfg.max_cascade_depth {
            base.max_cascade_depth = depth;
        }
        if let Some(scope) = cfg.dismissal_scope {
            base.dismissal_scope = scope;
        }
        if let Some(offset) = cfg.utc_offset_minutes {
            base.utc_offset_minutes = offset;
        }
        base
    }
}

#[wasm_bindgen]
pub struct WasmHandoffSession {
    inner: HandoffSession,
}

#[wasm_bindgen]
impl WasmHandoffSession {
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsValue>) -> Result<WasmHandoffSession, JsValue> {
        install_panic_hook();
        Ok(Self {
            inner: HandoffSession::new(read_config(config)?),
        })
    }

    /// Khôi phục phiên từ snapshot đã lưu; gợi ý được suy lại.
    pub fn restore(
        snapshot: JsValue,
        config: Option<JsValue>,
    ) -> Result<WasmHandoffSession, JsValue> {
        install_panic_hook();
        let snapshot: EngineSnapshot = from_value(snapshot)
            .map_err(|err| JsValue::from_str(&format!("Không đọc được snapshot: {err}")))?;
        let inner = HandoffSession::restore(snapshot, read_config(config)?).map_err(js_error)?;
        Ok(Self { inner })
    }

    pub fn add_patient(&mut self, patient: JsValue) -> Result<usize, JsValue> {
        let patient: Patient = from_value(patient)
            .map_err(|err| JsValue::from_str(&format!("Không đọc được bệnh nhân: {err}")))?;
        self.inner.add_patient(patient).map_err(js_error)
    }

    pub fn remove_patient(&mut self, index: usize) -> Result<JsValue, JsValue> {
        let removed = self.inner.remove_patient(index).map_err(js_error)?;
        serialize(&removed)
    }

    pub fn set_active_patient(&mut self, index: usize) -> Result<(), JsValue> {
        self.inner.set_active_patient(index).map_err(js_error)
    }

    pub fn toggle_selection(
        &mut self,
        category: &str,
        section: &str,
        item: &str,
        note: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let outcome = self
            .inner
            .toggle_selection(category, section, item, note.as_deref())
            .map_err(js_error)?;
        serialize(&outcome)
    }

    /// Gọi ngay sau khi UI đã render lại sau một lần chọn.
    pub fn apply_pending_cascades(&mut self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.apply_pending_cascades())
    }

    pub fn pending_cascades(&self) -> usize {
        self.inner.pending_cascades()
    }

    pub fn dismiss_suggestion(&mut self, key: String) -> Result<bool, JsValue> {
        self.inner.dismiss_suggestion(key).map_err(js_error)
    }

    pub fn clear_all_selections(&mut self) -> Result<usize, JsValue> {
        self.inner.clear_all_selections().map_err(js_error)
    }

    pub fn accept_suggestion(&mut self, item: &str) -> Result<JsValue, JsValue> {
        let outcome = self.inner.accept_suggestion(item).map_err(js_error)?;
        serialize(&outcome)
    }

    pub fn conflicts_for(
        &self,
        category: &str,
        section: &str,
        item: &str,
    ) -> Result<JsValue, JsValue> {
        let conflicts = self
            .inner
            .conflicts_for(category, section, item)
            .map_err(js_error)?;
        serialize(&conflicts)
    }

    pub fn selected_items(&self) -> Result<JsValue, JsValue> {
        let records = self.inner.selections().map_err(js_error)?.records();
        serialize(&records)
    }

    pub fn related_items(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.active_suggestions().map_err(js_error)?)
    }

    pub fn dismissed_suggestions(&self) -> Result<JsValue, JsValue> {
        serialize(self.inner.dismissed().map_err(js_error)?)
    }

    pub fn handoff_summary(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.handoff_summary().map_err(js_error)?)
    }

    pub fn clinical_context(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.clinical_context().map_err(js_error)?)
    }

    /// Trạng thái `{patients, selected_items, related_items, dismissed_suggestions}`
    /// để lớp lưu trữ ghi lại.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.snapshot())
    }
}

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn read_config(config: Option<JsValue>) -> Result<EngineConfig, JsValue> {
    match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsEngineConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            Ok(EngineConfig::from(cfg))
        }
        _ => Ok(EngineConfig::default()),
    }
}

fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("Không serialize kết quả: {err}")))
}

fn js_error(err: HandoffError) -> JsValue {
    JsValue::from_str(&format_handoff_error(err))
}

fn format_handoff_error(err: HandoffError) -> String {
    format!("Handoff error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_js_config_overlays_defaults() {
        let cfg: JsEngineConfig =
            serde_json::from_str(r#"{ "max_cascade_depth": 2, "utc_offset_minutes": 420 }"#)
                .unwrap();
        let cfg = EngineConfig::from(cfg);
        assert_eq!(cfg.max_cascade_depth, 2);
        assert_eq!(cfg.utc_offset_minutes, 420);
        assert_eq!(cfg.dismissal_scope, DismissalScope::SuggestionKey);
        assert_eq!(cfg.recent_selection_window, 5);
    }

    #[test]
    fn errors_are_prefixed() {
        assert_eq!(
            format_handoff_error(HandoffError::NoActivePatient),
            "Handoff error: Chưa có bệnh nhân đang hoạt động"
        );
    }
}
