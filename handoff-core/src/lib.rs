//! Mô hình dữ liệu lõi cho bàn giao ca (SBAR) và bộ gợi ý lâm sàng.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cấu hình điều chỉnh ngưỡng gợi ý, cascade và phạm vi bỏ qua gợi ý.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Điểm liên quan phải lớn hơn hẳn giá trị này mới được gợi ý.
    pub suggestion_min_score: f64,
    /// Số mục được chọn gần nhất đưa vào ngữ cảnh lâm sàng.
    pub recent_selection_window: usize,
    /// Độ sâu tối đa của chuỗi cascade (cascade sinh ra cascade).
    pub max_cascade_depth: u32,
    /// Bỏ qua gợi ý theo khóa gợi ý hay theo tên mục.
    pub dismissal_scope: DismissalScope,
    /// Độ lệch múi giờ (phút) dùng khi phân ca sáng/chiều/tối/đêm.
    pub utc_offset_minutes: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            suggestion_min_score: 0.5,
            recent_selection_window: 5,
            max_cascade_depth: 3,
            dismissal_scope: DismissalScope::SuggestionKey,
            utc_offset_minutes: 0,
        }
    }
}

/// Phạm vi áp dụng khi điều dưỡng bỏ qua một gợi ý.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DismissalScope {
    /// Chỉ ẩn đúng khóa gợi ý đã bỏ qua; nguồn mới sinh khóa mới sẽ hiện lại.
    #[default]
    SuggestionKey,
    /// Ẩn mọi gợi ý trùng tên mục với khóa đã bỏ qua.
    ItemName,
}

/// Mức độ bất thường của một chỉ số.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Moderate,
    Low,
    Info,
}

impl Severity {
    /// `Critical` và `High` được coi là bất thường.
    pub fn is_abnormal(self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }
}

/// Loại trường đo: chỉ số sống hoặc xét nghiệm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Vital,
    Lab,
}

impl FieldKind {
    /// Ánh xạ category của lựa chọn sang loại trường đo (`vitals`, `labs`).
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "vitals" => Some(FieldKind::Vital),
            "labs" => Some(FieldKind::Lab),
            _ => None,
        }
    }
}

/// Khóa định danh duy nhất của một lựa chọn: `category-section-item`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionKey {
    pub category: String,
    pub section: String,
    pub item: String,
}

impl SelectionKey {
    pub fn new(
        category: impl Into<String>,
        section: impl Into<String>,
        item: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            section: section.into(),
            item: item.into(),
        }
    }

    /// Phân tích tên mục dạng `mainItem:subOption`.
    pub fn item_ref(&self) -> Result<ItemRef, HandoffError> {
        self.item.parse()
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.category, self.section, self.item)
    }
}

impl FromStr for SelectionKey {
    type Err = HandoffError;

    /// Tách theo `-` tối đa ba phần; phần `item` giữ nguyên dấu `-` còn lại.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.splitn(3, '-').map(str::trim);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(category), Some(section), Some(item))
                if !category.is_empty() && !section.is_empty() && !item.is_empty() =>
            {
                Ok(SelectionKey::new(category, section, item))
            }
            _ => Err(HandoffError::MalformedKey(raw.to_string())),
        }
    }
}

/// Tên mục có thể kèm lựa chọn phụ: `Allergies:PCN`, `HR:135`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub main: String,
    pub sub_option: Option<String>,
}

impl FromStr for ItemRef {
    type Err = HandoffError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (main, sub_option) = match raw.split_once(':') {
            Some((main, sub)) => {
                let sub = sub.trim();
                (main.trim(), (!sub.is_empty()).then(|| sub.to_string()))
            }
            None => (raw.trim(), None),
        };

        if main.is_empty() {
            return Err(HandoffError::MalformedKey(raw.to_string()));
        }

        Ok(ItemRef {
            main: main.to_string(),
            sub_option,
        })
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_option {
            Some(sub) => write!(f, "{}:{sub}", self.main),
            None => f.write_str(&self.main),
        }
    }
}

/// Chuỗi trigger trong bảng ngưỡng, ví dụ `assessment-cardiac-Tachycardia`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriggerSpec {
    pub target: SelectionKey,
}

impl FromStr for TriggerSpec {
    type Err = HandoffError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse::<SelectionKey>()
            .map(|target| TriggerSpec { target })
            .map_err(|_| HandoffError::MalformedTrigger(raw.to_string()))
    }
}

/// Một dữ kiện lâm sàng mà điều dưỡng đã chọn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionRecord {
    pub category: String,
    pub section: String,
    pub item: String,
    /// Thời điểm tạo; giữ nguyên khi chỉnh sửa ghi chú.
    pub timestamp: DateTime<Utc>,
    pub note: Option<String>,
}

impl SelectionRecord {
    pub fn key(&self) -> SelectionKey {
        SelectionKey::new(&self.category, &self.section, &self.item)
    }
}

/// Khóa tổng hợp của một gợi ý, gắn với cặp (nguồn, mục được gợi ý).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct SuggestionKey(String);

impl SuggestionKey {
    pub fn for_pair(source: &str, item: &str) -> Self {
        SuggestionKey(format!("{source}->{item}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tên mục được gợi ý nằm sau `->`.
    pub fn item_name(&self) -> &str {
        self.0
            .rsplit_once("->")
            .map(|(_, item)| item)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for SuggestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SuggestionKey {
    fn from(raw: &str) -> Self {
        SuggestionKey(raw.to_string())
    }
}

impl From<String> for SuggestionKey {
    fn from(raw: String) -> Self {
        SuggestionKey(raw)
    }
}

/// Gợi ý được suy ra, không mang tính khẳng định.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionRecord {
    pub key: SuggestionKey,
    pub item: String,
    pub score: f64,
    /// Mục đã chọn (hoặc quy tắc ngữ cảnh) sinh ra gợi ý này.
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

/// Một sự kiện trên dòng thời gian của bệnh nhân.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    pub category: String,
    pub section: String,
    /// Mô tả hành động; luôn chứa tên mục để dọn dẹp khi bỏ chọn.
    pub action: String,
    pub item: String,
    pub recorded_at: DateTime<Utc>,
}

/// Hồ sơ bệnh nhân trong phiên bàn giao.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub vitals: BTreeMap<String, String>,
    #[serde(default)]
    pub labs: BTreeMap<String, String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Patient {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room: None,
            vitals: BTreeMap::new(),
            labs: BTreeMap::new(),
            allergies: Vec::new(),
            timeline: Vec::new(),
        }
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Thêm dị ứng, bỏ qua nếu đã có.
    pub fn add_allergy(&mut self, name: &str) -> bool {
        if self.allergies.iter().any(|existing| existing == name) {
            return false;
        }
        self.allergies.push(name.to_string());
        true
    }

    pub fn remove_allergy(&mut self, name: &str) -> bool {
        let before = self.allergies.len();
        self.allergies.retain(|existing| existing != name);
        before != self.allergies.len()
    }

    /// Bảng giá trị tương ứng với loại trường đo.
    pub fn fields(&self, kind: FieldKind) -> &BTreeMap<String, String> {
        match kind {
            FieldKind::Vital => &self.vitals,
            FieldKind::Lab => &self.labs,
        }
    }

    pub fn fields_mut(&mut self, kind: FieldKind) -> &mut BTreeMap<String, String> {
        match kind {
            FieldKind::Vital => &mut self.vitals,
            FieldKind::Lab => &mut self.labs,
        }
    }
}

/// Phân ca theo giờ trong ngày.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// 06–12 sáng, 12–18 chiều, 18–22 tối, còn lại là đêm.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            18..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// Mức độ nặng thô của bệnh nhân.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Acuity {
    Critical,
    Stable,
}

/// Ảnh chụp ngữ cảnh lâm sàng, dựng lại ở mỗi lần suy gợi ý.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicalContext {
    pub evaluated_at: DateTime<Utc>,
    pub has_abnormal_values: bool,
    /// Tên các trường đang bất thường, đã sắp xếp.
    pub abnormal_fields: Vec<String>,
    /// Các mục được chọn gần nhất, mới nhất đứng đầu.
    pub recent_items: Vec<String>,
    pub time_of_day: TimeOfDay,
    pub acuity: Acuity,
}

impl ClinicalContext {
    /// Ngữ cảnh trống (không bất thường, ổn định).
    pub fn quiet(evaluated_at: DateTime<Utc>, time_of_day: TimeOfDay) -> Self {
        Self {
            evaluated_at,
            has_abnormal_values: false,
            abnormal_fields: Vec::new(),
            recent_items: Vec::new(),
            time_of_day,
            acuity: Acuity::Stable,
        }
    }
}

/// Bốn phần của báo cáo bàn giao SBAR.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SbarSection {
    Situation,
    Background,
    Assessment,
    Recommendation,
}

impl SbarSection {
    /// Category không xác định được xếp vào `Assessment`.
    pub fn from_category(category: &str) -> Self {
        match category.to_ascii_lowercase().as_str() {
            "situation" | "status" | "vitals" => SbarSection::Situation,
            "background" | "history" | "medications" => SbarSection::Background,
            "recommendation" | "interventions" | "precautions" | "orders" | "consults" => {
                SbarSection::Recommendation
            }
            _ => SbarSection::Assessment,
        }
    }
}

/// Các lựa chọn hiện tại được nhóm theo SBAR.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SbarSummary {
    pub situation: Vec<SelectionRecord>,
    pub background: Vec<SelectionRecord>,
    pub assessment: Vec<SelectionRecord>,
    pub recommendation: Vec<SelectionRecord>,
}

impl SbarSummary {
    pub fn push(&mut self, record: SelectionRecord) {
        match SbarSection::from_category(&record.category) {
            SbarSection::Situation => self.situation.push(record),
            SbarSection::Background => self.background.push(record),
            SbarSection::Assessment => self.assessment.push(record),
            SbarSection::Recommendation => self.recommendation.push(record),
        }
    }

    pub fn section(&self, section: SbarSection) -> &[SelectionRecord] {
        match section {
            SbarSection::Situation => &self.situation,
            SbarSection::Background => &self.background,
            SbarSection::Assessment => &self.assessment,
            SbarSection::Recommendation => &self.recommendation,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.situation.is_empty()
            && self.background.is_empty()
            && self.assessment.is_empty()
            && self.recommendation.is_empty()
    }
}

/// Trạng thái xuất ra cho lớp lưu trữ và giao diện, khóa theo mã bệnh nhân.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineSnapshot {
    pub generated_at: DateTime<Utc>,
    pub active_patient: Option<usize>,
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub selected_items: BTreeMap<String, Vec<SelectionRecord>>,
    /// Chỉ mang tính tham khảo; khi khôi phục sẽ được suy lại.
    #[serde(default)]
    pub related_items: BTreeMap<String, Vec<SuggestionRecord>>,
    #[serde(default)]
    pub dismissed_suggestions: BTreeMap<String, Vec<SuggestionKey>>,
}

/// Lỗi chung của bộ máy bàn giao.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    #[error("Khóa lựa chọn không hợp lệ: {0}")]
    MalformedKey(String),
    #[error("Trigger không hợp lệ (cần category-section-item): {0}")]
    MalformedTrigger(String),
    #[error("Chưa có bệnh nhân đang hoạt động")]
    NoActivePatient,
    #[error("Không có bệnh nhân ở vị trí {0}")]
    UnknownPatient(usize),
    #[error("Mã bệnh nhân đã tồn tại: {0}")]
    DuplicatePatient(String),
    #[error("Không ánh xạ được mục gợi ý: {0}")]
    UnresolvedItem(String),
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
}
