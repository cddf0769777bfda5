//! Abnormal-range definitions for vitals and labs.

use std::collections::BTreeMap;

use handoff_core::FieldKind;
use serde::{Deserialize, Serialize};

/// Fixed blood-pressure bounds. BP does not fit the scalar model.
pub const SYSTOLIC_RANGE: (f64, f64) = (90.0, 140.0);
pub const DIASTOLIC_RANGE: (f64, f64) = (60.0, 90.0);

/// Bounds for one field. Either style (`low`/`high` or `min`/`max`) may be
/// present; absent bounds are skipped during evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThresholdSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers_low: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers_high: Vec<String>,
}

impl ThresholdSpec {
    pub fn range(low: f64, high: f64) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
            ..Self::default()
        }
    }

    pub fn critical(mut self, critical_low: Option<f64>, critical_high: Option<f64>) -> Self {
        self.critical_low = critical_low;
        self.critical_high = critical_high;
        self
    }

    pub fn bounded(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn on_low(mut self, triggers: &[&str]) -> Self {
        self.triggers_low = triggers.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn on_high(mut self, triggers: &[&str]) -> Self {
        self.triggers_high = triggers.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// Per-kind threshold lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThresholdTable {
    #[serde(default)]
    pub vitals: BTreeMap<String, ThresholdSpec>,
    #[serde(default)]
    pub labs: BTreeMap<String, ThresholdSpec>,
}

impl ThresholdTable {
    /// The built-in table, shared with `KnowledgeBase::builtin`.
    pub fn builtin() -> &'static ThresholdTable {
        &crate::knowledge::shared().thresholds
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: FieldKind, field: &str, spec: ThresholdSpec) -> Self {
        self.insert(kind, field, spec);
        self
    }

    pub fn insert(&mut self, kind: FieldKind, field: &str, spec: ThresholdSpec) {
        self.fields_mut(kind).insert(field.to_string(), spec);
    }

    /// Exact name first, then the first case-insensitive match in name order.
    pub fn lookup(&self, kind: FieldKind, field: &str) -> Option<&ThresholdSpec> {
        let fields = self.fields(kind);
        fields.get(field).or_else(|| {
            fields
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(field))
                .map(|(_, spec)| spec)
        })
    }

    fn fields(&self, kind: FieldKind) -> &BTreeMap<String, ThresholdSpec> {
        match kind {
            FieldKind::Vital => &self.vitals,
            FieldKind::Lab => &self.labs,
        }
    }

    fn fields_mut(&mut self, kind: FieldKind) -> &mut BTreeMap<String, ThresholdSpec> {
        match kind {
            FieldKind::Vital => &mut self.vitals,
            FieldKind::Lab => &mut self.labs,
        }
    }
}

pub(crate) fn builtin_table() -> ThresholdTable {
    use FieldKind::{Lab, Vital};

    ThresholdTable::empty()
        .with(
            Vital,
            "HR",
            ThresholdSpec::range(60.0, 100.0)
                .critical(Some(40.0), Some(120.0))
                .unit("bpm")
                .on_high(&[
                    "assessment-cardiac-Tachycardia",
                    "interventions-monitoring-Continuous Cardiac Monitoring",
                ])
                .on_low(&["assessment-cardiac-Bradycardia"]),
        )
        .with(
            Vital,
            "RR",
            ThresholdSpec::range(12.0, 20.0)
                .critical(Some(8.0), Some(30.0))
                .unit("breaths/min")
                .on_high(&["assessment-respiratory-Tachypnea"])
                .on_low(&["assessment-respiratory-Bradypnea"]),
        )
        .with(
            Vital,
            "SpO2",
            ThresholdSpec {
                low: Some(92.0),
                critical_low: Some(88.0),
                max: Some(100.0),
                ..ThresholdSpec::default()
            }
            .unit("%")
            .on_low(&[
                "assessment-respiratory-Hypoxia",
                "interventions-respiratory-Supplemental Oxygen",
            ]),
        )
        .with(
            Vital,
            "Temp",
            ThresholdSpec::range(36.0, 38.0)
                .critical(Some(35.0), Some(39.5))
                .unit("°C")
                .on_high(&["assessment-general-Fever"])
                .on_low(&["assessment-general-Hypothermia"]),
        )
        .with(
            Vital,
            "BP",
            ThresholdSpec::default()
                .unit("mmHg")
                .on_high(&["assessment-cardiac-Hypertension"])
                .on_low(&["assessment-cardiac-Hypotension"]),
        )
        .with(
            Vital,
            "MAP",
            ThresholdSpec::range(65.0, 110.0)
                .unit("mmHg")
                .on_low(&["assessment-cardiac-Hypotension"]),
        )
        .with(
            Vital,
            "Pain",
            ThresholdSpec {
                high: Some(6.0),
                ..ThresholdSpec::default()
            }
            .bounded(0.0, 10.0)
            .on_high(&["interventions-treatment-Pain Reassessment"]),
        )
        .with(
            Vital,
            "GCS",
            ThresholdSpec {
                low: Some(13.0),
                critical_low: Some(8.0),
                ..ThresholdSpec::default()
            }
            .bounded(3.0, 15.0)
            .on_low(&["assessment-neuro-Altered Mental Status"]),
        )
        .with(
            Vital,
            "Glucose",
            ThresholdSpec::range(70.0, 180.0)
                .critical(Some(40.0), Some(400.0))
                .unit("mg/dL")
                .on_high(&["assessment-endocrine-Hyperglycemia"])
                .on_low(&["assessment-endocrine-Hypoglycemia"]),
        )
        .with(
            Lab,
            "K",
            ThresholdSpec::range(3.5, 5.0)
                .critical(Some(2.5), Some(6.0))
                .unit("mmol/L")
                .on_high(&[
                    "assessment-renal-Hyperkalemia",
                    "interventions-monitoring-Continuous Cardiac Monitoring",
                ])
                .on_low(&["assessment-renal-Hypokalemia"]),
        )
        .with(
            Lab,
            "Na",
            ThresholdSpec::range(135.0, 145.0)
                .critical(Some(120.0), Some(160.0))
                .unit("mmol/L")
                .on_high(&["assessment-renal-Hypernatremia"])
                .on_low(&["assessment-renal-Hyponatremia"]),
        )
        .with(
            Lab,
            "Glucose",
            ThresholdSpec::range(70.0, 180.0)
                .critical(Some(40.0), Some(400.0))
                .unit("mg/dL")
                .on_high(&["assessment-endocrine-Hyperglycemia"])
                .on_low(&["assessment-endocrine-Hypoglycemia"]),
        )
        .with(
            Lab,
            "WBC",
            ThresholdSpec::range(4.0, 11.0)
                .critical(None, Some(30.0))
                .unit("10^3/µL")
                .on_high(&["assessment-infection-Leukocytosis"])
                .on_low(&["precautions-isolation-Neutropenic Precautions"]),
        )
        .with(
            Lab,
            "Hgb",
            ThresholdSpec::range(7.0, 18.0)
                .critical(Some(5.0), None)
                .unit("g/dL")
                .on_low(&["assessment-hematology-Anemia"]),
        )
        .with(
            Lab,
            "Platelets",
            ThresholdSpec::range(150.0, 450.0)
                .critical(Some(20.0), None)
                .unit("10^3/µL")
                .on_low(&[
                    "assessment-hematology-Thrombocytopenia",
                    "precautions-safety-Bleeding Precautions",
                ]),
        )
        .with(
            Lab,
            "Creatinine",
            ThresholdSpec {
                high: Some(1.3),
                critical_high: Some(4.0),
                ..ThresholdSpec::default()
            }
            .unit("mg/dL")
            .on_high(&["assessment-renal-Acute Kidney Injury"]),
        )
        .with(
            Lab,
            "Lactate",
            ThresholdSpec {
                high: Some(2.0),
                critical_high: Some(4.0),
                ..ThresholdSpec::default()
            }
            .unit("mmol/L")
            .on_high(&["assessment-infection-Sepsis"]),
        )
        .with(
            Lab,
            "Troponin",
            ThresholdSpec {
                high: Some(0.04),
                ..ThresholdSpec::default()
            }
            .unit("ng/mL")
            .on_high(&["assessment-cardiac-Acute Coronary Syndrome"]),
        )
        .with(
            Lab,
            "INR",
            ThresholdSpec {
                high: Some(3.5),
                critical_high: Some(5.0),
                ..ThresholdSpec::default()
            }
            .on_high(&["precautions-safety-Bleeding Precautions"]),
        )
        .with(
            Lab,
            "Mg",
            ThresholdSpec::range(1.7, 2.2)
                .unit("mg/dL")
                .on_low(&["assessment-renal-Hypomagnesemia"]),
        )
        .with(
            Lab,
            "pH",
            ThresholdSpec::range(7.35, 7.45)
                .critical(Some(7.2), Some(7.6))
                .on_high(&["assessment-respiratory-Alkalosis"])
                .on_low(&["assessment-respiratory-Acidosis"]),
        )
        .with(
            Lab,
            "BUN",
            ThresholdSpec::range(7.0, 20.0).unit("mg/dL"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use handoff_core::TriggerSpec;

    #[test]
    fn lookup_falls_back_to_case_insensitive_name() {
        let table = ThresholdTable::builtin();
        assert!(table.lookup(FieldKind::Vital, "hr").is_some());
        assert!(table.lookup(FieldKind::Lab, "k").is_some());
        assert!(table.lookup(FieldKind::Lab, "HR").is_none());
    }

    #[test]
    fn case_insensitive_lookup_picks_the_first_name_in_order() {
        let table = ThresholdTable::empty()
            .with(FieldKind::Vital, "hr", ThresholdSpec::default().critical(None, Some(130.0)))
            .with(FieldKind::Vital, "Hr", ThresholdSpec::default().critical(None, Some(110.0)));
        assert_eq!(
            table.lookup(FieldKind::Vital, "HR").unwrap().critical_high,
            Some(110.0)
        );
        assert_eq!(
            table.lookup(FieldKind::Vital, "hr").unwrap().critical_high,
            Some(130.0)
        );
    }

    #[test]
    fn every_builtin_trigger_parses() {
        let table = ThresholdTable::builtin();
        for spec in table.vitals.values().chain(table.labs.values()) {
            for trigger in spec.triggers_low.iter().chain(&spec.triggers_high) {
                assert!(trigger.parse::<TriggerSpec>().is_ok(), "{trigger}");
            }
        }
    }

    #[test]
    fn table_deserializes_from_json() {
        let table: ThresholdTable = serde_json::from_str(
            r#"{ "vitals": { "HR": { "critical_high": 120, "triggers_high": ["assessment-cardiac-Tachycardia"] } } }"#,
        )
        .unwrap();
        let spec = table.lookup(FieldKind::Vital, "HR").unwrap();
        assert_eq!(spec.critical_high, Some(120.0));
        assert_eq!(spec.low, None);
        assert!(table.labs.is_empty());
    }
}
