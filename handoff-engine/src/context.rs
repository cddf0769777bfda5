//! Rebuilds the transient clinical context consulted by the deriver.

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use handoff_core::{Acuity, ClinicalContext, EngineConfig, FieldKind, ItemRef, Patient, TimeOfDay};

use crate::evaluator::AbnormalValueEvaluator;
use crate::selection::SelectionStore;

pub fn build_context(
    patient: &Patient,
    selections: &SelectionStore,
    evaluator: &AbnormalValueEvaluator<'_>,
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> ClinicalContext {
    let mut abnormal_fields: Vec<String> = [FieldKind::Vital, FieldKind::Lab]
        .into_iter()
        .flat_map(|kind| {
            patient
                .fields(kind)
                .iter()
                .filter(move |(field, value)| evaluator.is_abnormal(kind, field, value))
                .map(|(field, _)| field.clone())
        })
        .collect();
    abnormal_fields.sort();
    abnormal_fields.dedup();

    ClinicalContext {
        evaluated_at: now,
        has_abnormal_values: !abnormal_fields.is_empty(),
        abnormal_fields,
        recent_items: selections.recent_items(config.recent_selection_window),
        time_of_day: time_of_day(now, config.utc_offset_minutes),
        acuity: acuity(selections),
    }
}

pub fn time_of_day(now: DateTime<Utc>, utc_offset_minutes: i32) -> TimeOfDay {
    let hour = FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60))
        .map(|offset| now.with_timezone(&offset).hour())
        .unwrap_or_else(|| now.hour());
    TimeOfDay::from_hour(hour)
}

/// Critical when a `Critical` status item is selected.
fn acuity(selections: &SelectionStore) -> Acuity {
    let critical = selections.iter().any(|record| {
        record.category.eq_ignore_ascii_case("status")
            && record
                .item
                .parse::<ItemRef>()
                .is_ok_and(|item| item.main.eq_ignore_ascii_case("critical"))
    });
    if critical {
        Acuity::Critical
    } else {
        Acuity::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::ThresholdTable;
    use chrono::TimeZone;
    use handoff_core::SelectionKey;

    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn abnormal_fields_come_from_patient_measurements() {
        let mut patient = Patient::new("p", "Patient");
        patient.vitals.insert("HR".into(), "135".into());
        patient.vitals.insert("RR".into(), "16".into());
        patient.labs.insert("K".into(), "6.4".into());

        let evaluator = AbnormalValueEvaluator::new(ThresholdTable::builtin());
        let context = build_context(
            &patient,
            &SelectionStore::new(),
            &evaluator,
            &EngineConfig::default(),
            morning(),
        );

        assert!(context.has_abnormal_values);
        assert_eq!(context.abnormal_fields, vec!["HR".to_string(), "K".to_string()]);
        assert_eq!(context.time_of_day, TimeOfDay::Morning);
        assert_eq!(context.acuity, Acuity::Stable);
    }

    #[test]
    fn critical_status_item_sets_acuity() {
        let mut selections = SelectionStore::new();
        selections.toggle(SelectionKey::new("status", "acuity", "Critical"), None, morning());

        let evaluator = AbnormalValueEvaluator::new(ThresholdTable::builtin());
        let context = build_context(
            &Patient::new("p", "Patient"),
            &selections,
            &evaluator,
            &EngineConfig::default(),
            morning(),
        );
        assert_eq!(context.acuity, Acuity::Critical);
        assert_eq!(context.recent_items, vec!["Critical".to_string()]);
    }

    #[test]
    fn offset_shifts_the_shift_bucket() {
        let late_utc = Utc.with_ymd_and_hms(2026, 3, 1, 23, 0, 0).unwrap();
        assert_eq!(time_of_day(late_utc, 0), TimeOfDay::Night);
        assert_eq!(time_of_day(late_utc, 7 * 60), TimeOfDay::Morning);
        assert_eq!(time_of_day(late_utc, -5 * 60), TimeOfDay::Evening);
    }
}
