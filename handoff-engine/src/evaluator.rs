//! Classifies free-text vital/lab values against the threshold table.
//!
//! Evaluation is fail-open: blank or non-numeric input is never abnormal.

use handoff_core::{FieldKind, Severity};

use crate::thresholds::{ThresholdSpec, ThresholdTable, DIASTOLIC_RANGE, SYSTOLIC_RANGE};

/// Which side of the normal range a value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachSide {
    Low,
    High,
}

/// Result of classifying one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub severity: Severity,
    pub side: Option<BreachSide>,
}

impl Evaluation {
    const NORMAL: Evaluation = Evaluation {
        severity: Severity::Info,
        side: None,
    };

    fn breach(severity: Severity, side: BreachSide) -> Self {
        Evaluation {
            severity,
            side: Some(side),
        }
    }

    pub fn is_abnormal(&self) -> bool {
        self.side.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AbnormalValueEvaluator<'a> {
    table: &'a ThresholdTable,
}

impl<'a> AbnormalValueEvaluator<'a> {
    pub fn new(table: &'a ThresholdTable) -> Self {
        Self { table }
    }

    pub fn evaluate(&self, kind: FieldKind, field: &str, value: &str) -> Evaluation {
        if kind == FieldKind::Vital && is_blood_pressure(field) && value.contains('/') {
            return parse_blood_pressure(value)
                .map(classify_blood_pressure)
                .unwrap_or(Evaluation::NORMAL);
        }

        let Some(spec) = self.table.lookup(kind, field) else {
            return Evaluation::NORMAL;
        };
        let Some(numeric) = leading_number(value) else {
            return Evaluation::NORMAL;
        };

        classify_scalar(spec, numeric)
    }

    pub fn is_abnormal(&self, kind: FieldKind, field: &str, value: &str) -> bool {
        self.evaluate(kind, field, value).is_abnormal()
    }

    /// Trigger strings configured for the side the value breached.
    pub fn triggers_for(&self, kind: FieldKind, field: &str, value: &str) -> Vec<String> {
        let evaluation = self.evaluate(kind, field, value);
        let Some(side) = evaluation.side else {
            return Vec::new();
        };
        let Some(spec) = self.table.lookup(kind, field) else {
            return Vec::new();
        };

        match side {
            BreachSide::High => spec.triggers_high.clone(),
            BreachSide::Low => spec.triggers_low.clone(),
        }
    }
}

fn classify_scalar(spec: &ThresholdSpec, value: f64) -> Evaluation {
    if spec.critical_high.is_some_and(|bound| value >= bound) {
        return Evaluation::breach(Severity::Critical, BreachSide::High);
    }
    if spec.critical_low.is_some_and(|bound| value <= bound) {
        return Evaluation::breach(Severity::Critical, BreachSide::Low);
    }
    if spec.high.is_some_and(|bound| value > bound) || spec.max.is_some_and(|bound| value > bound)
    {
        return Evaluation::breach(Severity::High, BreachSide::High);
    }
    if spec.low.is_some_and(|bound| value < bound) || spec.min.is_some_and(|bound| value < bound) {
        return Evaluation::breach(Severity::High, BreachSide::Low);
    }
    Evaluation::NORMAL
}

fn classify_blood_pressure((systolic, diastolic): (f64, f64)) -> Evaluation {
    let (sys_low, sys_high) = SYSTOLIC_RANGE;
    let (dia_low, dia_high) = DIASTOLIC_RANGE;

    let severity = if systolic >= 180.0 || diastolic >= 120.0 || systolic < 70.0 {
        Severity::Critical
    } else {
        Severity::High
    };

    if systolic > sys_high || diastolic > dia_high {
        Evaluation::breach(severity, BreachSide::High)
    } else if systolic < sys_low || diastolic < dia_low {
        Evaluation::breach(severity, BreachSide::Low)
    } else {
        Evaluation::NORMAL
    }
}

fn is_blood_pressure(field: &str) -> bool {
    field.eq_ignore_ascii_case("bp") || field.eq_ignore_ascii_case("blood pressure")
}

fn parse_blood_pressure(value: &str) -> Option<(f64, f64)> {
    let (sys, dia) = value.trim().split_once('/')?;
    Some((leading_number(sys)?, leading_number(dia)?))
}

/// Reads the longest numeric prefix, so `"135 bpm"` reads as 135, `"6.5."` as 6.5
/// and `"1.5e2"` as 150. Text without leading digits is not a number.
fn leading_number(value: &str) -> Option<f64> {
    let text = value.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = count_digits(&bytes[end..]);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = count_digits(&bytes[end + 1..]);
        end += 1 + fraction;
    }
    if integer + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = count_digits(&bytes[exponent..]);
        if digits > 0 {
            end = exponent + digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|number| number.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> AbnormalValueEvaluator<'static> {
        AbnormalValueEvaluator::new(ThresholdTable::builtin())
    }

    #[test]
    fn blank_and_free_text_values_are_never_abnormal() {
        let eval = evaluator();
        assert!(!eval.is_abnormal(FieldKind::Vital, "HR", ""));
        assert!(!eval.is_abnormal(FieldKind::Vital, "HR", "   "));
        assert!(!eval.is_abnormal(FieldKind::Vital, "HR", "irregular"));
        assert!(eval.triggers_for(FieldKind::Vital, "HR", "n/a").is_empty());
    }

    #[test]
    fn units_after_the_number_are_ignored() {
        let eval = evaluator();
        assert!(eval.is_abnormal(FieldKind::Vital, "HR", "135 bpm"));
        assert!(!eval.is_abnormal(FieldKind::Vital, "HR", "72 bpm"));
    }

    #[test]
    fn trailing_punctuation_ends_the_number() {
        let eval = evaluator();
        assert!(eval.is_abnormal(FieldKind::Lab, "K", "6.5."));
        assert!(eval.is_abnormal(FieldKind::Vital, "HR", "135,"));
        assert!(!eval.is_abnormal(FieldKind::Vital, "HR", "72."));
        assert_eq!(leading_number("98.6.1"), Some(98.6));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("-."), None);
    }

    #[test]
    fn exponents_are_read_only_when_complete() {
        let eval = evaluator();
        assert_eq!(
            eval.evaluate(FieldKind::Vital, "HR", "1.5e2").side,
            Some(BreachSide::High)
        );
        assert_eq!(leading_number("1.5e2"), Some(150.0));
        assert_eq!(leading_number("2E-1 mmol"), Some(0.2));
        assert_eq!(leading_number("72e"), Some(72.0));
        assert_eq!(leading_number("72e+"), Some(72.0));
        assert!(!eval.is_abnormal(FieldKind::Vital, "HR", "72e"));
    }

    #[test]
    fn critical_bounds_are_inclusive_and_soft_bounds_exclusive() {
        let eval = evaluator();
        assert_eq!(
            eval.evaluate(FieldKind::Vital, "HR", "120").severity,
            Severity::Critical
        );
        assert_eq!(
            eval.evaluate(FieldKind::Vital, "HR", "101").severity,
            Severity::High
        );
        assert!(!eval.is_abnormal(FieldKind::Vital, "HR", "100"));
        assert!(!eval.is_abnormal(FieldKind::Vital, "HR", "60"));
        assert_eq!(
            eval.evaluate(FieldKind::Vital, "HR", "40").side,
            Some(BreachSide::Low)
        );
    }

    #[test]
    fn min_max_style_bounds_are_checked() {
        let eval = evaluator();
        assert!(eval.is_abnormal(FieldKind::Vital, "Pain", "11"));
        assert!(eval.is_abnormal(FieldKind::Vital, "Pain", "-1"));
        assert!(!eval.is_abnormal(FieldKind::Vital, "Pain", "4"));
        assert!(eval.is_abnormal(FieldKind::Vital, "SpO2", "101"));
    }

    #[test]
    fn blood_pressure_uses_fixed_bounds() {
        let eval = evaluator();
        assert!(!eval.is_abnormal(FieldKind::Vital, "BP", "120/80"));
        assert!(!eval.is_abnormal(FieldKind::Vital, "BP", "140/90"));
        assert!(eval.is_abnormal(FieldKind::Vital, "BP", "141/80"));
        assert!(eval.is_abnormal(FieldKind::Vital, "BP", "120/59"));
        assert!(eval.is_abnormal(FieldKind::Vital, "Blood Pressure", "85/50"));
        assert!(!eval.is_abnormal(FieldKind::Vital, "BP", "120/"));

        assert_eq!(
            eval.triggers_for(FieldKind::Vital, "BP", "160/95"),
            vec!["assessment-cardiac-Hypertension".to_string()]
        );
        assert_eq!(
            eval.triggers_for(FieldKind::Vital, "BP", "82/50"),
            vec!["assessment-cardiac-Hypotension".to_string()]
        );
    }

    #[test]
    fn triggers_follow_the_breached_side() {
        let eval = evaluator();
        assert_eq!(
            eval.triggers_for(FieldKind::Lab, "K", "2.9"),
            vec!["assessment-renal-Hypokalemia".to_string()]
        );
        assert_eq!(eval.triggers_for(FieldKind::Lab, "K", "6.2").len(), 2);
        assert!(eval.triggers_for(FieldKind::Lab, "K", "4.1").is_empty());
        assert!(eval.triggers_for(FieldKind::Lab, "BUN", "45").is_empty());
        assert!(eval.is_abnormal(FieldKind::Lab, "BUN", "45"));
    }

    #[test]
    fn unknown_fields_have_no_threshold() {
        let eval = evaluator();
        assert!(!eval.is_abnormal(FieldKind::Lab, "Unobtainium", "9999"));
    }
}
