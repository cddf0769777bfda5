//! Button catalog: resolves a suggested item name back into the selectable
//! `(category, section, item)` triple the UI would have produced.

use handoff_core::SelectionKey;
use serde::{Deserialize, Serialize};

/// How a name was matched against the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    /// `label` or `label:option` equals the name.
    ExactLabel,
    /// Same as exact, ignoring ASCII case.
    CaseInsensitiveLabel,
    /// The name is one of a button's sub-options; resolves to `label:option`.
    SubOption,
}

/// Strategies are tried in this order; the first hit wins.
pub const RESOLUTION_PRIORITY: [ResolutionStrategy; 3] = [
    ResolutionStrategy::ExactLabel,
    ResolutionStrategy::CaseInsensitiveLabel,
    ResolutionStrategy::SubOption,
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ButtonDef {
    pub label: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ButtonGroup {
    pub category: String,
    pub section: String,
    pub buttons: Vec<ButtonDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedItem {
    pub key: SelectionKey,
    pub strategy: ResolutionStrategy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ButtonCatalog {
    pub groups: Vec<ButtonGroup>,
}

impl ButtonCatalog {
    pub fn builtin() -> &'static ButtonCatalog {
        &crate::knowledge::shared().catalog
    }

    pub fn new(groups: Vec<ButtonGroup>) -> Self {
        Self { groups }
    }

    pub fn resolve(&self, name: &str) -> Option<ResolvedItem> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        RESOLUTION_PRIORITY.iter().find_map(|strategy| {
            self.resolve_with(*strategy, name)
                .map(|key| ResolvedItem {
                    key,
                    strategy: *strategy,
                })
        })
    }

    fn resolve_with(&self, strategy: ResolutionStrategy, name: &str) -> Option<SelectionKey> {
        for group in &self.groups {
            for button in &group.buttons {
                let hit = match strategy {
                    ResolutionStrategy::ExactLabel => label_forms(button).find(|form| form == name),
                    ResolutionStrategy::CaseInsensitiveLabel => {
                        label_forms(button).find(|form| form.eq_ignore_ascii_case(name))
                    }
                    ResolutionStrategy::SubOption => button
                        .options
                        .iter()
                        .find(|option| option.eq_ignore_ascii_case(name))
                        .map(|option| format!("{}:{option}", button.label)),
                };
                if let Some(item) = hit {
                    return Some(SelectionKey::new(&group.category, &group.section, item));
                }
            }
        }
        None
    }
}

fn label_forms(button: &ButtonDef) -> impl Iterator<Item = String> + '_ {
    std::iter::once(button.label.clone()).chain(
        button
            .options
            .iter()
            .map(move |option| format!("{}:{option}", button.label)),
    )
}

fn group(category: &str, section: &str, labels: &[&str]) -> ButtonGroup {
    ButtonGroup {
        category: category.to_string(),
        section: section.to_string(),
        buttons: labels
            .iter()
            .map(|label| ButtonDef {
                label: label.to_string(),
                options: Vec::new(),
            })
            .collect(),
    }
}

fn with_options(mut group: ButtonGroup, label: &str, options: &[&str]) -> ButtonGroup {
    group.buttons.push(ButtonDef {
        label: label.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
    });
    group
}

pub(crate) fn builtin_catalog() -> ButtonCatalog {
    ButtonCatalog::new(vec![
        group("status", "acuity", &["Stable", "Guarded", "Critical"]),
        group(
            "status",
            "code",
            &["Full Code", "DNR", "DNI", "Comfort Care"],
        ),
        group(
            "vitals",
            "vitals",
            &["HR", "RR", "SpO2", "Temp", "BP", "MAP", "Pain", "GCS", "Glucose"],
        ),
        group(
            "labs",
            "chemistry",
            &[
                "K", "Na", "Glucose", "Creatinine", "BUN", "Mg", "Lactate", "Troponin", "BMP",
                "Repeat BMP", "Magnesium", "Phosphorus", "Lipase", "Ammonia", "BNP", "Procalcitonin",
                "Serial Troponins", "TSH", "HbA1c", "Digoxin Level", "Vancomycin Trough",
            ],
        ),
        group(
            "labs",
            "hematology",
            &["WBC", "Hgb", "Platelets", "INR", "CBC", "PT/INR", "aPTT", "D-Dimer", "Type and Screen"],
        ),
        group(
            "labs",
            "microbiology",
            &["Blood Cultures", "Urine Culture", "Sputum Culture", "Urinalysis", "C. diff Test"],
        ),
        group("labs", "respiratory", &["ABG", "pH"]),
        with_options(
            group(
                "history",
                "history",
                &["Diabetes", "CHF", "COPD", "CKD", "Asthma", "HTN", "Dialysis"],
            ),
            "Allergies",
            &["PCN", "Sulfa", "Latex", "Iodine", "Morphine", "Codeine", "NKDA"],
        ),
        group(
            "assessment",
            "cardiac",
            &[
                "Chest Pain",
                "Tachycardia",
                "Bradycardia",
                "Atrial Fibrillation",
                "Hypertension",
                "Hypotension",
                "Acute Coronary Syndrome",
                "Syncope",
            ],
        ),
        group(
            "assessment",
            "respiratory",
            &[
                "Shortness of Breath",
                "Hypoxia",
                "Tachypnea",
                "Bradypnea",
                "Pneumonia",
                "Acidosis",
                "Alkalosis",
            ],
        ),
        group(
            "assessment",
            "neuro",
            &[
                "Stroke Symptoms",
                "Seizure",
                "Altered Mental Status",
                "Delirium",
                "Head Injury",
            ],
        ),
        group(
            "assessment",
            "infection",
            &["Sepsis", "Leukocytosis", "UTI", "Cellulitis", "C. diff", "MRSA"],
        ),
        group(
            "assessment",
            "general",
            &["Fever", "Hypothermia", "Pain", "Dehydration", "Nausea", "Vomiting", "Fall"],
        ),
        group(
            "assessment",
            "renal",
            &[
                "Acute Kidney Injury",
                "Hyperkalemia",
                "Hypokalemia",
                "Hyponatremia",
                "Hypernatremia",
                "Hypomagnesemia",
                "Urinary Retention",
            ],
        ),
        group(
            "assessment",
            "endocrine",
            &["Hypoglycemia", "Hyperglycemia", "DKA"],
        ),
        group(
            "assessment",
            "hematology",
            &["Anemia", "Thrombocytopenia", "GI Bleed"],
        ),
        group(
            "medications",
            "active",
            &[
                "Aspirin",
                "Nitroglycerin",
                "Heparin",
                "Enoxaparin",
                "Warfarin",
                "Insulin",
                "Sliding Scale Insulin",
                "Morphine",
                "Hydromorphone",
                "Oxycodone",
                "Fentanyl",
                "Lorazepam",
                "Haloperidol",
                "Furosemide",
                "Metoprolol",
                "Digoxin",
                "Amiodarone",
                "Vancomycin",
                "Broad-Spectrum Antibiotics",
                "Ceftriaxone",
                "Potassium Chloride",
                "Magnesium Sulfate",
                "Ondansetron",
                "Pantoprazole",
                "Acetaminophen",
                "Naloxone",
                "Dextrose 50%",
                "Glucagon",
                "Albuterol",
                "Norepinephrine",
            ],
        ),
        group(
            "interventions",
            "diagnostics",
            &[
                "EKG",
                "Chest X-Ray",
                "CT Head",
                "CT Angiogram",
                "Echocardiogram",
                "NIHSS",
                "Bladder Scan",
                "Fingerstick Glucose",
            ],
        ),
        group(
            "interventions",
            "monitoring",
            &[
                "Cardiac Monitoring",
                "Continuous Cardiac Monitoring",
                "Telemetry",
                "Pulse Oximetry",
                "Continuous Pulse Oximetry",
                "Neuro Checks",
                "Repeat Vitals",
                "Vitals Q15 Minutes",
                "Orthostatic Vitals",
                "Strict I&O",
                "Daily Weights",
                "Sedation Assessment",
            ],
        ),
        group(
            "interventions",
            "respiratory",
            &[
                "Supplemental Oxygen",
                "Nasal Cannula",
                "BiPAP",
                "Incentive Spirometry",
                "Suction Setup",
                "Head of Bed Elevated",
            ],
        ),
        group(
            "interventions",
            "treatment",
            &[
                "IV Fluids",
                "Normal Saline Bolus",
                "Insulin Drip",
                "Hypoglycemia Protocol",
                "CIWA Protocol",
                "Blood Transfusion",
                "Pain Reassessment",
                "Wound Care",
                "Turn Q2H",
                "Skin Assessment",
                "Swallow Screen",
            ],
        ),
        group(
            "interventions",
            "diet",
            &[
                "NPO",
                "Regular Diet",
                "Clear Liquid Diet",
                "Diabetic Diet",
                "Cardiac Diet",
                "Renal Diet",
                "Fluid Restriction",
            ],
        ),
        group(
            "interventions",
            "activity",
            &["Bed Rest", "Ambulation", "Ambulate Independently", "SCDs"],
        ),
        group(
            "interventions",
            "escalation",
            &[
                "Notify MD",
                "Rapid Response Team",
                "Code Blue",
                "Critical Care Protocol",
                "Stroke Team",
            ],
        ),
        group(
            "precautions",
            "safety",
            &[
                "Fall Precautions",
                "Seizure Precautions",
                "Aspiration Precautions",
                "Bleeding Precautions",
                "Bed Alarm",
                "Sitter",
                "Restraints",
            ],
        ),
        group(
            "precautions",
            "isolation",
            &[
                "Contact Isolation",
                "Droplet Isolation",
                "Airborne Isolation",
                "Neutropenic Precautions",
            ],
        ),
        group(
            "consults",
            "consults",
            &[
                "Cardiology Consult",
                "Physical Therapy Consult",
                "Speech Therapy Consult",
                "Respiratory Therapy Consult",
                "Wound Care Consult",
                "Dietitian Consult",
                "Social Work Consult",
                "Psychiatry Consult",
                "Palliative Care Consult",
                "Case Management",
                "Chaplain",
            ],
        ),
        group(
            "devices",
            "lines",
            &[
                "Peripheral IV",
                "Central Line",
                "PICC Line",
                "Foley Catheter",
                "NG Tube",
                "Chest Tube",
                "Tracheostomy",
                "Ventilator",
                "PCA Pump",
                "Wound VAC",
            ],
        ),
    ])
}
