//! Hard-coded contextual bundles: a selected presenting problem pulls in a
//! fixed work-up at a fixed score, independent of the relationship graph.

pub const BUNDLE_SCORE: f64 = 0.8;

pub(crate) fn builtin_bundles() -> BundleTable {
    BundleTable::from_static(&[
        (
            "Chest Pain",
            &["EKG", "Troponin", "Aspirin", "Nitroglycerin"],
        ),
        (
            "Shortness of Breath",
            &["Pulse Oximetry", "Chest X-Ray", "ABG", "Supplemental Oxygen"],
        ),
        (
            "Sepsis",
            &[
                "Blood Cultures",
                "Lactate",
                "Broad-Spectrum Antibiotics",
                "IV Fluids",
            ],
        ),
        (
            "Stroke Symptoms",
            &["CT Head", "NIHSS", "Fingerstick Glucose", "Stroke Team"],
        ),
        (
            "Fall",
            &[
                "Fall Precautions",
                "Neuro Checks",
                "Post-Fall Huddle",
                "Incident Report",
            ],
        ),
        (
            "Hypoglycemia",
            &[
                "Dextrose 50%",
                "Fingerstick Glucose",
                "Hypoglycemia Protocol",
                "Recheck Glucose in 15 Minutes",
            ],
        ),
    ])
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextualBundle {
    pub trigger: String,
    pub items: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BundleTable {
    bundles: Vec<ContextualBundle>,
}

impl BundleTable {
    pub fn builtin() -> &'static BundleTable {
        &crate::knowledge::shared().bundles
    }

    pub fn new(bundles: Vec<ContextualBundle>) -> Self {
        Self { bundles }
    }

    fn from_static(rows: &[(&str, &[&str])]) -> Self {
        Self::new(
            rows.iter()
                .map(|(trigger, items)| ContextualBundle {
                    trigger: trigger.to_string(),
                    items: items.iter().map(|item| item.to_string()).collect(),
                    score: BUNDLE_SCORE,
                })
                .collect(),
        )
    }

    /// Bundles fired by a selected item name.
    pub fn matching<'a>(&'a self, item: &'a str) -> impl Iterator<Item = &'a ContextualBundle> {
        self.bundles
            .iter()
            .filter(move |bundle| bundle.trigger == item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContextualBundle> {
        self.bundles.iter()
    }
}
