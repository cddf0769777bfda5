//! Authored affinity scores between clinical items.
//!
//! Each row is `(item, [(related item, score)])`. Scores are hand-tuned
//! constants in `[0, 1]`; anything at or below the suggestion cut-off is kept
//! for documentation value but never surfaces as a suggestion.

pub(crate) type RelationRow = (&'static str, &'static [(&'static str, f64)]);

pub(crate) const RELATIONSHIP_DATA: &[RelationRow] = &[
    // Cardiac
    (
        "Chest Pain",
        &[
            ("EKG", 0.95),
            ("Troponin", 0.9),
            ("Cardiac Monitoring", 0.85),
            ("Aspirin", 0.75),
            ("Nitroglycerin", 0.7),
            ("Chest X-Ray", 0.6),
            ("Anxiety", 0.3),
        ],
    ),
    (
        "Acute Coronary Syndrome",
        &[
            ("Heparin", 0.85),
            ("Aspirin", 0.9),
            ("Clopidogrel", 0.75),
            ("Serial Troponins", 0.9),
            ("Cardiology Consult", 0.85),
            ("Cardiac Diet", 0.55),
            ("Echocardiogram", 0.7),
        ],
    ),
    (
        "Myocardial Infarction",
        &[
            ("Cardiology Consult", 0.95),
            ("Heparin", 0.85),
            ("Metoprolol", 0.7),
            ("Echocardiogram", 0.8),
            ("Cardiac Rehab", 0.5),
        ],
    ),
    (
        "Tachycardia",
        &[
            ("EKG", 0.9),
            ("Continuous Cardiac Monitoring", 0.85),
            ("TSH", 0.55),
            ("Pain Reassessment", 0.6),
            ("IV Fluids", 0.6),
            ("Metoprolol", 0.45),
        ],
    ),
    (
        "Bradycardia",
        &[
            ("EKG", 0.9),
            ("Continuous Cardiac Monitoring", 0.85),
            ("Atropine", 0.65),
            ("Transcutaneous Pacing Pads", 0.6),
            ("Digoxin Level", 0.55),
        ],
    ),
    (
        "Atrial Fibrillation",
        &[
            ("Telemetry", 0.9),
            ("Diltiazem", 0.7),
            ("Metoprolol", 0.7),
            ("Anticoagulation", 0.8),
            ("Echocardiogram", 0.65),
            ("TSH", 0.6),
            ("Fall Precautions", 0.5),
        ],
    ),
    (
        "Hypertension",
        &[
            ("Repeat Vitals", 0.8),
            ("Lisinopril", 0.6),
            ("Amlodipine", 0.6),
            ("Headache Assessment", 0.55),
            ("Cardiac Diet", 0.5),
        ],
    ),
    (
        "Hypotension",
        &[
            ("IV Fluids", 0.9),
            ("Normal Saline Bolus", 0.85),
            ("Repeat Vitals", 0.85),
            ("Lactate", 0.75),
            ("Fall Precautions", 0.65),
            ("Norepinephrine", 0.55),
            ("Trendelenburg", 0.2),
        ],
    ),
    (
        "CHF",
        &[
            ("Daily Weights", 0.95),
            ("Strict I&O", 0.9),
            ("Furosemide", 0.85),
            ("BNP", 0.8),
            ("Fluid Restriction", 0.8),
            ("Cardiac Diet", 0.75),
            ("Chest X-Ray", 0.6),
            ("Potassium Chloride", 0.4),
        ],
    ),
    (
        "Cardiac Arrest",
        &[
            ("Code Blue", 0.99),
            ("Epinephrine", 0.9),
            ("Defibrillator", 0.95),
            ("ABG", 0.7),
            ("Post-Arrest Care", 0.8),
        ],
    ),
    // Respiratory
    (
        "Shortness of Breath",
        &[
            ("Pulse Oximetry", 0.9),
            ("Supplemental Oxygen", 0.85),
            ("Chest X-Ray", 0.85),
            ("ABG", 0.7),
            ("Albuterol", 0.6),
            ("BNP", 0.55),
            ("D-Dimer", 0.5),
        ],
    ),
    (
        "Hypoxia",
        &[
            ("Supplemental Oxygen", 0.95),
            ("Pulse Oximetry", 0.9),
            ("ABG", 0.8),
            ("Chest X-Ray", 0.75),
            ("Respiratory Therapy Consult", 0.7),
            ("Incentive Spirometry", 0.55),
            ("Head of Bed Elevated", 0.65),
        ],
    ),
    (
        "Tachypnea",
        &[
            ("Pulse Oximetry", 0.85),
            ("ABG", 0.7),
            ("Chest X-Ray", 0.65),
            ("Anxiety", 0.4),
            ("Lactate", 0.6),
        ],
    ),
    (
        "Bradypnea",
        &[
            ("Naloxone", 0.8),
            ("Sedation Assessment", 0.85),
            ("ABG", 0.7),
            ("Continuous Pulse Oximetry", 0.8),
        ],
    ),
    (
        "Pneumonia",
        &[
            ("Blood Cultures", 0.8),
            ("Sputum Culture", 0.75),
            ("Ceftriaxone", 0.7),
            ("Incentive Spirometry", 0.8),
            ("Chest X-Ray", 0.85),
            ("Droplet Isolation", 0.5),
            ("Procalcitonin", 0.6),
        ],
    ),
    (
        "COPD",
        &[
            ("Albuterol", 0.85),
            ("Ipratropium", 0.75),
            ("Prednisone", 0.65),
            ("BiPAP", 0.6),
            ("Nasal Cannula", 0.7),
            ("ABG", 0.6),
            ("Smoking Cessation", 0.55),
        ],
    ),
    (
        "Asthma",
        &[
            ("Albuterol", 0.9),
            ("Peak Flow", 0.7),
            ("Prednisone", 0.65),
            ("Pulse Oximetry", 0.75),
        ],
    ),
    (
        "Pulmonary Embolism",
        &[
            ("CT Angiogram", 0.9),
            ("Heparin", 0.9),
            ("D-Dimer", 0.6),
            ("Supplemental Oxygen", 0.75),
            ("Echocardiogram", 0.55),
            ("Bleeding Precautions", 0.6),
        ],
    ),
    (
        "Ventilator",
        &[
            ("ABG", 0.9),
            ("Oral Care Q4H", 0.85),
            ("Head of Bed Elevated", 0.9),
            ("Sedation Assessment", 0.85),
            ("Suction Setup", 0.8),
            ("Pantoprazole", 0.6),
            ("Restraints", 0.45),
        ],
    ),
    (
        "BiPAP",
        &[
            ("ABG", 0.85),
            ("Aspiration Precautions", 0.75),
            ("Skin Assessment", 0.6),
            ("Respiratory Therapy Consult", 0.8),
        ],
    ),
    (
        "Tracheostomy",
        &[
            ("Suction Setup", 0.95),
            ("Trach Care", 0.95),
            ("Spare Trach at Bedside", 0.9),
            ("Humidified Oxygen", 0.75),
            ("Speech Therapy Consult", 0.55),
        ],
    ),
    (
        "Chest Tube",
        &[
            ("Chest X-Ray", 0.9),
            ("Pain Reassessment", 0.7),
            ("Incentive Spirometry", 0.75),
            ("Dressing Change", 0.65),
        ],
    ),
    (
        "Acidosis",
        &[
            ("ABG", 0.9),
            ("BMP", 0.8),
            ("Lactate", 0.75),
            ("Notify MD", 0.7),
        ],
    ),
    (
        "Alkalosis",
        &[
            ("ABG", 0.85),
            ("BMP", 0.75),
            ("Potassium Chloride", 0.45),
        ],
    ),
    // Infection
    (
        "Sepsis",
        &[
            ("Blood Cultures", 0.95),
            ("Lactate", 0.95),
            ("Broad-Spectrum Antibiotics", 0.9),
            ("IV Fluids", 0.85),
            ("Strict I&O", 0.7),
            ("Procalcitonin", 0.6),
            ("Foley Catheter", 0.45),
        ],
    ),
    (
        "Fever",
        &[
            ("Blood Cultures", 0.8),
            ("Acetaminophen", 0.85),
            ("CBC", 0.75),
            ("Urinalysis", 0.6),
            ("Chest X-Ray", 0.55),
            ("Cooling Blanket", 0.35),
        ],
    ),
    (
        "Hypothermia",
        &[
            ("Warming Blanket", 0.9),
            ("Repeat Vitals", 0.8),
            ("Blood Glucose Check", 0.6),
            ("TSH", 0.4),
        ],
    ),
    (
        "Leukocytosis",
        &[
            ("Blood Cultures", 0.7),
            ("Procalcitonin", 0.6),
            ("Urinalysis", 0.55),
            ("CBC", 0.65),
        ],
    ),
    (
        "UTI",
        &[
            ("Urinalysis", 0.9),
            ("Urine Culture", 0.9),
            ("Ceftriaxone", 0.6),
            ("Strict I&O", 0.5),
        ],
    ),
    (
        "Cellulitis",
        &[
            ("Mark Borders", 0.85),
            ("Cefazolin", 0.7),
            ("Elevate Extremity", 0.75),
            ("Wound Care Consult", 0.55),
            ("Blood Cultures", 0.45),
        ],
    ),
    (
        "C. diff",
        &[
            ("Contact Isolation", 0.95),
            ("Stool Culture", 0.8),
            ("Oral Vancomycin", 0.75),
            ("Strict I&O", 0.65),
            ("Skin Assessment", 0.6),
        ],
    ),
    (
        "MRSA",
        &[
            ("Contact Isolation", 0.95),
            ("Vancomycin", 0.75),
            ("Vancomycin Trough", 0.6),
        ],
    ),
    (
        "Tuberculosis",
        &[
            ("Airborne Isolation", 0.99),
            ("N95 Respirator", 0.9),
            ("Sputum Culture", 0.85),
            ("Infection Control Notification", 0.8),
        ],
    ),
    (
        "Influenza",
        &[
            ("Droplet Isolation", 0.95),
            ("Oseltamivir", 0.8),
            ("Acetaminophen", 0.55),
        ],
    ),
    (
        "COVID-19",
        &[
            ("Airborne Isolation", 0.85),
            ("Droplet Isolation", 0.85),
            ("Pulse Oximetry", 0.85),
            ("Prone Positioning", 0.5),
            ("D-Dimer", 0.55),
        ],
    ),
    (
        "Neutropenic Precautions",
        &[
            ("No Fresh Flowers", 0.8),
            ("Private Room", 0.85),
            ("CBC", 0.8),
            ("Temperature Q4H", 0.75),
        ],
    ),
    (
        "Immunocompromised",
        &[
            ("Neutropenic Precautions", 0.75),
            ("Hand Hygiene Reinforcement", 0.7),
            ("CBC", 0.6),
        ],
    ),
    // Endocrine
    (
        "Diabetes",
        &[
            ("Fingerstick Glucose", 0.95),
            ("Insulin", 0.8),
            ("Diabetic Diet", 0.9),
            ("HbA1c", 0.6),
            ("Foot Assessment", 0.55),
            ("Hypoglycemia Protocol", 0.7),
            ("Metformin", 0.5),
        ],
    ),
    (
        "DKA",
        &[
            ("Insulin Drip", 0.95),
            ("BMP", 0.9),
            ("IV Fluids", 0.9),
            ("Potassium Chloride", 0.75),
            ("Fingerstick Glucose", 0.9),
            ("ABG", 0.7),
            ("Strict I&O", 0.75),
        ],
    ),
    (
        "Hypoglycemia",
        &[
            ("Dextrose 50%", 0.9),
            ("Glucagon", 0.75),
            ("Fingerstick Glucose", 0.95),
            ("Hypoglycemia Protocol", 0.9),
            ("Hold Insulin", 0.7),
        ],
    ),
    (
        "Hyperglycemia",
        &[
            ("Fingerstick Glucose", 0.9),
            ("Sliding Scale Insulin", 0.8),
            ("Diabetic Diet", 0.7),
            ("HbA1c", 0.55),
            ("BMP", 0.6),
        ],
    ),
    (
        "Insulin Drip",
        &[
            ("Fingerstick Glucose", 0.95),
            ("BMP", 0.8),
            ("Potassium Chloride", 0.6),
            ("Hypoglycemia Protocol", 0.8),
        ],
    ),
    (
        "Insulin",
        &[
            ("Fingerstick Glucose", 0.9),
            ("Hypoglycemia Protocol", 0.75),
            ("Diabetic Diet", 0.6),
        ],
    ),
    // Renal and electrolytes
    (
        "Acute Kidney Injury",
        &[
            ("Strict I&O", 0.9),
            ("BMP", 0.9),
            ("Renal Diet", 0.65),
            ("Hold Nephrotoxins", 0.8),
            ("Renal Ultrasound", 0.6),
            ("Daily Weights", 0.75),
            ("Nephrology Consult", 0.55),
        ],
    ),
    (
        "CKD",
        &[
            ("Renal Diet", 0.85),
            ("BMP", 0.8),
            ("Fluid Restriction", 0.6),
            ("Phosphorus", 0.6),
            ("Avoid BP in Fistula Arm", 0.7),
        ],
    ),
    (
        "Dialysis",
        &[
            ("Avoid BP in Fistula Arm", 0.95),
            ("Daily Weights", 0.8),
            ("BMP", 0.8),
            ("Renal Diet", 0.8),
            ("Fluid Restriction", 0.75),
        ],
    ),
    (
        "Hyperkalemia",
        &[
            ("EKG", 0.9),
            ("Continuous Cardiac Monitoring", 0.85),
            ("Calcium Gluconate", 0.8),
            ("Insulin", 0.6),
            ("Dextrose 50%", 0.55),
            ("Repeat BMP", 0.85),
            ("Kayexalate", 0.5),
        ],
    ),
    (
        "Hypokalemia",
        &[
            ("Potassium Chloride", 0.9),
            ("Magnesium", 0.75),
            ("EKG", 0.7),
            ("Repeat BMP", 0.8),
        ],
    ),
    (
        "Hyponatremia",
        &[
            ("Fluid Restriction", 0.8),
            ("Seizure Precautions", 0.6),
            ("Repeat BMP", 0.85),
            ("Neuro Checks", 0.65),
            ("Serum Osmolality", 0.55),
        ],
    ),
    (
        "Hypernatremia",
        &[
            ("Free Water Flushes", 0.75),
            ("Repeat BMP", 0.85),
            ("Strict I&O", 0.7),
            ("Neuro Checks", 0.55),
        ],
    ),
    (
        "Hypomagnesemia",
        &[
            ("Magnesium Sulfate", 0.9),
            ("EKG", 0.6),
            ("Repeat Magnesium", 0.8),
        ],
    ),
    (
        "Dehydration",
        &[
            ("IV Fluids", 0.9),
            ("Strict I&O", 0.85),
            ("BMP", 0.75),
            ("Oral Fluid Encouragement", 0.7),
            ("Orthostatic Vitals", 0.65),
        ],
    ),
    (
        "Foley Catheter",
        &[
            ("Catheter Care", 0.95),
            ("Strict I&O", 0.85),
            ("CAUTI Bundle", 0.85),
            ("Daily Necessity Review", 0.8),
            ("Urinalysis", 0.35),
        ],
    ),
    (
        "Urinary Retention",
        &[
            ("Bladder Scan", 0.95),
            ("Straight Catheterization", 0.75),
            ("Strict I&O", 0.7),
            ("Foley Catheter", 0.5),
        ],
    ),
    // Neuro
    (
        "Stroke Symptoms",
        &[
            ("CT Head", 0.95),
            ("NIHSS", 0.95),
            ("Neuro Checks", 0.9),
            ("Swallow Screen", 0.85),
            ("Fingerstick Glucose", 0.8),
            ("NPO", 0.8),
            ("Stroke Team", 0.9),
        ],
    ),
    (
        "Stroke",
        &[
            ("Neuro Checks", 0.9),
            ("Swallow Screen", 0.9),
            ("Aspiration Precautions", 0.8),
            ("Physical Therapy Consult", 0.75),
            ("Speech Therapy Consult", 0.7),
            ("Fall Precautions", 0.8),
            ("SCDs", 0.6),
        ],
    ),
    (
        "Seizure",
        &[
            ("Seizure Precautions", 0.95),
            ("Padded Side Rails", 0.8),
            ("Suction Setup", 0.85),
            ("Levetiracetam", 0.7),
            ("Lorazepam", 0.65),
            ("Neuro Checks", 0.8),
            ("EEG", 0.6),
        ],
    ),
    (
        "Altered Mental Status",
        &[
            ("Neuro Checks", 0.9),
            ("Fingerstick Glucose", 0.85),
            ("CT Head", 0.7),
            ("Fall Precautions", 0.8),
            ("Ammonia", 0.5),
            ("Urinalysis", 0.55),
            ("Sitter", 0.6),
        ],
    ),
    (
        "Delirium",
        &[
            ("CAM-ICU", 0.85),
            ("Reorientation", 0.8),
            ("Sleep Hygiene", 0.65),
            ("Fall Precautions", 0.8),
            ("Sitter", 0.65),
            ("Haloperidol", 0.45),
            ("Restraints", 0.3),
        ],
    ),
    (
        "Head Injury",
        &[
            ("CT Head", 0.95),
            ("Neuro Checks", 0.95),
            ("Hold Anticoagulation", 0.7),
            ("Fall Precautions", 0.75),
        ],
    ),
    (
        "Syncope",
        &[
            ("Orthostatic Vitals", 0.85),
            ("EKG", 0.85),
            ("Telemetry", 0.75),
            ("Fall Precautions", 0.85),
            ("Fingerstick Glucose", 0.6),
        ],
    ),
    (
        "Headache Assessment",
        &[
            ("Neuro Checks", 0.6),
            ("Acetaminophen", 0.55),
        ],
    ),
    // GI
    (
        "GI Bleed",
        &[
            ("Type and Screen", 0.9),
            ("CBC", 0.9),
            ("Pantoprazole", 0.85),
            ("Two Large-Bore IVs", 0.85),
            ("NPO", 0.75),
            ("Hold Anticoagulation", 0.8),
            ("GI Consult", 0.8),
        ],
    ),
    (
        "Nausea",
        &[
            ("Ondansetron", 0.9),
            ("Aspiration Precautions", 0.5),
            ("Strict I&O", 0.45),
        ],
    ),
    (
        "Vomiting",
        &[
            ("Ondansetron", 0.9),
            ("Aspiration Precautions", 0.75),
            ("BMP", 0.6),
            ("Strict I&O", 0.65),
            ("NPO", 0.55),
        ],
    ),
    (
        "Diarrhea",
        &[
            ("C. diff Test", 0.8),
            ("Contact Isolation", 0.7),
            ("Strict I&O", 0.65),
            ("Skin Assessment", 0.6),
        ],
    ),
    (
        "Constipation",
        &[
            ("Bowel Regimen", 0.85),
            ("Senna", 0.7),
            ("Ambulation", 0.5),
        ],
    ),
    (
        "Pancreatitis",
        &[
            ("Lipase", 0.9),
            ("NPO", 0.8),
            ("IV Fluids", 0.85),
            ("Pain Reassessment", 0.75),
        ],
    ),
    (
        "NG Tube",
        &[
            ("Placement Verification", 0.95),
            ("Head of Bed Elevated", 0.85),
            ("Oral Care Q4H", 0.7),
            ("Strict I&O", 0.6),
        ],
    ),
    (
        "Tube Feeding",
        &[
            ("Head of Bed Elevated", 0.9),
            ("Residual Checks", 0.75),
            ("Dietitian Consult", 0.8),
            ("Aspiration Precautions", 0.8),
        ],
    ),
    (
        "Dysphagia",
        &[
            ("Swallow Screen", 0.9),
            ("Speech Therapy Consult", 0.85),
            ("Aspiration Precautions", 0.9),
            ("Thickened Liquids", 0.7),
        ],
    ),
    (
        "Aspiration Precautions",
        &[
            ("Head of Bed Elevated", 0.9),
            ("Suction Setup", 0.7),
            ("Oral Care Q4H", 0.6),
        ],
    ),
    (
        "Liver Failure",
        &[
            ("Ammonia", 0.8),
            ("PT/INR", 0.85),
            ("Lactulose", 0.75),
            ("Bleeding Precautions", 0.7),
            ("Fall Precautions", 0.6),
        ],
    ),
    // Hematology and anticoagulation
    (
        "Anemia",
        &[
            ("CBC", 0.85),
            ("Type and Screen", 0.75),
            ("Iron Studies", 0.6),
            ("Fall Precautions", 0.5),
            ("Blood Transfusion", 0.55),
        ],
    ),
    (
        "Blood Transfusion",
        &[
            ("Type and Screen", 0.95),
            ("Transfusion Consent", 0.9),
            ("Vitals Q15 Minutes", 0.9),
            ("Post-Transfusion CBC", 0.75),
        ],
    ),
    (
        "Thrombocytopenia",
        &[
            ("Bleeding Precautions", 0.9),
            ("CBC", 0.85),
            ("Hold Heparin", 0.65),
        ],
    ),
    (
        "Bleeding Precautions",
        &[
            ("Soft Toothbrush", 0.7),
            ("Electric Razor", 0.7),
            ("Fall Precautions", 0.65),
            ("Avoid IM Injections", 0.6),
        ],
    ),
    (
        "Heparin",
        &[
            ("aPTT", 0.9),
            ("CBC", 0.75),
            ("Bleeding Precautions", 0.8),
            ("Anti-Xa Level", 0.6),
        ],
    ),
    (
        "Warfarin",
        &[
            ("PT/INR", 0.95),
            ("Bleeding Precautions", 0.8),
            ("Vitamin K Diet Education", 0.55),
            ("Fall Precautions", 0.55),
        ],
    ),
    (
        "Enoxaparin",
        &[
            ("CBC", 0.7),
            ("Bleeding Precautions", 0.7),
            ("Anti-Xa Level", 0.45),
        ],
    ),
    (
        "Anticoagulation",
        &[
            ("Bleeding Precautions", 0.85),
            ("PT/INR", 0.75),
            ("Fall Precautions", 0.6),
        ],
    ),
    (
        "DVT",
        &[
            ("Heparin", 0.85),
            ("Venous Doppler", 0.85),
            ("Elevate Extremity", 0.6),
            ("Bleeding Precautions", 0.6),
        ],
    ),
    (
        "DVT Prophylaxis",
        &[
            ("SCDs", 0.9),
            ("Enoxaparin", 0.8),
            ("Ambulation", 0.6),
        ],
    ),
    // Pain and sedation
    (
        "Pain",
        &[
            ("Pain Reassessment", 0.9),
            ("Acetaminophen", 0.7),
            ("Non-Pharmacologic Comfort", 0.65),
            ("Repositioning", 0.55),
        ],
    ),
    (
        "Morphine",
        &[
            ("Sedation Assessment", 0.9),
            ("Respiratory Rate Monitoring", 0.85),
            ("Naloxone", 0.7),
            ("Bowel Regimen", 0.65),
            ("Fall Precautions", 0.75),
            ("Pain Reassessment", 0.85),
        ],
    ),
    (
        "Hydromorphone",
        &[
            ("Sedation Assessment", 0.9),
            ("Continuous Pulse Oximetry", 0.8),
            ("Naloxone", 0.75),
            ("Fall Precautions", 0.75),
            ("Pain Reassessment", 0.85),
        ],
    ),
    (
        "Oxycodone",
        &[
            ("Sedation Assessment", 0.75),
            ("Bowel Regimen", 0.7),
            ("Pain Reassessment", 0.8),
            ("Fall Precautions", 0.6),
        ],
    ),
    (
        "Fentanyl",
        &[
            ("Sedation Assessment", 0.9),
            ("Continuous Pulse Oximetry", 0.85),
            ("Naloxone", 0.7),
        ],
    ),
    (
        "PCA Pump",
        &[
            ("Continuous Pulse Oximetry", 0.9),
            ("Sedation Assessment", 0.9),
            ("Naloxone", 0.8),
            ("PCA Education", 0.75),
            ("Pain Reassessment", 0.85),
        ],
    ),
    (
        "Lorazepam",
        &[
            ("Sedation Assessment", 0.85),
            ("Fall Precautions", 0.8),
            ("Respiratory Rate Monitoring", 0.7),
        ],
    ),
    (
        "Opioid Overdose",
        &[
            ("Naloxone", 0.99),
            ("Continuous Pulse Oximetry", 0.9),
            ("ABG", 0.6),
            ("Sitter", 0.55),
        ],
    ),
    (
        "Alcohol Withdrawal",
        &[
            ("CIWA Protocol", 0.95),
            ("Thiamine", 0.9),
            ("Folic Acid", 0.7),
            ("Seizure Precautions", 0.8),
            ("Lorazepam", 0.7),
            ("Magnesium", 0.6),
            ("Fall Precautions", 0.7),
        ],
    ),
    // Safety, skin, mobility
    (
        "Fall",
        &[
            ("Fall Precautions", 0.95),
            ("Neuro Checks", 0.8),
            ("Post-Fall Huddle", 0.85),
            ("CT Head", 0.6),
            ("Bed Alarm", 0.8),
        ],
    ),
    (
        "Fall Risk",
        &[
            ("Fall Precautions", 0.95),
            ("Bed Alarm", 0.85),
            ("Non-Slip Socks", 0.8),
            ("Call Light Within Reach", 0.85),
            ("Physical Therapy Consult", 0.55),
        ],
    ),
    (
        "Fall Precautions",
        &[
            ("Bed Alarm", 0.8),
            ("Non-Slip Socks", 0.75),
            ("Call Light Within Reach", 0.8),
            ("Bed in Low Position", 0.85),
        ],
    ),
    (
        "Pressure Injury",
        &[
            ("Turn Q2H", 0.95),
            ("Wound Care Consult", 0.9),
            ("Pressure-Relieving Mattress", 0.85),
            ("Dietitian Consult", 0.7),
            ("Skin Assessment", 0.85),
            ("Wound Photo Documentation", 0.55),
        ],
    ),
    (
        "Braden Score Low",
        &[
            ("Turn Q2H", 0.9),
            ("Pressure-Relieving Mattress", 0.8),
            ("Heel Offloading", 0.75),
            ("Skin Assessment", 0.85),
        ],
    ),
    (
        "Wound",
        &[
            ("Wound Care", 0.9),
            ("Wound Care Consult", 0.7),
            ("Dressing Change", 0.8),
            ("Pain Reassessment", 0.55),
        ],
    ),
    (
        "Wound VAC",
        &[
            ("Seal Check", 0.9),
            ("Canister Output Monitoring", 0.8),
            ("Wound Care Consult", 0.75),
        ],
    ),
    (
        "Bed Rest",
        &[
            ("SCDs", 0.85),
            ("Turn Q2H", 0.85),
            ("Incentive Spirometry", 0.6),
            ("Skin Assessment", 0.7),
        ],
    ),
    (
        "Restraints",
        &[
            ("Restraint Order Renewal", 0.95),
            ("Circulation Checks Q2H", 0.9),
            ("Sitter", 0.6),
            ("Skin Assessment", 0.7),
        ],
    ),
    (
        "Post-Op",
        &[
            ("Incentive Spirometry", 0.9),
            ("Pain Reassessment", 0.9),
            ("SCDs", 0.85),
            ("Surgical Site Assessment", 0.85),
            ("Ambulation", 0.7),
            ("Strict I&O", 0.6),
            ("Ondansetron", 0.5),
        ],
    ),
    (
        "Hip Fracture",
        &[
            ("Orthopedic Consult", 0.9),
            ("Pain Reassessment", 0.85),
            ("Neurovascular Checks", 0.85),
            ("Fall Precautions", 0.8),
            ("SCDs", 0.7),
        ],
    ),
    // Lines and devices
    (
        "Central Line",
        &[
            ("CLABSI Bundle", 0.95),
            ("Dressing Change", 0.85),
            ("Daily Necessity Review", 0.8),
            ("Line Placement Verification", 0.75),
        ],
    ),
    (
        "PICC Line",
        &[
            ("CLABSI Bundle", 0.9),
            ("Dressing Change", 0.85),
            ("Arm Circumference", 0.6),
        ],
    ),
    (
        "Peripheral IV",
        &[
            ("IV Site Assessment", 0.85),
            ("Saline Flush", 0.7),
            ("IV Fluids", 0.35),
        ],
    ),
    (
        "Telemetry",
        &[
            ("Electrode Change", 0.6),
            ("Cardiac Monitoring", 0.7),
            ("EKG", 0.45),
        ],
    ),
    // Medications
    (
        "Furosemide",
        &[
            ("BMP", 0.85),
            ("Strict I&O", 0.85),
            ("Daily Weights", 0.8),
            ("Potassium Chloride", 0.6),
            ("Fall Precautions", 0.5),
        ],
    ),
    (
        "Metoprolol",
        &[
            ("Hold Parameters HR/BP", 0.85),
            ("Repeat Vitals", 0.7),
            ("Orthostatic Vitals", 0.5),
        ],
    ),
    (
        "Digoxin",
        &[
            ("Digoxin Level", 0.9),
            ("Apical Pulse Check", 0.9),
            ("BMP", 0.75),
        ],
    ),
    (
        "Amiodarone",
        &[
            ("Telemetry", 0.85),
            ("TSH", 0.55),
            ("Liver Function Tests", 0.55),
            ("EKG", 0.7),
        ],
    ),
    (
        "Vancomycin",
        &[
            ("Vancomycin Trough", 0.9),
            ("BMP", 0.75),
            ("Infusion Rate Check", 0.6),
        ],
    ),
    (
        "Broad-Spectrum Antibiotics",
        &[
            ("Blood Cultures", 0.9),
            ("Allergy Check", 0.85),
            ("Procalcitonin", 0.5),
        ],
    ),
    (
        "Potassium Chloride",
        &[
            ("Repeat BMP", 0.8),
            ("IV Site Assessment", 0.6),
            ("Continuous Cardiac Monitoring", 0.45),
        ],
    ),
    (
        "Norepinephrine",
        &[
            ("Arterial Line", 0.85),
            ("Central Line", 0.8),
            ("MAP Monitoring", 0.95),
            ("Extravasation Checks", 0.7),
        ],
    ),
    (
        "Steroids",
        &[
            ("Fingerstick Glucose", 0.8),
            ("Pantoprazole", 0.55),
            ("Infection Monitoring", 0.45),
        ],
    ),
    (
        "Prednisone",
        &[
            ("Fingerstick Glucose", 0.75),
            ("Pantoprazole", 0.5),
        ],
    ),
    (
        "Haloperidol",
        &[
            ("EKG", 0.75),
            ("QTc Monitoring", 0.8),
            ("Fall Precautions", 0.6),
        ],
    ),
    // Allergies and reactions
    (
        "Allergies",
        &[
            ("Allergy Band", 0.95),
            ("Allergy Check", 0.85),
        ],
    ),
    (
        "Anaphylaxis",
        &[
            ("Epinephrine", 0.99),
            ("Diphenhydramine", 0.85),
            ("Methylprednisolone", 0.75),
            ("Airway Assessment", 0.95),
            ("Rapid Response Team", 0.9),
        ],
    ),
    (
        "Transfusion Reaction",
        &[
            ("Stop Transfusion", 0.99),
            ("Notify Blood Bank", 0.95),
            ("Repeat Vitals", 0.9),
            ("Urinalysis", 0.6),
        ],
    ),
    // Behavioral health
    (
        "Suicidal Ideation",
        &[
            ("Sitter", 0.95),
            ("Safety Room Check", 0.9),
            ("Psychiatry Consult", 0.9),
            ("Suicide Risk Screening", 0.85),
        ],
    ),
    (
        "Agitation",
        &[
            ("De-escalation", 0.85),
            ("Sitter", 0.7),
            ("Pain Reassessment", 0.55),
            ("Haloperidol", 0.45),
            ("Restraints", 0.35),
        ],
    ),
    (
        "Anxiety",
        &[
            ("Therapeutic Communication", 0.7),
            ("Chaplain", 0.4),
            ("Lorazepam", 0.35),
        ],
    ),
    (
        "Depression",
        &[
            ("PHQ-9", 0.75),
            ("Social Work Consult", 0.6),
            ("Psychiatry Consult", 0.55),
        ],
    ),
    // Status, code and discharge
    (
        "Critical",
        &[
            ("Continuous Cardiac Monitoring", 0.9),
            ("Vitals Q15 Minutes", 0.85),
            ("Rapid Response Team", 0.75),
            ("Family Update", 0.6),
        ],
    ),
    (
        "Guarded",
        &[
            ("Repeat Vitals", 0.75),
            ("Notify MD", 0.55),
        ],
    ),
    (
        "DNR",
        &[
            ("DNR Armband", 0.95),
            ("Goals of Care Discussion", 0.8),
            ("Palliative Care Consult", 0.65),
        ],
    ),
    (
        "Comfort Care",
        &[
            ("Palliative Care Consult", 0.9),
            ("Pain Reassessment", 0.85),
            ("Chaplain", 0.7),
            ("Family Update", 0.8),
            ("Mouth Care", 0.75),
        ],
    ),
    (
        "Discharge Planning",
        &[
            ("Case Management", 0.9),
            ("Medication Reconciliation", 0.9),
            ("Discharge Education", 0.85),
            ("Follow-Up Appointment", 0.8),
            ("Social Work Consult", 0.5),
        ],
    ),
    (
        "Lives Alone",
        &[
            ("Social Work Consult", 0.75),
            ("Case Management", 0.8),
            ("Home Safety Evaluation", 0.65),
        ],
    ),
    (
        "Language Barrier",
        &[
            ("Interpreter Services", 0.95),
            ("Teach-Back", 0.7),
        ],
    ),
    (
        "Malnutrition",
        &[
            ("Dietitian Consult", 0.95),
            ("Calorie Count", 0.85),
            ("Daily Weights", 0.6),
            ("Prealbumin", 0.5),
        ],
    ),
    (
        "Obesity",
        &[
            ("Bariatric Bed", 0.7),
            ("Sleep Apnea Screening", 0.55),
            ("Skin Assessment", 0.6),
        ],
    ),
    (
        "Sleep Apnea",
        &[
            ("CPAP at Night", 0.9),
            ("Continuous Pulse Oximetry", 0.7),
            ("Sedation Assessment", 0.6),
        ],
    ),
];
