use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

/// Ordered class list matching the serving model's output vector.
pub const DISEASE_CLASSES: [&str; 13] = [
    "Apple___Apple_scab",
    "Apple___Black_rot",
    "Apple___Cedar_apple_rust",
    "Apple___healthy",
    "Tomato___Early_blight",
    "Tomato___Late_blight",
    "Tomato___Leaf_Mold",
    "Tomato___Septoria_leaf_spot",
    "Tomato___Spider_mites",
    "Tomato___Target_Spot",
    "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
    "Tomato___Tomato_mosaic_virus",
    "Tomato___healthy",
];

lazy_static! {
    static ref DISEASE_DESCRIPTIONS: HashMap<&'static str, &'static str> = HashMap::from([
        (
            "Apple___Apple_scab",
            "Apple scab is a fungal disease caused by Venturia inaequalis that affects apple trees.",
        ),
        (
            "Apple___Black_rot",
            "Black rot is a fungal disease caused by Botryosphaeria obtusa affecting apples.",
        ),
        (
            "Apple___Cedar_apple_rust",
            "Cedar apple rust is a fungal disease caused by Gymnosporangium juniperi-virginianae.",
        ),
        (
            "Apple___healthy",
            "This is a healthy apple leaf with no signs of disease.",
        ),
        (
            "Tomato___Early_blight",
            "Early blight is a fungal disease caused by Alternaria solani affecting tomatoes.",
        ),
        (
            "Tomato___Late_blight",
            "Late blight is a devastating disease caused by Phytophthora infestans.",
        ),
        (
            "Tomato___Leaf_Mold",
            "Leaf mold is caused by the fungus Passalora fulva, prevalent in humid conditions.",
        ),
        (
            "Tomato___Septoria_leaf_spot",
            "Septoria leaf spot is a fungal disease that causes small, circular spots.",
        ),
        (
            "Tomato___Spider_mites",
            "Spider mites are tiny pests that cause stippling and yellowing of tomato leaves.",
        ),
        (
            "Tomato___Target_Spot",
            "Target spot is caused by the fungus Corynespora cassiicola.",
        ),
        (
            "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
            "TYLCV is a viral disease transmitted by whiteflies.",
        ),
        (
            "Tomato___Tomato_mosaic_virus",
            "ToMV is a viral disease causing mottled leaves and stunted growth.",
        ),
        (
            "Tomato___healthy",
            "This is a healthy tomato leaf with no signs of disease.",
        ),
    ]);

    static ref DISEASE_TREATMENTS: HashMap<&'static str, &'static str> = HashMap::from([
        (
            "Apple___Apple_scab",
            "Apply fungicides early in the growing season. Remove and destroy infected leaves. Use resistant varieties if possible. Improve air circulation by proper pruning.",
        ),
        (
            "Apple___Black_rot",
            "Remove and destroy infected plant parts. Apply fungicides during the growing season. Prune to improve air circulation. Control insects that create wounds for infection.",
        ),
        (
            "Apple___Cedar_apple_rust",
            "Remove nearby cedar or juniper trees if possible. Apply fungicides in spring. Use resistant apple varieties. Keep the orchard clean of debris.",
        ),
        (
            "Apple___healthy",
            "Continue good cultural practices: proper watering, fertilization, and regular monitoring for early detection of issues.",
        ),
        (
            "Tomato___Early_blight",
            "Remove infected leaves. Apply fungicides. Mulch around plants. Avoid overhead watering. Rotate crops. Use resistant varieties if available.",
        ),
        (
            "Tomato___Late_blight",
            "Apply fungicides preventatively. Remove infected plants immediately. Avoid overhead irrigation. Ensure good air circulation. Plant resistant varieties.",
        ),
        (
            "Tomato___Leaf_Mold",
            "Improve air circulation. Reduce humidity. Apply fungicides. Remove infected leaves. Avoid overhead watering. Use resistant varieties.",
        ),
        (
            "Tomato___Septoria_leaf_spot",
            "Remove infected leaves. Apply fungicides. Avoid overhead watering. Use mulch to prevent soil splash. Rotate crops. Clean up debris in fall.",
        ),
        (
            "Tomato___Spider_mites",
            "Spray plants with water to dislodge mites. Apply insecticidal soap or neem oil. Introduce predatory mites. Maintain proper humidity levels.",
        ),
        (
            "Tomato___Target_Spot",
            "Remove infected leaves. Apply fungicides. Avoid overhead watering. Ensure proper plant spacing for air circulation. Rotate crops.",
        ),
        (
            "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
            "Control whitefly populations. Remove and destroy infected plants. Use reflective mulches. Plant resistant varieties. Use physical barriers like row covers.",
        ),
        (
            "Tomato___Tomato_mosaic_virus",
            "Remove and destroy infected plants. Control aphids. Wash hands and tools after handling infected plants. Plant resistant varieties. Avoid working in wet gardens.",
        ),
        (
            "Tomato___healthy",
            "Maintain good cultural practices: proper watering, fertilization, and regular monitoring for early detection of issues.",
        ),
    ]);

    // Curated subset backing the treatment lookup endpoint.
    static ref ENDPOINT_TREATMENTS: HashMap<&'static str, &'static str> = HashMap::from([
        (
            "Apple___Apple_scab",
            "Apply fungicides early in the growing season. Remove and destroy infected leaves. Use resistant varieties if possible.",
        ),
        (
            "Tomato___Early_blight",
            "Remove infected leaves. Apply fungicides. Mulch around plants. Avoid overhead watering. Rotate crops.",
        ),
    ]);

    static ref PLANT_CARE: HashMap<&'static str, PlantInfo> = HashMap::from([
        (
            "tomato",
            PlantInfo {
                name: "Tomato".to_string(),
                scientific_name: "Solanum lycopersicum".to_string(),
                care: PlantCare {
                    water: "Regular watering, 1-2 inches per week".to_string(),
                    sunlight: "Full sun, 6-8 hours daily".to_string(),
                    temperature: "65-85\u{b0}F (18-29\u{b0}C)".to_string(),
                    airflow: "Good ventilation to prevent fungal diseases".to_string(),
                },
                prevention_tips: vec![
                    "Rotate crops every 3-4 years".to_string(),
                    "Use disease-resistant varieties".to_string(),
                    "Provide proper spacing for air circulation".to_string(),
                    "Water at the base to keep foliage dry".to_string(),
                    "Remove and destroy diseased plant material".to_string(),
                ],
            },
        ),
        (
            "apple",
            PlantInfo {
                name: "Apple".to_string(),
                scientific_name: "Malus domestica".to_string(),
                care: PlantCare {
                    water: "1 inch of water per week during growing season".to_string(),
                    sunlight: "Full sun, 6-8 hours daily".to_string(),
                    temperature: "60-80\u{b0}F (15-27\u{b0}C)".to_string(),
                    airflow: "Proper pruning for good air circulation".to_string(),
                },
                prevention_tips: vec![
                    "Proper pruning to improve air circulation".to_string(),
                    "Clean up fallen leaves and fruit".to_string(),
                    "Apply dormant sprays before bud break".to_string(),
                    "Use disease-resistant varieties".to_string(),
                    "Manage insect pests promptly".to_string(),
                ],
            },
        ),
    ]);
}

#[derive(Debug, Clone)]
pub struct DiseaseInfo {
    pub disease: String,
    pub description: String,
    pub treatment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlantCare {
    pub water: String,
    pub sunlight: String,
    pub temperature: String,
    pub airflow: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantInfo {
    pub name: String,
    pub scientific_name: String,
    pub care: PlantCare,
    pub prevention_tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Source {
    pub title: &'static str,
    pub url: &'static str,
}

/// Total mapping from class index to human-readable knowledge. Out of
/// range indices fall through to a fixed "Unknown" entry so that drift
/// between the client's class list and the serving model never fails a
/// request.
pub fn lookup_disease(class_index: usize) -> DiseaseInfo {
    match DISEASE_CLASSES.get(class_index) {
        Some(&name) => DiseaseInfo {
            disease: name.to_string(),
            description: DISEASE_DESCRIPTIONS
                .get(name)
                .copied()
                .unwrap_or("No description available")
                .to_string(),
            treatment: DISEASE_TREATMENTS
                .get(name)
                .copied()
                .unwrap_or("No treatment information available")
                .to_string(),
        },
        None => DiseaseInfo {
            disease: format!("Unknown (Class {})", class_index),
            description: "No description available for this class".to_string(),
            treatment: "No treatment information available".to_string(),
        },
    }
}

pub fn treatment_for(disease: &str) -> &'static str {
    ENDPOINT_TREATMENTS
        .get(disease)
        .copied()
        .unwrap_or("No specific treatment found for this disease.")
}

/// Generic steps returned alongside every treatment lookup.
pub fn treatment_steps() -> Vec<&'static str> {
    vec![
        "Remove all infected leaves and dispose of them properly.",
        "Apply appropriate fungicide according to label instructions.",
        "Improve air circulation around plants.",
        "Water at the base of plants to avoid wetting foliage.",
        "Rotate crops in future growing seasons.",
    ]
}

/// Case-insensitive care lookup; unknown plants get a fixed fallback
/// record rather than an error.
pub fn plant_info(plant_name: &str) -> PlantInfo {
    if let Some(info) = PLANT_CARE.get(plant_name.to_lowercase().as_str()) {
        return info.clone();
    }

    PlantInfo {
        name: capitalize(plant_name),
        scientific_name: "Not available".to_string(),
        care: PlantCare {
            water: "General care information not available".to_string(),
            sunlight: "General care information not available".to_string(),
            temperature: "General care information not available".to_string(),
            airflow: "General care information not available".to_string(),
        },
        prevention_tips: vec![
            "Use disease-resistant varieties".to_string(),
            "Practice crop rotation".to_string(),
            "Maintain good air circulation".to_string(),
            "Water properly, avoiding wet foliage".to_string(),
            "Monitor regularly for early detection of issues".to_string(),
        ],
    }
}

pub fn reference_sources() -> Vec<Source> {
    vec![
        Source {
            title: "Plant Village Database",
            url: "https://plantvillage.psu.edu/",
        },
        Source {
            title: "Agricultural Extension Service",
            url: "https://extension.org/",
        },
    ]
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
