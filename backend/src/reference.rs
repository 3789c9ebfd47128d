// Static reference tables shown alongside the live features.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

const fn lang(code: &'static str, name: &'static str, native_name: &'static str) -> Language {
    Language {
        code,
        name,
        native_name,
    }
}

pub const LANGUAGES: &[Language] = &[
    lang("en", "English", "English"),
    lang("es", "Spanish", "Español"),
    lang("hi", "Hindi", "हिंदी"),
    lang("bn", "Bengali", "বাংলা"),
    lang("te", "Telugu", "తెలుగు"),
    lang("mr", "Marathi", "मराठी"),
    lang("ta", "Tamil", "தமிழ்"),
    lang("gu", "Gujarati", "ગુજરાતી"),
    lang("kn", "Kannada", "ಕನ್ನಡ"),
    lang("ml", "Malayalam", "മലയാളം"),
    lang("pa", "Punjabi", "ਪੰਜਾਬੀ"),
    lang("or", "Odia", "ଓଡ଼ିଆ"),
];

pub fn language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

pub const SAMPLE_QUESTIONS: &[&str] = &[
    "What are the best crops to grow in monsoon season?",
    "How to identify and treat plant diseases?",
    "What is the ideal soil pH for vegetables?",
    "How to improve crop yield naturally?",
];

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pesticide {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub target_pests: &'static str,
    pub application: &'static str,
    pub active_ingredient: &'static str,
    pub dosage: &'static str,
    pub safety: &'static str,
}

pub const PESTICIDES: &[Pesticide] = &[
    Pesticide {
        id: "pest1",
        name: "Imidacloprid",
        kind: "Systemic Insecticide",
        target_pests: "Aphids, Whiteflies, Thrips, Termites",
        application: "Soil drench or foliar spray",
        active_ingredient: "21.4% Imidacloprid",
        dosage: "0.5-1ml per liter of water",
        safety: "Moderate toxicity - wear protective gear",
    },
    Pesticide {
        id: "pest2",
        name: "Cypermethrin",
        kind: "Pyrethroid Insecticide",
        target_pests: "Ants, Cockroaches, Moths, Beetles",
        application: "Surface spray or crack treatment",
        active_ingredient: "10% Cypermethrin",
        dosage: "1-2ml per liter of water",
        safety: "Low to moderate toxicity",
    },
    Pesticide {
        id: "pest3",
        name: "Malathion",
        kind: "Organophosphate",
        target_pests: "Fruit flies, Aphids, Scale insects",
        application: "Foliar spray",
        active_ingredient: "50% Malathion",
        dosage: "2ml per liter of water",
        safety: "Moderate toxicity - avoid skin contact",
    },
    Pesticide {
        id: "pest4",
        name: "Neem Oil",
        kind: "Botanical Insecticide",
        target_pests: "Soft-bodied insects, Larvae, Mites",
        application: "Foliar spray (organic option)",
        active_ingredient: "Azadirachtin 0.03%",
        dosage: "5-10ml per liter of water",
        safety: "Low toxicity - safe for beneficial insects",
    },
    Pesticide {
        id: "pest5",
        name: "Bifenthrin",
        kind: "Pyrethroid",
        target_pests: "Termites, Spiders, Crickets, Ants",
        application: "Perimeter treatment or soil application",
        active_ingredient: "10% Bifenthrin",
        dosage: "1ml per liter of water",
        safety: "Low toxicity to mammals",
    },
];

/// Demo suggestions shown before the first identification.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SampleInsect {
    pub id: &'static str,
    pub name: &'static str,
    pub probability: f64,
    pub description: &'static str,
    pub habitat: &'static str,
}

pub const SAMPLE_INSECTS: &[SampleInsect] = &[
    SampleInsect {
        id: "mock1",
        name: "Ladybug (Coccinella septempunctata)",
        probability: 0.92,
        description: "Common red ladybug with seven black spots",
        habitat: "Gardens, fields, crops",
    },
    SampleInsect {
        id: "mock2",
        name: "Honeybee (Apis mellifera)",
        probability: 0.87,
        description: "European honeybee, important pollinator",
        habitat: "Flowers, hives, gardens",
    },
    SampleInsect {
        id: "mock3",
        name: "Monarch Butterfly (Danaus plexippus)",
        probability: 0.81,
        description: "Orange butterfly with black veins and borders",
        habitat: "Milkweed plants, gardens",
    },
    SampleInsect {
        id: "mock4",
        name: "House Spider (Parasteatoda tepidariorum)",
        probability: 0.76,
        description: "Common indoor spider with varied coloration",
        habitat: "Corners, basements, sheds",
    },
    SampleInsect {
        id: "mock5",
        name: "Ant (Lasius niger)",
        probability: 0.71,
        description: "Black garden ant, very common species",
        habitat: "Soil, under stones, lawns",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Crop Prediction",
        description: "Estimate yield per hectare for your field",
        path: "/api/yield/predict",
    },
    QuickAction {
        title: "Weather Alerts",
        description: "Current conditions, forecast and active alerts",
        path: "/api/weather",
    },
    QuickAction {
        title: "Disease Detection",
        description: "Identify insects from a photo",
        path: "/api/insects/identify",
    },
    QuickAction {
        title: "AI Assistant",
        description: "Ask farming questions in your language",
        path: "/api/assistant/ask",
    },
    QuickAction {
        title: "Marketplace",
        description: "Browse buy and sell listings",
        path: "/api/marketplace/listings",
    },
];
