use crate::error::{BhoomiError, BhoomiResult};
use crate::models::{YieldPrediction, YieldRequest};
use serde::Serialize;

/// Predictions up to this multiple of the nominal maximum still count as realistic.
const REALISM_HEADROOM: f64 = 1.2;

/// Reference yield band in quintals per hectare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropReference {
    pub crop: &'static str,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

const fn band(crop: &'static str, min: f64, max: f64, avg: f64) -> CropReference {
    CropReference {
        crop,
        min,
        max,
        avg,
    }
}

pub const CROP_REFERENCES: &[CropReference] = &[
    band("Rice", 15.0, 45.0, 30.0),
    band("Wheat", 20.0, 50.0, 35.0),
    band("Maize", 20.0, 60.0, 40.0),
    band("Sugarcane", 300.0, 600.0, 350.0),
    band("Cotton", 5.0, 20.0, 12.0),
    band("Soybean", 8.0, 25.0, 16.0),
    band("Groundnut", 10.0, 30.0, 20.0),
    band("Potato", 100.0, 300.0, 200.0),
    band("Onion", 80.0, 250.0, 165.0),
    band("Tomato", 150.0, 400.0, 275.0),
];

pub const SEASONS: &[&str] = &["Kharif", "Rabi", "Summer", "Whole Year"];

pub const STATES: &[&str] = &[
    "Punjab",
    "Haryana",
    "Uttar Pradesh",
    "West Bengal",
    "Andhra Pradesh",
    "Tamil Nadu",
    "Karnataka",
    "Maharashtra",
    "Gujarat",
    "Rajasthan",
    "Bihar",
    "Odisha",
    "Madhya Pradesh",
    "Chhattisgarh",
    "Jharkhand",
];

/// Band for `crop`; unknown crops get an all-zero band.
pub fn reference_for(crop: &str) -> CropReference {
    CROP_REFERENCES
        .iter()
        .find(|r| r.crop == crop)
        .copied()
        .unwrap_or(band("", 0.0, 0.0, 0.0))
}

pub fn is_realistic(yield_per_hectare: f64, band: &CropReference) -> bool {
    yield_per_hectare >= band.min && yield_per_hectare <= band.max * REALISM_HEADROOM
}

pub fn bar_fraction(yield_per_hectare: f64, band: &CropReference) -> f64 {
    if band.max <= 0.0 || !yield_per_hectare.is_finite() {
        return 0.0;
    }
    (yield_per_hectare / band.max).clamp(0.0, 1.0)
}

pub fn evaluate_yield(
    request: &YieldRequest,
    yield_per_hectare: f64,
) -> BhoomiResult<YieldPrediction> {
    if !request.area.is_finite() || request.area <= 0.0 {
        return Err(BhoomiError::validation("Area must be greater than zero"));
    }
    if !yield_per_hectare.is_finite() || yield_per_hectare < 0.0 {
        return Err(BhoomiError::Server(format!(
            "Prediction service returned an invalid yield: {}",
            yield_per_hectare
        )));
    }

    let band = reference_for(&request.crop);

    Ok(YieldPrediction {
        crop: request.crop.clone(),
        state: request.state.clone(),
        season: request.season.clone(),
        area: request.area,
        yield_per_hectare,
        total_production: yield_per_hectare * request.area,
        min_yield: band.min,
        max_yield: band.max,
        is_realistic: is_realistic(yield_per_hectare, &band),
        bar_fraction: bar_fraction(yield_per_hectare, &band),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn rice(area: f64) -> YieldRequest {
        YieldRequest {
            crop: "Rice".into(),
            state: "Punjab".into(),
            district: "Ludhiana".into(),
            season: "Kharif".into(),
            area,
        }
    }

    #[test]
    fn test_realism_headroom() {
        let band = reference_for("Rice");
        assert!(is_realistic(50.0, &band));
        assert!(!is_realistic(60.0, &band));
        assert!(!is_realistic(14.9, &band));
    }

    #[test]
    fn test_total_scales_with_area() {
        let one = evaluate_yield(&rice(2.0), 31.5).unwrap();
        let two = evaluate_yield(&rice(4.0), 31.5).unwrap();
        assert_eq!(two.total_production, one.total_production * 2.0);
        assert_eq!(one.total_production, 63.0);
    }

    #[test]
    fn test_rejects_non_positive_area() {
        for area in [0.0, -1.0, f64::NAN] {
            let err = evaluate_yield(&rice(area), 30.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValidationError);
        }
    }

    #[test]
    fn test_bar_fraction_clamped() {
        let p = evaluate_yield(&rice(1.0), 90.0).unwrap();
        assert_eq!(p.bar_fraction, 1.0);
        let p = evaluate_yield(&rice(1.0), 22.5).unwrap();
        assert_eq!(p.bar_fraction, 0.5);
    }

    #[test]
    fn test_unknown_crop_band() {
        let mut req = rice(1.0);
        req.crop = "Millet".into();
        let p = evaluate_yield(&req, 12.0).unwrap();
        assert_eq!(p.min_yield, 0.0);
        assert_eq!(p.max_yield, 0.0);
        assert!(!p.is_realistic);
        assert_eq!(p.bar_fraction, 0.0);
    }
}
