//! Scoring constants for powerlifting meet preparation
//!
//! This module contains the fixed coefficient tables and thresholds used
//! throughout the analysis modules. Formula coefficients are normative and
//! reproduced exactly from their published sources; changing any value here
//! changes scores for every athlete.

/// Wilks coefficient tables (1994 revision)
///
/// References:
/// - Vanderburgh, P.M. & Batterham, A.M. (1999). Validation of the Wilks
///   powerlifting formula. Medicine & Science in Sports & Exercise, 31(12)
/// - https://pubmed.ncbi.nlm.nih.gov/10613442/
pub mod wilks {
    /// Numerator constant: score = total * 500 / polynomial(bodyweight)
    pub const NUMERATOR: f64 = 500.0;

    /// Male denominator polynomial, ascending powers (c0 + c1*bw + ... + c5*bw^5)
    pub const MALE_COEFFICIENTS: [f64; 6] = [
        -216.047_514_4,
        16.260_633_9,
        -0.002_388_645,
        -0.001_137_32,
        7.018_63e-6,
        -1.291e-8,
    ];

    /// Female denominator polynomial, ascending powers
    pub const FEMALE_COEFFICIENTS: [f64; 6] = [
        594.317_477_755_82,
        -27.238_425_364_47,
        0.821_122_268_71,
        -0.009_307_339_13,
        4.731_582e-5,
        -9.054e-8,
    ];

    /// Bodyweight clamp for the tabulated male polynomial (kg)
    /// The polynomial is only defined over the published table range
    pub const MALE_BODYWEIGHT_CAP_KG: f64 = 201.9;

    /// Bodyweight clamp for the tabulated female polynomial (kg)
    pub const FEMALE_BODYWEIGHT_CAP_KG: f64 = 154.53;
}

/// DOTS coefficient tables
///
/// References:
/// - Konertz, T. (2019). DOTS score, Bundesverband Deutscher Kraftdreikaempfer
/// - https://www.powerlifting.sport/fileadmin/ipf/data/ipf-formula/
pub mod dots {
    /// Numerator constant: score = total * 500 / polynomial(bodyweight)
    pub const NUMERATOR: f64 = 500.0;

    /// Male denominator polynomial, ascending powers (c0 + c1*bw + ... + c4*bw^4)
    pub const MALE_COEFFICIENTS: [f64; 5] = [
        -307.750_76,
        24.090_075_6,
        -0.191_875_922_1,
        0.000_739_129_3,
        -0.000_001_093,
    ];

    /// Female denominator polynomial, ascending powers
    pub const FEMALE_COEFFICIENTS: [f64; 5] = [
        -57.962_88,
        13.617_503_2,
        -0.112_665_549_5,
        0.000_515_856_8,
        -0.000_001_070_6,
    ];

    /// Single-factor approximation numerator for male lifters
    /// Used by the quick summary surface: total * factor / bodyweight^0.75
    pub const MALE_SIMPLE_FACTOR: f64 = 0.472_78;

    /// Single-factor approximation numerator for female lifters
    pub const FEMALE_SIMPLE_FACTOR: f64 = 0.570_94;

    /// Allometric bodyweight exponent for the approximation
    /// Reference: Cleather, D.J. (2006). Adjusting powerlifting performances
    /// for differences in body mass. Journal of Strength and Conditioning
    /// Research, 20(2)
    pub const BODYWEIGHT_EXPONENT: f64 = 0.75;
}

/// Readiness score weighting (70/20/10 design)
///
/// The canonical meet-readiness percentage: three lifts worth up to 23.3 points
/// each, weight management worth 20, equipment completion worth 10.
pub mod readiness {
    /// Maximum points one lift contributes before the overshoot cap (3 * 23.3 ~= 70)
    pub const LIFT_COMPONENT_SCALE: f64 = 23.3;

    /// Progress ratio cap: being beyond 120% of the goal earns nothing extra
    pub const PROGRESS_RATIO_CAP: f64 = 1.2;

    /// Confidence is entered on a 1-10 scale and applied as a ratio
    pub const CONFIDENCE_DIVISOR: f64 = 10.0;

    /// Maximum points for bodyweight management
    pub const WEIGHT_COMPONENT_MAX: f64 = 20.0;

    /// Being within this many kg of the target class earns full weight points
    pub const WEIGHT_TOLERANCE_KG: f64 = 2.0;

    /// Points lost per kg beyond the tolerance band
    pub const WEIGHT_PENALTY_PER_KG: f64 = 2.0;

    /// Maximum points for equipment completion
    pub const EQUIPMENT_COMPONENT_MAX: f64 = 10.0;

    /// Total readiness is clamped to this range
    pub const TOTAL_MAX: f64 = 100.0;
}

/// Readiness status interpretation thresholds
pub mod readiness_status {
    /// At or above this total the athlete is peaked and meet-ready
    pub const PEAK_READY_THRESHOLD: f64 = 85.0;

    /// At or above this total preparation is on track
    pub const ON_TRACK_THRESHOLD: f64 = 70.0;

    /// At or above this total preparation needs focused work
    pub const NEEDS_WORK_THRESHOLD: f64 = 50.0;
}

/// Dashboard readiness weighting (80/15/5 design)
///
/// The dashboard's coarser aggregate intentionally differs from the readiness
/// score: it compares totals instead of per-lift progress and ignores attempt
/// confidence. Both formulas ship side by side.
pub mod dashboard {
    /// Weight applied to total-vs-goal lift progress
    pub const LIFT_WEIGHT: f64 = 0.80;

    /// Weight applied to bodyweight progress toward the target class
    pub const BODYWEIGHT_WEIGHT: f64 = 0.15;

    /// Weight applied to equipment checklist completion
    pub const EQUIPMENT_WEIGHT: f64 = 0.05;
}

/// Strength level thresholds on the Wilks scale
///
/// References:
/// - https://www.openpowerlifting.org rankings distribution
/// - Classification brackets in common use across raw federations
pub mod strength_levels {
    /// Elite: international-level competitor
    pub const ELITE_THRESHOLD: f64 = 500.0;

    /// Advanced: national-level competitor
    pub const ADVANCED_THRESHOLD: f64 = 400.0;

    /// Intermediate: several years of structured training
    pub const INTERMEDIATE_THRESHOLD: f64 = 300.0;

    /// Novice: past the beginner adaptation phase
    pub const NOVICE_THRESHOLD: f64 = 200.0;
}

/// One-rep-max estimation and attempt planning
///
/// References:
/// - Epley, B. (1985). Poundage Chart. Boyd Epley Workout, Lincoln, NE
/// - LeSuer, D.A. et al. (1997). The accuracy of prediction equations for
///   estimating 1-RM performance. Journal of Strength and Conditioning
///   Research, 11(4)
pub mod estimation {
    /// Epley divisor: estimated 1RM = weight * (1 + reps / 30)
    pub const EPLEY_REP_DIVISOR: f64 = 30.0;

    /// Opening attempt as a fraction of current max (a confident triple)
    pub const OPENER_FRACTION: f64 = 0.91;

    /// Second attempt as a fraction of current max (near-limit single)
    pub const SECOND_ATTEMPT_FRACTION: f64 = 0.97;

    /// Third attempt as a fraction of current max (small PR)
    pub const THIRD_ATTEMPT_FRACTION: f64 = 1.02;

    /// Competition plates load in 2.5 kg steps
    pub const PLATE_INCREMENT_KG: f64 = 2.5;
}

/// Unit conversion factors
pub mod units {
    /// Pounds per kilogram as used on every display surface
    pub const LBS_PER_KG: f64 = 2.204_62;
}

/// Training analytics windows
pub mod analytics {
    /// Default history window for the analytics surface (days)
    pub const DEFAULT_HISTORY_DAYS: u32 = 90;

    /// Bodyweight trend looks at the most recent entries in log order
    pub const WEIGHT_TREND_WINDOW: usize = 7;
}
