use serde::{Deserialize, Serialize};

/// The two classes the prediction endpoint can return. Serde is the
/// allow-list: anything other than the literal strings "Male"/"Female"
/// fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// A completed prediction. Gender is optional at this level so the result
/// view renders age-only payloads the same way as full ones; the wire
/// contract itself always requires gender (see `PredictionPayload`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub age: f64,
    pub gender: Option<Gender>,
}

/// Exact shape of a successful response body. `deny_unknown_fields` makes
/// this a strict allow-list: missing fields, extra fields, or a
/// non-numeric age all reject the payload as a whole.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictionPayload {
    pub age: f64,
    pub gender: Gender,
}

impl From<PredictionPayload> for Prediction {
    fn from(payload: PredictionPayload) -> Self {
        Prediction {
            age: payload.age,
            gender: Some(payload.gender),
        }
    }
}
