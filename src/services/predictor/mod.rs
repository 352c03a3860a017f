pub mod client;

use crate::error::AppError;
use crate::models::predict_types::{Prediction, PredictionPayload};

/// Decode a success body against the strict result contract. Any shape
/// mismatch discards the payload whole; nothing is partially applied.
pub fn decode_prediction(body: &[u8]) -> Result<Prediction, AppError> {
    let payload: PredictionPayload =
        serde_json::from_slice(body).map_err(|_| AppError::payload_shape())?;
    Ok(payload.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::predict_types::Gender;

    #[test]
    fn accepts_the_exact_contract() {
        let prediction = decode_prediction(br#"{"age":29,"gender":"Male"}"#).unwrap();
        assert_eq!(prediction.age, 29.0);
        assert_eq!(prediction.gender, Some(Gender::Male));
    }

    #[test]
    fn accepts_fractional_age() {
        let prediction = decode_prediction(br#"{"age":41.5,"gender":"Female"}"#).unwrap();
        assert_eq!(prediction.age, 41.5);
        assert_eq!(prediction.gender, Some(Gender::Female));
    }

    #[test]
    fn rejects_non_numeric_age() {
        let err = decode_prediction(br#"{"age":"old","gender":"Male"}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::PayloadShape);
        assert_eq!(err.message, "Unexpected response format from API.");
    }

    #[test]
    fn rejects_unknown_gender() {
        let err = decode_prediction(br#"{"age":30,"gender":"Unknown"}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::PayloadShape);
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(decode_prediction(br#"{"age":30}"#).is_err());
        assert!(decode_prediction(br#"{"gender":"Male"}"#).is_err());
        assert!(decode_prediction(br#"{}"#).is_err());
    }

    #[test]
    fn rejects_extra_fields() {
        let err =
            decode_prediction(br#"{"age":30,"gender":"Male","confidence":0.9}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::PayloadShape);
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert!(decode_prediction(b"[]").is_err());
        assert!(decode_prediction(b"42").is_err());
        assert!(decode_prediction(b"not json at all").is_err());
    }
}
