//! Pure render functions: session snapshot in, page view out. No state,
//! no side effects; the webview only has to display what comes back.

use crate::models::predict_types::Prediction;
use crate::models::view_types::{ImageAreaView, PageView, ResultView, UploadControlView};
use crate::services::session::SessionSnapshot;

pub const UPLOAD_LABEL: &str = "Choose Image";
pub const UPLOAD_ACCEPT: &str = "image/*";
pub const PLACEHOLDER_TEXT: &str = "No image selected";
pub const RESULT_HEADING: &str = "Prediction";
pub const PREDICT_LABEL: &str = "Predict";
pub const PREDICT_BUSY_LABEL: &str = "Predicting...";

pub fn image_area(preview_uri: Option<&str>) -> ImageAreaView {
    match preview_uri {
        Some(uri) => ImageAreaView {
            preview_uri: Some(uri.to_string()),
            placeholder_text: None,
        },
        None => ImageAreaView {
            preview_uri: None,
            placeholder_text: Some(PLACEHOLDER_TEXT.to_string()),
        },
    }
}

pub fn upload_control() -> UploadControlView {
    UploadControlView {
        label: UPLOAD_LABEL.to_string(),
        accept: UPLOAD_ACCEPT.to_string(),
    }
}

/// Age always; gender when present, first letter upper-cased. The
/// capitalization is display-only and never written back.
pub fn result_panel(prediction: &Prediction) -> ResultView {
    ResultView {
        heading: RESULT_HEADING.to_string(),
        age_text: format!("{}", prediction.age),
        gender_text: prediction
            .gender
            .map(|gender| capitalize_first(gender.label())),
    }
}

pub fn page(snapshot: &SessionSnapshot) -> PageView {
    PageView {
        image_area: image_area(snapshot.preview_uri.as_deref()),
        upload: upload_control(),
        predict_label: if snapshot.loading {
            PREDICT_BUSY_LABEL.to_string()
        } else {
            PREDICT_LABEL.to_string()
        },
        predict_enabled: !snapshot.loading && snapshot.file_selected,
        loading: snapshot.loading,
        error_text: snapshot.error.clone(),
        result: snapshot.result.as_ref().map(result_panel),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::predict_types::Gender;
    use crate::services::session::Phase;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            phase: Phase::Idle,
            file_selected: false,
            preview_uri: None,
            result: None,
            error: None,
            loading: false,
        }
    }

    #[test]
    fn image_area_shows_placeholder_without_preview() {
        let view = image_area(None);
        assert!(view.preview_uri.is_none());
        assert_eq!(view.placeholder_text.as_deref(), Some("No image selected"));
    }

    #[test]
    fn image_area_shows_the_preview_when_present() {
        let view = image_area(Some("data:image/jpeg;base64,abc"));
        assert_eq!(view.preview_uri.as_deref(), Some("data:image/jpeg;base64,abc"));
        assert!(view.placeholder_text.is_none());
    }

    #[test]
    fn upload_control_is_labeled_and_image_restricted() {
        let view = upload_control();
        assert_eq!(view.label, "Choose Image");
        assert_eq!(view.accept, "image/*");
    }

    #[test]
    fn result_panel_renders_age_and_capitalized_gender() {
        let view = result_panel(&Prediction {
            age: 29.0,
            gender: Some(Gender::Male),
        });
        assert_eq!(view.age_text, "29");
        assert_eq!(view.gender_text.as_deref(), Some("Male"));
    }

    #[test]
    fn result_panel_omits_gender_when_absent() {
        let view = result_panel(&Prediction {
            age: 41.5,
            gender: None,
        });
        assert_eq!(view.age_text, "41.5");
        assert!(view.gender_text.is_none());
    }

    #[test]
    fn capitalization_is_display_only() {
        assert_eq!(capitalize_first("male"), "Male");
        assert_eq!(capitalize_first("female"), "Female");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn predict_control_follows_loading_and_selection() {
        let mut snap = snapshot();
        let view = page(&snap);
        assert_eq!(view.predict_label, "Predict");
        assert!(!view.predict_enabled);

        snap.file_selected = true;
        assert!(page(&snap).predict_enabled);

        snap.loading = true;
        let view = page(&snap);
        assert_eq!(view.predict_label, "Predicting...");
        assert!(!view.predict_enabled);
    }

    #[test]
    fn page_carries_error_and_result() {
        let mut snap = snapshot();
        snap.error = Some("Server error: 500".to_string());
        let view = page(&snap);
        assert_eq!(view.error_text.as_deref(), Some("Server error: 500"));
        assert!(view.result.is_none());

        snap.error = None;
        snap.result = Some(Prediction {
            age: 29.0,
            gender: Some(Gender::Female),
        });
        let view = page(&snap);
        assert!(view.error_text.is_none());
        assert_eq!(view.result.unwrap().gender_text.as_deref(), Some("Female"));
    }
}
