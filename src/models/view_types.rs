use serde::Serialize;

/// Preview panel: exactly one of `preview_uri` / `placeholder_text` is set.
#[derive(Debug, Serialize, Clone)]
pub struct ImageAreaView {
    pub preview_uri: Option<String>,
    pub placeholder_text: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct UploadControlView {
    pub label: String,
    pub accept: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ResultView {
    pub heading: String,
    pub age_text: String,
    pub gender_text: Option<String>,
}

/// Everything the page needs to re-render after a controller update.
#[derive(Debug, Serialize, Clone)]
pub struct PageView {
    pub image_area: ImageAreaView,
    pub upload: UploadControlView,
    pub predict_label: String,
    pub predict_enabled: bool,
    pub loading: bool,
    pub error_text: Option<String>,
    pub result: Option<ResultView>,
}
