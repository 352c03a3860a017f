use crate::error::AppError;
use crate::models::predict_types::Prediction;
use crate::services::media;
use crate::services::predictor::client::PredictionClient;
use crate::services::predictor::decode_prediction;
use crate::services::preview::{self, PreviewImage};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const ERR_INVALID_IMAGE: &str = "Please upload a valid image file.";
pub const ERR_NO_IMAGE: &str = "Please upload an image first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    FileSelected,
    Submitting,
    Succeeded,
    Failed,
}

/// A file the user picked, as handed over by the picker: name, declared
/// media type, raw bytes. The picker does no validation; that happens in
/// `PredictorSession::select_file`.
#[derive(Debug, Clone)]
pub struct FileSelection {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
struct SessionState {
    file: Option<FileSelection>,
    preview: Option<PreviewImage>,
    result: Option<Prediction>,
    error: Option<AppError>,
    loading: bool,
}

impl SessionState {
    fn phase(&self) -> Phase {
        if self.loading {
            Phase::Submitting
        } else if self.result.is_some() {
            Phase::Succeeded
        } else if self.error.is_some() && self.file.is_some() {
            Phase::Failed
        } else if self.file.is_some() {
            Phase::FileSelected
        } else {
            Phase::Idle
        }
    }
}

/// Read-only copy of the session for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub file_selected: bool,
    pub preview_uri: Option<String>,
    pub result: Option<Prediction>,
    pub error: Option<String>,
    pub loading: bool,
}

/// The application controller. Owns all page state behind one async lock;
/// only this type mutates it. The prediction exchange is the single
/// suspension point, performed without holding the lock, and there is no
/// cancellation or sequencing of in-flight requests.
#[derive(Clone)]
pub struct PredictorSession {
    state: Arc<Mutex<SessionState>>,
    client: Arc<dyn PredictionClient>,
}

impl PredictorSession {
    pub fn new(client: Arc<dyn PredictionClient>) -> Self {
        PredictorSession {
            state: Arc::new(Mutex::new(SessionState::default())),
            client,
        }
    }

    /// Apply a file-selection event.
    ///
    /// `None` (the dialog was dismissed) returns to idle, dropping any file,
    /// preview, and result. A declared non-image type is rejected with a
    /// message and likewise clears the selection. A valid selection clears
    /// any previous error and result before the new preview is derived, and
    /// storing the new preview drops the superseded one.
    pub async fn select_file(&self, selection: Option<FileSelection>) {
        let mut state = self.state.lock().await;

        match selection {
            None => {
                state.file = None;
                state.preview = None;
                state.result = None;
            }
            Some(selection) if !media::is_image_media_type(&selection.media_type) => {
                log::warn!(
                    "select: rejected {} with declared type {}",
                    selection.name,
                    selection.media_type
                );
                state.error = Some(AppError::validation(ERR_INVALID_IMAGE));
                state.file = None;
                state.preview = None;
                state.result = None;
            }
            Some(selection) => {
                state.error = None;
                state.result = None;
                state.preview = Some(preview::generate_preview(&selection));
                state.file = Some(selection);
            }
        }
    }

    /// Run one prediction attempt against the configured client.
    ///
    /// Without a selected file this sets the corresponding message and never
    /// touches the network. Otherwise the error and result are cleared, the
    /// loading flag spans the exchange, and exactly one of result/error is
    /// set when it completes.
    pub async fn predict(&self) {
        let upload = {
            let mut state = self.state.lock().await;
            match state.file.clone() {
                Some(file) => {
                    state.error = None;
                    state.result = None;
                    state.loading = true;
                    file
                }
                None => {
                    log::warn!("predict: no file selected");
                    state.error = Some(AppError::validation(ERR_NO_IMAGE));
                    return;
                }
            }
        };

        let outcome = self.exchange(&upload).await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match outcome {
            Ok(prediction) => {
                state.result = Some(prediction);
            }
            Err(e) => {
                log::error!("predict: {:?} failure: {}", e.kind, e);
                state.error = Some(e);
            }
        }
    }

    async fn exchange(&self, upload: &FileSelection) -> Result<Prediction, AppError> {
        let reply = self.client.submit(upload).await?;
        if !reply.is_ok() {
            return Err(AppError::protocol(reply.status));
        }
        decode_prediction(&reply.body)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        SessionSnapshot {
            phase: state.phase(),
            file_selected: state.file.is_some(),
            preview_uri: state.preview.as_ref().map(|p| p.data_uri().to_string()),
            result: state.result.clone(),
            error: state.error.as_ref().map(|e| e.message.clone()),
            loading: state.loading,
        }
    }
}
