use crate::error::AppError;
use crate::services::config::PredictorConfig;
use crate::services::session::FileSelection;
use async_trait::async_trait;
use reqwest::multipart;

/// Raw outcome of one exchange with the prediction endpoint. Status is
/// interpreted by the session; a transport failure never reaches here.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the session and the wire. The app installs the reqwest
/// implementation below; tests install fakes.
#[async_trait]
pub trait PredictionClient: Send + Sync {
    async fn submit(&self, upload: &FileSelection) -> Result<HttpReply, AppError>;
}

/// POSTs the selected file to the configured endpoint as a multipart form
/// with the single field `image`. No auth, no query parameters, and no
/// client-side timeout; the call resolves per the transport.
pub struct HttpPredictionClient {
    endpoint_url: String,
    http: reqwest::Client,
}

impl HttpPredictionClient {
    pub fn new(config: &PredictorConfig) -> Self {
        HttpPredictionClient {
            endpoint_url: config.endpoint_url.clone(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn submit(&self, upload: &FileSelection) -> Result<HttpReply, AppError> {
        let part = multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.name.clone())
            .mime_str(&upload.media_type)?;
        let form = multipart::Form::new().part("image", part);

        let response = self.http.post(&self.endpoint_url).multipart(form).send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpReply { status, body })
    }
}
