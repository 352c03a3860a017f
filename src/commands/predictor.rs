use crate::error::AppError;
use crate::models::view_types::PageView;
use crate::services::media;
use crate::services::session::{FileSelection, PredictorSession};
use crate::views;
use std::path::{Path, PathBuf};
use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, FilePath};

/// Current page view, for the initial render.
#[tauri::command]
pub async fn get_view(session: State<'_, PredictorSession>) -> Result<PageView, AppError> {
    Ok(views::page(&session.snapshot().await))
}

/// Open the native image-filtered file dialog and forward the outcome to
/// the controller. A dismissed dialog is forwarded as "no file chosen".
#[tauri::command]
pub async fn pick_image(
    app: AppHandle,
    session: State<'_, PredictorSession>,
) -> Result<PageView, AppError> {
    let picked = tauri::async_runtime::spawn_blocking(move || {
        app.dialog()
            .file()
            .add_filter("Images", media::IMAGE_EXTENSIONS)
            .blocking_pick_file()
    })
    .await
    .map_err(|e| AppError::validation(format!("File dialog failed: {}", e)))?;

    let path = match picked {
        Some(FilePath::Path(path)) => Some(path),
        Some(FilePath::Url(url)) => url.to_file_path().ok(),
        None => None,
    };

    apply_selection(session.inner(), path).await
}

/// Select a file by path, bypassing the dialog. `None` clears the
/// selection the same way a dismissed dialog does.
#[tauri::command]
pub async fn select_image(
    session: State<'_, PredictorSession>,
    path: Option<String>,
) -> Result<PageView, AppError> {
    apply_selection(session.inner(), path.map(PathBuf::from)).await
}

/// Run one prediction attempt and return the re-rendered page.
#[tauri::command]
pub async fn predict(session: State<'_, PredictorSession>) -> Result<PageView, AppError> {
    session.predict().await;
    Ok(views::page(&session.snapshot().await))
}

async fn apply_selection(
    session: &PredictorSession,
    path: Option<PathBuf>,
) -> Result<PageView, AppError> {
    let selection = match path {
        Some(path) => Some(load_selection(&path).await?),
        None => None,
    };
    session.select_file(selection).await;
    Ok(views::page(&session.snapshot().await))
}

async fn load_selection(path: &Path) -> Result<FileSelection, AppError> {
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(FileSelection {
        name,
        media_type: media::media_type_for(path),
        bytes,
    })
}
