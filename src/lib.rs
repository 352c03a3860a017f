mod commands;
mod error;
mod models;
mod services;
mod views;

use services::config::PredictorConfig;
use services::predictor::client::HttpPredictionClient;
use services::session::PredictorSession;
use std::sync::Arc;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            let config = PredictorConfig::load();
            log::info!("prediction endpoint: {}", config.endpoint_url);

            let client = Arc::new(HttpPredictionClient::new(&config));
            app.manage(PredictorSession::new(client));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::predictor::get_view,
            commands::predictor::pick_image,
            commands::predictor::select_image,
            commands::predictor::predict,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
