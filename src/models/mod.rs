pub mod predict_types;
pub mod view_types;
