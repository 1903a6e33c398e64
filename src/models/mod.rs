pub mod app_state;
pub mod deep_form_data;

pub use app_state::AppState;
pub use deep_form_data::DeepFormData;
