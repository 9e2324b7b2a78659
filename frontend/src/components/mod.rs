pub mod require_auth;
pub mod sidebar;
pub mod toast;
pub mod trainee_detail_modal;
pub mod training_detail_modal;
