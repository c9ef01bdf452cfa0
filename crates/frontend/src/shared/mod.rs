pub mod api_utils;
pub mod components;
pub mod date_context;
pub mod format;
pub mod icons;
pub mod numeric;
pub mod toast;
