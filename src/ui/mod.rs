// UI component modules
mod confirm_modal;
mod edit_view;
mod home_view;
mod tile_widget;
mod toast_message;
mod top_panel;

pub use confirm_modal::ConfirmModal;
pub use edit_view::{EditAction, EditView};
pub use home_view::HomeView;
pub use toast_message::Toasts;
pub use top_panel::{MenuAction, TopPanel};
