mod chat_avatar;
mod feedback;
mod inspection_drawer;
mod nav;
mod robot_card;
mod task_panel;
mod task_wizard;
mod toast;
mod unbind_modal;

pub use chat_avatar::ChatAvatar;
pub use feedback::{ErrorNote, Loading};
pub use inspection_drawer::InspectionDrawer;
pub use nav::Nav;
pub use robot_card::RobotCard;
pub(crate) use robot_card::{category_label, status_badge};
pub use task_panel::TaskPanel;
pub use task_wizard::TaskWizard;
pub use toast::{ToastContainer, use_toasts};
pub use unbind_modal::UnbindModal;
