mod login;
mod not_found;
mod robot_detail;
mod robots;

pub use login::Login;
pub use not_found::NotFound;
pub use robot_detail::RobotDetail;
pub use robots::Robots;
