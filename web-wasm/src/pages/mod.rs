//! ページコンポーネント

pub mod about;
pub mod contact;
pub mod home;
pub mod work_detail;
pub mod works;
