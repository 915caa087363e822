pub mod class_list;
pub mod month;
