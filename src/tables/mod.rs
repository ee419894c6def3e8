pub mod iphone;
pub mod samsung;
