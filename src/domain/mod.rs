pub mod click_context;
pub mod click_worker;
pub mod entities;
pub mod repositories;
