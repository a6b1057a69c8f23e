mod analytics;
mod auth;
mod health;
mod links;
mod qr;
mod redirect;
mod shorten;

pub use analytics::{
    browsers_handler, devices_handler, locations_handler, referrers_handler, summary_handler,
    timeline_handler,
};
pub use auth::{login_handler, me_handler, register_handler};
pub use health::health_handler;
pub use links::{delete_url_handler, list_urls_handler, update_url_handler};
pub use qr::qr_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
