mod list_accounts;

use actix_web::web;
use list_accounts::list_accounts_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/banking/accounts", web::get().to(list_accounts_controller));
}
