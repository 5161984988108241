pub mod auth;
pub mod characters;
pub mod favorites;
pub mod health;
pub mod users;

use actix_web::web;

/// Registers every route under the `/api` scope.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::register),
    )
    .service(
        web::scope("/characters")
            .service(characters::list_characters)
            .service(characters::create_character)
            .service(characters::get_character)
            .service(characters::update_character)
            .service(characters::delete_character),
    )
    .service(
        web::scope("/favorites")
            .service(favorites::list_favorites)
            .service(favorites::add_favorite)
            .service(favorites::remove_favorite),
    )
    .service(web::scope("/users").service(users::me));
}
