#[macro_use] extern crate rocket;

pub mod api;
pub mod client;
pub mod routes;

use rocket::{ Build, Rocket };
use crate::api::{ Database, DatabaseFactory, MoodService, RatingService, RecipeGateway, RecipeGatewayFactory, ResourceService, ResourceServiceFactory };

/// Wires the services into a Rocket instance serving the cocktail routes.
pub fn build_rocket(resource_service: ResourceService, database: Database, recipe_gateway: RecipeGateway) -> Rocket<Build> {
    let rating_service = RatingService::new(resource_service.clone(), database.clone());
    let mood_service = MoodService::new(resource_service.clone(), database);
    rocket::build()
        .mount("/", routes::routes())
        .register("/", routes::catchers())
        .manage(rating_service)
        .manage(mood_service)
        .manage(recipe_gateway)
        .manage(resource_service)
}

/// Same as `build_rocket`, with every service created from `.env`/environment configuration.
pub fn rocket_from_env() -> Rocket<Build> {
    let resource_service = ResourceServiceFactory::create_or_panic();
    let database = DatabaseFactory::create_or_panic(&resource_service);
    let recipe_gateway = RecipeGatewayFactory::create_or_panic(&resource_service);
    build_rocket(resource_service, database, recipe_gateway)
}
