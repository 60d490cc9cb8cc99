#[macro_use] extern crate rocket;
extern crate env_logger;

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();
    env_logger::init();
    cocktail_of_the_day::rocket_from_env()
}
