use clap::Parser;
use cocktail_of_the_day::client::{ load_cocktail_of_the_day, rate, ClientArgs, HttpCocktailApi, RateOutcome, SessionContext };

#[rocket::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = ClientArgs::parse();

    let api = HttpCocktailApi::new(&args.server_url);
    let mut session = SessionContext::new();
    let view = load_cocktail_of_the_day(&mut session, &api).await;
    println!("{}", view.text);

    let rating = match args.rating {
        Some(rating) => rating,
        None => return
    };
    let cocktail_id = match view.cocktail_id {
        Some(cocktail_id) => cocktail_id,
        None => std::process::exit(1)
    };
    match rate(&mut session, &api, &cocktail_id, rating).await {
        Ok(RateOutcome::Submitted(message)) => {
            println!("{}\n", message.message);
            println!("{}", load_cocktail_of_the_day(&mut session, &api).await.text);
        },
        Ok(RateOutcome::AlreadyRated) => println!("You already rated this cocktail."),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}
