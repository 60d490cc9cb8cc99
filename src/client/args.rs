use clap::Parser;

pub const DEFAULT_COCKTAIL_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "cocktail_client")]
#[command(author, version, about = "Shows the cocktail of the day and optionally rates it")]
pub struct ClientArgs {
    /// Star rating (1-5) to give today's cocktail
    #[arg(value_parser = clap::value_parser!(i64).range(1..=5))]
    pub rating: Option<i64>,

    /// Base URL of the cocktail server
    #[arg(long, env = "COCKTAIL_SERVER_URL", default_value = DEFAULT_COCKTAIL_SERVER_URL)]
    pub server_url: String
}
