use anyhow::Result;
use tracing::info;

use chatranj_cli::{Opponent, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("chatranj starting");

    let opponent = match std::env::args().nth(1).as_deref() {
        Some("pvp") => Opponent::None,
        Some("random") => Opponent::Random,
        _ => Opponent::Greedy,
    };

    Session::new(opponent).run()?;
    Ok(())
}
