use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{init_logging, AiPlayer, CliPlayer, Game, GameConfig, Player, Side};

#[derive(Parser)]
#[command(author, version, about = "Sea battle on a 6x6 board against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (computer moves will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    println!("Welcome to Sea Battle!");
    println!("Shot format: row col (e.g. 1 3)");

    let human: Box<dyn Player> = Box::new(CliPlayer::stdio());
    let computer: Box<dyn Player> = Box::new(AiPlayer::new());
    let mut game = Game::setup(&GameConfig::default(), human, computer, rng)?;

    let winner = game.run()?;

    println!("--------------------");
    println!("Your board:");
    println!("{}", game.board(Side::First));
    println!("--------------------");
    println!("Enemy board:");
    println!("{}", game.target_view(Side::First));
    println!("--------------------");
    match winner {
        Side::First => println!("You win!"),
        Side::Second => println!("The computer wins!"),
    }
    Ok(())
}
