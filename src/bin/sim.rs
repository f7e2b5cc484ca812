use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{AiPlayer, Game, GameConfig, ShotOutcome, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program = args.first().map_or("sim", String::as_str);
        eprintln!("Usage: {} <seed>", program);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Game::setup(
        &GameConfig::default(),
        Box::new(AiPlayer::named("first")),
        Box::new(AiPlayer::named("second")),
        SmallRng::seed_from_u64(seed),
    )?;
    let winner = game.run()?;

    let summary = |side: Side| {
        let shots: Vec<_> = game.shots_by(side).collect();
        let hits = shots
            .iter()
            .filter(|s| s.outcome != ShotOutcome::Miss)
            .count();
        json!({"shots": shots.len(), "hits": hits, "ships_left": game.board(side).remaining_ship_count()})
    };

    let result = json!({
        "winner": winner,
        "first": summary(Side::First),
        "second": summary(Side::Second),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
