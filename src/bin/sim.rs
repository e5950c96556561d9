#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battle_dinghy::{Board, Game, Player};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let board1 = Board::random(&mut rng1);
    let board2 = Board::random(&mut rng2);
    let mut game = Game::new(board1, board2, Player::One);

    while let Some(actor) = game.turn() {
        let rng = match actor {
            Player::One => &mut rng1,
            Player::Two => &mut rng2,
        };
        let Some(target) = game.board(actor.opponent()).random_untried(rng) else {
            break;
        };
        game.apply_shot(actor, target)
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    let winner = match game.state().winner() {
        Some(Player::One) => Some("player1"),
        Some(Player::Two) => Some("player2"),
        None => None,
    };

    // shots fired by a player land on the opponent's board
    let fired_by_p1 = game.board(Player::Two).shot_counts();
    let fired_by_p2 = game.board(Player::One).shot_counts();

    let result = json!({
        "winner": winner,
        "player1": {
            "shots": fired_by_p1.total(),
            "hits": fired_by_p1.hits,
            "misses": fired_by_p1.misses,
        },
        "player2": {
            "shots": fired_by_p2.total(),
            "hits": fired_by_p2.hits,
            "misses": fired_by_p2.misses,
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
