#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battle_dinghy::{
    init_logging, message, render, Board, Game, GameRecord, GameStore, InMemoryStore, Player,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[cfg(feature = "std")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "std")]
#[derive(Subcommand)]
enum Commands {
    /// Play a full random game turn by turn, persisting after every shot.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Generate one random fleet and print the revealed board.
    Board {
        #[arg(long, help = "Fix RNG seed for a reproducible board")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn display_name(player: Player) -> &'static str {
    match player {
        Player::One => "player1",
        Player::Two => "player2",
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { seed } => {
            let mut rng = seeded_rng(seed);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }

            let board1 = Board::random(&mut rng);
            let board2 = Board::random(&mut rng);
            let mut game = Game::new(board1, board2, Player::One);

            let store = InMemoryStore::new();
            let thread_id = "demo-thread";
            let game_number = store.next_game_number().await?;
            let mut record = GameRecord::new(
                game_number,
                display_name(Player::One).to_string(),
                display_name(Player::Two).to_string(),
                &game,
            );
            store.save(thread_id, record.clone()).await?;
            println!(
                "{}\n",
                message::challenge_reply(
                    game_number,
                    display_name(Player::One),
                    display_name(Player::Two)
                )
            );

            while let Some(actor) = game.turn() {
                let defender = actor.opponent();
                let Some(target) = game.board(defender).random_untried(&mut rng) else {
                    break;
                };
                let result = game
                    .apply_shot(actor, target)
                    .map_err(|e| anyhow::anyhow!(e))?;
                log::info!("{} fires at {}: {:?}", actor, target, result.outcome);

                let next = result.state.winner().unwrap_or(defender);
                println!(
                    "{}",
                    render::render_grid(
                        game.board(defender).grid(),
                        &format!("@{}'s waters", display_name(defender)),
                        false
                    )
                );
                println!(
                    "{}\n",
                    message::turn_reply(
                        &result,
                        display_name(actor),
                        display_name(next),
                        game_number
                    )
                );

                record.record_turn(&game);
                store.save(thread_id, record.clone()).await?;
            }

            if let Some(winner) = game.state().winner() {
                println!("Winner: @{}", display_name(winner));
            }
        }
        Commands::Board { seed } => {
            let mut rng = seeded_rng(seed);
            let board = Board::random(&mut rng);
            println!(
                "{}",
                render::render_grid(board.grid(), "Your waters", true)
            );
            println!("{}", render::render_fleet_status(&board.fleet_status()));
        }
    }
    Ok(())
}
