// Simple command-line application to play Quoridor

use quoridor::{board::PrettyStyle, movegen, Action, Game, GameStatus};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let mut stdin = io::stdin().lock();

    let mut game = Game::new();
    let mut history = Vec::new();

    loop {
        if let GameStatus::Won(p) = game.status() {
            println!("{}", game.board().pretty(PrettyStyle::Ascii));
            println!("Game finished: player {} wins", p);
            println!("Notation:");
            println!("{}", history.join(" "));
            break;
        }

        println!("{}", game.board().pretty(PrettyStyle::Ascii));
        let side = game.current_turn();
        print!(
            "Player {} ({} fences left, {} steps to go): ",
            side,
            game.fence_allowance(side),
            game.distance_to_goal(side).unwrap_or(0),
        );
        io::stdout().flush()?;
        let mut s = String::new();
        if stdin.read_line(&mut s)? == 0 {
            break;
        }
        let s = s.trim();

        if s == "?" {
            let moves: Vec<String> = movegen::pawn_moves(&game)
                .iter()
                .map(|c| c.to_string())
                .collect();
            println!("Pawn moves: {}", moves.join(" "));
            println!("Legal fences: {}", movegen::fences(&game).len());
            println!();
            continue;
        }

        // Parsing and applying are separate steps, so the two kinds of errors can be told apart.
        let action = match s.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                println!("Bad action: {}", e);
                println!();
                continue;
            }
        };
        if let Err(e) = game.apply(side, action) {
            println!("Illegal action: {}", e);
            println!();
            continue;
        }
        history.push(action.to_string());

        println!();
    }

    Ok(())
}
