//! Terminal blackjack table: one player against the dealer.

extern crate alloc;

mod assets;
mod render;

use alloc::sync::Arc;
use core::time::Duration;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use bjsolo::{DealerEvent, Game, GameOptions, GameState, RoundResult, spawn_dealer};
use clap::Parser;
use tracing::Level;

use crate::assets::{Assets, Cue};

/// Single-player blackjack from a three-deck shoe. The dealer wins ties.
#[derive(Debug, Parser)]
#[command(name = "bjsolo", version)]
struct Args {
    /// Seed for shuffling. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Pause before each dealer step, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    dealer_delay_ms: u64,
    /// Directory holding the `images/` and `audio/` assets.
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Log level for diagnostics written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Hit,
    Stand,
    NewGame,
    Help,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "h" | "hit" => Some(Self::Hit),
            "s" | "stand" => Some(Self::Stand),
            "n" | "new" => Some(Self::NewGame),
            "?" | "help" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

struct Table {
    game: Arc<Game>,
    assets: Option<Assets>,
    pacing: Duration,
}

impl Table {
    fn show(&self) {
        render::table(&self.game);

        if let Some(assets) = &self.assets {
            let dealer = self.game.dealer_hand();
            for card in self.game.player_hand().cards() {
                tracing::trace!(image = %assets.card_image(card).display(), "player card");
            }
            for card in dealer.visible_cards() {
                tracing::trace!(image = %assets.card_image(card).display(), "dealer card");
            }
            if !dealer.is_hole_revealed() {
                tracing::trace!(image = %assets.card_back().display(), "dealer hole");
            }
        }
    }

    /// The round handlers return whether the player asked for another round.
    fn new_game(&self) -> bool {
        if let Err(err) = self.game.new_game() {
            render::error_dialog(&err);
            return false;
        }
        self.show();

        self.game.state() != GameState::PlayerTurn && self.finish_round()
    }

    fn hit(&self) -> bool {
        match self.game.hit() {
            Ok(card) => {
                println!("You draw {}.", render::card(&card));
                self.show();
                self.game.state() != GameState::PlayerTurn && self.finish_round()
            }
            Err(err) => {
                render::error_dialog(&err);
                false
            }
        }
    }

    fn stand(&self) -> bool {
        match self.game.stand() {
            Ok(()) => self.finish_round(),
            Err(err) => {
                render::error_dialog(&err);
                false
            }
        }
    }

    /// Plays out the dealer on the worker thread and renders each step here.
    fn finish_round(&self) -> bool {
        self.show();

        let mut again = false;
        let worker = spawn_dealer(Arc::clone(&self.game), self.pacing);
        for event in &worker.events {
            match event {
                DealerEvent::Drew(card) => {
                    println!("Dealer draws {}.", render::card(&card));
                    self.show();
                }
                DealerEvent::Stood => {
                    println!("Dealer stands.");
                }
                DealerEvent::Finished(result) => again = self.announce(result),
                DealerEvent::Failed(err) => render::error_dialog(&err),
            }
        }
        worker.join();
        again
    }

    fn announce(&self, result: RoundResult) -> bool {
        let cue = if result.outcome.is_player_win() {
            Cue::Win
        } else {
            Cue::Lose
        };
        assets::play(self.assets.as_ref(), cue);
        render::dialog(
            render::caption(result.outcome),
            format_args!(
                "{}\nYou {} - Dealer {}",
                result.outcome, result.player_value, result.dealer_value
            ),
        );

        confirm("Play again? (y/n): ")
    }

    fn run(&self, mut deal_next: bool) {
        loop {
            if deal_next {
                deal_next = self.new_game();
                continue;
            }

            if self.game.state() == GameState::PlayerTurn {
                println!("{}", render::COMMANDS);
            } else {
                println!("[n]ew game  [?]help  [q]uit");
            }

            let input = prompt_line("> ");
            let Some(command) = Command::parse(&input) else {
                println!("Unknown command.");
                continue;
            };
            tracing::debug!(?command, "command");

            deal_next = match command {
                Command::Hit => self.hit(),
                Command::Stand => self.stand(),
                Command::NewGame => self.new_game(),
                Command::Help => {
                    render::dialog("Help", render::HELP);
                    false
                }
                Command::Quit => return,
            };
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => "quit".to_string(),
        Ok(_) => input.trim().to_lowercase(),
        Err(err) => {
            tracing::warn!(%err, "failed to read input");
            "quit".to_string()
        }
    }
}

fn confirm(prompt: &str) -> bool {
    matches!(prompt_line(prompt).as_str(), "y" | "yes")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let assets = match &args.assets {
        Some(root) => match Assets::load(root) {
            Ok(assets) => Some(assets),
            Err(err) => {
                render::error_dialog(&err);
                return Err(err).context("failed to load assets");
            }
        },
        None => None,
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::info!(seed, dealer_delay_ms = args.dealer_delay_ms, "starting table");

    let table = Table {
        game: Arc::new(Game::new(GameOptions::default(), seed)),
        assets,
        pacing: Duration::from_millis(args.dealer_delay_ms),
    };

    assets::play(table.assets.as_ref(), Cue::Win);
    table.run(confirm("Start new game? (y/n): "));

    println!("Goodbye.");
    Ok(())
}
