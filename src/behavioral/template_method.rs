//! Template Method
//!
//! The skeleton of a turn-based game lives in one place; the steps are
//! supplied either as closures (`run_game`) or as trait methods
//! (`Game::run`).

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

/// Runs the game loop over `state` and returns the announcement.
pub fn run_game<S>(
    state: &mut S,
    start: impl FnOnce(&mut S),
    mut take_turn: impl FnMut(&mut S),
    have_winner: impl Fn(&S) -> bool,
    winning_player: impl Fn(&S) -> usize,
) -> String {
    start(state);
    while !have_winner(state) {
        take_turn(state);
    }
    format!("Player {} wins.", winning_player(state))
}

/// Classic variant: the template is a provided trait method.
pub trait Game {
    fn start(&mut self) -> String;
    fn take_turn(&mut self) -> String;
    fn have_winner(&self) -> bool;
    fn winning_player(&self) -> usize;

    fn run(&mut self) -> Vec<String> {
        let mut lines = vec![self.start()];
        while !self.have_winner() {
            lines.push(self.take_turn());
        }
        lines.push(format!("Player {} wins.", self.winning_player()));
        lines
    }
}

#[derive(Debug)]
pub struct Chess {
    pub number_of_players: usize,
    pub current_player: usize,
    pub turn: u32,
    pub max_turns: u32,
    pub log: Vec<String>,
}

impl Chess {
    pub fn new(max_turns: u32) -> Self {
        Self {
            number_of_players: 2,
            current_player: 0,
            turn: 1,
            max_turns,
            log: Vec::new(),
        }
    }

    fn start_message(&self) -> String {
        format!("Starting a game of chess with {} players.", self.number_of_players)
    }

    fn advance(&mut self) -> String {
        let line = format!("Turn {} taken by player {}.", self.turn, self.current_player);
        self.turn += 1;
        self.current_player = (self.current_player + 1) % self.number_of_players;
        line
    }

    fn finished(&self) -> bool {
        self.turn >= self.max_turns
    }
}

impl Game for Chess {
    fn start(&mut self) -> String {
        self.start_message()
    }

    fn take_turn(&mut self) -> String {
        self.advance()
    }

    fn have_winner(&self) -> bool {
        self.finished()
    }

    fn winning_player(&self) -> usize {
        self.current_player
    }
}

pub fn run(out: &mut dyn Write, config: &PatternsConfig) -> Result<()> {
    let max_turns = config.template.max_turns;
    tracing::debug!("Playing chess for at most {max_turns} turns");

    let mut chess = Chess::new(max_turns);
    let verdict = run_game(
        &mut chess,
        |c| {
            let line = c.start_message();
            c.log.push(line);
        },
        |c| {
            let line = c.advance();
            c.log.push(line);
        },
        |c| c.finished(),
        |c| c.current_player,
    );
    for line in &chess.log {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{verdict}")?;
    Ok(())
}
