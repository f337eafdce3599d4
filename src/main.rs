use std::{fmt::Display, process::exit, time::Instant};

use colored::Colorize;
use humantime::format_duration;

use crate::{
    generator::{Difficulty, Generator},
    sudoku::Grid,
    util::prompt_select,
};

mod generator;
mod sudoku;
mod util;

#[derive(Debug, Clone)]
enum MainSelection {
    New,
    Exit,
}

impl Display for MainSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            MainSelection::New => write!(f, "New"),
            MainSelection::Exit => write!(f, "Exit"),
        }
    }
}

#[derive(Debug, Clone)]
enum Action {
    Answer,
    Quit,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Action::Answer => write!(f, "Answer"),
            Action::Quit => write!(f, "Quit"),
        }
    }
}

fn main() {
    loop {
        let main_selection_options = vec![MainSelection::New, MainSelection::Exit];

        let main_selection = prompt_select(
            "Select one of the following options",
            &main_selection_options,
        );

        match main_selection_options[main_selection] {
            MainSelection::New => {
                let difficulty_options =
                    vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

                let difficulty = difficulty_options
                    [prompt_select("Select the difficulty level", &difficulty_options)];

                let mut generator = Generator::new();

                let start_time = Instant::now();
                let puzzle = generator.generate(difficulty);

                println!(
                    "\nGenerated a {} puzzle in {}\n",
                    difficulty.to_string().bold(),
                    format_duration(start_time.elapsed())
                );
                println!("{puzzle}");

                puzzle_loop(&puzzle);
            }
            MainSelection::Exit => exit(0),
        }
    }
}

fn puzzle_loop(puzzle: &Grid) {
    loop {
        let action_options = vec![Action::Answer, Action::Quit];

        match action_options[prompt_select("Enter your action", &action_options)] {
            Action::Answer => {
                // the puzzle came from a solved grid, so an answer exists;
                // it may differ from the original key when the removal left
                // several solutions
                let mut answer = puzzle.clone();

                if answer.solve() {
                    println!("Sudoku puzzle answer:\n\n{answer}");
                } else {
                    display_error!("no answer exists for this board");
                }

                break;
            }
            Action::Quit => break,
        }
    }
}
