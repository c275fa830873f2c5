//! Position inspector.
//!
//! Builds a board (standard start, a FEN placement, or the start plus a
//! recorded opening move), prints it, and lists legal moves for one square
//! or for the side to move.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use quince_chess::game_state::chess_rules::STARTING_LAYOUT;
use quince_chess::utils::layout_parser::parse_layout;
use quince_chess::utils::render_game_state::render_board;
use quince_chess::{Board, BoardConfig, BoardResult, Legality, OpeningMove, Square, Team};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TeamArg {
    White,
    Black,
}

impl From<TeamArg> for Team {
    fn from(value: TeamArg) -> Self {
        match value {
            TeamArg::White => Team::White,
            TeamArg::Black => Team::Black,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Inspect legal moves in a chess position")]
struct Cli {
    /// FEN piece placement; the first rank is row 0.
    #[arg(short, long, default_value = STARTING_LAYOUT)]
    layout: String,

    /// Side to move.
    #[arg(short, long, value_enum, default_value_t = TeamArg::White)]
    turn: TeamArg,

    /// White's recorded first move as "row col row col", played on a fresh
    /// standard board. Overrides --layout and --turn.
    #[arg(short, long)]
    opening: Option<OpeningMove>,

    /// Show moves only for the piece on this square, as "row,col".
    #[arg(short, long, value_parser = parse_square)]
    square: Option<Square>,

    /// Validate moves against the check-filtered set instead of the
    /// pseudo-legal one.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn parse_square(text: &str) -> Result<Square, String> {
    let (row, column) = text
        .split_once(',')
        .ok_or_else(|| format!("expected \"row,col\", got \"{text}\""))?;
    let row = row.trim().parse::<u8>().map_err(|e| e.to_string())?;
    let column = column.trim().parse::<u8>().map_err(|e| e.to_string())?;
    Square::try_new(row, column).map_err(|e| e.to_string())
}

fn build_board(cli: &Cli) -> BoardResult<Board> {
    let config = BoardConfig {
        legality: if cli.strict {
            Legality::AvoidCheck
        } else {
            Legality::PseudoLegal
        },
    };

    match cli.opening {
        Some(opening) => {
            let mut board = Board::with_config(Team::White, config);
            board.apply_move(opening.from, opening.to)?;
            Ok(board)
        }
        None => Board::from_grid_with_config(parse_layout(&cli.layout)?, cli.turn.into(), config),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let board = match build_board(&cli) {
        Ok(board) => board,
        Err(err) => {
            error!("could not set up position: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", render_board(&board.render()));
    println!(
        "{} to move, captured white={} black={}",
        board.turn_to_move(),
        board.captured_value(Team::White),
        board.captured_value(Team::Black)
    );
    if board.is_in_check(board.turn_to_move()) {
        println!("{} is in check", board.turn_to_move());
    }

    match cli.square {
        Some(square) => {
            let moves: Vec<String> = board
                .legal_moves(square)
                .iter()
                .map(|to| to.to_string())
                .collect();
            println!("{square}: {}", moves.join(" "));
        }
        None => {
            let moves = board.legal_moves_for_team(board.turn_to_move());
            info!(count = moves.len(), "listed legal moves");
            for mv in moves {
                println!("{mv}");
            }
        }
    }

    ExitCode::SUCCESS
}
