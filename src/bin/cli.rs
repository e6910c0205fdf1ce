use mailbox_chess::engine::{Engine, PromotionPolicy};
use mailbox_chess::evaluation::MaterialEvaluator;
use mailbox_chess::types::{GameResult, Move, Promotion, Side};
use rand::Rng;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn format_move(move_: Move) -> String {
    format!(
        "\x1b[32m({}, {}) -> ({}, {})\x1b[0m",
        move_.from.row(),
        move_.from.col(),
        move_.to.row(),
        move_.to.col()
    )
}

/// Accepts "6 4 4 4", "6444" or "6,4 4,4"
fn parse_coordinates(input: &str) -> Option<Vec<i32>> {
    let digits: Vec<i32> = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_digit(10).map(|d| d as i32))
        .collect::<Option<Vec<i32>>>()?;

    match digits.len() {
        2 | 4 => Some(digits),
        _ => None,
    }
}

struct CLI {
    engine: Engine,
    evaluator: MaterialEvaluator,
    display_enabled: bool,
    flip: bool,
}

impl CLI {
    fn new() -> Self {
        Self {
            engine: Engine::default(),
            evaluator: MaterialEvaluator,
            display_enabled: true,
            flip: false,
        }
    }

    fn show_help(&self) {
        println!("\n======================= INFORMATION ======================");
        println!("h or help    - Displays help on the commands");
        println!("d or dd      - Displays board and toggles display setting");
        println!("moves        - Displays the legal moves of the side to move");
        println!("moves <r c>  - Displays the legal moves of one square");
        println!("f            - Flips the board");
        println!("q or quit    - Quits the program");
        println!("================= CONTROLLING THE ENGINE =================");
        println!("<r c r c>    - Plays a move, e.g. 6 4 4 4");
        println!("go           - Chooses a side and plays against the computer");
        println!("new          - Starts a new game");
        println!("p or play    - The computer plays the side to move");
        println!("off          - Turns the computer player off");
        println!("auto <plies> - The computer plays both sides");
        println!("===================== CONFIGURATION ======================");
        println!("promote <q|r|b|n|random> - Sets the promotion policy");
        println!("seed <n>                 - Seeds random choices (applies on new)");
        println!("limit <plies>            - Sets the no-progress draw limit");
    }

    fn display_board(&self) {
        if self.display_enabled {
            println!("\n{}", self.engine.position().render(self.flip));
        }
    }

    fn print_result(&mut self, result: GameResult) {
        match result {
            GameResult::InProgress => {
                if self.engine.in_check() {
                    println!("\n{:?} is in check", self.engine.side_to_move());
                }
                return;
            }
            GameResult::Checkmate(winner) => {
                println!("\nGAME OVER");

                if winner == Side::White {
                    println!("{{White mates}}");
                } else {
                    println!("{{Black mates}}");
                }
            }
            GameResult::Stalemate => {
                println!("{{Stalemate}}");
            }
            GameResult::DrawByInsufficientMaterial => {
                println!("{{Draw by insufficient material}}");
            }
            GameResult::DrawByNoProgress => {
                println!("{{Draw by no progress}}");
            }
        }

        println!("Type \"new\" to start again");
        self.engine.settings.computer_side = None;
    }

    fn display_moves(&self, moves: &[Move]) {
        if moves.is_empty() {
            println!("(No legal moves)");
            return;
        }

        for move_ in moves {
            println!("{}", format_move(*move_));
        }
    }

    fn make_computer_move(&mut self) -> bool {
        match self.engine.play_computer_move(&self.evaluator) {
            Ok(Some(move_)) => {
                println!("\nComputer plays: {}", format_move(move_));
                true
            }
            Ok(None) => false,
            Err(e) => {
                println!("\n{}", e);
                false
            }
        }
    }

    fn run_auto_play(&mut self, plies: usize) {
        for _ in 0..plies {
            if !self.make_computer_move() {
                break;
            }

            let result = self.engine.result();
            self.display_board();

            if result.is_over() {
                self.print_result(result);
                break;
            }
        }
    }

    fn run_main_loop(&mut self) {
        self.display_board();

        loop {
            // Computer's turn
            if self.engine.is_computer_turn() {
                println!("\nComputer is thinking...");

                if self.make_computer_move() {
                    let result = self.engine.result();
                    self.display_board();
                    self.print_result(result);
                } else {
                    println!("(No legal moves)");
                    self.engine.settings.computer_side = None;
                }

                continue;
            }

            println!("\n-------------------------------");
            println!(
                "*   Ply: {} | To move: {:?}   *",
                self.engine.history().len(),
                self.engine.side_to_move()
            );
            println!("-------------------------------");

            print!("\nMove OR command > ");
            io::stdout().flush().ok();

            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) => return, // EOF
                Ok(_) => {}
                Err(_) => return,
            }

            let command = input.trim().to_lowercase();

            // COMMANDS WITHOUT PARAMETERS
            match command.as_str() {
                "" => continue,
                "d" => {
                    println!("\n{}", self.engine.position().render(self.flip));
                    continue;
                }
                "dd" => {
                    self.display_enabled = !self.display_enabled;

                    if self.display_enabled {
                        println!("\nBoard display enabled");
                        self.display_board();
                    } else {
                        println!("\nBoard display disabled");
                    }
                    continue;
                }
                "f" => {
                    self.flip = !self.flip;
                    self.display_board();
                    continue;
                }
                "go" => {
                    self.handle_go_command();
                    continue;
                }
                "h" | "help" => {
                    self.show_help();
                    continue;
                }
                "moves" => {
                    println!("\nLegal moves:");
                    let moves = self.engine.all_legal_moves();
                    self.display_moves(&moves);
                    continue;
                }
                "new" => {
                    self.engine.reset();
                    self.display_board();
                    continue;
                }
                "p" | "play" => {
                    self.engine.settings.computer_side = Some(self.engine.side_to_move());
                    continue;
                }
                "off" => {
                    self.engine.settings.computer_side = None;
                    continue;
                }
                "q" | "quit" => {
                    println!("\nProgram exiting");
                    break;
                }
                _ => {}
            }

            // COMMANDS WITH PARAMETERS
            if let Some(square) = command.strip_prefix("moves ") {
                match parse_coordinates(square).as_deref() {
                    Some(&[row, col]) => {
                        let moves = self.engine.legal_moves_at(row, col);
                        self.display_moves(&moves);
                    }
                    _ => println!("\nINVALID SQUARE!"),
                }
                continue;
            }

            if let Some(plies) = command.strip_prefix("auto ") {
                match plies.trim().parse::<usize>() {
                    Ok(plies) => self.run_auto_play(plies),
                    Err(_) => println!("\nINVALID PLY COUNT!"),
                }
                continue;
            }

            if let Some(choice) = command.strip_prefix("promote ") {
                let policy = match choice.trim() {
                    "q" => Some(PromotionPolicy::Always(Promotion::Queen)),
                    "r" => Some(PromotionPolicy::Always(Promotion::Rook)),
                    "b" => Some(PromotionPolicy::Always(Promotion::Bishop)),
                    "n" => Some(PromotionPolicy::Always(Promotion::Knight)),
                    "random" => Some(PromotionPolicy::Random),
                    _ => None,
                };

                match policy {
                    Some(policy) => {
                        self.engine.settings.promotion = policy;
                        println!("\nPromotion policy set to {:?}", policy);
                    }
                    None => println!("\nINVALID PROMOTION!"),
                }
                continue;
            }

            if let Some(seed) = command.strip_prefix("seed ") {
                if let Ok(seed) = seed.trim().parse::<u64>() {
                    self.engine.settings.seed = Some(seed);
                    println!("\nSeed set to {}", seed);
                }
                continue;
            }

            if let Some(limit) = command.strip_prefix("limit ") {
                if let Ok(limit) = limit.trim().parse::<u32>() {
                    self.engine.settings.no_progress_limit = limit;
                    println!("\nNo-progress limit set to {} half-moves", limit);
                }
                continue;
            }

            // PARSE "FROM" AND "TO" SQUARES
            let Some(&[from_row, from_col, to_row, to_col]) = parse_coordinates(&command).as_deref()
            else {
                println!("\nINVALID COMMAND!");
                continue;
            };

            match self
                .engine
                .try_move_at(from_row, from_col, to_row, to_col)
            {
                Ok(result) => {
                    self.display_board();
                    self.print_result(result);
                }
                Err(e) => println!("\n{}", e),
            }
        }
    }

    fn handle_go_command(&mut self) {
        println!("\nChoose your side:");
        println!("1. White");
        println!("2. Black");
        println!("3. Random");
        print!("\nEnter choice (1-3) > ");
        io::stdout().flush().ok();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => {}
            Err(_) => return,
        }

        println!();

        let choice = input.trim();
        let player_side = match choice {
            "1" => Side::White,
            "2" => Side::Black,
            "3" => {
                let side = match rand::thread_rng().gen_bool(0.5) {
                    true => Side::White,
                    false => Side::Black,
                };
                println!("You are playing as {:?}", side);
                side
            }
            _ => {
                println!("Invalid choice. Defaulting to White.");
                Side::White
            }
        };

        self.engine.settings.computer_side = Some(player_side.opponent());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("\n==============================");
    println!("|   Mailbox Chess Engine     |");
    println!("==============================\n");
    println!("Rows 0-7 top to bottom, columns 0-7 left to right");
    println!("\n\"h or help\" displays a list of commands\n");

    let mut cli = CLI::new();
    cli.run_main_loop();
}
