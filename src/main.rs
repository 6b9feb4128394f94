use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wayfarer::character::{
    load_player, parse_battle_command, parse_menu_choice, parse_session_command, BattleInput,
    JsonFileStore, MenuChoice, Player,
};
use wayfarer::combat::BattleCommand;
use wayfarer::core::{EndReason, GameConfig, GameError, LevelUpPolicy, Session, Step};
use wayfarer::utils::{init_logging, version_line};

#[derive(Parser)]
#[command(name = "wayfarer")]
#[command(about = "A turn-based text adventure")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Save file location (defaults to the platform data directory)
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Seed the random number generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Grant one level-up per 100 experience instead of one per reward
    #[arg(long)]
    multi_level_up: bool,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show version information
    #[arg(long)]
    version: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        if let Some(path) = &self.save_file {
            config.save_path = path.clone();
        }
        config.seed = self.seed;
        if self.multi_level_up {
            config.level_up_policy = LevelUpPolicy::Repeat;
        }
        config
    }
}

/// Line-oriented prompt reader. `None` means input ran out.
struct Console<R: BufRead> {
    input: R,
}

impl<R: BufRead> Console<R> {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        print!("{}", text);
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", version_line());
        return Ok(());
    }

    init_logging(cli.verbose);
    let config = cli.config();
    log::debug!("save file: {}", config.save_path.display());

    let stdin = io::stdin();
    let mut console = Console {
        input: stdin.lock(),
    };

    println!("Welcome to Wayfarer!");
    let store = JsonFileStore::new(config.save_path.clone());
    let Some(player) = choose_player(&mut console, &store)? else {
        return Ok(());
    };

    let rng = config.rng();
    let mut session = Session::new(player, config, rng, store);
    println!("{}", session.player());

    match run(&mut console, &mut session)? {
        EndReason::Quit => println!("Thanks for playing!"),
        EndReason::Defeated => {}
    }
    Ok(())
}

fn choose_player<R: BufRead>(
    console: &mut Console<R>,
    store: &JsonFileStore,
) -> io::Result<Option<Player>> {
    loop {
        println!("1. New Game");
        println!("2. Load Game");
        let Some(line) = console.prompt("Choose an option: ")? else {
            return Ok(None);
        };

        match parse_menu_choice(&line) {
            Ok(MenuChoice::NewGame) => return new_player(console),
            Ok(MenuChoice::LoadGame) => match load_player(store) {
                Ok(player) => {
                    println!("Welcome back, {}!", player.name);
                    return Ok(Some(player));
                }
                Err(GameError::NoSaveFound) => {
                    println!("No saved game found. Starting a new game.");
                    return new_player(console);
                }
                Err(e @ GameError::CharacterFallen { .. }) => {
                    println!("{} Starting a new game.", e);
                    return new_player(console);
                }
                Err(e) => {
                    log::error!("could not load {}: {}", store.path().display(), e);
                    println!("{}", e);
                }
            },
            Err(e) => println!("{}", e),
        }
    }
}

fn new_player<R: BufRead>(console: &mut Console<R>) -> io::Result<Option<Player>> {
    loop {
        let Some(name) = console.prompt("Enter your character's name: ")? else {
            return Ok(None);
        };
        if !name.is_empty() {
            return Ok(Some(Player::new(name)));
        }
    }
}

fn run<R, G>(console: &mut Console<R>, session: &mut Session<G, JsonFileStore>) -> io::Result<EndReason>
where
    R: BufRead,
    G: rand::Rng,
{
    loop {
        let step = if session.battle().is_some() {
            match read_battle_command(console)? {
                Some(command) => session.handle_battle_command(command),
                None => Ok(session.quit()),
            }
        } else {
            let Some(line) = console.prompt("What would you like to do? (explore/save/status/quit): ")?
            else {
                report(&session.quit());
                return Ok(EndReason::Quit);
            };
            parse_session_command(&line).and_then(|command| session.handle_command(command))
        };

        match step {
            Ok(step) => {
                report(&step);
                if let Step::Ended { reason, .. } = step {
                    return Ok(reason);
                }
            }
            Err(e) => {
                if !e.is_recoverable() {
                    log::error!("{}", e);
                }
                println!("{}", e);
            }
        }
    }
}

/// Reads until a complete battle command is entered. Bad input re-prompts.
fn read_battle_command<R: BufRead>(console: &mut Console<R>) -> io::Result<Option<BattleCommand>> {
    loop {
        let Some(line) = console.prompt("Choose an action: (attack/cast/use/talk/quit): ")? else {
            return Ok(None);
        };

        let command = match parse_battle_command(&line) {
            Ok(BattleInput::Ready(command)) => Ok(command),
            Ok(BattleInput::NeedsArgument(kind)) => {
                let Some(argument) = console.prompt(kind.prompt())? else {
                    return Ok(None);
                };
                kind.complete(&argument)
            }
            Err(e) => Err(e),
        };

        match command {
            Ok(command) => return Ok(Some(command)),
            Err(e) => println!("{}", e),
        }
    }
}

fn report(step: &Step) {
    for event in step.events() {
        println!("{}", event);
    }
}
