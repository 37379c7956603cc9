use rand::rngs::StdRng;
use rand::SeedableRng;
use setlist::error::GameResult;
use setlist::solo::SoloSession;
use setlist::state::GameState;
use setlist::types::GamePhase;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setlist=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Setlist: draw a theme, answer with a song, vote for the best one.");
    loop {
        println!("\n1) solo  2) multiplayer  q) quit");
        let Some(choice) = prompt("> ") else { return };
        match choice.as_str() {
            "1" => run_solo(),
            "2" => run_multiplayer(),
            "q" => return,
            "" => {}
            _ => println!("unknown option"),
        }
    }
}

fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    }
}

fn report(result: GameResult<()>) {
    if let Err(e) = result {
        println!("! {e}");
    }
}

fn run_solo() {
    // GameState doubles as the deck-selection holder for solo browsing.
    let mut decks = GameState::new();
    let mut session = SoloSession::new();
    let mut rng = StdRng::from_os_rng();

    println!("solo: n=next  u=undo  h=history  d <deck>=toggle deck  t <theme>=add custom  b=back");
    loop {
        match session.current() {
            Some(theme) => println!("\ntheme: {theme}"),
            None => println!("\n(no theme yet, type n)"),
        }
        let Some(line) = prompt("solo> ") else { return };
        let (cmd, arg) = split_command(&line);
        match cmd {
            "n" => report(session.next(decks.pool(), &mut rng)),
            "u" => session.undo(),
            "h" => {
                for (i, theme) in session.history().iter().enumerate() {
                    println!("{:2}. {theme}", i + 1);
                }
            }
            "d" => {
                report(decks.toggle_deck(arg));
                session.reset_pool();
            }
            "t" => {
                report(decks.add_custom_theme(arg));
                session.reset_pool();
            }
            "b" => return,
            "" => {}
            _ => println!("unknown command"),
        }
    }
}

fn run_multiplayer() {
    let mut state = GameState::new();
    state.start_lobby();
    loop {
        let keep_going = match state.phase() {
            GamePhase::Lobby => lobby_screen(&mut state),
            GamePhase::ThemeReveal => theme_screen(&mut state),
            GamePhase::Submitting => submit_screen(&mut state),
            GamePhase::Voting => vote_screen(&mut state),
            GamePhase::RoundResults => results_screen(&mut state),
            GamePhase::Ended => {
                println!("\nfinal standings:");
                print_scoreboard(&state);
                false
            }
        };
        if !keep_going {
            return;
        }
    }
}

fn lobby_screen(state: &mut GameState) -> bool {
    println!("\n== lobby ==");
    if state.players().is_empty() {
        println!("no players yet");
    }
    for player in state.players() {
        println!("  {}", player.name);
    }
    let decks: Vec<String> = state
        .catalog()
        .deck_names()
        .into_iter()
        .map(|name| {
            if state.is_deck_selected(&name) {
                format!("[{name}]")
            } else {
                name
            }
        })
        .collect();
    println!("decks: {}  ({} themes)", decks.join(" "), state.pool().len());
    println!("a <name>=add  r <name>=remove  d <deck>=toggle  t <theme>=custom  s=start  b=back");

    let Some(line) = prompt("lobby> ") else { return false };
    let (cmd, arg) = split_command(&line);
    match cmd {
        "a" => report(state.add_player(arg).map(|_| ())),
        "r" => {
            let id = state
                .players()
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(arg))
                .map(|p| p.id.clone());
            match id {
                Some(id) => state.remove_player(&id),
                None => println!("no player named \"{arg}\""),
            }
        }
        "d" => report(state.toggle_deck(arg)),
        "t" => report(state.add_custom_theme(arg)),
        "s" => report(state.start_round()),
        "b" => return false,
        "" => {}
        _ => println!("unknown command"),
    }
    true
}

fn theme_screen(state: &mut GameState) -> bool {
    println!("\n== round {} ==", state.round().number);
    println!("theme: {}", state.theme().unwrap_or("?"));
    println!("s=skip theme  g=start submissions  t <theme>=add custom  e=end game");

    let Some(line) = prompt("theme> ") else { return false };
    let (cmd, arg) = split_command(&line);
    match cmd {
        "s" => report(state.skip_theme()),
        "g" => report(state.begin_submissions()),
        "t" => report(state.add_custom_theme(arg)),
        "e" => report(state.end_game()),
        "" => {}
        _ => println!("unknown command"),
    }
    true
}

fn submit_screen(state: &mut GameState) -> bool {
    let Some(submitter) = state.current_submitter().cloned() else {
        return true;
    };
    let name = state.player_name(&submitter).to_string();
    println!("\ntheme: {}", state.theme().unwrap_or("?"));
    println!("(pass the phone to {name})");
    let Some(song) = prompt(&format!("{name}, your song: ")) else {
        return false;
    };
    report(state.submit(&song));
    true
}

fn vote_screen(state: &mut GameState) -> bool {
    let Some(voter) = state.current_voter().cloned() else {
        return true;
    };
    let options: Vec<(String, String, String)> = state
        .options_for_current_voter()
        .into_iter()
        .map(|s| {
            (
                s.player_id.clone(),
                state.player_name(&s.player_id).to_string(),
                s.song.clone(),
            )
        })
        .collect();

    println!("\n{} votes for the best answer:", state.player_name(&voter));
    for (i, (_, name, song)) in options.iter().enumerate() {
        println!("  {}) {name}: {song}", i + 1);
    }

    let Some(choice) = prompt("pick a number: ") else {
        return false;
    };
    let picked = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i));
    match picked {
        Some((target, _, _)) => report(state.vote(target)),
        None => println!("pick one of the listed numbers"),
    }
    true
}

fn results_screen(state: &mut GameState) -> bool {
    println!("\n== round {} results ==", state.round().number);
    for (id, votes) in state.round_results() {
        let song = state
            .round()
            .submissions
            .iter()
            .find(|s| s.player_id == id)
            .map(|s| s.song.as_str())
            .unwrap_or("-");
        println!("  {}: {votes} vote(s)  ({song})", state.player_name(&id));
    }
    print_scoreboard(state);
    println!("n=next round  e=end game  x=export json");

    let Some(line) = prompt("results> ") else { return false };
    match line.as_str() {
        "n" => report(state.advance_round()),
        "e" => report(state.end_game()),
        "x" => match serde_json::to_string_pretty(&state.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("! {e}"),
        },
        "" => {}
        _ => println!("unknown command"),
    }
    true
}

fn print_scoreboard(state: &GameState) {
    println!("scoreboard:");
    for (i, player) in state.ranked().iter().enumerate() {
        println!("  {}. {} - {} pts", i + 1, player.name, player.score);
    }
}
