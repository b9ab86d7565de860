// src/bin/solitaire_cli.rs

use std::io::{self, BufRead, Write};

use tracing::warn;
use tracing_subscriber::EnvFilter;

use solitaire_engine::api::{build_game_view, render_board, try_apply_command, Command};
use solitaire_engine::domain::Scoreboard;
use solitaire_engine::engine::{Game, RandomSource};
use solitaire_engine::infra::GameConfig;

const HELP: &str = "\
Команды (номера с 1):
  d            открыть карты из прикупа
  pc <к>       прикуп -> колонка
  cc <к> <с> <к2>  колонка (со строки с) -> колонка
  ce <к>       колонка -> дом
  ec <д> <к>   дом -> колонка
  pe           прикуп -> дом
  u            отменить ход
  n            новая партия
  r            рейтинг
  q            выход";

/// Чем закончилась партия.
enum Outcome {
    Won(u32),
    NewGame,
    Quit,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match GameConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    println!("solitaire_cli: режим {}, seed {:?}", config.mode, config.seed);
    println!("{HELP}");

    // Рейтинг живёт ровно столько, сколько процесс, и принадлежит этому циклу.
    let mut scoreboard = Scoreboard::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut game = config.start_game();
    loop {
        match play(&mut game, &mut input, &mut out, &scoreboard) {
            Outcome::Won(moves) => {
                scoreboard.record(moves);
                let shown = writeln!(out, "\nПоздравляем!!! Ходов: {moves}")
                    .and_then(|_| write_scoreboard(&mut out, &scoreboard));
                if shown.is_err() {
                    break;
                }
            }
            Outcome::NewGame => {}
            Outcome::Quit => break,
        }
        game = Game::new_game(config.mode, game.into_rng());
    }

    if let Err(err) = write_scoreboard(&mut out, &scoreboard) {
        warn!(target: "cli", %err, "не удалось вывести рейтинг");
    }
}

/// Одна партия: рисуем доску, читаем команду, применяем.
/// Ошибка ввода или вывода заканчивает сессию.
fn play<R: RandomSource>(
    game: &mut Game<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    scoreboard: &Scoreboard,
) -> Outcome {
    match run_game(game, input, out, scoreboard) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(target: "cli", %err, "консоль недоступна, выходим");
            Outcome::Quit
        }
    }
}

fn run_game<R: RandomSource>(
    game: &mut Game<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    scoreboard: &Scoreboard,
) -> io::Result<Outcome> {
    let mut line = String::new();

    loop {
        let view = build_game_view(game);
        if view.is_won {
            return Ok(Outcome::Won(view.move_count));
        }

        writeln!(out)?;
        write!(out, "{}> ", render_board(&view))?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Outcome::Quit);
        }

        match line.trim() {
            "" => {}
            "q" => return Ok(Outcome::Quit),
            "n" => return Ok(Outcome::NewGame),
            "h" | "?" => writeln!(out, "{HELP}")?,
            "r" => write_scoreboard(out, scoreboard)?,
            text => match text.parse::<Command>() {
                Ok(command) => {
                    // В dev-CLI показываем причину отказа.
                    if let Err(reason) = try_apply_command(game, &command) {
                        writeln!(out, "Ход отклонён: {reason}")?;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            },
        }
    }
}

fn write_scoreboard(out: &mut impl Write, scoreboard: &Scoreboard) -> io::Result<()> {
    writeln!(out, "\nРейтинг\n")?;
    if scoreboard.is_empty() {
        return writeln!(out, "Нет результатов");
    }
    for (place, moves) in scoreboard.scores().iter().enumerate() {
        writeln!(out, "{:2}. {moves}", place + 1)?;
    }
    Ok(())
}
