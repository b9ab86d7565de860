// tests/engine_undo_tests.rs
//
// Отмена ходов: точное восстановление доски, ёмкость журнала,
// и случайная партия, где каждый успешный ход проверяется цепочкой
// "ход -> undo -> та же доска -> ход снова".

mod common;

use common::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solitaire_engine::api::{try_apply_command, Command};
use solitaire_engine::domain::{GameMode, Rank, Suit, COLUMN_COUNT, FOUNDATION_COUNT};
use solitaire_engine::engine::{Game, MoveError, MoveKind, RandomSource, UNDO_CAPACITY};

/// Выполнить ход, отменить его, убедиться что доска вернулась, и выполнить снова.
fn assert_round_trip<R: RandomSource>(game: &mut Game<R>, command: Command) {
    let before = game.snapshot();
    try_apply_command(game, &command).unwrap();
    let after = game.snapshot();
    assert_ne!(before, after);

    game.undo();
    assert_eq!(game.snapshot(), before, "undo of {command:?} must restore the board");

    try_apply_command(game, &command).unwrap();
    assert_eq!(game.snapshot(), after);
    assert_invariants(game);
}

#[test]
fn undo_draw_restores_cursor() {
    let mut game = unshuffled_game(GameMode::Hard);
    assert_round_trip(&mut game, Command::Draw);
    assert_eq!(game.draw_pile_index(), 3);
}

#[test]
fn undo_pile_to_column_returns_card_to_same_position() {
    let mut columns = no_columns();
    columns[2] = vec![up(Suit::Clubs, Rank::Ten)];
    let drawn = vec![
        up(Suit::Spades, Rank::Two),
        up(Suit::Diamonds, Rank::Nine),
    ];
    let mut game = layout(GameMode::Easy, columns, no_foundations(), drawn);

    assert_round_trip(&mut game, Command::PileToColumn { to_column: 2 });
    assert_eq!(game.undo_log().peek().map(|m| m.kind()), Some(MoveKind::PileToColumn));

    game.undo();
    assert_eq!(game.playable_pile_card(), Some(&up(Suit::Diamonds, Rank::Nine)));
    assert_eq!(game.draw_pile_index(), 2);
}

#[test]
fn undo_between_columns_hides_flipped_card_again() {
    let mut columns = no_columns();
    columns[0] = vec![
        down(Suit::Hearts, Rank::Two),
        up(Suit::Hearts, Rank::Jack),
        up(Suit::Clubs, Rank::Ten),
    ];
    columns[1] = vec![up(Suit::Spades, Rank::Queen)];
    let mut game = layout(GameMode::Easy, columns, no_foundations(), vec![]);

    assert_round_trip(
        &mut game,
        Command::BetweenColumns {
            from_column: 0,
            from_row: 1,
            to_column: 1,
        },
    );
    assert!(game.column(0).unwrap()[0].face_up);

    game.undo();
    let column = game.column(0).unwrap();
    assert_eq!(column.len(), 3);
    assert!(!column[0].face_up, "revealed card must be hidden again");
}

#[test]
fn undo_between_columns_keeps_already_open_card_open() {
    let mut columns = no_columns();
    columns[0] = vec![up(Suit::Spades, Rank::Nine), up(Suit::Diamonds, Rank::Eight)];
    columns[1] = vec![up(Suit::Clubs, Rank::Nine)];
    let mut game = layout(GameMode::Easy, columns, no_foundations(), vec![]);

    assert_round_trip(
        &mut game,
        Command::BetweenColumns {
            from_column: 0,
            from_row: 1,
            to_column: 1,
        },
    );
    game.undo();
    assert!(game.column(0).unwrap().iter().all(|c| c.face_up));
}

#[test]
fn undo_king_move_into_empty_column() {
    let mut columns = no_columns();
    columns[3] = vec![up(Suit::Hearts, Rank::King), up(Suit::Clubs, Rank::Queen)];
    let mut game = layout(GameMode::Easy, columns, no_foundations(), vec![]);

    assert_round_trip(
        &mut game,
        Command::BetweenColumns {
            from_column: 3,
            from_row: 0,
            to_column: 5,
        },
    );
    assert!(game.column(3).unwrap().is_empty());
    game.undo();
    assert!(game.column(5).unwrap().is_empty());
    assert_eq!(game.column(3).unwrap().len(), 2);
}

#[test]
fn undo_column_to_ending_restores_flip() {
    let mut columns = no_columns();
    columns[4] = vec![down(Suit::Clubs, Rank::Five), up(Suit::Spades, Rank::Ace)];
    let mut game = layout(GameMode::Easy, columns, no_foundations(), vec![]);

    assert_round_trip(&mut game, Command::ColumnToEnding { from_column: 4 });
    assert_eq!(game.foundation_top(2), Some(&up(Suit::Spades, Rank::Ace)));

    game.undo();
    assert!(game.foundations()[2].is_empty());
    assert_eq!(
        game.column(4).unwrap(),
        &[down(Suit::Clubs, Rank::Five), up(Suit::Spades, Rank::Ace)]
    );
}

#[test]
fn undo_ending_to_column() {
    let mut foundations = no_foundations();
    foundations[1] = run_of(Suit::Hearts, Rank::Six);
    let mut columns = no_columns();
    columns[0] = vec![up(Suit::Clubs, Rank::Seven)];
    let mut game = layout(GameMode::Easy, columns, foundations, vec![]);

    assert_round_trip(
        &mut game,
        Command::EndingToColumn {
            from_stack: 1,
            to_column: 0,
        },
    );
    game.undo();
    assert_eq!(game.foundations()[1].len(), 6);
    assert_eq!(game.column(0).unwrap().len(), 1);
}

#[test]
fn undo_pile_to_ending() {
    let drawn = vec![up(Suit::Diamonds, Rank::Ace)];
    let mut game = layout(GameMode::Hard, no_columns(), no_foundations(), drawn);

    assert_round_trip(&mut game, Command::PileToEnding);
    game.undo();
    assert_eq!(game.playable_pile_card(), Some(&up(Suit::Diamonds, Rank::Ace)));
    assert!(game.foundations()[0].is_empty());
}

#[test]
fn undo_with_empty_log_is_a_noop() {
    let mut game = unshuffled_game(GameMode::Easy);
    let before = game.snapshot();

    game.undo();
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.try_undo(), Err(MoveError::NothingToUndo));
}

/// Журнал помнит только последние ходы: 5 открытий, 3 отмены, 4-я ничего не делает.
#[test]
fn undo_depth_is_bounded() {
    let mut game = unshuffled_game(GameMode::Easy);
    for _ in 0..5 {
        game.draw_cards();
    }
    assert_eq!(game.undo_depth(), UNDO_CAPACITY);
    assert_eq!(game.undo_log().capacity(), UNDO_CAPACITY);

    for _ in 0..UNDO_CAPACITY {
        game.undo();
    }
    assert_eq!(game.draw_pile_index(), 2);
    assert_eq!(game.move_count(), 2);

    game.undo();
    assert_eq!(game.draw_pile_index(), 2);
    assert_eq!(game.move_count(), 2);
    assert_eq!(game.try_undo(), Err(MoveError::NothingToUndo));
}

fn random_command(rng: &mut StdRng, game: &Game<impl RandomSource>) -> Command {
    match rng.gen_range(0..6) {
        0 => Command::Draw,
        1 => Command::PileToColumn {
            to_column: rng.gen_range(0..COLUMN_COUNT),
        },
        2 => {
            let from_column = rng.gen_range(0..COLUMN_COUNT);
            let height = game.column(from_column).map_or(0, |c| c.len()).max(1);
            Command::BetweenColumns {
                from_column,
                from_row: rng.gen_range(0..height),
                to_column: rng.gen_range(0..COLUMN_COUNT),
            }
        }
        3 => Command::ColumnToEnding {
            from_column: rng.gen_range(0..COLUMN_COUNT),
        },
        4 => Command::EndingToColumn {
            from_stack: rng.gen_range(0..FOUNDATION_COUNT),
            to_column: rng.gen_range(0..COLUMN_COUNT),
        },
        _ => Command::PileToEnding,
    }
}

/// Случайная партия: инварианты держатся после каждого хода, а каждый
/// записанный ход отменяется ровно в предыдущее состояние.
#[test]
fn random_playthrough_keeps_invariants_and_exact_undo() {
    for seed in [1_u64, 7, 42, 2024] {
        let mut game = Game::with_seed(GameMode::Easy, seed);
        let mut picker = StdRng::seed_from_u64(seed ^ 0xC0FFEE);
        let mut accepted = 0;

        for _ in 0..600 {
            let command = random_command(&mut picker, &game);
            let before = game.snapshot();

            match try_apply_command(&mut game, &command) {
                Err(_) => {
                    assert_eq!(game.snapshot(), before, "rejected {command:?} changed the board");
                }
                // Сброс прикупа ходом не считается и не отменяется.
                Ok(()) if game.move_count() == before.move_count => {
                    assert_eq!(game.draw_pile_index(), 0);
                }
                Ok(()) => {
                    accepted += 1;
                    let after = game.snapshot();
                    assert_eq!(after.move_count, before.move_count + 1);

                    game.undo();
                    assert_eq!(game.snapshot(), before, "undo of {command:?} was not exact");

                    try_apply_command(&mut game, &command).unwrap();
                    assert_eq!(game.snapshot(), after);
                }
            }
            assert_invariants(&game);
        }

        assert!(accepted > 0, "seed {seed}: no move was ever accepted");
    }
}
