use crate::engine::{Game, RandomSource};

use super::dto::{CardDto, GameViewDto};

/// Сформировать DTO партии для внешнего слоя.
pub fn build_game_view<R: RandomSource>(game: &Game<R>) -> GameViewDto {
    let columns = game
        .columns()
        .iter()
        .map(|column| column.iter().map(CardDto::from).collect())
        .collect();

    let foundation_tops = game
        .foundations()
        .iter()
        .map(|pile| pile.last().map(CardDto::from))
        .collect();

    let foundation_sizes = game.foundations().iter().map(Vec::len).collect();

    GameViewDto {
        mode: game.mode(),
        columns,
        foundation_tops,
        foundation_sizes,
        drawn: game.drawn_cards().iter().map(CardDto::from).collect(),
        stock_remaining: game.stock_len(),
        move_count: game.move_count(),
        undo_available: game.undo_depth(),
        is_won: game.check_if_win(),
    }
}

/// Текстовая отрисовка доски (как в консольной версии: колонки построчно,
/// номер строки справа, затем прикуп, дома и счётчик ходов).
pub fn render_board(view: &GameViewDto) -> String {
    let mut out = String::new();

    for i in 1..=view.columns.len() {
        out.push_str(&format!("  {i} "));
    }
    out.push('\n');

    let height = view.columns.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..height {
        for column in &view.columns {
            out.push(' ');
            match column.get(row) {
                Some(card) => out.push_str(&card.label),
                None => out.push_str("   "),
            }
        }
        out.push_str(&format!(" {}\n", row + 1));
    }

    out.push('\n');
    out.push_str(&format!("Осталось: {} ", view.stock_remaining));
    for card in &view.drawn {
        out.push_str(&card.label);
    }
    out.push('\n');

    for top in &view.foundation_tops {
        match top {
            Some(card) => out.push_str(&card.label),
            None => out.push_str("###"),
        }
        out.push(' ');
    }
    out.push('\n');

    out.push_str(&format!("Ходов: {}\n", view.move_count));
    out
}
