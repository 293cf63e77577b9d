//! Engine integration tests.

use klrs::{
    Action, ActionError, Card, DECK_SIZE, DrawError, Game, GameOptions, GameStatus,
    ParseActionError, Pile, PileId, RedealError, Suit, Table, TransferError, rules,
    shuffle::riffle_shuffle,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a pile from cards listed bottom-to-top.
fn pile(cards: &[Card]) -> Pile {
    Pile::from_cards(cards.to_vec())
}

fn full_deck_sorted(table: &Table) -> Vec<Card> {
    let mut cards: Vec<Card> = [&table.draw, &table.waste]
        .into_iter()
        .chain(table.hidden.iter())
        .chain(table.visible.iter())
        .chain(table.foundations.iter())
        .flat_map(|p| p.cards().iter().copied())
        .collect();
    cards.sort_by_key(|c| (c.rank, c.suit.index()));
    cards
}

#[test]
fn transfer_moves_run_in_order() {
    let mut a = pile(&[
        card(Suit::Diamonds, 5),
        card(Suit::Clubs, 4),
        card(Suit::Hearts, 3),
        card(Suit::Spades, 2),
    ]);
    let mut b = pile(&[card(Suit::Diamonds, 9)]);

    Pile::transfer(&mut a, &mut b, 2).unwrap();

    assert_eq!(a.cards(), &[card(Suit::Diamonds, 5), card(Suit::Clubs, 4)]);
    assert_eq!(
        b.cards(),
        &[
            card(Suit::Diamonds, 9),
            card(Suit::Hearts, 3),
            card(Suit::Spades, 2),
        ]
    );
    // The old source top is the new destination top.
    assert_eq!(b.top(), Some(card(Suit::Spades, 2)));
}

#[test]
fn transfer_boundary_cases() {
    // Whole pile onto an empty destination.
    let mut a = pile(&[card(Suit::Diamonds, 1), card(Suit::Clubs, 2)]);
    let mut b = Pile::new();
    Pile::transfer(&mut a, &mut b, 2).unwrap();
    assert!(a.is_empty());
    assert_eq!(b.len(), 2);
    assert_eq!(b.bottom(), Some(card(Suit::Diamonds, 1)));
    assert_eq!(b.top(), Some(card(Suit::Clubs, 2)));

    // Single card back the other way.
    Pile::transfer(&mut b, &mut a, 1).unwrap();
    assert_eq!(a.cards(), &[card(Suit::Clubs, 2)]);
    assert_eq!(b.cards(), &[card(Suit::Diamonds, 1)]);

    let mut c = Pile::new();
    assert!(c.top().is_none());
    c.push(card(Suit::Hearts, 12));
    assert_eq!(c.top(), c.bottom());
    assert_eq!(c.pop(), Some(card(Suit::Hearts, 12)));
    assert!(c.pop().is_none());
}

#[test]
fn transfer_then_reverse_transfer_is_identity() {
    let original_a = pile(&[
        card(Suit::Diamonds, 7),
        card(Suit::Clubs, 6),
        card(Suit::Hearts, 5),
    ]);
    let original_b = pile(&[card(Suit::Spades, 13), card(Suit::Hearts, 12)]);

    for n in 1..=3 {
        let mut a = original_a.clone();
        let mut b = original_b.clone();
        Pile::transfer(&mut a, &mut b, n).unwrap();
        Pile::transfer(&mut b, &mut a, n).unwrap();
        assert_eq!(a, original_a, "n = {n}");
        assert_eq!(b, original_b, "n = {n}");
    }
}

#[test]
fn transfer_rejects_bad_counts_without_mutating() {
    let mut a = pile(&[card(Suit::Diamonds, 1)]);
    let mut b = Pile::new();

    assert_eq!(
        Pile::transfer(&mut a, &mut b, 0).unwrap_err(),
        TransferError::ZeroCards
    );
    assert_eq!(
        Pile::transfer(&mut a, &mut b, 2).unwrap_err(),
        TransferError::NotEnoughCards
    );
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
}

#[test]
fn stack_move_legality_matrix() {
    // Empty target: only Kings, of any suit.
    let empty = Pile::new();
    for suit in Suit::ALL {
        for rank in 1..=13 {
            assert_eq!(
                rules::can_single_card_move(card(suit, rank), &empty),
                rank == 13,
            );
        }
    }

    // Non-empty target: opposite color and exactly one rank below the top.
    for target_suit in Suit::ALL {
        for target_rank in 1..=13u8 {
            let target = pile(&[card(target_suit, target_rank)]);
            for suit in Suit::ALL {
                for rank in 1..=13u8 {
                    let expected =
                        suit.color() != target_suit.color() && rank + 1 == target_rank;
                    assert_eq!(
                        rules::can_single_card_move(card(suit, rank), &target),
                        expected,
                        "{rank}:{} onto {target_rank}:{}",
                        suit.index(),
                        target_suit.index(),
                    );
                }
            }
        }
    }
}

#[test]
fn stack_move_judges_run_bottom() {
    let run = pile(&[card(Suit::Hearts, 7), card(Suit::Spades, 6)]);
    let target = pile(&[card(Suit::Clubs, 8)]);
    assert!(rules::can_stack_move(&run, &target));

    let wrong_target = pile(&[card(Suit::Clubs, 7)]);
    assert!(!rules::can_stack_move(&run, &wrong_target));
    assert!(!rules::can_stack_move(&Pile::new(), &target));
}

#[test]
fn foundation_move_legality() {
    let empty = Pile::new();
    for rank in 1..=13u8 {
        assert_eq!(
            rules::can_foundation_move(card(Suit::Hearts, rank), &empty),
            rank == 1,
        );
    }

    let hearts_to_four = pile(&[
        card(Suit::Hearts, 1),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
    ]);
    assert!(rules::can_foundation_move(card(Suit::Hearts, 5), &hearts_to_four));
    assert!(!rules::can_foundation_move(card(Suit::Diamonds, 5), &hearts_to_four));
    assert!(!rules::can_foundation_move(card(Suit::Hearts, 6), &hearts_to_four));
}

#[test]
fn foundation_to_tableau_legality() {
    let foundation = pile(&[card(Suit::Hearts, 1), card(Suit::Hearts, 2)]);
    let target = pile(&[card(Suit::Spades, 3)]);
    assert!(rules::can_foundation_to_tableau(&foundation, &target));
    assert!(!rules::can_foundation_to_tableau(&Pile::new(), &target));
}

#[test]
fn shuffle_is_a_permutation_and_deterministic() {
    let mut table = Table::with_fresh_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    riffle_shuffle(&mut table.draw, 1000, &mut rng);

    assert_eq!(table.draw.len(), DECK_SIZE);
    let sorted = full_deck_sorted(&table);
    assert_eq!(sorted, full_deck_sorted(&Table::with_fresh_deck()));
    assert!(table.check_integrity());

    // Same seed, same order.
    let mut again = Table::with_fresh_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    riffle_shuffle(&mut again.draw, 1000, &mut rng);
    assert_eq!(table.draw, again.draw);

    // Different seed, different order (with overwhelming probability).
    let mut other = Table::with_fresh_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    riffle_shuffle(&mut other.draw, 1000, &mut rng);
    assert_ne!(table.draw, other.draw);
}

#[test]
fn fresh_deal_layout() {
    let game = Game::new(GameOptions::default(), 42);
    let table = &game.table;

    assert_eq!(table.draw.len(), 24);
    assert!(table.waste.is_empty());
    for (i, hidden) in table.hidden.iter().enumerate() {
        assert_eq!(hidden.len(), i);
    }
    for visible in &table.visible {
        assert_eq!(visible.len(), 1);
    }
    assert!(table.check_integrity());
}

#[test]
fn completed_foundations_win() {
    let mut table = Table::empty();
    for (f, suit) in Suit::ALL.into_iter().enumerate() {
        table.foundations[f] = pile(
            &(1..=13)
                .map(|rank| card(suit, rank))
                .collect::<Vec<_>>(),
        );
    }

    assert!(table.is_won());
    assert!(table.check_integrity());
    let game = Game::from_table(table, GameOptions::default());
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn redeal_restores_draw_order() {
    let wasted: Vec<Card> = (1..=5).map(|rank| card(Suit::Clubs, rank)).collect();
    let mut table = Table::empty();
    // Bottom-to-top: rank 1 was wasted first, rank 5 most recently.
    table.waste = pile(&wasted);

    let mut game = Game::from_table(table, GameOptions::default());
    game.redeal().unwrap();
    assert_eq!(game.table.draw.len(), 5);
    assert!(game.table.waste.is_empty());

    // The least-recently-wasted card comes off the draw pile first.
    assert_eq!(game.draw().unwrap(), 3);
    assert_eq!(
        game.table.waste.cards(),
        &[
            card(Suit::Clubs, 1),
            card(Suit::Clubs, 2),
            card(Suit::Clubs, 3),
        ]
    );
    assert_eq!(game.table.draw.top(), Some(card(Suit::Clubs, 4)));

    // Two cards left; a short draw moves both.
    assert_eq!(game.draw().unwrap(), 2);
    assert!(game.table.draw.is_empty());
    assert_eq!(game.draw().unwrap_err(), DrawError::EmptyDraw);
}

#[test]
fn redeal_rejects_invalid_positions() {
    let mut table = Table::empty();
    table.draw = pile(&[card(Suit::Hearts, 2)]);
    table.waste = pile(&[card(Suit::Clubs, 9)]);
    let mut game = Game::from_table(table, GameOptions::default());
    assert_eq!(game.redeal().unwrap_err(), RedealError::DrawNotEmpty);

    let mut game = Game::from_table(Table::empty(), GameOptions::default());
    assert_eq!(game.redeal().unwrap_err(), RedealError::WasteEmpty);
}

#[test]
fn dead_position_is_stuck_not_looped() {
    // No adjacent ranks, no aces, no kings: nothing ever moves.
    let mut table = Table::empty();
    let ranks = [4, 4, 4, 4, 6, 6, 6];
    for (i, rank) in ranks.into_iter().enumerate() {
        table.visible[i] = pile(&[card(Suit::ALL[i % 4], rank)]);
    }
    table.waste = pile(&[card(Suit::Diamonds, 9), card(Suit::Clubs, 9)]);

    let mut game = Game::from_table(table, GameOptions::default());
    assert_eq!(game.autoplay(), GameStatus::Stuck);
    // One redeal happened, the waste was drawn through once, then stuck.
    assert!(game.table.draw.is_empty());
}

#[test]
fn king_on_empty_column_is_suppressed_for_solver_only() {
    let mut table = Table::empty();
    table.visible[0] = pile(&[card(Suit::Spades, 13)]);

    let mut game = Game::from_table(table.clone(), GameOptions::default());
    assert_eq!(game.autoplay(), GameStatus::Stuck);
    // The King stayed put instead of shuffling between empty columns.
    assert_eq!(game.table.visible[0].cards(), &[card(Suit::Spades, 13)]);

    // The protocol still enumerates and executes the move.
    let mut game = Game::from_table(table, GameOptions::default());
    let wanted = Action::TableauToTableau {
        from: 0,
        count: 1,
        to: 1,
    };
    assert!(game.legal_actions().contains(&wanted));
    game.execute(wanted).unwrap();
    assert_eq!(game.table.visible[1].cards(), &[card(Suit::Spades, 13)]);
}

#[test]
fn king_moves_when_it_frees_a_facedown_card() {
    let mut table = Table::empty();
    table.hidden[0] = pile(&[card(Suit::Diamonds, 12)]);
    table.visible[0] = pile(&[card(Suit::Spades, 13)]);

    let mut game = Game::from_table(table, GameOptions::default());
    assert_eq!(game.autoplay(), GameStatus::Stuck);

    // King went to the first empty column, the Queen was flipped and then
    // stacked onto it.
    assert_eq!(
        game.table.visible[1].cards(),
        &[card(Suit::Spades, 13), card(Suit::Diamonds, 12)]
    );
    assert!(game.table.visible[0].is_empty());
    assert!(game.table.hidden[0].is_empty());
}

#[test]
fn solver_prefers_waste_over_tableau_moves() {
    let mut table = Table::empty();
    table.visible[0] = pile(&[card(Suit::Spades, 7)]);
    table.visible[1] = pile(&[card(Suit::Clubs, 6)]);
    table.waste = pile(&[card(Suit::Hearts, 6)]);

    let mut game = Game::from_table(table, GameOptions::default());
    game.autoplay();

    // The waste six claimed the seven before the tableau six could.
    assert_eq!(
        game.table.visible[0].cards(),
        &[card(Suit::Spades, 7), card(Suit::Hearts, 6)]
    );
    assert_eq!(game.table.visible[1].cards(), &[card(Suit::Clubs, 6)]);
}

#[test]
fn solver_terminates_and_conserves_cards() {
    for seed in 0..40 {
        let mut game = Game::new(GameOptions::default(), seed);
        let status = game.autoplay();
        assert!(status.is_terminal(), "seed {seed}");
        assert!(game.table.check_integrity(), "seed {seed}");
    }
}

#[test]
fn autoplay_is_deterministic_per_seed() {
    let mut a = Game::new(GameOptions::default(), 1234);
    let mut b = Game::new(GameOptions::default(), 1234);
    assert_eq!(a.table, b.table);
    assert_eq!(a.autoplay(), b.autoplay());
    assert_eq!(a.table, b.table);
}

#[test]
fn action_tokens_round_trip() {
    let actions = [
        (Action::Draw, "D"),
        (Action::Redeal, "F"),
        (Action::WasteToTableau { to: 3 }, "W:1:T3"),
        (Action::WasteToFoundation { to: 0 }, "W:1:F0"),
        (
            Action::TableauToTableau {
                from: 0,
                count: 2,
                to: 5,
            },
            "T0:2:T5",
        ),
        (Action::TableauToFoundation { from: 6, to: 2 }, "T6:1:F2"),
        (Action::FoundationToTableau { from: 1, to: 4 }, "F1:1:T4"),
    ];
    for (action, token) in actions {
        assert_eq!(action.to_string(), token);
        assert_eq!(token.parse::<Action>().unwrap(), action);
    }
}

#[test]
fn malformed_tokens_are_rejected() {
    let cases = [
        ("", ParseActionError::Empty),
        ("X", ParseActionError::Malformed),
        ("X0:1:T1", ParseActionError::UnknownZone),
        ("W", ParseActionError::Malformed),
        ("T0:1", ParseActionError::Malformed),
        ("T0:1:T1:T2", ParseActionError::Malformed),
        ("W:1:W", ParseActionError::Malformed),
        ("F0:1:F1", ParseActionError::Malformed),
        ("T7:1:T0", ParseActionError::BadIndex),
        ("W:1:T9", ParseActionError::BadIndex),
        ("W:1:F4", ParseActionError::BadIndex),
        ("T0:x:T1", ParseActionError::BadCount),
        ("T0:0:T1", ParseActionError::BadCount),
        ("W:2:T1", ParseActionError::BadCount),
        ("F0:3:T1", ParseActionError::BadCount),
    ];
    for (token, expected) in cases {
        assert_eq!(token.parse::<Action>().unwrap_err(), expected, "{token:?}");
    }
}

#[test]
fn legal_actions_match_the_position() {
    let mut table = Table::empty();
    table.draw = pile(&[card(Suit::Diamonds, 10)]);
    table.waste = pile(&[card(Suit::Hearts, 6)]);
    table.visible[0] = pile(&[card(Suit::Spades, 7)]);
    table.visible[1] = pile(&[card(Suit::Diamonds, 8)]);
    table.foundations[2] = pile(&(1..=5).map(|r| card(Suit::Hearts, r)).collect::<Vec<_>>());

    let game = Game::from_table(table, GameOptions::default());
    let actions = game.legal_actions();

    assert_eq!(actions.first(), Some(&Action::Draw));
    assert!(!actions.contains(&Action::Redeal));
    // Waste six fits the black seven and continues the hearts foundation.
    assert!(actions.contains(&Action::WasteToTableau { to: 0 }));
    assert!(actions.contains(&Action::WasteToFoundation { to: 2 }));
    // The seven run moves onto the eight.
    assert!(actions.contains(&Action::TableauToTableau {
        from: 0,
        count: 1,
        to: 1,
    }));
    // The foundation five may come back onto a black six: none on the
    // tableau, so no foundation moves are offered.
    assert!(
        !actions
            .iter()
            .any(|a| matches!(a, Action::FoundationToTableau { .. }))
    );

    // The protocol line is the same set, space-terminated.
    let mut line = String::new();
    game.write_actions(&mut line).unwrap();
    assert!(line.starts_with("D "));
    assert!(line.contains("W:1:F2 "));
    assert!(line.ends_with('\n'));
}

#[test]
fn card_wire_tokens_and_letters() {
    let ten_of_hearts = card(Suit::Hearts, 10);
    assert_eq!(ten_of_hearts.to_string(), "10:2");
    assert_eq!(ten_of_hearts.rank_letter(), 'T');
    assert_eq!(ten_of_hearts.suit.letter(), 'H');
    assert_eq!(card(Suit::Spades, 1).rank_letter(), 'A');
    assert_eq!(card(Suit::Diamonds, 13).to_string(), "13:0");
}

#[test]
fn redeal_token_offered_whenever_draw_is_empty() {
    let mut table = Table::empty();
    table.visible[0] = pile(&[card(Suit::Spades, 4)]);
    let mut game = Game::from_table(table, GameOptions::default());

    let actions = game.legal_actions();
    assert_eq!(actions.first(), Some(&Action::Redeal));
    // Executing it with an empty waste fails cleanly, state unchanged.
    let before = game.table.clone();
    assert_eq!(
        game.execute(Action::Redeal).unwrap_err(),
        ActionError::Redeal(RedealError::WasteEmpty)
    );
    assert_eq!(game.table, before);
}

#[test]
fn execute_enumerated_run_move_and_flip() {
    let mut table = Table::empty();
    table.hidden[0] = pile(&[card(Suit::Diamonds, 2)]);
    table.visible[0] = pile(&[card(Suit::Hearts, 7), card(Suit::Spades, 6)]);
    table.visible[1] = pile(&[card(Suit::Clubs, 8)]);

    let mut game = Game::from_table(table, GameOptions::default());
    let run_move = Action::TableauToTableau {
        from: 0,
        count: 2,
        to: 1,
    };
    assert!(game.legal_actions().contains(&run_move));
    game.execute(run_move).unwrap();

    assert_eq!(
        game.table.visible[1].cards(),
        &[
            card(Suit::Clubs, 8),
            card(Suit::Hearts, 7),
            card(Suit::Spades, 6),
        ]
    );
    // The emptied column flipped its face-down card.
    assert_eq!(game.table.visible[0].cards(), &[card(Suit::Diamonds, 2)]);
    assert!(game.table.hidden[0].is_empty());
    assert_eq!(game.table.pile(PileId::Visible(1)).map(Pile::len), Some(3));
    assert!(game.table.pile(PileId::Visible(9)).is_none());
}

#[test]
fn execute_rejects_illegal_moves_without_mutating() {
    let mut table = Table::empty();
    table.waste = pile(&[card(Suit::Hearts, 9)]);
    table.visible[0] = pile(&[card(Suit::Spades, 7)]);
    table.draw = pile(&[card(Suit::Clubs, 3)]);

    let mut game = Game::from_table(table, GameOptions::default());
    let before = game.table.clone();

    let cases = [
        (Action::WasteToTableau { to: 0 }, ActionError::IllegalMove),
        (Action::WasteToFoundation { to: 0 }, ActionError::IllegalMove),
        (
            Action::TableauToTableau {
                from: 0,
                count: 1,
                to: 0,
            },
            ActionError::IllegalMove,
        ),
        (
            Action::TableauToTableau {
                from: 1,
                count: 1,
                to: 0,
            },
            ActionError::NotEnoughCards,
        ),
        (
            Action::TableauToTableau {
                from: 0,
                count: 2,
                to: 1,
            },
            ActionError::NotEnoughCards,
        ),
        (Action::TableauToFoundation { from: 0, to: 0 }, ActionError::IllegalMove),
        (Action::FoundationToTableau { from: 0, to: 0 }, ActionError::IllegalMove),
        (Action::Redeal, ActionError::Redeal(RedealError::DrawNotEmpty)),
    ];
    for (action, expected) in cases {
        assert_eq!(game.execute(action).unwrap_err(), expected, "{action}");
        assert_eq!(game.table, before, "{action}");
    }
}

#[test]
fn state_dump_has_fixed_shape() {
    let mut table = Table::empty();
    table.draw = pile(&[card(Suit::Hearts, 10), card(Suit::Spades, 2)]);
    table.foundations[0] = pile(&[card(Suit::Diamonds, 1), card(Suit::Diamonds, 2)]);
    table.hidden[2] = pile(&[card(Suit::Clubs, 11)]);
    table.visible[2] = pile(&[card(Suit::Clubs, 5)]);

    let dump = table.to_string();
    let lines: Vec<&str> = dump.lines().collect();
    // draw, waste, 4 foundations, hidden counts, 7 visible piles.
    assert_eq!(lines.len(), 14);
    // Piles are written top-first, tokens space-terminated.
    assert_eq!(lines[0], "2:3 10:2 ");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "2:0 1:0 ");
    assert_eq!(lines[6], "0 0 1 0 0 0 0 ");
    assert_eq!(lines[9], "5:1 ");
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_riffles(250)
        .with_draw_count(1);
    assert_eq!(options.riffles, 250);
    assert_eq!(options.draw_count, 1);

    // Draw-one actually draws one.
    let mut table = Table::empty();
    table.draw = pile(&[card(Suit::Hearts, 2), card(Suit::Hearts, 3)]);
    let mut game = Game::from_table(table, options);
    assert_eq!(game.draw().unwrap(), 1);
    assert_eq!(game.table.waste.cards(), &[card(Suit::Hearts, 3)]);
}
