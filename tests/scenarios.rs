//! End-to-end ladders played through `Game` actions, checked row by row

use wordchain::core::{LadderWord, MoveRating, Word};
use wordchain::display::{BuildError, DisplayInstruction, DisplayType, InstructionBuilder};
use wordchain::game::{Action, Game, GameConfig, KnownLadders, PuzzleState};
use wordchain::ladders::{LADDERS, loader::ladders_from_slice};
use wordchain::logging::Quiet;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn game(start: &str, target: &str) -> Game<KnownLadders> {
    let finder = KnownLadders::new(ladders_from_slice(LADDERS));
    Game::new(finder, word(start), word(target), GameConfig::default()).unwrap()
}

fn play(game: &mut Game<KnownLadders>, action: &str) -> MoveRating {
    game.apply(action.parse().unwrap()).unwrap()
}

fn rows(game: &Game<KnownLadders>) -> Vec<String> {
    let rows = game.instructions().unwrap();
    check_properties(game.state(), &rows);
    rows.iter().map(ToString::to_string).collect()
}

fn check_properties(state: &PuzzleState, rows: &[DisplayInstruction]) {
    let again = InstructionBuilder::with_logger(&Quiet).build(state).unwrap();
    assert_eq!(rows, again.as_slice(), "building twice differs");

    assert!(rows[0].is_start_word);
    assert_eq!(rows.iter().filter(|r| r.is_start_word).count(), 1);
    assert_eq!(rows.iter().filter(|r| r.show_par_line).count(), 1);

    let active = rows.iter().filter(|r| r.display_type.is_active()).count();
    assert_eq!(active, usize::from(!state.is_over()));

    for row in rows {
        assert!(row.change_position <= row.word.len());
    }

    // every played and remaining word gets one row, except that an open
    // space stands in for the next word
    let expected = if state.reached_target() {
        state.played_words().len()
    } else {
        state.played_words().len() + state.unplayed_words().len()
            - usize::from(state.has_pending_hole() && !state.is_over())
    };
    assert_eq!(rows.len(), expected, "row count");
}

#[test]
fn corn_to_adore() {
    let mut game = game("corn", "adore");
    assert_eq!(
        rows(&game),
        [
            "(add,word:CORN,start)",
            "(future,word:ACORN,changePosition:2)",
            "(future,word:ADORN,changePosition:5)",
            "(target,word:ADORE,moveRating:good,par)",
        ]
    );

    assert_eq!(play(&mut game, "+0"), MoveRating::NoRating);
    assert_eq!(
        rows(&game),
        [
            "(played,word:CORN,start)",
            "(after-add,word:?CORN,changePosition:2)",
            "(future,word:ADORN,changePosition:5)",
            "(target,word:ADORE,moveRating:good,par)",
        ]
    );

    assert_eq!(play(&mut game, "1=A"), MoveRating::GoodMove);
    assert_eq!(
        rows(&game),
        [
            "(played,word:CORN,start)",
            "(change,word:ACORN,changePosition:2,moveRating:good)",
            "(after-change,word:A?ORN,changePosition:5)",
            "(target,word:ADORE,moveRating:good,par)",
        ]
    );

    assert_eq!(play(&mut game, "2=D"), MoveRating::GoodMove);
    assert_eq!(
        rows(&game),
        [
            "(played,word:CORN,start)",
            "(played,word:ACORN,moveRating:good)",
            "(change,word:ADORN,changePosition:5,moveRating:good)",
            "(after-change,word:ADOR?,par)",
        ]
    );

    assert_eq!(play(&mut game, "5=E"), MoveRating::GoodMove);
    assert_eq!(
        rows(&game),
        [
            "(played,word:CORN,start)",
            "(played,word:ACORN,moveRating:good)",
            "(played,word:ADORN,moveRating:good)",
            "(target,word:ADORE,moveRating:good,par)",
        ]
    );
    assert!(game.state().is_over());
    assert!(game.state().is_winner());
}

#[test]
fn fresh_game_rows_as_values() {
    let game = game("corn", "adore");
    let expected = vec![
        DisplayInstruction::new(
            LadderWord::plain(&word("corn")),
            DisplayType::PlayedAdd,
            0,
            MoveRating::NoRating,
        )
        .start_word(),
        DisplayInstruction::new(
            LadderWord::plain(&word("acorn")),
            DisplayType::Future,
            2,
            MoveRating::NoRating,
        ),
        DisplayInstruction::new(
            LadderWord::plain(&word("adorn")),
            DisplayType::Future,
            5,
            MoveRating::NoRating,
        ),
        DisplayInstruction::new(
            LadderWord::plain(&word("adore")),
            DisplayType::Target,
            0,
            MoveRating::GoodMove,
        )
        .par_line(),
    ];
    assert_eq!(game.instructions().unwrap(), expected);
}

#[test]
fn hard_to_pear() {
    let mut game = game("hard", "pear");

    play(&mut game, "+1");
    assert_eq!(
        rows(&game),
        [
            "(played,word:HARD,start)",
            "(after-add,word:H?ARD)",
            "(future,word:HEAR,changePosition:1)",
            "(target,word:PEAR,moveRating:good,par)",
        ]
    );

    play(&mut game, "2=E");
    assert_eq!(
        rows(&game),
        [
            "(played,word:HARD,start)",
            "(delete,word:HEARD,moveRating:good)",
            "(future,word:HEAR,changePosition:1)",
            "(target,word:PEAR,moveRating:good,par)",
        ]
    );

    play(&mut game, "-5");
    assert_eq!(
        rows(&game),
        [
            "(played,word:HARD,start)",
            "(played,word:HEARD,moveRating:good)",
            "(change,word:HEAR,changePosition:1,moveRating:good)",
            "(after-change,word:?EAR,par)",
        ]
    );

    play(&mut game, "1=P");
    assert_eq!(
        rows(&game),
        [
            "(played,word:HARD,start)",
            "(played,word:HEARD,moveRating:good)",
            "(played,word:HEAR,moveRating:good)",
            "(target,word:PEAR,moveRating:good,par)",
        ]
    );
}

#[test]
fn fate_to_sop_with_wrong_move() {
    let mut game = game("fate", "sop");
    assert_eq!(game.state().initial_solution().len(), 5);

    play(&mut game, "-4");
    play(&mut game, "1=S");
    assert_eq!(play(&mut game, "3=G"), MoveRating::WrongMove);

    assert_eq!(
        rows(&game),
        [
            "(played,word:FATE,start)",
            "(played,word:FAT,moveRating:good)",
            "(played,word:SAT,moveRating:good)",
            "(change,word:SAG,changePosition:3,moveRating:wrong)",
            "(after-change,word:SA?,changePosition:2,par)",
            "(target,word:SOP,moveRating:good)",
        ]
    );

    play(&mut game, "3=P");
    play(&mut game, "2=O");
    let rows = rows(&game);
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[5], "(target,word:SOP,moveRating:good)");
    assert_eq!(game.state().steps_over_par(), 1);
}

#[test]
fn losing_marks_target_wrong() {
    let finder = KnownLadders::new(ladders_from_slice(LADDERS));
    let mut game = Game::new(finder, word("corn"), word("adore"), GameConfig::new(2)).unwrap();
    game.apply(Action::ShowNext).unwrap();
    game.apply(Action::ShowNext).unwrap();
    assert!(game.state().is_loser());

    assert_eq!(
        rows(&game),
        [
            "(played,word:CORN,start)",
            "(played,word:ACORN,moveRating:shown)",
            "(played,word:ADORN,moveRating:shown)",
            "(target,word:ADORE,moveRating:wrong,par)",
        ]
    );
}

#[test]
fn refused_moves_leave_rows_alone() {
    let mut game = game("corn", "adore");
    let before = rows(&game);

    for action in ["1=B", "-9", "+7"] {
        assert!(game.apply(action.parse().unwrap()).is_err(), "{action} accepted");
    }
    assert_eq!(rows(&game), before);
}

#[test]
fn broken_state_is_reported() {
    let solution = vec![word("corn"), word("acorn"), word("adorn"), word("adore")];
    let state = PuzzleState::restore(
        solution,
        vec![],
        vec![word("adore")],
        GameConfig::default(),
    )
    .unwrap();

    let err = InstructionBuilder::with_logger(&Quiet)
        .build(&state)
        .unwrap_err();
    assert!(matches!(err, BuildError::NotAdjacent(_)));
    assert!(err.to_string().contains("CORN"));
}
