use std::io::Cursor;

use mindscreen_cli::prompt::{ConsolePrompter, parse_answer};
use mindscreen_core::Symptom;
use mindscreen_engine::{AnswerProvider, EngineError};

#[test]
fn accepts_yes_and_no_tokens() {
    for yes in ["yes", "y", "YES", "Y", "  Yes \n"] {
        assert_eq!(parse_answer(yes), Some(true), "{yes:?}");
    }
    for no in ["no", "n", "NO", "N", "\tno\r\n"] {
        assert_eq!(parse_answer(no), Some(false), "{no:?}");
    }
}

#[test]
fn rejects_everything_else() {
    for other in ["", "maybe", "yep", "nope", "1", "y e s"] {
        assert_eq!(parse_answer(other), None, "{other:?}");
    }
}

#[test]
fn reprompts_until_valid() {
    let input = Cursor::new("perhaps\n\nY\n");
    let mut prompter = ConsolePrompter::new(input, Vec::new());

    assert!(prompter.ask(Symptom::ExcessiveWorry).unwrap());

    let (_, output) = prompter.into_inner();
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("Do you experience excessive worry?").count(), 3);
    assert_eq!(output.matches("Please answer 'yes' or 'no'").count(), 2);
}

#[test]
fn answers_are_read_in_order() {
    let input = Cursor::new("no\nyes\n");
    let mut prompter = ConsolePrompter::new(input, Vec::new());
    assert!(!prompter.ask(Symptom::Fatigue).unwrap());
    assert!(prompter.ask(Symptom::Nightmares).unwrap());
}

#[test]
fn end_of_input_is_input_closed() {
    let input = Cursor::new("what\n");
    let mut prompter = ConsolePrompter::new(input, Vec::new());
    let err = prompter.ask(Symptom::Cravings).unwrap_err();
    assert!(matches!(err, EngineError::InputClosed(Symptom::Cravings)));
}

#[test]
fn confirm_reports_end_of_input_as_none() {
    let mut prompter = ConsolePrompter::new(Cursor::new(""), Vec::new());
    assert_eq!(prompter.confirm("Run another assessment?").unwrap(), None);
}

#[test]
fn non_utf8_reply_is_asked_again() {
    let input = Cursor::new(vec![0xff, 0xfe, b'\n', b'y', b'e', b's', b'\n']);
    let mut prompter = ConsolePrompter::new(input, Vec::new());

    assert!(prompter.ask(Symptom::ExcessiveWorry).unwrap());

    let (_, output) = prompter.into_inner();
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("Please answer 'yes' or 'no'").count(), 1);
}
