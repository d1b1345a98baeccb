use std::fs::{self};

use sugod::{
    ast::Position,
    check,
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::{core::Context, input::ScriptedInput},
        lexer::scan,
        parser::core::parse_program,
        value::core::Value,
    },
    run, run_with_input,
};
use walkdir::WalkDir;

/// One ```` ```sugod ```` block from the guide with the blocks that follow it.
#[derive(Default)]
struct Example {
    code:   String,
    input:  Vec<String>,
    output: Option<String>,
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let result = run_with_input(&example.code, ScriptedInput::new(example.input));
            let output = result.unwrap_or_else(|e| {
                                   panic!("Example {} in {:?} failed:\n{}\nError: {e}",
                                          i + 1,
                                          path,
                                          example.code)
                               });

            if let Some(expected) = example.output {
                assert_eq!(output.trim_end_matches('\n'),
                           expected.trim_end_matches('\n'),
                           "Example {} in {:?} printed the wrong output",
                           i + 1,
                           path);
            }
        }
    }

    assert!(count > 0, "No sugod examples found in book/src");
}

fn extract_examples(content: &str) -> Vec<Example> {
    let mut examples: Vec<Example> = Vec::new();
    let mut fence: Option<&str> = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if fence.is_none() {
            for kind in ["sugod", "input", "output"] {
                if trimmed.starts_with(&format!("```{kind}")) {
                    fence = Some(kind);
                    buf.clear();
                }
            }
            continue;
        }
        if trimmed.starts_with("```") {
            match fence.take() {
                Some("sugod") => examples.push(Example { code: buf.clone(),
                                                         ..Example::default() }),
                Some("input") => {
                    if let Some(last) = examples.last_mut() {
                        last.input = buf.lines().map(str::to_string).collect();
                    }
                },
                Some(_) => {
                    if let Some(last) = examples.last_mut() {
                        last.output = Some(buf.clone());
                    }
                },
                None => {},
            }
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    examples
}

fn assert_output(src: &str, expected: &str) {
    match run(src) {
        Ok(output) => assert_eq!(output, expected, "Script printed the wrong output"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(output) => panic!("Script succeeded but was expected to fail, printed {output:?}"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match assert_failure(src) {
        Error::Runtime { error, .. } => error,
        other => panic!("Expected a runtime error, got {other}"),
    }
}

fn syntax_error(src: &str) -> ParseError {
    match assert_failure(src) {
        Error::Syntax(error) => error,
        other => panic!("Expected a syntax error, got {other}"),
    }
}

fn lexical_error(src: &str) -> LexError {
    match assert_failure(src) {
        Error::Lexical(error) => error,
        other => panic!("Expected a lexical error, got {other}"),
    }
}

#[test]
fn chained_assignment_and_concatenation() {
    assert_output(r"
        SUGOD
            MUGNA NUMERO x, y, z = 5
            x = y = 4
            IPAKITA: x & z
        KATAPUSAN
    ",
                  "45");
}

#[test]
fn counted_loop_prints_each_iteration() {
    assert_output(r"
        SUGOD
            ALANG SA (MUGNA NUMERO ctr = 1, ctr <= 3, ctr = ctr + 1) {
                IPAKITA: ctr
            }
        KATAPUSAN
    ",
                  "123");
}

#[test]
fn loop_without_parentheses() {
    assert_output(r"
        SUGOD
            MUGNA NUMERO i
            ALANG SA i = 3, i > 0, i = i - 1 {
                IPAKITA: i
            }
            IPAKITA: i
        KATAPUSAN
    ",
                  "3210");
}

#[test]
fn loop_initializer_may_start_with_parentheses() {
    assert_output(r"
        SUGOD
            MUGNA NUMERO i
            ALANG SA (i = 3), i > 0, i = i - 1 {
                IPAKITA: i
            }
            ALANG SA (i = 1), i < 3, (i = i + 1) {
                IPAKITA: i
            }
        KATAPUSAN
    ",
                  "32112");
}

#[test]
fn keyword_prefixed_names_after_multi_word_keywords() {
    assert_output(r#"
        SUGOD
            MUGNA NUMERO DILIGENT = 1
            KUNG DILIGENT > 0 {
                IPAKITA: "yes"
            }
        KATAPUSAN
    "#,
                  "yes");
    assert_output(r"
        SUGOD
            MUGNA NUMERO WALAY = 1
            KUNG WALAY {
                IPAKITA: WALAY
            }
        KATAPUSAN
    ",
                  "1");
    assert_output(r"
        SUGOD
            MUGNA NUMERO SAKTO
            ALANG SA SAKTO = 1, SAKTO <= 2, SAKTO = SAKTO + 1 {
                IPAKITA: SAKTO
            }
        KATAPUSAN
    ",
                  "12");
}

#[test]
fn false_condition_runs_only_else_branch() {
    assert_output(r#"
        SUGOD
            KUNG ("DILI") {
                IPAKITA: "then"
            } KUNG WALA {
                IPAKITA: "else"
            }
        KATAPUSAN
    "#,
                  "else");
}

#[test]
fn else_if_chain_picks_first_match() {
    assert_output(r#"
        SUGOD
            MUGNA NUMERO x = 5
            KUNG x < 3 {
                IPAKITA: "small"
            } KUNG DILI x < 10 {
                IPAKITA: "medium"
            } KUNG DILI x < 100 {
                IPAKITA: "large"
            } KUNG WALA {
                IPAKITA: "huge"
            }
        KATAPUSAN
    "#,
                  "medium");
}

#[test]
fn division_by_zero_is_error() {
    let error = runtime_error("SUGOD IPAKITA: 10 / 0 KATAPUSAN");
    assert!(matches!(error, RuntimeError::DivisionByZero { .. }));

    assert!(matches!(runtime_error("SUGOD IPAKITA: 10 % 0 KATAPUSAN"),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("SUGOD IPAKITA: 1.5 / 0.0 KATAPUSAN"),
                     RuntimeError::DivisionByZero { .. }));
}

#[test]
fn runtime_error_keeps_earlier_output() {
    let error = assert_failure(r#"SUGOD IPAKITA: "before" IPAKITA: 10 / 0 IPAKITA: "after" KATAPUSAN"#);

    assert_eq!(error.category(), "runtime error");
    assert_eq!(error.partial_output(), "before");
}

#[test]
fn declarations_without_initializer_take_zero_values() {
    assert_output(r#"
        SUGOD
            MUGNA NUMERO a
            MUGNA TIPIK b
            MUGNA TINUOD c
            MUGNA LETRA d
            IPAKITA: a & "," & b & "," & c & "," & DILI d
        KATAPUSAN
    "#,
                  "0,0.0,DILI,OO");
}

#[test]
fn shared_initializer_is_bound_to_every_name() {
    assert_output(r"
        SUGOD
            MUGNA NUMERO a, b, c = 2 * 3
            IPAKITA: a & b & c
        KATAPUSAN
    ",
                  "666");
}

#[test]
fn shared_initializer_is_evaluated_once() {
    assert_output(r"
        SUGOD
            MUGNA NUMERO n = 0
            MUGNA NUMERO a, b = n = n + 1
            IPAKITA: a & b & n
        KATAPUSAN
    ",
                  "111");
}

#[test]
fn inner_block_sees_and_updates_outer_variables() {
    assert_output(r"
        SUGOD
            MUGNA NUMERO x = 1
            PUNDOK {
                MUGNA NUMERO y = 2
                x = x + y
            }
            IPAKITA: x
        KATAPUSAN
    ",
                  "3");
}

#[test]
fn block_variables_are_gone_after_the_block() {
    let error = runtime_error(r"
        SUGOD
            PUNDOK {
                MUGNA NUMERO y = 2
            }
            IPAKITA: y
        KATAPUSAN
    ");

    assert!(matches!(error, RuntimeError::UnknownVariable { ref name, .. } if name == "y"));
}

#[test]
fn inner_declaration_shadows_outer_one() {
    assert_output(r"
        SUGOD
            MUGNA NUMERO x = 1
            {
                MUGNA NUMERO x = 9
                IPAKITA: x
            }
            IPAKITA: x
        KATAPUSAN
    ",
                  "91");
}

#[test]
fn loop_variable_is_discarded_after_loop() {
    let error = runtime_error(r"
        SUGOD
            ALANG SA (MUGNA NUMERO i = 0, i < 2, i = i + 1) {}
            IPAKITA: i
        KATAPUSAN
    ");

    assert!(matches!(error, RuntimeError::UnknownVariable { ref name, .. } if name == "i"));
}

#[test]
fn assignment_to_undeclared_variable_is_error() {
    let error = runtime_error("SUGOD ghost = 1 KATAPUSAN");
    assert_eq!(error,
               RuntimeError::UnknownVariable { name: "ghost".to_string(),
                                               pos:  Position::new(1, 7), });
}

#[test]
fn stringify_rules() {
    assert_output(r#"SUGOD IPAKITA: "OO" KATAPUSAN"#, "OO");
    assert_output(r#"SUGOD IPAKITA: "DILI" KATAPUSAN"#, "DILI");
    assert_output("SUGOD IPAKITA: 5 & 'c' KATAPUSAN", "5c");
    assert_output(r#"SUGOD IPAKITA: "a" & $ & "b" KATAPUSAN"#, "a\nb");
    assert_output("SUGOD IPAKITA: [#] & [[] & []] KATAPUSAN", "#[]");
    assert_output("SUGOD IPAKITA: 2.5 * 2 KATAPUSAN", "5.0");
    assert_output("SUGOD IPAKITA: 7 / 2.0 KATAPUSAN", "3.5");
    assert_output("SUGOD IPAKITA: 7 / 2 KATAPUSAN", "3");
}

#[test]
fn arithmetic_precedence() {
    assert_output("SUGOD IPAKITA: 1 + 2 * 3 KATAPUSAN", "7");
    assert_output("SUGOD IPAKITA: (1 + 2) * 3 KATAPUSAN", "9");
    assert_output("SUGOD IPAKITA: -2 + 5 KATAPUSAN", "3");
    assert_output("SUGOD IPAKITA: +4 - -1 KATAPUSAN", "5");
    assert_output("SUGOD IPAKITA: 10 % 4 + 1 KATAPUSAN", "3");
    assert_output("SUGOD IPAKITA: 1 + 2 & 3 + 4 KATAPUSAN", "37");
}

#[test]
fn logical_and_comparisons() {
    assert_output("SUGOD IPAKITA: 1 < 2 UG 3 > 4 KATAPUSAN", "DILI");
    assert_output("SUGOD IPAKITA: 1 < 2 O 3 > 4 KATAPUSAN", "OO");
    assert_output(r#"SUGOD IPAKITA: DILI "OO" KATAPUSAN"#, "DILI");
    assert_output("SUGOD IPAKITA: 1 <> 2 & 1 != 1 KATAPUSAN", "OODILI");
    assert_output("SUGOD IPAKITA: 2 >= 2 & 'a' < 'b' KATAPUSAN", "OOOO");
    assert_output("SUGOD IPAKITA: 1 == 1.0 KATAPUSAN", "DILI");
    assert_output(r#"SUGOD IPAKITA: "abc" == "abc" KATAPUSAN"#, "OO");
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_output(r#"
        SUGOD
            MUGNA NUMERO x = 0
            MUGNA TINUOD t = "DILI" UG (x = 5) > 0
            IPAKITA: t & x
        KATAPUSAN
    "#,
                  "DILI5");
}

#[test]
fn comments_are_ignored() {
    assert_output(r"
        -- leading comment
        SUGOD
            MUGNA NUMERO x = 2 -- trailing comment
            -- IPAKITA: 99
            IPAKITA: x
        KATAPUSAN
    ",
                  "2");
}

#[test]
fn read_assigns_converted_fields() {
    let source = r"
        SUGOD
            MUGNA NUMERO n
            MUGNA LETRA c
            MUGNA TIPIK d
            MUGNA TINUOD b
            DAWAT: n, c, d, b
            IPAKITA: n & c & d & b
        KATAPUSAN
    ";

    let output = run_with_input(source, ScriptedInput::new(["7, x , 1.5,OO"])).unwrap();
    assert_eq!(output, "7x1.5OO");
}

#[test]
fn read_errors() {
    let source = "SUGOD MUGNA NUMERO a, b DAWAT: a, b KATAPUSAN";

    let error = run_with_input(source, ScriptedInput::new(["1"])).unwrap_err();
    assert!(matches!(error,
                     Error::Runtime { error: RuntimeError::InputCountMismatch { expected: 2,
                                                                                found:    1,
                                                                                .. },
                                      .. }));

    let error = run_with_input(source, ScriptedInput::new(["1, x"])).unwrap_err();
    assert!(matches!(error,
                     Error::Runtime { error: RuntimeError::InvalidInput { .. },
                                      .. }));

    assert!(matches!(runtime_error(source), RuntimeError::InputUnavailable { .. }));
}

#[test]
fn read_is_all_or_nothing() {
    let tokens = scan("SUGOD MUGNA NUMERO a, b = 1 DAWAT: a, b KATAPUSAN").unwrap();
    let program = parse_program(&tokens).unwrap();

    let mut context = Context::with_input(ScriptedInput::new(["5, x"]));
    assert!(context.execute(&program).is_err());

    assert_eq!(context.env.read("a", Position::default()), Ok(Value::Integer(1)));
    assert_eq!(context.env.read("b", Position::default()), Ok(Value::Integer(1)));
}

#[test]
fn one_initializer_covers_the_whole_name_list() {
    assert!(matches!(syntax_error("SUGOD MUGNA NUMERO a = 1, b = 2 KATAPUSAN"),
                     ParseError::ExpectedExpression { .. }));
}

#[test]
fn runtime_type_errors() {
    assert!(matches!(runtime_error(r#"SUGOD IPAKITA: "a" + 1 KATAPUSAN"#),
                     RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error(r#"SUGOD IPAKITA: -"a" KATAPUSAN"#),
                     RuntimeError::ExpectedNumber { .. }));
    assert!(matches!(runtime_error(r#"SUGOD IPAKITA: "OO" < "DILI" KATAPUSAN"#),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(runtime_error("SUGOD IPAKITA: 9223372036854775807 + 1 KATAPUSAN"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn runtime_errors_report_position() {
    let error = assert_failure("SUGOD\n  IPAKITA: x\nKATAPUSAN");

    assert_eq!(error.to_string(),
               "Error on line 2, column 12: Unknown variable 'x'.");
    assert_eq!(error.position(), Position::new(2, 12));
}

#[test]
fn every_stage_reports_position() {
    assert_eq!(assert_failure("SUGOD\n  IPAKITA: 1 ! 2\nKATAPUSAN").position(),
               Position::new(2, 14));
    assert_eq!(assert_failure("SUGOD\n  IPAKITA 1\nKATAPUSAN").position(),
               Position::new(2, 11));
    assert_eq!(assert_failure("SUGOD\n  IPAKITA: 1 / 0\nKATAPUSAN").position(),
               Position::new(2, 14));
}

#[test]
fn unrepresentable_integer_promotion_is_error() {
    assert!(matches!(runtime_error("SUGOD IPAKITA: 9007199254740993 + 0.5 KATAPUSAN"),
                     RuntimeError::PrecisionLoss { .. }));
}

#[test]
fn program_markers_are_required() {
    assert!(matches!(syntax_error("IPAKITA: 1 KATAPUSAN"),
                     ParseError::MissingBegin { .. }));
    assert!(matches!(syntax_error("SUGOD IPAKITA: 1"), ParseError::MissingEnd { .. }));
    assert!(matches!(syntax_error("SUGOD KATAPUSAN IPAKITA: 1"),
                     ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn empty_program_prints_nothing() {
    assert_output("SUGOD KATAPUSAN", "");
}

#[test]
fn syntax_errors() {
    assert!(matches!(syntax_error("SUGOD 1 = 2 KATAPUSAN"),
                     ParseError::InvalidAssignmentTarget { .. }));
    assert!(matches!(syntax_error("SUGOD IPAKITA 1 KATAPUSAN"),
                     ParseError::ExpectedToken { .. }));
    assert!(matches!(syntax_error("SUGOD MUGNA ENTERO x KATAPUSAN"),
                     ParseError::ExpectedType { .. }));
    assert!(matches!(syntax_error("SUGOD MUGNA NUMERO = 1 KATAPUSAN"),
                     ParseError::ExpectedIdentifier { .. }));
    assert!(matches!(syntax_error("SUGOD IPAKITA: KATAPUSAN"),
                     ParseError::ExpectedExpression { .. }));
    assert!(matches!(syntax_error("SUGOD KUNG 1 IPAKITA: 1 KATAPUSAN"),
                     ParseError::ExpectedToken { .. }));
    assert!(matches!(syntax_error("SUGOD ALANG SA (MUGNA NUMERO i = 0 i < 3, i = i + 1) {} KATAPUSAN"),
                     ParseError::ExpectedToken { .. }));
    assert!(matches!(syntax_error("SUGOD { IPAKITA: 1 KATAPUSAN"),
                     ParseError::ExpectedToken { .. }));
}

#[test]
fn syntax_error_prevents_any_output() {
    let error = assert_failure("SUGOD IPAKITA: 1 IPAKITA 2 KATAPUSAN");
    assert_eq!(error.category(), "syntax error");
    assert_eq!(error.partial_output(), "");
}

#[test]
fn lexical_errors() {
    assert!(matches!(lexical_error("SUGOD IPAKITA: 1 ! 2 KATAPUSAN"),
                     LexError::LoneBang { .. }));
    assert!(matches!(lexical_error("SUGOD IPAKITA: @ KATAPUSAN"),
                     LexError::UnexpectedCharacter { character: '@', .. }));
    assert!(matches!(lexical_error("SUGOD IPAKITA: \"open KATAPUSAN"),
                     LexError::UnterminatedText { .. }));
    assert!(matches!(lexical_error("SUGOD IPAKITA: 'ab' KATAPUSAN"),
                     LexError::UnterminatedCharacter { .. }));
    assert!(matches!(lexical_error("SUGOD IPAKITA: 99999999999999999999 KATAPUSAN"),
                     LexError::LiteralTooLarge { .. }));
    assert_eq!(assert_failure("SUGOD IPAKITA: @ KATAPUSAN").category(),
               "lexical error");
}

#[test]
fn check_reports_every_syntax_error() {
    let errors = check(r"
        SUGOD
            IPAKITA 1
            MUGNA NUMERO = 2
            IPAKITA: 3
            PUNDOK {
                MUGNA LETRA
            }
        KATAPUSAN
    ").unwrap_err();

    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.category() == "syntax error"));
}

#[test]
fn check_accepts_valid_programs() {
    let contents = fs::read_to_string("tests/example.sugod").unwrap();
    assert!(check(&contents).is_ok());
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.sugod").unwrap();
    assert_output(&contents, "total: 15\nodd");
}
