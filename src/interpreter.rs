/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the statement list, evaluates expressions, manages
/// variable frames and accumulates printed text. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Executes every statement and expression kind.
/// - Opens a variable frame per block and closes it on every exit path.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The environment module holds variables during evaluation.
///
/// Variables live in a stack of frames. Lookups search from the innermost
/// frame outward; declarations only touch the innermost one.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each corresponding to a keyword, literal, identifier or operator. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   position.
/// - Decodes numeric, character, text and boolean literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs the program's statement list.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates grammar and reports syntax errors with position info.
/// - Can resynchronize after an error to report further ones.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and the declared variable types.
/// - Implements truthiness, display conversion and input conversion.
pub mod value;
