// calculate
//
// Input is screened against a character whitelist before the evaluator ever
// sees it. The whitelist alone doesn't make an expression well-formed; the
// evaluator rejects the rest.

use crate::core::Session;
use crate::services::calculator::format_number;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static ALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-*/.()\s]*$").expect("whitelist pattern is valid"));

/// True when every character is a digit, an operator, a dot, a paren or space
pub fn is_allowed(expression: &str) -> bool {
    ALLOWED.is_match(expression)
}

pub fn calculate(session: &mut Session, args: &[String]) -> String {
    if args.is_empty() {
        return "Please provide a calculation".to_string();
    }

    let expression = args.join(" ");
    if !is_allowed(&expression) {
        return "Invalid characters in calculation".to_string();
    }

    match session.services().evaluator.evaluate(&expression) {
        Ok(result) => format!("{} = {}", expression, format_number(result)),
        Err(e) => {
            debug!("Could not evaluate {:?}: {}", expression, e);
            "Invalid calculation".to_string()
        }
    }
}
