//! Validating form fields the way a UI layer would.
//!
//! Run with: `cargo run --example form_field`

use stringcheck::prelude::*;

fn main() {
    // A username field: 3-20 characters, alphanumeric only.
    let mut username = Validator::new("alice99")
        .non_empty()
        .min_length(3)
        .max_length(20)
        .no_special_characters()
        .on_success(|| println!("username ok"))
        .on_error(|message| println!("username rejected: {message}"));
    username.check();

    // An email field, chained straight off the string.
    let mut email = "someone@example.com"
        .validator()
        .non_empty()
        .valid_email()
        .on_success(|| println!("email ok"))
        .on_error(|message| println!("email rejected: {message}"));
    email.check();

    // A payment field in the dashed card format.
    let mut card = Validator::new("4111-1111-1111-1111")
        .credit_card_number_with_dashes()
        .on_error(|message| println!("card rejected: {message}"));
    if card.check() {
        println!("card ok");
    }

    // A quantity field with numeric bounds.
    let mut quantity = Validator::new("15")
        .only_digits()
        .greater_than(0)
        .less_than_or_equal(99)
        .on_error(|message| println!("quantity rejected: {message}"));
    println!("quantity valid: {}", quantity.check());
}
