pub mod en_us;

pub use en_us as current;

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

pub fn fill_two(
    template: &str,
    first: impl std::fmt::Display,
    second: impl std::fmt::Display,
) -> String {
    let first_pass = template.replacen("{}", &first.to_string(), 1);
    first_pass.replacen("{}", &second.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_placeholders_in_order() {
        assert_eq!(fill_one(current::pagination::ARIA_GOTO_PAGE_TEMPLATE, 3), "Go to page 3");
        assert_eq!(
            fill_two(current::user_articles::SHOWING_TEMPLATE, 9, 40),
            "Showing: 9 of 40 articles"
        );
    }
}
